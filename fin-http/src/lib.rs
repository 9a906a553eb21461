pub mod client;
pub mod factory;

pub use client::HttpScoringService;
pub use factory::HttpServiceFactory;
