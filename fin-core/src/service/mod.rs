pub mod factory;
pub mod scoring;

pub use factory::{ServiceConfig, ServiceFactory, ServiceRegistry};
pub use scoring::{ScoringService, ServiceError};
