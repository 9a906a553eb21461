pub mod form;
pub mod insights;
pub mod locale;
pub mod models;
pub mod service;
pub mod session;

pub use locale::Locale;
pub use models::*;
pub use service::{ScoringService, ServiceError};
