use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FinancialInput, HistoryRecord, Prediction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (DNS, refused, reset, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Remote scoring and history endpoints.
///
/// Implementations must not retry on their own; a failed call is reported
/// to the user and retried only on their next submit.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// `POST /predict`.
    async fn predict(
        &self,
        input: &FinancialInput,
    ) -> Result<Prediction, ServiceError>;

    /// `GET /history`, in the order the service returns it.
    async fn history(&self) -> Result<Vec<HistoryRecord>, ServiceError>;
}
