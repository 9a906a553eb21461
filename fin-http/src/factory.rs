use std::time::Duration;

use async_trait::async_trait;
use fin_core::ScoringService;
use fin_core::ServiceError;
use fin_core::service::{ServiceConfig, ServiceFactory};
use tracing::info;

use crate::client::HttpScoringService;

/// [`ServiceFactory`] for the JSON-over-HTTP scoring service.
///
/// ```rust,no_run
/// use fin_core::service::ServiceRegistry;
/// use fin_http::HttpServiceFactory;
///
/// let mut registry = ServiceRegistry::new();
/// registry.register(Box::new(HttpServiceFactory));
/// ```
pub struct HttpServiceFactory;

#[async_trait]
impl ServiceFactory for HttpServiceFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn ScoringService>, ServiceError> {
        let service = HttpScoringService::new(
            &config.base_url,
            config.connect_timeout_secs.map(Duration::from_secs),
        )?;
        info!(base_url = service.base_url(), "scoring service configured");
        Ok(Box::new(service))
    }
}
