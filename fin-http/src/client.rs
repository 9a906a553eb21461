use std::time::Duration;

use async_trait::async_trait;
use fin_core::{FinancialInput, HistoryRecord, Prediction, ScoringService, ServiceError};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// [`ScoringService`] over HTTP/JSON.
///
/// The client carries no request timeout: a call waits as long as the
/// transport allows. Only the connect phase can be bounded.
#[derive(Debug, Clone)]
pub struct HttpScoringService {
    client: Client,
    base_url: String,
}

impl HttpScoringService {
    /// # Errors
    /// [`ServiceError::Configuration`] when `base_url` is not an absolute
    /// `http`/`https` URL or the client cannot be built.
    pub fn new(
        base_url: &str,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let url = Url::parse(base_url).map_err(|e| {
            ServiceError::Configuration(format!("invalid base url '{base_url}': {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ServiceError::Configuration(format!(
                "unsupported scheme '{}' in base url '{base_url}'",
                url.scheme()
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(
        &self,
        path: &str,
    ) -> String {
        format!("{}/{path}", self.base_url)
    }
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    if e.is_decode() {
        ServiceError::Decode(e.to_string())
    } else {
        ServiceError::Transport(e.to_string())
    }
}

/// Maps a non-2xx status to [`ServiceError::Status`], otherwise decodes the
/// JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn predict(
        &self,
        input: &FinancialInput,
    ) -> Result<Prediction, ServiceError> {
        let url = self.endpoint("predict");
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn history(&self) -> Result<Vec<HistoryRecord>, ServiceError> {
        let url = self.endpoint("history");
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}
