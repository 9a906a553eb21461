use tracing::{info, warn};

use crate::insights::{ChartSet, Recommendation, RiskTone, advisory_text, recommendations, tone};
use crate::models::{FinancialInput, HistoryRecord, Prediction};
use crate::service::{ScoringService, ServiceError};
use crate::session::navigation::NavigationPayload;

/// Number of history rows the results view shows.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    NotLoaded,
    Loaded(Vec<HistoryRecord>),
    Failed(ServiceError),
}

/// Everything the results view renders, derived from one navigation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsModel {
    pub prediction: Prediction,
    pub input: FinancialInput,
    pub charts: ChartSet,
    pub recommendations: Vec<Recommendation>,
    pub history: HistoryState,
}

impl ResultsModel {
    /// Builds the view from the incoming payload.
    ///
    /// `None` means the view was opened without a prior submission; the
    /// caller must redirect to the entry form and issue no requests.
    pub fn open(payload: Option<NavigationPayload>) -> Option<Self> {
        let Some(NavigationPayload {
            prediction,
            form_data,
        }) = payload
        else {
            warn!("results opened without a submission; redirecting to form");
            return None;
        };
        Some(Self {
            charts: ChartSet::build(&form_data, &prediction),
            recommendations: recommendations(&form_data),
            prediction,
            input: form_data,
            history: HistoryState::NotLoaded,
        })
    }

    pub fn tone(&self) -> RiskTone {
        tone(&self.prediction.risk_category)
    }

    pub fn advisory(&self) -> Option<&'static str> {
        advisory_text(&self.prediction.risk_category)
    }

    /// Fetches past records once and keeps the first [`HISTORY_LIMIT`].
    pub async fn load_history(
        &mut self,
        service: &dyn ScoringService,
    ) {
        self.history = match service.history().await {
            Ok(mut records) => {
                records.truncate(HISTORY_LIMIT);
                info!(rows = records.len(), "history loaded");
                HistoryState::Loaded(records)
            }
            Err(e) => {
                warn!(error = %e, "history unavailable");
                HistoryState::Failed(e)
            }
        };
    }
}
