use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{FinancialInput, Prediction};

/// State carried from the entry form to the results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationPayload {
    pub prediction: Prediction,
    #[serde(rename = "formData")]
    pub form_data: FinancialInput,
}

/// One-shot hand-off slot. A payload can be taken exactly once; a results
/// view opened afterwards finds nothing and redirects.
#[derive(Debug, Default)]
pub struct Navigation {
    pending: Option<NavigationPayload>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        payload: NavigationPayload,
    ) {
        debug!("navigation payload stored");
        self.pending = Some(payload);
    }

    pub fn take(&mut self) -> Option<NavigationPayload> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::RiskCategory;

    fn payload() -> NavigationPayload {
        NavigationPayload {
            prediction: Prediction {
                financial_score: 72.0,
                risk_category: RiskCategory::Moderate,
                probabilities: None,
            },
            form_data: FinancialInput::default(),
        }
    }

    #[test]
    fn payload_is_taken_once() {
        let mut nav = Navigation::new();
        nav.push(payload());

        assert!(nav.has_pending());
        assert_eq!(nav.take(), Some(payload()));
        assert_eq!(nav.take(), None);
    }

    #[test]
    fn payload_serializes_with_form_data_key() {
        let json = serde_json::to_value(payload()).unwrap();

        assert_eq!(json["prediction"]["risk_category"], "Moderate");
        assert_eq!(json["formData"]["loan_emi"], 0.0);
    }
}
