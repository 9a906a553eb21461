use tracing::{error, info, warn};

use crate::form::{FieldErrors, FormState};
use crate::service::{ScoringService, ServiceError};
use crate::session::navigation::NavigationPayload;

/// The single alert shown for any remote scoring failure.
pub const SUBMIT_FAILURE_ALERT: &str = "Failed to complete financial analysis. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request is already in flight; nothing was done.
    Busy,
    /// Validation failed; the form now carries these errors.
    Invalid(FieldErrors),
    /// The scoring call failed; the form is left populated.
    Failed {
        alert: &'static str,
        cause: ServiceError,
    },
    /// Scored; the form has been cleared.
    Scored(NavigationPayload),
}

/// Runs validation → predict → hand-off for the current form.
///
/// The form is marked as submitting for the duration of the request. On
/// success the returned payload is the only copy of the result and the form
/// is cleared; on failure the form keeps every value.
pub async fn submit(
    form: &mut FormState,
    service: &dyn ScoringService,
) -> SubmitOutcome {
    if form.is_submitting() {
        warn!("submit ignored: request already in flight");
        return SubmitOutcome::Busy;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    info!(
        income = input.monthly_income,
        allocation = input.total_allocation(),
        "submitting for analysis"
    );
    form.set_submitting(true);
    let result = service.predict(&input).await;
    form.set_submitting(false);

    match result {
        Ok(prediction) => {
            info!(
                score = prediction.financial_score,
                category = %prediction.risk_category,
                "analysis complete"
            );
            form.clear();
            SubmitOutcome::Scored(NavigationPayload {
                prediction,
                form_data: input,
            })
        }
        Err(cause) => {
            error!(error = %cause, "analysis failed");
            SubmitOutcome::Failed {
                alert: SUBMIT_FAILURE_ALERT,
                cause,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::ValidationError;
    use crate::locale::Locale;
    use crate::models::{FieldName, FinancialInput, HistoryRecord, Prediction, RiskCategory};

    /// Records every input it is asked to score and replies with a fixed result.
    struct RecordingService {
        reply: Result<Prediction, ServiceError>,
        seen: Mutex<Vec<FinancialInput>>,
    }

    impl RecordingService {
        fn replying(reply: Result<Prediction, ServiceError>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<FinancialInput> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScoringService for RecordingService {
        async fn predict(
            &self,
            input: &FinancialInput,
        ) -> Result<Prediction, ServiceError> {
            self.seen.lock().unwrap().push(*input);
            self.reply.clone()
        }
        async fn history(&self) -> Result<Vec<HistoryRecord>, ServiceError> {
            Ok(Vec::new())
        }
    }

    fn moderate() -> Prediction {
        Prediction {
            financial_score: 72.0,
            risk_category: RiskCategory::Moderate,
            probabilities: None,
        }
    }

    fn filled_form(investments: &str) -> FormState {
        let mut form = FormState::new(Locale::EnIn);
        form.type_text(FieldName::Income, "100000");
        form.type_text(FieldName::Expenses, "50000");
        form.type_text(FieldName::LoanPayment, "20000");
        form.type_text(FieldName::Savings, "20000");
        form.type_text(FieldName::Investments, investments);
        form
    }

    #[tokio::test]
    async fn valid_form_is_scored_and_cleared() {
        let service = RecordingService::replying(Ok(moderate()));
        let mut form = filled_form("10000");

        let outcome = submit(&mut form, &service).await;

        let payload = match outcome {
            SubmitOutcome::Scored(payload) => payload,
            other => panic!("expected Scored, got {other:?}"),
        };
        assert_eq!(payload.prediction, moderate());
        assert_eq!(payload.form_data.monthly_income, 100000.0);
        assert_eq!(payload.form_data.investments, 10000.0);
        assert_eq!(service.calls().len(), 1);
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn invalid_form_never_calls_service() {
        let service = RecordingService::replying(Ok(moderate()));
        let mut form = filled_form("5000");

        let outcome = submit(&mut form, &service).await;

        let errors = match outcome {
            SubmitOutcome::Invalid(errors) => errors,
            other => panic!("expected Invalid, got {other:?}"),
        };
        assert_eq!(errors.len(), 5);
        assert!(service.calls().is_empty());
        assert_eq!(
            form.error(FieldName::Savings),
            Some(ValidationError::SumMismatch)
        );
    }

    #[tokio::test]
    async fn service_failure_keeps_form_populated() {
        let service = RecordingService::replying(Err(ServiceError::Status {
            status: 500,
            body: "Model not loaded".to_string(),
        }));
        let mut form = filled_form("10000");

        let outcome = submit(&mut form, &service).await;

        match outcome {
            SubmitOutcome::Failed { alert, cause } => {
                assert_eq!(alert, SUBMIT_FAILURE_ALERT);
                assert!(matches!(cause, ServiceError::Status { status: 500, .. }));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(form.value(FieldName::Income), "1,00,000");
        assert!(!form.is_submitting());
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn in_flight_submit_is_refused() {
        let service = RecordingService::replying(Ok(moderate()));
        let mut form = filled_form("10000");
        form.set_submitting(true);

        let outcome = submit(&mut form, &service).await;

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(service.calls().is_empty());
    }
}
