#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fin_core::{FinancialInput, HistoryRecord, Prediction, RiskCategory, ScoringService, ServiceError};

/// Scoring stub with canned replies that counts every call.
pub struct StubService {
    pub prediction: Result<Prediction, ServiceError>,
    pub history: Result<Vec<HistoryRecord>, ServiceError>,
    /// Inputs with this income are refused with a server error.
    pub fail_income: Option<f64>,
    pub predict_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub seen: Mutex<Vec<FinancialInput>>,
}

impl StubService {
    pub fn scoring(
        score: f64,
        category: RiskCategory,
    ) -> Self {
        Self {
            prediction: Ok(Prediction {
                financial_score: score,
                risk_category: category,
                probabilities: None,
            }),
            history: Ok(Vec::new()),
            fail_income: None,
            predict_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            prediction: Err(ServiceError::Status {
                status: 500,
                body: "Model not loaded".to_string(),
            }),
            ..Self::scoring(0.0, RiskCategory::Good)
        }
    }

    pub fn with_history(
        mut self,
        rows: usize,
    ) -> Self {
        self.history = Ok((0..rows).map(|i| history_row(i as i64)).collect());
        self
    }

    pub fn predicts(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn history_fetches(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoringService for StubService {
    async fn predict(
        &self,
        input: &FinancialInput,
    ) -> Result<Prediction, ServiceError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(*input);
        if self.fail_income == Some(input.monthly_income) {
            return Err(ServiceError::Transport("connection reset".to_string()));
        }
        self.prediction.clone()
    }

    async fn history(&self) -> Result<Vec<HistoryRecord>, ServiceError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history.clone()
    }
}

pub fn history_row(id: i64) -> HistoryRecord {
    HistoryRecord {
        id: Some(id),
        monthly_income: 80000.0,
        monthly_expenses: 40000.0,
        loan_emi: Some(10000.0),
        savings: Some(20000.0),
        investments: Some(10000.0),
        financial_score: 70.0 + id as f64,
        risk_category: RiskCategory::Good,
        created_at: format!("2025-02-{:02} 10:00:00", id + 1),
    }
}
