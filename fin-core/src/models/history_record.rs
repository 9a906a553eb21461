use serde::{Deserialize, Serialize};

use super::RiskCategory;

/// One entry of `GET /history`.
///
/// Only the income, expenses, score, category and timestamp columns are
/// guaranteed; the remaining columns are present when the service stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub loan_emi: Option<f64>,
    #[serde(default)]
    pub savings: Option<f64>,
    #[serde(default)]
    pub investments: Option<f64>,
    pub financial_score: f64,
    pub risk_category: RiskCategory,
    /// Timestamp text as stored by the service; see
    /// [`crate::Locale::format_timestamp`] for the accepted forms.
    pub created_at: String,
}
