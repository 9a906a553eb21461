use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk label returned by the scoring service.
///
/// Labels the client does not know are kept verbatim in [`RiskCategory::Other`]
/// and rendered with a neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskCategory {
    Good,
    Moderate,
    Risky,
    Other(String),
}

impl RiskCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Risky => "Risky",
            Self::Other(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Good" => Self::Good,
            "Moderate" => Self::Moderate,
            "Risky" => Self::Risky,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RiskCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<RiskCategory> for String {
    fn from(value: RiskCategory) -> Self {
        match value {
            RiskCategory::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Score in the 0–100 range (not enforced by the client).
    pub financial_score: f64,
    pub risk_category: RiskCategory,
    /// Per-category probability in percent, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
}
