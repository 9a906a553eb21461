use crate::models::RiskCategory;

/// Visual treatment of a risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTone {
    Positive,
    Caution,
    Danger,
    Neutral,
}

pub fn tone(category: &RiskCategory) -> RiskTone {
    match category {
        RiskCategory::Good => RiskTone::Positive,
        RiskCategory::Moderate => RiskTone::Caution,
        RiskCategory::Risky => RiskTone::Danger,
        RiskCategory::Other(_) => RiskTone::Neutral,
    }
}

/// Advisory paragraph for a known category; `None` for unrecognized labels.
pub fn advisory_text(category: &RiskCategory) -> Option<&'static str> {
    match category {
        RiskCategory::Good => Some(
            "Your finances are in good shape. Keep up your current savings and investment habits.",
        ),
        RiskCategory::Moderate => Some(
            "Your financial health is moderate. Trimming discretionary spending and raising your savings rate will strengthen it.",
        ),
        RiskCategory::Risky => Some(
            "Your finances need attention. Focus on reducing debt and building an emergency fund.",
        ),
        RiskCategory::Other(_) => None,
    }
}
