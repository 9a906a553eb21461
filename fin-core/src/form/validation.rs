//! Full validation pass and the narrower real-time ceiling predicate.
//!
//! Field checks run in a fixed order and stop at the first failure:
//!
//! | Step | Condition                                   | Error            |
//! |------|---------------------------------------------|------------------|
//! | 1    | empty after stripping separators            | `Required`       |
//! | 2    | not a finite number                         | `InvalidNumber`  |
//! | 3    | negative                                    | `Negative`       |
//! | 4    | zero income                                 | `ZeroIncome`     |
//! | 5    | above [`SANITY_CEILING`]                    | `ExceedsLimit`   |
//! | 6    | income/expenses above [`REALTIME_CEILING`]  | `AboveCeiling`   |
//!
//! After the per-field checks, a budget whose allocation differs from income
//! by more than [`SUM_TOLERANCE`] flags every field with `SumMismatch`.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use crate::form::normalize::strip_separators;
use crate::form::values::FormValues;
use crate::models::{FieldName, FinancialInput};

/// Ceiling enforced on income and expenses on every edit and on submit.
pub const REALTIME_CEILING: f64 = 150_000.0;

/// Absolute ceiling for any field.
pub const SANITY_CEILING: f64 = 10_000_000_000.0;

/// Allowed drift between income and total allocation.
pub const SUM_TOLERANCE: f64 = 1.0;

/// User-facing validation failure for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Value cannot be negative")]
    Negative,

    #[error("Monthly income must be greater than zero")]
    ZeroIncome,

    #[error("Value exceeds the maximum allowed limit")]
    ExceedsLimit,

    #[error("Value cannot exceed 150,000")]
    AboveCeiling,

    #[error("Expenses, loan EMI, savings and investments must add up to monthly income")]
    SumMismatch,
}

/// Complete error map produced by one validation pass. A field without an
/// entry passes.
pub type FieldErrors = BTreeMap<FieldName, ValidationError>;

/// Real-time bound predicate applied on each edit of a bounded field.
pub fn check_realtime_ceiling(
    field: FieldName,
    value: f64,
) -> Option<ValidationError> {
    (field.has_realtime_ceiling() && value > REALTIME_CEILING)
        .then_some(ValidationError::AboveCeiling)
}

/// Checks one field's text in isolation and returns its numeric value.
pub fn validate_field(
    field: FieldName,
    text: &str,
) -> Result<f64, ValidationError> {
    let raw = strip_separators(text.trim());
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidNumber)?;
    if value < 0.0 {
        return Err(ValidationError::Negative);
    }
    if value == 0.0 && field == FieldName::Income {
        return Err(ValidationError::ZeroIncome);
    }
    if value > SANITY_CEILING {
        return Err(ValidationError::ExceedsLimit);
    }
    if let Some(error) = check_realtime_ceiling(field, value) {
        return Err(error);
    }
    Ok(value)
}

/// Runs the full validation pass over all five fields.
///
/// Returns the normalized record when every field passes and the budget is
/// reconciled, otherwise the complete error map.
pub fn validate(values: &FormValues) -> Result<FinancialInput, FieldErrors> {
    let mut input = FinancialInput::default();
    let mut errors = FieldErrors::new();

    for field in FieldName::ALL {
        match validate_field(field, values.get(field)) {
            Ok(value) => input.set(field, value),
            Err(error) => {
                errors.insert(field, error);
            }
        }
    }

    if sum_mismatch(values) {
        for field in FieldName::ALL {
            errors.insert(field, ValidationError::SumMismatch);
        }
    }

    if errors.is_empty() {
        Ok(input)
    } else {
        warn!(failed = errors.len(), "validation failed");
        Err(errors)
    }
}

/// Cross-field rule. Only applies when every field parses, income is
/// positive and something has been allocated.
fn sum_mismatch(values: &FormValues) -> bool {
    let parsed: Option<Vec<f64>> = FieldName::ALL
        .iter()
        .map(|f| strip_separators(values.get(*f).trim()).parse::<f64>().ok())
        .collect();
    let Some(parsed) = parsed else {
        return false;
    };
    let income = parsed[0];
    let allocation: f64 = parsed[1..].iter().sum();
    income > 0.0 && allocation > 0.0 && (income - allocation).abs() > SUM_TOLERANCE
}
