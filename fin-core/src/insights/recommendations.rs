//! Rule-based recommendations derived from the submitted budget.
//!
//! | Rule                               | Recommendation     |
//! |------------------------------------|--------------------|
//! | expenses / income > 0.6            | `ReduceExpenses`   |
//! | loan EMI / income > 0.3            | `ReduceDebt`       |
//! | savings / income < 0.2             | `IncreaseSavings`  |
//! | investments < 0.5 × savings        | `InvestMore`       |
//! | none of the above                  | `Balanced`         |
//!
//! Ratios are compared in decimal arithmetic so that a budget sitting exactly
//! on a boundary (e.g. expenses of 60,000 against income of 1,00,000) is not
//! pushed across it by binary rounding.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;

use crate::models::FinancialInput;

const EXPENSE_RATIO_LIMIT: Decimal = dec!(0.6);
const DEBT_RATIO_LIMIT: Decimal = dec!(0.3);
const SAVINGS_RATIO_FLOOR: Decimal = dec!(0.2);
const INVESTMENT_SHARE_OF_SAVINGS: Decimal = dec!(0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ReduceExpenses,
    ReduceDebt,
    IncreaseSavings,
    InvestMore,
    Balanced,
}

impl Recommendation {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ReduceExpenses => "Reduce expenses",
            Self::ReduceDebt => "Lower your debt burden",
            Self::IncreaseSavings => "Increase savings",
            Self::InvestMore => "Invest more",
            Self::Balanced => "Well balanced",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ReduceExpenses => {
                "Your expenses are above 60% of your income. Look for recurring costs you can cut."
            }
            Self::ReduceDebt => {
                "Loan EMIs take more than 30% of your income. Consider prepaying or refinancing high-interest loans."
            }
            Self::IncreaseSavings => {
                "You are saving less than 20% of your income. Aim to set aside at least a fifth each month."
            }
            Self::InvestMore => {
                "Your investments are less than half of your savings. Putting more of your savings to work can help it grow."
            }
            Self::Balanced => {
                "Your budget is well balanced. Keep reviewing it as your income changes."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Applies the rules in table order. Returns an empty list when income is
/// not positive or a value cannot be represented as a decimal.
pub fn recommendations(input: &FinancialInput) -> Vec<Recommendation> {
    let (Some(income), Some(expenses), Some(loan), Some(savings), Some(investments)) = (
        Decimal::from_f64(input.monthly_income),
        Decimal::from_f64(input.monthly_expenses),
        Decimal::from_f64(input.loan_emi),
        Decimal::from_f64(input.savings),
        Decimal::from_f64(input.investments),
    ) else {
        return Vec::new();
    };
    if income <= Decimal::ZERO {
        return Vec::new();
    }

    let mut out = Vec::new();
    if expenses / income > EXPENSE_RATIO_LIMIT {
        out.push(Recommendation::ReduceExpenses);
    }
    if loan / income > DEBT_RATIO_LIMIT {
        out.push(Recommendation::ReduceDebt);
    }
    if savings / income < SAVINGS_RATIO_FLOOR {
        out.push(Recommendation::IncreaseSavings);
    }
    if investments < savings * INVESTMENT_SHARE_OF_SAVINGS {
        out.push(Recommendation::InvestMore);
    }
    if out.is_empty() {
        out.push(Recommendation::Balanced);
    }
    out
}
