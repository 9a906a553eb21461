//! The three chart datasets rendered on the results view.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::{FinancialInput, Prediction};

/// Upper bound of the score gauge.
pub const SCORE_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
    /// Value as a percentage of the dataset's base, one decimal place.
    pub percent: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub title: &'static str,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    /// Where income goes: each outflow plus any unallocated balance.
    pub allocation: Dataset,
    /// Income next to each outflow, relative to income.
    pub cash_flow: Dataset,
    /// Score against the remainder of the 0–100 range.
    pub score: Dataset,
}

impl ChartSet {
    pub fn build(
        input: &FinancialInput,
        prediction: &Prediction,
    ) -> Self {
        Self {
            allocation: allocation(input),
            cash_flow: cash_flow(input),
            score: score_gauge(prediction.financial_score),
        }
    }

    pub fn datasets(&self) -> [&Dataset; 3] {
        [&self.allocation, &self.cash_flow, &self.score]
    }
}

fn point(
    label: &'static str,
    value: f64,
    base: f64,
) -> ChartPoint {
    ChartPoint {
        label,
        value,
        percent: percent_of(value, base),
    }
}

/// `value / base × 100` rounded half away from zero to one place; zero when
/// the base is not positive.
pub fn percent_of(
    value: f64,
    base: f64,
) -> Decimal {
    match (Decimal::from_f64(value), Decimal::from_f64(base)) {
        (Some(v), Some(b)) if b > Decimal::ZERO => (v / b * dec!(100))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        _ => Decimal::ZERO,
    }
}

fn allocation(input: &FinancialInput) -> Dataset {
    let income = input.monthly_income;
    let mut points = vec![
        point("Expenses", input.monthly_expenses, income),
        point("Loan EMI", input.loan_emi, income),
        point("Savings", input.savings, income),
        point("Investments", input.investments, income),
    ];
    let balance = input.balance();
    if balance > 0.0 {
        points.push(point("Unallocated", balance, income));
    }
    Dataset {
        title: "Income Allocation",
        points,
    }
}

fn cash_flow(input: &FinancialInput) -> Dataset {
    let income = input.monthly_income;
    Dataset {
        title: "Income vs Outflows",
        points: vec![
            point("Income", income, income),
            point("Expenses", input.monthly_expenses, income),
            point("Loan EMI", input.loan_emi, income),
            point("Savings", input.savings, income),
            point("Investments", input.investments, income),
        ],
    }
}

fn score_gauge(score: f64) -> Dataset {
    let clamped = if score.is_finite() {
        score.clamp(0.0, SCORE_MAX)
    } else {
        0.0
    };
    Dataset {
        title: "Financial Score",
        points: vec![
            point("Score", clamped, SCORE_MAX),
            point("Remaining", SCORE_MAX - clamped, SCORE_MAX),
        ],
    }
}
