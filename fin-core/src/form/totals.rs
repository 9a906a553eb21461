use crate::form::normalize::parse_amount;
use crate::form::values::FormValues;
use crate::models::FieldName;

/// Running totals shown under the form while the user types.
///
/// Empty or unparseable fields count as zero here; the validation pass is
/// what rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedTotals {
    pub income: f64,
    pub total_allocation: f64,
    pub balance: f64,
}

impl DerivedTotals {
    pub fn from_values(values: &FormValues) -> Self {
        let amount = |field| parse_amount(values.get(field)).unwrap_or(0.0);
        let income = amount(FieldName::Income);
        let total_allocation = amount(FieldName::Expenses)
            + amount(FieldName::LoanPayment)
            + amount(FieldName::Savings)
            + amount(FieldName::Investments);
        Self {
            income,
            total_allocation,
            balance: income - total_allocation,
        }
    }

    pub fn is_reconciled(&self) -> bool {
        self.balance == 0.0
    }
}
