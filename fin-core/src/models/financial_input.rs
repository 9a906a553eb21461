use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldName;

/// Normalized form values as sent to `POST /predict`.
///
/// Every value is finite once a record of this type exists; it is only ever
/// built by the full validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialInput {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub loan_emi: f64,
    pub savings: f64,
    pub investments: f64,
}

impl FinancialInput {
    pub fn get(
        &self,
        field: FieldName,
    ) -> f64 {
        match field {
            FieldName::Income => self.monthly_income,
            FieldName::Expenses => self.monthly_expenses,
            FieldName::LoanPayment => self.loan_emi,
            FieldName::Savings => self.savings,
            FieldName::Investments => self.investments,
        }
    }

    pub fn set(
        &mut self,
        field: FieldName,
        value: f64,
    ) {
        match field {
            FieldName::Income => self.monthly_income = value,
            FieldName::Expenses => self.monthly_expenses = value,
            FieldName::LoanPayment => self.loan_emi = value,
            FieldName::Savings => self.savings = value,
            FieldName::Investments => self.investments = value,
        }
    }

    /// Expenses + loan EMI + savings + investments.
    pub fn total_allocation(&self) -> f64 {
        self.monthly_expenses + self.loan_emi + self.savings + self.investments
    }

    /// Income minus total allocation; zero when the budget is reconciled.
    pub fn balance(&self) -> f64 {
        self.monthly_income - self.total_allocation()
    }
}

impl fmt::Display for FinancialInput {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Monthly income:   {}", self.monthly_income)?;
        writeln!(f, "Monthly expenses: {}", self.monthly_expenses)?;
        writeln!(f, "Loan EMI:         {}", self.loan_emi)?;
        writeln!(f, "Savings:          {}", self.savings)?;
        write!(f, "Investments:      {}", self.investments)
    }
}
