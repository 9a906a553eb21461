use crate::models::FieldName;

/// Display text of the five form fields.
///
/// Text may contain grouping separators or be partially typed; it only has
/// to be a valid amount once the full validation pass runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    income: String,
    expenses: String,
    loan_payment: String,
    savings: String,
    investments: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a value set from `(field, text)` pairs; unlisted fields stay empty.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (FieldName, &'a str)>) -> Self {
        let mut values = Self::new();
        for (field, text) in pairs {
            values.set(field, text);
        }
        values
    }

    pub fn get(
        &self,
        field: FieldName,
    ) -> &str {
        match field {
            FieldName::Income => &self.income,
            FieldName::Expenses => &self.expenses,
            FieldName::LoanPayment => &self.loan_payment,
            FieldName::Savings => &self.savings,
            FieldName::Investments => &self.investments,
        }
    }

    pub fn set(
        &mut self,
        field: FieldName,
        text: impl Into<String>,
    ) {
        let slot = match field {
            FieldName::Income => &mut self.income,
            FieldName::Expenses => &mut self.expenses,
            FieldName::LoanPayment => &mut self.loan_payment,
            FieldName::Savings => &mut self.savings,
            FieldName::Investments => &mut self.investments,
        };
        *slot = text.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
