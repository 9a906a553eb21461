use std::fmt;

/// The five numeric inputs collected by the entry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Income,
    Expenses,
    LoanPayment,
    Savings,
    Investments,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        Self::Income,
        Self::Expenses,
        Self::LoanPayment,
        Self::Savings,
        Self::Investments,
    ];

    /// JSON key used by the scoring service.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::Income => "monthly_income",
            Self::Expenses => "monthly_expenses",
            Self::LoanPayment => "loan_emi",
            Self::Savings => "savings",
            Self::Investments => "investments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Monthly Income",
            Self::Expenses => "Monthly Expenses",
            Self::LoanPayment => "Loan EMI",
            Self::Savings => "Savings",
            Self::Investments => "Investments",
        }
    }

    /// Accepts a wire key or a short alias (`income`, `expenses`, `loan`,
    /// `emi`, `savings`, `investments`). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "monthly_income" => Some(Self::Income),
            "expenses" | "monthly_expenses" => Some(Self::Expenses),
            "loan" | "emi" | "loan_emi" | "loan_payment" => Some(Self::LoanPayment),
            "savings" => Some(Self::Savings),
            "investments" => Some(Self::Investments),
            _ => None,
        }
    }

    /// Income and expenses are bounded on every edit, not only on submit.
    pub fn has_realtime_ceiling(&self) -> bool {
        matches!(self, Self::Income | Self::Expenses)
    }
}

impl fmt::Display for FieldName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_wire_keys_and_aliases() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::parse(field.wire_key()), Some(field));
        }
        assert_eq!(FieldName::parse("EMI"), Some(FieldName::LoanPayment));
        assert_eq!(FieldName::parse(" loan "), Some(FieldName::LoanPayment));
        assert_eq!(FieldName::parse("rent"), None);
    }

    #[test]
    fn only_income_and_expenses_have_realtime_ceiling() {
        let bounded: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(FieldName::has_realtime_ceiling)
            .collect();

        assert_eq!(bounded, vec![FieldName::Income, FieldName::Expenses]);
    }
}
