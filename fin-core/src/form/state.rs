use tracing::{debug, info};

use crate::form::normalize::{EditResult, apply_edit};
use crate::form::totals::DerivedTotals;
use crate::form::validation::{FieldErrors, ValidationError, validate};
use crate::form::values::FormValues;
use crate::locale::Locale;
use crate::models::{FieldName, FinancialInput};

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Analyze My Finances";
/// Label of the submit control while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Analyzing...";

/// Entry-form state: field text, the current error map and the in-flight flag.
///
/// The error map is only ever replaced by the output of the pure
/// [`validate`] pass, or patched for [`ValidationError::AboveCeiling`] by
/// [`FormState::edit`].
#[derive(Debug, Clone, Default)]
pub struct FormState {
    locale: Locale,
    values: FormValues,
    errors: FieldErrors,
    submitting: bool,
}

impl FormState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(
        &self,
        field: FieldName,
    ) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(
        &self,
        field: FieldName,
    ) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Applies the full new text of a field, as delivered by one keystroke.
    pub fn edit(
        &mut self,
        field: FieldName,
        new_text: &str,
    ) -> EditResult {
        let result = apply_edit(field, self.values.get(field), new_text, self.locale);
        match result.bound_violation {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                if self.errors.get(&field) == Some(&ValidationError::AboveCeiling) {
                    self.errors.remove(&field);
                }
                self.values.set(field, result.display.clone());
            }
        }
        result
    }

    /// Replaces a field by typing `text` into an emptied field one character
    /// at a time, so the real-time ceiling sees every intermediate value.
    pub fn type_text(
        &mut self,
        field: FieldName,
        text: &str,
    ) -> Option<ValidationError> {
        self.edit(field, "");
        let mut violation = None;
        for ch in text.chars() {
            let typed = format!("{}{ch}", self.values.get(field));
            if let Some(error) = self.edit(field, &typed).bound_violation {
                violation = Some(error);
            }
        }
        debug!(field = field.wire_key(), display = self.values.get(field), "field typed");
        violation
    }

    pub fn totals(&self) -> DerivedTotals {
        DerivedTotals::from_values(&self.values)
    }

    /// Runs the full validation pass and replaces the error map with its result.
    pub fn validate(&mut self) -> Result<FinancialInput, FieldErrors> {
        match validate(&self.values) {
            Ok(input) => {
                self.errors.clear();
                Ok(input)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Whether the submit control is enabled. Does not touch the error map.
    pub fn can_submit(&self) -> bool {
        !self.submitting && validate(&self.values).is_ok()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(
        &mut self,
        submitting: bool,
    ) {
        self.submitting = submitting;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Empties every field and error.
    pub fn clear(&mut self) {
        info!("form cleared");
        self.values.clear();
        self.errors.clear();
    }
}
