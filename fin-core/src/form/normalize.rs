//! Keystroke normalization for amount fields.
//!
//! Each edit goes through four steps:
//!
//! 1. drop every character that is not a digit, `.` or `,`;
//! 2. if more than one `.` remains, drop the last character;
//! 3. strip grouping separators to get the raw numeric text;
//! 4. if the raw text parses, re-render it with locale grouping and no
//!    fractional digits, otherwise keep the filtered text so a leading `.`
//!    can still be typed.
//!
//! The real-time ceiling measures the leading `digits[.digits]` of the raw
//! text, so text that still holds two points after step 2 is bounded too.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::form::validation::{ValidationError, check_realtime_ceiling};
use crate::locale::{GROUP_SEPARATOR, Locale};
use crate::models::FieldName;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,]").expect("static character class is valid"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*(\.[0-9]*)?").expect("static pattern is valid"));

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Text to show in the field.
    pub display: String,
    /// Separator-free numeric text used for arithmetic.
    pub raw: String,
}

/// Result of applying one edit to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// Text the field holds after the edit. Equals the previous text when the
    /// edit was rejected.
    pub display: String,
    /// Set when the edit pushed a bounded field over its ceiling.
    pub bound_violation: Option<ValidationError>,
}

impl EditResult {
    pub fn is_rejected(&self) -> bool {
        self.bound_violation.is_some()
    }
}

/// Removes every character other than digits, `.` and `,`.
pub fn filter_chars(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}

/// Removes grouping separators.
pub fn strip_separators(text: &str) -> String {
    text.replace(GROUP_SEPARATOR, "")
}

/// Parses field text as a finite `f64`, ignoring grouping separators and
/// surrounding whitespace. `None` for empty or unparseable text.
pub fn parse_amount(text: &str) -> Option<f64> {
    let raw = strip_separators(text.trim());
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Value of the longest `digits[.digits]` prefix of `raw`, so text that
/// still holds extra decimal points is measured by what precedes them.
pub fn leading_amount(raw: &str) -> Option<f64> {
    let prefix = LEADING_NUMBER.find(raw).map_or("", |m| m.as_str());
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn normalize(
    text: &str,
    locale: Locale,
) -> Normalized {
    let mut filtered = filter_chars(text);
    if filtered.matches('.').count() > 1 {
        filtered.pop();
    }
    let raw = strip_separators(&filtered);
    let display = match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => locale.format_number(value),
        _ => filtered,
    };
    Normalized { display, raw }
}

/// Applies the raw text of one keystroke to `field`.
///
/// For income and expenses an edit whose value exceeds the real-time ceiling
/// is rejected: the returned display is `previous` and the violation is set.
pub fn apply_edit(
    field: FieldName,
    previous: &str,
    new_text: &str,
    locale: Locale,
) -> EditResult {
    let normalized = normalize(new_text, locale);

    let violation =
        leading_amount(&normalized.raw).and_then(|value| check_realtime_ceiling(field, value));

    if let Some(error) = violation {
        debug!(field = field.wire_key(), input = %new_text, "edit rejected: {error}");
        return EditResult {
            display: previous.to_string(),
            bound_violation: Some(error),
        };
    }

    EditResult {
        display: normalized.display,
        bound_violation: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // normalize
    // =========================================================================

    #[test]
    fn strips_letters_and_symbols() {
        let n = normalize("₹ 12a3,4x5", Locale::EnUs);

        assert_eq!(n.raw, "12345");
        assert_eq!(n.display, "12,345");
    }

    #[test]
    fn regroups_for_locale() {
        assert_eq!(normalize("150000", Locale::EnIn).display, "1,50,000");
        assert_eq!(normalize("150000", Locale::EnUs).display, "150,000");
        assert_eq!(normalize("1,5,0,000", Locale::EnUs).display, "150,000");
    }

    #[test]
    fn lone_decimal_point_is_kept_for_further_typing() {
        let n = normalize(".", Locale::EnIn);

        assert_eq!(n.display, ".");
        assert_eq!(n.raw, ".");
    }

    #[test]
    fn second_decimal_point_drops_last_character() {
        let n = normalize("1.5.", Locale::EnUs);

        assert_eq!(n.raw, "1.5");
        assert_eq!(n.display, "2");
    }

    #[test]
    fn decimal_guard_is_single_step() {
        // Only the final character is dropped; the text still holds two points
        // and is kept as typed.
        let n = normalize("1.2.3", Locale::EnUs);

        assert_eq!(n.display, "1.2.");
    }

    #[test]
    fn empty_input_stays_empty() {
        let n = normalize("", Locale::EnIn);

        assert_eq!(n.display, "");
        assert_eq!(n.raw, "");
    }

    #[test]
    fn formatting_then_stripping_preserves_integer_values() {
        for value in [0u64, 7, 999, 1_000, 12_345, 150_000, 9_876_543, 9_999_999_999] {
            for locale in [Locale::EnIn, Locale::EnUs] {
                let display = normalize(&value.to_string(), locale).display;
                let back: u64 = strip_separators(&display).parse().unwrap();
                assert_eq!(back, value, "{display} in {}", locale.tag());
            }
        }
    }

    #[test]
    fn leading_amount_reads_up_to_the_second_point() {
        assert_eq!(leading_amount("2000000.1."), Some(2000000.1));
        assert_eq!(leading_amount("12.5.7"), Some(12.5));
        assert_eq!(leading_amount("1500"), Some(1500.0));
        assert_eq!(leading_amount("7."), Some(7.0));
        assert_eq!(leading_amount("."), None);
        assert_eq!(leading_amount(""), None);
    }

    // =========================================================================
    // parse_amount
    // =========================================================================

    #[test]
    fn parse_amount_handles_separators_and_blanks() {
        assert_eq!(parse_amount("1,50,000"), Some(150000.0));
        assert_eq!(parse_amount("  42.5 "), Some(42.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-3"), Some(-3.0));
        assert_eq!(parse_amount("inf"), None);
    }

    // =========================================================================
    // apply_edit
    // =========================================================================

    #[test]
    fn edit_within_ceiling_is_accepted() {
        let result = apply_edit(FieldName::Income, "15,000", "150000", Locale::EnUs);

        assert_eq!(result.display, "150,000");
        assert!(!result.is_rejected());
    }

    #[test]
    fn edit_over_ceiling_keeps_previous_text() {
        let result = apply_edit(FieldName::Expenses, "15,000", "15,0001", Locale::EnUs);

        assert_eq!(result.display, "15,000");
        assert_eq!(result.bound_violation, Some(ValidationError::AboveCeiling));
    }

    #[test]
    fn unbounded_fields_accept_large_values() {
        let result = apply_edit(FieldName::Savings, "", "2000000", Locale::EnUs);

        assert_eq!(result.display, "2,000,000");
        assert!(!result.is_rejected());
    }

    #[test]
    fn typing_digit_by_digit_freezes_at_last_value_within_ceiling() {
        let mut display = String::new();
        let mut last = None;
        for ch in "200000".chars() {
            let typed = format!("{display}{ch}");
            let result = apply_edit(FieldName::Income, &display, &typed, Locale::EnUs);
            display = result.display.clone();
            last = Some(result);
        }

        assert_eq!(display, "20,000");
        assert_eq!(
            last.and_then(|r| r.bound_violation),
            Some(ValidationError::AboveCeiling)
        );
    }
}
