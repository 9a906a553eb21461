//! Text views for the assessment flow.
//!
//! - `entry_form` - the five-field form, running totals and command parsing
//! - `results` - score, advisory, charts, recommendations and history
//! - `charts` - horizontal bar rendering of a chart dataset
//! - `status_bar` - key hints, alerts and notices
//! - `canvas` - writes ratatui lines and widget buffers
//!
//! Views only write to an `io::Write`; the page flow lives in [`crate::app`].

pub mod canvas;
pub mod charts;
pub mod entry_form;
pub mod results;
pub mod status_bar;

use fin_core::Locale;

use crate::themes::Theme;
use crate::utils::format_amount;

/// Locale, currency symbol and colors shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub locale: Locale,
    pub currency: String,
    pub theme: Theme,
}

impl Presentation {
    pub fn new(
        locale: Locale,
        currency: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            locale,
            currency: currency.into(),
            theme,
        }
    }

    /// Uncolored output with the locale's own currency symbol.
    pub fn plain(locale: Locale) -> Self {
        Self::new(locale, locale.currency_symbol(), Theme::plain())
    }

    pub fn amount(
        &self,
        value: f64,
    ) -> String {
        format_amount(value, self.locale, &self.currency)
    }
}
