use fin_core::Locale;
use rust_decimal::Decimal;

/// Formats an amount with the currency symbol and locale grouping, rounded to
/// whole units (e.g. `₹1,50,000`, `-$5,000`).
pub fn format_amount(
    value: f64,
    locale: Locale,
    symbol: &str,
) -> String {
    let number = locale.format_number(value);
    match number.strip_prefix('-') {
        Some(magnitude) => format!("-{symbol}{magnitude}"),
        None => format!("{symbol}{number}"),
    }
}

/// Formats an optional amount for display, using "—" when `None`.
pub fn opt_amount_display(
    value: Option<f64>,
    locale: Locale,
    symbol: &str,
) -> String {
    value
        .map(|v| format_amount(v, locale, symbol))
        .unwrap_or_else(|| "—".to_string())
}

/// Scores are shown with one decimal place.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

pub fn format_percent(percent: Decimal) -> String {
    format!("{percent:.1}%")
}
