//! Display locale for amounts and timestamps.
//!
//! Both supported locales use `,` as the grouping separator and `.` as the
//! decimal point; they differ in digit grouping and date order.
//!
//! | Locale  | Grouping       | Example     | Date                     |
//! |---------|----------------|-------------|--------------------------|
//! | `en-IN` | 3, then 2s     | `1,50,000`  | `15/1/2025, 9:05:00 am`  |
//! | `en-US` | 3s             | `150,000`   | `1/15/2025, 9:05:00 AM`  |

use chrono::{DateTime, NaiveDateTime};

/// Grouping separator inserted by [`Locale::format_number`].
pub const GROUP_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnIn,
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EnIn => "en-IN",
            Self::EnUs => "en-US",
        }
    }

    /// Accepts `en-IN` / `en_IN` / `en-US` / `en_US`, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-in" => Some(Self::EnIn),
            "en-us" => Some(Self::EnUs),
            _ => None,
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Self::EnIn => "₹",
            Self::EnUs => "$",
        }
    }

    /// Inserts grouping separators into a string of ASCII digits.
    pub fn group_digits(
        &self,
        digits: &str,
    ) -> String {
        match self {
            Self::EnIn => group(digits, 3, 2),
            Self::EnUs => group(digits, 3, 3),
        }
    }

    /// Formats `value` with no fractional digits (half away from zero) and
    /// locale grouping.
    pub fn format_number(
        &self,
        value: f64,
    ) -> String {
        let rounded = value.round();
        if rounded == 0.0 {
            return "0".to_string();
        }
        let digits = format!("{:.0}", rounded.abs());
        let grouped = self.group_digits(&digits);
        if rounded < 0.0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Formats a timestamp as stored by the history service.
    ///
    /// Accepts the SQLite text form (`2025-01-15 09:05:00.123456`), ISO 8601
    /// with `T`, RFC 3339 and RFC 2822 / HTTP-date. Anything else is returned
    /// unchanged.
    pub fn format_timestamp(
        &self,
        raw: &str,
    ) -> String {
        match parse_timestamp(raw) {
            Some(ts) => {
                let pattern = match self {
                    Self::EnIn => "%-d/%-m/%Y, %-I:%M:%S %P",
                    Self::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
                };
                ts.format(pattern).to_string()
            }
            None => raw.to_string(),
        }
    }
}

fn group(
    digits: &str,
    first: usize,
    rest: usize,
) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (h, t) = remaining.split_at(remaining.len() - rest);
        groups.push(t);
        remaining = h;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(&GROUP_SEPARATOR.to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .or_else(|_| DateTime::parse_from_rfc2822(raw))
                .ok()
                .map(|dt| dt.naive_local())
        })
}
