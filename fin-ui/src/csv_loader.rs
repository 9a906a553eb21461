//! CSV loader for batch assessments.
//!
//! ## CSV Format
//!
//! One row per assessment. Headers are matched by name, so column order does
//! **not** matter. Header names are case-sensitive and use the same keys as
//! the scoring service.
//!
//! | Column             | Required | Notes                                   |
//! |--------------------|----------|-----------------------------------------|
//! | `monthly_income`   | yes      | e.g. `100000` or `"1,00,000"`           |
//! | `monthly_expenses` | yes      |                                         |
//! | `loan_emi`         | yes      |                                         |
//! | `savings`          | yes      |                                         |
//! | `investments`      | yes      |                                         |
//!
//! Cells are kept as text. An empty cell or one that does not parse is
//! reported later by the validation pass, row by row, rather than failing the
//! whole file here.
//!
//! ### Example
//!
//! ```csv
//! monthly_income,monthly_expenses,loan_emi,savings,investments
//! 100000,50000,20000,20000,10000
//! "1,20,000","60,000",0,"40,000","20,000"
//! ```
use std::path::{Path, PathBuf};

use fin_core::FieldName;
use fin_core::form::FormValues;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    monthly_income: String,
    monthly_expenses: String,
    loan_emi: String,
    savings: String,
    investments: String,
}

impl CsvRow {
    fn into_values(self) -> FormValues {
        FormValues::from_pairs([
            (FieldName::Income, self.monthly_income.as_str()),
            (FieldName::Expenses, self.monthly_expenses.as_str()),
            (FieldName::LoanPayment, self.loan_emi.as_str()),
            (FieldName::Savings, self.savings.as_str()),
            (FieldName::Investments, self.investments.as_str()),
        ])
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, wrong column count).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text and return one [`FormValues`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – if the CSV is structurally invalid or a
///   column is missing.
pub fn load_from_str(input: &str) -> Result<Vec<FormValues>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .map(|result| Ok(result?.into_values()))
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<FormValues>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = load_from_str(&contents)?;
    tracing::info!(rows = rows.len(), path = %path.display(), "batch file loaded");
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
