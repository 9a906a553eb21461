mod field;
mod financial_input;
mod history_record;
mod prediction;

pub use field::FieldName;
pub use financial_input::FinancialInput;
pub use history_record::HistoryRecord;
pub use prediction::{Prediction, RiskCategory};
