//! Pure derivations shown on the results view.

pub mod advisory;
pub mod charts;
pub mod recommendations;

pub use advisory::{RiskTone, advisory_text, tone};
pub use charts::{ChartPoint, ChartSet, Dataset};
pub use recommendations::{Recommendation, recommendations};
