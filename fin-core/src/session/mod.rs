//! Submission and the hand-off from the entry form to the results view.

pub mod navigation;
pub mod results;
pub mod submit;

pub use navigation::{Navigation, NavigationPayload};
pub use results::{HISTORY_LIMIT, HistoryState, ResultsModel};
pub use submit::{SUBMIT_FAILURE_ALERT, SubmitOutcome, submit};
