//! Entry-form pipeline: sanitize → parse → validate → derive totals → gate submit.
//!
//! Everything here is pure apart from [`FormState`], which owns the field
//! text and the current error map and composes the pure steps.

pub mod normalize;
pub mod state;
pub mod totals;
pub mod validation;
pub mod values;

pub use normalize::{EditResult, apply_edit, normalize, parse_amount, strip_separators};
pub use state::FormState;
pub use totals::DerivedTotals;
pub use validation::{FieldErrors, ValidationError, check_realtime_ceiling, validate};
pub use values::FormValues;
