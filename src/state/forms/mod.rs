//! Form domain layer
//!
//! Ephemeral state of the loaded form: what the user typed, which options are
//! selected, and where keyboard focus sits.

mod date_parts;
mod form_state;
mod radio;
mod session;

pub use date_parts::DatePart;
pub use form_state::{FocusTarget, FormState, LoadedForm};
pub use radio::SelectionMode;
pub use session::FormSession;
