//! Form-definition interpreter
//!
//! Turns XML text into a typed [`FormDocument`] and maps its fields to
//! [`Control`] descriptions for the ui layer.

mod decoder;
mod error;
mod model;
mod renderer;

pub use decoder::decode;
pub use model::{FieldKind, FormDocument};
pub use renderer::{
    render, Control, DateSegment, RadioOptionControl, DATE_SEPARATOR, NO_OPTIONS_NOTICE,
};
