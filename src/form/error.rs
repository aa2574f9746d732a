//! Decoder errors

use thiserror::Error;

/// Why a document could not be turned into a form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No root `form` element, or a `form` without any `field` child
    #[error("Invalid XML format: missing \"form\" or \"field\" elements")]
    MissingStructure,
    /// Malformed XML, or a required element/attribute is absent
    #[error("Error parsing XML: {0}")]
    ParseFailure(String),
}

impl DecodeError {
    /// Message shown to the user. Both variants share it.
    pub fn user_message(&self) -> &'static str {
        "Invalid XML format or missing XML elements"
    }
}

impl From<quick_xml::Error> for DecodeError {
    fn from(err: quick_xml::Error) -> Self {
        DecodeError::ParseFailure(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DecodeError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        DecodeError::ParseFailure(err.to_string())
    }
}
