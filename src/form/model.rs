//! Typed form definition produced by the decoder

/// Kind of input a field asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    DateTime,
    Radio,
    Drawing,
    /// Any `type` text outside the known set. Decodes fine, renders nothing.
    Unknown(String),
}

impl FieldKind {
    /// Parse the text of a `<type>` element. Matching is exact.
    pub fn parse(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "radio" => Self::Radio,
            "drawing" => Self::Drawing,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Radio => "radio",
            Self::Drawing => "drawing",
            Self::Unknown(other) => other,
        }
    }
}

/// One selectable choice of a radio field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub id: String,
    pub value: String,
    pub label: String,
}

/// One form element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub label: String,
    /// Only populated for radio fields
    pub options: Vec<FieldOption>,
}

/// Root of a decoded form. Always holds at least one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    pub fields: Vec<Field>,
}
