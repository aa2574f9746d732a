//! Field-to-control mapping
//!
//! [`render`] is pure: the same fields and session always produce the same
//! controls. The ui layer draws the controls; key handling feeds edits back
//! into the [`FormSession`].

use super::model::{Field, FieldKind};
use crate::state::{DatePart, FormSession};

/// Prompt shown inside the drawing placeholder
pub const DRAWING_PROMPT: &str = "Draw here...";

/// Notice shown for a radio field that declares no options
pub const NO_OPTIONS_NOTICE: &str = "No options available";

/// Separator drawn between date segments
pub const DATE_SEPARATOR: &str = "/";

/// Broad category of a rendered control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Date,
    Radio,
    Drawing,
}

/// One numeric segment of a date control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSegment {
    pub part: DatePart,
    pub placeholder: &'static str,
    pub max_len: usize,
    pub value: String,
}

/// One toggle inside a radio row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOptionControl {
    pub option_id: String,
    /// Text next to the indicator (the option's value)
    pub display: String,
    pub label: String,
    pub selected: bool,
}

/// Description of one control to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    TextInput {
        field_id: String,
        placeholder: String,
        value: String,
    },
    DateInput {
        field_id: String,
        label: String,
        segments: [DateSegment; 3],
    },
    Radio {
        field_id: String,
        label: String,
        options: Vec<RadioOptionControl>,
    },
    Drawing {
        field_id: String,
        label: String,
        prompt: &'static str,
        value: String,
    },
}

impl Control {
    pub fn kind(&self) -> ControlKind {
        match self {
            Control::TextInput { .. } => ControlKind::Text,
            Control::DateInput { .. } => ControlKind::Date,
            Control::Radio { .. } => ControlKind::Radio,
            Control::Drawing { .. } => ControlKind::Drawing,
        }
    }

    pub fn field_id(&self) -> &str {
        match self {
            Control::TextInput { field_id, .. }
            | Control::DateInput { field_id, .. }
            | Control::Radio { field_id, .. }
            | Control::Drawing { field_id, .. } => field_id,
        }
    }
}

/// Map fields to controls in order, skipping unrecognized field types
pub fn render(fields: &[Field], session: &FormSession) -> Vec<Control> {
    fields
        .iter()
        .filter_map(|field| render_field(field, session))
        .collect()
}

/// Control for a single field, or `None` for unrecognized types
pub fn render_field(field: &Field, session: &FormSession) -> Option<Control> {
    let control = match &field.kind {
        FieldKind::Text => Control::TextInput {
            field_id: field.id.clone(),
            placeholder: field.label.clone(),
            value: session.text(&field.id).to_string(),
        },
        FieldKind::Date | FieldKind::DateTime => Control::DateInput {
            field_id: field.id.clone(),
            label: field.label.clone(),
            segments: DatePart::ALL.map(|part| DateSegment {
                part,
                placeholder: part.placeholder(),
                max_len: part.max_len(),
                value: session
                    .date_parts(&field.id)
                    .and_then(|p| p.get(part))
                    .unwrap_or_default()
                    .to_string(),
            }),
        },
        FieldKind::Radio => Control::Radio {
            field_id: field.id.clone(),
            label: field.label.clone(),
            options: field
                .options
                .iter()
                .map(|option| RadioOptionControl {
                    option_id: option.id.clone(),
                    display: option.value.clone(),
                    label: option.label.clone(),
                    selected: session.is_selected(&field.id, &option.id),
                })
                .collect(),
        },
        FieldKind::Drawing => Control::Drawing {
            field_id: field.id.clone(),
            label: field.label.clone(),
            prompt: DRAWING_PROMPT,
            value: session.text(&field.id).to_string(),
        },
        FieldKind::Unknown(_) => {
            tracing::debug!(
                "Skipping field \"{}\" with unknown type \"{}\"",
                field.id,
                field.kind.as_str()
            );
            return None;
        }
    };
    Some(control)
}
