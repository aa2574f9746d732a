//! Ephemeral per-field state of a rendered form

use super::date_parts::{DatePart, DateParts};
use super::radio::{RadioGroup, SelectionMode};
use std::collections::HashMap;

/// Everything the user has entered into the currently loaded form, keyed by
/// field id. Created empty for each decoded document and never persisted.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    mode: SelectionMode,
    date_parts: HashMap<String, DateParts>,
    radio_groups: HashMap<String, RadioGroup>,
    text_buffers: HashMap<String, String>,
}

impl FormSession {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Entered date segments for a field, if any segment was ever edited
    pub fn date_parts(&self, field_id: &str) -> Option<&DateParts> {
        self.date_parts.get(field_id)
    }

    /// Overwrite one segment of a field's date, keeping the other segments.
    ///
    /// Non-digits are dropped and the value is cut to the segment's length.
    pub fn update_date_part(&mut self, field_id: &str, part: DatePart, text: &str) {
        let value = part.sanitize(text);
        self.date_parts
            .entry(field_id.to_string())
            .or_default()
            .set(part, value);
    }

    /// Append one keystroke to a date segment. Full segments ignore input.
    pub fn push_date_char(&mut self, field_id: &str, part: DatePart, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let mut current = self
            .date_parts(field_id)
            .and_then(|p| p.get(part))
            .unwrap_or_default()
            .to_string();
        if current.len() >= part.max_len() {
            return;
        }
        current.push(c);
        self.update_date_part(field_id, part, &current);
    }

    pub fn pop_date_char(&mut self, field_id: &str, part: DatePart) {
        let Some(current) = self.date_parts(field_id).and_then(|p| p.get(part)) else {
            return;
        };
        let mut current = current.to_string();
        current.pop();
        self.update_date_part(field_id, part, &current);
    }

    /// Toggle a radio option, creating the field's group on first use
    pub fn toggle_option(&mut self, field_id: &str, option_id: &str) {
        let mode = self.mode;
        self.radio_groups
            .entry(field_id.to_string())
            .or_insert_with(|| RadioGroup::new(mode))
            .toggle(option_id);
    }

    pub fn is_selected(&self, field_id: &str, option_id: &str) -> bool {
        self.radio_groups
            .get(field_id)
            .is_some_and(|g| g.is_selected(option_id))
    }

    /// Content of a free-text input (text and drawing fields)
    pub fn text(&self, field_id: &str) -> &str {
        self.text_buffers
            .get(field_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn push_char(&mut self, field_id: &str, c: char) {
        self.text_buffers
            .entry(field_id.to_string())
            .or_default()
            .push(c);
    }

    pub fn pop_char(&mut self, field_id: &str) {
        if let Some(buffer) = self.text_buffers.get_mut(field_id) {
            buffer.pop();
        }
    }
}
