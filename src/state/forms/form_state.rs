//! Loaded form state and keyboard focus

use super::date_parts::DatePart;
use super::radio::SelectionMode;
use super::session::FormSession;
use crate::form::{render, Control, FieldKind, FormDocument};

/// A single focusable spot inside the rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Text { field_id: String },
    DatePart { field_id: String, part: DatePart },
    RadioOption { field_id: String, option_id: String },
    Drawing { field_id: String },
}

impl FocusTarget {
    pub fn field_id(&self) -> &str {
        match self {
            FocusTarget::Text { field_id }
            | FocusTarget::DatePart { field_id, .. }
            | FocusTarget::RadioOption { field_id, .. }
            | FocusTarget::Drawing { field_id } => field_id,
        }
    }
}

/// Focus targets of a document, in drawing order
pub fn focus_targets(document: &FormDocument) -> Vec<FocusTarget> {
    let mut targets = Vec::new();
    for field in &document.fields {
        let field_id = field.id.clone();
        match field.kind {
            FieldKind::Text => targets.push(FocusTarget::Text { field_id }),
            FieldKind::Date | FieldKind::DateTime => {
                for part in DatePart::ALL {
                    targets.push(FocusTarget::DatePart {
                        field_id: field_id.clone(),
                        part,
                    });
                }
            }
            FieldKind::Radio => {
                for option in &field.options {
                    targets.push(FocusTarget::RadioOption {
                        field_id: field_id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }
            FieldKind::Drawing => targets.push(FocusTarget::Drawing { field_id }),
            FieldKind::Unknown(_) => {}
        }
    }
    targets
}

/// A decoded document together with what the user has entered into it
#[derive(Debug, Clone)]
pub struct LoadedForm {
    pub document: FormDocument,
    pub session: FormSession,
    targets: Vec<FocusTarget>,
    active: usize,
}

impl LoadedForm {
    pub fn new(document: FormDocument, mode: SelectionMode) -> Self {
        let targets = focus_targets(&document);
        Self {
            document,
            session: FormSession::new(mode),
            targets,
            active: 0,
        }
    }

    /// Controls for the current document and session
    pub fn controls(&self) -> Vec<Control> {
        render(&self.document.fields, &self.session)
    }

    pub fn active_target(&self) -> Option<&FocusTarget> {
        self.targets.get(self.active)
    }

    pub fn next_target(&mut self) {
        let count = self.targets.len();
        if count > 0 {
            self.active = (self.active + 1) % count;
        }
    }

    pub fn prev_target(&mut self) {
        let count = self.targets.len();
        if count == 0 {
            return;
        }
        if self.active == 0 {
            self.active = count - 1;
        } else {
            self.active -= 1;
        }
    }

    /// Jump to the first target of the next field
    pub fn next_field(&mut self) {
        let Some(current) = self.active_target().map(|t| t.field_id().to_string()) else {
            return;
        };
        let count = self.targets.len();
        for step in 1..=count {
            let index = (self.active + step) % count;
            if self.targets[index].field_id() != current {
                self.active = index;
                return;
            }
        }
    }

    /// Jump to the first target of the previous field
    pub fn prev_field(&mut self) {
        let count = self.targets.len();
        if count == 0 {
            return;
        }
        let start = self.field_start(self.active);
        let before = (start + count - 1) % count;
        self.active = self.field_start(before);
    }

    fn field_start(&self, mut index: usize) -> usize {
        let field_id = self.targets[index].field_id();
        while index > 0 && self.targets[index - 1].field_id() == field_id {
            index -= 1;
        }
        index
    }

    /// Type a character into the focused input. Radio options ignore text.
    pub fn input_char(&mut self, c: char) {
        let Some(target) = self.active_target().cloned() else {
            return;
        };
        match target {
            FocusTarget::Text { field_id } | FocusTarget::Drawing { field_id } => {
                self.session.push_char(&field_id, c)
            }
            FocusTarget::DatePart { field_id, part } => {
                self.session.push_date_char(&field_id, part, c);
                let filled = self
                    .session
                    .date_parts(&field_id)
                    .and_then(|p| p.get(part))
                    .is_some_and(|v| v.len() >= part.max_len());
                if filled && part.next().is_some() {
                    self.next_target();
                }
            }
            FocusTarget::RadioOption { .. } => {}
        }
    }

    pub fn backspace(&mut self) {
        let Some(target) = self.active_target().cloned() else {
            return;
        };
        match target {
            FocusTarget::Text { field_id } | FocusTarget::Drawing { field_id } => {
                self.session.pop_char(&field_id)
            }
            FocusTarget::DatePart { field_id, part } => self.session.pop_date_char(&field_id, part),
            FocusTarget::RadioOption { .. } => {}
        }
    }

    /// Newline in the drawing placeholder, toggle on a radio option
    pub fn activate(&mut self) {
        let Some(target) = self.active_target().cloned() else {
            return;
        };
        match target {
            FocusTarget::RadioOption {
                field_id,
                option_id,
            } => self.session.toggle_option(&field_id, &option_id),
            FocusTarget::Drawing { field_id } => self.session.push_char(&field_id, '\n'),
            FocusTarget::Text { .. } | FocusTarget::DatePart { .. } => self.next_target(),
        }
    }

    /// Move left within a date or radio row; stays put at the row's edge
    pub fn move_left(&mut self) {
        if self.active == 0 {
            return;
        }
        if self.shares_row(self.active, self.active - 1) {
            self.active -= 1;
        }
    }

    /// Move right within a date or radio row; stays put at the row's edge
    pub fn move_right(&mut self) {
        if self.active + 1 >= self.targets.len() {
            return;
        }
        if self.shares_row(self.active, self.active + 1) {
            self.active += 1;
        }
    }

    fn shares_row(&self, a: usize, b: usize) -> bool {
        let (Some(a), Some(b)) = (self.targets.get(a), self.targets.get(b)) else {
            return false;
        };
        matches!(
            (a, b),
            (FocusTarget::DatePart { .. }, FocusTarget::DatePart { .. })
                | (FocusTarget::RadioOption { .. }, FocusTarget::RadioOption { .. })
        ) && a.field_id() == b.field_id()
    }
}

/// Whether a form is currently displayed
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    Empty,
    Loaded(LoadedForm),
}

impl FormState {
    pub fn loaded(&self) -> Option<&LoadedForm> {
        match self {
            FormState::Empty => None,
            FormState::Loaded(form) => Some(form),
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut LoadedForm> {
        match self {
            FormState::Empty => None,
            FormState::Loaded(form) => Some(form),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FormState::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::decode;
    use crate::source::REFERENCE_FORM;

    fn reference(mode: SelectionMode) -> LoadedForm {
        LoadedForm::new(decode(REFERENCE_FORM).unwrap(), mode)
    }

    fn text(id: &str) -> FocusTarget {
        FocusTarget::Text {
            field_id: id.to_string(),
        }
    }

    fn date(part: DatePart) -> FocusTarget {
        FocusTarget::DatePart {
            field_id: "3".to_string(),
            part,
        }
    }

    fn option(id: &str) -> FocusTarget {
        FocusTarget::RadioOption {
            field_id: "4".to_string(),
            option_id: id.to_string(),
        }
    }

    mod targets {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reference_targets() {
            let doc = decode(REFERENCE_FORM).unwrap();
            assert_eq!(
                focus_targets(&doc),
                vec![
                    text("1"),
                    text("2"),
                    date(DatePart::Day),
                    date(DatePart::Month),
                    date(DatePart::Year),
                    option("male"),
                    option("female"),
                    FocusTarget::Drawing {
                        field_id: "5".to_string()
                    },
                ]
            );
        }

        #[test]
        fn test_unknown_fields_have_no_targets() {
            let doc = decode(
                r#"<form><field id="c"><type>checkbox</type><label>x</label></field></form>"#,
            )
            .unwrap();
            assert!(focus_targets(&doc).is_empty());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_first_target() {
            let form = reference(SelectionMode::Independent);
            assert_eq!(form.active_target(), Some(&text("1")));
        }

        #[test]
        fn test_next_and_prev_wrap() {
            let mut form = reference(SelectionMode::Independent);
            form.prev_target();
            assert_eq!(
                form.active_target(),
                Some(&FocusTarget::Drawing {
                    field_id: "5".to_string()
                })
            );
            form.next_target();
            assert_eq!(form.active_target(), Some(&text("1")));
        }

        #[test]
        fn test_next_field_skips_date_segments() {
            let mut form = reference(SelectionMode::Independent);
            form.next_field();
            form.next_field();
            assert_eq!(form.active_target(), Some(&date(DatePart::Day)));
            form.next_field();
            assert_eq!(form.active_target(), Some(&option("male")));
        }

        #[test]
        fn test_prev_field_lands_on_first_segment() {
            let mut form = reference(SelectionMode::Independent);
            // Focus the female option, then go back one field
            for _ in 0..6 {
                form.next_target();
            }
            assert_eq!(form.active_target(), Some(&option("female")));
            form.prev_field();
            assert_eq!(form.active_target(), Some(&date(DatePart::Day)));
        }

        #[test]
        fn test_left_right_stay_within_row() {
            let mut form = reference(SelectionMode::Independent);
            form.next_field();
            form.next_field();
            form.move_left();
            assert_eq!(form.active_target(), Some(&date(DatePart::Day)));
            form.move_right();
            form.move_right();
            form.move_right();
            assert_eq!(form.active_target(), Some(&date(DatePart::Year)));
        }

        #[test]
        fn test_empty_form_navigation_is_noop() {
            let doc = decode(
                r#"<form><field id="c"><type>checkbox</type><label>x</label></field></form>"#,
            )
            .unwrap();
            let mut form = LoadedForm::new(doc, SelectionMode::Independent);
            form.next_target();
            form.prev_target();
            form.next_field();
            form.prev_field();
            form.input_char('a');
            assert!(form.active_target().is_none());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_text_field() {
            let mut form = reference(SelectionMode::Independent);
            form.input_char('A');
            form.input_char('n');
            form.backspace();
            assert_eq!(form.session.text("1"), "A");
        }

        #[test]
        fn test_date_day_advances_when_full() {
            let mut form = reference(SelectionMode::Independent);
            form.next_field();
            form.next_field();
            form.input_char('1');
            form.input_char('5');
            assert_eq!(form.active_target(), Some(&date(DatePart::Month)));
            let parts = form.session.date_parts("3").unwrap();
            assert_eq!(parts.day.as_deref(), Some("15"));
            assert_eq!(parts.month, None);
            assert_eq!(parts.year, None);
        }

        #[test]
        fn test_activate_toggles_radio() {
            let mut form = reference(SelectionMode::Exclusive);
            for _ in 0..5 {
                form.next_target();
            }
            form.activate();
            form.move_right();
            form.activate();
            assert!(!form.session.is_selected("4", "male"));
            assert!(form.session.is_selected("4", "female"));
        }

        #[test]
        fn test_activate_in_drawing_adds_newline() {
            let mut form = reference(SelectionMode::Independent);
            form.prev_target();
            form.input_char('x');
            form.activate();
            assert_eq!(form.session.text("5"), "x\n");
        }
    }

    #[test]
    fn test_form_state_defaults_to_empty() {
        let state = FormState::default();
        assert!(!state.is_loaded());
        assert!(state.loaded().is_none());
    }
}
