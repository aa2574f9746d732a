//! Application state definitions

use super::forms::{FormState, LoadedForm, SelectionMode};
use crate::form::FormDocument;

/// Pane that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Raw XML input buffer
    #[default]
    Editor,
    /// Rendered form controls
    Form,
    /// Path prompt for loading a document from disk
    OpenPath,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Editor => "XML Input",
            View::Form => "Form",
            View::OpenPath => "Open",
        }
    }
}

/// User-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// View to return to when the path prompt closes
    pub previous_view: View,
    /// Text typed or pasted into the XML input pane
    pub xml_input: String,
    /// Text typed into the path prompt
    pub path_input: String,
    pub form: FormState,
    pub selection_mode: SelectionMode,
    /// Pending modal notification
    pub alert: Option<Alert>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(selection_mode: SelectionMode) -> Self {
        Self {
            selection_mode,
            ..Default::default()
        }
    }

    /// Replace whatever form is displayed with a freshly decoded one
    pub fn show_document(&mut self, document: FormDocument) {
        self.form = FormState::Loaded(LoadedForm::new(document, self.selection_mode));
    }

    pub fn raise(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn open_path_prompt(&mut self) {
        if self.current_view != View::OpenPath {
            self.previous_view = self.current_view;
        }
        self.path_input.clear();
        self.current_view = View::OpenPath;
    }

    pub fn close_path_prompt(&mut self) {
        self.current_view = self.previous_view;
    }

    /// Cycle between the XML input and the form panes
    pub fn toggle_pane(&mut self) {
        self.current_view = match self.current_view {
            View::Editor if self.form.is_loaded() => View::Form,
            View::Form => View::Editor,
            other => other,
        };
    }
}
