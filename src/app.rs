//! Application state and core logic

use crate::config::TuiConfig;
use crate::form::{decode, Control};
use crate::source::{DocumentSource, FileDocumentSource, REFERENCE_FORM};
use crate::state::{Alert, AppState, FocusTarget, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where "open" reads documents from
    source: Box<dyn DocumentSource>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App reading documents from disk
    pub fn new(config: &TuiConfig) -> Self {
        let source = FileDocumentSource::new(config.document_dir.clone());
        Self::with_source(AppState::new(config.selection_mode()), Box::new(source))
    }

    pub fn with_source(state: AppState, source: Box<dyn DocumentSource>) -> Self {
        Self {
            state,
            source,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Decode `xml` and display it, replacing the current form.
    ///
    /// On failure the current form stays as it was and an alert is raised.
    /// Returns whether a new form is now displayed.
    pub fn load_form(&mut self, xml: &str) -> bool {
        match decode(xml) {
            Ok(document) => {
                let count = document.fields.len();
                tracing::info!("Rendering form with {count} field(s)");
                self.state.show_document(document);
                if let Some(form) = self.state.form.loaded() {
                    let kinds: Vec<_> = form.controls().iter().map(Control::kind).collect();
                    tracing::debug!("Controls: {kinds:?}");
                }
                self.state.current_view = View::Form;
                self.state.status_message = Some(format!("Loaded form with {count} field(s)"));
                true
            }
            Err(err) => {
                tracing::warn!("Error parsing XML: {err}");
                self.state.raise(Alert::error(err.user_message()));
                false
            }
        }
    }

    /// Display the built-in standard form
    pub fn load_standard_form(&mut self) -> bool {
        self.load_form(REFERENCE_FORM)
    }

    /// Display the form typed into the XML input pane
    pub fn render_input(&mut self) -> bool {
        let xml = self.state.xml_input.clone();
        self.load_form(&xml)
    }

    /// Read a document through the source, put it in the XML input pane and display it
    pub async fn open_document(&mut self, path: PathBuf) -> bool {
        match self.source.load(&path).await {
            Ok(content) => {
                self.state.xml_input = content;
                self.render_input()
            }
            Err(err) => {
                tracing::warn!("Could not open {}: {err}", path.display());
                self.state.raise(Alert::error(err.to_string()));
                false
            }
        }
    }

    /// Append clipboard text to the XML input pane
    pub fn paste_clipboard(&mut self) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        let text = clipboard.get_text()?;
        self.state.xml_input.push_str(&text);
        Ok(())
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        if self.state.current_view == View::OpenPath {
            self.handle_open_path_key(key).await;
            return Ok(());
        }

        self.state.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => {
                    self.load_standard_form();
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    self.render_input();
                    return Ok(());
                }
                KeyCode::Char('o') => {
                    self.state.open_path_prompt();
                    return Ok(());
                }
                _ => {}
            }
        }

        if key.code == KeyCode::Char('v') && key.modifiers.contains(crate::platform::PASTE_MODIFIER)
        {
            if let Err(err) = self.paste_clipboard() {
                tracing::warn!("Clipboard paste failed: {err}");
                self.state.status_message = Some(format!("Paste failed: {err}"));
            }
            self.state.current_view = View::Editor;
            return Ok(());
        }

        match self.state.current_view {
            View::Editor => self.handle_editor_key(key),
            View::Form => self.handle_form_key(key),
            View::OpenPath => {}
        }
        Ok(())
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.toggle_pane(),
            KeyCode::Enter => self.state.xml_input.push('\n'),
            KeyCode::Backspace => {
                self.state.xml_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.xml_input.push(c)
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.toggle_pane();
            return;
        }
        let Some(form) = self.state.form.loaded_mut() else {
            return;
        };
        let on_option = matches!(form.active_target(), Some(FocusTarget::RadioOption { .. }));
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_target(),
            KeyCode::BackTab | KeyCode::Up => form.prev_target(),
            KeyCode::PageDown => form.next_field(),
            KeyCode::PageUp => form.prev_field(),
            KeyCode::Left => form.move_left(),
            KeyCode::Right => form.move_right(),
            KeyCode::Enter => form.activate(),
            KeyCode::Char(' ') if on_option => form.activate(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
    }

    async fn handle_open_path_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.close_path_prompt(),
            KeyCode::Enter => {
                let path = self.state.path_input.trim().to_string();
                self.state.close_path_prompt();
                if !path.is_empty() {
                    self.open_document(PathBuf::from(path)).await;
                }
            }
            KeyCode::Backspace => {
                self.state.path_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.path_input.push(c)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockDocumentSource, SourceError};
    use crate::state::SelectionMode;
    use tokio_test::block_on;

    fn app_with(source: MockDocumentSource) -> App {
        App::with_source(AppState::default(), Box::new(source))
    }

    fn app() -> App {
        app_with(MockDocumentSource::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            block_on(app.handle_key(key(KeyCode::Char(c)))).unwrap();
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!app().should_quit());
        }

        #[test]
        fn test_standard_form_loads() {
            let mut app = app();
            assert!(app.load_standard_form());
            assert_eq!(app.state.current_view, View::Form);
            let form = app.state.form.loaded().unwrap();
            assert_eq!(form.document.fields.len(), 5);
            assert_eq!(form.controls().len(), 5);
        }

        #[test]
        fn test_standard_form_does_not_touch_input() {
            let mut app = app();
            app.state.xml_input = "draft".to_string();
            app.load_standard_form();
            assert_eq!(app.state.xml_input, "draft");
        }

        #[test]
        fn test_failed_load_keeps_previous_form() {
            let mut app = app();
            app.load_standard_form();
            if let Some(form) = app.state.form.loaded_mut() {
                form.input_char('J');
            }
            assert!(!app.load_form("<form><field id=\"1\">"));
            let form = app.state.form.loaded().unwrap();
            assert_eq!(form.document.fields.len(), 5);
            assert_eq!(form.session.text("1"), "J");
        }

        #[test]
        fn test_failed_load_raises_generic_alert() {
            let mut app = app();
            app.load_form("<survey/>");
            assert_eq!(
                app.state.alert,
                Some(Alert::error("Invalid XML format or missing XML elements"))
            );
            assert!(!app.state.form.is_loaded());
        }

        #[test]
        fn test_successful_load_replaces_form() {
            let mut app = app();
            app.load_standard_form();
            app.load_form(r#"<form><field id="x"><type>text</type><label>X</label></field></form>"#);
            let form = app.state.form.loaded().unwrap();
            assert_eq!(form.document.fields.len(), 1);
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn test_ctrl_l_loads_standard_form() {
            let mut app = app();
            block_on(app.handle_key(ctrl('l'))).unwrap();
            assert!(app.state.form.is_loaded());
        }

        #[test]
        fn test_typed_xml_renders_with_ctrl_r() {
            let mut app = app();
            type_text(
                &mut app,
                r#"<form><field id="a"><type>text</type><label>A</label></field></form>"#,
            );
            block_on(app.handle_key(ctrl('r'))).unwrap();
            let form = app.state.form.loaded().unwrap();
            assert_eq!(form.document.fields[0].id, "a");
        }

        #[test]
        fn test_alert_blocks_input_until_dismissed() {
            let mut app = app();
            block_on(app.handle_key(ctrl('r'))).unwrap();
            assert!(app.state.has_alert());
            type_text(&mut app, "abc");
            assert!(app.state.xml_input.is_empty());
            block_on(app.handle_key(key(KeyCode::Esc))).unwrap();
            assert!(!app.state.has_alert());
        }

        #[test]
        fn test_form_keys_edit_session() {
            let mut app = app();
            app.load_standard_form();
            type_text(&mut app, "Ada");
            block_on(app.handle_key(key(KeyCode::PageDown))).unwrap();
            block_on(app.handle_key(key(KeyCode::PageDown))).unwrap();
            type_text(&mut app, "1");
            let form = app.state.form.loaded().unwrap();
            assert_eq!(form.session.text("1"), "Ada");
            assert_eq!(
                form.session.date_parts("3").unwrap().day.as_deref(),
                Some("1")
            );
        }

        #[test]
        fn test_space_toggles_radio_option() {
            let mut app = App::with_source(
                AppState::new(SelectionMode::Independent),
                Box::new(MockDocumentSource::new()),
            );
            app.load_standard_form();
            for _ in 0..3 {
                block_on(app.handle_key(key(KeyCode::PageDown))).unwrap();
            }
            block_on(app.handle_key(key(KeyCode::Char(' ')))).unwrap();
            block_on(app.handle_key(key(KeyCode::Right))).unwrap();
            block_on(app.handle_key(key(KeyCode::Char(' ')))).unwrap();
            let form = app.state.form.loaded().unwrap();
            assert!(form.session.is_selected("4", "male"));
            assert!(form.session.is_selected("4", "female"));
        }

        #[test]
        fn test_tab_and_page_keys_move_focus_in_form() {
            let mut app = app();
            app.load_standard_form();
            block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
            assert_eq!(app.state.current_view, View::Form);
            let focused = |app: &App| {
                app.state
                    .form
                    .loaded()
                    .and_then(|f| f.active_target())
                    .map(|t| t.field_id().to_string())
            };
            assert_eq!(focused(&app).as_deref(), Some("2"));
            block_on(app.handle_key(key(KeyCode::PageDown))).unwrap();
            assert_eq!(focused(&app).as_deref(), Some("3"));
            block_on(app.handle_key(key(KeyCode::PageUp))).unwrap();
            assert_eq!(focused(&app).as_deref(), Some("2"));
            block_on(app.handle_key(key(KeyCode::BackTab))).unwrap();
            assert_eq!(focused(&app).as_deref(), Some("1"));
        }

        #[test]
        fn test_esc_returns_to_editor() {
            let mut app = app();
            app.load_standard_form();
            block_on(app.handle_key(key(KeyCode::Esc))).unwrap();
            assert_eq!(app.state.current_view, View::Editor);
            block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
            assert_eq!(app.state.current_view, View::Form);
        }
    }

    mod open_document {
        use super::*;

        #[test]
        fn test_open_loads_through_source() {
            let mut source = MockDocumentSource::new();
            source
                .expect_load()
                .withf(|path| path.ends_with("forms/intake.xml"))
                .times(1)
                .returning(|_| Ok(REFERENCE_FORM.to_string()));
            let mut app = app_with(source);

            block_on(app.handle_key(ctrl('o'))).unwrap();
            assert_eq!(app.state.current_view, View::OpenPath);
            type_text(&mut app, "forms/intake.xml");
            block_on(app.handle_key(key(KeyCode::Enter))).unwrap();

            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(app.state.xml_input, REFERENCE_FORM);
            assert!(app.state.form.is_loaded());
        }

        #[test]
        fn test_source_error_raises_alert() {
            let mut source = MockDocumentSource::new();
            source
                .expect_load()
                .returning(|_| Err(SourceError::UnsupportedExtension("a.json".to_string())));
            let mut app = app_with(source);

            assert!(!block_on(app.open_document(PathBuf::from("a.json"))));
            let alert = app.state.alert.clone().unwrap();
            assert_eq!(alert.title, "Error");
            assert!(alert.message.contains("a.json"));
        }

        #[test]
        fn test_empty_path_does_not_call_source() {
            let mut source = MockDocumentSource::new();
            source.expect_load().times(0);
            let mut app = app_with(source);

            block_on(app.handle_key(ctrl('o'))).unwrap();
            block_on(app.handle_key(key(KeyCode::Enter))).unwrap();
            assert_eq!(app.state.current_view, View::Editor);
        }

        #[test]
        fn test_control_chords_do_not_type_into_prompt() {
            let mut app = app();
            block_on(app.handle_key(ctrl('o'))).unwrap();
            type_text(&mut app, "a.xml");
            block_on(app.handle_key(ctrl('v'))).unwrap();
            block_on(app.handle_key(ctrl('l'))).unwrap();
            assert_eq!(app.state.path_input, "a.xml");
            assert_eq!(app.state.current_view, View::OpenPath);
        }

        #[test]
        fn test_esc_cancels_prompt() {
            let mut app = app();
            block_on(app.handle_key(ctrl('o'))).unwrap();
            type_text(&mut app, "x.xml");
            block_on(app.handle_key(key(KeyCode::Esc))).unwrap();
            assert_eq!(app.state.current_view, View::Editor);
            assert!(app.state.xml_input.is_empty());
        }
    }
}
