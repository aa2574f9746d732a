//! UI module for rendering the TUI

mod components;
mod editor;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (editor_area, form_area) = layout::create_layout(area);

    editor::draw(frame, editor_area, app);
    forms::draw_form(frame, form_area, app);

    layout::draw_status_bar(frame, app);

    // Overlays
    if app.state.current_view == View::OpenPath {
        components::render_prompt_dialog(frame, "Open form (.xml, .txt)", &app.state.path_input);
    }
    if let Some(alert) = &app.state.alert {
        components::render_alert_dialog(frame, alert);
    }
}
