//! Dialog components for TUI

mod alert_dialog;
mod base;
mod prompt_dialog;

pub use alert_dialog::render_alert_dialog;
pub use prompt_dialog::render_prompt_dialog;
