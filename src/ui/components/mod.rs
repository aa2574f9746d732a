//! Reusable UI components

mod button;
mod dialog;

pub use button::{option_button_width, render_option_button, BUTTON_HEIGHT};
pub use dialog::{render_alert_dialog, render_prompt_dialog};
