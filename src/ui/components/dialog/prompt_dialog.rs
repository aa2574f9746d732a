//! Single-line input dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a prompt with the text typed so far and a trailing cursor
pub fn render_prompt_dialog(frame: &mut Frame, title: &str, input: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" open  "),
        Span::styled("Esc", key_style),
        Span::raw(" cancel"),
    ];
    let message = format!("{input}▌");

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(hint),
            max_width: 70,
        },
    );
}
