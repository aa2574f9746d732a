//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Filled or hollow indicator for a radio option
pub fn option_indicator(is_selected: bool) -> &'static str {
    if is_selected {
        "◉"
    } else {
        "○"
    }
}

/// Render a radio option as a button with its indicator and display text
pub fn render_option_button(
    frame: &mut Frame,
    area: Rect,
    display: &str,
    is_selected: bool,
    is_focused: bool,
) {
    let content = format!("{} {display}", option_indicator(is_selected));
    render_button(frame, area, &content, is_focused);
}

/// Width an option button needs for its content and borders
pub fn option_button_width(display: &str) -> u16 {
    // indicator + space + text, padded by one column each side, plus borders
    (display.chars().count() as u16).saturating_add(6)
}
