//! XML input pane

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the raw XML buffer, scrolled so the end of the text stays visible
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.current_view == View::Editor;
    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Enter XML Input: ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let input = &app.state.xml_input;
    let mut lines: Vec<Line> = if input.is_empty() && !is_active {
        vec![Line::from(Span::styled(
            "Enter XML here",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        input.split('\n').map(|l| Line::from(l.to_string())).collect()
    };

    if is_active {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
