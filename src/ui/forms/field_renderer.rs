//! Drawing of individual form controls

use crate::form::{Control, DateSegment, RadioOptionControl, DATE_SEPARATOR, NO_OPTIONS_NOTICE};
use crate::state::DatePart;
use crate::ui::components::{option_button_width, render_option_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows of the multi-line drawing placeholder, borders included
const DRAWING_HEIGHT: u16 = 6;

/// Rows a control occupies
pub fn control_height(control: &Control) -> u16 {
    match control {
        Control::TextInput { .. } => 3,
        Control::DateInput { .. } => 1 + 3,
        Control::Radio { options, .. } if options.is_empty() => 1 + 1,
        Control::Radio { .. } => 1 + BUTTON_HEIGHT,
        Control::Drawing { .. } => 1 + DRAWING_HEIGHT,
    }
}

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn label_line(label: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
}

/// Split off the label row above a control body
fn split_label(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Content of an input: its value with a cursor, or a dimmed placeholder
fn input_line<'a>(value: &'a str, placeholder: &'a str, is_active: bool) -> Line<'a> {
    let cursor = Span::styled(if is_active { "▌" } else { "" }, border_style(true));
    if value.is_empty() {
        Line::from(vec![
            cursor,
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw(value), cursor])
    }
}

/// Single-line text input whose placeholder is the field label
pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    placeholder: &str,
    value: &str,
    is_active: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active));
    let paragraph = Paragraph::new(input_line(value, placeholder, is_active)).block(block);
    frame.render_widget(paragraph, area);
}

/// Label above three side-by-side numeric boxes separated by slashes
pub fn draw_date_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    segments: &[DateSegment; 3],
    focused_part: Option<DatePart>,
) {
    let (label_area, body) = split_label(area);
    frame.render_widget(label_line(label), label_area);

    let separator_width = DATE_SEPARATOR.len() as u16 + 2;
    let mut constraints = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            constraints.push(Constraint::Length(separator_width));
        }
        // Room for the widest of value and placeholder, cursor and borders
        let width = segment.max_len.max(segment.placeholder.len()) as u16 + 3;
        constraints.push(Constraint::Length(width));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(body);

    for (i, segment) in segments.iter().enumerate() {
        let is_active = focused_part == Some(segment.part);
        if i > 0 {
            let separator = Paragraph::new(format!("\n {DATE_SEPARATOR}"))
                .style(Style::default().fg(Color::White));
            frame.render_widget(separator, chunks[i * 2 - 1]);
        }
        draw_text_input(
            frame,
            chunks[i * 2],
            segment.placeholder,
            &segment.value,
            is_active,
        );
    }
}

/// Label above a horizontal row of option toggles
pub fn draw_radio(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[RadioOptionControl],
    focused_option: Option<&str>,
) {
    let (label_area, body) = split_label(area);
    frame.render_widget(label_line(label), label_area);

    if options.is_empty() {
        let notice = Paragraph::new(NO_OPTIONS_NOTICE).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(notice, body);
        return;
    }

    let mut constraints: Vec<Constraint> = options
        .iter()
        .map(|o| Constraint::Length(option_button_width(&o.display)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(body);

    for (option, chunk) in options.iter().zip(chunks.iter()) {
        let is_focused = focused_option == Some(option.option_id.as_str());
        render_option_button(frame, *chunk, &option.display, option.selected, is_focused);
    }
}

/// Label above a multi-line placeholder box standing in for a drawing pad
pub fn draw_drawing(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    prompt: &str,
    value: &str,
    is_active: bool,
) {
    let (label_area, body) = split_label(area);
    frame.render_widget(label_line(label), label_area);

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![input_line("", prompt, is_active)]
    } else {
        value.split('\n').map(|l| Line::from(l.to_string())).collect()
    };
    if is_active && !value.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("▌", border_style(true)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        body,
    );
}
