//! Form pane rendering

mod field_renderer;

use crate::app::App;
use crate::form::Control;
use crate::state::{FocusTarget, LoadedForm, View};
use field_renderer::{control_height, draw_date_input, draw_drawing, draw_radio, draw_text_input};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form pane: the rendered controls, or a hint when nothing is loaded
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.current_view == View::Form;
    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(form) = app.state.form.loaded() else {
        let hint = Paragraph::new(
            "No form loaded.\n\nPress ^L for the standard form, ^R to render the XML input, or ^O to open a file.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    };

    draw_controls(frame, inner, form, is_active);
}

fn draw_controls(frame: &mut Frame, area: Rect, form: &LoadedForm, is_active: bool) {
    let controls = form.controls();
    let heights: Vec<u16> = controls.iter().map(control_height).collect();
    let focused_index = form
        .active_target()
        .and_then(|t| controls.iter().position(|c| c.field_id() == t.field_id()));
    let first = first_visible(&heights, focused_index, area.height);

    let mut y = area.y;
    for (control, height) in controls.iter().zip(&heights).skip(first) {
        let bottom = area.y + area.height;
        if y >= bottom {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: (*height).min(bottom - y),
        };
        draw_control(frame, rect, control, form, is_active);
        y += height;
    }
}

fn draw_control(
    frame: &mut Frame,
    area: Rect,
    control: &Control,
    form: &LoadedForm,
    pane_active: bool,
) {
    let focused = form.active_target().filter(|_| pane_active);
    match control {
        Control::TextInput {
            field_id,
            placeholder,
            value,
        } => {
            let is_active =
                matches!(focused, Some(FocusTarget::Text { field_id: id }) if id == field_id);
            draw_text_input(frame, area, placeholder, value, is_active);
        }
        Control::DateInput {
            field_id,
            label,
            segments,
        } => {
            let part = match focused {
                Some(FocusTarget::DatePart { field_id: id, part }) if id == field_id => Some(*part),
                _ => None,
            };
            draw_date_input(frame, area, label, segments, part);
        }
        Control::Radio {
            field_id,
            label,
            options,
        } => {
            let option = match focused {
                Some(FocusTarget::RadioOption {
                    field_id: id,
                    option_id,
                }) if id == field_id => Some(option_id.as_str()),
                _ => None,
            };
            draw_radio(frame, area, label, options, option);
        }
        Control::Drawing {
            field_id,
            label,
            prompt,
            value,
        } => {
            let is_active =
                matches!(focused, Some(FocusTarget::Drawing { field_id: id }) if id == field_id);
            draw_drawing(frame, area, label, prompt, value, is_active);
        }
    }
}

/// Index of the first control to draw so the focused one fits in `available` rows
fn first_visible(heights: &[u16], focused: Option<usize>, available: u16) -> usize {
    let Some(focused) = focused else {
        return 0;
    };
    let mut first = 0;
    while first < focused {
        let used: u32 = heights[first..=focused].iter().map(|h| u32::from(*h)).sum();
        if used <= u32::from(available) {
            break;
        }
        first += 1;
    }
    first
}
