//! Button component for TUI

use crate::contact::SubmitButton;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Spinner frames shown while a button is loading
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Render a generic button with border
pub fn render_button(
    buf: &mut Buffer,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    paragraph.block(block).render(area, buf);
}

/// Render the form's submit control, with a spinner while loading
pub fn render_submit_button(
    buf: &mut Buffer,
    area: Rect,
    button: &SubmitButton,
    is_selected: bool,
    frame_count: usize,
) {
    let content = if button.loading {
        format!("{} {}", SPINNER[frame_count % SPINNER.len()], button.label)
    } else {
        format!("➤ {}", button.label)
    };
    render_button(buf, area, &content, is_selected, !button.disabled);
}
