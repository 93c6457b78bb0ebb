//! Success/error notice shown at the top of the form

use crate::contact::{MessageKind, TransientMessage};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub fn render_banner(buf: &mut Buffer, area: Rect, message: &TransientMessage) {
    let (color, icon) = match message.kind {
        MessageKind::Success => (Color::Green, "✓"),
        MessageKind::Error => (Color::Red, "⚠"),
    };

    Paragraph::new(Line::from(format!("{icon} {}", message.text)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .render(area, buf);
}
