//! Tooltip overlay component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the tooltip at `area`, over whatever is below it
pub fn render_tooltip(frame: &mut Frame, area: Rect, title: &str, lines: &[&str], focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::White };
    let max_line_width = area.width.saturating_sub(4) as usize;

    // Clear the area behind the tooltip
    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in lines {
        for wrapped in wrap_text(&format!("• {line}"), max_line_width) {
            content.push(Line::from(wrapped));
        }
    }

    let tooltip = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .padding(ratatui::widgets::Padding::horizontal(1))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(tooltip, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let current_width = current_line.chars().count();
        if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }
    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Sauvegardes automatiques", 40), vec!["Sauvegardes automatiques"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Mises à jour de sécurité mensuelles", 16);
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
        assert_eq!(lines.join(" "), "Mises à jour de sécurité mensuelles");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
