//! Contact form rendering

use super::components::{render_banner, render_submit_button};
use crate::contact::{ContactForm, FieldMark, FormField};
use crate::state::{FieldSlot, Focus, PageLayout};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Draw the form container, its notices, fields and submit control
pub fn draw_form(
    buf: &mut Buffer,
    layout: &PageLayout,
    form: &ContactForm,
    focus: Option<Focus>,
    frame_count: usize,
) {
    Block::default()
        .title(" Contact ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .render(layout.form, buf);

    for (area, message) in layout.banners.iter().zip(&form.messages) {
        render_banner(buf, *area, message);
    }

    for slot in &layout.fields {
        let field = form.field(slot.name);
        draw_field(buf, slot, field, focus == Some(Focus::Field(slot.name)));
    }

    render_submit_button(
        buf,
        layout.submit,
        &form.submit,
        focus == Some(Focus::Submit),
        frame_count,
    );
}

/// Border color: focus first, then the validation mark
fn border_style(field: &FormField, is_active: bool) -> Style {
    if is_active {
        return Style::default().fg(Color::Cyan);
    }
    match field.mark {
        FieldMark::Error => Style::default().fg(Color::Red),
        FieldMark::Success => Style::default().fg(Color::Green),
        FieldMark::Neutral => Style::default().fg(Color::DarkGray),
    }
}

/// Draw a form field and its error row
pub fn draw_field(buf: &mut Buffer, slot: &FieldSlot, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    content
        .wrap(Wrap { trim: false })
        .block(block)
        .render(slot.input, buf);

    draw_error_text(buf, slot.error, field);
}

fn draw_error_text(buf: &mut Buffer, area: Rect, field: &FormField) {
    if !field.error_text.visible {
        return;
    }
    Paragraph::new(Line::from(Span::styled(
        format!(" {}", field.error_text.text),
        Style::default().fg(Color::Red),
    )))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FieldName;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_error_row_only_when_visible() {
        let layout = PageLayout::compute(80, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, layout.height));
        let mut form = ContactForm::new();

        draw_form(&mut buf, &layout, &form, None, 0);
        assert!(!buffer_text(&buf).contains("Le nom est obligatoire."));

        form.validate_field(FieldName::Name);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, layout.height));
        draw_form(&mut buf, &layout, &form, None, 0);
        assert!(buffer_text(&buf).contains("Le nom est obligatoire."));
    }

    #[test]
    fn test_marks_color_borders() {
        let mut field = FormField::text(FieldName::Name, "Nom", false);
        assert_eq!(border_style(&field, false).fg, Some(Color::DarkGray));

        field.mark = FieldMark::Error;
        assert_eq!(border_style(&field, false).fg, Some(Color::Red));
        assert_eq!(border_style(&field, true).fg, Some(Color::Cyan));

        field.mark = FieldMark::Success;
        assert_eq!(border_style(&field, false).fg, Some(Color::Green));
    }

    #[test]
    fn test_banners_drawn_above_fields() {
        let mut form = ContactForm::new();
        form.insert_message(crate::contact::TransientMessage::success());
        let layout = PageLayout::compute(80, form.messages.len());
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, layout.height));

        draw_form(&mut buf, &layout, &form, None, 0);

        let text = buffer_text(&buf);
        let banner_at = text.find("✓").unwrap();
        let name_at = text.find("Nom complet").unwrap();
        assert!(banner_at < name_at);
    }
}
