//! Scrollable page: hero, services, pricing and the contact form
//!
//! The whole page is drawn into an off-screen buffer as tall as the page,
//! then the rows under the viewport are copied into the frame.

use super::contact_form;
use crate::app::App;
use crate::state::{
    Focus, PageLayout, RevealItem, Section, TriggerId, HERO_TAGLINE, HERO_TITLE, PRICING, SERVICES,
    TRIGGER_LABEL,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

/// Draw the visible part of the page into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let layout = app.page_layout();
    let mut page = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));

    draw_hero(&mut page, &layout);
    draw_services(&mut page, &layout, app);
    draw_pricing(&mut page, &layout, app);
    contact_form::draw_form(
        &mut page,
        &layout,
        &app.form,
        app.state.focus,
        app.frame_count,
    );

    blit(&page, app.state.scroll_offset, area, frame.buffer_mut());
}

/// Copy page rows starting at `scroll` into `target`
fn blit(page: &Buffer, scroll: u16, target: Rect, out: &mut Buffer) {
    for row in 0..target.height {
        let src_y = scroll.saturating_add(row);
        if src_y >= page.area.height {
            break;
        }
        for col in 0..target.width.min(page.area.width) {
            let Some(src) = page.cell((col, src_y)) else {
                continue;
            };
            if let Some(dst) = out.cell_mut((target.x + col, target.y + row)) {
                *dst = src.clone();
            }
        }
    }
}

fn section_area(layout: &PageLayout, section: Section) -> Rect {
    layout.section(section).unwrap_or_default()
}

fn draw_hero(buf: &mut Buffer, layout: &PageLayout) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(HERO_TAGLINE),
        Line::from(""),
        Line::from(Span::styled(
            "Tab pour naviguer, ↑↓ pour défiler",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(section_area(layout, Section::Hero), buf);
}

/// Style for an element that has not been scrolled into view yet
fn unrevealed() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

fn draw_services(buf: &mut Buffer, layout: &PageLayout, app: &App) {
    Block::default()
        .title(format!(" {} ", Section::Services.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .render(section_area(layout, Section::Services), buf);

    for (i, ((title, pitch), row)) in SERVICES.iter().zip(&layout.services).enumerate() {
        let line = if app.state.reveals.is_revealed(RevealItem::Service(i)) {
            Line::from(vec![
                Span::styled(format!(" ■ {title}"), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" : {pitch}")),
            ])
        } else {
            Line::styled(format!(" ■ {title} : {pitch}"), unrevealed())
        };
        Paragraph::new(line).render(*row, buf);
    }
}

fn draw_pricing(buf: &mut Buffer, layout: &PageLayout, app: &App) {
    Block::default()
        .title(format!(" {} ", Section::Pricing.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .render(section_area(layout, Section::Pricing), buf);

    for (i, ((plan, card), (trigger, trigger_area))) in PRICING
        .iter()
        .zip(&layout.cards)
        .zip(&layout.triggers)
        .enumerate()
    {
        let revealed = app.state.reveals.is_revealed(RevealItem::Card(i));
        let border = if revealed {
            Style::default().fg(Color::Blue)
        } else {
            unrevealed()
        };
        let mut lines = vec![Line::from(Span::styled(
            plan.price,
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(plan.features.iter().map(|f| Line::from(format!("• {f}"))));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", plan.name))
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .style(if revealed { Style::default() } else { unrevealed() })
            .render(*card, buf);

        Paragraph::new(Span::styled(TRIGGER_LABEL, trigger_style(app, *trigger)))
            .render(*trigger_area, buf);
    }
}

fn trigger_style(app: &App, trigger: TriggerId) -> Style {
    let focused = app.state.focus == Some(Focus::Trigger(trigger));
    let open = app.tooltip.current_trigger() == Some(trigger);
    let hovered = app.state.hovered_trigger == Some(trigger);

    let style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        style.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if open || hovered {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blit_copies_scrolled_rows() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 10));
        page.set_string(0, 5, "abcd", Style::default());
        let mut out = Buffer::empty(Rect::new(0, 0, 4, 4));

        blit(&page, 4, Rect::new(0, 1, 4, 3), &mut out);

        assert_eq!(out.cell((0, 2)).map(|c| c.symbol()), Some("a"));
        assert_eq!(out.cell((3, 2)).map(|c| c.symbol()), Some("d"));
    }

    #[test]
    fn test_blit_stops_at_page_end() {
        let page = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut out = Buffer::empty(Rect::new(0, 0, 4, 4));
        out.set_string(0, 3, "zz", Style::default());

        blit(&page, 1, Rect::new(0, 0, 4, 4), &mut out);

        assert_eq!(out.cell((0, 3)).map(|c| c.symbol()), Some("z"));
    }
}
