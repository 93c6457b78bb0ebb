//! Layout components (header, menu dropdown, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, HeaderLayout, Section, HEADER_HEIGHT, HERO_TITLE, MENU_TOGGLE_LABEL};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Split the screen into header, page viewport and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let header = Rect {
        height: HEADER_HEIGHT.min(area.height),
        ..area
    };
    let status = Rect {
        y: area.bottom().saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };
    let page = Rect {
        y: header.bottom(),
        height: area.height.saturating_sub(header.height + status.height),
        ..area
    };
    (header, page, status)
}

fn link_style(app: &App, section: Section) -> Style {
    if app.state.focus == Some(Focus::NavLink(section)) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

/// Draw the fixed header with the brand and navigation
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, header: &HeaderLayout) {
    // Scrolled marker
    let border_style = if app.state.header.is_scrolled() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
        area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            HERO_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        header.brand,
    );

    if let Some(toggle) = header.toggle {
        let style = if app.state.focus == Some(Focus::MenuToggle) || app.state.menu.is_open() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Paragraph::new(Span::styled(MENU_TOGGLE_LABEL, style)), toggle);
    }

    if header.dropdown.is_none() {
        for (section, rect) in &header.links {
            frame.render_widget(
                Paragraph::new(Span::styled(section.title(), link_style(app, *section))),
                *rect,
            );
        }
    }
}

/// Draw the compact menu dropdown over the page
pub fn draw_menu_dropdown(frame: &mut Frame, app: &App, header: &HeaderLayout) {
    let Some(dropdown) = header.dropdown else {
        return;
    };
    frame.render_widget(Clear, dropdown);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
        dropdown,
    );
    for (section, rect) in &header.links {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", section.title()),
                link_style(app, *section),
            )),
            *rect,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.is_busy() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    }

    let hints = get_focus_hints(app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let quit_hint = format!(" {QUIT_SHORTCUT}:quitter ");
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let quit_width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_width),
        width: quit_width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused element
fn get_focus_hints(focus: Option<Focus>) -> String {
    match focus {
        Some(Focus::Field(name)) if name.is_required() => {
            format!("Tab:suivant  {SUBMIT_SHORTCUT}:envoyer  Champ obligatoire")
        }
        Some(Focus::Field(_)) => {
            format!("Tab:suivant  ←→:choisir  {SUBMIT_SHORTCUT}:envoyer")
        }
        Some(Focus::Trigger(_)) => "Entrée/Espace:détails  Tab:suivant".to_string(),
        Some(Focus::Tooltip) => "Esc:fermer  Tab:suivant".to_string(),
        Some(Focus::NavLink(_)) => "Entrée:aller à la section  Tab:suivant".to_string(),
        Some(Focus::MenuToggle) => "Entrée:menu  Esc:fermer".to_string(),
        Some(Focus::Submit) => format!("Entrée:envoyer  {SUBMIT_SHORTCUT}:envoyer"),
        None => "Tab:naviguer  ↑↓/PgUp/PgDn:défiler".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FieldName;

    #[test]
    fn test_create_layout_splits_rows() {
        let (header, page, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(page, Rect::new(0, 3, 80, 20));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_focus_hints(None).contains("Tab"));
        assert!(get_focus_hints(Some(Focus::Tooltip)).contains("Esc"));
        assert!(get_focus_hints(Some(Focus::Field(FieldName::Budget))).contains("←→"));
        assert!(get_focus_hints(Some(Focus::Field(FieldName::Name))).contains("obligatoire"));
    }
}
