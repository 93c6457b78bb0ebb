//! UI module for rendering the TUI

mod components;
mod contact_form;
mod layout;
mod page;

use crate::app::App;
use crate::state::{Focus, TOOLTIP_LINES, TOOLTIP_TITLE};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, page_area, status_area) = layout::create_layout(area);
    let header = app.header_layout();

    // Page first so the header, dropdown and tooltip draw over it
    page::draw(frame, page_area, app);
    layout::draw_header(frame, header_area, app, &header);
    layout::draw_menu_dropdown(frame, app, &header);

    if !app.tooltip.aria_hidden() {
        if let Some(rect) = app.tooltip_screen_rect() {
            components::render_tooltip(
                frame,
                rect,
                TOOLTIP_TITLE,
                TOOLTIP_LINES,
                app.state.focus == Some(Focus::Tooltip),
            );
        }
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);
}
