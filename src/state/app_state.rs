//! Application state definitions

use super::nav::{HeaderState, NavMenu, NAV_LINKS};
use super::page::{Section, TriggerId};
use super::reveal::RevealSet;
use crate::contact::FieldName;

/// Rows moved by one PageUp/PageDown
pub const PAGE_SCROLL_ROWS: u16 = 10;

/// Focusable element of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    NavLink(Section),
    MenuToggle,
    Trigger(TriggerId),
    /// The open tooltip itself
    Tooltip,
    Field(FieldName),
    Submit,
}

/// Tab order of everything currently focusable
///
/// The tooltip follows the trigger that opened it, the dropdown links
/// follow the menu toggle while the menu is open.
pub fn focus_order(
    compact: bool,
    menu_open: bool,
    triggers: impl IntoIterator<Item = TriggerId>,
    tooltip_for: Option<TriggerId>,
) -> Vec<Focus> {
    let mut order = Vec::new();
    if compact {
        order.push(Focus::MenuToggle);
        if menu_open {
            order.extend(NAV_LINKS.iter().map(|s| Focus::NavLink(*s)));
        }
    } else {
        order.extend(NAV_LINKS.iter().map(|s| Focus::NavLink(*s)));
    }
    for trigger in triggers {
        order.push(Focus::Trigger(trigger));
        if tooltip_for == Some(trigger) {
            order.push(Focus::Tooltip);
        }
    }
    order.extend(FieldName::ALL.iter().map(|f| Focus::Field(*f)));
    order.push(Focus::Submit);
    order
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Focus
    pub focus: Option<Focus>,
    pub hovered_trigger: Option<TriggerId>,

    // Scrolling
    pub scroll_offset: u16,

    pub reveals: RevealSet,

    // Header
    pub menu: NavMenu,
    pub header: HeaderState,
}

impl AppState {
    /// Element after the current one, wrapping around
    pub fn focus_after(&self, order: &[Focus]) -> Option<Focus> {
        let next = match self.position_in(order) {
            Some(i) => order.get((i + 1) % order.len()),
            None => order.first(),
        };
        next.copied()
    }

    /// Element before the current one, wrapping around
    pub fn focus_before(&self, order: &[Focus]) -> Option<Focus> {
        let prev = match self.position_in(order) {
            Some(0) | None => order.last(),
            Some(i) => order.get(i - 1),
        };
        prev.copied()
    }

    fn position_in(&self, order: &[Focus]) -> Option<usize> {
        let focus = self.focus?;
        order.iter().position(|f| *f == focus)
    }

    pub fn focused_field(&self) -> Option<FieldName> {
        match self.focus {
            Some(Focus::Field(name)) => Some(name),
            _ => None,
        }
    }

    /// Scroll down, clamped to `max`
    pub fn scroll_down(&mut self, rows: u16, max: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows).min(max);
    }

    /// Scroll up
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_to(&mut self, offset: u16, max: u16) {
        self.scroll_offset = offset.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triggers() -> Vec<TriggerId> {
        vec![TriggerId(0), TriggerId(1)]
    }

    #[test]
    fn test_wide_order() {
        let order = focus_order(false, false, triggers(), None);
        assert_eq!(order[0], Focus::NavLink(Section::Hero));
        assert_eq!(order[4], Focus::Trigger(TriggerId(0)));
        assert_eq!(order[6], Focus::Field(FieldName::Name));
        assert_eq!(order.last(), Some(&Focus::Submit));
        assert!(!order.contains(&Focus::MenuToggle));
    }

    #[test]
    fn test_compact_order_depends_on_menu() {
        let closed = focus_order(true, false, triggers(), None);
        assert_eq!(closed[0], Focus::MenuToggle);
        assert_eq!(closed[1], Focus::Trigger(TriggerId(0)));

        let open = focus_order(true, true, triggers(), None);
        assert_eq!(open[1], Focus::NavLink(Section::Hero));
    }

    #[test]
    fn test_tooltip_follows_its_trigger() {
        let order = focus_order(false, false, triggers(), Some(TriggerId(1)));
        let at = order
            .iter()
            .position(|f| *f == Focus::Trigger(TriggerId(1)))
            .unwrap();
        assert_eq!(order[at + 1], Focus::Tooltip);
    }

    #[test]
    fn test_focus_cycles() {
        let order = focus_order(false, false, triggers(), None);
        let mut state = AppState::default();

        state.focus = state.focus_after(&order);
        assert_eq!(state.focus, Some(order[0]));
        state.focus = state.focus_before(&order);
        assert_eq!(state.focus, Some(Focus::Submit));
        assert_eq!(state.focus_after(&order), Some(order[0]));
    }

    #[test]
    fn test_prev_from_nothing_goes_to_last() {
        let order = focus_order(false, false, triggers(), None);
        let state = AppState::default();
        assert_eq!(state.focus_before(&order), Some(Focus::Submit));
    }

    #[test]
    fn test_stale_focus_restarts_order() {
        let order = focus_order(false, false, triggers(), None);
        let state = AppState {
            focus: Some(Focus::Tooltip),
            ..Default::default()
        };
        assert_eq!(state.focus_after(&order), Some(order[0]));
    }

    #[test]
    fn test_focused_field() {
        let mut state = AppState::default();
        assert_eq!(state.focused_field(), None);
        state.focus = Some(Focus::Field(FieldName::Email));
        assert_eq!(state.focused_field(), Some(FieldName::Email));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = AppState::default();
        state.scroll_down(PAGE_SCROLL_ROWS, 25);
        state.scroll_down(PAGE_SCROLL_ROWS, 25);
        state.scroll_down(PAGE_SCROLL_ROWS, 25);
        assert_eq!(state.scroll_offset, 25);

        state.scroll_up(100);
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to(40, 25);
        assert_eq!(state.scroll_offset, 25);
    }
}
