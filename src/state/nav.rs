//! Header navigation: compact menu, anchor links and scrolled marker

use super::content::HERO_TITLE;
use super::page::{PageLayout, Section, HEADER_HEIGHT};
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;

/// Below this terminal width the links collapse into a menu
pub const NAV_BREAKPOINT: u16 = 80;
/// Page rows scrolled before the header is marked as scrolled
pub const HEADER_SCROLL_THRESHOLD: u16 = 4;
pub const MENU_TOGGLE_LABEL: &str = "☰ Menu";
const DROPDOWN_WIDTH: u16 = 20;
const LINK_GAP: u16 = 2;

/// Navigation links, in header order
pub const NAV_LINKS: [Section; 4] = [
    Section::Hero,
    Section::Services,
    Section::Pricing,
    Section::Contact,
];

pub fn is_compact(width: u16) -> bool {
    width < NAV_BREAKPOINT
}

/// Open/closed state of the compact menu
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "menu toggled");
    }

    /// Close the menu, returning whether it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Close after a resize that no longer needs the compact menu
    pub fn on_resized(&mut self, width: u16) -> bool {
        !is_compact(width) && self.close()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderState {
    scrolled: bool,
}

impl HeaderState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute the marker for a scroll offset, returning whether it changed
    pub fn update(&mut self, scroll: u16) -> bool {
        let scrolled = scroll > HEADER_SCROLL_THRESHOLD;
        std::mem::replace(&mut self.scrolled, scrolled) != scrolled
    }
}

/// Screen regions of the header and its dropdown
#[derive(Debug, Clone, Default)]
pub struct HeaderLayout {
    pub area: Rect,
    pub brand: Rect,
    /// Inline links on wide terminals, dropdown rows on compact ones
    pub links: Vec<(Section, Rect)>,
    pub toggle: Option<Rect>,
    pub dropdown: Option<Rect>,
}

impl HeaderLayout {
    pub fn compute(width: u16, menu_open: bool) -> Self {
        let area = Rect::new(0, 0, width, HEADER_HEIGHT);
        let row = 1;
        let brand_width = (Line::from(HERO_TITLE).width() as u16).min(width.saturating_sub(4));
        let brand = Rect::new(2, row, brand_width, 1);

        if is_compact(width) {
            let label_width = Line::from(MENU_TOGGLE_LABEL).width() as u16;
            let toggle = Rect::new(width.saturating_sub(label_width + 2), row, label_width, 1);
            let mut links = Vec::new();
            let mut dropdown = None;
            if menu_open {
                let drop_width = DROPDOWN_WIDTH.min(width);
                let rect = Rect::new(
                    width - drop_width,
                    HEADER_HEIGHT,
                    drop_width,
                    NAV_LINKS.len() as u16 + 2,
                );
                for (i, section) in NAV_LINKS.iter().enumerate() {
                    links.push((
                        *section,
                        Rect::new(rect.x + 1, rect.y + 1 + i as u16, drop_width.saturating_sub(2), 1),
                    ));
                }
                dropdown = Some(rect);
            }
            return Self {
                area,
                brand,
                links,
                toggle: Some(toggle),
                dropdown,
            };
        }

        let widths: Vec<u16> = NAV_LINKS
            .iter()
            .map(|s| Line::from(s.title()).width() as u16)
            .collect();
        let total: u16 = widths.iter().sum::<u16>() + LINK_GAP * (widths.len() as u16 - 1);
        let mut x = width.saturating_sub(total + 2);
        let mut links = Vec::with_capacity(NAV_LINKS.len());
        for (section, w) in NAV_LINKS.iter().zip(widths) {
            links.push((*section, Rect::new(x, row, w, 1)));
            x += w + LINK_GAP;
        }

        Self {
            area,
            brand,
            links,
            toggle: None,
            dropdown: None,
        }
    }

    pub fn link_at(&self, x: u16, y: u16) -> Option<Section> {
        let pos = Position::new(x, y);
        self.links
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(section, _)| *section)
    }

    pub fn is_toggle(&self, x: u16, y: u16) -> bool {
        self.toggle
            .is_some_and(|rect| rect.contains(Position::new(x, y)))
    }

    /// Whether a screen position falls inside the navigation container
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let pos = Position::new(x, y);
        self.area.contains(pos) || self.dropdown.is_some_and(|rect| rect.contains(pos))
    }
}

/// Scroll offset that puts `section` one row below the header
pub fn anchor_scroll(layout: &PageLayout, section: Section, view_height: u16) -> Option<u16> {
    let rect = layout.section(section)?;
    Some(rect.y.saturating_sub(1).min(layout.max_scroll(view_height)))
}

/// Resolve an anchor such as `#tarifs`; empty anchors resolve to nothing
pub fn section_for_anchor(anchor: &str) -> Option<Section> {
    match anchor {
        "" | "#" | "#!" => None,
        _ => NAV_LINKS.into_iter().find(|s| s.anchor() == anchor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_breakpoint() {
        assert!(is_compact(79));
        assert!(!is_compact(80));
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(!menu.close());

        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_closes_menu_only_when_wide() {
        let mut menu = NavMenu::default();
        menu.toggle();

        assert!(!menu.on_resized(60));
        assert!(menu.is_open());

        assert!(menu.on_resized(120));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_header_scrolled_marker() {
        let mut header = HeaderState::default();
        assert!(!header.update(HEADER_SCROLL_THRESHOLD));
        assert!(!header.is_scrolled());

        assert!(header.update(HEADER_SCROLL_THRESHOLD + 1));
        assert!(header.is_scrolled());
        assert!(!header.update(40));

        assert!(header.update(0));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn test_wide_header_has_inline_links() {
        let header = HeaderLayout::compute(120, false);
        assert!(header.toggle.is_none());
        assert_eq!(header.links.len(), NAV_LINKS.len());

        let (section, rect) = header.links[2];
        assert_eq!(header.link_at(rect.x, rect.y), Some(section));
        assert!(header.links.last().unwrap().1.right() <= 118);
    }

    #[test]
    fn test_compact_header_dropdown() {
        let closed = HeaderLayout::compute(60, false);
        assert!(closed.links.is_empty());
        let toggle = closed.toggle.unwrap();
        assert!(closed.is_toggle(toggle.x, toggle.y));

        let open = HeaderLayout::compute(60, true);
        let dropdown = open.dropdown.unwrap();
        assert_eq!(dropdown.y, HEADER_HEIGHT);
        assert!(open.contains(dropdown.x + 1, dropdown.y + 1));
        assert!(!open.contains(0, dropdown.y + 1));
        assert_eq!(
            open.link_at(dropdown.x + 1, dropdown.y + 1),
            Some(Section::Hero)
        );
    }

    #[test]
    fn test_anchor_scroll_offsets_by_one_row() {
        let layout = PageLayout::compute(100, 0);
        let pricing = layout.section(Section::Pricing).unwrap();

        assert_eq!(
            anchor_scroll(&layout, Section::Pricing, 10),
            Some(pricing.y - 1)
        );
        assert_eq!(anchor_scroll(&layout, Section::Hero, 10), Some(0));
        let contact = layout.section(Section::Contact).unwrap();
        assert_eq!(
            anchor_scroll(&layout, Section::Contact, 10),
            Some(contact.y - 1)
        );
    }

    #[test]
    fn test_anchor_scroll_clamps_to_page_end() {
        let layout = PageLayout::compute(100, 0);
        let contact = layout.section(Section::Contact).unwrap();
        // View taller than the page tail below the contact anchor
        let view = layout.height - contact.y + 5;

        assert!(layout.max_scroll(view) < contact.y - 1);
        assert_eq!(
            anchor_scroll(&layout, Section::Contact, view),
            Some(layout.max_scroll(view))
        );
    }

    #[test]
    fn test_empty_anchor_resolves_to_nothing() {
        assert_eq!(section_for_anchor("#"), None);
        assert_eq!(section_for_anchor("#!"), None);
        assert_eq!(section_for_anchor("#inconnu"), None);
        assert_eq!(section_for_anchor("#tarifs"), Some(Section::Pricing));
    }
}
