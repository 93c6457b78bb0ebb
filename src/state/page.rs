//! Page geometry for drawing and mouse hit-testing
//!
//! The page is a tall column of sections scrolled under a fixed header.
//! Everything is computed here once per frame so rendering and event
//! handling agree on where each element sits.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:   Header (fixed, 3 rows with borders)
//! Row 3+:    Page viewport, showing page rows [scroll, scroll + view height)
//!            - Hero
//!            - Services
//!            - Pricing cards, each with a tooltip trigger
//!            - Contact form: notices, five fields, submit control
//! Bottom:    Status bar (1 row)
//! ```

use super::content::{tooltip_height, PRICING, SERVICES, TOOLTIP_WIDTH, TRIGGER_LABEL};
use super::reveal::RevealItem;
use crate::contact::FieldName;
use crate::tooltip::{Bounds, Size, TooltipPosition, TooltipSurface};
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const HERO_HEIGHT: u16 = 6;
pub const CARD_HEIGHT: u16 = 8;
pub const BANNER_HEIGHT: u16 = 4;
pub const INPUT_HEIGHT: u16 = 3;
pub const MULTILINE_INPUT_HEIGHT: u16 = 6;
pub const SUBMIT_HEIGHT: u16 = 3;
const FORM_MAX_WIDTH: u16 = 72;
const SUBMIT_MAX_WIDTH: u16 = 30;

/// Top-level page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Services,
    Pricing,
    Contact,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "#accueil",
            Section::Services => "#services",
            Section::Pricing => "#tarifs",
            Section::Contact => "#contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Accueil",
            Section::Services => "Services",
            Section::Pricing => "Tarifs",
            Section::Contact => "Contact",
        }
    }
}

/// Stable identifier of a tooltip trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub usize);

/// Input box and error row of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub name: FieldName,
    pub input: Rect,
    pub error: Rect,
}

/// Interactive element under a page position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Trigger(TriggerId),
    Field(FieldName),
    Submit,
}

/// Positions of every page element, in page coordinates
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub sections: Vec<(Section, Rect)>,
    /// One row per service line
    pub services: Vec<Rect>,
    pub cards: Vec<Rect>,
    pub triggers: Vec<(TriggerId, Rect)>,
    pub form: Rect,
    pub banners: Vec<Rect>,
    pub fields: Vec<FieldSlot>,
    pub submit: Rect,
}

impl PageLayout {
    /// Lay the page out for a terminal `width`, with `banner_count` notices
    /// at the top of the form
    pub fn compute(width: u16, banner_count: usize) -> Self {
        let mut sections = Vec::with_capacity(4);
        let mut y = 0;

        sections.push((Section::Hero, Rect::new(0, y, width, HERO_HEIGHT)));
        y += HERO_HEIGHT;

        // Borders plus a blank row above the list
        let services_height = SERVICES.len() as u16 + 3;
        sections.push((Section::Services, Rect::new(0, y, width, services_height)));
        let services = (0..SERVICES.len() as u16)
            .map(|i| Rect::new(1, y + 2 + i, width.saturating_sub(2), 1))
            .collect();
        y += services_height;

        let pricing_height = CARD_HEIGHT + 2;
        sections.push((Section::Pricing, Rect::new(0, y, width, pricing_height)));
        let card_width = width.saturating_sub(2) / PRICING.len() as u16;
        let trigger_width = Line::from(TRIGGER_LABEL).width() as u16;
        let mut cards = Vec::with_capacity(PRICING.len());
        let mut triggers = Vec::with_capacity(PRICING.len());
        for i in 0..PRICING.len() {
            let card = Rect::new(1 + i as u16 * card_width, y + 1, card_width, CARD_HEIGHT);
            let trigger = Rect::new(
                card.x + 2,
                card.y + CARD_HEIGHT - 2,
                trigger_width.min(card.width.saturating_sub(4)),
                1,
            );
            cards.push(card);
            triggers.push((TriggerId(i), trigger));
        }
        y += pricing_height;

        let contact_top = y;
        let form_width = width.saturating_sub(2).min(FORM_MAX_WIDTH);
        let form_x = (width - form_width) / 2;
        let inner_x = form_x + 1;
        let inner_width = form_width.saturating_sub(2);
        let mut row = contact_top + 1;

        let mut banners = Vec::with_capacity(banner_count);
        for _ in 0..banner_count {
            banners.push(Rect::new(inner_x, row, inner_width, BANNER_HEIGHT));
            row += BANNER_HEIGHT;
        }

        let mut fields = Vec::with_capacity(FieldName::ALL.len());
        for name in FieldName::ALL {
            let height = if name == FieldName::Message {
                MULTILINE_INPUT_HEIGHT
            } else {
                INPUT_HEIGHT
            };
            fields.push(FieldSlot {
                name,
                input: Rect::new(inner_x, row, inner_width, height),
                error: Rect::new(inner_x, row + height, inner_width, 1),
            });
            row += height + 1;
        }

        let submit = Rect::new(
            inner_x,
            row,
            inner_width.min(SUBMIT_MAX_WIDTH),
            SUBMIT_HEIGHT,
        );
        row += SUBMIT_HEIGHT;

        let contact_height = row + 1 - contact_top;
        sections.push((
            Section::Contact,
            Rect::new(0, contact_top, width, contact_height),
        ));

        Self {
            width,
            height: contact_top + contact_height,
            sections,
            services,
            cards,
            triggers,
            form: Rect::new(form_x, contact_top, form_width, contact_height),
            banners,
            fields,
            submit,
        }
    }

    pub fn section(&self, section: Section) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, rect)| *rect)
    }

    pub fn trigger(&self, trigger: TriggerId) -> Option<Rect> {
        self.triggers
            .iter()
            .find(|(id, _)| *id == trigger)
            .map(|(_, rect)| *rect)
    }

    pub fn field(&self, name: FieldName) -> Option<&FieldSlot> {
        self.fields.iter().find(|slot| slot.name == name)
    }

    pub fn trigger_ids(&self) -> impl Iterator<Item = TriggerId> + '_ {
        self.triggers.iter().map(|(id, _)| *id)
    }

    /// Service lines and pricing cards that fade in when scrolled into view
    pub fn reveal_targets(&self) -> Vec<(RevealItem, Rect)> {
        let services = self
            .services
            .iter()
            .enumerate()
            .map(|(i, rect)| (RevealItem::Service(i), *rect));
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, rect)| (RevealItem::Card(i), *rect));
        services.chain(cards).collect()
    }

    /// Interactive element at column `x`, page row `y`
    pub fn hit_test(&self, x: u16, y: u16) -> Option<PageTarget> {
        let pos = Position::new(x, y);
        if let Some((id, _)) = self.triggers.iter().find(|(_, r)| r.contains(pos)) {
            return Some(PageTarget::Trigger(*id));
        }
        if let Some(slot) = self.fields.iter().find(|slot| slot.input.contains(pos)) {
            return Some(PageTarget::Field(slot.name));
        }
        if self.submit.contains(pos) {
            return Some(PageTarget::Submit);
        }
        None
    }

    /// Largest scroll offset that still fills a viewport of `view_height`
    pub fn max_scroll(&self, view_height: u16) -> u16 {
        self.height.saturating_sub(view_height)
    }

    /// Scroll offset that puts the middle of `rect` in the middle of the view
    pub fn centered_scroll(&self, rect: Rect, view_height: u16) -> u16 {
        let middle = rect.y + rect.height / 2;
        middle
            .saturating_sub(view_height / 2)
            .min(self.max_scroll(view_height))
    }
}

/// Rows available to the page between header and status bar
pub fn page_view_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT)
}

/// Convert an absolute screen row to a page row, if it falls in the viewport
pub fn screen_to_page_row(row: u16, terminal_height: u16, scroll: u16) -> Option<u16> {
    let view = HEADER_HEIGHT..HEADER_HEIGHT + page_view_height(terminal_height);
    view.contains(&row).then(|| row - HEADER_HEIGHT + scroll)
}

/// Screen rectangle of the tooltip for a computed position
pub fn tooltip_rect(position: TooltipPosition, area: Rect) -> Rect {
    let width = TOOLTIP_WIDTH.min(area.width);
    let height = tooltip_height().min(area.height);
    let x = (position.left.round().max(0.0) as u16).min(area.width - width);
    let y = (position.top.round().max(0.0) as u16).min(area.height - height);
    Rect::new(area.x + x, area.y + y, width, height)
}

/// Page geometry as seen through the scrolled viewport
#[derive(Debug, Clone)]
pub struct PageSurface {
    layout: PageLayout,
    scroll: u16,
    width: u16,
    height: u16,
}

impl PageSurface {
    pub fn new(layout: PageLayout, scroll: u16, width: u16, height: u16) -> Self {
        Self {
            layout,
            scroll,
            width,
            height,
        }
    }
}

impl TooltipSurface<TriggerId> for PageSurface {
    fn trigger_bounds(&self, trigger: TriggerId) -> Option<Bounds> {
        let rect = self.layout.trigger(trigger)?;
        let top = f32::from(HEADER_HEIGHT) + f32::from(rect.y) - f32::from(self.scroll);
        Some(Bounds::new(
            f32::from(rect.x),
            top,
            f32::from(rect.width),
            f32::from(rect.height),
        ))
    }

    fn tooltip_size(&self) -> Size {
        Size::new(
            f32::from(TOOLTIP_WIDTH.min(self.width)),
            f32::from(tooltip_height()),
        )
    }

    fn viewport(&self) -> Size {
        Size::new(f32::from(self.width), f32::from(self.height))
    }
}
