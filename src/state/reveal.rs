//! One-shot reveal of service lines and pricing cards
//!
//! An item is revealed the first time at least a tenth of it enters the
//! viewport, ignoring the bottom row. Once revealed it stays revealed.

use ratatui::layout::Rect;
use std::collections::BTreeSet;

/// Share of an item that must be on screen before it is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Rows at the bottom of the viewport that do not count as on screen
pub const REVEAL_BOTTOM_INSET: u16 = 1;

/// Page element that fades in on first sight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealItem {
    Service(usize),
    Card(usize),
}

/// Share of `rect` (page rows) visible in the inset viewport at `scroll`
fn visible_share(rect: Rect, scroll: u16, view_height: u16) -> f32 {
    if rect.height == 0 {
        return 0.0;
    }
    let top = scroll;
    let bottom = scroll.saturating_add(view_height.saturating_sub(REVEAL_BOTTOM_INSET));
    let visible = rect.bottom().min(bottom).saturating_sub(rect.y.max(top));
    f32::from(visible) / f32::from(rect.height)
}

#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: BTreeSet<RevealItem>,
}

impl RevealSet {
    pub fn is_revealed(&self, item: RevealItem) -> bool {
        self.revealed.contains(&item)
    }

    /// Reveal every target that crosses the threshold; returns how many were new
    pub fn observe(
        &mut self,
        targets: &[(RevealItem, Rect)],
        scroll: u16,
        view_height: u16,
    ) -> usize {
        let mut newly = 0;
        for (item, rect) in targets {
            if self.revealed.contains(item) {
                continue;
            }
            let share = visible_share(*rect, scroll, view_height);
            if share > 0.0 && share >= REVEAL_THRESHOLD {
                self.revealed.insert(*item);
                newly += 1;
            }
        }
        if newly > 0 {
            tracing::trace!(newly, total = self.revealed.len(), "items revealed");
        }
        newly
    }
}
