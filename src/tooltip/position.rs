//! Tooltip placement against viewport edges
//!
//! The tooltip prefers to sit centered above its trigger. It is clamped
//! horizontally so it never touches the viewport sides, and falls back
//! vertically in three tiers: above, then below, then centered on the
//! trigger's vertical midpoint.

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Whether a point lies inside (left/top inclusive, right/bottom exclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Width and height of the tooltip or the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Spacing used by [`compute_position`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRules {
    /// Distance between trigger and tooltip
    pub gap: f32,
    /// Minimum distance between tooltip and viewport edges
    pub edge_margin: f32,
}

impl PositionRules {
    pub const fn uniform(spacing: f32) -> Self {
        Self {
            gap: spacing,
            edge_margin: spacing,
        }
    }
}

impl Default for PositionRules {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Which vertical fallback produced the placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalTier {
    Above,
    Below,
    Centered,
}

/// Top-left corner of the tooltip and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub left: f32,
    pub top: f32,
    pub tier: VerticalTier,
}

impl TooltipPosition {
    pub fn bounds(&self, size: Size) -> Bounds {
        Bounds::new(self.left, self.top, size.width, size.height)
    }
}

/// Place a `tooltip`-sized box next to `trigger` inside `viewport`
pub fn compute_position(
    trigger: Bounds,
    tooltip: Size,
    viewport: Size,
    rules: PositionRules,
) -> TooltipPosition {
    let margin = rules.edge_margin;

    let mut left = trigger.center_x() - tooltip.width / 2.0;
    if left < margin {
        left = margin;
    } else if left + tooltip.width > viewport.width - margin {
        left = viewport.width - tooltip.width - margin;
    }

    let above = trigger.top - tooltip.height - rules.gap;
    if above >= margin {
        return TooltipPosition {
            left,
            top: above,
            tier: VerticalTier::Above,
        };
    }

    let below = trigger.bottom() + rules.gap;
    if below + tooltip.height <= viewport.height - margin {
        return TooltipPosition {
            left,
            top: below,
            tier: VerticalTier::Below,
        };
    }

    TooltipPosition {
        left,
        top: trigger.center_y() - tooltip.height / 2.0,
        tier: VerticalTier::Centered,
    }
}
