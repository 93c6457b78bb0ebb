//! Shared tooltip: visibility state machine and viewport-aware placement

mod controller;
mod position;

pub use controller::{FocusRequest, TooltipController, TooltipEvent, TooltipSurface};
pub use position::{Bounds, PositionRules, Size, TooltipPosition};

#[cfg(test)]
pub use position::VerticalTier;
