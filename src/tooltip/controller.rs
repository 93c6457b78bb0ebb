//! Visibility state machine for the shared tooltip

use super::position::{compute_position, Bounds, PositionRules, Size, TooltipPosition};
use std::fmt::Debug;

/// Geometry the controller needs to place the tooltip
pub trait TooltipSurface<T> {
    /// Where the trigger currently sits in the viewport, if it is laid out
    fn trigger_bounds(&self, trigger: T) -> Option<Bounds>;
    /// Rendered size of the tooltip
    fn tooltip_size(&self) -> Size;
    /// Size of the visible viewport
    fn viewport(&self) -> Size;
}

/// Whether the tooltip is showing, and for which trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState<T> {
    Hidden,
    Visible { trigger: T },
}

impl<T> Default for TooltipState<T> {
    fn default() -> Self {
        Self::Hidden
    }
}

/// The input that asked for the tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    /// Pointer entered the trigger
    Hover,
    /// Primary click; toggles when repeated on the same trigger
    Click,
    /// Enter or Space while the trigger has focus
    Keyboard,
}

impl ActivationSource {
    fn toggles(self) -> bool {
        matches!(self, Self::Click)
    }
}

/// Page events the tooltip reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent<T> {
    PointerEnter(T),
    PointerLeave(T),
    Click(T),
    KeyActivate(T),
    Escape,
    /// Click on neither the tooltip nor any trigger
    ClickOutside,
}

/// Where input focus should go after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest<T> {
    /// Leave focus where it is
    Keep,
    /// Focus the tooltip surface
    Tooltip,
    /// Give focus back to this trigger
    Trigger(T),
}

/// Controller for the single tooltip shared by every trigger
#[derive(Debug, Clone)]
pub struct TooltipController<T> {
    state: TooltipState<T>,
    aria_hidden: bool,
    position: Option<TooltipPosition>,
    rules: PositionRules,
}

impl<T: Copy + PartialEq + Debug> TooltipController<T> {
    pub fn new(rules: PositionRules) -> Self {
        Self {
            state: TooltipState::Hidden,
            aria_hidden: true,
            position: None,
            rules,
        }
    }

    pub fn state(&self) -> TooltipState<T> {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// The trigger the tooltip is showing for; `Some` exactly when visible
    pub fn current_trigger(&self) -> Option<T> {
        match self.state {
            TooltipState::Visible { trigger } => Some(trigger),
            TooltipState::Hidden => None,
        }
    }

    /// Whether assistive technology should ignore the tooltip
    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    /// Last applied position
    pub fn position(&self) -> Option<TooltipPosition> {
        self.position
    }

    /// Show the tooltip for `trigger`, or hide it when a click repeats on
    /// the trigger it is already showing for.
    pub fn activate(
        &mut self,
        trigger: T,
        source: ActivationSource,
        surface: &impl TooltipSurface<T>,
    ) -> FocusRequest<T> {
        if source.toggles() && self.current_trigger() == Some(trigger) {
            return self.deactivate();
        }
        if surface.trigger_bounds(trigger).is_none() {
            tracing::debug!(?trigger, "trigger not laid out, activation ignored");
            return FocusRequest::Keep;
        }

        self.state = TooltipState::Visible { trigger };
        self.aria_hidden = false;
        self.reposition(surface);
        tracing::debug!(?trigger, ?source, "tooltip shown");
        FocusRequest::Tooltip
    }

    /// Hide the tooltip and hand focus back to the trigger that opened it
    pub fn deactivate(&mut self) -> FocusRequest<T> {
        let previous = self.current_trigger();
        self.state = TooltipState::Hidden;
        self.aria_hidden = true;

        match previous {
            Some(trigger) => {
                tracing::debug!(?trigger, "tooltip hidden");
                FocusRequest::Trigger(trigger)
            }
            None => FocusRequest::Keep,
        }
    }

    /// Recompute the position for the current trigger. No-op while hidden.
    pub fn reposition(&mut self, surface: &impl TooltipSurface<T>) -> Option<TooltipPosition> {
        let trigger = self.current_trigger()?;
        let Some(bounds) = surface.trigger_bounds(trigger) else {
            tracing::debug!(?trigger, "trigger no longer laid out");
            self.position = None;
            return None;
        };
        let position = compute_position(
            bounds,
            surface.tooltip_size(),
            surface.viewport(),
            self.rules,
        );
        self.position = Some(position);
        self.position
    }

    /// Route a page event to the matching transition
    pub fn handle(
        &mut self,
        event: TooltipEvent<T>,
        surface: &impl TooltipSurface<T>,
    ) -> FocusRequest<T> {
        match event {
            TooltipEvent::PointerEnter(trigger) => {
                self.activate(trigger, ActivationSource::Hover, surface)
            }
            TooltipEvent::PointerLeave(_) => self.deactivate(),
            TooltipEvent::Click(trigger) => {
                self.activate(trigger, ActivationSource::Click, surface)
            }
            TooltipEvent::KeyActivate(trigger) => {
                self.activate(trigger, ActivationSource::Keyboard, surface)
            }
            TooltipEvent::Escape | TooltipEvent::ClickOutside => {
                if self.is_visible() {
                    self.deactivate()
                } else {
                    FocusRequest::Keep
                }
            }
        }
    }
}

impl<T: Copy + PartialEq + Debug> Default for TooltipController<T> {
    fn default() -> Self {
        Self::new(PositionRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::VerticalTier;
    use std::collections::HashMap;

    struct FakeSurface {
        triggers: HashMap<u8, Bounds>,
        tooltip: Size,
        viewport: Size,
    }

    impl FakeSurface {
        fn new() -> Self {
            let mut triggers = HashMap::new();
            triggers.insert(1, Bounds::new(100.0, 200.0, 40.0, 20.0));
            triggers.insert(2, Bounds::new(300.0, 15.0, 40.0, 20.0));
            Self {
                triggers,
                tooltip: Size::new(80.0, 30.0),
                viewport: Size::new(800.0, 600.0),
            }
        }
    }

    impl TooltipSurface<u8> for FakeSurface {
        fn trigger_bounds(&self, trigger: u8) -> Option<Bounds> {
            self.triggers.get(&trigger).copied()
        }
        fn tooltip_size(&self) -> Size {
            self.tooltip
        }
        fn viewport(&self) -> Size {
            self.viewport
        }
    }

    fn assert_invariant(tooltip: &TooltipController<u8>) {
        assert_eq!(tooltip.is_visible(), tooltip.current_trigger().is_some());
        assert_eq!(tooltip.aria_hidden(), !tooltip.is_visible());
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_hidden() {
            let tooltip = TooltipController::<u8>::default();
            assert_eq!(tooltip.state(), TooltipState::Hidden);
            assert!(tooltip.aria_hidden());
            assert!(tooltip.position().is_none());
        }

        #[test]
        fn test_hover_shows_and_focuses_tooltip() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            let focus = tooltip.handle(TooltipEvent::PointerEnter(1), &surface);

            assert_eq!(focus, FocusRequest::Tooltip);
            assert_eq!(tooltip.state(), TooltipState::Visible { trigger: 1 });
            assert!(!tooltip.aria_hidden());
            assert_invariant(&tooltip);
        }

        #[test]
        fn test_pointer_leave_hides() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();
            tooltip.handle(TooltipEvent::PointerEnter(1), &surface);

            tooltip.handle(TooltipEvent::PointerLeave(1), &surface);

            assert!(!tooltip.is_visible());
            assert_invariant(&tooltip);
        }

        #[test]
        fn test_click_on_same_trigger_toggles_off() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            tooltip.handle(TooltipEvent::Click(1), &surface);
            assert!(tooltip.is_visible());

            let focus = tooltip.handle(TooltipEvent::Click(1), &surface);
            assert!(!tooltip.is_visible());
            assert_eq!(focus, FocusRequest::Trigger(1));
            assert_invariant(&tooltip);
        }

        #[test]
        fn test_click_on_other_trigger_moves_tooltip() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            tooltip.handle(TooltipEvent::Click(1), &surface);
            tooltip.handle(TooltipEvent::Click(2), &surface);

            assert_eq!(tooltip.current_trigger(), Some(2));
            assert_invariant(&tooltip);
        }

        #[test]
        fn test_keyboard_activation_never_toggles() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            tooltip.handle(TooltipEvent::KeyActivate(1), &surface);
            tooltip.handle(TooltipEvent::KeyActivate(1), &surface);

            assert_eq!(tooltip.current_trigger(), Some(1));
        }

        #[test]
        fn test_hover_after_click_does_not_toggle() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            tooltip.handle(TooltipEvent::Click(1), &surface);
            tooltip.handle(TooltipEvent::PointerEnter(1), &surface);

            assert!(tooltip.is_visible());
        }

        #[test]
        fn test_escape_hides_and_restores_trigger_focus() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();
            tooltip.handle(TooltipEvent::KeyActivate(2), &surface);

            let focus = tooltip.handle(TooltipEvent::Escape, &surface);

            assert_eq!(focus, FocusRequest::Trigger(2));
            assert!(!tooltip.is_visible());
        }

        #[test]
        fn test_escape_while_hidden_keeps_focus() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::<u8>::default();
            assert_eq!(
                tooltip.handle(TooltipEvent::Escape, &surface),
                FocusRequest::Keep
            );
        }

        #[test]
        fn test_click_outside_hides() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();
            tooltip.handle(TooltipEvent::Click(1), &surface);

            tooltip.handle(TooltipEvent::ClickOutside, &surface);

            assert!(!tooltip.is_visible());
            assert_invariant(&tooltip);
        }
    }

    mod positioning {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_show_applies_position() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            tooltip.handle(TooltipEvent::PointerEnter(1), &surface);

            let pos = tooltip.position().unwrap();
            assert_eq!(pos.tier, VerticalTier::Above);
            assert_eq!(pos.left, 80.0);
        }

        #[test]
        fn test_trigger_near_top_places_below() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();

            tooltip.handle(TooltipEvent::PointerEnter(2), &surface);

            assert_eq!(tooltip.position().unwrap().tier, VerticalTier::Below);
        }

        #[test]
        fn test_reposition_while_hidden_is_noop() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::<u8>::default();
            assert!(tooltip.reposition(&surface).is_none());
        }

        #[test]
        fn test_reposition_follows_moved_trigger() {
            let mut surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();
            tooltip.handle(TooltipEvent::PointerEnter(1), &surface);

            surface
                .triggers
                .insert(1, Bounds::new(100.0, 5.0, 40.0, 20.0));
            let pos = tooltip.reposition(&surface).unwrap();

            assert_eq!(pos.tier, VerticalTier::Below);
            assert_eq!(pos.top, 35.0);
        }

        #[test]
        fn test_unknown_trigger_is_not_activated() {
            let surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();
            tooltip.handle(TooltipEvent::PointerEnter(1), &surface);
            let before = tooltip.position();

            let focus = tooltip.handle(TooltipEvent::PointerEnter(9), &surface);

            assert_eq!(focus, FocusRequest::Keep);
            assert_eq!(tooltip.current_trigger(), Some(1));
            assert_eq!(tooltip.position(), before);
            assert_invariant(&tooltip);
        }

        #[test]
        fn test_trigger_leaving_layout_clears_position() {
            let mut surface = FakeSurface::new();
            let mut tooltip = TooltipController::default();
            tooltip.handle(TooltipEvent::KeyActivate(1), &surface);
            assert!(tooltip.position().is_some());

            surface.triggers.remove(&1);

            assert_eq!(tooltip.reposition(&surface), None);
            assert_eq!(tooltip.position(), None);
        }
    }
}
