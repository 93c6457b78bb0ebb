//! Application state and core logic

use crate::backend::{submit_with_timeout, Submitter};
use crate::config::StudioConfig;
use crate::contact::{ContactForm, FieldName, SubmissionController, SubmitOutcome, SubmitStart};
use crate::error::SubmissionError;
use crate::platform::{is_quit_key, is_submit_key};
use crate::state::{
    anchor_scroll, focus_order, is_compact, page_view_height, screen_to_page_row,
    section_for_anchor, tooltip_rect, AppState, Focus, HeaderLayout, PageLayout, PageSurface,
    PageTarget, TriggerId, PAGE_SCROLL_ROWS,
};
use crate::timing::{
    debounce, throttle, Debounce, Throttle, INPUT_DEBOUNCE, RESIZE_DEBOUNCE, SCROLL_THROTTLE,
};
use crate::tooltip::{FocusRequest, TooltipController, TooltipEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Rows moved by one arrow key or wheel notch
const SCROLL_STEP: u16 = 1;

/// Work finished outside the input path, drained once per frame
#[derive(Debug)]
pub enum AppEvent {
    /// Debounced validation after typing in a field
    ValidateField(FieldName),
    /// Throttled tooltip repositioning after scrolling
    RepositionTooltip,
    /// Debounced terminal resize (width, height)
    Resized(u16, u16),
    SubmissionFinished(Result<(), SubmissionError>),
}

/// Main application struct
pub struct App {
    /// Focus, scroll and header state
    pub state: AppState,
    pub form: ContactForm,
    pub submission: SubmissionController,
    pub tooltip: TooltipController<TriggerId>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Frames drawn so far, drives the loading spinner
    pub frame_count: usize,
    submitter: Arc<dyn Submitter>,
    submit_timeout: Duration,
    submission_task: Option<JoinHandle<()>>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    input_debounce: [Debounce<FieldName>; 5],
    resize_debounce: Debounce<(u16, u16)>,
    scroll_throttle: Throttle<()>,
    /// Scroll offset the tooltip was last positioned for
    positioned_at: Option<u16>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &StudioConfig, submitter: Arc<dyn Submitter>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let input_debounce = FieldName::ALL.map(|_| {
            let tx = events_tx.clone();
            debounce(
                move |field: FieldName| {
                    let _ = tx.send(AppEvent::ValidateField(field));
                },
                INPUT_DEBOUNCE,
            )
        });

        let tx = events_tx.clone();
        let resize_debounce = debounce(
            move |(width, height): (u16, u16)| {
                let _ = tx.send(AppEvent::Resized(width, height));
            },
            RESIZE_DEBOUNCE,
        );

        let tx = events_tx.clone();
        let scroll_throttle = throttle(
            move |_: ()| {
                let _ = tx.send(AppEvent::RepositionTooltip);
            },
            SCROLL_THROTTLE,
        );

        Self {
            state: AppState::default(),
            form: ContactForm::new(),
            submission: SubmissionController::new(),
            tooltip: TooltipController::new(config.tooltip_rules()),
            terminal_size: None,
            frame_count: 0,
            submitter,
            submit_timeout: config.submit_timeout(),
            submission_task: None,
            events_tx,
            events_rx,
            input_debounce,
            resize_debounce,
            scroll_throttle,
            positioned_at: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn width(&self) -> u16 {
        self.terminal_size.map(|(_, w)| w).unwrap_or(80)
    }

    pub fn height(&self) -> u16 {
        self.terminal_size.map(|(h, _)| h).unwrap_or(24)
    }

    /// Page geometry for the current terminal width and notices
    pub fn page_layout(&self) -> PageLayout {
        PageLayout::compute(self.width(), self.form.messages.len())
    }

    pub fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::compute(self.width(), self.state.menu.is_open())
    }

    fn view_height(&self) -> u16 {
        page_view_height(self.height())
    }

    fn max_scroll(&self) -> u16 {
        self.page_layout().max_scroll(self.view_height())
    }

    fn surface(&self) -> PageSurface {
        PageSurface::new(
            self.page_layout(),
            self.state.scroll_offset,
            self.width(),
            self.height(),
        )
    }

    /// Current tab order
    pub fn focus_order(&self) -> Vec<Focus> {
        focus_order(
            is_compact(self.width()),
            self.state.menu.is_open(),
            self.page_layout().trigger_ids(),
            self.tooltip.current_trigger(),
        )
    }

    // === Keyboard ===

    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            self.quit = true;
            return;
        }
        if is_submit_key(&key) {
            self.submit_form();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.state.menu.close() {
                    tracing::debug!("menu closed with escape");
                }
                self.tooltip_event(TooltipEvent::Escape);
                return;
            }
            KeyCode::Tab => {
                let next = self.state.focus_after(&self.focus_order());
                self.set_focus(next);
                return;
            }
            KeyCode::BackTab => {
                let prev = self.state.focus_before(&self.focus_order());
                self.set_focus(prev);
                return;
            }
            _ => {}
        }

        let consumed = match self.state.focus {
            Some(Focus::Field(name)) => self.handle_field_key(name, key),
            Some(Focus::Trigger(trigger)) if is_activate_key(&key) => {
                self.tooltip_event(TooltipEvent::KeyActivate(trigger));
                true
            }
            Some(Focus::MenuToggle) if is_activate_key(&key) => {
                self.state.menu.toggle();
                true
            }
            Some(Focus::NavLink(section)) if key.code == KeyCode::Enter => {
                self.follow_link(section.anchor());
                true
            }
            Some(Focus::Submit) if is_activate_key(&key) => {
                self.submit_form();
                true
            }
            _ => false,
        };

        if !consumed {
            self.handle_scroll_key(key);
        }
    }

    /// Editing keys for the focused field; returns whether the key was used
    fn handle_field_key(&mut self, name: FieldName, key: KeyEvent) -> bool {
        let field = self.form.field_mut(name);
        match key.code {
            KeyCode::Left if field.is_choice() => field.prev_choice(),
            KeyCode::Right if field.is_choice() => field.next_choice(),
            KeyCode::Enter if field.is_multiline => field.push_char('\n'),
            KeyCode::Enter => {
                self.submit_form();
                return true;
            }
            KeyCode::Backspace if !field.is_choice() => field.pop_char(),
            KeyCode::Char(c)
                if !field.is_choice()
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                field.push_char(c)
            }
            _ => return false,
        }
        self.input_debounce[name.index()].call(name);
        true
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) {
        // The open menu holds the page still
        if self.state.menu.is_open() {
            return;
        }
        let max = self.max_scroll();
        let before = self.state.scroll_offset;
        match key.code {
            KeyCode::Up => self.state.scroll_up(SCROLL_STEP),
            KeyCode::Down => self.state.scroll_down(SCROLL_STEP, max),
            KeyCode::PageUp => self.state.scroll_up(PAGE_SCROLL_ROWS),
            KeyCode::PageDown => self.state.scroll_down(PAGE_SCROLL_ROWS, max),
            KeyCode::Home => self.state.scroll_to(0, max),
            KeyCode::End => self.state.scroll_to(max, max),
            _ => return,
        }
        if self.state.scroll_offset != before {
            self.on_scrolled();
        }
    }

    // === Mouse ===

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => self.handle_hover(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => {
                self.handle_scroll_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE))
            }
            MouseEventKind::ScrollDown => {
                self.handle_scroll_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
            }
            _ => {}
        }
    }

    /// Element of the scrolled page under a screen position
    fn page_target_at(&self, column: u16, row: u16) -> Option<PageTarget> {
        let page_row = screen_to_page_row(row, self.height(), self.state.scroll_offset)?;
        self.page_layout().hit_test(column, page_row)
    }

    fn trigger_at(&self, column: u16, row: u16) -> Option<TriggerId> {
        // The dropdown and the tooltip cover the page below them
        if self.header_layout().contains(column, row) || self.is_on_tooltip(column, row) {
            return None;
        }
        match self.page_target_at(column, row) {
            Some(PageTarget::Trigger(trigger)) => Some(trigger),
            _ => None,
        }
    }

    fn handle_hover(&mut self, column: u16, row: u16) {
        let hovered = self.trigger_at(column, row);
        let previous = self.state.hovered_trigger;
        if hovered == previous {
            return;
        }
        self.state.hovered_trigger = hovered;
        if let Some(trigger) = previous {
            self.tooltip_event(TooltipEvent::PointerLeave(trigger));
        }
        if let Some(trigger) = hovered {
            self.tooltip_event(TooltipEvent::PointerEnter(trigger));
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        // Trigger clicks stop here so nothing below sees an outside click
        if let Some(trigger) = self.trigger_at(column, row) {
            self.set_focus(Some(Focus::Trigger(trigger)));
            self.tooltip_event(TooltipEvent::Click(trigger));
            return;
        }

        if self.is_on_tooltip(column, row) {
            self.set_focus(Some(Focus::Tooltip));
            return;
        }
        self.tooltip_event(TooltipEvent::ClickOutside);

        let header = self.header_layout();
        if !header.contains(column, row) && self.state.menu.close() {
            tracing::debug!("menu closed by outside click");
        }

        if header.is_toggle(column, row) {
            self.set_focus(Some(Focus::MenuToggle));
            self.state.menu.toggle();
            return;
        }
        if let Some(section) = header.link_at(column, row) {
            self.set_focus(Some(Focus::NavLink(section)));
            self.follow_link(section.anchor());
            return;
        }
        if header.contains(column, row) {
            return;
        }

        match self.page_target_at(column, row) {
            Some(PageTarget::Field(name)) => self.set_focus(Some(Focus::Field(name))),
            Some(PageTarget::Submit) => {
                self.set_focus(Some(Focus::Submit));
                self.submit_form();
            }
            Some(PageTarget::Trigger(_)) | None => self.set_focus(None),
        }
    }

    fn is_on_tooltip(&self, column: u16, row: u16) -> bool {
        self.tooltip_screen_rect()
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }

    /// On-screen rectangle of the visible tooltip
    pub fn tooltip_screen_rect(&self) -> Option<Rect> {
        let position = self.tooltip.position()?;
        if !self.tooltip.is_visible() {
            return None;
        }
        let area = Rect::new(0, 0, self.width(), self.height());
        Some(tooltip_rect(position, area))
    }

    // === Resize and scroll ===

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        let max = self.max_scroll();
        self.state.scroll_to(self.state.scroll_offset, max);
        self.resize_debounce.call((width, height));
    }

    fn on_scrolled(&mut self) {
        self.update_reveals();
        if self.tooltip.is_visible() {
            self.scroll_throttle.call(());
        }
    }

    fn update_reveals(&mut self) {
        let targets = self.page_layout().reveal_targets();
        let view = self.view_height();
        self.state
            .reveals
            .observe(&targets, self.state.scroll_offset, view);
    }

    /// Scroll so `rect` (page coordinates) sits in the middle of the view
    fn scroll_to_center(&mut self, rect: Rect) {
        let layout = self.page_layout();
        let view = self.view_height();
        let target = layout.centered_scroll(rect, view);
        self.state.scroll_to(target, layout.max_scroll(view));
        self.on_scrolled();
    }

    /// Scroll the least amount that makes `rect` fully visible
    fn reveal(&mut self, rect: Rect) {
        let view = self.view_height();
        let scroll = self.state.scroll_offset;
        let target = if rect.y < scroll {
            rect.y
        } else if rect.bottom() > scroll + view {
            rect.bottom().saturating_sub(view)
        } else {
            return;
        };
        self.state.scroll_to(target, self.max_scroll());
        self.on_scrolled();
    }

    fn follow_link(&mut self, anchor: &str) {
        self.state.menu.close();
        let Some(section) = section_for_anchor(anchor) else {
            return;
        };
        let layout = self.page_layout();
        if let Some(target) = anchor_scroll(&layout, section, self.view_height()) {
            tracing::debug!(anchor = section.anchor(), target, "anchor navigation");
            self.state.scroll_to(target, layout.max_scroll(self.view_height()));
            self.on_scrolled();
        }
    }

    // === Focus ===

    /// Move focus, validating a field that loses it
    pub fn set_focus(&mut self, focus: Option<Focus>) {
        let previous = self.state.focus;
        if previous == focus {
            return;
        }
        if let Some(name) = self.state.focused_field() {
            self.form.validate_field(name);
        }
        self.state.focus = focus;

        let layout = self.page_layout();
        let rect = match focus {
            Some(Focus::Trigger(trigger)) => layout.trigger(trigger),
            Some(Focus::Field(name)) => layout.field(name).map(|slot| slot.input.union(slot.error)),
            Some(Focus::Submit) => Some(layout.submit),
            _ => None,
        };
        if let Some(rect) = rect {
            self.reveal(rect);
        }
    }

    fn apply_focus_request(&mut self, request: FocusRequest<TriggerId>) {
        match request {
            FocusRequest::Keep => {}
            FocusRequest::Tooltip => self.set_focus(Some(Focus::Tooltip)),
            FocusRequest::Trigger(trigger) => self.set_focus(Some(Focus::Trigger(trigger))),
        }
    }

    fn tooltip_event(&mut self, event: TooltipEvent<TriggerId>) {
        let surface = self.surface();
        let request = self.tooltip.handle(event, &surface);
        if self.tooltip.is_visible() {
            self.positioned_at = Some(self.state.scroll_offset);
        }
        self.apply_focus_request(request);
    }

    fn reposition_tooltip(&mut self) {
        let surface = self.surface();
        if self.tooltip.reposition(&surface).is_some() {
            self.positioned_at = Some(self.state.scroll_offset);
        }
    }

    // === Submission ===

    /// Validate and, when the form is valid, send it in the background
    pub fn submit_form(&mut self) {
        match self.submission.begin(&mut self.form) {
            SubmitStart::Busy => {}
            SubmitStart::Invalid { first_error } => {
                if let Some(name) = first_error {
                    self.set_focus(Some(Focus::Field(name)));
                    if let Some(slot) = self.page_layout().field(name).copied() {
                        self.scroll_to_center(slot.input);
                    }
                }
            }
            SubmitStart::Ready(payload) => {
                let submitter = Arc::clone(&self.submitter);
                let tx = self.events_tx.clone();
                let limit = self.submit_timeout;
                self.submission_task = Some(tokio::spawn(async move {
                    let result = submit_with_timeout(submitter.as_ref(), &payload, limit).await;
                    let _ = tx.send(AppEvent::SubmissionFinished(result));
                }));
            }
        }
    }

    // === Background events ===

    /// Apply everything the timers and the submission task produced
    pub fn pump_events(&mut self) {
        // Checked before draining: a finished task has already sent its result
        let task_done = self
            .submission_task
            .as_ref()
            .is_some_and(|task| task.is_finished());
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
        if task_done && self.submission_task.is_some() {
            tracing::warn!("submission task ended without a result");
            self.handle_app_event(AppEvent::SubmissionFinished(Err(SubmissionError::Aborted)));
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ValidateField(name) => {
                self.form.validate_field(name);
            }
            AppEvent::RepositionTooltip => self.reposition_tooltip(),
            AppEvent::Resized(width, height) => {
                tracing::debug!(width, height, "resize settled");
                if self.state.menu.on_resized(width) {
                    tracing::debug!("menu closed on wide terminal");
                }
                self.reposition_tooltip();
            }
            AppEvent::SubmissionFinished(result) => {
                self.submission_task = None;
                let outcome = self.submission.finish(&mut self.form, result);
                if outcome == SubmitOutcome::Succeeded {
                    for pending in &mut self.input_debounce {
                        pending.cancel();
                    }
                    if let Some(banner) = self.page_layout().banners.first().copied() {
                        self.scroll_to_center(banner);
                    }
                }
            }
        }
    }

    /// Per-frame housekeeping: expire notices, update the header marker and
    /// catch the tooltip up with the final scroll offset
    pub fn tick(&mut self, now: Instant) {
        self.frame_count = self.frame_count.wrapping_add(1);
        if self.form.prune_expired(now) > 0 {
            let max = self.max_scroll();
            self.state.scroll_to(self.state.scroll_offset, max);
        }
        self.update_reveals();
        if self.state.header.update(self.state.scroll_offset) {
            tracing::trace!(scrolled = self.state.header.is_scrolled(), "header marker");
        }
        if self.tooltip.is_visible() && self.positioned_at != Some(self.state.scroll_offset) {
            self.scroll_throttle.call(());
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(task) = self.submission_task.take() {
            task.abort();
        }
    }
}

fn is_activate_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}
