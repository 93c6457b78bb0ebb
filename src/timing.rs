//! Rate-limiting wrappers for event handlers
//!
//! [`Debounce`] delays an operation until calls stop arriving for `wait`;
//! [`Throttle`] lets at most one call through per `interval`. Both read the
//! tokio clock so tests can drive them with a paused runtime.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Debounce window for field validation while typing
pub const INPUT_DEBOUNCE: Duration = Duration::from_millis(300);
/// Debounce window for terminal resize handling
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
/// Throttle interval for scroll-driven tooltip repositioning
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// An operation that only runs once calls have been quiet for `wait`.
///
/// Every [`call`](Debounce::call) cancels the pending run and schedules a new
/// one, so only the last call of a burst executes, with its own arguments.
/// The scheduled run is a tokio task; `call` must happen inside a runtime.
pub struct Debounce<A> {
    operation: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

/// Wrap `operation` so it runs `wait` after the last call
pub fn debounce<A, F>(operation: F, wait: Duration) -> Debounce<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounce {
        operation: Arc::new(operation),
        wait,
        pending: None,
    }
}

impl<A: Send + 'static> Debounce<A> {
    /// Schedule the operation with `args`, replacing any pending run
    pub fn call(&mut self, args: A) {
        self.cancel();
        let operation = Arc::clone(&self.operation);
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            operation(args);
        }));
    }
}

impl<A> Debounce<A> {
    /// Drop the pending run, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a scheduled run has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Drop for Debounce<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// An operation that runs at most once per `interval`.
///
/// The first call runs immediately. Calls arriving within `interval` of the
/// last executed one are dropped; the next call after that runs immediately
/// and opens a new window.
pub struct Throttle<A> {
    operation: Box<dyn FnMut(A) + Send>,
    interval: Duration,
    last_run: Option<Instant>,
}

/// Wrap `operation` so it runs at most once per `interval`
pub fn throttle<A, F>(operation: F, interval: Duration) -> Throttle<A>
where
    F: FnMut(A) + Send + 'static,
{
    Throttle {
        operation: Box::new(operation),
        interval,
        last_run: None,
    }
}

impl<A> Throttle<A> {
    /// Run the operation unless the window is still open.
    /// Returns whether it ran.
    pub fn call(&mut self, args: A) -> bool {
        let now = Instant::now();
        if self
            .last_run
            .is_some_and(|last| now.duration_since(last) < self.interval)
        {
            return false;
        }
        self.last_run = Some(now);
        (self.operation)(args);
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
