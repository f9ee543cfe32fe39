//! Listener helpers for subscriber tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use uniflow_runtime::Listener;

/// Counts how many times its listener has been notified.
///
/// # Example
///
/// ```ignore
/// let counting = CountingListener::new();
/// let subscription = store.subscribe(counting.listener())?;
///
/// store.dispatch(CounterAction::Increment)?;
/// assert_eq!(counting.calls(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CountingListener {
    calls: Rc<Cell<usize>>,
}

impl CountingListener {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many notifications the listener has received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// A listener that bumps this counter. Every listener handed out by
    /// the same `CountingListener` shares the count.
    #[must_use]
    pub fn listener(&self) -> Listener {
        let calls = Rc::clone(&self.calls);
        Rc::new(move || calls.set(calls.get() + 1))
    }
}

/// Records labeled notifications in the order they happen.
///
/// Useful for asserting notification order across several listeners: hand
/// each listener a label and inspect [`entries`](NotificationLog::entries)
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<&'static str>>>,
}

impl NotificationLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that appends `label` to the log on every notification.
    #[must_use]
    pub fn listener(&self, label: &'static str) -> Listener {
        let entries = Rc::clone(&self.entries);
        Rc::new(move || entries.borrow_mut().push(label))
    }

    /// The labels recorded so far, in notification order.
    #[must_use]
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.borrow().clone()
    }
}
