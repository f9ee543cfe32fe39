//! Subscriber registry types and the subscription handle.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use uniflow_core::StoreError;

/// A zero-argument callback invoked after each completed dispatch.
///
/// Listeners receive no arguments; a listener that needs the new state
/// reads it from the store it subscribed to. Shared ownership lets the
/// registry and an in-flight notification snapshot alias the same callback.
pub type Listener = Rc<dyn Fn()>;

/// A registered listener together with the identity its subscription
/// removes it by.
#[derive(Clone)]
pub(crate) struct ListenerEntry {
    id: u64,
    callback: Listener,
}

impl ListenerEntry {
    pub(crate) const fn new(id: u64, callback: Listener) -> Self {
        Self { id, callback }
    }

    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn call(&self) {
        (self.callback)();
    }
}

/// The listener sequence. Registries are typically a handful of entries,
/// so the first few live inline.
pub(crate) type ListenerSeq = SmallVec<[ListenerEntry; 4]>;

/// Removal closure installed by `Store::subscribe`.
pub(crate) type CancelFn = Box<dyn FnMut() -> Result<(), StoreError>>;

/// Handle for removing a listener registered with
/// [`subscribe`](crate::Store::subscribe).
///
/// Dropping the handle does *not* remove the listener; it stays registered
/// until [`unsubscribe`](Subscription::unsubscribe) succeeds or the store
/// itself is gone.
#[must_use = "a listener stays registered until the subscription is used to unsubscribe"]
pub struct Subscription {
    cancel: CancelFn,
}

impl Subscription {
    pub(crate) const fn new(cancel: CancelFn) -> Self {
        Self { cancel }
    }

    /// Remove the listener this subscription was returned for.
    ///
    /// One-shot and idempotent: the first successful call removes the
    /// listener from the sequence future dispatches will notify; every
    /// later call is an `Ok` no-op. Unsubscribing after the last store
    /// handle has been dropped is also an `Ok` no-op.
    ///
    /// Removal never affects a notification pass that is already under
    /// way: a pass iterates the snapshot taken when it started, so a
    /// listener removed mid-pass still fires in that pass.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IllegalReentrancy`] when called while the
    /// store's reducer is executing. The subscription stays armed in that
    /// case and may be retried once the dispatch completes.
    pub fn unsubscribe(&mut self) -> Result<(), StoreError> {
        (self.cancel)()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
