//! # Uniflow Runtime
//!
//! The store engine for the Uniflow state container.
//!
//! A [`Store`] owns one state value and applies transitions through a pure
//! [`Reducer`], one action at a time. Control flow is entirely synchronous
//! and single-threaded: [`Store::dispatch`] runs the reducer to completion,
//! replaces the state, then invokes every listener that was registered when
//! the notification pass began. There is no parallelism and no suspension
//! point inside any operation. The hazards the engine guards against are
//! re-entrant calls within one logical thread of control (a reducer calling
//! back into its own store), and those fail fast with
//! [`StoreError::IllegalReentrancy`].
//!
//! ## Core Guarantees
//!
//! - State visible to [`Store::state`] always reflects the most recently
//!   *completed* dispatch, never a partially-applied one.
//! - Listeners registered before a dispatch begins its notification pass run
//!   exactly once during that pass, in insertion order.
//! - Listeners added during a pass run from the next dispatch on; a listener
//!   removed mid-pass still fires in the pass that already captured it.
//! - A panicking reducer leaves the prior state intact and the store usable.
//!
//! ## Example
//!
//! ```
//! use uniflow_core::Action;
//! use uniflow_runtime::{FnReducer, StoreAction, create_store};
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> Option<&str> {
//!         Some("Increment")
//!     }
//! }
//!
//! let reducer = FnReducer::new(|state: Option<&i64>, action: StoreAction<&CounterAction>| {
//!     let current = state.copied().unwrap_or(0);
//!     match action.app() {
//!         Some(CounterAction::Increment) => current + 1,
//!         None => current,
//!     }
//! });
//!
//! let store = create_store(reducer, Some(0));
//! store.dispatch(CounterAction::Increment).expect("valid action");
//! assert_eq!(*store.state().expect("not dispatching"), 1);
//! ```

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Store composition: the object-safe store surface and enhancers.
pub mod enhancer;

/// Subscriber registry types and the subscription handle.
pub mod listener;

pub use enhancer::{BoxedStore, Enhancer, StoreApi};
pub use listener::{Listener, Subscription};

// Re-export the core vocabulary so store users need a single import path.
pub use uniflow_core::{Action, FnReducer, Reducer, StoreAction, StoreError};

use listener::{ListenerEntry, ListenerSeq};

/// Private cell core shared by every handle cloned from one store.
struct Inner<R: Reducer> {
    reducer: RefCell<R>,
    state: RefCell<Option<R::State>>,
    /// The sequence an in-flight (or the most recent) notification pass
    /// iterates.
    current_listeners: RefCell<Rc<ListenerSeq>>,
    /// The sequence future passes will iterate; aliases `current_listeners`
    /// until the first subscribe/unsubscribe after a snapshot was taken.
    next_listeners: RefCell<Rc<ListenerSeq>>,
    next_listener_id: Cell<u64>,
    dispatching: Cell<bool>,
}

impl<R: Reducer> Inner<R> {
    /// Mutate the pending listener sequence.
    ///
    /// `Rc::make_mut` clones the sequence exactly when it is still shared
    /// with `current_listeners` or with a snapshot an in-flight pass holds,
    /// so a pass never observes mutations made after it started.
    fn with_next_listeners(&self, f: impl FnOnce(&mut ListenerSeq)) {
        let mut next = self.next_listeners.borrow_mut();
        f(Rc::make_mut(&mut *next));
    }
}

/// Clears the dispatching flag on every exit path, including unwinds out
/// of a panicking reducer.
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    fn set(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Borrow guard handed out by [`Store::state`].
///
/// Dereferences to the current state without copying it. The guard borrows
/// the store's state cell: release it before the next dispatch, or that
/// dispatch will panic when it tries to replace the state.
pub struct StateRef<'a, S>(Ref<'a, S>);

impl<S> Deref for StateRef<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S: fmt::Debug> fmt::Debug for StateRef<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The synchronous, single-writer state container.
///
/// A `Store` owns three pieces of state (the current state value, the
/// current reducer, and the subscriber registry) and exposes three
/// operations: [`state`](Store::state), [`dispatch`](Store::dispatch), and
/// [`subscribe`](Store::subscribe). Nothing else about the internals is
/// reachable from outside; there is deliberately no way to obtain the
/// listener sequence or the reducer from a store.
///
/// Cloning a `Store` clones the *handle*: both handles address the same
/// container. Separately constructed stores share nothing.
///
/// `Store` is single-threaded by design (`Rc`-based, not `Send`); see the
/// crate docs for the re-entrancy discipline it enforces instead of locks.
pub struct Store<R: Reducer> {
    inner: Rc<Inner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store whose reducer establishes the initial state.
    ///
    /// Construction immediately dispatches the reserved initialization
    /// action through the normal cycle, so the reducer sees the same
    /// contract from its very first call and `state()` is populated before
    /// `new` returns.
    #[must_use]
    pub fn new(reducer: R) -> Self {
        Self::build(reducer, None)
    }

    /// Create a store preloaded with `state`.
    ///
    /// The initialization dispatch still runs; the reducer receives the
    /// preloaded state and a total reducer returns it unchanged.
    #[must_use]
    pub fn with_state(reducer: R, state: R::State) -> Self {
        Self::build(reducer, Some(state))
    }

    fn build(reducer: R, preloaded: Option<R::State>) -> Self {
        let listeners: Rc<ListenerSeq> = Rc::new(ListenerSeq::new());
        let store = Self {
            inner: Rc::new(Inner {
                reducer: RefCell::new(reducer),
                state: RefCell::new(preloaded),
                current_listeners: RefCell::new(Rc::clone(&listeners)),
                next_listeners: RefCell::new(listeners),
                next_listener_id: Cell::new(0),
                dispatching: Cell::new(false),
            }),
        };
        tracing::debug!("store created, running initialization dispatch");
        store.dispatch_cycle(StoreAction::Init);
        store
    }

    /// Borrow the current state.
    ///
    /// Returns the state the most recently completed dispatch produced,
    /// without copying it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IllegalReentrancy`] while the reducer is
    /// executing: the reducer has already received the state as an
    /// argument and must not read it from the store mid-transition.
    ///
    /// # Panics
    ///
    /// Never in practice: the state cell is populated by the
    /// initialization dispatch before any constructor returns.
    #[allow(clippy::expect_used)]
    pub fn state(&self) -> Result<StateRef<'_, R::State>, StoreError> {
        if self.inner.dispatching.get() {
            return Err(StoreError::IllegalReentrancy(
                "state may not be read while the reducer is executing",
            ));
        }
        let borrow = self.inner.state.borrow();
        Ok(StateRef(Ref::map(borrow, |state| {
            state
                .as_ref()
                .expect("state is populated by the initialization dispatch")
        })))
    }

    /// Apply one state transition and notify listeners.
    ///
    /// Runs the reducer with the current state and `action`, replaces the
    /// state with the reducer's return value in a single assignment, then
    /// invokes every listener registered when the notification pass begins,
    /// in insertion order. On success the dispatched action is echoed back,
    /// which lets decorators chain on the result.
    ///
    /// A reducer that panics unwinds through the dispatch guard: the flag
    /// is released, the prior state is retained (the replacement never
    /// ran), and the store stays usable. Listener panics likewise propagate
    /// to the caller; listeners later in the pass are skipped rather than
    /// run best-effort.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidArgument`] if `action.kind()` is `None`.
    /// - [`StoreError::IllegalReentrancy`] if a dispatch is already in
    ///   flight; reducers may not dispatch actions.
    ///
    /// # Panics
    ///
    /// Panics if a [`StateRef`] from [`state`](Store::state) is still alive
    /// when the state replacement runs, and propagates any panic raised by
    /// the reducer or a listener.
    pub fn dispatch(&self, action: R::Action) -> Result<R::Action, StoreError> {
        if action.kind().is_none() {
            return Err(StoreError::InvalidArgument(
                "actions must have a defined kind",
            ));
        }
        if self.inner.dispatching.get() {
            return Err(StoreError::IllegalReentrancy(
                "reducers may not dispatch actions",
            ));
        }
        self.dispatch_cycle(StoreAction::App(&action));
        Ok(action)
    }

    /// Register `listener` to run after every completed dispatch.
    ///
    /// The listener joins the sequence future notification passes iterate;
    /// a pass already under way is not affected. The returned
    /// [`Subscription`] removes exactly this registration: subscribing the
    /// same callback twice yields two independent subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IllegalReentrancy`] while the reducer is
    /// executing: subscribing must happen outside the update cycle so the
    /// captured listener sequence stays stable for the pass that captured
    /// it.
    pub fn subscribe(&self, listener: Listener) -> Result<Subscription, StoreError>
    where
        R: 'static,
    {
        if self.inner.dispatching.get() {
            return Err(StoreError::IllegalReentrancy(
                "listeners may not subscribe while the reducer is executing",
            ));
        }

        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.with_next_listeners(|listeners| {
            listeners.push(ListenerEntry::new(id, listener));
        });

        let weak = Rc::downgrade(&self.inner);
        let mut active = true;
        Ok(Subscription::new(Box::new(move || {
            if !active {
                return Ok(());
            }
            let Some(inner) = weak.upgrade() else {
                // The container is gone; nothing left to remove.
                active = false;
                return Ok(());
            };
            if inner.dispatching.get() {
                return Err(StoreError::IllegalReentrancy(
                    "listeners may not unsubscribe while the reducer is executing",
                ));
            }
            active = false;
            inner.with_next_listeners(|listeners| {
                if let Some(index) = listeners.iter().position(|entry| entry.id() == id) {
                    listeners.remove(index);
                }
            });
            Ok(())
        })))
    }

    /// Swap the reducer and run one reserved `Replace` cycle so the new
    /// reducer can reshape the state it inherits.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IllegalReentrancy`] while a dispatch is in
    /// flight.
    pub fn replace_reducer(&self, reducer: R) -> Result<(), StoreError> {
        if self.inner.dispatching.get() {
            return Err(StoreError::IllegalReentrancy(
                "the reducer may not be replaced while it is executing",
            ));
        }
        *self.inner.reducer.borrow_mut() = reducer;
        tracing::debug!("reducer replaced");
        self.dispatch_cycle(StoreAction::Replace);
        Ok(())
    }

    /// One dispatch cycle: guard, reduce, replace state, notify.
    ///
    /// Callers have already verified that no dispatch is in flight.
    fn dispatch_cycle(&self, action: StoreAction<&R::Action>) {
        tracing::trace!(kind = action.kind().unwrap_or("<none>"), "dispatching");
        {
            let _guard = DispatchGuard::set(&self.inner.dispatching);
            let next = {
                let reducer = self.inner.reducer.borrow();
                let state = self.inner.state.borrow();
                reducer.reduce(state.as_ref(), action)
            };
            *self.inner.state.borrow_mut() = Some(next);
        }
        self.notify();
    }

    /// Snapshot the pending listener sequence and invoke it in order.
    ///
    /// The snapshot point is where pending subscribe/unsubscribe mutations
    /// become visible. The pass iterates its own reference to the
    /// sequence, so listeners are free to subscribe, unsubscribe, and even
    /// dispatch; all of that lands in `next_listeners` or a nested pass,
    /// never in the sequence being iterated.
    fn notify(&self) {
        let snapshot = {
            let next = self.inner.next_listeners.borrow();
            *self.inner.current_listeners.borrow_mut() = Rc::clone(&next);
            Rc::clone(&next)
        };
        for entry in snapshot.iter() {
            entry.call();
        }
    }
}

/// Construct a [`Store`] from a reducer and optional preloaded state.
///
/// Mirrors the two-argument factory surface: `create_store(reducer, None)`
/// lets the reducer establish its default state during the initialization
/// dispatch, `create_store(reducer, Some(state))` preloads it.
#[must_use]
pub fn create_store<R: Reducer>(reducer: R, preloaded: Option<R::State>) -> Store<R> {
    match preloaded {
        Some(state) => Store::with_state(reducer, state),
        None => Store::new(reducer),
    }
}

/// Construct a store and hand it to `enhancer` for decoration.
///
/// The enhancer receives the finished base store and returns the store the
/// caller will use; the engine knows nothing about what was added. Compose
/// several enhancers by nesting them inside one closure.
#[must_use]
pub fn create_store_enhanced<R, E>(
    reducer: R,
    preloaded: Option<R::State>,
    enhancer: E,
) -> BoxedStore<R::State, R::Action>
where
    R: Reducer + 'static,
    E: Enhancer<R::State, R::Action>,
{
    enhancer.enhance(Box::new(create_store(reducer, preloaded)))
}
