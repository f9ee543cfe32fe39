//! Store composition: the object-safe store surface and enhancers.
//!
//! An enhancer decorates a finished store to add cross-cutting behavior
//! (logging, persistence bridges, devtools) without the engine knowing
//! anything about it. Enhancers compose by explicit nesting: the innermost
//! decorator wraps the base store, the outermost is what the caller holds.

use uniflow_core::{Action, Reducer, StoreError};

use crate::listener::{Listener, Subscription};
use crate::{StateRef, Store};

/// The store surface: read state, dispatch actions, subscribe listeners.
///
/// [`Store`] implements this directly; decorators built by an
/// [`Enhancer`] implement it by wrapping another implementation. The trait
/// is object-safe so decorators can hold their inner store as a
/// [`BoxedStore`].
pub trait StoreApi {
    /// The state type held by the store.
    type State;

    /// The action type the store accepts.
    type Action: Action;

    /// Apply one state transition. See [`Store::dispatch`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`] for an action without a
    /// kind and [`StoreError::IllegalReentrancy`] for a dispatch issued
    /// while the reducer is executing.
    fn dispatch(&self, action: Self::Action) -> Result<Self::Action, StoreError>;

    /// Register a change listener. See [`Store::subscribe`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IllegalReentrancy`] while the reducer is
    /// executing.
    fn subscribe(&self, listener: Listener) -> Result<Subscription, StoreError>;

    /// Borrow the current state. See [`Store::state`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IllegalReentrancy`] while the reducer is
    /// executing.
    fn state(&self) -> Result<StateRef<'_, Self::State>, StoreError>;
}

impl<R> StoreApi for Store<R>
where
    R: Reducer + 'static,
{
    type State = R::State;
    type Action = R::Action;

    fn dispatch(&self, action: Self::Action) -> Result<Self::Action, StoreError> {
        Store::dispatch(self, action)
    }

    fn subscribe(&self, listener: Listener) -> Result<Subscription, StoreError> {
        Store::subscribe(self, listener)
    }

    fn state(&self) -> Result<StateRef<'_, Self::State>, StoreError> {
        Store::state(self)
    }
}

/// A store whose concrete reducer type has been erased.
pub type BoxedStore<S, A> = Box<dyn StoreApi<State = S, Action = A>>;

/// A transformer applied to a finished store at construction time.
///
/// Implemented for any `FnOnce(BoxedStore<S, A>) -> BoxedStore<S, A>`, so
/// a closure returning a decorator is already an enhancer:
///
/// ```
/// use uniflow_core::{Action, StoreError};
/// use uniflow_runtime::{BoxedStore, FnReducer, StoreAction, StoreApi, create_store_enhanced};
/// # use uniflow_runtime::{Listener, StateRef, Subscription};
///
/// #[derive(Clone, Debug)]
/// struct Tick;
///
/// impl Action for Tick {
///     fn kind(&self) -> Option<&str> {
///         Some("Tick")
///     }
/// }
///
/// struct Traced(BoxedStore<u32, Tick>);
///
/// impl StoreApi for Traced {
///     type State = u32;
///     type Action = Tick;
///
///     fn dispatch(&self, action: Tick) -> Result<Tick, StoreError> {
///         tracing::info!("dispatch");
///         self.0.dispatch(action)
///     }
///
///     fn subscribe(&self, listener: Listener) -> Result<Subscription, StoreError> {
///         self.0.subscribe(listener)
///     }
///
///     fn state(&self) -> Result<StateRef<'_, u32>, StoreError> {
///         self.0.state()
///     }
/// }
///
/// let reducer = FnReducer::new(|state: Option<&u32>, action: StoreAction<&Tick>| {
///     let current = state.copied().unwrap_or(0);
///     match action.app() {
///         Some(Tick) => current + 1,
///         None => current,
///     }
/// });
///
/// let store = create_store_enhanced(reducer, None, |inner: BoxedStore<u32, Tick>| {
///     Box::new(Traced(inner)) as BoxedStore<u32, Tick>
/// });
/// store.dispatch(Tick).ok();
/// assert_eq!(*store.state().expect("readable"), 1);
/// ```
pub trait Enhancer<S, A: Action> {
    /// Wrap the given store, returning the store the caller will use.
    fn enhance(self, store: BoxedStore<S, A>) -> BoxedStore<S, A>;
}

impl<S, A, F> Enhancer<S, A> for F
where
    A: Action,
    F: FnOnce(BoxedStore<S, A>) -> BoxedStore<S, A>,
{
    fn enhance(self, store: BoxedStore<S, A>) -> BoxedStore<S, A> {
        self(store)
    }
}
