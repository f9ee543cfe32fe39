//! # Uniflow Devtools
//!
//! Bridges actions from an external tracing/replay tool (a *relay*) into a
//! private shadow [`Store`] and back.
//!
//! A relay is anything exposing the two-method collaborator contract in
//! [`Relay`]: a state accessor and a middleware registration hook. The
//! [`connect`] function builds a shadow store seeded from the relay's
//! current state and registers a middleware that, once the relay's deferred
//! state value resolves, forwards the action into the shadow store's
//! `dispatch` and yields the resolved state unchanged. The shadow store
//! then replays exactly the action stream the relay observed, which is what
//! makes time-travel tooling possible without the store engine knowing any
//! of this exists.
//!
//! This crate is pure glue between two existing contracts, a deferred
//! value ([`Pending`]) and `dispatch`, and adds no behavior of its own.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use uniflow_core::{Action, Reducer, StoreAction};
use uniflow_runtime::{Store, create_store};

/// A deferred state value, resolved at most once.
///
/// The synchronous analog of a promise: a `Pending` either already holds a
/// value or holds a computation producing one. [`then`](Pending::then)
/// chains a transform onto the eventual value; nothing runs until
/// [`resolve`](Pending::resolve) forces the chain.
pub struct Pending<S>(PendingInner<S>);

enum PendingInner<S> {
    Ready(S),
    Deferred(Box<dyn FnOnce() -> S>),
}

impl<S: 'static> Pending<S> {
    /// A pending value that is already resolved.
    #[must_use]
    pub const fn ready(value: S) -> Self {
        Self(PendingInner::Ready(value))
    }

    /// A pending value produced on demand.
    #[must_use]
    pub fn deferred(produce: impl FnOnce() -> S + 'static) -> Self {
        Self(PendingInner::Deferred(Box::new(produce)))
    }

    /// Chain a transform onto the eventual value.
    ///
    /// The transform does not run until the returned `Pending` is
    /// resolved; chains run in the order they were attached.
    #[must_use]
    pub fn then(self, f: impl FnOnce(S) -> S + 'static) -> Self {
        Self(PendingInner::Deferred(Box::new(move || f(self.resolve()))))
    }

    /// Force the chain and yield the state value.
    pub fn resolve(self) -> S {
        match self.0 {
            PendingInner::Ready(value) => value,
            PendingInner::Deferred(produce) => produce(),
        }
    }
}

/// Middleware registered with a relay.
///
/// Receives the relay's state accessor, the deferred state the relay is
/// about to yield, and the action in flight; returns the deferred state to
/// hand further down the relay's chain.
pub type RelayMiddleware<S, A> = Box<dyn FnMut(&dyn Fn() -> S, Pending<S>, A) -> Pending<S>>;

/// The collaborator contract an external tracing/replay tool exposes.
///
/// The store engine never depends on this trait; only [`connect`] does.
pub trait Relay {
    /// The state type the relay traffics in.
    type State: Clone;

    /// The action type the relay forwards.
    type Action: Action;

    /// The relay's current state value.
    fn state(&self) -> Self::State;

    /// Register a middleware the relay will call for every action it
    /// observes, in registration order.
    fn use_middleware(&mut self, middleware: RelayMiddleware<Self::State, Self::Action>);
}

/// Reducer for the shadow store: yields whatever state the relay last
/// resolved, ignoring the action content. The action stream still flows
/// through the full dispatch cycle, so shadow-store subscribers observe
/// one notification per relayed action.
pub struct MirrorReducer<S, A> {
    latest: Rc<RefCell<S>>,
    _marker: PhantomData<fn(A)>,
}

impl<S, A> MirrorReducer<S, A> {
    fn new(seed: S) -> Self {
        Self {
            latest: Rc::new(RefCell::new(seed)),
            _marker: PhantomData,
        }
    }

    fn slot(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.latest)
    }
}

impl<S, A> Reducer for MirrorReducer<S, A>
where
    S: Clone,
    A: Action,
{
    type State = S;
    type Action = A;

    fn reduce(&self, _state: Option<&S>, _action: StoreAction<&A>) -> S {
        self.latest.borrow().clone()
    }
}

/// Build a shadow store mirroring `relay` and register the forwarding
/// middleware with it.
///
/// The shadow store is seeded from the relay's current state. Afterwards,
/// every action the relay observes is forwarded into the shadow store's
/// `dispatch` once the relay's deferred state resolves; the resolved state
/// is yielded onward unchanged. A forward the shadow store rejects (an
/// action without a kind) is logged at `warn` and never breaks the relay's
/// chain.
pub fn connect<Rl>(relay: &mut Rl) -> Store<MirrorReducer<Rl::State, Rl::Action>>
where
    Rl: Relay + ?Sized,
    Rl::State: Clone + 'static,
    Rl::Action: Action + 'static,
{
    let mirror = MirrorReducer::new(relay.state());
    let slot = mirror.slot();
    let shadow = create_store(mirror, Some(relay.state()));

    let forward = shadow.clone();
    relay.use_middleware(Box::new(move |_state, pending, action| {
        let slot = Rc::clone(&slot);
        let forward = forward.clone();
        pending.then(move |state| {
            *slot.borrow_mut() = state.clone();
            if let Err(error) = forward.dispatch(action) {
                tracing::warn!(%error, "shadow store rejected relayed action");
            }
            state
        })
    }));

    shadow
}
