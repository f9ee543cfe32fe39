//! Enhancers decorate a finished store without the engine knowing.
//!
//! The decorator below wraps `dispatch` the way a logging or persistence
//! enhancer would; the inner store's semantics must be unchanged.

#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use uniflow_core::{Action, Reducer, StoreError};
use uniflow_runtime::{
    BoxedStore, FnReducer, Listener, StateRef, StoreAction, StoreApi, Subscription,
    create_store_enhanced,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum CounterAction {
    Increment,
}

impl Action for CounterAction {
    fn kind(&self) -> Option<&str> {
        Some("Increment")
    }
}

fn counter_reducer() -> impl Reducer<State = i64, Action = CounterAction> + 'static {
    FnReducer::new(|state: Option<&i64>, action: StoreAction<&CounterAction>| {
        let current = state.copied().unwrap_or(0);
        match action.app() {
            Some(CounterAction::Increment) => current + 1,
            None => current,
        }
    })
}

struct CountingStore {
    inner: BoxedStore<i64, CounterAction>,
    dispatches: Rc<Cell<usize>>,
}

impl StoreApi for CountingStore {
    type State = i64;
    type Action = CounterAction;

    fn dispatch(&self, action: CounterAction) -> Result<CounterAction, StoreError> {
        self.dispatches.set(self.dispatches.get() + 1);
        self.inner.dispatch(action)
    }

    fn subscribe(&self, listener: Listener) -> Result<Subscription, StoreError> {
        self.inner.subscribe(listener)
    }

    fn state(&self) -> Result<StateRef<'_, i64>, StoreError> {
        self.inner.state()
    }
}

#[test]
fn enhancer_decorates_dispatch_without_changing_semantics() {
    let dispatches = Rc::new(Cell::new(0));
    let recorded = Rc::clone(&dispatches);

    let store = create_store_enhanced(
        counter_reducer(),
        None,
        move |inner: BoxedStore<i64, CounterAction>| {
            Box::new(CountingStore {
                inner,
                dispatches: recorded,
            }) as BoxedStore<i64, CounterAction>
        },
    );

    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Increment).unwrap();

    assert_eq!(*store.state().unwrap(), 2);
    assert_eq!(dispatches.get(), 2);
}

#[test]
fn subscriptions_pass_through_a_decorator() {
    let dispatches = Rc::new(Cell::new(0));
    let recorded = Rc::clone(&dispatches);

    let store = create_store_enhanced(
        counter_reducer(),
        Some(10),
        move |inner: BoxedStore<i64, CounterAction>| {
            Box::new(CountingStore {
                inner,
                dispatches: recorded,
            }) as BoxedStore<i64, CounterAction>
        },
    );

    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    let mut subscription = store
        .subscribe(Rc::new(move || counter.set(counter.get() + 1)))
        .unwrap();

    store.dispatch(CounterAction::Increment).unwrap();
    assert_eq!(notified.get(), 1);
    assert_eq!(*store.state().unwrap(), 11);

    subscription.unsubscribe().unwrap();
    store.dispatch(CounterAction::Increment).unwrap();
    assert_eq!(notified.get(), 1);
}
