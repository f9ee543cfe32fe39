//! Counter demo binary
//!
//! Demonstrates the Uniflow state container with a simple counter.

use std::rc::Rc;

use counter::{CounterAction, CounterReducer, CounterState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniflow_runtime::Store;

#[allow(clippy::expect_used)] // Demo walkthrough; every call here is valid by construction
fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,uniflow_runtime=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Demo: Uniflow State Container ===\n");

    // Create store; the reducer establishes the default state during the
    // initialization dispatch.
    let store = Store::with_state(CounterReducer::new(), CounterState::default());

    let count = store.state().expect("not dispatching").count;
    println!("Initial count: {count}");

    // Subscribe an observer; it runs after every completed dispatch.
    let observer = {
        let handle = store.clone();
        Rc::new(move || {
            let count = handle.state().expect("notification runs between dispatches").count;
            println!("  [observer] count is now {count}");
        })
    };
    let mut subscription = store.subscribe(observer).expect("not dispatching");

    // Increment twice
    println!("\n>>> Dispatching: Increment");
    let _ = store
        .dispatch(CounterAction::Increment)
        .expect("valid action");

    println!("\n>>> Dispatching: Increment");
    let _ = store
        .dispatch(CounterAction::Increment)
        .expect("valid action");

    // Decrement
    println!("\n>>> Dispatching: Decrement");
    let _ = store
        .dispatch(CounterAction::Decrement)
        .expect("valid action");

    // Unsubscribe; further dispatches no longer notify the observer.
    subscription.unsubscribe().expect("not dispatching");

    println!("\n>>> Dispatching: Reset (observer unsubscribed)");
    let _ = store.dispatch(CounterAction::Reset).expect("valid action");
    let count = store.state().expect("not dispatching").count;
    println!("Count after Reset: {count}");

    println!("\n=== Demo Complete ===");
    println!("\nKey concepts demonstrated:");
    println!("  • State: CounterState (domain data)");
    println!("  • Action: CounterAction (discriminated transitions)");
    println!("  • Reducer: pure function (state, action) → new state");
    println!("  • Store: synchronous single-writer container");
    println!("  • Subscriptions: notified once per completed dispatch");
}
