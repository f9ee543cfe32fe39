//! # Counter Demo
//!
//! A simple counter demonstrating the Uniflow state container.
//!
//! This demo showcases:
//! - A pure reducer over an owned state value
//! - Actions derived with `#[derive(Action)]`
//! - Store usage: dispatch, state reads, subscriptions
//!
//! ## Example
//!
//! ```
//! use counter::{CounterAction, CounterReducer, CounterState};
//! use uniflow_runtime::Store;
//!
//! let store = Store::new(CounterReducer);
//!
//! store.dispatch(CounterAction::Increment).expect("valid action");
//! let count = store.state().expect("not dispatching").count;
//! assert_eq!(count, 1);
//! ```

use uniflow_core::{Reducer, StoreAction};
use uniflow_macros::Action;

/// Counter state
///
/// The state is just a simple count. In a real application, this might
/// contain more complex domain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
}

/// Counter actions
///
/// These are the transitions the counter supports. Each variant's name is
/// its dispatch discriminant, courtesy of the derive.
#[derive(Action, Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Reset the counter to 0
    Reset,
}

/// Counter reducer
///
/// A pure function from the current state and an action to the next state.
/// Unknown actions, including the store's reserved lifecycle actions,
/// return the current state unchanged, which is what makes the reducer
/// total.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(
        &self,
        state: Option<&Self::State>,
        action: StoreAction<&Self::Action>,
    ) -> Self::State {
        let current = state.cloned().unwrap_or_default();
        match action.app() {
            Some(CounterAction::Increment) => CounterState {
                count: current.count + 1,
            },
            Some(CounterAction::Decrement) => CounterState {
                count: current.count - 1,
            },
            Some(CounterAction::Reset) => CounterState { count: 0 },
            None => current,
        }
    }
}
