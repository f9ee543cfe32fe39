//! Fluent store testing with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // StoreTest is the natural name

use uniflow_core::Reducer;
use uniflow_runtime::create_store;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent builder that drives a real store through dispatches.
///
/// Unlike calling the reducer directly, this exercises the full dispatch
/// cycle (initialization dispatch, guard discipline, state replacement),
/// so tests written with it fail when store behavior regresses, not just
/// reducer arithmetic.
///
/// # Example
///
/// ```ignore
/// use uniflow_testing::StoreTest;
///
/// StoreTest::new(CounterReducer)
///     .given_state(CounterState { count: 1 })
///     .when_action(CounterAction::Increment)
///     .then_state(|state| {
///         assert_eq!(state.count, 2);
///     })
///     .run();
/// ```
pub struct StoreTest<R: Reducer> {
    reducer: R,
    preloaded: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
}

impl<R> StoreTest<R>
where
    R: Reducer + 'static,
{
    /// Create a new store test with the given reducer.
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            preloaded: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
        }
    }

    /// Preload the store's state (Given). Without it the reducer's default
    /// state from the initialization dispatch is the starting point.
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.preloaded = Some(state);
        self
    }

    /// Queue an action to dispatch (When). May be called repeatedly;
    /// actions dispatch in the order they were queued.
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the final state (Then).
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Build the store, dispatch every queued action, and run all
    /// assertions against the final state.
    ///
    /// # Panics
    ///
    /// Panics if any dispatch is rejected or any assertion fails.
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let store = create_store(self.reducer, self.preloaded);

        for action in self.actions {
            store
                .dispatch(action)
                .expect("queued action must be dispatchable");
        }

        let state = store.state().expect("no dispatch is in flight");
        for assertion in self.state_assertions {
            assertion(&state);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uniflow_core::{Action, StoreAction};

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    impl Action for TestAction {
        fn kind(&self) -> Option<&str> {
            Some(match self {
                Self::Increment => "Increment",
                Self::Decrement => "Decrement",
            })
        }
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(
            &self,
            state: Option<&Self::State>,
            action: StoreAction<&Self::Action>,
        ) -> Self::State {
            let current = state.cloned().unwrap_or_default();
            match action.app() {
                Some(TestAction::Increment) => TestState {
                    count: current.count + 1,
                },
                Some(TestAction::Decrement) => TestState {
                    count: current.count - 1,
                },
                None => current,
            }
        }
    }

    #[test]
    fn store_test_increment() {
        StoreTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn store_test_chains_actions_in_order() {
        StoreTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn store_test_without_given_state_uses_the_reducer_default() {
        StoreTest::new(TestReducer)
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }
}
