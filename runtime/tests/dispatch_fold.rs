//! Fold property for the dispatch cycle.
//!
//! For any sequence of dispatched actions, the state the store ends up with
//! must equal the left fold of the reducer over the same sequence: dispatch
//! adds notification and guarding, never arithmetic.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use uniflow_core::{Action, Reducer, StoreAction};
use uniflow_runtime::create_store;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ArithAction {
    Add(i64),
    Mul(i64),
    Clamp,
}

impl Action for ArithAction {
    fn kind(&self) -> Option<&str> {
        Some(match self {
            Self::Add(_) => "Add",
            Self::Mul(_) => "Mul",
            Self::Clamp => "Clamp",
        })
    }
}

#[derive(Clone)]
struct ArithReducer;

impl Reducer for ArithReducer {
    type State = i64;
    type Action = ArithAction;

    fn reduce(&self, state: Option<&i64>, action: StoreAction<&ArithAction>) -> i64 {
        let current = state.copied().unwrap_or(0);
        match action.app() {
            Some(ArithAction::Add(amount)) => current.wrapping_add(*amount),
            Some(ArithAction::Mul(factor)) => current.wrapping_mul(*factor),
            Some(ArithAction::Clamp) => current.clamp(-1_000, 1_000),
            None => current,
        }
    }
}

// Mixing non-commuting transitions makes the fold order observable.
fn arbitrary_action() -> impl Strategy<Value = ArithAction> {
    prop_oneof![
        (-100i64..100).prop_map(ArithAction::Add),
        (-8i64..8).prop_map(ArithAction::Mul),
        Just(ArithAction::Clamp),
    ]
}

proptest! {
    #[test]
    fn state_equals_the_fold_of_dispatched_actions(
        seed in -100i64..100i64,
        actions in proptest::collection::vec(arbitrary_action(), 0..32),
    ) {
        let store = create_store(ArithReducer, Some(seed));
        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        let expected = actions.iter().fold(seed, |state, action| {
            ArithReducer.reduce(Some(&state), StoreAction::App(action))
        });
        prop_assert_eq!(*store.state().unwrap(), expected);
    }

    #[test]
    fn every_dispatch_echoes_its_action(
        actions in proptest::collection::vec(arbitrary_action(), 1..16),
    ) {
        let store = create_store(ArithReducer, None);
        for action in actions {
            let echoed = store.dispatch(action.clone()).unwrap();
            prop_assert_eq!(echoed, action);
        }
    }
}
