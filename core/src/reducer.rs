//! The Reducer trait: the pure transition function at the heart of a store.

use std::marker::PhantomData;

use crate::action::{Action, StoreAction};

/// A pure state-transition function.
///
/// The store calls `reduce` with the current state and the dispatched
/// action; the reducer returns the next state whole. The store replaces its
/// state with the returned value in a single assignment, so an unwinding
/// reducer leaves the prior state untouched.
///
/// `state` is `None` only for the initialization dispatch of a store that
/// was constructed without preloaded state; the reducer establishes its
/// default there. Reducers must be total: an unrecognized action (including
/// the reserved lifecycle actions) yields the current state unchanged.
///
/// Reducers must not call back into the store they are reducing for; any
/// such call fails with
/// [`StoreError::IllegalReentrancy`](crate::StoreError::IllegalReentrancy).
///
/// # Example
///
/// ```
/// use uniflow_core::{Action, Reducer, StoreAction};
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally {
///     total: u64,
/// }
///
/// #[derive(Clone, Debug)]
/// struct Add(u64);
///
/// impl Action for Add {
///     fn kind(&self) -> Option<&str> {
///         Some("Add")
///     }
/// }
///
/// struct TallyReducer;
///
/// impl Reducer for TallyReducer {
///     type State = Tally;
///     type Action = Add;
///
///     fn reduce(
///         &self,
///         state: Option<&Self::State>,
///         action: StoreAction<&Self::Action>,
///     ) -> Self::State {
///         let current = state.cloned().unwrap_or_default();
///         match action.app() {
///             Some(Add(amount)) => Tally {
///                 total: current.total + amount,
///             },
///             None => current,
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer processes.
    type Action: Action;

    /// Compute the next state from the current state and an action.
    fn reduce(
        &self,
        state: Option<&Self::State>,
        action: StoreAction<&Self::Action>,
    ) -> Self::State;
}

/// Adapts a closure into a [`Reducer`].
///
/// Useful for small stores and tests where a named reducer type is
/// ceremony without benefit.
///
/// # Example
///
/// ```
/// use uniflow_core::{Action, FnReducer, Reducer, StoreAction};
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
/// let reducer = FnReducer::new(|state: Option<&u32>, action: StoreAction<&Tick>| {
///     let current = state.copied().unwrap_or(0);
///     match action.app() {
///         Some(Tick) => current + 1,
///         None => current,
///     }
/// });
///
/// assert_eq!(reducer.reduce(Some(&41), StoreAction::App(&Tick)), 42);
/// ```
pub struct FnReducer<F, S, A> {
    f: F,
    _marker: PhantomData<fn(Option<&S>, A) -> S>,
}

impl<F, S, A> FnReducer<F, S, A>
where
    F: Fn(Option<&S>, StoreAction<&A>) -> S,
    A: Action,
{
    /// Wrap a closure as a reducer.
    #[must_use]
    pub const fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, S, A> Reducer for FnReducer<F, S, A>
where
    F: Fn(Option<&S>, StoreAction<&A>) -> S,
    A: Action,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Option<&S>, action: StoreAction<&A>) -> S {
        (self.f)(state, action)
    }
}

// Boxed reducers reduce like the reducer they hold. This is what lets a
// store swap between reducers of different concrete types through
// `replace_reducer`.
impl<T: Reducer + ?Sized> Reducer for Box<T> {
    type State = T::State;
    type Action = T::Action;

    fn reduce(
        &self,
        state: Option<&Self::State>,
        action: StoreAction<&Self::Action>,
    ) -> Self::State {
        (**self).reduce(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Bump;

    impl Action for Bump {
        fn kind(&self) -> Option<&str> {
            Some("Bump")
        }
    }

    #[test]
    fn fn_reducer_delegates_to_the_closure() {
        let reducer = FnReducer::new(|state: Option<&i32>, action: StoreAction<&Bump>| {
            let current = state.copied().unwrap_or(0);
            match action.app() {
                Some(Bump) => current + 1,
                None => current,
            }
        });

        assert_eq!(reducer.reduce(None, StoreAction::Init), 0);
        assert_eq!(reducer.reduce(Some(&2), StoreAction::App(&Bump)), 3);
        assert_eq!(reducer.reduce(Some(&2), StoreAction::Replace), 2);
    }
}
