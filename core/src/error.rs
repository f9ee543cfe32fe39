//! Error types for store operations.

use thiserror::Error;

/// Errors raised when a store contract is violated.
///
/// Both variants indicate caller bugs, not transient conditions: they are
/// raised synchronously at the point of violation and there is no internal
/// recovery or retry. Reducer and listener failures are panics and are
/// never caught or wrapped by the store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A value passed to the store failed validation.
    ///
    /// Raised by `dispatch` for an action whose
    /// [`kind`](crate::Action::kind) is `None`; every dispatched action
    /// must carry a discriminant.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A store operation was invoked while the reducer was executing.
    ///
    /// Exactly one state transition may be in flight at any instant; the
    /// reducer receives the state as an argument and must not read it from
    /// the store, dispatch further actions, or change the subscriber list
    /// mid-transition.
    #[error("illegal re-entrant call: {0}")]
    IllegalReentrancy(&'static str),
}
