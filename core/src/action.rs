//! Actions: discriminated requests to transition state.
//!
//! Every value dispatched to a store must name the transition it requests
//! via a discriminant string, its *kind*. The store validates the kind
//! before running the reducer and uses it for logging; it never interprets
//! the value beyond that.

use std::fmt;

/// Reserved discriminant for the initialization action a store dispatches
/// once during construction.
const INIT_KIND: &str = "@@uniflow/INIT";

/// Reserved discriminant for the action a store dispatches after its
/// reducer has been replaced.
const REPLACE_KIND: &str = "@@uniflow/REPLACE";

/// A discriminated request to transition state.
///
/// Implementations expose the discriminant through [`Action::kind`]. The
/// usual implementation is an enum where each variant maps to its own name;
/// `#[derive(Action)]` from `uniflow-macros` generates exactly that.
///
/// # Example
///
/// ```
/// use uniflow_core::Action;
///
/// #[derive(Clone, Debug)]
/// enum TodoAction {
///     AddTodo { title: String },
///     ToggleTodo { index: usize },
/// }
///
/// impl Action for TodoAction {
///     fn kind(&self) -> Option<&str> {
///         Some(match self {
///             Self::AddTodo { .. } => "AddTodo",
///             Self::ToggleTodo { .. } => "ToggleTodo",
///         })
///     }
/// }
/// ```
pub trait Action: fmt::Debug {
    /// The discriminant naming the transition this action requests.
    ///
    /// Returning `None` marks a value that does not identify a concrete
    /// transition; `dispatch` rejects such actions with
    /// [`StoreError::InvalidArgument`](crate::StoreError::InvalidArgument).
    fn kind(&self) -> Option<&str>;
}

impl<A: Action + ?Sized> Action for &A {
    fn kind(&self) -> Option<&str> {
        (**self).kind()
    }
}

/// The envelope a reducer receives: an application action or one of the
/// two reserved lifecycle actions.
///
/// The store dispatches [`StoreAction::Init`] exactly once during
/// construction so the reducer can establish its default state, and
/// [`StoreAction::Replace`] after the reducer has been swapped. Both run
/// through the same dispatch cycle as application actions. Application code
/// cannot route either through the public dispatch surface and must not
/// attach meaning to their discriminants.
///
/// A total reducer handles the lifecycle variants (and any unknown
/// application action) by returning the current state unchanged, or its
/// default when no state exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction<A> {
    /// Reserved initialization action, dispatched once at construction.
    Init,
    /// Reserved action dispatched after the reducer is replaced.
    Replace,
    /// An application-level action.
    App(A),
}

impl<A: Action> StoreAction<A> {
    /// The discriminant of the wrapped action, or the reserved discriminant
    /// of a lifecycle action.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Init => Some(INIT_KIND),
            Self::Replace => Some(REPLACE_KIND),
            Self::App(action) => action.kind(),
        }
    }
}

impl<A> StoreAction<A> {
    /// The application action, if this is not a lifecycle action.
    #[must_use]
    pub const fn app(&self) -> Option<&A> {
        match self {
            Self::App(action) => Some(action),
            Self::Init | Self::Replace => None,
        }
    }
}
