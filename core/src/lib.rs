//! # Uniflow Core
//!
//! Core traits and types for the Uniflow state container.
//!
//! Uniflow is a minimal, synchronous, single-writer state container. A store
//! owns one state value, applies transitions through a caller-supplied pure
//! reducer one action at a time, and notifies subscribers strictly after each
//! transition completes. This crate defines the vocabulary the store engine
//! in `uniflow-runtime` is built from:
//!
//! - **State**: an opaque owned value of application-defined shape
//! - **Action**: a discriminated request to transition state
//! - **Reducer**: pure function `(Option<&State>, StoreAction<&Action>) → State`
//! - **`StoreAction`**: the envelope carrying reserved lifecycle actions
//!   alongside application actions
//! - **`StoreError`**: the contract-violation taxonomy
//!
//! ## Design Principles
//!
//! - Unidirectional data flow: state changes only through dispatched actions
//! - Replacement, not mutation: the reducer returns the next state whole
//! - Contract violations are errors, not control flow
//! - The container never inspects state structure
//!
//! ## Example
//!
//! ```
//! use uniflow_core::{Action, Reducer, StoreAction};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> Option<&str> {
//!         Some("Increment")
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(
//!         &self,
//!         state: Option<&Self::State>,
//!         action: StoreAction<&Self::Action>,
//!     ) -> Self::State {
//!         let current = state.cloned().unwrap_or_default();
//!         match action.app() {
//!             Some(CounterAction::Increment) => CounterState {
//!                 count: current.count + 1,
//!             },
//!             None => current,
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod error;
pub mod reducer;

pub use action::{Action, StoreAction};
pub use error::StoreError;
pub use reducer::{FnReducer, Reducer};
