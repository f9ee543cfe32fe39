//! # Uniflow Testing
//!
//! Testing utilities and helpers for the Uniflow state container.
//!
//! This crate provides:
//! - A fluent Given-When-Then builder that drives a real store through a
//!   sequence of dispatches and asserts on the resulting state
//! - Listener helpers that count and record notifications
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_testing::StoreTest;
//!
//! StoreTest::new(CounterReducer)
//!     .given_state(CounterState { count: 0 })
//!     .when_action(CounterAction::Increment)
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| {
//!         assert_eq!(state.count, 2);
//!     })
//!     .run();
//! ```

/// Listener helpers that count and record notifications.
pub mod listeners;

/// Fluent Given-When-Then builder for store behavior.
pub mod store_test;

// Re-export commonly used items
pub use listeners::{CountingListener, NotificationLog};
pub use store_test::StoreTest;
