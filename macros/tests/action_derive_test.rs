//! Tests for the `#[derive(Action)]` macro.

#![allow(missing_docs)]

use uniflow_core::Action;
use uniflow_macros::Action;

#[derive(Action, Clone, Debug)]
enum TodoAction {
    AddTodo { title: String },
    ToggleTodo(usize),

    #[kind("todos/clear")]
    ClearCompleted,
}

#[test]
fn variant_names_become_discriminants() {
    let action = TodoAction::AddTodo {
        title: "write tests".to_owned(),
    };
    assert_eq!(action.kind(), Some("AddTodo"));
    assert_eq!(TodoAction::ToggleTodo(3).kind(), Some("ToggleTodo"));
}

#[test]
fn kind_attribute_overrides_the_discriminant() {
    assert_eq!(TodoAction::ClearCompleted.kind(), Some("todos/clear"));
}

#[test]
fn derived_actions_always_carry_a_discriminant() {
    for action in [
        TodoAction::AddTodo {
            title: String::new(),
        },
        TodoAction::ToggleTodo(0),
        TodoAction::ClearCompleted,
    ] {
        assert!(action.kind().is_some());
    }
}
