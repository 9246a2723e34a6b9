//! UI Components
//!
//! Leptos components rendered on top of the server markup.

mod toast_stack;

pub use toast_stack::ToastStack;
