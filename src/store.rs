//! Notification Store
//!
//! Uses Leptos reactive_stores so the toast stack re-renders per field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Severity;

/// One visible toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Exit transition running, removal is imminent
    pub leaving: bool,
}

/// Toasts currently on screen, in append order
#[derive(Clone, Debug, Default, Store)]
pub struct NotifierState {
    pub toasts: Vec<Toast>,
    /// Last id handed out
    pub next_id: u64,
}

/// Type alias for the store
pub type NotifierStore = Store<NotifierState>;

pub fn new_notifier_store() -> NotifierStore {
    Store::new(NotifierState::default())
}

// ========================
// List Operations
// ========================

/// Start the exit transition; false if the toast is gone or already leaving
pub fn begin_exit(toasts: &mut [Toast], id: u64) -> bool {
    match toasts.iter_mut().find(|toast| toast.id == id) {
        Some(toast) if !toast.leaving => {
            toast.leaving = true;
            true
        }
        _ => false,
    }
}

pub fn remove_toast(toasts: &mut Vec<Toast>, id: u64) -> bool {
    let before = toasts.len();
    toasts.retain(|toast| toast.id != id);
    toasts.len() != before
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast and return its id
pub fn store_push_toast(store: &NotifierStore, message: String, severity: Severity) -> u64 {
    let id = {
        let next_id = store.next_id();
        let mut next = next_id.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        message,
        severity,
        leaving: false,
    });
    id
}

pub fn store_begin_exit(store: &NotifierStore, id: u64) -> bool {
    begin_exit(&mut store.toasts().write(), id)
}

pub fn store_remove_toast(store: &NotifierStore, id: u64) -> bool {
    remove_toast(&mut store.toasts().write(), id)
}

pub fn store_is_leaving(store: &NotifierStore, id: u64) -> bool {
    store
        .toasts()
        .with(|toasts| toasts.iter().any(|toast| toast.id == id && toast.leaving))
}

pub fn store_toasts(store: &NotifierStore) -> Vec<Toast> {
    store.toasts().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            message: format!("Toast {}", id),
            severity: Severity::Info,
            leaving: false,
        }
    }

    #[test]
    fn test_exit_then_remove() {
        let mut toasts = vec![toast(1), toast(2), toast(3)];

        assert!(begin_exit(&mut toasts, 2));
        assert!(toasts[1].leaving);
        assert_eq!(toasts.len(), 3);

        assert!(remove_toast(&mut toasts, 2));
        let ids: Vec<u64> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_exit_runs_once() {
        let mut toasts = vec![toast(1)];
        assert!(begin_exit(&mut toasts, 1));
        // Close button clicked while the timer already started the exit
        assert!(!begin_exit(&mut toasts, 1));
        assert!(remove_toast(&mut toasts, 1));
        assert!(!begin_exit(&mut toasts, 1));
        assert!(!remove_toast(&mut toasts, 1));
    }
}
