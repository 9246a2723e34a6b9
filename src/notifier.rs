//! Notifier
//!
//! Transient alerts stacked at a fixed screen position. Each one
//! dismisses itself after its duration and is removed after a short
//! exit transition. There is no cap; overlapping toasts are expected.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ToastStack;
use crate::config::{NOTIFICATION_DURATION_MS, NOTIFICATION_EXIT_MS};
use crate::models::Severity;
use crate::store::{new_notifier_store, store_begin_exit, store_push_toast, store_remove_toast, NotifierStore};

/// Handle used by every feature to surface feedback
#[derive(Clone, Copy)]
pub struct Notifier {
    store: NotifierStore,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            store: new_notifier_store(),
        }
    }

    /// Render the toast stack at the end of `<body>`
    pub fn mount(&self) {
        let store = self.store;
        leptos::mount::mount_to_body(move || view! { <ToastStack store=store /> });
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.show_for(message, severity, NOTIFICATION_DURATION_MS);
    }

    pub fn show_for(&self, message: impl Into<String>, severity: Severity, duration_ms: u32) {
        let message = message.into();
        log::debug!("notify [{}] {}", severity, message);

        let id = store_push_toast(&self.store, message, severity);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            close(store, id).await;
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Dismiss now (close button)
pub fn dismiss(store: NotifierStore, id: u64) {
    spawn_local(close(store, id));
}

async fn close(store: NotifierStore, id: u64) {
    if !store_begin_exit(&store, id) {
        return;
    }
    TimeoutFuture::new(NOTIFICATION_EXIT_MS).await;
    store_remove_toast(&store, id);
}
