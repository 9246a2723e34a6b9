//! Page Context
//!
//! Shared handles passed to every feature at startup.

use web_sys::IntersectionObserver;

use crate::notifier::Notifier;
use crate::optimistic::InFlight;

#[derive(Clone)]
pub struct PageContext {
    pub notifier: Notifier,
    /// Projects with a like request outstanding
    pub likes_in_flight: InFlight<String>,
    /// Entrance-animation observer, if the browser has one
    pub reveal: Option<IntersectionObserver>,
}

impl PageContext {
    pub fn new(notifier: Notifier, reveal: Option<IntersectionObserver>) -> Self {
        Self {
            notifier,
            likes_in_flight: InFlight::new(),
            reveal,
        }
    }
}
