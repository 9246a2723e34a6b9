//! Optimistic Updates
//!
//! Pure side of the like button and comment form: state transitions,
//! reconciliation with the server answer, and the guards that keep
//! concurrent clicks and busy buttons consistent. No DOM in here.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::UiResult;
use crate::models::{LikeResponse, LikeState};

/// Local guess for a like toggle: flip the flag, move the count by one
pub fn toggle_like(state: LikeState) -> LikeState {
    LikeState {
        liked: !state.liked,
        count: if state.liked {
            state.count.saturating_sub(1)
        } else {
            state.count.saturating_add(1)
        },
    }
}

/// An applied but unconfirmed change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub before: LikeState,
    pub shown: LikeState,
}

/// Where a pending change ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Server answered; its values replace whatever was guessed
    Confirmed(LikeState),
    /// Request failed; back to exactly what was there before the click
    Reverted(LikeState),
}

impl Settled {
    pub fn state(self) -> LikeState {
        match self {
            Settled::Confirmed(state) | Settled::Reverted(state) => state,
        }
    }
}

impl Pending {
    pub fn begin(before: LikeState) -> Self {
        Self {
            before,
            shown: toggle_like(before),
        }
    }

    pub fn settle(self, outcome: &UiResult<LikeResponse>) -> Settled {
        reconcile(self, outcome)
    }
}

/// Final state is always either the server's or the pre-click one
pub fn reconcile(pending: Pending, outcome: &UiResult<LikeResponse>) -> Settled {
    match outcome {
        Ok(resp) => Settled::Confirmed(LikeState::from(resp.clone())),
        Err(_) => Settled::Reverted(pending.before),
    }
}

// ========================
// In-flight guard
// ========================

/// Keys with a request currently outstanding
#[derive(Debug)]
pub struct InFlight<K: Eq + Hash> {
    keys: Rc<RefCell<HashSet<K>>>,
}

impl<K: Eq + Hash> Clone for InFlight<K> {
    fn clone(&self) -> Self {
        Self { keys: Rc::clone(&self.keys) }
    }
}

impl<K: Eq + Hash> Default for InFlight<K> {
    fn default() -> Self {
        Self { keys: Rc::default() }
    }
}

impl<K: Eq + Hash + Clone> InFlight<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`; `None` while another request for it is pending.
    /// The claim is released when the ticket is dropped.
    pub fn try_begin(&self, key: K) -> Option<InFlightTicket<K>> {
        if !self.keys.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(InFlightTicket {
            keys: Rc::clone(&self.keys),
            key,
        })
    }
}

#[derive(Debug)]
pub struct InFlightTicket<K: Eq + Hash> {
    keys: Rc<RefCell<HashSet<K>>>,
    key: K,
}

impl<K: Eq + Hash> Drop for InFlightTicket<K> {
    fn drop(&mut self) {
        self.keys.borrow_mut().remove(&self.key);
    }
}

// ========================
// Busy controls
// ========================

/// A control that can show a busy state (e.g. a submit button)
pub trait BusyControl {
    fn enter_busy(&self);
    fn leave_busy(&self);
}

/// Holds a control busy until dropped. Dropping happens on every exit
/// path of the owning scope, so the control is released exactly once.
pub struct BusyGuard<C: BusyControl> {
    control: C,
}

impl<C: BusyControl> BusyGuard<C> {
    pub fn new(control: C) -> Self {
        control.enter_busy();
        Self { control }
    }
}

impl<C: BusyControl> Drop for BusyGuard<C> {
    fn drop(&mut self) {
        self.control.leave_busy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use std::cell::Cell;

    fn state(liked: bool, count: u32) -> LikeState {
        LikeState { liked, count }
    }

    #[test]
    fn test_click_shows_guess_immediately() {
        let pending = Pending::begin(state(false, 10));
        assert_eq!(pending.shown, state(true, 11));

        let pending = Pending::begin(state(true, 10));
        assert_eq!(pending.shown, state(false, 9));
    }

    #[test]
    fn test_unlike_at_zero_saturates() {
        assert_eq!(toggle_like(state(true, 0)), state(false, 0));
    }

    #[test]
    fn test_success_takes_server_values() {
        let pending = Pending::begin(state(false, 10));
        let settled = pending.settle(&Ok(LikeResponse { liked: true, likes_count: 15 }));
        assert_eq!(settled, Settled::Confirmed(state(true, 15)));
    }

    #[test]
    fn test_server_may_disagree_with_guess() {
        let pending = Pending::begin(state(false, 10));
        let settled = pending.settle(&Ok(LikeResponse { liked: false, likes_count: 10 }));
        assert_eq!(settled.state(), state(false, 10));
    }

    #[test]
    fn test_failure_restores_pre_click_state() {
        let pending = Pending::begin(state(false, 10));
        assert_eq!(pending.shown, state(true, 11));

        let settled = pending.settle(&Err(UiError::Network("offline".into())));
        assert_eq!(settled, Settled::Reverted(state(false, 10)));

        let settled = pending.settle(&Err(UiError::Status(500)));
        assert_eq!(settled.state(), state(false, 10));
    }

    #[test]
    fn test_in_flight_blocks_second_request() {
        let guard = InFlight::new();
        let first = guard.try_begin("7".to_string());
        assert!(first.is_some());
        assert!(guard.try_begin("7".to_string()).is_none());
        assert!(guard.try_begin("8".to_string()).is_some());

        drop(first);
        assert!(guard.try_begin("7".to_string()).is_some());
    }

    struct CountingButton<'a> {
        busy: &'a Cell<u32>,
        released: &'a Cell<u32>,
    }

    impl BusyControl for CountingButton<'_> {
        fn enter_busy(&self) {
            self.busy.set(self.busy.get() + 1);
        }
        fn leave_busy(&self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn submit(outcome: UiResult<()>, busy: &Cell<u32>, released: &Cell<u32>) -> UiResult<()> {
        let _guard = BusyGuard::new(CountingButton { busy, released });
        assert_eq!(released.get(), 0);
        outcome?;
        Ok(())
    }

    #[test]
    fn test_busy_guard_releases_once_on_success() {
        let (busy, released) = (Cell::new(0), Cell::new(0));
        assert!(submit(Ok(()), &busy, &released).is_ok());
        assert_eq!((busy.get(), released.get()), (1, 1));
    }

    #[test]
    fn test_busy_guard_releases_once_on_error() {
        let (busy, released) = (Cell::new(0), Cell::new(0));
        let result = submit(Err(UiError::Rejected("invalid".into())), &busy, &released);
        assert!(result.is_err());
        assert_eq!((busy.get(), released.get()), (1, 1));
    }
}
