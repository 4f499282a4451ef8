//! Cancellation Primitives
//!
//! Stale async results are rejected by ticket, in-flight requests are
//! aborted, and pending timers are cancelled by dropping them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies one issued piece of async work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Generation counter: issuing a ticket invalidates all earlier ones.
///
/// Cloning shares the counter, so a clone can be moved into a future and
/// checked when it completes.
#[derive(Debug, Clone, Default)]
pub struct Supersede {
    generation: Arc<AtomicU64>,
}

impl Supersede {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

/// Owns an `AbortController`; dropping the handle aborts the request
pub struct AbortHandle {
    controller: web_sys::AbortController,
}

impl AbortHandle {
    pub fn new() -> Option<Self> {
        web_sys::AbortController::new()
            .ok()
            .map(|controller| Self { controller })
    }

    pub fn signal(&self) -> web_sys::AbortSignal {
        self.controller.signal()
    }
}

impl Drop for AbortHandle {
    fn drop(&mut self) {
        self.controller.abort();
    }
}

/// Holds at most one cancellable value (a `Timeout`, an `AbortHandle`).
///
/// Values cancel themselves on drop, so replacing or clearing the slot
/// cancels whatever was pending.
pub struct Slot<T>(Option<T>);

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Slot<T> {
    pub fn replace(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let gen = Supersede::new();
        let a = gen.issue();
        assert!(gen.is_current(a));
        let b = gen.issue();
        assert!(!gen.is_current(a));
        assert!(gen.is_current(b));
    }

    #[test]
    fn test_clones_share_generation() {
        let gen = Supersede::new();
        let in_flight = gen.clone();
        let ticket = in_flight.issue();
        gen.issue();
        assert!(!in_flight.is_current(ticket));
    }

    struct DropLog(Rc<RefCell<Vec<&'static str>>>, &'static str);

    impl Drop for DropLog {
        fn drop(&mut self) {
            self.0.borrow_mut().push(self.1);
        }
    }

    #[test]
    fn test_slot_replace_and_clear_cancel_previous() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Slot::default();
        slot.replace(DropLog(cancelled.clone(), "first"));
        assert!(slot.is_pending());
        slot.replace(DropLog(cancelled.clone(), "second"));
        assert_eq!(*cancelled.borrow(), vec!["first"]);
        slot.clear();
        assert_eq!(*cancelled.borrow(), vec!["first", "second"]);
        assert!(!slot.is_pending());
    }
}
