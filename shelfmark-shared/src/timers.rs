//! Bookkeeping for the recurring timers of rendered borrow records
//!
//! Every active record runs up to one timer per [`TimerKind`]. The handles are kept here, keyed
//! by record id, so that a row can cancel all its timers before it is removed or rendered
//! again, and the whole list can cancel everything when it goes away.

use std::collections::BTreeMap;

/// Something that stops a running timer
pub trait CancelTimer {
    fn cancel(self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    ReturnCooldown,
    DueStatus,
}

#[derive(Debug)]
pub struct TimerRegistry<H: CancelTimer> {
    handles: BTreeMap<(i64, TimerKind), H>,
}
impl<H: CancelTimer> Default for TimerRegistry<H> {
    fn default() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }
}
impl<H: CancelTimer> TimerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` for `record_id`
    ///
    /// A timer of the same kind already running for this record is cancelled first, so
    /// re-rendering a row never leaves the old timer behind.
    pub fn register(&mut self, record_id: i64, kind: TimerKind, handle: H) {
        if let Some(old) = self.handles.insert((record_id, kind), handle) {
            old.cancel();
        }
    }

    /// Cancel one timer, e.g. when it reached its final state
    pub fn cancel(&mut self, record_id: i64, kind: TimerKind) -> bool {
        match self.handles.remove(&(record_id, kind)) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel all timers of a record; returns how many were running
    pub fn cancel_record(&mut self, record_id: i64) -> usize {
        let keys = self
            .handles
            .range((record_id, TimerKind::ReturnCooldown)..=(record_id, TimerKind::DueStatus))
            .map(|(k, _)| *k)
            .collect::<Vec<_>>();
        for key in keys.iter() {
            if let Some(handle) = self.handles.remove(key) {
                handle.cancel();
            }
        }
        keys.len()
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in std::mem::take(&mut self.handles) {
            handle.cancel();
        }
    }

    pub fn is_running(&self, record_id: i64, kind: TimerKind) -> bool {
        self.handles.contains_key(&(record_id, kind))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Records which timers were cancelled
    #[derive(Debug)]
    struct FakeHandle {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }
    impl CancelTimer for FakeHandle {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn handle(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> FakeHandle {
        FakeHandle {
            id,
            cancelled: log.clone(),
        }
    }

    #[test]
    fn rerender_replaces_the_old_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = TimerRegistry::new();
        registry.register(7, TimerKind::DueStatus, handle(1, &log));
        registry.register(7, TimerKind::DueStatus, handle(2, &log));
        assert_eq!(*log.borrow(), vec![1]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removing_a_record_cancels_only_its_timers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = TimerRegistry::new();
        registry.register(1, TimerKind::ReturnCooldown, handle(10, &log));
        registry.register(1, TimerKind::DueStatus, handle(11, &log));
        registry.register(2, TimerKind::DueStatus, handle(20, &log));

        assert_eq!(registry.cancel_record(1), 2);
        assert_eq!(*log.borrow(), vec![10, 11]);
        assert!(registry.is_running(2, TimerKind::DueStatus));
        assert_eq!(registry.cancel_record(1), 0);
    }

    #[test]
    fn terminal_state_cancels_one_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = TimerRegistry::new();
        registry.register(3, TimerKind::ReturnCooldown, handle(30, &log));
        registry.register(3, TimerKind::DueStatus, handle(31, &log));
        assert!(registry.cancel(3, TimerKind::ReturnCooldown));
        assert!(!registry.cancel(3, TimerKind::ReturnCooldown));
        assert!(registry.is_running(3, TimerKind::DueStatus));
    }

    #[test]
    fn teardown_cancels_everything() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = TimerRegistry::new();
        registry.register(1, TimerKind::DueStatus, handle(1, &log));
        registry.register(2, TimerKind::DueStatus, handle(2, &log));
        registry.cancel_all();
        assert!(registry.is_empty());
        assert_eq!(log.borrow().len(), 2);
    }
}
