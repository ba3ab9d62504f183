//! Deferred actions: closures that run on the next turn of the event loop.
//!
//! Fire-and-forget and non-cancelable. Actions must re-validate whatever
//! state they depend on when they run, since the world may have moved on
//! between scheduling and execution.

use std::cell::RefCell;
use std::collections::VecDeque;

type Action = Box<dyn FnOnce()>;

/// Queue of actions drained once per event-loop turn.
#[derive(Default)]
pub struct DeferQueue {
    pending: RefCell<VecDeque<Action>>,
}

impl DeferQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an action for the next turn.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        self.pending.borrow_mut().push_back(Box::new(action));
    }

    /// Runs every action scheduled so far, in order. Actions scheduled while
    /// draining wait for the next turn.
    pub fn run_pending(&self) {
        let batch: Vec<Action> = self.pending.borrow_mut().drain(..).collect();
        for action in batch {
            action();
        }
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn runs_in_schedule_order() {
        let queue = DeferQueue::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let seen = seen.clone();
            queue.schedule(move || seen.borrow_mut().push(i));
        }

        queue.run_pending();
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn actions_scheduled_while_draining_wait_for_next_turn() {
        let queue = Rc::new(DeferQueue::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        {
            let queue = queue.clone();
            let seen = seen.clone();
            queue.clone().schedule(move || {
                seen.borrow_mut().push("first");
                let seen = seen.clone();
                queue.schedule(move || seen.borrow_mut().push("second"));
            });
        }

        queue.run_pending();
        assert_eq!(*seen.borrow(), vec!["first"]);
        assert_eq!(queue.len(), 1);

        queue.run_pending();
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }
}
