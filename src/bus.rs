//! Publish/subscribe channels for cross-tab coordination.
//!
//! A `Bus` delivers each published message synchronously to every current
//! subscriber, in subscription order, before `publish` returns. Messages are
//! not buffered: publishing with no subscribers drops the message.
//!
//! Buses are constructed at the application root and passed by reference to
//! the components that need them; they are not process-wide globals.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::error;

use crate::store::Tab;

/// Request to bring a location's row into view in the list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollToRow {
    pub location_id: String,
}

/// Notification that a tab became active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeTab {
    pub tab: Tab,
}

/// Handle returned by [`Bus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Single-threaded publish/subscribe channel.
pub struct Bus<T> {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Handler<T>)>>,
}

impl<T> Default for Bus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bus<T> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Registers a handler for every future published message.
    /// Multiple subscriptions are independent, even from the same caller.
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        Subscription(id)
    }

    /// Removes a previously registered handler.
    /// Unsubscribing a handler that is not registered is a no-op.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Number of currently registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Delivers `message` to every registered handler in subscription order.
    ///
    /// A handler unsubscribed during delivery is skipped if its turn has not
    /// come yet. A panicking handler does not stop delivery to the remaining
    /// handlers; the first panic is re-raised once delivery completes.
    pub fn publish(&self, message: &T) {
        let snapshot: Vec<(u64, Handler<T>)> = self.subscribers.borrow().clone();
        let mut first_panic = None;

        for (id, handler) in snapshot {
            let registered = self.subscribers.borrow().iter().any(|(sid, _)| *sid == id);
            if !registered {
                continue;
            }
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                (handler.borrow_mut())(message);
            }));
            if let Err(payload) = result {
                error!(subscriber = id, "bus handler panicked during publish");
                if first_panic.is_none() {
                    first_panic = Some(payload);
                }
            }
        }

        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_in_subscription_order() {
        let bus: Bus<u32> = Bus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let seen = seen.clone();
            bus.subscribe(move |msg: &u32| seen.borrow_mut().push((tag, *msg)));
        }

        bus.publish(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7), ("c", 7)]);
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus: Bus<u32> = Bus::new();
        bus.publish(&1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_removes_only_that_handler() {
        let bus: Bus<u32> = Bus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sub_a = {
            let seen = seen.clone();
            bus.subscribe(move |msg: &u32| seen.borrow_mut().push(("a", *msg)))
        };
        {
            let seen = seen.clone();
            bus.subscribe(move |msg: &u32| seen.borrow_mut().push(("b", *msg)));
        }

        bus.unsubscribe(sub_a);
        // Unsubscribing again is a no-op, not an error.
        bus.unsubscribe(sub_a);

        bus.publish(&3);
        assert_eq!(*seen.borrow(), vec![("b", 3)]);
    }

    #[test]
    fn handler_unsubscribed_mid_publish_is_skipped() {
        let bus: Rc<Bus<u32>> = Rc::new(Bus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        // First handler removes the second before its turn.
        let victim: Rc<Cell<Option<Subscription>>> = Rc::new(Cell::new(None));
        {
            let bus = bus.clone();
            let victim = victim.clone();
            let seen = seen.clone();
            bus.clone().subscribe(move |msg: &u32| {
                seen.borrow_mut().push(("first", *msg));
                if let Some(sub) = victim.get() {
                    bus.unsubscribe(sub);
                }
            });
        }
        let sub = {
            let seen = seen.clone();
            bus.subscribe(move |msg: &u32| seen.borrow_mut().push(("second", *msg)))
        };
        victim.set(Some(sub));

        bus.publish(&9);
        assert_eq!(*seen.borrow(), vec![("first", 9)]);
    }

    #[test]
    fn panicking_handler_does_not_block_siblings() {
        let bus: Bus<u32> = Bus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        bus.subscribe(|_: &u32| panic!("subscriber failure"));
        {
            let seen = seen.clone();
            bus.subscribe(move |msg: &u32| seen.borrow_mut().push(*msg));
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| bus.publish(&5)));
        // The panic is re-raised to the publisher...
        assert!(result.is_err());
        // ...but the later-registered handler still saw the message.
        assert_eq!(*seen.borrow(), vec![5]);
    }
}
