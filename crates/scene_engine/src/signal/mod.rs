//! Signal system for synchronous change notifications
//! Key principles:
//! - Typed arguments (one argument type per channel)
//! - Multiple independent subscribers, called in subscription order
//! - Immediate delivery (no queuing, no cross-thread dispatch)
//! - Connection handles that disconnect when dropped

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::foundation::collections::{HandleMap, SlotKey};

type Callback<A> = Rc<RefCell<dyn FnMut(&A)>>;

struct SignalInner<A> {
    callbacks: HandleMap<SlotKey, Callback<A>>,
    order: Vec<SlotKey>,
}

/// Type-erased view of a signal used by [`SignalSlot`] to disconnect itself
trait SlotOwner {
    fn disconnect(&self, key: SlotKey) -> bool;
    fn is_connected(&self, key: SlotKey) -> bool;
}

impl<A> SlotOwner for RefCell<SignalInner<A>> {
    fn disconnect(&self, key: SlotKey) -> bool {
        // The callback may own slots of this signal, drop it unborrowed.
        let removed = {
            let mut inner = self.borrow_mut();
            let removed = inner.callbacks.remove(key);
            if removed.is_some() {
                inner.order.retain(|k| *k != key);
            }
            removed
        };
        removed.is_some()
    }

    fn is_connected(&self, key: SlotKey) -> bool {
        self.borrow().callbacks.contains_key(key)
    }
}

/// In-process broadcast channel carrying values of type `A`
///
/// Cloning a `Signal` produces another handle to the same channel, so a
/// component can hand out its signals while still emitting through them.
pub struct Signal<A> {
    inner: Rc<RefCell<SignalInner<A>>>,
}

impl<A: 'static> Signal<A> {
    /// Create a new signal with no subscribers
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                callbacks: HandleMap::with_key(),
                order: Vec::new(),
            })),
        }
    }

    /// Subscribe a callback
    ///
    /// The callback stays connected for as long as the returned slot is alive.
    pub fn connect<F>(&self, callback: F) -> SignalSlot
    where
        F: FnMut(&A) + 'static,
    {
        let callback: Callback<A> = Rc::new(RefCell::new(callback));
        let key = {
            let mut inner = self.inner.borrow_mut();
            let key = inner.callbacks.insert(callback);
            inner.order.push(key);
            key
        };

        let weak = Rc::downgrade(&self.inner);
        let owner: Weak<dyn SlotOwner> = weak;
        SignalSlot { key, owner: Some(owner) }
    }

    /// Invoke every subscriber with `args`
    ///
    /// Callbacks connected while dispatching are not invoked until the next
    /// call. Callbacks disconnected while dispatching are skipped.
    pub fn execute(&self, args: &A) {
        let pending: Vec<(SlotKey, Callback<A>)> = {
            let inner = self.inner.borrow();
            inner
                .order
                .iter()
                .filter_map(|key| inner.callbacks.get(*key).map(|cb| (*key, Rc::clone(cb))))
                .collect()
        };

        for (key, callback) in pending {
            if !self.inner.is_connected(key) {
                continue;
            }
            match callback.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(args),
                Err(_) => log::warn!("Skipping re-entrant signal callback {:?}", key),
            }
        }
    }

    /// Number of connected subscribers
    pub fn num_callbacks(&self) -> usize {
        self.inner.borrow().order.len()
    }

    /// Disconnect every subscriber
    pub fn clear(&self) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            inner.order.clear();
            std::mem::take(&mut inner.callbacks)
        };
        drop(callbacks);
    }
}

impl<A: 'static> Default for Signal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Signal<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Signal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("callbacks", &self.inner.borrow().order.len())
            .finish()
    }
}

/// Connection handle returned by [`Signal::connect`]
///
/// Dropping the slot disconnects the callback. Use [`SignalSlot::forget`] to
/// keep the callback connected for the lifetime of the signal.
#[must_use = "dropping a SignalSlot disconnects its callback"]
pub struct SignalSlot {
    key: SlotKey,
    owner: Option<Weak<dyn SlotOwner>>,
}

impl SignalSlot {
    /// Disconnect the callback; returns `false` if it was already gone
    pub fn disconnect(&mut self) -> bool {
        self.owner
            .take()
            .and_then(|owner| owner.upgrade())
            .is_some_and(|owner| owner.disconnect(self.key))
    }

    /// Whether the callback is still attached to a live signal
    pub fn is_connected(&self) -> bool {
        self.owner
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|owner| owner.is_connected(self.key))
    }

    /// Keep the callback connected without holding on to the slot
    pub fn forget(mut self) {
        self.owner = None;
    }
}

impl Drop for SignalSlot {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl fmt::Debug for SignalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalSlot")
            .field("key", &self.key)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnMut(&u32)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let shared = Rc::clone(&log);
        let make = move |name: &'static str| -> Box<dyn FnMut(&u32)> {
            let log = Rc::clone(&shared);
            Box::new(move |_: &u32| log.borrow_mut().push(name))
        };
        (log, make)
    }

    #[test]
    fn test_callbacks_run_in_subscription_order() {
        let signal = Signal::<u32>::new();
        let (log, make) = recorder();

        let _a = signal.connect(make("a"));
        let _b = signal.connect(make("b"));
        let _c = signal.connect(make("c"));
        signal.execute(&1);

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dropping_slot_disconnects() {
        let signal = Signal::<u32>::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let slot = signal.connect(move |value| counter.set(counter.get() + *value));
        signal.execute(&2);
        drop(slot);
        signal.execute(&2);

        assert_eq!(hits.get(), 2);
        assert_eq!(signal.num_callbacks(), 0);
    }

    #[test]
    fn test_forgotten_slot_stays_connected() {
        let signal = Signal::<u32>::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        signal.connect(move |_| counter.set(counter.get() + 1)).forget();
        signal.execute(&0);
        signal.execute(&0);

        assert_eq!(hits.get(), 2);
        assert_eq!(signal.num_callbacks(), 1);
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let signal = Signal::<u32>::new();
        let mut slot = signal.connect(|_| {});

        assert!(slot.is_connected());
        assert!(slot.disconnect());
        assert!(!slot.disconnect());
        assert!(!slot.is_connected());
    }

    #[test]
    fn test_slot_outliving_signal() {
        let signal = Signal::<u32>::new();
        let mut slot = signal.connect(|_| {});
        drop(signal);

        assert!(!slot.is_connected());
        assert!(!slot.disconnect());
    }

    #[test]
    fn test_cloned_signal_shares_subscribers() {
        let signal = Signal::<u32>::new();
        let handle = signal.clone();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let _slot = handle.connect(move |_| counter.set(counter.get() + 1));
        signal.execute(&0);

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_connect_during_execute_waits_for_next_dispatch() {
        let signal = Signal::<u32>::new();
        let late_hits = Rc::new(Cell::new(0));
        let late_slots = Rc::new(RefCell::new(Vec::new()));

        let handle = signal.clone();
        let hits = Rc::clone(&late_hits);
        let slots = Rc::clone(&late_slots);
        let _outer = signal.connect(move |_| {
            let hits = Rc::clone(&hits);
            let slot = handle.connect(move |_| hits.set(hits.get() + 1));
            slots.borrow_mut().push(slot);
        });

        signal.execute(&0);
        assert_eq!(late_hits.get(), 0);

        signal.execute(&0);
        assert_eq!(late_hits.get(), 1);
        late_slots.borrow_mut().clear();
    }

    #[test]
    fn test_disconnect_during_execute_skips_callback() {
        let signal = Signal::<u32>::new();
        let (log, make) = recorder();
        let victim: Rc<RefCell<Option<SignalSlot>>> = Rc::new(RefCell::new(None));

        let target = Rc::clone(&victim);
        let _first = signal.connect(move |_| {
            if let Some(mut slot) = target.borrow_mut().take() {
                slot.disconnect();
            }
        });
        *victim.borrow_mut() = Some(signal.connect(make("second")));
        let _third = signal.connect(make("third"));

        signal.execute(&0);

        assert_eq!(*log.borrow(), vec!["third"]);
    }

    #[test]
    fn test_reentrant_execute_skips_running_callback() {
        let signal = Signal::<u32>::new();
        let depth = Rc::new(Cell::new(0));

        let handle = signal.clone();
        let calls = Rc::clone(&depth);
        let _slot = signal.connect(move |value| {
            calls.set(calls.get() + 1);
            if *value == 0 {
                handle.execute(&1);
            }
        });
        signal.execute(&0);

        assert_eq!(depth.get(), 1);
        signal.clear();
    }

    #[test]
    fn test_clear_removes_all_callbacks() {
        let signal = Signal::<u32>::new();
        let slot = signal.connect(|_| {});
        signal.clear();

        assert_eq!(signal.num_callbacks(), 0);
        assert!(!slot.is_connected());
    }
}
