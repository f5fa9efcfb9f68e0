use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

/// Vertical scroll offset of the viewport, in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPosition {
    pub offset_y: u32,
}

impl ScrollPosition {
    /// Convert a host offset, clamping negative overscroll to zero.
    pub fn from_host(offset_y: f32) -> Self {
        ScrollPosition {
            offset_y: offset_y.max(0.0).round() as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

type Listener = Box<dyn FnMut(ScrollPosition)>;

#[derive(Default)]
struct SignalInner {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    // Listeners removed while a dispatch had them checked out
    removed: Vec<ListenerId>,
}

/// The host's scroll event source.
///
/// Single threaded: listeners run to completion on the UI thread, in
/// subscription order.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(ScrollPosition) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));

        debug!(listener = id.0, "Scroll listener added");

        Subscription {
            signal: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Call every listener with `position`.
    ///
    /// Listeners may subscribe or unsubscribe from inside the call. A listener
    /// added during dispatch first runs on the next dispatch, one removed
    /// during dispatch is not called again.
    pub fn dispatch(&self, position: ScrollPosition) {
        let mut running = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for (id, listener) in running.iter_mut() {
            if self.inner.borrow().removed.contains(id) {
                continue;
            }
            listener(position);
        }

        let mut inner = self.inner.borrow_mut();
        let mut removed = std::mem::take(&mut inner.removed);
        removed.retain(|id| match running.iter().position(|(other, _)| other == id) {
            Some(index) => {
                running.remove(index);
                false
            }
            // Checked out by an outer dispatch
            None => true,
        });
        inner.removed = removed;

        running.append(&mut inner.listeners);
        inner.listeners = running;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Registration of one scroll listener. Dropping it unsubscribes.
pub struct Subscription {
    signal: Weak<RefCell<SignalInner>>,
    id: Option<ListenerId>,
}

impl Subscription {
    /// Remove the listener. Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };

        // The signal may already be gone with the host
        if let Some(signal) = self.signal.upgrade() {
            let mut inner = signal.borrow_mut();
            let before = inner.listeners.len();
            inner.listeners.retain(|(other, _)| *other != id);
            if inner.listeners.len() == before {
                inner.removed.push(id);
            }
            debug!(listener = id.0, "Scroll listener removed");
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Mirrors the viewport's scroll offset for decorative effects.
#[derive(Default)]
pub struct ScrollTracker {
    position: Rc<Cell<ScrollPosition>>,
    subscription: Option<Subscription>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start following `signal`. Attaching an attached tracker is a no-op.
    pub fn attach(&mut self, signal: &ScrollSignal) {
        if self.is_attached() {
            debug!("Scroll tracker already attached");
            return;
        }

        let position = Rc::clone(&self.position);
        self.subscription = Some(signal.subscribe(move |p| position.set(p)));
    }

    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .map(Subscription::is_active)
            .unwrap_or(false)
    }

    pub fn offset_y(&self) -> u32 {
        self.position.get().offset_y
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::scroll::{self as sut, ScrollPosition};

    #[test]
    fn tracker_mirrors_dispatched_offset() {
        let signal = sut::ScrollSignal::new();
        let mut tracker = sut::ScrollTracker::new();
        tracker.attach(&signal);

        signal.dispatch(ScrollPosition { offset_y: 120 });
        assert_eq!(tracker.offset_y(), 120);

        signal.dispatch(ScrollPosition { offset_y: 0 });
        assert_eq!(tracker.offset_y(), 0);
    }

    #[test]
    fn no_update_after_detach() {
        let signal = sut::ScrollSignal::new();
        let mut tracker = sut::ScrollTracker::new();
        tracker.attach(&signal);
        signal.dispatch(ScrollPosition { offset_y: 40 });

        tracker.detach();
        signal.dispatch(ScrollPosition { offset_y: 900 });

        assert_eq!(tracker.offset_y(), 40);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn detach_twice_is_a_no_op() {
        let signal = sut::ScrollSignal::new();
        let mut tracker = sut::ScrollTracker::new();
        tracker.attach(&signal);

        tracker.detach();
        tracker.detach();

        assert!(!tracker.is_attached());
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn attach_twice_keeps_one_listener() {
        let signal = sut::ScrollSignal::new();
        let mut tracker = sut::ScrollTracker::new();

        tracker.attach(&signal);
        tracker.attach(&signal);

        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let signal = sut::ScrollSignal::new();
        {
            let _subscription = signal.subscribe(|_| {});
            assert_eq!(signal.listener_count(), 1);
        }
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_after_signal_dropped() {
        let signal = sut::ScrollSignal::new();
        let mut subscription = signal.subscribe(|_| {});
        drop(signal);

        subscription.unsubscribe();
        assert!(!subscription.is_active());
    }

    #[test]
    fn only_matching_listener_is_removed() {
        let signal = sut::ScrollSignal::new();
        let mut first = sut::ScrollTracker::new();
        let mut second = sut::ScrollTracker::new();
        first.attach(&signal);
        second.attach(&signal);

        first.detach();
        signal.dispatch(ScrollPosition { offset_y: 75 });

        assert_eq!(first.offset_y(), 0);
        assert_eq!(second.offset_y(), 75);
    }

    #[test]
    fn listener_can_unsubscribe_another_during_dispatch() {
        let signal = sut::ScrollSignal::new();
        let later: Rc<RefCell<Option<sut::Subscription>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(Cell::new(0));

        let to_drop = Rc::clone(&later);
        let _first = signal.subscribe(move |_| {
            to_drop.borrow_mut().take();
        });
        let counter = Rc::clone(&seen);
        *later.borrow_mut() = Some(signal.subscribe(move |_| counter.set(counter.get() + 1)));

        signal.dispatch(ScrollPosition { offset_y: 10 });
        signal.dispatch(ScrollPosition { offset_y: 20 });

        assert_eq!(seen.get(), 0);
        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn listener_added_during_dispatch_runs_next_time() {
        let signal = sut::ScrollSignal::new();
        let added: Rc<RefCell<Vec<sut::Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::new(Cell::new(0));

        let host = signal.clone();
        let subscriptions = Rc::clone(&added);
        let counter = Rc::clone(&seen);
        let _first = signal.subscribe(move |_| {
            if subscriptions.borrow().is_empty() {
                let counter = Rc::clone(&counter);
                let subscription = host.subscribe(move |_| counter.set(counter.get() + 1));
                subscriptions.borrow_mut().push(subscription);
            }
        });

        signal.dispatch(ScrollPosition { offset_y: 10 });
        assert_eq!(seen.get(), 0);
        assert_eq!(signal.listener_count(), 2);

        signal.dispatch(ScrollPosition { offset_y: 20 });
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn host_offset_is_clamped_and_rounded() {
        assert_eq!(ScrollPosition::from_host(-12.0).offset_y, 0);
        assert_eq!(ScrollPosition::from_host(99.6).offset_y, 100);
    }
}
