//! Multicast notification channels.
//!
//! An [`Event`] holds an ordered table of listeners. Emitting an event calls
//! every listener that was registered when the emission started, in
//! registration order, on the caller's thread.
//!
//! The table is copied out before dispatch, so a listener is free to
//! subscribe, unsubscribe, or emit again while it runs:
//!
//! - A listener added during an emission first runs on the next emission.
//! - A listener removed during an emission still receives the current one.
//!
//! A panicking listener unwinds straight through [`Event::emit`]. Listeners
//! after it are not called for that emission.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

/// Most channels carry zero to two listeners.
const INLINE_LISTENERS: usize = 2;

type Listener<A> = Rc<dyn Fn(&A)>;

/// Handle returned by [`Event::subscribe`], used to unsubscribe later.
///
/// Handles are unique across every channel in the process, so a handle
/// never matches a registration on a channel that did not issue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

impl ListenerId {
    fn next() -> ListenerId {
        return ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
    }
}

/// A channel of listeners that all receive `&A` when the event fires.
pub struct Event<A> {
    listeners: RefCell<SmallVec<[(ListenerId, Listener<A>); INLINE_LISTENERS]>>,
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<A> Event<A> {
    /// Create a channel with no listeners.
    pub fn new() -> Event<A> {
        return Event {
            listeners: RefCell::new(SmallVec::new()),
        };
    }

    /// Register `listener` and return its handle.
    ///
    /// Registering the same closure twice yields two independent
    /// registrations, each invoked once per emission.
    pub fn subscribe(&self, listener: impl Fn(&A) + 'static) -> ListenerId {
        let id = ListenerId::next();
        let listener: Listener<A> = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener));
        return id;
    }

    /// Remove the registration behind `id`.
    ///
    /// Returns `false` if `id` is not currently registered on this channel.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(slot) = listeners.iter().position(|(other, _)| *other == id) else {
            return false;
        };
        listeners.remove(slot);
        return true;
    }

    /// Number of registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize {
        return self.listeners.borrow().len();
    }

    /// Whether no listener is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.listeners.borrow().is_empty();
    }

    /// Call every registered listener with `args`.
    pub fn emit(&self, args: &A) {
        // Snapshot so no borrow is held while listeners run.
        let snapshot: SmallVec<[Listener<A>; INLINE_LISTENERS]> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(args);
        }
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Event")
            .field("listeners", &self.listener_count())
            .finish();
    }
}
