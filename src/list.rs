//! A list that reports every structural change to its listeners.
//!
//! # Notifications
//!
//! | Operation | Fired, in order |
//! |-----------|-----------------|
//! | `add`, `insert`, `extend` | `item_added` per item, after it is stored |
//! | `remove`, `remove_at` | `item_removed`, after the item is gone |
//! | `set` | `item_removed(old)` then `item_added(new)`, same index |
//! | `clear` | `clearing`, silent drain, `cleared` |
//!
//! Replacement is reported as a removal followed by an addition so that
//! listeners which only track additions and removals stay correct. There is
//! no separate "changed" notification.
//!
//! `clear` does not report individual items. Listeners that need them must
//! read the list from their `clearing` handler.
//!
//! # Re-entrancy
//!
//! All methods take `&self`. Storage is never borrowed while a listener runs,
//! so a listener holding an `Rc<ObservableList<T>>` may read or mutate the
//! list. The nested operation completes, with its own notifications, before
//! control returns to the outer one.
//!
//! # Listener panics
//!
//! A panic in a listener propagates to the caller of the mutating method.
//! The storage change has already happened and is not undone; notifications
//! not yet dispatched for that call are dropped.

use std::cell::{Ref, RefCell};
use std::fmt;

use crate::error::ListError;
use crate::event::Event;

/// Payload of the `item_added` and `item_removed` channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEvent<T> {
    /// The item that was added or removed.
    pub item: T,
    /// Its position in the list: where it now is (added) or where it
    /// was (removed).
    pub index: usize,
}

/// An ordered list of `T` with four notification channels.
///
/// Adding items (`add`, `insert`, `extend`, `set`) requires `T: Clone`,
/// because each `item_added` payload carries its own copy of the stored
/// item. A list of non-`Clone` items can still be built with
/// [`from_vec`](Self::from_vec) or `collect`, read, removed from and
/// cleared. Wrap such items in `Rc<T>` to get the full API cheaply.
pub struct ObservableList<T> {
    items: RefCell<Vec<T>>,
    clearing: Event<()>,
    cleared: Event<()>,
    item_added: Event<ItemEvent<T>>,
    item_removed: Event<ItemEvent<T>>,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> ObservableList<T> {
    /// Create an empty list.
    pub fn new() -> ObservableList<T> {
        return Self::from_vec(Vec::new());
    }

    /// Create an empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> ObservableList<T> {
        return Self::from_vec(Vec::with_capacity(capacity));
    }

    /// Take ownership of `items` as the initial contents.
    ///
    /// No listener can exist yet, so nothing is fired.
    pub fn from_vec(items: Vec<T>) -> ObservableList<T> {
        return ObservableList {
            items: RefCell::new(items),
            clearing: Event::new(),
            cleared: Event::new(),
            item_added: Event::new(),
            item_removed: Event::new(),
        };
    }

    // =========================================================================
    // Channels
    // =========================================================================

    /// Fired once before [`clear`](Self::clear) removes anything.
    #[inline]
    pub fn clearing(&self) -> &Event<()> {
        return &self.clearing;
    }

    /// Fired once after [`clear`](Self::clear) has removed everything.
    #[inline]
    pub fn cleared(&self) -> &Event<()> {
        return &self.cleared;
    }

    /// Fired after an item is stored, including the second half of `set`.
    #[inline]
    pub fn item_added(&self) -> &Event<ItemEvent<T>> {
        return &self.item_added;
    }

    /// Fired after an item is gone, including the first half of `set`.
    #[inline]
    pub fn item_removed(&self) -> &Event<ItemEvent<T>> {
        return &self.item_removed;
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        return self.items.borrow().len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.items.borrow().is_empty();
    }

    /// Borrow the current contents.
    ///
    /// The guard must be dropped before the list is mutated; mutating while
    /// it is alive panics.
    pub fn items(&self) -> Ref<'_, [T]> {
        return Ref::map(self.items.borrow(), |items| items.as_slice());
    }

    /// Run `f` against the current contents.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        return f(&self.items.borrow());
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Remove and return the item at `index`.
    pub fn remove_at(&self, index: usize) -> Result<T, ListError> {
        let item = {
            let mut items = self.items.borrow_mut();
            ListError::check(index, items.len())?;
            items.remove(index)
        };
        tracing::trace!(index, len = self.len(), "item removed");

        let event = ItemEvent { item, index };
        self.item_removed.emit(&event);
        return Ok(event.item);
    }

    /// Remove every item.
    ///
    /// Fires `clearing`, drops the contents without per-item notifications,
    /// then fires `cleared`. Both fire even if the list is already empty.
    pub fn clear(&self) {
        tracing::trace!(len = self.len(), listeners = self.clearing.listener_count(), "clearing");
        self.clearing.emit(&());

        // Dropping items may run arbitrary code, so keep it outside the borrow.
        let drained = std::mem::take(&mut *self.items.borrow_mut());
        drop(drained);

        tracing::trace!(listeners = self.cleared.listener_count(), "cleared");
        self.cleared.emit(&());
    }
}

impl<T: Clone> ObservableList<T> {
    /// Copy of the item at `index`.
    pub fn get(&self, index: usize) -> Result<T, ListError> {
        let items = self.items.borrow();
        ListError::check(index, items.len())?;
        return Ok(items[index].clone());
    }

    /// Copy of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        return self.items.borrow().to_vec();
    }

    /// Append `item` and fire `item_added` with its new index.
    pub fn add(&self, item: T) {
        let index = {
            let mut items = self.items.borrow_mut();
            items.push(item.clone());
            items.len() - 1
        };
        tracing::trace!(index, listeners = self.item_added.listener_count(), "item added");

        self.item_added.emit(&ItemEvent { item, index });
    }

    /// Insert `item` before position `index`, which may equal `len()`.
    pub fn insert(&self, index: usize, item: T) -> Result<(), ListError> {
        {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            if index > len {
                tracing::debug!(index, len, "insert position out of range");
                return Err(ListError::IndexOutOfRange { index, len });
            }
            items.insert(index, item.clone());
        }
        tracing::trace!(index, listeners = self.item_added.listener_count(), "item inserted");

        self.item_added.emit(&ItemEvent { item, index });
        return Ok(());
    }

    /// Append every item in turn, exactly as repeated [`add`](Self::add).
    pub fn extend(&self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.add(item);
        }
    }

    /// Replace the item at `index` and return the old one.
    ///
    /// Reported as `item_removed(old, index)` followed by
    /// `item_added(new, index)`; both fire after the slot holds the new item.
    pub fn set(&self, index: usize, item: T) -> Result<T, ListError> {
        let old = {
            let mut items = self.items.borrow_mut();
            ListError::check(index, items.len())?;
            std::mem::replace(&mut items[index], item.clone())
        };
        tracing::trace!(index, "item replaced");

        let removed = ItemEvent { item: old, index };
        self.item_removed.emit(&removed);
        self.item_added.emit(&ItemEvent { item, index });
        return Ok(removed.item);
    }
}

impl<T: PartialEq> ObservableList<T> {
    /// Position of the first item equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        return self.items.borrow().iter().position(|other| other == item);
    }

    pub fn contains(&self, item: &T) -> bool {
        return self.index_of(item).is_some();
    }

    /// Remove the first item equal to `item`.
    ///
    /// Returns `false`, firing nothing, if there is no such item.
    pub fn remove(&self, item: &T) -> bool {
        let Some(index) = self.index_of(item) else {
            return false;
        };
        return self.remove_at(index).is_ok();
    }
}

impl<T> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        return Self::from_vec(items);
    }
}

impl<T> FromIterator<T> for ObservableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Self::from_vec(iter.into_iter().collect());
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.items.borrow().iter()).finish();
    }
}
