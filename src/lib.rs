//! Observable List - a list that tells its listeners whenever it changes.
//!
//! # Quick Start
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use observable_list::ObservableList;
//!
//! let list: ObservableList<i32> = ObservableList::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let log = Rc::clone(&seen);
//! list.item_added().subscribe(move |e| log.borrow_mut().push(("added", e.item, e.index)));
//! let log = Rc::clone(&seen);
//! list.item_removed().subscribe(move |e| log.borrow_mut().push(("removed", e.item, e.index)));
//!
//! list.add(1);
//! list.add(2);
//! list.set(1, 4).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![1, 4]);
//! assert_eq!(*seen.borrow(), vec![
//!     ("added", 1, 0),
//!     ("added", 2, 1),
//!     ("removed", 2, 1),
//!     ("added", 4, 1),
//! ]);
//! ```
//!
//! The list is single-threaded (`!Send`, `!Sync`). Listeners run
//! synchronously on the mutating call's stack.

pub mod error;
pub mod event;
pub mod list;

pub use error::ListError;
pub use event::{Event, ListenerId};
pub use list::{ItemEvent, ObservableList};
