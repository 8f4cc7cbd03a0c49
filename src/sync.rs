//! Interior-mutability abstraction for the Shared State (§5).
//!
//! By default the crate is single-threaded: a Shared State is reference
//! counted with `Rc` and its interior mutated through a `RefCell`, matching
//! the cooperative, one-thread-at-a-time scheduling model the core requires.
//! Enabling the `threaded` feature swaps both for their `Arc`/`Mutex`
//! counterparts, realizing the multi-threaded collaborator variant described
//! in the design notes without forking the state-machine code that sits on
//! top of this module.

#[cfg(not(feature = "threaded"))]
use std::cell::RefCell;
#[cfg(feature = "threaded")]
use std::sync::Mutex;

#[cfg(not(feature = "threaded"))]
pub(crate) use std::rc::Rc as Handle;
#[cfg(feature = "threaded")]
pub(crate) use std::sync::Arc as Handle;

/// A single logical owner of the mutable state behind a `Handle`.
///
/// `with` is the only way in; the lock (or borrow) is released as soon as
/// the callback returns, which is what lets continuation dispatch hand the
/// guard back before running arbitrary user code (see `state::SharedState`).
pub(crate) struct Guarded<T> {
    #[cfg(not(feature = "threaded"))]
    cell: RefCell<T>,
    #[cfg(feature = "threaded")]
    cell: Mutex<T>,
}

impl<T> Guarded<T> {
    pub(crate) fn new(value: T) -> Self {
        #[cfg(not(feature = "threaded"))]
        {
            Guarded { cell: RefCell::new(value) }
        }
        #[cfg(feature = "threaded")]
        {
            Guarded { cell: Mutex::new(value) }
        }
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(not(feature = "threaded"))]
        {
            f(&mut self.cell.borrow_mut())
        }
        #[cfg(feature = "threaded")]
        {
            f(&mut self.cell.lock().expect("shared state mutex poisoned"))
        }
    }
}
