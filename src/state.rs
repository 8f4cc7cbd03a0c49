//! The Shared State (§3, §4.2): the rendezvous between a `Promise` and its
//! paired `Future`, reference counted and shared between exactly those two
//! handles (or, transiently, between itself and an outstanding
//! continuation).

use crate::cell::ResultCell;
use crate::continuation::Continuation;
use crate::error::FutureError;
use crate::sync::{Guarded, Handle};

struct Inner<T> {
    cell: ResultCell<T>,
    continuation: Option<Box<dyn Continuation>>,
}

pub(crate) struct SharedState<T> {
    inner: Handle<Guarded<Inner<T>>>,
}

impl<T> SharedState<T> {
    pub(crate) fn new() -> Self {
        SharedState {
            inner: Handle::new(Guarded::new(Inner {
                cell: ResultCell::Empty,
                continuation: None,
            })),
        }
    }

    /// §4.2 `ready()`.
    pub(crate) fn ready(&self) -> bool {
        self.inner.with(|inner| inner.cell.is_set())
    }

    /// §4.2 `chain(c)`: installs `c` if the cell is still `Empty` and
    /// returns `None` (it will fire later, when the cell is settled);
    /// returns `Some(c)` unchanged if the cell is already set, so the
    /// caller can feed it straight into the Trampoline instead.
    ///
    /// Panics if a continuation is already installed (Invariant S1).
    pub(crate) fn chain(&self, continuation: Box<dyn Continuation>) -> Option<Box<dyn Continuation>> {
        self.inner.with(|inner| {
            assert!(
                inner.continuation.is_none(),
                "a continuation is already attached to this shared state"
            );
            if inner.cell.is_set() {
                log::trace!("chain: cell already set, handing continuation back for immediate dispatch");
                Some(continuation)
            } else {
                log::trace!("chain: cell still empty, installing continuation");
                inner.continuation = Some(continuation);
                None
            }
        })
    }

    /// Moves the cell's contents out, leaving `Empty` behind.
    ///
    /// Callers (continuation dispatch) must only call this once the cell is
    /// known to be set; that invariant is upheld by the Trampoline only
    /// ever running a continuation after its source settled.
    pub(crate) fn take_cell(&self) -> ResultCell<T> {
        self.inner.with(|inner| {
            debug_assert!(inner.cell.is_set(), "take_cell called before the source was set");
            inner.cell.take()
        })
    }

    /// Writes `result` into the cell (requires `Empty`, Invariant R2) and
    /// returns any waiting continuation for the caller to dispatch.
    ///
    /// This is the single path that transitions a cell out of `Empty`; both
    /// `Promise::set_value`/`set_exception` and a continuation forwarding a
    /// value or error into its destination route through it.
    pub(crate) fn settle(&self, result: ResultCell<T>) -> Option<Box<dyn Continuation>> {
        self.inner.with(|inner| {
            assert!(!inner.cell.is_set(), "shared state was settled twice");
            inner.cell = result;
            inner.continuation.take()
        })
    }

    pub(crate) fn settle_error(&self, err: FutureError) -> Option<Box<dyn Continuation>> {
        self.settle(ResultCell::Error(err))
    }
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        SharedState { inner: self.inner.clone() }
    }
}
