//! Shared test helpers, in the spirit of the teacher's own `tests/channel.rs`
//! `mod support;` convention.

use std::cell::RefCell;
use std::rc::Rc;

/// Turns on `log` output for the current test binary, so `cargo test --
/// --nocapture` with `RUST_LOG=trace` shows the trampoline's per-hop
/// tracing and the promise/chain debug lines. Safe to call from more than
/// one test in the same binary; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Captures at most one delivered value for later assertion.
///
/// Futures settle synchronously from the caller's point of view (§5:
/// "a satisfaction call drains the entire already-known chain of ready
/// continuations before returning"), so a plain `Rc<RefCell<Option<T>>>` is
/// enough to observe what a `then`/`catch` closure received — no channel or
/// condvar needed.
#[derive(Clone)]
pub struct Recorder<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Recorder { slot: Rc::new(RefCell::new(None)) }
    }

    pub fn record(&self, value: T) {
        let mut slot = self.slot.borrow_mut();
        assert!(slot.is_none(), "recorder received a value twice");
        *slot = Some(value);
    }

    pub fn taken(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot.borrow().clone()
    }
}

/// Counts invocations, for asserting a closure ran "at most once" (§8, P3)
/// or "never" (§8, P4's `skipped`).
#[derive(Clone)]
pub struct CallCounter {
    count: Rc<RefCell<u32>>,
}

impl CallCounter {
    pub fn new() -> Self {
        CallCounter { count: Rc::new(RefCell::new(0)) }
    }

    pub fn bump(&self) {
        *self.count.borrow_mut() += 1;
    }

    pub fn count(&self) -> u32 {
        *self.count.borrow()
    }
}
