//! The Promise Handle (§3, §4.6, C5) and the public factory operations
//! (§6).

use crate::cell::ResultCell;
use crate::error::FutureError;
use crate::future::Future;
use crate::reserved::assert_not_reserved;
use crate::state::SharedState;
use crate::trampoline;

/// A move-only, single-shot handle to the producer side of a Shared State.
///
/// Dropping a `Promise` that was never satisfied injects a
/// [`FutureError::Canceled`] into its Shared State (§3, §7: "broken
/// promise"), which is the only cancellation-like signal the core provides.
pub struct Promise<T> {
    state: Option<SharedState<T>>,
}

impl<T> Promise<T> {
    /// §4.6 `Promise<T>::set_value(v)`.
    ///
    /// Panics if this promise was already satisfied (core misuse, §7).
    pub fn set_value(mut self, value: T) {
        let state = self.state.take().expect("set_value called on an already-satisfied promise");
        let continuation = state.settle(ResultCell::Value(value));
        log::debug!("promise satisfied with a value, continuation present: {}", continuation.is_some());
        trampoline::run(continuation);
    }

    /// §4.6 `Promise<T>::set_exception(e)`.
    ///
    /// Panics if this promise was already satisfied (core misuse, §7).
    pub fn set_exception(mut self, err: FutureError) {
        let state = self.state.take().expect("set_exception called on an already-satisfied promise");
        let continuation = state.settle_error(err);
        log::debug!("promise satisfied with an error, continuation present: {}", continuation.is_some());
        trampoline::run(continuation);
    }
}

impl<T> Drop for Promise<T> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            log::warn!("promise dropped without being satisfied; injecting a broken-promise error");
            trampoline::run(state.settle_error(FutureError::Canceled));
        }
    }
}

/// §6 `make_promise<T>()`: allocates one Shared State owned by both the
/// returned `Promise` and its paired `Future`.
pub fn make_promise<T: 'static>() -> (Promise<T>, Future<T>) {
    assert_not_reserved::<T>();
    let state = SharedState::new();
    (Promise { state: Some(state.clone()) }, Future::new(state))
}

/// §6 `make_ready_value<T>(v)`: a future pre-fulfilled with `v`.
pub fn make_ready_value<T: 'static>(value: T) -> Future<T> {
    assert_not_reserved::<T>();
    let state = SharedState::new();
    let leftover = state.settle(ResultCell::Value(value));
    debug_assert!(leftover.is_none(), "a freshly allocated state cannot already have a continuation");
    Future::new(state)
}

/// §6 `make_ready_error<T>(e)`: a future pre-fulfilled with `e`.
pub fn make_ready_error<T: 'static>(err: FutureError) -> Future<T> {
    assert_not_reserved::<T>();
    let state = SharedState::new();
    let leftover = state.settle_error(err);
    debug_assert!(leftover.is_none(), "a freshly allocated state cannot already have a continuation");
    Future::new(state)
}
