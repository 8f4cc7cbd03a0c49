//! The Future Handle (§3, §4.6, C5).

use crate::continuation::{CatchContinuation, ThenContinuation};
use crate::error::FutureError;
use crate::outcome::IntoOutcome;
use crate::reserved::assert_not_reserved;
use crate::state::SharedState;
use crate::trampoline;

/// A move-only, single-shot handle to the consumer side of a Shared State.
///
/// There is no blocking read: the only way to observe a `Future`'s eventual
/// value is to attach a continuation with [`then`](Future::then) or
/// [`catch`](Future::catch), both of which consume `self` (§3: "attaching a
/// continuation invalidates it").
pub struct Future<T> {
    state: Option<SharedState<T>>,
}

impl<T> Future<T> {
    pub(crate) fn new(state: SharedState<T>) -> Self {
        Future { state: Some(state) }
    }

    pub(crate) fn into_state(self) -> Option<SharedState<T>> {
        self.state
    }

    /// Whether this handle still refers to a Shared State.
    ///
    /// Always `false` immediately after `then`/`catch` is called on it
    /// (§8, P2).
    pub fn valid(&self) -> bool {
        self.state.is_some()
    }

    /// Whether the underlying Shared State has already settled.
    ///
    /// Does not consume `self`; unlike `then`/`catch` this is a pure
    /// observation and attaches nothing.
    pub fn ready(&self) -> bool {
        self.state.as_ref().map_or(false, SharedState::ready)
    }

    /// §4.6 `Future<T>::then(f)`.
    ///
    /// Panics if `self` is not [`valid`](Future::valid) (core misuse, §7).
    pub fn then<F, Raw, R>(mut self, f: F) -> Future<R>
    where
        F: FnOnce(T) -> Raw + 'static,
        Raw: IntoOutcome<R> + 'static,
        T: 'static,
        R: 'static,
    {
        let source = self.state.take().expect("then called on an invalid future");
        assert_not_reserved::<R>();
        let dest = SharedState::new();
        let continuation = ThenContinuation::new(source.clone(), dest.clone(), f);
        trampoline::run(source.chain(Box::new(continuation)));
        Future::new(dest)
    }

    /// §4.6 `Future<T>::catch(f)`.
    ///
    /// The handler's resolved return type must equal `T`: the path that
    /// skips the handler (an incoming `Value`) returns `T` unchanged, so
    /// there is only one type the produced future can carry (§4.5's
    /// `common_type`, realized as equality — see DESIGN.md OQ-2).
    ///
    /// Panics if `self` is not [`valid`](Future::valid) (core misuse, §7).
    pub fn catch<F, Raw>(mut self, f: F) -> Future<T>
    where
        F: FnOnce(FutureError) -> Raw + 'static,
        Raw: IntoOutcome<T> + 'static,
        T: 'static,
    {
        let source = self.state.take().expect("catch called on an invalid future");
        let dest = SharedState::new();
        let continuation = CatchContinuation::new(source.clone(), dest.clone(), f);
        trampoline::run(source.chain(Box::new(continuation)));
        Future::new(dest)
    }
}
