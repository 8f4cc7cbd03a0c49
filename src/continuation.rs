//! Continuation Objects (§4.3): the three dispatch shapes that move a
//! settled value from a source Shared State into a destination one.

use crate::cell::ResultCell;
use crate::error::FutureError;
use crate::future::Future;
use crate::outcome::{IntoOutcome, Outcome};
use crate::state::SharedState;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

/// A one-shot unit of Trampoline work.
///
/// `run` consumes `self`, because a continuation is invoked at most once
/// (§3: "Continuations are one-shot"); it returns the next continuation to
/// run, if settling its destination produced one, which is how the
/// Trampoline (§4.4) walks an entire chain without recursing.
pub(crate) trait Continuation {
    fn run(self: Box<Self>) -> Option<Box<dyn Continuation>>;
}

/// `then`'s continuation: forwards an `Error` verbatim, calls `f` on a
/// `Value`, flattening `f`'s result if it is itself a `Future`.
pub(crate) struct ThenContinuation<T, R, Raw, F>
where
    F: FnOnce(T) -> Raw,
    Raw: IntoOutcome<R>,
{
    source: SharedState<T>,
    dest: SharedState<R>,
    f: F,
    _raw: PhantomData<fn() -> Raw>,
}

impl<T, R, Raw, F> ThenContinuation<T, R, Raw, F>
where
    F: FnOnce(T) -> Raw,
    Raw: IntoOutcome<R>,
{
    pub(crate) fn new(source: SharedState<T>, dest: SharedState<R>, f: F) -> Self {
        ThenContinuation { source, dest, f, _raw: PhantomData }
    }
}

impl<T, R, Raw, F> Continuation for ThenContinuation<T, R, Raw, F>
where
    T: 'static,
    R: 'static,
    Raw: IntoOutcome<R>,
    F: FnOnce(T) -> Raw,
{
    fn run(self: Box<Self>) -> Option<Box<dyn Continuation>> {
        let ThenContinuation { source, dest, f, .. } = *self;
        match source.take_cell() {
            ResultCell::Error(e) => {
                log::trace!("then: source errored, forwarding without calling the handler");
                dest.settle(ResultCell::Error(e))
            }
            ResultCell::Value(v) => run_handler(dest, AssertUnwindSafe(move || f(v))),
            ResultCell::Empty => unreachable!("continuation run before its source was set"),
        }
    }
}

/// `catch`'s continuation: forwards a `Value` unchanged, calls `f` on an
/// `Error`. The destination's value type is forced to equal the source's
/// (§4.5's `common_type` resolved as equality, see DESIGN.md OQ-2), since
/// the pass-through path returns `T` unchanged.
pub(crate) struct CatchContinuation<T, Raw, F>
where
    F: FnOnce(FutureError) -> Raw,
    Raw: IntoOutcome<T>,
{
    source: SharedState<T>,
    dest: SharedState<T>,
    f: F,
    _raw: PhantomData<fn() -> Raw>,
}

impl<T, Raw, F> CatchContinuation<T, Raw, F>
where
    F: FnOnce(FutureError) -> Raw,
    Raw: IntoOutcome<T>,
{
    pub(crate) fn new(source: SharedState<T>, dest: SharedState<T>, f: F) -> Self {
        CatchContinuation { source, dest, f, _raw: PhantomData }
    }
}

impl<T, Raw, F> Continuation for CatchContinuation<T, Raw, F>
where
    T: 'static,
    Raw: IntoOutcome<T>,
    F: FnOnce(FutureError) -> Raw,
{
    fn run(self: Box<Self>) -> Option<Box<dyn Continuation>> {
        let CatchContinuation { source, dest, f, .. } = *self;
        match source.take_cell() {
            ResultCell::Value(v) => {
                log::trace!("catch: source resolved, forwarding without calling the handler");
                dest.settle(ResultCell::Value(v))
            }
            ResultCell::Error(e) => run_handler(dest, AssertUnwindSafe(move || f(e))),
            ResultCell::Empty => unreachable!("continuation run before its source was set"),
        }
    }
}

/// Calls a `then`/`catch` handler, catching panics per §7 and §9 ("any
/// exception thrown by a then- or catch-continuation's user function is
/// captured and becomes the downstream Error"), then resolves the handler's
/// raw output into either a direct value or a flattened inner future.
fn run_handler<R, Raw>(
    dest: SharedState<R>,
    call: AssertUnwindSafe<impl FnOnce() -> Raw>,
) -> Option<Box<dyn Continuation>>
where
    R: 'static,
    Raw: IntoOutcome<R>,
{
    match panic::catch_unwind(call) {
        Ok(raw) => match raw.into_outcome() {
            Outcome::Direct(value) => {
                log::trace!("continuation resolved directly");
                dest.settle(ResultCell::Value(value))
            }
            Outcome::Deferred(inner) => attach(inner, dest),
        },
        Err(payload) => {
            let err = FutureError::from_panic(payload);
            log::trace!("continuation handler panicked: {}", err);
            dest.settle_error(err)
        }
    }
}

/// Installs an attach-continuation (§4.3) onto `inner`'s state so that,
/// once `inner` settles, its cell is moved wholesale into `dest` — the
/// monadic flattening a `then`/`catch` closure gets for free by returning a
/// `Future<R>` instead of an `R`.
fn attach<R: 'static>(inner: Future<R>, dest: SharedState<R>) -> Option<Box<dyn Continuation>> {
    match inner.into_state() {
        Some(inner_state) => {
            let attach = AttachContinuation { source: inner_state.clone(), dest };
            inner_state.chain(Box::new(attach))
        }
        None => {
            log::warn!("continuation returned a future with no shared state");
            dest.settle_error(FutureError::InvalidFuture)
        }
    }
}

/// The attach-continuation of §4.3: no user function, just a cell move from
/// `source` (the inner future returned by a `then`/`catch` handler) into
/// `dest` (the outer future's destination state).
struct AttachContinuation<R> {
    source: SharedState<R>,
    dest: SharedState<R>,
}

impl<R: 'static> Continuation for AttachContinuation<R> {
    fn run(self: Box<Self>) -> Option<Box<dyn Continuation>> {
        let AttachContinuation { source, dest } = *self;
        dest.settle(source.take_cell())
    }
}
