//! The error taxonomy (§7).
//!
//! Only the two *structural* failure kinds and the opaque *user* error get a
//! `FutureError` variant; `core misuse` errors (operating on a spent handle,
//! double-attaching a continuation, double-satisfying a promise) are
//! programming errors and panic at the call site instead of flowing through
//! a `Result`, the same contract the teacher's own `Future::poll` documents:
//! "once a future has completed ... any future calls to `poll` may panic"
//! rather than asking every caller to handle it.

use std::any::Any;
use std::fmt;

/// The error token carried by a settled `Future`'s Result Cell.
///
/// `FutureError` is the one and only error type that crosses a `Future`
/// boundary. User errors are wrapped opaquely in `User` rather than
/// interpreted by the core (§7: "Never interpreted by the core").
#[derive(thiserror::Error, Debug)]
pub enum FutureError {
    /// The `Promise` half of this future was dropped without being
    /// satisfied.
    #[error("broken promise: the producing side was dropped before it set a value or error")]
    Canceled,

    /// A `then`/`catch` continuation's function returned a `Future` whose
    /// internal state was already gone (moved-from, i.e. `!valid()`).
    #[error("invalid future: a continuation returned a future with no shared state")]
    InvalidFuture,

    /// A continuation's user function panicked; the payload is preserved as
    /// a best-effort message.
    #[error("continuation panicked: {0}")]
    Panicked(String),

    /// An opaque error produced by user code, either via `set_exception` or
    /// returned from a `then`/`catch` closure.
    #[error("{0}")]
    User(Box<dyn std::error::Error + Send + Sync>),
}

impl FutureError {
    /// Builds a `FutureError` from a `std::panic::catch_unwind` payload.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "continuation panicked with a non-string payload".to_owned()
        };
        FutureError::Panicked(message)
    }

    /// Wraps an arbitrary user error as a `FutureError::User`.
    pub fn from_user<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FutureError::User(Box::new(err))
    }
}

/// Convenience wrapper so `set_exception`/`catch` callers can pass a bare
/// string without constructing a throwaway error type.
#[derive(Debug)]
pub struct Message(pub String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Message {}

impl From<&str> for FutureError {
    fn from(msg: &str) -> Self {
        FutureError::User(Box::new(Message(msg.to_owned())))
    }
}

impl From<String> for FutureError {
    fn from(msg: String) -> Self {
        FutureError::User(Box::new(Message(msg)))
    }
}
