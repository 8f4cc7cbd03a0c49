//! A single-producer, single-consumer future/promise pair with chained
//! continuations.
//!
//! A future's value space is ternary: pending, fulfilled with a value, or
//! rejected with an error. [`Future::then`] and [`Future::catch`] consume a
//! future and return a new one carrying the mapped result; when the
//! supplied closure itself returns a [`Future`], the outer future
//! transparently flattens to that inner future's eventual value.
//!
//! There is no executor here, and no blocking read: a `Future`'s value can
//! only be observed by attaching a continuation. The only scheduler is the
//! [trampoline](trampoline) that drains already-ready continuation chains
//! without recursing.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tether::make_promise;
//!
//! let (promise, future) = make_promise::<i32>();
//! let observed = Rc::new(Cell::new(None));
//! let observed_in_closure = observed.clone();
//! let future = future.then(move |n| {
//!     observed_in_closure.set(Some(n * 2));
//! });
//! assert!(future.valid()); // a fresh handle to the downstream future
//!
//! promise.set_value(5);
//! assert_eq!(observed.get(), Some(10));
//! ```

mod cell;
mod continuation;
mod error;
mod future;
mod outcome;
mod promise;
mod reserved;
mod state;
mod sync;
mod trampoline;

pub use error::{FutureError, Message};
pub use future::Future;
pub use outcome::IntoOutcome;
pub use promise::{make_promise, make_ready_error, make_ready_value, Promise};
pub use reserved::{EmptyTag, Void};
