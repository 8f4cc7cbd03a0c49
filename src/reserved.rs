//! The void-result marker and the reserved-type check (§3, §4.5).
//!
//! Two types are reserved by the core and must never be chosen as a
//! `Future<T>`'s value type: the Empty-tag sentinel (`EmptyTag`) and the
//! error-token type (`FutureError`). Rust's stable trait system has no
//! negative-impl form of "every type except these two" (that needs
//! specialization), so the rejection named in §4.5 is realized as an eager
//! runtime check performed once, at the moment a `Future<T>`/`Promise<T>`
//! pair (or a `then`/`catch` destination) is constructed, rather than as a
//! trait bound. See DESIGN.md, Open Question OQ-1 for why this is the
//! chosen stand-in for the spec's "compile-time error" wording.

use crate::error::FutureError;
use std::any::TypeId;
use std::convert::Infallible;

/// Reserved sentinel for the Result Cell's `Empty` state.
///
/// `EmptyTag` is deliberately uninhabited (its only field is
/// [`Infallible`]): it exists purely so the reserved-type check has a
/// concrete `TypeId` to reject, never so a value of this type can be
/// produced.
#[derive(Debug)]
pub struct EmptyTag(Infallible);

/// The void-result: the value carried by a future whose only purpose is to
/// signal completion, not to deliver data (the "no value" case of §3).
///
/// Unlike `EmptyTag`, `Void` is a perfectly ordinary, constructible,
/// zero-sized value — it is handed to `then`/`catch` closures the same way
/// any other value is, trading the source spec's nullary-closure overload
/// for uniform one-argument closures (see DESIGN.md, Open Question OQ-5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Void;

/// Panics if `T` is one of the two reserved types.
///
/// Called from every public constructor that introduces a new `Future<T>`:
/// `make_promise`, `make_ready_value`, `make_ready_error`, and the
/// destination type computed by `then`/`catch`.
pub(crate) fn assert_not_reserved<T: 'static>() {
    assert!(
        TypeId::of::<T>() != TypeId::of::<EmptyTag>(),
        "Future<EmptyTag> is reserved: EmptyTag exists only to mark the pending state \
         and can never be a future's value type"
    );
    assert!(
        TypeId::of::<T>() != TypeId::of::<FutureError>(),
        "Future<FutureError> is reserved: FutureError is the core's own error token \
         and can never be a future's value type"
    );
}
