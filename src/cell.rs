//! The Result Cell (§3, §4.1): ternary storage behind every Shared State.

use crate::error::FutureError;

/// Ternary storage discriminated by the three tags of §4.1: `Empty` (0),
/// `Value` (1), `Error` (2).
///
/// Invariant R1/R2 (§3: once non-`Empty`, never returns to `Empty`; the two
/// non-`Empty` transitions each happen at most once) is enforced by callers
/// going through `SharedState::settle`, the single place a cell is written
/// after construction.
pub(crate) enum ResultCell<T> {
    Empty,
    Value(T),
    Error(FutureError),
}

impl<T> ResultCell<T> {
    pub(crate) fn is_set(&self) -> bool {
        !matches!(self, ResultCell::Empty)
    }

    /// Moves the contents out, leaving `Empty` behind.
    ///
    /// Used both to hand a settled value to exactly one continuation and,
    /// transiently, inside `settle` itself.
    pub(crate) fn take(&mut self) -> ResultCell<T> {
        std::mem::replace(self, ResultCell::Empty)
    }
}
