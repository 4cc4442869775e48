//! Error type shared by every fallible chain operation.

use crate::Ptr;
use crate::ValueKind;

/// Result alias used throughout the crate.
pub type Result<T, E = ListError> = core::result::Result<T, E>;

/// Errors surfaced by [`SingleList`](crate::SingleList) operations.
///
/// A failed call leaves the chain exactly as it was, except for the sorts:
/// a sort aborted by [`ListError::UnsupportedType`] leaves the values in an
/// unspecified order, but every value is still present once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The node handle does not name a live node of this chain, or a range
    /// bound cannot be reached from its start.
    #[error("node handle {0:?} does not refer to a live node of this chain")]
    InvalidChain(Ptr),

    /// The position is outside the bound the operation accepts.
    #[error("position {pos} is out of range for a chain of length {len}")]
    PositionOutOfRange {
        /// The position that was requested.
        pos: usize,
        /// The length of the chain at the time of the call.
        len: usize,
    },

    /// Two values could not be ordered against each other, either because
    /// one of them is of a kind with no ordering or because their kinds
    /// differ.
    #[error("cannot order a {left} value against a {right} value")]
    UnsupportedType {
        /// Kind of the left-hand value.
        left: ValueKind,
        /// Kind of the right-hand value.
        right: ValueKind,
    },
}
