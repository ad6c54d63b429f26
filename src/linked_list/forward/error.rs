use alloc::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by [`ForwardList`](super::ForwardList) operations that take
/// a position or allocate a node.
///
/// The list is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ListError {
    /// The position names a node that has been removed, or belongs to another list.
    #[error("position does not name a live node of this list")]
    InvalidPosition,

    /// The operation needs a node but was given the end position.
    #[error("position is past the end of the list")]
    PastTheEnd,

    /// The before-begin position was dereferenced.
    #[error("the before-begin position holds no value")]
    BeforeBegin,

    /// Nothing follows the position to erase after.
    #[error("no node follows the given position")]
    NothingAfter,

    /// Storage for a new node could not be reserved.
    #[error("failed to reserve storage for a new node")]
    AllocationFailed(#[from] TryReserveError),
}
