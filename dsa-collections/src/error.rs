use thiserror::Error;

/// Errors produced by [`FixedArray`](crate::FixedArray) operations.
///
/// Every variant is recoverable: an error return guarantees the array was
/// left exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedArrayError {
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    #[error("index out of range (index={index}, len={len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("array is full (capacity={capacity})")]
    Full { capacity: usize },

    #[error("array is empty")]
    Empty,

    /// The backing buffer could not be allocated at construction time.
    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailed { capacity: usize },
}

/// Errors produced by [`LinkedList`](crate::LinkedList) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedListError {
    #[error("index out of range (index={index}, len={len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("list is empty")]
    Empty,
}

/// Convenience alias for fallible [`FixedArray`](crate::FixedArray) operations.
pub type ArrayResult<T> = core::result::Result<T, FixedArrayError>;

/// Convenience alias for fallible [`LinkedList`](crate::LinkedList) operations.
pub type ListResult<T> = core::result::Result<T, LinkedListError>;
