//! Errors reported by queue construction and reservation.

use thiserror::Error;

/// Error value indicating an unusable capacity request.
#[derive(Error, Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum CapacityError {
    /// A backing store must have at least one slot.
    #[error("insufficient capacity: a queue needs at least one slot")]
    Zero,

    /// The requested capacity cannot be represented.
    #[error("capacity overflow: {len} elements plus {additional} more does not fit in usize")]
    Overflow {
        /// Elements already held.
        len: usize,
        /// Elements requested on top of `len`.
        additional: usize,
    },
}
