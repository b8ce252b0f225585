// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for cursor dispatch and [`CursorVec`](crate::CursorVec).
//!
//! These errors cover the one recoverable cursor failure (stepping an
//! input-level cursor backwards) plus allocation and position failures of the
//! container. They are `Copy` and implement `core::error::Error`.

// External imports
use thiserror::Error as ThisError;

/// Errors returned by [`advance`](crate::advance) and by the growth
/// operations of [`CursorVec`](crate::CursorVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// A negative step was requested on a cursor that can only move forward.
    #[error("negative distance {steps} on a single-pass cursor")]
    OutOfRange {
        /// The rejected step count.
        steps: i64,
    },
    /// A position was past the end of the live range.
    #[error("position {index} out of bounds for length {len}")]
    OutOfBounds {
        /// Position that was requested.
        index: usize,
        /// Live length at the time of the call.
        len: usize,
    },
    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}
