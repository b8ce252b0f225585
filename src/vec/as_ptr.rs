// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CursorVec;

impl<T> CursorVec<T> {
    /// Returns a raw pointer to the `start` cursor.
    ///
    /// Raw pointers are random-access [`Cursor`](crate::Cursor)s, so
    /// `as_ptr()..as_ptr().wrapping_add(len)` can be handed to
    /// [`distance`](crate::distance) and [`advance`](crate::advance). Only the
    /// first `len` slots hold live elements; reading past them is undefined
    /// behavior. The pointer is invalidated by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.start.as_ptr()
    }

    /// Returns a mutable raw pointer to the `start` cursor.
    ///
    /// Same contract as [`as_ptr`](Self::as_ptr). Writing into spare slots
    /// does not change `len`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.start.as_ptr()
    }
}
