// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CursorVec;

impl<T> CursorVec<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, slots `[0, finish)` hold live elements and
        // `start` is non-null and aligned (dangling only when nothing is live).
        unsafe { core::slice::from_raw_parts(self.start.as_ptr(), self.finish) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As in `as_slice`; `&mut self` gives exclusive access to the
        // live range.
        unsafe { core::slice::from_raw_parts_mut(self.start.as_ptr(), self.finish) }
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}
