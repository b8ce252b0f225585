// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw, vec::CursorVec};

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T: Clone> CursorVec<T> {
    /// Removes the elements in `range` and returns the position of the first
    /// element after them (equal to `range`'s start).
    ///
    /// The suffix after the range is assigned leftwards, front to back, so
    /// every source slot is read before it is overwritten. The now-stale
    /// elements at the tail are then dropped from the back. Capacity is kept.
    ///
    /// # Panics
    ///
    /// Panics if the range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    /// - an excluded start or included end of `usize::MAX`
    ///
    /// (A range with `start == end` removes nothing.)
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::CursorVec;
    /// let mut v = CursorVec::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// let next = v.erase(1..3);
    /// assert_eq!(v.as_slice(), &[1, 4, 5]);
    /// assert_eq!(v[next], 4);
    /// ```
    pub fn erase<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let len = self.finish;

        let first = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("erase range start overflows usize")),
            Bound::Unbounded => 0,
        };
        let last = match range.end_bound() {
            Bound::Included(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("erase range end overflows usize")),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if first > last {
            panic!("erase range start > end: {} > {}", first, last);
        }
        if last > len {
            panic!("erase range end {} exceeds length {}", last, len);
        }
        if first == last {
            return first;
        }

        raw::copy(self.as_mut_slice(), last..len, first);
        self.destroy_tail(len - (last - first));
        first
    }

    /// Removes the element at `position`; same as `erase(position..position + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    #[inline]
    pub fn erase_at(&mut self, position: usize) -> usize {
        self.erase(position..=position)
    }
}

impl<T> CursorVec<T> {
    /// Drops every live element, keeping the allocation.
    ///
    /// Equivalent to `erase(..)`: with nothing after the range, no element
    /// is moved and every live element is dropped from the back.
    #[inline]
    pub fn clear(&mut self) {
        self.destroy_tail(0);
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.destroy_tail(new_len);
    }
}
