// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CursorVec;

impl<T> CursorVec<T> {
    /// Removes the last live element and returns it, or `None` if empty.
    ///
    /// The `finish` cursor moves back by one; capacity is kept.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.finish == 0 {
            return None;
        }
        self.finish -= 1;
        // SAFETY: slot `finish` was live before the decrement and is now
        // outside the live range, so reading it out moves ownership.
        Some(unsafe { self.start.as_ptr().add(self.finish).read() })
    }
}
