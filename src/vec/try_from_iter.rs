// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CursorVec};

impl<T: Clone> CursorVec<T> {
    /// Tries to construct from an iterator, stopping at the first allocation error.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order, growing by `push_back`.
    /// - On error, elements pushed so far are dropped and the error is returned.
    /// - The source iterator may be left partially consumed.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.push_back(item)?;
        }
        Ok(v)
    }
}

impl<T: Clone> FromIterator<T> for CursorVec<T> {
    /// # Panics
    ///
    /// Panics on capacity overflow and calls
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on allocator
    /// failure. Use [`CursorVec::try_from_iter`] to get an error instead.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
