// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    cursor::{Pos, Reverse},
    vec::CursorVec,
};

impl<T> CursorVec<T> {
    /// Random-access cursor at the first live element.
    #[doc(alias = "cbegin")]
    #[inline]
    pub fn begin(&self) -> Pos<'_, T> {
        Pos::new(self.as_slice(), 0)
    }

    /// Random-access cursor one past the last live element.
    #[doc(alias = "cend")]
    #[inline]
    pub fn end(&self) -> Pos<'_, T> {
        Pos::new(self.as_slice(), self.finish)
    }

    /// Reverse cursor at the last live element.
    #[doc(alias = "crbegin")]
    #[inline]
    pub fn rbegin(&self) -> Reverse<Pos<'_, T>> {
        Reverse::new(self.end())
    }

    /// Reverse cursor one before the first live element.
    #[doc(alias = "crend")]
    #[inline]
    pub fn rend(&self) -> Reverse<Pos<'_, T>> {
        Reverse::new(self.begin())
    }
}
