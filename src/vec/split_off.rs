// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CursorVec};

impl<T: Clone> CursorVec<T> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`, with its capacity kept,
    /// - the returned vector contains clones of the tail `[at..len)`.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.finish;
        if at > len {
            return Err(Error::OutOfBounds { index: at, len });
        }
        let other = Self::from_slice(&self.as_slice()[at..])?;
        self.truncate(at);
        Ok(other)
    }
}
