// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CursorVec};

impl<T: Clone> TryFrom<&[T]> for CursorVec<T> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        Self::from_slice(src)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T; N]> for CursorVec<T> {
    type Error = Error;
    fn try_from(src: &[T; N]) -> Result<Self, Error> {
        Self::from_slice(&src[..])
    }
}
