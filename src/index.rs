// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`CursorVec`](crate::CursorVec).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds (the precondition `index < len` is checked in
//!   every build, not only with debug assertions);
//! - supports every index form slices accept, ranges included;
//! - views are restricted to the live range `[0, len)`.

// Crate imports
use crate::vec::CursorVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for CursorVec<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for CursorVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
