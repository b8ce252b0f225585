// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    category::RandomAccessTag,
    cursor::{BidirectionalCursor, Cursor, RandomAccessCursor},
};

// Core imports
use core::fmt;

/// A random-access position inside a borrowed slice.
///
/// This is the safe counterpart of a raw element pointer: it may sit anywhere
/// in `0..=len` (the one-past-the-end position included) and can only be
/// dereferenced through [`Pos::get`], which checks the bound.
pub struct Pos<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> Pos<'a, T> {
    /// Creates a cursor at `index` into `slice`.
    #[inline]
    pub const fn new(slice: &'a [T], index: usize) -> Self {
        Self { slice, index }
    }

    /// Returns the position as an index into the slice.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the element under the cursor, or `None` at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.slice.get(self.index)
    }
}

impl<T> Clone for Pos<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Pos<'_, T> {}

impl<T> PartialEq for Pos<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice, other.slice) && self.index == other.index
    }
}
impl<T> Eq for Pos<'_, T> {}

impl<T> fmt::Debug for Pos<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pos")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for Pos<'a, T> {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference<'r>
        = &'a T
    where
        Self: 'r;

    #[inline]
    fn step_forward(&mut self) {
        self.index = self.index.wrapping_add(1);
    }
}

impl<T> BidirectionalCursor for Pos<'_, T> {
    #[inline]
    fn step_backward(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for Pos<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.index.wrapping_sub(origin.index) as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_moves_and_reads() {
        let data = [1, 2, 3, 4];
        let mut p = Pos::new(&data, 0);
        assert_eq!(p.get(), Some(&1));
        p.jump(3);
        assert_eq!(p.get(), Some(&4));
        p.step_forward();
        assert_eq!(p.get(), None);
        assert_eq!(p.offset_from(&Pos::new(&data, 0)), 4);
        p.step_backward();
        assert_eq!(p.index(), 3);
    }

    #[test]
    fn test_pos_equality_is_positional() {
        let a = [7, 7];
        let b = [7, 7];
        assert_eq!(Pos::new(&a, 1), Pos::new(&a, 1));
        assert_ne!(Pos::new(&a, 0), Pos::new(&a, 1));
        assert_ne!(Pos::new(&a, 0), Pos::new(&b, 0));
    }
}
