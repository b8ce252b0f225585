// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::cursor::{BidirectionalCursor, Cursor, Pos, RandomAccessCursor};

/// Walks a bidirectional cursor backwards.
///
/// A `Reverse` built from `base` refers to the element just before `base`,
/// so `Reverse::new(end)` is the first element of the reversed sequence and
/// `Reverse::new(begin)` is its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<I> {
    base: I,
}

impl<I: BidirectionalCursor> Reverse<I> {
    /// Wraps `base`; the new cursor refers to the element before it.
    #[inline]
    pub fn new(base: I) -> Self {
        Self { base }
    }

    /// Returns the underlying cursor, one position past the referenced element.
    #[inline]
    pub fn base(&self) -> &I {
        &self.base
    }

    /// Unwraps the underlying cursor.
    #[inline]
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<'a, T> Reverse<Pos<'a, T>> {
    /// Returns the element this reverse cursor refers to, if any.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        let mut inner = self.base;
        if inner.index() == 0 {
            return None;
        }
        inner.step_backward();
        inner.get()
    }
}

impl<I: BidirectionalCursor> Cursor for Reverse<I> {
    type Category = I::Category;
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference<'a>
        = I::Reference<'a>
    where
        Self: 'a;

    #[inline]
    fn step_forward(&mut self) {
        self.base.step_backward();
    }
}

impl<I: BidirectionalCursor> BidirectionalCursor for Reverse<I> {
    #[inline]
    fn step_backward(&mut self) {
        self.base.step_forward();
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for Reverse<I> {
    #[inline]
    fn jump(&mut self, n: Self::Difference) {
        self.base.jump(-n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> Self::Difference {
        origin.base.offset_from(&self.base)
    }
}
