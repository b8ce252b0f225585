// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{category::InputTag, cursor::Cursor};

// Core imports
use core::fmt;

/// Adapts any [`Iterator`] into an input-category cursor.
///
/// The cursor holds the item it currently points at. Two cursors compare
/// equal when both are exhausted, or when both still point at an item and
/// have taken the same number of steps. [`SinglePass::end`] is the
/// exhausted sentinel.
pub struct SinglePass<I: Iterator> {
    iter: Option<I>,
    current: Option<I::Item>,
    taken: usize,
}

impl<I: Iterator> SinglePass<I> {
    /// Creates a cursor at the first item of `iter`.
    pub fn new(iter: I) -> Self {
        let mut iter = iter;
        let current = iter.next();
        Self {
            iter: Some(iter),
            current,
            taken: 0,
        }
    }

    /// The exhausted position.
    pub fn end() -> Self {
        Self {
            iter: None,
            current: None,
            taken: 0,
        }
    }

    /// Returns the item under the cursor, or `None` when exhausted.
    #[inline]
    pub fn get(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Number of steps taken since construction.
    #[inline]
    pub fn taken(&self) -> usize {
        self.taken
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> Clone for SinglePass<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
            taken: self.taken,
        }
    }
}

impl<I: Iterator> PartialEq for SinglePass<I> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.taken == other.taken,
            _ => false,
        }
    }
}

impl<I: Iterator> fmt::Debug for SinglePass<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglePass")
            .field("taken", &self.taken)
            .field("exhausted", &self.is_end())
            .finish()
    }
}

impl<I> Cursor for SinglePass<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Category = InputTag;
    type Value = I::Item;
    type Difference = isize;
    type Pointer = *const I::Item;
    type Reference<'a>
        = &'a I::Item
    where
        Self: 'a;

    fn step_forward(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.taken += 1;
        self.current = self.iter.as_mut().and_then(Iterator::next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_reaches_end() {
        let mut c = SinglePass::new([1, 2].into_iter());
        assert_eq!(c.get(), Some(&1));
        c.step_forward();
        assert_eq!(c.get(), Some(&2));
        assert_ne!(c, SinglePass::end());
        c.step_forward();
        assert!(c.is_end());
        assert_eq!(c, SinglePass::end());
        assert_eq!(c.taken(), 2);

        // Stepping an exhausted cursor is a no-op.
        c.step_forward();
        assert_eq!(c.taken(), 2);
    }

    #[test]
    fn test_empty_iterator_starts_at_end() {
        let c = SinglePass::new(core::iter::empty::<u8>());
        assert_eq!(c, SinglePass::end());
    }
}
