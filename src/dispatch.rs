// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category-dispatched [`distance`] and [`advance`].
//!
//! Each category tag implements [`Dispatch`] for the cursors that carry it,
//! and the free functions forward to `<I::Category as Dispatch<I>>`. The
//! choice of algorithm is therefore made by trait resolution at compile time:
//!
//! | category         | `distance`         | `advance`                         |
//! |------------------|--------------------|-----------------------------------|
//! | input, forward   | O(n) walk          | O(n) forward; negative is an error |
//! | bidirectional    | O(n) walk          | O(n) in either direction          |
//! | random access    | O(1) subtraction   | O(1) jump                         |
//!
//! [`OutputTag`](crate::OutputTag) has no `Dispatch` impl, so output-only
//! cursors are rejected at compile time.

// Crate imports
use crate::{
    category::{BidirectionalTag, Category, ForwardTag, InputTag, RandomAccessTag},
    cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, SignedDistance},
    error::Error,
};

/// Per-category implementation of the cursor algorithms.
pub trait Dispatch<I: Cursor>: Category {
    fn distance(first: I, last: I) -> I::Difference;
    fn advance(cursor: &mut I, n: I::Difference) -> Result<(), Error>;
}

/// Returns how many forward steps lead from `first` to `last`.
///
/// `last` must be reachable from `first`. For random-access cursors this is a
/// single subtraction; otherwise `first` is stepped until it equals `last`.
///
/// ```rust
/// use cursor_vec::distance;
///
/// let data = [1, 2, 3, 4];
/// let first = data.as_ptr();
/// let last = first.wrapping_add(data.len());
/// assert_eq!(distance(first, last), 4);
/// ```
#[inline]
pub fn distance<I>(first: I, last: I) -> I::Difference
where
    I: Cursor,
    I::Category: Dispatch<I>,
{
    <I::Category as Dispatch<I>>::distance(first, last)
}

/// Moves `cursor` by `n` positions.
///
/// `n == 0` is a no-op for every category. Input and forward cursors cannot
/// step backwards: a negative `n` returns [`Error::OutOfRange`] and leaves
/// `cursor` where it was.
///
/// ```rust
/// use cursor_vec::{advance, Error, SinglePass};
///
/// let mut c = SinglePass::new([1, 2, 3].into_iter());
/// advance(&mut c, 2).unwrap();
/// assert_eq!(c.get(), Some(&3));
/// assert_eq!(advance(&mut c, -1), Err(Error::OutOfRange { steps: -1 }));
/// ```
#[inline]
pub fn advance<I>(cursor: &mut I, n: I::Difference) -> Result<(), Error>
where
    I: Cursor,
    I::Category: Dispatch<I>,
{
    <I::Category as Dispatch<I>>::advance(cursor, n)
}

fn walk_distance<I: Cursor>(mut first: I, last: I) -> I::Difference {
    let mut n = I::Difference::ZERO;
    while first != last {
        first.step_forward();
        n = n + I::Difference::ONE;
    }
    n
}

fn walk_forward<I: Cursor>(cursor: &mut I, mut n: I::Difference) -> Result<(), Error> {
    if n < I::Difference::ZERO {
        return Err(Error::OutOfRange { steps: n.to_i64() });
    }
    while n > I::Difference::ZERO {
        cursor.step_forward();
        n = n - I::Difference::ONE;
    }
    Ok(())
}

impl<I: Cursor<Category = InputTag>> Dispatch<I> for InputTag {
    #[inline]
    fn distance(first: I, last: I) -> I::Difference {
        walk_distance(first, last)
    }

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) -> Result<(), Error> {
        walk_forward(cursor, n)
    }
}

// Forward cursors gain nothing over input cursors for these two algorithms.
impl<I: Cursor<Category = ForwardTag>> Dispatch<I> for ForwardTag {
    #[inline]
    fn distance(first: I, last: I) -> I::Difference {
        walk_distance(first, last)
    }

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) -> Result<(), Error> {
        walk_forward(cursor, n)
    }
}

impl<I: BidirectionalCursor<Category = BidirectionalTag>> Dispatch<I> for BidirectionalTag {
    #[inline]
    fn distance(first: I, last: I) -> I::Difference {
        walk_distance(first, last)
    }

    fn advance(cursor: &mut I, mut n: I::Difference) -> Result<(), Error> {
        if n >= I::Difference::ZERO {
            while n > I::Difference::ZERO {
                cursor.step_forward();
                n = n - I::Difference::ONE;
            }
        } else {
            while n < I::Difference::ZERO {
                cursor.step_backward();
                n = n + I::Difference::ONE;
            }
        }
        Ok(())
    }
}

impl<I: RandomAccessCursor<Category = RandomAccessTag>> Dispatch<I> for RandomAccessTag {
    #[inline]
    fn distance(first: I, last: I) -> I::Difference {
        last.offset_from(&first)
    }

    #[inline]
    fn advance(cursor: &mut I, n: I::Difference) -> Result<(), Error> {
        cursor.jump(n);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Pos, SinglePass};
    use core::cell::Cell;

    // Counts every single step so tests can tell the O(1) path from the walk.
    #[derive(Clone)]
    struct Counted<'a> {
        at: i32,
        steps: &'a Cell<u32>,
    }

    impl PartialEq for Counted<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.at == other.at
        }
    }

    impl Cursor for Counted<'_> {
        type Category = BidirectionalTag;
        type Value = i32;
        type Difference = i32;
        type Pointer = *const i32;
        type Reference<'r>
            = &'r i32
        where
            Self: 'r;

        fn step_forward(&mut self) {
            self.steps.set(self.steps.get() + 1);
            self.at += 1;
        }
    }

    impl BidirectionalCursor for Counted<'_> {
        fn step_backward(&mut self) {
            self.steps.set(self.steps.get() + 1);
            self.at -= 1;
        }
    }

    #[test]
    fn test_bidirectional_walks_both_ways() {
        let steps = Cell::new(0);
        let first = Counted { at: 0, steps: &steps };
        let last = Counted { at: 5, steps: &steps };
        assert_eq!(distance(first.clone(), last), 5);
        assert_eq!(steps.get(), 5);

        let mut c = first;
        advance(&mut c, 3).unwrap();
        assert_eq!(c.at, 3);
        advance(&mut c, -2).unwrap();
        assert_eq!(c.at, 1);
        assert_eq!(steps.get(), 10);

        advance(&mut c, 0).unwrap();
        assert_eq!(c.at, 1);
        assert_eq!(steps.get(), 10);
    }

    #[test]
    fn test_random_access_is_constant_time() {
        let data = [0u8; 64];
        let first = Pos::new(&data, 0);
        let last = Pos::new(&data, 64);
        assert_eq!(distance(first, last), 64);

        let mut c = first;
        advance(&mut c, 64).unwrap();
        assert_eq!(c, last);
        advance(&mut c, -10).unwrap();
        assert_eq!(c.index(), 54);
    }

    #[test]
    fn test_input_rejects_negative_step() {
        let mut c = SinglePass::new([1, 2, 3].into_iter());
        advance(&mut c, 1).unwrap();
        assert_eq!(advance(&mut c, -1), Err(Error::OutOfRange { steps: -1 }));
        // The cursor did not move.
        assert_eq!(c.get(), Some(&2));
        assert_eq!(c.taken(), 1);
    }

    #[test]
    fn test_input_distance_walks_to_end() {
        let first = SinglePass::new("abcde".chars());
        assert_eq!(distance(first, SinglePass::end()), 5);
    }
}
