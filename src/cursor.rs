// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor traits and trait extraction.
//!
//! A [`Cursor`] is a position in a sequence that carries a five-part
//! descriptor resolved at compile time:
//!
//! | fact          | associated item                |
//! |---------------|--------------------------------|
//! | category      | [`Cursor::Category`]           |
//! | value type    | [`Cursor::Value`]              |
//! | difference    | [`Cursor::Difference`]         |
//! | pointer       | [`Cursor::Pointer`]            |
//! | reference     | [`Cursor::Reference`]          |
//!
//! Rich cursor types declare the descriptor in their `Cursor` impl. Raw
//! pointers get it structurally: `*const T` and `*mut T` are both random
//! access with an `isize` difference, and keep their constness in the pointer
//! and reference members (`&'a T` versus `&'a mut T`).
//!
//! A type that implements neither path cannot be passed to
//! [`distance`](crate::distance) or [`advance`](crate::advance); the call is
//! rejected at compile time.

mod reverse;
mod single_pass;
mod slice;

pub use reverse::Reverse;
pub use single_pass::SinglePass;
pub use slice::Pos;

// Crate imports
use crate::category::{Category, RandomAccessTag};

// Core imports
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, Neg, Sub},
};

/// Signed integer type used to express distances between cursors.
pub trait SignedDistance:
    Copy
    + Ord
    + Default
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Widens to `i64` for error reporting.
    fn to_i64(self) -> i64;
}

macro_rules! signed_distance {
    ($($t:ty),*) => {
        $(impl SignedDistance for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }
        })*
    };
}

signed_distance!(i8, i16, i32, i64, isize);

/// A position in a sequence, plus its descriptor.
///
/// `PartialEq` is position equality: two cursors are equal when they denote
/// the same place, not when the elements under them compare equal.
pub trait Cursor: Clone + PartialEq {
    type Category: Category;
    type Value;
    type Difference: SignedDistance;
    type Pointer;
    type Reference<'a>
    where
        Self: 'a;

    /// Moves one position forward.
    fn step_forward(&mut self);
}

/// A cursor that can also move one position backward.
pub trait BidirectionalCursor: Cursor {
    fn step_backward(&mut self);
}

/// A cursor that jumps and measures in constant time.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves by `n` positions in one step; `n` may be negative.
    fn jump(&mut self, n: Self::Difference);

    /// Returns `self - origin` in positions.
    fn offset_from(&self, origin: &Self) -> Self::Difference;
}

/// Category tag of cursor `I`.
pub type CategoryOf<I> = <I as Cursor>::Category;
/// Element type a cursor `I` points at.
pub type ValueOf<I> = <I as Cursor>::Value;
/// Signed distance type of cursor `I`.
pub type DifferenceOf<I> = <I as Cursor>::Difference;
/// Pointer type of cursor `I`.
pub type PointerOf<I> = <I as Cursor>::Pointer;
/// Reference type of cursor `I` for the borrow `'a`.
pub type ReferenceOf<'a, I> = <I as Cursor>::Reference<'a>;

/// Returns the zero-sized category tag of `cursor`.
///
/// Passing the result to a function generic over the tag selects an
/// implementation statically, with no runtime branch.
#[inline]
pub fn category_of<I: Cursor>(_cursor: &I) -> I::Category {
    I::Category::default()
}

/// Returns a typed marker for the difference type of `cursor`.
#[inline]
pub fn distance_type<I: Cursor>(_cursor: &I) -> PhantomData<I::Difference> {
    PhantomData
}

/// Returns a typed marker for the value type of `cursor`.
#[inline]
pub fn value_type<I: Cursor>(_cursor: &I) -> PhantomData<I::Value> {
    PhantomData
}

#[inline]
fn ptr_offset<T>(to: usize, from: usize) -> isize {
    match core::mem::size_of::<T>() {
        // Zero-sized elements never move the address.
        0 => 0,
        size => (to.wrapping_sub(from) as isize) / size as isize,
    }
}

impl<T> Cursor for *const T {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn step_forward(&mut self) {
        *self = self.wrapping_add(1);
    }
}

impl<T> BidirectionalCursor for *const T {
    #[inline]
    fn step_backward(&mut self) {
        *self = self.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for *const T {
    #[inline]
    fn jump(&mut self, n: isize) {
        *self = self.wrapping_offset(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        ptr_offset::<T>(*self as usize, *origin as usize)
    }
}

impl<T> Cursor for *mut T {
    type Category = RandomAccessTag;
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline]
    fn step_forward(&mut self) {
        *self = self.wrapping_add(1);
    }
}

impl<T> BidirectionalCursor for *mut T {
    #[inline]
    fn step_backward(&mut self) {
        *self = self.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for *mut T {
    #[inline]
    fn jump(&mut self, n: isize) {
        *self = self.wrapping_offset(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        ptr_offset::<T>(*self as usize, *origin as usize)
    }
}
