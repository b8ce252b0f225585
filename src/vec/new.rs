// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::CursorVec};

// Core imports
use core::ptr::NonNull;

impl<T> CursorVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            start: NonNull::dangling(),
            finish: 0,
            end_of_storage: 0,
            _owns: core::marker::PhantomData,
        }
    }

    /// Constructs an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let start = raw::allocate::<T>(capacity)?;
        // SAFETY: fresh allocation of `capacity` slots, none of them live.
        Ok(unsafe { Self::from_raw_parts(start, 0, capacity) })
    }
}

impl<T: Clone> CursorVec<T> {
    /// Constructs a vector of `n` clones of `value`.
    ///
    /// Allocates exactly `n` slots.
    pub fn with_value(n: usize, value: &T) -> Result<Self, Error> {
        let start = raw::allocate::<T>(n)?;
        // SAFETY: the `n` fresh slots are filled before the vector adopts them.
        unsafe {
            raw::uninitialized_fill_n(start.as_ptr(), n, value);
            Ok(Self::from_raw_parts(start, n, n))
        }
    }

    /// Constructs a vector holding clones of the elements of `src`, in order.
    ///
    /// Allocates exactly `src.len()` slots.
    pub fn from_slice(src: &[T]) -> Result<Self, Error> {
        let start = raw::allocate::<T>(src.len())?;
        // SAFETY: the `src.len()` fresh slots are filled before the vector
        // adopts them, and cannot overlap `src`.
        unsafe {
            raw::uninitialized_copy(src, start.as_ptr());
            Ok(Self::from_raw_parts(start, src.len(), src.len()))
        }
    }
}

impl<T: Clone + Default> CursorVec<T> {
    /// Constructs a vector of `n` default values.
    ///
    /// Only types with a meaningful default qualify; for numbers this fills
    /// with zero.
    pub fn with_len(n: usize) -> Result<Self, Error> {
        Self::with_value(n, &T::default())
    }
}

impl<T> Default for CursorVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
