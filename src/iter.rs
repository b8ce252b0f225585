// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`CursorVec`](crate::CursorVec).
//!
//! - `IntoIter<T>` takes over the buffer, yields by value, and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&CursorVec` and `&mut CursorVec` iterate as slices.

// Crate imports
use crate::{raw, vec::CursorVec};

// Core imports
use core::{iter::FusedIterator, mem::ManuallyDrop, ptr::NonNull};

/// Owned iterator returned by `CursorVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yet yielded are
/// dropped, and the storage freed, when the iterator drops.
pub struct IntoIter<T> {
    buf: NonNull<T>,
    cap: usize,
    front: usize,
    back: usize, // exclusive
}

// SAFETY: `IntoIter<T>` owns the buffer it came from, like `CursorVec<T>`.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: `&IntoIter<T>` gives no access to elements.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[front, back)` are live and still owned by `self`.
        unsafe {
            core::slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.as_ptr().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.as_ptr().add(self.back).read() })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.back > self.front {
            self.back -= 1;
            // SAFETY: slot `back` was live and is dropped exactly once.
            unsafe { raw::destroy(self.buf.as_ptr().add(self.back)) };
        }
        // SAFETY: `buf` came from `raw::allocate::<T>(cap)` via the vector.
        unsafe { raw::deallocate(self.buf, self.cap) };
    }
}

impl<'a, T> IntoIterator for &'a CursorVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut CursorVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for CursorVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The iterator takes over the buffer; the vector must not free it.
        let v = ManuallyDrop::new(self);
        IntoIter {
            buf: v.start,
            cap: v.end_of_storage,
            front: 0,
            back: v.finish,
        }
    }
}
