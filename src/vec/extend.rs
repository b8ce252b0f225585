// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::CursorVec};

impl<T: Clone> CursorVec<T> {
    /// Makes room for at least `additional` more elements.
    ///
    /// When the spare capacity is too small, the storage grows to
    /// `max(len + additional, 2 * len)` and the live elements are cloned over.
    /// On error the vector is unchanged.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        if self.spare_capacity() >= additional {
            return Ok(());
        }
        let len = self.finish;
        let required = len.checked_add(additional).ok_or(Error::CapacityOverflow)?;
        let new_cap = required.max(len.saturating_mul(2));
        self.relocate(new_cap)
    }

    /// Appends clones of every element of `src`, growing at most once.
    ///
    /// On error the vector is unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        self.reserve(src.len())?;
        // SAFETY: `reserve` guaranteed `src.len()` raw slots past `finish`,
        // and `src` cannot alias them.
        unsafe { raw::uninitialized_copy(src, self.start.as_ptr().add(self.finish)) };
        self.finish += src.len();
        Ok(())
    }

    /// Resizes to `new_len`, appending clones of `value` when growing.
    pub fn resize(&mut self, new_len: usize, value: &T) -> Result<(), Error> {
        let len = self.finish;
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }
        self.insert(len, new_len - len, value)
    }

    /// Moves the live elements into a fresh buffer of `new_cap` slots.
    fn relocate(&mut self, new_cap: usize) -> Result<(), Error> {
        let len = self.finish;
        debug_assert!(new_cap >= len);
        let new_start = raw::allocate::<T>(new_cap)?;
        // SAFETY: `new_cap >= len`, and exactly `len` slots are constructed
        // before the vector adopts the buffer.
        unsafe {
            raw::uninitialized_copy(self.as_slice(), new_start.as_ptr());
            self.adopt(new_start, len, new_cap);
        }
        Ok(())
    }
}

impl<T: Clone> Extend<T> for CursorVec<T> {
    /// # Panics
    ///
    /// Panics on capacity overflow and calls
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on allocator
    /// failure.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(e) = self.reserve(lower) {
            raw::handle_error(e);
        }
        for item in iter {
            if let Err(e) = self.push_back(item) {
                raw::handle_error(e);
            }
        }
    }
}
