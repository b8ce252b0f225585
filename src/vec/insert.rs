// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::CursorVec};

impl<T: Clone> CursorVec<T> {
    /// Inserts `n` clones of `value` before `position`.
    ///
    /// `n == 0` is a no-op. Returns [`Error::OutOfBounds`] if
    /// `position > len`, or an allocation error; in both cases the vector is
    /// unchanged.
    ///
    /// Three strategies, chosen so no clone ever reads a slot that was
    /// already overwritten and no object is constructed over a live one:
    ///
    /// 1. Enough spare capacity and more than `n` elements after `position`:
    ///    clone the last `n` elements into the raw slots past `finish`, shift
    ///    the rest of the suffix back to front, then assign `value` into the
    ///    `n` vacated slots.
    /// 2. Enough spare capacity and at most `n` elements after `position`:
    ///    construct the part of the new run that lands past `finish`, clone
    ///    the suffix after it, then assign `value` over the old suffix slots.
    /// 3. Not enough spare capacity: allocate `len + max(len, n)` slots and
    ///    clone prefix, `n` values and suffix into them, in that order.
    pub fn insert(&mut self, position: usize, n: usize, value: &T) -> Result<(), Error> {
        if position > self.finish {
            return Err(Error::OutOfBounds {
                index: position,
                len: self.finish,
            });
        }
        if n == 0 {
            return Ok(());
        }
        if self.end_of_storage - self.finish < n {
            return self.realloc_insert(position, n, value);
        }

        let old_finish = self.finish;
        let elems_after = old_finish - position;
        let base = self.start.as_ptr();
        if elems_after > n {
            // SAFETY: `[old_finish, old_finish + n)` is allocated raw memory
            // (spare capacity >= n) and disjoint from the live source range.
            unsafe {
                raw::uninitialized_copy(&self.as_slice()[old_finish - n..], base.add(old_finish))
            };
            self.finish += n;
            raw::copy_backward(self.as_mut_slice(), position..old_finish - n, old_finish);
            raw::fill(&mut self.as_mut_slice()[position..position + n], value);
        } else {
            // SAFETY: the gap `[old_finish, position + n)` is raw and allocated.
            unsafe { raw::uninitialized_fill_n(base.add(old_finish), n - elems_after, value) };
            self.finish += n - elems_after;
            // SAFETY: `[position + n, old_finish + n)` is raw and allocated, and
            // starts at or after `old_finish`, so it is disjoint from the source.
            unsafe {
                raw::uninitialized_copy(&self.as_slice()[position..old_finish], base.add(self.finish))
            };
            self.finish += elems_after;
            raw::fill(&mut self.as_mut_slice()[position..old_finish], value);
        }
        Ok(())
    }

    /// Inserts a single `value` before `position`, moving it into place.
    ///
    /// Same placement rules as [`insert`](Self::insert) with `n == 1`, but
    /// `value` itself is never cloned. On error the vector is unchanged and
    /// `value` is dropped.
    pub fn insert_one(&mut self, position: usize, value: T) -> Result<(), Error> {
        if position > self.finish {
            return Err(Error::OutOfBounds {
                index: position,
                len: self.finish,
            });
        }
        if self.finish == self.end_of_storage {
            return self.realloc_insert_one(position, value);
        }

        let old_finish = self.finish;
        let base = self.start.as_ptr();
        if position == old_finish {
            // SAFETY: `old_finish < end_of_storage`, so the slot is allocated and raw.
            unsafe { raw::construct(base.add(old_finish), value) };
            self.finish += 1;
            return Ok(());
        }
        // SAFETY: the slot at `old_finish` is allocated and raw, and the source
        // is the live element just before it.
        unsafe {
            raw::uninitialized_copy(&self.as_slice()[old_finish - 1..], base.add(old_finish))
        };
        self.finish += 1;
        raw::copy_backward(self.as_mut_slice(), position..old_finish - 1, old_finish);
        self.as_mut_slice()[position] = value;
        Ok(())
    }

    #[cold]
    fn realloc_insert_one(&mut self, position: usize, value: T) -> Result<(), Error> {
        let old_size = self.finish;
        let new_cap = old_size
            .checked_add(old_size.max(1))
            .ok_or(Error::CapacityOverflow)?;
        let new_start = raw::allocate::<T>(new_cap)?;
        // SAFETY: `new_start` has `new_cap > old_size` raw slots; exactly the
        // first `old_size + 1` are constructed before the vector adopts it.
        unsafe {
            let live = self.as_slice();
            let mut dst = raw::uninitialized_copy(&live[..position], new_start.as_ptr());
            raw::construct(dst, value);
            dst = dst.add(1);
            raw::uninitialized_copy(&live[position..], dst);
            self.adopt(new_start, old_size + 1, new_cap);
        }
        Ok(())
    }

    #[cold]
    fn realloc_insert(&mut self, position: usize, n: usize, value: &T) -> Result<(), Error> {
        let old_size = self.finish;
        let new_size = old_size.checked_add(n).ok_or(Error::CapacityOverflow)?;
        let new_cap = old_size
            .checked_add(old_size.max(n))
            .ok_or(Error::CapacityOverflow)?;
        let new_start = raw::allocate::<T>(new_cap)?;
        // SAFETY: `new_start` has `new_cap >= old_size + n` raw slots; exactly
        // the first `old_size + n` are constructed before the vector adopts it.
        unsafe {
            let live = self.as_slice();
            let mut dst = raw::uninitialized_copy(&live[..position], new_start.as_ptr());
            dst = raw::uninitialized_fill_n(dst, n, value);
            raw::uninitialized_copy(&live[position..], dst);
            self.adopt(new_start, new_size, new_cap);
        }
        Ok(())
    }
}
