// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::CursorVec};

impl<T: Clone> CursorVec<T> {
    /// Appends `value` at the `finish` cursor.
    ///
    /// With spare capacity this constructs in place. Otherwise the storage
    /// grows to `max(1, 2 * len)`: the live elements are cloned into the new
    /// buffer in order, `value` is constructed after them, and only then is
    /// the old buffer destroyed and freed.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.finish != self.end_of_storage {
            // SAFETY: `finish < end_of_storage`, so the slot is allocated and raw.
            unsafe { raw::construct(self.start.as_ptr().add(self.finish), value) };
            self.finish += 1;
            return Ok(());
        }
        self.grow_and_push(value)
    }

    #[cold]
    fn grow_and_push(&mut self, value: T) -> Result<(), Error> {
        let old_size = self.finish;
        let new_cap = if old_size == 0 {
            1
        } else {
            old_size.checked_mul(2).ok_or(Error::CapacityOverflow)?
        };
        let new_start = raw::allocate::<T>(new_cap)?;
        // SAFETY: `new_start` has `new_cap > old_size` raw slots; the first
        // `old_size + 1` are constructed before the vector adopts the buffer.
        unsafe {
            let new_finish = raw::uninitialized_copy(self.as_slice(), new_start.as_ptr());
            raw::construct(new_finish, value);
            self.adopt(new_start, old_size + 1, new_cap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec::CursorVec, Error};

    #[test]
    fn test_push_back_doubles_capacity() {
        let mut v = CursorVec::new();
        let mut caps = alloc::vec::Vec::new();
        for i in 0..9 {
            v.push_back(i).unwrap();
            caps.push(v.capacity());
        }
        assert_eq!(caps, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_push_back_uses_spare_capacity_in_place() {
        let mut v = CursorVec::with_capacity(4).unwrap();
        v.push_back(1u16).unwrap();
        let p = v.as_ptr();
        v.push_back(2).unwrap();
        v.push_back(3).unwrap();
        assert_eq!(v.as_ptr(), p);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_push_back_zero_sized() {
        let mut v = CursorVec::new();
        for _ in 0..5 {
            v.push_back(()).unwrap();
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_push_back_overflow_leaves_vector_unchanged() {
        // SAFETY: zero-sized elements need no storage behind the dangling
        // pointer, so any `finish <= end_of_storage` is a valid vector.
        let mut v = unsafe {
            CursorVec::<()>::from_raw_parts(core::ptr::NonNull::dangling(), usize::MAX, usize::MAX)
        };
        let p = v.as_ptr();
        assert_eq!(v.push_back(()), Err(Error::CapacityOverflow));
        assert_eq!(v.len(), usize::MAX);
        assert_eq!(v.capacity(), usize::MAX);
        assert_eq!(v.as_ptr(), p);
        assert_eq!(v.spare_capacity(), 0);
        // Dropping would walk `usize::MAX` no-op destructors.
        core::mem::forget(v);
    }

    #[test]
    fn test_push_back_overflow_past_half_of_usize() {
        // SAFETY: as above; `finish == end_of_storage` forces the growth path.
        let mut v = unsafe {
            CursorVec::<()>::from_raw_parts(
                core::ptr::NonNull::dangling(),
                usize::MAX / 2 + 1,
                usize::MAX / 2 + 1,
            )
        };
        assert_eq!(v.push_back(()), Err(Error::CapacityOverflow));
        assert_eq!(v.len(), usize::MAX / 2 + 1);
        core::mem::forget(v);
    }
}
