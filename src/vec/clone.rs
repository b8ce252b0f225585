// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::CursorVec};

impl<T: Clone> CursorVec<T> {
    /// Deep-copies the live elements into a fresh allocation of exactly
    /// `len` slots.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Error> {
        Self::from_slice(self.as_slice())
    }

    /// Replaces the contents with a deep copy of `other` (copy-and-swap).
    ///
    /// The copy is built first and swapped in; the old storage is released
    /// when the temporary drops. On error `self` is unchanged. Assigning a
    /// vector to a copy of itself is therefore always safe.
    pub fn assign(&mut self, other: &Self) -> Result<(), Error> {
        let mut tmp = other.try_clone()?;
        self.swap(&mut tmp);
        Ok(())
    }
}

impl<T: Clone> Clone for CursorVec<T> {
    /// # Panics
    ///
    /// Panics on capacity overflow and calls
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on allocator
    /// failure. Use [`try_clone`](CursorVec::try_clone) to get an error instead.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| raw::handle_error(e))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign(source) {
            raw::handle_error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::CursorVec;

    #[test]
    fn test_clone_is_deep() {
        let a = CursorVec::from_slice(&[1, 2, 3]).unwrap();
        let mut b = a.clone();
        b.push_back(4).unwrap();
        b[0] = 10;
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3, 4]);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn test_clone_trims_capacity() {
        let mut a = CursorVec::with_capacity(10).unwrap();
        a.push_back(1).unwrap();
        let b = a.try_clone().unwrap();
        assert_eq!(b.capacity(), 1);
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let src = CursorVec::from_slice(&[5, 6]).unwrap();
        let mut dst = CursorVec::from_slice(&[1, 2, 3, 4]).unwrap();
        dst.clone_from(&src);
        assert_eq!(dst.as_slice(), &[5, 6]);
        assert_eq!(dst.capacity(), 2);

        let copy = dst.clone();
        dst.assign(&copy).unwrap();
        assert_eq!(dst, copy);
    }
}
