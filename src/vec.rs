// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `CursorVec` type and its inherent API.
//!
//! `CursorVec<T>` is a growable, heap-allocated vector that manages raw
//! storage and element lifetimes by hand. Each operation lives in its own file
//! under `vec/`.

mod as_ptr;
mod clone;
mod cursor;
mod drop;
mod erase;
mod extend;
mod insert;
mod new;
mod pop;
mod push;
mod slice;
mod split_off;
mod try_from;
mod try_from_iter;

// Crate imports
use crate::raw;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

/// A growable vector over a single contiguous heap allocation.
///
/// # Layout and invariants
///
/// The storage is described by three cursors:
///
/// - `start`: the first slot of the allocation;
/// - `finish`: one past the last live element (an offset from `start`);
/// - `end_of_storage`: one past the last allocated slot (an offset from `start`).
///
/// At all times `0 <= finish <= end_of_storage`, every slot in `[0, finish)`
/// holds a live element, and every slot in `[finish, end_of_storage)` is raw
/// memory. [`len`](CursorVec::len) is `finish` and
/// [`capacity`](CursorVec::capacity) is `end_of_storage`.
///
/// # Growth
///
/// - [`push_back`](CursorVec::push_back) on a full vector reallocates to
///   `max(1, 2 * len)`, so a run of pushes costs amortized O(1) each.
/// - [`insert`](CursorVec::insert) reuses spare capacity when it is large
///   enough, and otherwise reallocates to `len + max(len, n)`.
/// - Constructors allocate exactly `len` slots; nothing ever shrinks the
///   allocation except dropping the vector.
///
/// Growth returns [`Error`](crate::Error) instead of aborting. The old buffer
/// is released only after the new one is fully populated, so a failed growth
/// leaves the vector untouched.
///
/// # Element requirements
///
/// Growth copies elements with [`Clone`] into the new buffer and then drops
/// the originals, so the growth operations require `T: Clone`. Reading,
/// popping, erasing and dropping work for any `T`.
///
/// # Positions
///
/// Insertion and erasure take `usize` positions into the live range. The
/// cursors returned by [`begin`](CursorVec::begin) and friends borrow the
/// vector and convert back with [`Pos::index`](crate::Pos::index).
///
/// # Examples
///
/// ```rust
/// use cursor_vec::CursorVec;
///
/// let mut v = CursorVec::new();
/// v.push_back(1).unwrap();
/// v.push_back(3).unwrap();
/// v.insert(1, 2, &2).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 2, 3]);
///
/// let next = v.erase(1..3);
/// assert_eq!(v[next], 3);
/// assert_eq!(v.as_slice(), &[1, 3]);
/// ```
pub struct CursorVec<T> {
    pub(crate) start: NonNull<T>,
    pub(crate) finish: usize,
    pub(crate) end_of_storage: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `CursorVec<T>` uniquely owns its buffer, like `Box<[T]>`.
unsafe impl<T: Send> Send for CursorVec<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for CursorVec<T> {}

impl<T> CursorVec<T> {
    /// Builds a vector from raw cursors.
    ///
    /// # Safety
    ///
    /// `start` must come from `raw::allocate::<T>(end_of_storage)` and the first
    /// `finish` slots must hold live elements.
    #[inline]
    pub(crate) unsafe fn from_raw_parts(
        start: NonNull<T>,
        finish: usize,
        end_of_storage: usize,
    ) -> Self {
        debug_assert!(finish <= end_of_storage);
        Self {
            start,
            finish,
            end_of_storage,
            _owns: PhantomData,
        }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.end_of_storage
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.finish
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.finish == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.end_of_storage - self.finish
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        &self.as_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() on an empty CursorVec"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() on an empty CursorVec"),
        }
    }

    /// Exchanges the storage of `self` and `other` in O(1).
    ///
    /// Only the three cursors move; no element is cloned or dropped.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.start, &mut other.start);
        core::mem::swap(&mut self.finish, &mut other.finish);
        core::mem::swap(&mut self.end_of_storage, &mut other.end_of_storage);
    }

    /// Drops live elements from the back until `len == new_finish`.
    ///
    /// `finish` is lowered before each drop, so a panicking destructor never
    /// causes a double drop.
    pub(crate) fn destroy_tail(&mut self, new_finish: usize) {
        while self.finish > new_finish {
            self.finish -= 1;
            // SAFETY: slot `finish` was live until the decrement above.
            unsafe { raw::destroy(self.start.as_ptr().add(self.finish)) };
        }
    }

    /// Drops every live element and frees the allocation, leaving the
    /// vector empty with no storage.
    pub(crate) fn release(&mut self) {
        self.destroy_tail(0);
        let start = core::mem::replace(&mut self.start, NonNull::dangling());
        let cap = core::mem::replace(&mut self.end_of_storage, 0);
        // SAFETY: `start` came from `raw::allocate::<T>(cap)` and is no longer
        // reachable from `self`.
        unsafe { raw::deallocate(start, cap) };
    }

    /// Replaces the storage with a freshly populated buffer.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts).
    pub(crate) unsafe fn adopt(
        &mut self,
        start: NonNull<T>,
        finish: usize,
        end_of_storage: usize,
    ) {
        self.release();
        self.start = start;
        self.finish = finish;
        self.end_of_storage = end_of_storage;
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorVec")
            .field("len", &self.finish)
            .field("capacity", &self.end_of_storage)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for CursorVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for CursorVec<T> {}
impl<T: Ord> Ord for CursorVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for CursorVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for CursorVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for CursorVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for CursorVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for CursorVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for CursorVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for CursorVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for CursorVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
