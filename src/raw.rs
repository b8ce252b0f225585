// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw storage and object-lifetime primitives.
//!
//! The container keeps raw memory and live objects apart: [`allocate`] hands
//! out uninitialized slots, [`construct`] and [`destroy`] start and end the
//! life of a single object, and the bulk helpers work on ranges of either
//! uninitialized (`uninitialized_*`) or live (`copy_*`, `fill`) slots.
//!
//! Zero-sized element types and zero-length requests never reach the global
//! allocator; they are served by a dangling, well-aligned pointer.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, mem, ptr::NonNull};

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error};

#[inline]
fn is_unallocated<T>(n: usize) -> bool {
    mem::size_of::<T>() == 0 || n == 0
}

/// Allocates uninitialized storage for exactly `n` values of `T`.
///
/// Returns [`Error::CapacityOverflow`] when `n` values do not fit a single
/// allocation and [`Error::AllocFailed`] when the allocator returns null.
pub(crate) fn allocate<T>(n: usize) -> Result<NonNull<T>, Error> {
    if is_unallocated::<T>(n) {
        return Ok(NonNull::dangling());
    }
    let layout = Layout::array::<T>(n).map_err(|_| Error::CapacityOverflow)?;
    // SAFETY: `layout` has a non-zero size: `T` is not zero-sized and `n > 0`.
    let ptr = unsafe { alloc(layout) };
    NonNull::new(ptr.cast::<T>()).ok_or(Error::AllocFailed {
        size: layout.size(),
        align: layout.align(),
    })
}

/// Releases storage obtained from `allocate::<T>(n)`.
///
/// # Safety
///
/// `ptr` must come from `allocate::<T>(n)` with the same `n`, and must not be
/// used afterwards. Live objects in the storage are not dropped.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, n: usize) {
    if is_unallocated::<T>(n) {
        return;
    }
    // SAFETY: the caller guarantees `n` matches the original allocation, whose
    // layout was checked by `Layout::array` then.
    unsafe {
        let layout =
            Layout::from_size_align_unchecked(mem::size_of::<T>() * n, mem::align_of::<T>());
        dealloc(ptr.as_ptr().cast::<u8>(), layout);
    }
}

/// Starts the life of `value` at `slot`.
///
/// # Safety
///
/// `slot` must be valid for writes and must not hold a live object.
#[inline]
pub(crate) unsafe fn construct<T>(slot: *mut T, value: T) {
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(value) }
}

/// Ends the life of the object at `slot`, leaving the memory raw.
///
/// # Safety
///
/// `slot` must hold a live object, which must not be used afterwards.
#[inline]
pub(crate) unsafe fn destroy<T>(slot: *mut T) {
    // SAFETY: forwarded from the caller.
    unsafe { core::ptr::drop_in_place(slot) }
}

/// Clones `src` into the uninitialized slots starting at `dst`.
///
/// Returns the slot one past the last constructed object.
///
/// # Safety
///
/// `dst..dst + src.len()` must be valid for writes, hold no live objects, and
/// not overlap `src`. If a clone panics, the objects already constructed are
/// leaked.
pub(crate) unsafe fn uninitialized_copy<T: Clone>(src: &[T], dst: *mut T) -> *mut T {
    let mut out = dst;
    for item in src {
        // SAFETY: `out` stays within the `src.len()` slots the caller provided.
        unsafe {
            construct(out, item.clone());
            out = out.add(1);
        }
    }
    out
}

/// Constructs `n` clones of `value` in the uninitialized slots starting at `dst`.
///
/// Returns the slot one past the last constructed object.
///
/// # Safety
///
/// `dst..dst + n` must be valid for writes and hold no live objects. If a
/// clone panics, the objects already constructed are leaked.
pub(crate) unsafe fn uninitialized_fill_n<T: Clone>(
    dst: *mut T,
    n: usize,
    value: &T,
) -> *mut T {
    let mut out = dst;
    for _ in 0..n {
        // SAFETY: `out` stays within the `n` slots the caller provided.
        unsafe {
            construct(out, value.clone());
            out = out.add(1);
        }
    }
    out
}

/// Assigns `live[src]` to the live slots starting at `dst`, front to back.
///
/// Correct for overlapping ranges when `dst <= src.start`.
pub(crate) fn copy<T: Clone>(live: &mut [T], src: core::ops::Range<usize>, dst: usize) {
    debug_assert!(dst <= src.start);
    for (offset, from) in src.enumerate() {
        let to = dst + offset;
        if to == from {
            continue;
        }
        let (head, tail) = live.split_at_mut(from);
        head[to].clone_from(&tail[0]);
    }
}

/// Assigns `live[src]` to the live slots ending at `dst_end`, back to front.
///
/// Correct for overlapping ranges when `dst_end >= src.end`.
pub(crate) fn copy_backward<T: Clone>(
    live: &mut [T],
    src: core::ops::Range<usize>,
    dst_end: usize,
) {
    debug_assert!(dst_end >= src.end);
    let shift = dst_end - src.end;
    if shift == 0 {
        return;
    }
    for from in src.rev() {
        let (head, tail) = live.split_at_mut(from + shift);
        tail[0].clone_from(&head[from]);
    }
}

/// Assigns a clone of `value` to every live slot in `live`.
#[inline]
pub(crate) fn fill<T: Clone>(live: &mut [T], value: &T) {
    for slot in live {
        slot.clone_from(value);
    }
}

/// Turns a growth error into a panic, for callers that cannot return one.
///
/// Capacity overflow panics; allocator failure goes through
/// [`handle_alloc_error`].
#[cold]
pub(crate) fn handle_error(e: Error) -> ! {
    match e {
        Error::AllocFailed { size, align } => match Layout::from_size_align(size, align) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => panic!("{e}"),
        },
        _ => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_release() {
        let p = allocate::<u64>(8).unwrap();
        unsafe {
            let end = uninitialized_fill_n(p.as_ptr(), 8, &7);
            assert_eq!(end.offset_from(p.as_ptr()), 8);
            let live = core::slice::from_raw_parts_mut(p.as_ptr(), 8);
            assert!(live.iter().all(|&x| x == 7));
            for i in (0..8).rev() {
                destroy(p.as_ptr().add(i));
            }
            deallocate(p, 8);
        }
    }

    #[test]
    fn test_zero_sized_and_empty_requests_are_dangling() {
        assert_eq!(allocate::<()>(1_000).unwrap(), NonNull::dangling());
        assert_eq!(allocate::<u32>(0).unwrap(), NonNull::dangling());
    }

    #[test]
    fn test_capacity_overflow_is_reported() {
        assert_eq!(allocate::<u64>(usize::MAX / 4), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_copy_directions_preserve_overlapping_sources() {
        let mut v = [1, 2, 3, 4, 5, 0, 0];
        copy_backward(&mut v, 1..5, 7);
        assert_eq!(v, [1, 2, 3, 2, 3, 4, 5]);

        let mut w = [1, 2, 3, 4, 5];
        copy(&mut w, 3..5, 1);
        assert_eq!(w, [1, 4, 5, 4, 5]);

        fill(&mut w[..2], &9);
        assert_eq!(w, [9, 9, 5, 4, 5]);
    }

    #[test]
    fn test_uninitialized_copy_clones_each_element() {
        let src = [alloc::string::String::from("a"), alloc::string::String::from("b")];
        let p = allocate::<alloc::string::String>(2).unwrap();
        unsafe {
            uninitialized_copy(&src, p.as_ptr());
            let live = core::slice::from_raw_parts(p.as_ptr(), 2);
            assert_eq!(live, &src);
            destroy(p.as_ptr().add(1));
            destroy(p.as_ptr());
            deallocate(p, 2);
        }
    }
}
