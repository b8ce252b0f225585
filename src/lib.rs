// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `cursor-vec`
//!
//! Two `no_std` building blocks for generic code:
//!
//! - **Cursor categories and dispatch.** A [`Cursor`] carries a compile-time
//!   descriptor (category tag, value, difference, pointer and reference
//!   types). [`distance`] and [`advance`] pick the cheapest algorithm for the
//!   cursor's category through trait resolution, with no runtime branch.
//! - **[`CursorVec<T>`]**, a growable vector that manages a single heap
//!   allocation by hand: raw storage and live elements are tracked apart,
//!   and every element is constructed and dropped exactly once.
//!
//! ## Categories
//!
//! ```text
//! InputTag <- ForwardTag <- BidirectionalTag <- RandomAccessTag
//! OutputTag
//! ```
//!
//! A stronger tag satisfies every bound written for a weaker one. Raw
//! pointers (`*const T`, `*mut T`) and the slice cursor [`Pos`] are random
//! access; [`SinglePass`] turns any `Iterator` into an input cursor;
//! [`Reverse`] walks a bidirectional cursor backwards.
//!
//! | category       | `distance` | `advance`                                  |
//! |----------------|------------|--------------------------------------------|
//! | input/forward  | O(n)       | O(n), negative step → [`Error::OutOfRange`] |
//! | bidirectional  | O(n)       | O(n) both ways                             |
//! | random access  | O(1)       | O(1)                                       |
//!
//! ## Vector growth
//!
//! - Constructors allocate exactly the number of elements they create.
//! - [`CursorVec::push_back`] doubles the capacity when full (minimum 1).
//! - [`CursorVec::insert`] fills spare capacity in place, or grows to
//!   `len + max(len, n)`.
//! - Growth is fallible: it returns [`Error::CapacityOverflow`] or
//!   [`Error::AllocFailed`] and leaves the vector untouched.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `CursorVec<T>` as a sequence.
//! - `std`: implements `std::error::Error` through `thiserror/std`.
//!
//! ## Example
//!
//! ```rust
//! use cursor_vec::{advance, distance, CursorVec};
//!
//! let mut v = CursorVec::from_slice(&[1, 2, 3]).unwrap();
//! v.insert(1, 2, &9).unwrap();
//! assert_eq!(v.as_slice(), &[1, 9, 9, 2, 3]);
//!
//! let mut it = v.begin();
//! advance(&mut it, 3).unwrap();
//! assert_eq!(it.get(), Some(&2));
//! assert_eq!(distance(v.begin(), v.end()), 5);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod category;
mod cursor;
mod dispatch;
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use category::{
    BidirectionalCategory, BidirectionalTag, Category, CategoryKind, ForwardCategory, ForwardTag,
    InputCategory, InputTag, OutputTag, RandomAccessCategory, RandomAccessTag,
};
pub use cursor::{
    category_of, distance_type, value_type, BidirectionalCursor, CategoryOf, Cursor,
    DifferenceOf, PointerOf, Pos, RandomAccessCursor, ReferenceOf, Reverse, SignedDistance,
    SinglePass, ValueOf,
};
pub use dispatch::{advance, distance, Dispatch};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::CursorVec;
