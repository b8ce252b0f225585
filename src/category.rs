// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor category tags.
//!
//! Each tag is a zero-sized marker naming a traversal capability:
//!
//! ```text
//! InputTag <- ForwardTag <- BidirectionalTag <- RandomAccessTag
//! OutputTag
//! ```
//!
//! Refinement is carried by the marker-trait chain [`InputCategory`],
//! [`ForwardCategory`], [`BidirectionalCategory`] and [`RandomAccessCategory`]:
//! a generic algorithm bounded on `C: ForwardCategory` accepts every stronger
//! tag as well. [`OutputTag`] only implements [`Category`].

mod sealed {
    pub trait Sealed {}
}

/// Runtime view of a category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// [`InputTag`]: single-pass reads.
    Input,
    /// [`OutputTag`]: single-pass writes.
    Output,
    /// [`ForwardTag`]: multi-pass reads.
    Forward,
    /// [`BidirectionalTag`]: multi-pass reads in both directions.
    Bidirectional,
    /// [`RandomAccessTag`]: constant-time jumps and differences.
    RandomAccess,
}

impl CategoryKind {
    /// Returns `true` if `self` is `other` or a refinement of it.
    ///
    /// The relation is reflexive and transitive. `Output` only refines itself.
    pub const fn refines(self, other: CategoryKind) -> bool {
        match (self, other) {
            (CategoryKind::Output, CategoryKind::Output) => true,
            (CategoryKind::Output, _) | (_, CategoryKind::Output) => false,
            (a, b) => a.strength() >= b.strength(),
        }
    }

    const fn strength(self) -> u8 {
        match self {
            CategoryKind::Output => 0,
            CategoryKind::Input => 1,
            CategoryKind::Forward => 2,
            CategoryKind::Bidirectional => 3,
            CategoryKind::RandomAccess => 4,
        }
    }
}

/// A closed set of zero-sized category tags.
pub trait Category: sealed::Sealed + Copy + Default + core::fmt::Debug + 'static {
    const KIND: CategoryKind;
}

/// Single-pass reading. Implemented by every tag except [`OutputTag`].
pub trait InputCategory: Category {}
/// Multi-pass reading.
pub trait ForwardCategory: InputCategory {}
/// Multi-pass reading that can also step backwards.
pub trait BidirectionalCategory: ForwardCategory {}
/// Constant-time jumps and differences.
pub trait RandomAccessCategory: BidirectionalCategory {}

/// Single-pass, forward-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputTag;

/// Write-only. Does not refine any other tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutputTag;

/// Multi-pass, forward-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardTag;

/// Multi-pass, both directions, one step at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

/// Constant-time offset and subtraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

macro_rules! category {
    ($tag:ty, $kind:ident $(, $level:ident)*) => {
        impl sealed::Sealed for $tag {}
        impl Category for $tag {
            const KIND: CategoryKind = CategoryKind::$kind;
        }
        $(impl $level for $tag {})*
    };
}

category!(OutputTag, Output);
category!(InputTag, Input, InputCategory);
category!(ForwardTag, Forward, InputCategory, ForwardCategory);
category!(
    BidirectionalTag,
    Bidirectional,
    InputCategory,
    ForwardCategory,
    BidirectionalCategory
);
category!(
    RandomAccessTag,
    RandomAccess,
    InputCategory,
    ForwardCategory,
    BidirectionalCategory,
    RandomAccessCategory
);

impl From<RandomAccessTag> for BidirectionalTag {
    fn from(_: RandomAccessTag) -> Self {
        BidirectionalTag
    }
}
impl From<BidirectionalTag> for ForwardTag {
    fn from(_: BidirectionalTag) -> Self {
        ForwardTag
    }
}
impl From<ForwardTag> for InputTag {
    fn from(_: ForwardTag) -> Self {
        InputTag
    }
}
