// This file is part of cursor-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`CursorVec`](crate::CursorVec).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence, growing through `push_back`.
//!
//! ### Trait bounds
//!
//! Deserialization requires `T: Deserialize<'de> + Clone`, since growth clones
//! the live elements into each new buffer. The sequence's size hint is used
//! to reserve once up front, capped at 1 MiB worth of elements. An
//! allocation failure is reported through `serde::de::Error::custom`.

// Crate imports
use crate::vec::CursorVec;

// Core imports
use core::{fmt, mem};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for CursorVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// Upper bound on the bytes reserved from a sequence's size hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

/// Number of elements worth reserving for a declared sequence length.
fn cautious<T>(hint: Option<usize>) -> usize {
    let per_elem = mem::size_of::<T>().max(1);
    hint.unwrap_or(0).min(MAX_PREALLOC_BYTES / per_elem)
}

struct VecVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Clone,
{
    type Value = CursorVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = CursorVec::<T>::new();
        out.reserve(cautious::<T>(a.size_hint()))
            .map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for CursorVec<T>
where
    T: Deserialize<'de> + Clone,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{cautious, CursorVec, VecVisitor, MAX_PREALLOC_BYTES};
    use serde::de::{self, value, IntoDeserializer, Visitor};

    // Yields `items` but claims a far longer sequence.
    struct InflatedHint {
        items: alloc::vec::IntoIter<u64>,
        hint: usize,
    }

    impl<'de> de::SeqAccess<'de> for InflatedHint {
        type Error = value::Error;

        fn next_element_seed<S>(&mut self, seed: S) -> Result<Option<S::Value>, Self::Error>
        where
            S: de::DeserializeSeed<'de>,
        {
            match self.items.next() {
                Some(x) => seed
                    .deserialize(IntoDeserializer::<'de, value::Error>::into_deserializer(x))
                    .map(Some),
                None => Ok(None),
            }
        }

        fn size_hint(&self) -> Option<usize> {
            Some(self.hint)
        }
    }

    #[test]
    fn test_serde_roundtrip_json() {
        let v = CursorVec::from_slice(&[1, 2, 3]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: CursorVec<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: CursorVec<i32> = CursorVec::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: CursorVec<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<CursorVec<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }

    #[test]
    fn test_deserialize_owned_elements() {
        let v: CursorVec<alloc::string::String> = serde_json::from_str(r#"["x","y"]"#).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v[1], "y");
    }

    #[test]
    fn test_inflated_size_hint_is_capped() {
        let seq = InflatedHint {
            items: alloc::vec![7u64].into_iter(),
            hint: 1 << 27,
        };
        let v = VecVisitor::<u64>(core::marker::PhantomData)
            .visit_seq(seq)
            .unwrap();
        assert_eq!(v.as_slice(), &[7]);
        assert!(v.capacity() <= MAX_PREALLOC_BYTES / 8);
    }

    #[test]
    fn test_honest_size_hint_reserves_exactly() {
        let seq = InflatedHint {
            items: alloc::vec![1u64, 2, 3].into_iter(),
            hint: 3,
        };
        let v = VecVisitor::<u64>(core::marker::PhantomData)
            .visit_seq(seq)
            .unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_cautious_scales_with_element_size() {
        assert_eq!(cautious::<u8>(Some(usize::MAX)), MAX_PREALLOC_BYTES);
        assert_eq!(cautious::<[u8; 4096]>(Some(usize::MAX)), 256);
        assert_eq!(cautious::<()>(Some(10)), 10);
        assert_eq!(cautious::<u64>(None), 0);
    }
}
