// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-order tuple (de)serialization for const-generic arrays.
//!
//! serde only implements its traits for concrete array lengths, so vectors
//! and matrices route their storage through these helpers. Elements are
//! written in index order as an `N`-tuple; no length prefix.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

pub(crate) fn serialize<T, S, const N: usize>(data: &[T; N], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for value in data {
        tuple.serialize_element(value)?;
    }
    tuple.end()
}

pub(crate) fn deserialize<'de, T, D, const N: usize>(deserializer: D, fill: T) -> Result<[T; N], D::Error>
where
    T: Deserialize<'de> + Copy,
    D: Deserializer<'de>,
{
    deserializer.deserialize_tuple(N, ArrayVisitor::<T, N> { fill, marker: PhantomData })
}

struct ArrayVisitor<T, const N: usize> {
    fill: T,
    marker: PhantomData<[T; N]>,
}

impl<'de, T, const N: usize> Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de> + Copy,
{
    type Value = [T; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a tuple of {N} elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = [self.fill; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(out)
    }
}
