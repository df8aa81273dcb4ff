/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::Range;

use storage::key_value::StorageKey;

use crate::{
    decode_prefix,
    error::EncodingError,
    graph::type_::vertex::TypeVertex,
    layout::prefix::{Prefix, PrefixID},
    prefix_key, EncodingKeyspace, Keyable, Prefixed,
};

/// `[edge prefix][from vertex][to vertex]`. Every schema edge is written twice: once under its canonical
/// prefix and once, with the endpoints swapped, under its reverse prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeEdge {
    prefix: Prefix,
    from: TypeVertex,
    to: TypeVertex,
}

impl TypeEdge {
    pub const LENGTH: usize = PrefixID::LENGTH + 2 * TypeVertex::LENGTH;
    pub const LENGTH_PREFIX_FROM: usize = PrefixID::LENGTH + TypeVertex::LENGTH;

    pub fn build(prefix: Prefix, from: TypeVertex, to: TypeVertex) -> Self {
        TypeEdge { prefix, from, to }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() != Self::LENGTH {
            return Err(EncodingError::UnexpectedLength { expected: Self::LENGTH, actual: bytes.len() });
        }
        let prefix = decode_prefix(bytes)?;
        let from = TypeVertex::decode(&bytes[Self::range_from()])?;
        let to = TypeVertex::decode(&bytes[Self::range_to()])?;
        Ok(TypeEdge { prefix, from, to })
    }

    pub fn from(&self) -> TypeVertex {
        self.from
    }

    pub fn to(&self) -> TypeVertex {
        self.to
    }

    pub fn build_prefix(prefix: Prefix) -> StorageKey {
        prefix_key(Self::KEYSPACE, prefix)
    }

    pub fn build_prefix_from(prefix: Prefix, from: TypeVertex) -> StorageKey {
        let mut bytes = Vec::with_capacity(Self::LENGTH_PREFIX_FROM);
        bytes.extend_from_slice(&prefix.prefix_id().to_bytes());
        bytes.extend_from_slice(&from.to_array());
        StorageKey::new(Self::KEYSPACE.id(), bytes)
    }

    const fn range_from() -> Range<usize> {
        PrefixID::LENGTH..PrefixID::LENGTH + TypeVertex::LENGTH
    }

    const fn range_to() -> Range<usize> {
        Self::range_from().end..Self::range_from().end + TypeVertex::LENGTH
    }
}

impl Keyable for TypeEdge {
    const KEYSPACE: EncodingKeyspace = EncodingKeyspace::Schema;

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::LENGTH);
        bytes.extend_from_slice(&self.prefix.prefix_id().to_bytes());
        bytes.extend_from_slice(&self.from.to_array());
        bytes.extend_from_slice(&self.to.to_array());
        bytes
    }
}

impl Prefixed for TypeEdge {
    fn prefix(&self) -> Prefix {
        self.prefix
    }
}

pub trait TypeEdgeEncoding {
    const CANONICAL_PREFIX: Prefix;
    const REVERSE_PREFIX: Prefix;

    fn canonical_edge(from: TypeVertex, to: TypeVertex) -> TypeEdge {
        TypeEdge::build(Self::CANONICAL_PREFIX, from, to)
    }

    fn reverse_edge(from: TypeVertex, to: TypeVertex) -> TypeEdge {
        TypeEdge::build(Self::REVERSE_PREFIX, to, from)
    }

    /// Returns `(from, to)` of a canonical edge key.
    fn decode_canonical_edge(bytes: &[u8]) -> Result<(TypeVertex, TypeVertex), EncodingError> {
        let edge = TypeEdge::decode(bytes)?;
        if edge.prefix() != Self::CANONICAL_PREFIX {
            return Err(EncodingError::UnexpectedPrefix { expected: Self::CANONICAL_PREFIX, actual: edge.prefix() });
        }
        Ok((edge.from(), edge.to()))
    }

    /// Returns `(from, to)` of the canonical edge a reverse edge key mirrors.
    fn decode_reverse_edge(bytes: &[u8]) -> Result<(TypeVertex, TypeVertex), EncodingError> {
        let edge = TypeEdge::decode(bytes)?;
        if edge.prefix() != Self::REVERSE_PREFIX {
            return Err(EncodingError::UnexpectedPrefix { expected: Self::REVERSE_PREFIX, actual: edge.prefix() });
        }
        Ok((edge.to(), edge.from()))
    }

    fn prefix_for_canonical_edges_from(from: TypeVertex) -> StorageKey {
        TypeEdge::build_prefix_from(Self::CANONICAL_PREFIX, from)
    }

    fn prefix_for_reverse_edges_from(to: TypeVertex) -> StorageKey {
        TypeEdge::build_prefix_from(Self::REVERSE_PREFIX, to)
    }

    fn prefix_for_canonical_edges() -> StorageKey {
        TypeEdge::build_prefix(Self::CANONICAL_PREFIX)
    }
}

macro_rules! type_edge_encoder {
    ($encoder_name:ident, $canonical:ident, $reverse:ident) => {
        pub struct $encoder_name;

        impl TypeEdgeEncoding for $encoder_name {
            const CANONICAL_PREFIX: Prefix = Prefix::$canonical;
            const REVERSE_PREFIX: Prefix = Prefix::$reverse;
        }
    };
}

type_edge_encoder!(EdgeSubEncoder, EdgeSub, EdgeSubReverse);
type_edge_encoder!(EdgeOwnsEncoder, EdgeOwns, EdgeOwnsReverse);
type_edge_encoder!(EdgePlaysEncoder, EdgePlays, EdgePlaysReverse);
type_edge_encoder!(EdgeRelatesEncoder, EdgeRelates, EdgeRelatesReverse);
