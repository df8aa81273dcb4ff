/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use storage::key_value::StorageKey;

use crate::{
    error::EncodingError,
    graph::type_::{edge::TypeEdge, vertex::TypeVertex},
    layout::{infix::Infix, prefix::Prefix},
    EncodingKeyspace, Keyable, Prefixed,
};

/// `[property prefix][type vertex][infix]`, holding one piece of a type's metadata in its value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypeVertexProperty {
    vertex: TypeVertex,
    infix: Infix,
}

impl TypeVertexProperty {
    pub fn build(vertex: TypeVertex, infix: Infix) -> Self {
        TypeVertexProperty { vertex, infix }
    }

    pub fn type_vertex(&self) -> TypeVertex {
        self.vertex
    }

    pub fn infix(&self) -> Infix {
        self.infix
    }

    /// Prefix covering every property of one vertex.
    pub fn build_prefix_for_vertex(vertex: TypeVertex) -> StorageKey {
        let mut bytes = Prefix::PropertyTypeVertex.prefix_id().to_bytes().to_vec();
        bytes.extend_from_slice(&vertex.to_array());
        StorageKey::new(Self::KEYSPACE.id(), bytes)
    }
}

impl Keyable for TypeVertexProperty {
    const KEYSPACE: EncodingKeyspace = EncodingKeyspace::Schema;

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Prefix::PropertyTypeVertex.prefix_id().to_bytes().to_vec();
        bytes.extend_from_slice(&self.vertex.to_array());
        bytes.extend_from_slice(&self.infix.infix_id().bytes());
        bytes
    }
}

impl Prefixed for TypeVertexProperty {
    fn prefix(&self) -> Prefix {
        Prefix::PropertyTypeVertex
    }
}

/// `[edge property prefix][canonical edge][infix]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypeEdgeProperty {
    edge: TypeEdge,
    infix: Infix,
}

impl TypeEdgeProperty {
    pub fn build(edge: TypeEdge, infix: Infix) -> Self {
        TypeEdgeProperty { edge, infix }
    }

    pub fn type_edge(&self) -> TypeEdge {
        self.edge
    }

    pub fn infix(&self) -> Infix {
        self.infix
    }

    pub fn build_prefix_for_edge(edge: TypeEdge) -> StorageKey {
        let mut bytes = Prefix::PropertyTypeEdge.prefix_id().to_bytes().to_vec();
        bytes.extend_from_slice(&edge.to_bytes());
        StorageKey::new(Self::KEYSPACE.id(), bytes)
    }
}

impl Keyable for TypeEdgeProperty {
    const KEYSPACE: EncodingKeyspace = EncodingKeyspace::Schema;

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Prefix::PropertyTypeEdge.prefix_id().to_bytes().to_vec();
        bytes.extend_from_slice(&self.edge.to_bytes());
        bytes.extend_from_slice(&self.infix.infix_id().bytes());
        bytes
    }
}

impl Prefixed for TypeEdgeProperty {
    fn prefix(&self) -> Prefix {
        Prefix::PropertyTypeEdge
    }
}

pub trait TypeVertexPropertyEncoding: Sized {
    const INFIX: Infix;

    fn from_value_bytes(value: &[u8]) -> Result<Self, EncodingError>;

    /// `None` for marker properties, whose presence is the whole of their meaning.
    fn to_value_bytes(&self) -> Option<Box<[u8]>>;

    fn build_key(vertex: TypeVertex) -> StorageKey {
        TypeVertexProperty::build(vertex, Self::INFIX).to_storage_key()
    }
}

pub trait TypeEdgePropertyEncoding: Sized {
    const INFIX: Infix;

    fn from_value_bytes(value: &[u8]) -> Result<Self, EncodingError>;

    fn to_value_bytes(&self) -> Option<Box<[u8]>>;

    fn build_key(edge: TypeEdge) -> StorageKey {
        TypeEdgeProperty::build(edge, Self::INFIX).to_storage_key()
    }
}
