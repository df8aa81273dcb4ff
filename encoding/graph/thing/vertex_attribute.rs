/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use storage::key_value::StorageKey;

use crate::{
    decode_prefix,
    error::EncodingError,
    graph::type_::vertex::TypeID,
    layout::prefix::{Prefix, PrefixID},
    value::{value::Value, value_type::ValueType},
    EncodingKeyspace, Keyable, Prefixed,
};

/// An attribute instance: `[attribute prefix][type id][value type][value bytes]`.
/// The same type and value always encode to the same vertex, which makes instance creation idempotent.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeVertex {
    type_id: TypeID,
    value_type: ValueType,
    value_bytes: Box<[u8]>,
}

impl AttributeVertex {
    const LENGTH_PREFIX_TYPE: usize = PrefixID::LENGTH + TypeID::LENGTH;
    const LENGTH_HEADER: usize = Self::LENGTH_PREFIX_TYPE + ValueType::LENGTH;

    pub fn build(type_id: TypeID, value: &Value<'_>) -> Self {
        AttributeVertex { type_id, value_type: value.value_type(), value_bytes: value.encode().into_boxed_slice() }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() < Self::LENGTH_HEADER {
            return Err(EncodingError::UnexpectedLength { expected: Self::LENGTH_HEADER, actual: bytes.len() });
        }
        let prefix = decode_prefix(bytes)?;
        if prefix != Prefix::VertexAttribute {
            return Err(EncodingError::UnexpectedPrefix { expected: Prefix::VertexAttribute, actual: prefix });
        }
        let type_id = TypeID::from_bytes([bytes[1], bytes[2]]);
        let value_type = ValueType::from_bytes([bytes[Self::LENGTH_PREFIX_TYPE]])?;
        Ok(AttributeVertex { type_id, value_type, value_bytes: bytes[Self::LENGTH_HEADER..].into() })
    }

    pub fn type_id(&self) -> TypeID {
        self.type_id
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn value(&self) -> Result<Value<'static>, EncodingError> {
        Value::decode(self.value_type, &self.value_bytes)
    }

    /// Prefix covering every instance of one attribute type.
    pub fn build_prefix_type(type_id: TypeID) -> StorageKey {
        let mut bytes = Prefix::VertexAttribute.prefix_id().to_bytes().to_vec();
        bytes.extend_from_slice(&type_id.to_bytes());
        StorageKey::new(Self::KEYSPACE.id(), bytes)
    }
}

impl Keyable for AttributeVertex {
    const KEYSPACE: EncodingKeyspace = EncodingKeyspace::Data;

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::LENGTH_HEADER + self.value_bytes.len());
        bytes.extend_from_slice(&Prefix::VertexAttribute.prefix_id().to_bytes());
        bytes.extend_from_slice(&self.type_id.to_bytes());
        bytes.extend_from_slice(&self.value_type.to_bytes());
        bytes.extend_from_slice(&self.value_bytes);
        bytes
    }
}

impl Prefixed for AttributeVertex {
    fn prefix(&self) -> Prefix {
        Prefix::VertexAttribute
    }
}

impl fmt::Debug for AttributeVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttributeVertex[{}:{}:{:?}]", self.type_id.as_u16(), self.value_type, &self.value_bytes)
    }
}
