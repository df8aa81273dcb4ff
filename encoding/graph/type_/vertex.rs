/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

pub use resource::constants::encoding::TypeIDUInt;
use storage::key_value::StorageKey;

use crate::{
    decode_prefix,
    error::EncodingError,
    graph::type_::Kind,
    layout::prefix::{Prefix, PrefixID},
    prefix_key, EncodingKeyspace, Keyable, Prefixed,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeID {
    id: TypeIDUInt,
}

impl TypeID {
    pub const LENGTH: usize = std::mem::size_of::<TypeIDUInt>();

    pub const fn new(id: TypeIDUInt) -> Self {
        TypeID { id }
    }

    pub fn from_bytes(bytes: [u8; TypeID::LENGTH]) -> Self {
        TypeID { id: TypeIDUInt::from_be_bytes(bytes) }
    }

    pub fn as_u16(&self) -> u16 {
        self.id
    }

    pub fn to_bytes(&self) -> [u8; TypeID::LENGTH] {
        self.id.to_be_bytes()
    }
}

/// A schema vertex: `[kind prefix][type id]`. The kind is fixed by the prefix and never changes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVertex {
    kind: Kind,
    type_id: TypeID,
}

impl TypeVertex {
    pub const LENGTH: usize = PrefixID::LENGTH + TypeID::LENGTH;

    pub fn build(kind: Kind, type_id: TypeID) -> Self {
        TypeVertex { kind, type_id }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() != Self::LENGTH {
            return Err(EncodingError::UnexpectedLength { expected: Self::LENGTH, actual: bytes.len() });
        }
        let prefix = decode_prefix(bytes)?;
        let kind = Kind::from_prefix(prefix).ok_or(EncodingError::UnrecognisedPrefix { byte: bytes[0] })?;
        Ok(TypeVertex { kind, type_id: TypeID::from_bytes([bytes[1], bytes[2]]) })
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn type_id(&self) -> TypeID {
        self.type_id
    }

    pub fn to_array(&self) -> [u8; Self::LENGTH] {
        let [prefix] = self.kind.prefix().prefix_id().to_bytes();
        let [id_high, id_low] = self.type_id.to_bytes();
        [prefix, id_high, id_low]
    }

    pub fn build_prefix_for_kind(kind: Kind) -> StorageKey {
        prefix_key(Self::KEYSPACE, kind.prefix())
    }
}

impl Keyable for TypeVertex {
    const KEYSPACE: EncodingKeyspace = EncodingKeyspace::Schema;

    fn to_bytes(&self) -> Vec<u8> {
        self.to_array().to_vec()
    }
}

impl Prefixed for TypeVertex {
    fn prefix(&self) -> Prefix {
        self.kind.prefix()
    }
}

impl fmt::Debug for TypeVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeVertex[{:?}:{}]", self.kind, self.type_id.as_u16())
    }
}
