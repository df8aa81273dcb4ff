/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use storage::key_value::{KeyspaceId, StorageKey};

use crate::{
    error::EncodingError,
    layout::prefix::{Prefix, PrefixID},
};

pub mod error;
pub mod graph;
pub mod layout;
pub mod value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingKeyspace {
    Schema,
    Data,
}

impl EncodingKeyspace {
    pub const fn id(&self) -> KeyspaceId {
        match self {
            Self::Schema => KeyspaceId::SCHEMA,
            Self::Data => KeyspaceId::DATA,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Data => "data",
        }
    }
}

pub trait Keyable {
    const KEYSPACE: EncodingKeyspace;

    fn to_bytes(&self) -> Vec<u8>;

    fn to_storage_key(&self) -> StorageKey {
        StorageKey::new(Self::KEYSPACE.id(), self.to_bytes())
    }
}

pub trait Prefixed {
    fn prefix(&self) -> Prefix;
}

pub(crate) fn decode_prefix(bytes: &[u8]) -> Result<Prefix, EncodingError> {
    let byte = *bytes.first().ok_or(EncodingError::UnexpectedLength { expected: PrefixID::LENGTH, actual: 0 })?;
    Prefix::from_prefix_id(PrefixID::new(byte)).ok_or(EncodingError::UnrecognisedPrefix { byte })
}

pub(crate) fn prefix_key(keyspace: EncodingKeyspace, prefix: Prefix) -> StorageKey {
    StorageKey::new(keyspace.id(), prefix.prefix_id().to_bytes().to_vec())
}
