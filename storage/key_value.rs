/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use resource::constants::storage::{KEYSPACE_DATA_ID, KEYSPACE_SCHEMA_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyspaceId(pub u8);

impl KeyspaceId {
    pub const SCHEMA: KeyspaceId = KeyspaceId(KEYSPACE_SCHEMA_ID);
    pub const DATA: KeyspaceId = KeyspaceId(KEYSPACE_DATA_ID);
}

// Ordered by keyspace first, then lexicographically by bytes
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageKey {
    keyspace_id: KeyspaceId,
    bytes: Box<[u8]>,
}

impl StorageKey {
    pub fn new(keyspace_id: KeyspaceId, bytes: impl Into<Box<[u8]>>) -> Self {
        Self { keyspace_id, bytes: bytes.into() }
    }

    pub fn keyspace_id(&self) -> KeyspaceId {
        self.keyspace_id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn starts_with(&self, prefix: &StorageKey) -> bool {
        self.keyspace_id == prefix.keyspace_id && self.bytes.starts_with(&prefix.bytes)
    }
}

impl fmt::Debug for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageKey({}: {:?})", self.keyspace_id.0, &self.bytes)
    }
}

impl<const N: usize> From<(KeyspaceId, [u8; N])> for StorageKey {
    fn from((keyspace_id, bytes): (KeyspaceId, [u8; N])) -> Self {
        StorageKey::new(keyspace_id, bytes.to_vec())
    }
}

pub type StorageValue = Box<[u8]>;
