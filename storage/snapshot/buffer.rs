/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{btree_map, BTreeMap};

use crate::{
    key_value::{StorageKey, StorageValue},
    snapshot::write::Write,
};

#[derive(Debug, Default)]
pub struct WriteBuffer {
    writes: BTreeMap<StorageKey, Write>,
}

impl WriteBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: StorageKey, value: StorageValue) {
        self.writes.insert(key, Write::Insert { value });
    }

    pub(crate) fn delete(&mut self, key: StorageKey) {
        self.writes.insert(key, Write::Delete);
    }

    pub(crate) fn get(&self, key: &StorageKey) -> Option<&Write> {
        self.writes.get(key)
    }

    pub(crate) fn iterate_prefix<'this>(
        &'this self,
        prefix: &StorageKey,
    ) -> impl Iterator<Item = (&'this StorageKey, &'this Write)> + 'this {
        let prefix = prefix.clone();
        self.writes.range(prefix.clone()..).take_while(move |(key, _)| key.starts_with(&prefix))
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub(crate) fn keys(&self) -> btree_map::Keys<'_, StorageKey, Write> {
        self.writes.keys()
    }

    pub(crate) fn into_writes(self) -> impl Iterator<Item = (StorageKey, Write)> {
        self.writes.into_iter()
    }
}
