/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::Arc;

use itertools::{EitherOrBoth, Itertools};

use crate::{
    error::SnapshotError,
    key_value::{StorageKey, StorageValue},
    sequence_number::SequenceNumber,
    snapshot::buffer::WriteBuffer,
    KeyValueMap, MVCCStorage,
};

pub mod buffer;
pub mod write;

pub trait ReadableSnapshot {
    fn open_sequence_number(&self) -> SequenceNumber;

    fn get(&self, key: &StorageKey) -> Option<&[u8]>;

    fn contains(&self, key: &StorageKey) -> bool {
        self.get(key).is_some()
    }

    /// Ordered iteration over every visible key starting with `prefix`.
    fn iterate_prefix(&self, prefix: StorageKey) -> impl Iterator<Item = (&StorageKey, &[u8])>;

    /// Read the state committed before this snapshot opened, ignoring anything written through it.
    fn get_committed(&self, key: &StorageKey) -> Option<&[u8]>;
}

pub trait WritableSnapshot: ReadableSnapshot {
    fn put(&mut self, key: StorageKey) {
        self.put_val(key, StorageValue::default())
    }

    fn put_val(&mut self, key: StorageKey, value: impl Into<StorageValue>);

    fn delete(&mut self, key: StorageKey);
}

fn iterate_committed(data: &KeyValueMap, prefix: StorageKey) -> impl Iterator<Item = (&StorageKey, &[u8])> {
    data.range(prefix.clone()..).take_while(move |(key, _)| key.starts_with(&prefix)).map(|(key, value)| (key, &**value))
}

pub struct ReadSnapshot {
    open_sequence_number: SequenceNumber,
    data: Arc<KeyValueMap>,
}

impl ReadSnapshot {
    pub(crate) fn new(open_sequence_number: SequenceNumber, data: Arc<KeyValueMap>) -> Self {
        Self { open_sequence_number, data }
    }

    pub fn close_resources(self) {}
}

impl ReadableSnapshot for ReadSnapshot {
    fn open_sequence_number(&self) -> SequenceNumber {
        self.open_sequence_number
    }

    fn get(&self, key: &StorageKey) -> Option<&[u8]> {
        self.data.get(key).map(|value| &**value)
    }

    fn iterate_prefix(&self, prefix: StorageKey) -> impl Iterator<Item = (&StorageKey, &[u8])> {
        iterate_committed(&self.data, prefix)
    }

    fn get_committed(&self, key: &StorageKey) -> Option<&[u8]> {
        self.get(key)
    }
}

/// Unregisters a write snapshot from its storage when the snapshot is committed or dropped.
struct OpenWriteSnapshot {
    storage: Arc<MVCCStorage>,
    open_sequence_number: SequenceNumber,
}

impl Drop for OpenWriteSnapshot {
    fn drop(&mut self) {
        self.storage.close_snapshot_write(self.open_sequence_number);
    }
}

pub struct WriteSnapshot {
    registration: OpenWriteSnapshot,
    open_sequence_number: SequenceNumber,
    data: Arc<KeyValueMap>,
    buffer: WriteBuffer,
}

impl WriteSnapshot {
    pub(crate) fn new(storage: Arc<MVCCStorage>, open_sequence_number: SequenceNumber, data: Arc<KeyValueMap>) -> Self {
        let registration = OpenWriteSnapshot { storage, open_sequence_number };
        Self { registration, open_sequence_number, data, buffer: WriteBuffer::new() }
    }

    pub fn buffer(&self) -> &WriteBuffer {
        &self.buffer
    }

    pub fn commit(self) -> Result<SequenceNumber, SnapshotError> {
        self.registration.storage.commit(self.open_sequence_number, self.buffer)
    }

    pub fn close_resources(self) {}
}

impl ReadableSnapshot for WriteSnapshot {
    fn open_sequence_number(&self) -> SequenceNumber {
        self.open_sequence_number
    }

    fn get(&self, key: &StorageKey) -> Option<&[u8]> {
        match self.buffer.get(key) {
            Some(write) => write.value(),
            None => self.get_committed(key),
        }
    }

    fn iterate_prefix(&self, prefix: StorageKey) -> impl Iterator<Item = (&StorageKey, &[u8])> {
        let buffered = self.buffer.iterate_prefix(&prefix);
        iterate_committed(&self.data, prefix).merge_join_by(buffered, |(committed, _), (buffered, _)| {
            (*committed).cmp(*buffered)
        }).filter_map(|entry| match entry {
            EitherOrBoth::Left(committed) => Some(committed),
            EitherOrBoth::Right((key, write)) | EitherOrBoth::Both(_, (key, write)) => {
                write.value().map(|value| (key, value))
            }
        })
    }

    fn get_committed(&self, key: &StorageKey) -> Option<&[u8]> {
        self.data.get(key).map(|value| &**value)
    }
}

impl WritableSnapshot for WriteSnapshot {
    fn put_val(&mut self, key: StorageKey, value: impl Into<StorageValue>) {
        self.buffer.insert(key, value.into())
    }

    fn delete(&mut self, key: StorageKey) {
        self.buffer.delete(key)
    }
}
