/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, RwLock},
};

use logger::result::ResultExt;
use tracing::debug;

use crate::{
    error::SnapshotError,
    isolation_manager::IsolationManager,
    key_value::{StorageKey, StorageValue},
    sequence_number::SequenceNumber,
    snapshot::{buffer::WriteBuffer, write::Write, ReadSnapshot, WriteSnapshot},
};

pub mod error;
mod isolation_manager;
pub mod key_value;
pub mod sequence_number;
pub mod snapshot;

pub(crate) type KeyValueMap = BTreeMap<StorageKey, StorageValue>;

#[derive(Debug)]
struct CommittedState {
    sequence_number: SequenceNumber,
    data: Arc<KeyValueMap>,
}

/// An in-memory ordered key-value store. Every commit publishes a new immutable version of the data;
/// snapshots hold on to the version that was current when they were opened.
#[derive(Debug)]
pub struct MVCCStorage {
    name: String,
    committed: RwLock<CommittedState>,
    isolation_manager: IsolationManager,
}

impl MVCCStorage {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Created storage '{}'", name);
        MVCCStorage {
            name,
            committed: RwLock::new(CommittedState {
                sequence_number: SequenceNumber::MIN,
                data: Arc::new(KeyValueMap::new()),
            }),
            isolation_manager: IsolationManager::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read_watermark(&self) -> SequenceNumber {
        self.committed.read().unwrap_or_log().sequence_number
    }

    pub fn open_snapshot_read(self: Arc<Self>) -> ReadSnapshot {
        let (sequence_number, data) = self.current_version();
        ReadSnapshot::new(sequence_number, data)
    }

    pub fn open_snapshot_write(self: Arc<Self>) -> WriteSnapshot {
        let (sequence_number, data) = {
            let committed = self.committed.read().unwrap_or_log();
            self.isolation_manager.opened(committed.sequence_number);
            (committed.sequence_number, committed.data.clone())
        };
        WriteSnapshot::new(self, sequence_number, data)
    }

    pub(crate) fn close_snapshot_write(&self, open_sequence_number: SequenceNumber) {
        self.isolation_manager.closed(open_sequence_number);
    }

    /// Number of commits whose written keys are still held for conflict detection.
    pub fn retained_commit_records(&self) -> usize {
        self.isolation_manager.retained_commits()
    }

    fn current_version(&self) -> (SequenceNumber, Arc<KeyValueMap>) {
        let committed = self.committed.read().unwrap_or_log();
        (committed.sequence_number, committed.data.clone())
    }

    pub(crate) fn commit(
        &self,
        open_sequence_number: SequenceNumber,
        buffer: WriteBuffer,
    ) -> Result<SequenceNumber, SnapshotError> {
        let mut committed = self.committed.write().unwrap_or_log();
        if buffer.is_empty() {
            return Ok(committed.sequence_number);
        }
        self.isolation_manager.validate_isolation(open_sequence_number, buffer.keys())?;

        let write_count = buffer.len();
        let keys: BTreeSet<StorageKey> = buffer.keys().cloned().collect();
        let mut data = KeyValueMap::clone(&committed.data);
        for (key, write) in buffer.into_writes() {
            match write {
                Write::Insert { value } => {
                    data.insert(key, value);
                }
                Write::Delete => {
                    data.remove(&key);
                }
            }
        }

        let sequence_number = committed.sequence_number.next();
        *committed = CommittedState { sequence_number, data: Arc::new(data) };
        self.isolation_manager.record_commit(sequence_number, keys);
        debug!("Storage '{}' committed {} writes at sequence number {}", self.name, write_count, sequence_number);
        Ok(sequence_number)
    }
}
