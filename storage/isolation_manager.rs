/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::RwLock,
};

use logger::result::ResultExt;
use tracing::trace;

use crate::{error::SnapshotError, key_value::StorageKey, sequence_number::SequenceNumber};

#[derive(Debug)]
pub(crate) struct CommitRecord {
    sequence_number: SequenceNumber,
    keys: BTreeSet<StorageKey>,
}

/// Keeps the key sets of recent commits for as long as an open write snapshot may still conflict with them.
///
/// Lock order: `commits` before `open_snapshots`.
#[derive(Debug, Default)]
pub(crate) struct IsolationManager {
    commits: RwLock<Vec<CommitRecord>>,
    open_snapshots: RwLock<BTreeMap<SequenceNumber, usize>>,
}

impl IsolationManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Must be called while the storage's committed state is locked, so no commit lands in between.
    pub(crate) fn opened(&self, open_sequence_number: SequenceNumber) {
        *self.open_snapshots.write().unwrap_or_log().entry(open_sequence_number).or_default() += 1;
    }

    pub(crate) fn closed(&self, open_sequence_number: SequenceNumber) {
        let mut commits = self.commits.write().unwrap_or_log();
        let mut open_snapshots = self.open_snapshots.write().unwrap_or_log();
        if let Some(count) = open_snapshots.get_mut(&open_sequence_number) {
            *count -= 1;
            if *count == 0 {
                open_snapshots.remove(&open_sequence_number);
            }
        }
        Self::prune(&mut commits, &open_snapshots);
    }

    /// Fails if any commit after `open_sequence_number` wrote one of `keys`.
    pub(crate) fn validate_isolation<'a>(
        &self,
        open_sequence_number: SequenceNumber,
        keys: impl Iterator<Item = &'a StorageKey> + Clone,
    ) -> Result<(), SnapshotError> {
        let commits = self.commits.read().unwrap_or_log();
        let concurrent = commits.iter().rev().take_while(|record| record.sequence_number > open_sequence_number);
        for record in concurrent {
            let conflicting_keys = keys.clone().filter(|key| record.keys.contains(*key)).count();
            if conflicting_keys > 0 {
                return Err(SnapshotError::Conflict {
                    open_sequence_number,
                    conflicting_sequence_number: record.sequence_number,
                    conflicting_keys,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn record_commit(&self, sequence_number: SequenceNumber, keys: BTreeSet<StorageKey>) {
        let mut commits = self.commits.write().unwrap_or_log();
        commits.push(CommitRecord { sequence_number, keys });
        let open_snapshots = self.open_snapshots.read().unwrap_or_log();
        Self::prune(&mut commits, &open_snapshots);
    }

    pub(crate) fn retained_commits(&self) -> usize {
        self.commits.read().unwrap_or_log().len()
    }

    /// Drops every record no open snapshot can conflict with. Snapshots opened later start at or after
    /// the newest record, so with nothing open all records go.
    fn prune(commits: &mut Vec<CommitRecord>, open_snapshots: &BTreeMap<SequenceNumber, usize>) {
        let before = commits.len();
        match open_snapshots.keys().next() {
            Some(oldest_open) => commits.retain(|record| record.sequence_number > *oldest_open),
            None => commits.clear(),
        }
        if commits.len() != before {
            trace!("Pruned {} commit records, {} retained", before - commits.len(), commits.len());
        }
    }
}
