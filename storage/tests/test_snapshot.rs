/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::Arc;

use storage::{
    key_value::{KeyspaceId, StorageKey},
    snapshot::{ReadableSnapshot, WritableSnapshot},
    MVCCStorage,
};
use test_utils::init_logging;

fn key(bytes: &[u8]) -> StorageKey {
    StorageKey::new(KeyspaceId::SCHEMA, bytes.to_vec())
}

#[test]
fn snapshot_buffered_put_get() {
    init_logging();
    let storage = Arc::new(MVCCStorage::new("storage"));

    let mut snapshot = storage.open_snapshot_write();
    let value_1: Box<[u8]> = Box::new([0, 0, 0, 0]);
    snapshot.put_val(key(&[0x0, 0x0, 0x1]), value_1.clone());
    snapshot.put(key(&[0x1, 0x0, 0x10]));
    snapshot.put(key(&[0x1, 0x0, 0xff]));
    snapshot.put(key(&[0x2, 0x0, 0xff]));

    assert_eq!(snapshot.get(&key(&[0x0, 0x0, 0x1])), Some(&*value_1));
    assert_eq!(snapshot.get(&key(&[0x1, 0x0, 0x10])), Some(&[][..]));
    assert_eq!(snapshot.get(&key(&[0xff, 0xff, 0xff])), None);
    assert!(snapshot.get_committed(&key(&[0x0, 0x0, 0x1])).is_none());
    snapshot.close_resources();
}

#[test]
fn snapshot_iterate_merges_buffer_over_committed() {
    init_logging();
    let storage = Arc::new(MVCCStorage::new("storage"));

    let mut snapshot = storage.clone().open_snapshot_write();
    snapshot.put(key(&[0x1, 0x0, 0x1]));
    snapshot.put(key(&[0x1, 0x0, 0x3]));
    snapshot.put(key(&[0x1, 0x0, 0x5]));
    snapshot.put(key(&[0x2, 0x0, 0x1]));
    snapshot.commit().unwrap();

    let mut snapshot = storage.clone().open_snapshot_write();
    snapshot.put_val(key(&[0x1, 0x0, 0x2]), vec![7]);
    snapshot.put_val(key(&[0x1, 0x0, 0x3]), vec![8]);
    snapshot.delete(key(&[0x1, 0x0, 0x5]));

    let visible: Vec<(Vec<u8>, Vec<u8>)> = snapshot
        .iterate_prefix(key(&[0x1, 0x0]))
        .map(|(key, value)| (key.bytes().to_vec(), value.to_vec()))
        .collect();
    assert_eq!(
        visible,
        vec![(vec![0x1, 0x0, 0x1], vec![]), (vec![0x1, 0x0, 0x2], vec![7]), (vec![0x1, 0x0, 0x3], vec![8]),]
    );
}

#[test]
fn snapshot_prefix_does_not_cross_keyspaces() {
    init_logging();
    let storage = Arc::new(MVCCStorage::new("storage"));

    let mut snapshot = storage.clone().open_snapshot_write();
    snapshot.put(key(&[0x1, 0x1]));
    snapshot.put(StorageKey::new(KeyspaceId::DATA, vec![0x1, 0x2]));
    snapshot.commit().unwrap();

    let snapshot = storage.open_snapshot_read();
    assert_eq!(snapshot.iterate_prefix(key(&[0x1])).count(), 1);
    assert_eq!(snapshot.iterate_prefix(StorageKey::new(KeyspaceId::DATA, vec![0x1])).count(), 1);
}

#[test]
fn snapshot_reads_are_isolated_from_later_commits() {
    init_logging();
    let storage = Arc::new(MVCCStorage::new("storage"));

    let mut snapshot = storage.clone().open_snapshot_write();
    snapshot.put_val(key(&[0x5]), vec![1]);
    let first = snapshot.commit().unwrap();

    let reader = storage.clone().open_snapshot_read();
    assert_eq!(reader.open_sequence_number(), first);

    let mut snapshot = storage.clone().open_snapshot_write();
    snapshot.put_val(key(&[0x5]), vec![2]);
    snapshot.put(key(&[0x6]));
    let second = snapshot.commit().unwrap();
    assert!(second > first);

    assert_eq!(reader.get(&key(&[0x5])), Some(&[1u8][..]));
    assert!(!reader.contains(&key(&[0x6])));

    let reader = storage.open_snapshot_read();
    assert_eq!(reader.get(&key(&[0x5])), Some(&[2u8][..]));
    assert!(reader.contains(&key(&[0x6])));
}
