/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use error::typegraph_error;

use crate::sequence_number::SequenceNumber;

typegraph_error! {
    pub SnapshotError(component = "Snapshot", prefix = "SNP") {
        Conflict(
            1,
            "Snapshot opened at {open_sequence_number} conflicts with commit {conflicting_sequence_number}, which wrote {conflicting_keys} of the same key(s).",
            open_sequence_number: SequenceNumber,
            conflicting_sequence_number: SequenceNumber,
            conflicting_keys: usize
        ),
    }
}
