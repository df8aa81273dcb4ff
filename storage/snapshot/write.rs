/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::key_value::StorageValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    // Insert KeyValue, replacing any committed value for the key.
    Insert { value: StorageValue },
    // Remove the key. A no-op at commit if the key was never committed.
    Delete,
}

impl Write {
    pub fn is_insert(&self) -> bool {
        matches!(self, Write::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Write::Delete)
    }

    pub fn value(&self) -> Option<&[u8]> {
        match self {
            Write::Insert { value } => Some(value),
            Write::Delete => None,
        }
    }
}
