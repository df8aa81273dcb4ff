/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod storage {
    pub const KEYSPACE_SCHEMA_ID: u8 = 0x0;
    pub const KEYSPACE_DATA_ID: u8 = 0x1;
}

pub mod encoding {
    pub type TypeIDUInt = u16;

    /// Maximum number of UTF-8 bytes in a string attribute value.
    pub const STRING_MAX_LENGTH: usize = 255;
}
