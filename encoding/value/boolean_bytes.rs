/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[derive(Debug, Copy, Clone)]
pub struct BooleanBytes {
    bytes: [u8; Self::LENGTH],
}

impl BooleanBytes {
    pub const LENGTH: usize = 1;

    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn build(bool: bool) -> Self {
        Self { bytes: [bool as u8] }
    }

    pub fn as_bool(&self) -> bool {
        self.bytes[0] != 0
    }

    pub fn bytes(&self) -> [u8; Self::LENGTH] {
        self.bytes
    }
}
