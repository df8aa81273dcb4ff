/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;

use crate::error::EncodingError;

#[derive(Debug, Clone)]
pub struct StringBytes<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> StringBytes<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes: Cow::Borrowed(bytes) }
    }

    pub fn build(string: &str) -> StringBytes<'static> {
        StringBytes { bytes: Cow::Owned(string.as_bytes().to_vec()) }
    }

    pub fn as_str(&self) -> Result<&str, EncodingError> {
        std::str::from_utf8(&self.bytes).map_err(|source| EncodingError::StringDecode { source })
    }

    pub fn length(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
