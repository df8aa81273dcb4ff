/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chrono::{DateTime, NaiveDateTime};

use crate::{error::EncodingError, value::long_bytes::LongBytes};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DateTimeBytes {
    bytes: [u8; Self::LENGTH],
}

impl DateTimeBytes {
    const TIMESTAMP_LENGTH: usize = LongBytes::LENGTH;
    const NANOS_LENGTH: usize = u32::BITS as usize / 8;
    pub const LENGTH: usize = Self::TIMESTAMP_LENGTH + Self::NANOS_LENGTH;

    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn build(date_time: NaiveDateTime) -> Self {
        let date_time = date_time.and_utc();
        let mut bytes = [0; Self::LENGTH];
        bytes[..Self::TIMESTAMP_LENGTH].copy_from_slice(&LongBytes::build(date_time.timestamp()).bytes());
        bytes[Self::TIMESTAMP_LENGTH..].copy_from_slice(&date_time.timestamp_subsec_nanos().to_be_bytes());
        Self { bytes }
    }

    pub fn as_naive_date_time(&self) -> Result<NaiveDateTime, EncodingError> {
        let mut seconds = [0; Self::TIMESTAMP_LENGTH];
        seconds.copy_from_slice(&self.bytes[..Self::TIMESTAMP_LENGTH]);
        let mut nanos = [0; Self::NANOS_LENGTH];
        nanos.copy_from_slice(&self.bytes[Self::TIMESTAMP_LENGTH..]);
        let seconds = LongBytes::new(seconds).as_i64();
        let nanos = u32::from_be_bytes(nanos);
        DateTime::from_timestamp(seconds, nanos)
            .map(|date_time| date_time.naive_utc())
            .ok_or(EncodingError::InvalidDateTime { seconds, nanos })
    }

    pub fn bytes(&self) -> [u8; Self::LENGTH] {
        self.bytes
    }
}
