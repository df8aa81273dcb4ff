/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod boolean_bytes;
pub mod date_time_bytes;
pub mod double_bytes;
pub mod label;
pub mod long_bytes;
pub mod string_bytes;
pub mod value;
pub mod value_type;
