/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{str::Utf8Error, sync::Arc};

use error::typegraph_error;

use crate::{
    graph::type_::Kind,
    layout::prefix::Prefix,
    value::value_type::ValueType,
};

typegraph_error! {
    pub EncodingError(component = "Encoding", prefix = "ENC") {
        UnrecognisedValueType(1, "Unrecognised value type tag '{byte}'.", byte: u8),
        UnrecognisedPrefix(2, "Unrecognised key prefix '{byte}'.", byte: u8),
        UnexpectedPrefix(3, "Expected key prefix '{expected:?}' but found '{actual:?}'.", expected: Prefix, actual: Prefix),
        UnrecognisedInfix(4, "Unrecognised property infix '{byte}'.", byte: u8),
        UnexpectedLength(5, "Expected {expected} encoded bytes but found {actual}.", expected: usize, actual: usize),
        LabelDecode(6, "Failed to decode a type label.", ( source: Arc<bincode::ErrorKind> )),
        StringDecode(7, "Failed to decode a UTF-8 string value.", ( source: Utf8Error )),
        TypeIDsExhausted(8, "No more type ids are available for kind '{kind}'.", kind: Kind),
        ValueTypeWithoutValues(9, "Value type '{value_type}' has no value encoding.", value_type: ValueType),
        InvalidDateTime(10, "Encoded datetime ({seconds}s, {nanos}ns) is out of range.", seconds: i64, nanos: u32),
    }
}
