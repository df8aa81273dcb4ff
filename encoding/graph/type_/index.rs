/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{
    layout::prefix::Prefix,
    value::{label::Label, string_bytes::StringBytes},
    EncodingKeyspace, Keyable, Prefixed,
};

/// `[index prefix][scoped label]` mapping a label to its type vertex. The single place label uniqueness is decided.
#[derive(Debug, Clone)]
pub struct LabelToTypeVertexIndex {
    label: Label,
}

impl LabelToTypeVertexIndex {
    pub fn build(label: &Label) -> Self {
        LabelToTypeVertexIndex { label: label.clone() }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl Keyable for LabelToTypeVertexIndex {
    const KEYSPACE: EncodingKeyspace = EncodingKeyspace::Schema;

    fn to_bytes(&self) -> Vec<u8> {
        let label_bytes = StringBytes::build(self.label.scoped_name());
        let mut bytes = Prefix::IndexLabelToType.prefix_id().to_bytes().to_vec();
        bytes.extend_from_slice(label_bytes.bytes());
        bytes
    }
}

impl Prefixed for LabelToTypeVertexIndex {
    fn prefix(&self) -> Prefix {
        Prefix::IndexLabelToType
    }
}
