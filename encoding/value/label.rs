/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use logger::result::ResultExt;
use serde::{Deserialize, Serialize};

use crate::{error::EncodingError, graph::type_::property::TypeVertexPropertyEncoding, layout::infix::Infix};

/// A type's name, optionally scoped (role types are scoped by their relation type: `scope:name`).
/// Equality, ordering and hashing use only the scoped name.
#[derive(Clone, Serialize, Deserialize)]
pub struct Label {
    name: Cow<'static, str>,
    scope: Option<Cow<'static, str>>,
    scoped_name: Cow<'static, str>,
}

impl Label {
    pub fn parse_from(string: &str) -> Label {
        match string.split_once(':') {
            Some((scope, name)) => Self::build_scoped(name, scope),
            None => Self::build(string),
        }
    }

    pub fn build(name: &str) -> Label {
        Label { name: Cow::Owned(name.to_owned()), scope: None, scoped_name: Cow::Owned(name.to_owned()) }
    }

    pub fn build_scoped(name: &str, scope: &str) -> Label {
        Label {
            name: Cow::Owned(name.to_owned()),
            scope: Some(Cow::Owned(scope.to_owned())),
            scoped_name: Cow::Owned(format!("{}:{}", scope, name)),
        }
    }

    pub const fn new_static(name: &'static str) -> Label {
        Label { name: Cow::Borrowed(name), scope: None, scoped_name: Cow::Borrowed(name) }
    }

    pub const fn new_static_scoped(name: &'static str, scope: &'static str, scoped_name: &'static str) -> Label {
        if name.len() + scope.len() + 1 != scoped_name.len() {
            panic!("Provided scoped name has a different length to (name+scope+1).");
        }
        Label { name: Cow::Borrowed(name), scope: Some(Cow::Borrowed(scope)), scoped_name: Cow::Borrowed(scoped_name) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn scoped_name(&self) -> &str {
        &self.scoped_name
    }
}

impl TypeVertexPropertyEncoding for Label {
    const INFIX: Infix = Infix::PropertyLabel;

    fn from_value_bytes(value: &[u8]) -> Result<Self, EncodingError> {
        bincode::deserialize(value).map_err(|error| EncodingError::LabelDecode { source: Arc::new(*error) })
    }

    fn to_value_bytes(&self) -> Option<Box<[u8]>> {
        let bytes = bincode::serialize(self).expect_or_log("Failed to serialise a type label");
        Some(bytes.into_boxed_slice())
    }
}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scoped_name.hash(state)
    }
}

impl Eq for Label {}

impl PartialEq<Self> for Label {
    fn eq(&self, other: &Self) -> bool {
        self.scoped_name == other.scoped_name
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.scoped_name.cmp(&other.scoped_name)
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scoped_name)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label[{}]", self.scoped_name)
    }
}
