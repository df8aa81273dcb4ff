/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display, Formatter};

use crate::{error::EncodingError, graph::type_::property::TypeVertexPropertyEncoding, layout::infix::Infix};

/// The primitive domain of an attribute type's values. `Object` is reserved for the root attribute type,
/// which is polymorphic over every other value type and never holds values itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    Object,
    Boolean,
    Long,
    Double,
    String,
    DateTime,
}

impl ValueType {
    pub const LENGTH: usize = 1;

    pub const VALUED: [ValueType; 5] =
        [ValueType::Boolean, ValueType::Long, ValueType::Double, ValueType::String, ValueType::DateTime];

    pub const fn to_bytes(&self) -> [u8; Self::LENGTH] {
        match self {
            Self::Object => [0],
            Self::Boolean => [1],
            Self::Long => [2],
            Self::Double => [3],
            Self::String => [4],
            Self::DateTime => [5],
        }
    }

    pub fn from_bytes(bytes: [u8; Self::LENGTH]) -> Result<Self, EncodingError> {
        match bytes {
            [0] => Ok(Self::Object),
            [1] => Ok(Self::Boolean),
            [2] => Ok(Self::Long),
            [3] => Ok(Self::Double),
            [4] => Ok(Self::String),
            [5] => Ok(Self::DateTime),
            [byte] => Err(EncodingError::UnrecognisedValueType { byte }),
        }
    }

    /// Whether values of this type support equality-based uniqueness, and may therefore be used as keys.
    pub fn is_keyable(&self) -> bool {
        match self {
            Self::Boolean | Self::Long | Self::Double | Self::String | Self::DateTime => true,
            Self::Object => false,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Long => "long",
            Self::Double => "double",
            Self::String => "string",
            Self::DateTime => "datetime",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TypeVertexPropertyEncoding for ValueType {
    const INFIX: Infix = Infix::PropertyValueType;

    fn from_value_bytes(value: &[u8]) -> Result<Self, EncodingError> {
        let bytes: [u8; Self::LENGTH] = value
            .try_into()
            .map_err(|_| EncodingError::UnexpectedLength { expected: Self::LENGTH, actual: value.len() })?;
        Self::from_bytes(bytes)
    }

    fn to_value_bytes(&self) -> Option<Box<[u8]>> {
        Some(Box::from(self.to_bytes().as_slice()))
    }
}
