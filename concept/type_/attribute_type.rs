/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    fmt,
    hash::{Hash, Hasher},
    iter,
};

use encoding::{
    graph::type_::{vertex::TypeVertex, Kind},
    value::{value::Value, value_type::ValueType},
    Keyable,
};
use itertools::Either;
use resource::constants::encoding::STRING_MAX_LENGTH;
use storage::snapshot::{ReadableSnapshot, WritableSnapshot};
use tracing::trace;

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::{attribute::Attribute, thing_manager::ThingManager},
    type_::{
        owns::Owns,
        thing_type::ThingType,
        type_manager::{type_reader::TypeReader, TypeManager},
        OwnerAPI, PlayerAPI, ThingTypeAPI, TypeAPI,
    },
    ConceptAPI,
};

/// An attribute type seen through one value type.
///
/// Every attribute type other than the root is always viewed through the value type it was created
/// with. The root stores `Object` and may be viewed through any value type: each view sees the part
/// of the hierarchy holding that value type. Views of one vertex compare equal.
#[derive(Copy, Clone)]
pub struct AttributeType {
    vertex: TypeVertex,
    value_type: ValueType,
}

impl AttributeType {
    pub(crate) fn new(vertex: TypeVertex, value_type: ValueType) -> AttributeType {
        debug_assert_eq!(vertex.kind(), Kind::Attribute);
        AttributeType { vertex, value_type }
    }

    /// Wraps `vertex` as an attribute type of `value_type`. The root accepts any value type.
    pub fn from_vertex_with_value_type(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
        value_type: ValueType,
    ) -> Result<AttributeType, ConceptReadError> {
        let stored = Self::from_vertex(snapshot, vertex)?;
        if stored.value_type == value_type || stored.value_type == ValueType::Object {
            Ok(AttributeType::new(vertex, value_type))
        } else {
            Err(ConceptReadError::ValueTypeMismatch {
                label: stored.get_label(snapshot)?,
                expected: value_type,
                actual: stored.value_type,
            })
        }
    }

    pub fn get_value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_keyable(&self) -> bool {
        self.value_type.is_keyable()
    }

    pub fn as_boolean(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        self.as_value_type(snapshot, ValueType::Boolean)
    }

    pub fn as_long(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        self.as_value_type(snapshot, ValueType::Long)
    }

    pub fn as_double(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        self.as_value_type(snapshot, ValueType::Double)
    }

    pub fn as_string(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        self.as_value_type(snapshot, ValueType::String)
    }

    pub fn as_date_time(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        self.as_value_type(snapshot, ValueType::DateTime)
    }

    pub fn as_object(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        self.as_value_type(snapshot, ValueType::Object)
    }

    fn as_value_type(
        &self,
        snapshot: &impl ReadableSnapshot,
        value_type: ValueType,
    ) -> Result<AttributeType, ConceptReadError> {
        if self.value_type == value_type {
            Ok(*self)
        } else if self.is_root(snapshot)? {
            Ok(AttributeType::new(self.vertex, value_type))
        } else {
            Err(ConceptReadError::InvalidConceptCasting {
                label: self.get_label(snapshot)?,
                from: self.value_type,
                to: value_type,
            })
        }
    }

    pub fn put(
        &self,
        snapshot: &mut impl WritableSnapshot,
        thing_manager: &ThingManager,
        value: Value<'_>,
    ) -> Result<Attribute, ConceptWriteError> {
        self.put_with_inferred(snapshot, thing_manager, value, false)
    }

    /// Returns the attribute holding `value`, creating it if it does not exist yet.
    pub fn put_with_inferred(
        &self,
        snapshot: &mut impl WritableSnapshot,
        thing_manager: &ThingManager,
        value: Value<'_>,
        is_inferred: bool,
    ) -> Result<Attribute, ConceptWriteError> {
        self.validate_is_committed(snapshot)?;
        if self.is_abstract(snapshot)? {
            return Err(ConceptWriteError::AttributeTypeIsAbstract { label: self.get_label(snapshot)? });
        }
        if value.value_type() != self.value_type {
            return Err(ConceptWriteError::AttributeValueTypeMismatch {
                label: self.get_label(snapshot)?,
                expected: self.value_type,
                provided: value.value_type(),
            });
        }
        if let Some(string) = value.unwrap_string() {
            if string.len() > STRING_MAX_LENGTH {
                return Err(ConceptWriteError::IllegalStringSize {
                    label: self.get_label(snapshot)?,
                    length: string.len(),
                    max: STRING_MAX_LENGTH,
                });
            }
        }

        let attribute = thing_manager.put_attribute(snapshot, *self, value, is_inferred)?;
        // Only datetime attributes are promoted when re-put as explicit
        if self.value_type == ValueType::DateTime && !is_inferred && attribute.is_inferred(snapshot)? {
            thing_manager.set_inferred(snapshot, &attribute, false);
        }
        Ok(attribute)
    }

    pub fn get(
        &self,
        snapshot: &impl ReadableSnapshot,
        thing_manager: &ThingManager,
        value: Value<'_>,
    ) -> Result<Option<Attribute>, ConceptReadError> {
        if value.value_type() != self.value_type {
            return Ok(None);
        }
        thing_manager.get_attribute(snapshot, *self, value)
    }

    /// Attributes of this type and of all its subtypes.
    pub fn get_instances<'a, Snapshot: ReadableSnapshot>(
        &self,
        snapshot: &'a Snapshot,
        thing_manager: &'a ThingManager,
    ) -> impl Iterator<Item = Result<Attribute, ConceptReadError>> + 'a {
        self.get_subtypes(snapshot).flat_map(move |subtype| match subtype {
            Ok(subtype) => Either::Left(thing_manager.get_attributes_in(snapshot, subtype)),
            Err(error) => Either::Right(iter::once(Err(error))),
        })
    }

    pub fn get_owners_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Owns>, ConceptReadError> {
        TypeReader::get_capabilities_for_interface_declared::<Owns>(snapshot, *self)
    }

    /// Every type that may own this attribute type, declared or inherited.
    pub fn get_owners(&self, snapshot: &impl ReadableSnapshot) -> Result<HashMap<ThingType, Owns>, ConceptReadError> {
        TypeReader::get_capabilities_for_interface::<Owns>(snapshot, *self)
    }

    fn validate_is_committed(&self, snapshot: &impl ReadableSnapshot) -> Result<(), ConceptWriteError> {
        let key = self.vertex.to_storage_key();
        if !snapshot.contains(&key) {
            trace!("Rejected value for deleted attribute type {:?}", self.vertex);
            Err(ConceptWriteError::TypeDeleted { vertex: self.vertex })
        } else if snapshot.get_committed(&key).is_none() {
            trace!("Rejected value for uncommitted attribute type {:?}", self.vertex);
            Err(ConceptWriteError::TypeNotCommitted { label: self.get_label(snapshot)? })
        } else {
            Ok(())
        }
    }
}

impl ConceptAPI for AttributeType {}

impl TypeAPI for AttributeType {
    fn vertex(&self) -> TypeVertex {
        self.vertex
    }

    fn from_vertex(snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        TypeReader::check_kind(vertex, Kind::Attribute)?;
        let value_type = TypeReader::get_value_type(snapshot, vertex)?;
        Ok(AttributeType::new(vertex, value_type))
    }

    /// Reaching the root from a typed view keeps the view's value type.
    fn related(&self, snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        let related = Self::from_vertex(snapshot, vertex)?;
        if related.value_type == ValueType::Object {
            Ok(AttributeType::new(vertex, self.value_type))
        } else {
            Ok(related)
        }
    }

    fn includes_subtype(&self, subtype: &Self) -> bool {
        self.value_type == ValueType::Object || subtype.value_type == self.value_type
    }

    fn set_supertype(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        supertype: Self,
    ) -> Result<(), ConceptWriteError> {
        type_manager.set_attribute_type_supertype(snapshot, *self, supertype)
    }

    fn delete(
        self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        thing_manager: &ThingManager,
    ) -> Result<(), ConceptWriteError> {
        type_manager.delete_attribute_type(snapshot, thing_manager, self)
    }
}

impl ThingTypeAPI for AttributeType {
    fn into_thing_type(self) -> ThingType {
        ThingType::Attribute(self)
    }
}

impl OwnerAPI for AttributeType {}

impl PlayerAPI for AttributeType {}

impl PartialEq for AttributeType {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

impl Eq for AttributeType {}

impl Hash for AttributeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex.hash(state)
    }
}

impl PartialOrd for AttributeType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertex.cmp(&other.vertex)
    }
}

impl fmt::Debug for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttributeType[{:?} as {}]", self.vertex, self.value_type)
    }
}
