/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::graph::type_::{vertex::TypeVertex, Kind};
use storage::snapshot::{ReadableSnapshot, WritableSnapshot};

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::thing_manager::ThingManager,
    type_::{
        attribute_type::AttributeType, entity_type::EntityType, relation_type::RelationType,
        type_manager::TypeManager, OwnerAPI, PlayerAPI, ThingTypeAPI, TypeAPI,
    },
    ConceptAPI,
};

macro_rules! with_thing_type {
    ($thing_type:ident, |$type_:ident| $expr:expr) => {
        match $thing_type {
            ThingType::Entity($type_) => $expr,
            ThingType::Relation($type_) => $expr,
            ThingType::Attribute($type_) => $expr,
        }
    };
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ThingType {
    Entity(EntityType),
    Relation(RelationType),
    Attribute(AttributeType),
}

impl ConceptAPI for ThingType {}

impl TypeAPI for ThingType {
    fn vertex(&self) -> TypeVertex {
        with_thing_type!(self, |type_| type_.vertex())
    }

    fn from_vertex(snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        match vertex.kind() {
            Kind::Entity => Ok(ThingType::Entity(EntityType::from_vertex(snapshot, vertex)?)),
            Kind::Relation => Ok(ThingType::Relation(RelationType::from_vertex(snapshot, vertex)?)),
            Kind::Attribute => Ok(ThingType::Attribute(AttributeType::from_vertex(snapshot, vertex)?)),
            Kind::Role => Err(ConceptReadError::TypeRootMismatch { expected: Kind::Entity, actual: Kind::Role }),
        }
    }

    fn related(&self, snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        match self {
            ThingType::Attribute(attribute_type) if vertex.kind() == Kind::Attribute => {
                Ok(ThingType::Attribute(attribute_type.related(snapshot, vertex)?))
            }
            _ => Self::from_vertex(snapshot, vertex),
        }
    }

    fn includes_subtype(&self, subtype: &Self) -> bool {
        match (self, subtype) {
            (ThingType::Attribute(attribute_type), ThingType::Attribute(subtype)) => {
                attribute_type.includes_subtype(subtype)
            }
            _ => true,
        }
    }

    fn set_supertype(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        supertype: Self,
    ) -> Result<(), ConceptWriteError> {
        match (*self, supertype) {
            (ThingType::Entity(type_), ThingType::Entity(supertype)) => {
                type_.set_supertype(snapshot, type_manager, supertype)
            }
            (ThingType::Relation(type_), ThingType::Relation(supertype)) => {
                type_.set_supertype(snapshot, type_manager, supertype)
            }
            (ThingType::Attribute(type_), ThingType::Attribute(supertype)) => {
                type_.set_supertype(snapshot, type_manager, supertype)
            }
            (type_, supertype) => Err(ConceptWriteError::SupertypeKindMismatch {
                label: type_.get_label(snapshot)?,
                kind: type_.kind(),
                supertype: supertype.get_label(snapshot)?,
                supertype_kind: supertype.kind(),
            }),
        }
    }

    fn delete(
        self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        thing_manager: &ThingManager,
    ) -> Result<(), ConceptWriteError> {
        with_thing_type!(self, |type_| type_.delete(snapshot, type_manager, thing_manager))
    }
}

impl ThingTypeAPI for ThingType {
    fn into_thing_type(self) -> ThingType {
        self
    }
}

impl OwnerAPI for ThingType {}

impl PlayerAPI for ThingType {}
