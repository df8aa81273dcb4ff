/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use encoding::graph::type_::{vertex::TypeVertex, Kind};
use storage::snapshot::{ReadableSnapshot, WritableSnapshot};

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::thing_manager::ThingManager,
    type_::{
        relates::Relates,
        role_type::RoleType,
        thing_type::ThingType,
        type_manager::{type_reader::TypeReader, TypeManager},
        OwnerAPI, PlayerAPI, ThingTypeAPI, TypeAPI,
    },
    ConceptAPI,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RelationType {
    vertex: TypeVertex,
}

impl RelationType {
    pub(crate) fn new(vertex: TypeVertex) -> RelationType {
        debug_assert_eq!(vertex.kind(), Kind::Relation);
        RelationType { vertex }
    }

    /// Creates the role type `<relation>:<name>` and makes this relation type relate it.
    pub fn create_relates(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        name: &str,
    ) -> Result<RoleType, ConceptWriteError> {
        type_manager.create_role_type(snapshot, *self, name)
    }

    pub fn get_relates_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Relates>, ConceptReadError> {
        TypeReader::get_capabilities_declared::<Relates>(snapshot, *self)
    }

    /// Roles related here or by any supertype.
    pub fn get_relates(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Relates>, ConceptReadError> {
        TypeReader::get_capabilities::<Relates>(snapshot, *self)
    }

    pub fn get_relates_role(
        &self,
        snapshot: &impl ReadableSnapshot,
        name: &str,
    ) -> Result<Option<RoleType>, ConceptReadError> {
        for relates in self.get_relates(snapshot)? {
            if relates.role().get_label(snapshot)?.name() == name {
                return Ok(Some(relates.role()));
            }
        }
        Ok(None)
    }
}

impl ConceptAPI for RelationType {}

impl TypeAPI for RelationType {
    fn vertex(&self) -> TypeVertex {
        self.vertex
    }

    fn from_vertex(_snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        TypeReader::check_kind(vertex, Kind::Relation)?;
        Ok(RelationType::new(vertex))
    }

    fn delete(
        self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        _thing_manager: &ThingManager,
    ) -> Result<(), ConceptWriteError> {
        type_manager.delete_relation_type(snapshot, self)
    }
}

impl ThingTypeAPI for RelationType {
    fn into_thing_type(self) -> ThingType {
        ThingType::Relation(self)
    }
}

impl OwnerAPI for RelationType {}

impl PlayerAPI for RelationType {}
