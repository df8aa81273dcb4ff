/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{HashMap, HashSet};

use encoding::graph::type_::{vertex::TypeVertex, Kind};
use storage::snapshot::{ReadableSnapshot, WritableSnapshot};

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::thing_manager::ThingManager,
    type_::{
        plays::Plays,
        relates::Relates,
        relation_type::RelationType,
        thing_type::ThingType,
        type_manager::{type_reader::TypeReader, TypeManager},
        Capability, TypeAPI,
    },
    ConceptAPI,
};

/// A role is always scoped by the relation type that relates it: its label is `<relation>:<role>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RoleType {
    vertex: TypeVertex,
}

impl RoleType {
    pub(crate) fn new(vertex: TypeVertex) -> RoleType {
        debug_assert_eq!(vertex.kind(), Kind::Role);
        RoleType { vertex }
    }

    pub fn get_relates(&self, snapshot: &impl ReadableSnapshot) -> Result<Relates, ConceptReadError> {
        let relates = TypeReader::get_capabilities_for_interface_declared::<Relates>(snapshot, *self)?;
        match relates.into_iter().next() {
            Some(relates) => Ok(relates),
            None => Err(ConceptReadError::CorruptRoleWithoutRelation { label: self.get_label(snapshot)? }),
        }
    }

    pub fn get_relation_type(&self, snapshot: &impl ReadableSnapshot) -> Result<RelationType, ConceptReadError> {
        Ok(self.get_relates(snapshot)?.object())
    }

    pub fn get_players_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Plays>, ConceptReadError> {
        TypeReader::get_capabilities_for_interface_declared::<Plays>(snapshot, *self)
    }

    /// Every type that may play this role, declared or inherited.
    pub fn get_players(&self, snapshot: &impl ReadableSnapshot) -> Result<HashMap<ThingType, Plays>, ConceptReadError> {
        TypeReader::get_capabilities_for_interface::<Plays>(snapshot, *self)
    }
}

impl ConceptAPI for RoleType {}

impl TypeAPI for RoleType {
    fn vertex(&self) -> TypeVertex {
        self.vertex
    }

    fn from_vertex(_snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        TypeReader::check_kind(vertex, Kind::Role)?;
        Ok(RoleType::new(vertex))
    }

    fn delete(
        self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        _thing_manager: &ThingManager,
    ) -> Result<(), ConceptWriteError> {
        type_manager.delete_role_type(snapshot, self)
    }
}
