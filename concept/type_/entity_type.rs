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
        thing_type::ThingType, type_manager::type_reader::TypeReader, type_manager::TypeManager, OwnerAPI,
        PlayerAPI, ThingTypeAPI, TypeAPI,
    },
    ConceptAPI,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EntityType {
    vertex: TypeVertex,
}

impl EntityType {
    pub(crate) fn new(vertex: TypeVertex) -> EntityType {
        debug_assert_eq!(vertex.kind(), Kind::Entity);
        EntityType { vertex }
    }
}

impl ConceptAPI for EntityType {}

impl TypeAPI for EntityType {
    fn vertex(&self) -> TypeVertex {
        self.vertex
    }

    fn from_vertex(_snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        TypeReader::check_kind(vertex, Kind::Entity)?;
        Ok(EntityType::new(vertex))
    }

    fn delete(
        self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        _thing_manager: &ThingManager,
    ) -> Result<(), ConceptWriteError> {
        type_manager.delete_entity_type(snapshot, self)
    }
}

impl ThingTypeAPI for EntityType {
    fn into_thing_type(self) -> ThingType {
        ThingType::Entity(self)
    }
}

impl OwnerAPI for EntityType {}

impl PlayerAPI for EntityType {}
