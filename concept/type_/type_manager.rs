/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::Arc;

use encoding::{
    graph::type_::{vertex::TypeVertex, vertex_generator::TypeVertexGenerator, Kind},
    value::{label::Label, value_type::ValueType},
};
use storage::{
    snapshot::{ReadableSnapshot, WritableSnapshot},
    MVCCStorage,
};
use tracing::debug;

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::thing_manager::ThingManager,
    type_::{
        annotation::{AnnotationAbstract, AnnotationKey},
        attribute_type::AttributeType,
        entity_type::EntityType,
        owns::Owns,
        plays::Plays,
        relates::Relates,
        relation_type::RelationType,
        role_type::RoleType,
        thing_type::ThingType,
        type_manager::{
            type_reader::TypeReader, type_writer::TypeWriter,
            validation::operation_time_validation::OperationTimeValidation,
        },
        Capability, EdgeOverride, OwnerAPI, PlayerAPI, ThingTypeAPI, TypeAPI,
    },
};

pub mod type_reader;
pub mod type_writer;
pub mod validation;

/// Entry point for creating, finding and changing types.
///
/// Holds no schema state of its own: everything is read from and written to the snapshot passed in.
/// Every mutation runs its operation-time checks before writing anything.
pub struct TypeManager {
    vertex_generator: Arc<TypeVertexGenerator>,
}

impl TypeManager {
    pub fn new(vertex_generator: Arc<TypeVertexGenerator>) -> Self {
        TypeManager { vertex_generator }
    }

    /// Creates and commits the root of each kind, unless a previous call already did.
    pub fn initialise_types(
        storage: Arc<MVCCStorage>,
        vertex_generator: Arc<TypeVertexGenerator>,
    ) -> Result<(), ConceptWriteError> {
        let mut snapshot = storage.open_snapshot_write();
        if TypeReader::get_labelled_type_vertex(&snapshot, &Kind::Entity.root_label())?.is_some() {
            return Ok(());
        }
        let type_manager = TypeManager::new(vertex_generator);
        type_manager.create_root_type(&mut snapshot, Kind::Entity)?;
        let root_relation = type_manager.create_root_type(&mut snapshot, Kind::Relation)?;
        let root_attribute = type_manager.create_root_type(&mut snapshot, Kind::Attribute)?;
        TypeWriter::storage_put_type_vertex_property(&mut snapshot, root_attribute, ValueType::Object);
        let root_role = type_manager.create_root_type(&mut snapshot, Kind::Role)?;
        TypeWriter::storage_put_edge(
            &mut snapshot,
            Relates::new(RelationType::new(root_relation), RoleType::new(root_role)),
        );
        let sequence_number = snapshot.commit()?;
        debug!("Initialised root types at sequence number {}", sequence_number);
        Ok(())
    }

    fn create_root_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        kind: Kind,
    ) -> Result<TypeVertex, ConceptWriteError> {
        let vertex = self.create_type_vertex(snapshot, kind, &kind.root_label())?;
        TypeWriter::storage_put_type_vertex_property(snapshot, vertex, AnnotationAbstract);
        Ok(vertex)
    }

    fn create_type_vertex(
        &self,
        snapshot: &mut impl WritableSnapshot,
        kind: Kind,
        label: &Label,
    ) -> Result<TypeVertex, ConceptWriteError> {
        OperationTimeValidation::validate_label_uniqueness(snapshot, label)?;
        let vertex = self.vertex_generator.create_type_vertex(snapshot, kind)?;
        TypeWriter::storage_put_label(snapshot, vertex, label);
        Ok(vertex)
    }

    pub fn create_entity_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        label: &Label,
    ) -> Result<EntityType, ConceptWriteError> {
        let root = self.get_root_entity_type(snapshot)?;
        let entity_type = EntityType::new(self.create_type_vertex(snapshot, Kind::Entity, label)?);
        TypeWriter::storage_put_supertype(snapshot, entity_type, root);
        debug!("Created entity type '{}'", label);
        Ok(entity_type)
    }

    pub fn create_relation_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        label: &Label,
    ) -> Result<RelationType, ConceptWriteError> {
        let root = self.get_root_relation_type(snapshot)?;
        let relation_type = RelationType::new(self.create_type_vertex(snapshot, Kind::Relation, label)?);
        TypeWriter::storage_put_supertype(snapshot, relation_type, root);
        debug!("Created relation type '{}'", label);
        Ok(relation_type)
    }

    /// The value type is fixed for the lifetime of the type. `Object` is reserved for the root.
    pub fn create_attribute_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        label: &Label,
        value_type: ValueType,
    ) -> Result<AttributeType, ConceptWriteError> {
        OperationTimeValidation::validate_value_type_is_not_reserved(label, value_type)?;
        let root = self.get_root_attribute_type(snapshot)?;
        let vertex = self.create_type_vertex(snapshot, Kind::Attribute, label)?;
        TypeWriter::storage_put_type_vertex_property(snapshot, vertex, value_type);
        let attribute_type = AttributeType::new(vertex, value_type);
        TypeWriter::storage_put_supertype(snapshot, attribute_type, root);
        debug!("Created attribute type '{}' with value type '{}'", label, value_type);
        Ok(attribute_type)
    }

    pub(crate) fn create_role_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        relation_type: RelationType,
        name: &str,
    ) -> Result<RoleType, ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, relation_type)?;
        let relation_label = relation_type.get_label(snapshot)?;
        let label = Label::build_scoped(name, relation_label.scoped_name());
        let root = self.get_root_role_type(snapshot)?;
        let role_type = RoleType::new(self.create_type_vertex(snapshot, Kind::Role, &label)?);
        TypeWriter::storage_put_supertype(snapshot, role_type, root);
        TypeWriter::storage_put_edge(snapshot, Relates::new(relation_type, role_type));
        debug!("Created role type '{}'", label);
        Ok(role_type)
    }

    pub fn get_entity_type(
        &self,
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<Option<EntityType>, ConceptReadError> {
        TypeReader::get_labelled_type(snapshot, label, Kind::Entity)
    }

    pub fn get_relation_type(
        &self,
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<Option<RelationType>, ConceptReadError> {
        TypeReader::get_labelled_type(snapshot, label, Kind::Relation)
    }

    pub fn get_attribute_type(
        &self,
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<Option<AttributeType>, ConceptReadError> {
        TypeReader::get_labelled_type(snapshot, label, Kind::Attribute)
    }

    /// Role types are found by their scoped label, `<relation>:<role>`.
    pub fn get_role_type(
        &self,
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<Option<RoleType>, ConceptReadError> {
        TypeReader::get_labelled_type(snapshot, label, Kind::Role)
    }

    pub fn get_thing_type(
        &self,
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<Option<ThingType>, ConceptReadError> {
        match TypeReader::get_labelled_type_vertex(snapshot, label)? {
            Some(vertex) if vertex.kind() != Kind::Role => Ok(Some(ThingType::from_vertex(snapshot, vertex)?)),
            _ => Ok(None),
        }
    }

    pub fn get_root_entity_type(&self, snapshot: &impl ReadableSnapshot) -> Result<EntityType, ConceptReadError> {
        Self::get_root_type(snapshot, Kind::Entity)
    }

    pub fn get_root_relation_type(&self, snapshot: &impl ReadableSnapshot) -> Result<RelationType, ConceptReadError> {
        Self::get_root_type(snapshot, Kind::Relation)
    }

    /// The root attribute type, viewed through its stored `Object` value type.
    pub fn get_root_attribute_type(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        Self::get_root_type(snapshot, Kind::Attribute)
    }

    pub fn get_root_role_type(&self, snapshot: &impl ReadableSnapshot) -> Result<RoleType, ConceptReadError> {
        Self::get_root_type(snapshot, Kind::Role)
    }

    fn get_root_type<T: TypeAPI>(snapshot: &impl ReadableSnapshot, kind: Kind) -> Result<T, ConceptReadError> {
        TypeReader::get_labelled_type(snapshot, &kind.root_label(), kind)?
            .ok_or(ConceptReadError::CorruptMissingRootType { kind })
    }

    pub fn get_entity_types(&self, snapshot: &impl ReadableSnapshot) -> Result<Vec<EntityType>, ConceptReadError> {
        Self::get_types(snapshot, Kind::Entity)
    }

    pub fn get_relation_types(&self, snapshot: &impl ReadableSnapshot) -> Result<Vec<RelationType>, ConceptReadError> {
        Self::get_types(snapshot, Kind::Relation)
    }

    pub fn get_attribute_types(
        &self,
        snapshot: &impl ReadableSnapshot,
    ) -> Result<Vec<AttributeType>, ConceptReadError> {
        Self::get_types(snapshot, Kind::Attribute)
    }

    pub fn get_role_types(&self, snapshot: &impl ReadableSnapshot) -> Result<Vec<RoleType>, ConceptReadError> {
        Self::get_types(snapshot, Kind::Role)
    }

    fn get_types<T: TypeAPI>(snapshot: &impl ReadableSnapshot, kind: Kind) -> Result<Vec<T>, ConceptReadError> {
        TypeReader::get_type_vertices(snapshot, kind)?
            .into_iter()
            .map(|vertex| T::from_vertex(snapshot, vertex))
            .collect()
    }

    pub(crate) fn set_label<T: TypeAPI>(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_: T,
        label: &Label,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, type_)?;
        let previous = type_.get_label(snapshot)?;
        if previous == *label {
            return Ok(());
        }
        OperationTimeValidation::validate_label_uniqueness(snapshot, label)?;
        TypeWriter::storage_delete_label(snapshot, type_.vertex())?;
        TypeWriter::storage_put_label(snapshot, type_.vertex(), label);
        debug!("Relabelled type '{}' to '{}'", previous, label);
        Ok(())
    }

    pub(crate) fn set_abstract<T: TypeAPI>(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_: T,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, type_)?;
        TypeWriter::storage_put_type_vertex_property(snapshot, type_.vertex(), AnnotationAbstract);
        debug!("Set type '{}' abstract", type_.get_label(snapshot)?);
        Ok(())
    }

    pub(crate) fn unset_abstract<T: TypeAPI>(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_: T,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, type_)?;
        OperationTimeValidation::validate_type_can_be_concrete(snapshot, type_)?;
        TypeWriter::storage_delete_type_vertex_property::<AnnotationAbstract>(snapshot, type_.vertex());
        debug!("Unset abstract on type '{}'", type_.get_label(snapshot)?);
        Ok(())
    }

    pub(crate) fn set_supertype<T: TypeAPI>(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_: T,
        supertype: T,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, type_)?;
        OperationTimeValidation::validate_supertype_is_not_self(snapshot, type_, supertype)?;
        OperationTimeValidation::validate_supertype_kind(snapshot, type_, supertype)?;
        OperationTimeValidation::validate_supertype_does_not_create_cycle(snapshot, type_, supertype)?;
        self.replace_supertype(snapshot, type_, supertype)
    }

    /// Checked in order: root, value type (a root supertype accepts any), self, abstractness, cycle.
    pub(crate) fn set_attribute_type_supertype(
        &self,
        snapshot: &mut impl WritableSnapshot,
        attribute_type: AttributeType,
        supertype: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, attribute_type)?;
        OperationTimeValidation::validate_attribute_supertype_value_type(snapshot, attribute_type, supertype)?;
        OperationTimeValidation::validate_supertype_is_not_self(snapshot, attribute_type, supertype)?;
        OperationTimeValidation::validate_attribute_supertype_is_abstract(snapshot, attribute_type, supertype)?;
        OperationTimeValidation::validate_supertype_does_not_create_cycle(snapshot, attribute_type, supertype)?;
        self.replace_supertype(snapshot, attribute_type, supertype)
    }

    fn replace_supertype<T: TypeAPI>(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_: T,
        supertype: T,
    ) -> Result<(), ConceptWriteError> {
        TypeWriter::storage_may_delete_supertype(snapshot, type_)?;
        TypeWriter::storage_put_supertype(snapshot, type_, supertype);
        debug!("Set supertype of '{}' to '{}'", type_.get_label(snapshot)?, supertype.get_label(snapshot)?);
        Ok(())
    }

    /// Declares (or redeclares) that `owner` owns `attribute_type`, replacing any override and key
    /// flag previously stored on the edge.
    pub(crate) fn set_owns(
        &self,
        snapshot: &mut impl WritableSnapshot,
        owner: ThingType,
        attribute_type: AttributeType,
        overridden: Option<AttributeType>,
        is_key: bool,
    ) -> Result<Owns, ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, owner)?;
        if is_key {
            OperationTimeValidation::validate_key_is_keyable(snapshot, owner, attribute_type)?;
        }
        if let Some(overridden) = overridden {
            OperationTimeValidation::validate_overridden_interface_is_supertype::<Owns>(
                snapshot,
                owner,
                attribute_type,
                overridden,
            )?;
            OperationTimeValidation::validate_overridden_interface_is_inherited::<Owns>(snapshot, owner, overridden)?;
        }

        let owns = Owns::new(owner, attribute_type);
        TypeWriter::storage_put_edge(snapshot, owns);
        Self::storage_set_override(snapshot, owns, overridden);
        if is_key {
            TypeWriter::storage_put_type_edge_property(snapshot, owns.canonical_edge(), AnnotationKey);
        } else {
            TypeWriter::storage_delete_type_edge_property::<AnnotationKey>(snapshot, owns.canonical_edge());
        }
        debug!(
            "Set '{}' owns '{}' (key: {})",
            owner.get_label(snapshot)?,
            attribute_type.get_label(snapshot)?,
            is_key
        );
        Ok(owns)
    }

    pub(crate) fn unset_owns(
        &self,
        snapshot: &mut impl WritableSnapshot,
        owner: ThingType,
        attribute_type: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, owner)?;
        let owns = Owns::new(owner, attribute_type);
        OperationTimeValidation::validate_capability_is_declared(snapshot, owns)?;
        TypeWriter::storage_delete_edge(snapshot, owns);
        debug!("Unset '{}' owns '{}'", owner.get_label(snapshot)?, attribute_type.get_label(snapshot)?);
        Ok(())
    }

    pub(crate) fn set_plays(
        &self,
        snapshot: &mut impl WritableSnapshot,
        player: ThingType,
        role_type: RoleType,
        overridden: Option<RoleType>,
    ) -> Result<Plays, ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, player)?;
        if let Some(overridden) = overridden {
            OperationTimeValidation::validate_overridden_interface_is_supertype::<Plays>(
                snapshot, player, role_type, overridden,
            )?;
            OperationTimeValidation::validate_overridden_interface_is_inherited::<Plays>(snapshot, player, overridden)?;
        }

        let plays = Plays::new(player, role_type);
        TypeWriter::storage_put_edge(snapshot, plays);
        Self::storage_set_override(snapshot, plays, overridden);
        debug!("Set '{}' plays '{}'", player.get_label(snapshot)?, role_type.get_label(snapshot)?);
        Ok(plays)
    }

    pub(crate) fn unset_plays(
        &self,
        snapshot: &mut impl WritableSnapshot,
        player: ThingType,
        role_type: RoleType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, player)?;
        let plays = Plays::new(player, role_type);
        OperationTimeValidation::validate_capability_is_declared(snapshot, plays)?;
        TypeWriter::storage_delete_edge(snapshot, plays);
        debug!("Unset '{}' plays '{}'", player.get_label(snapshot)?, role_type.get_label(snapshot)?);
        Ok(())
    }

    fn storage_set_override<CAP: Capability>(
        snapshot: &mut impl WritableSnapshot,
        capability: CAP,
        overridden: Option<CAP::InterfaceType>,
    ) {
        match overridden {
            Some(overridden) => TypeWriter::storage_put_type_edge_property(
                snapshot,
                capability.canonical_edge(),
                EdgeOverride::new(overridden.vertex()),
            ),
            None => TypeWriter::storage_delete_type_edge_property::<EdgeOverride>(snapshot, capability.canonical_edge()),
        }
    }

    pub(crate) fn delete_entity_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        entity_type: EntityType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, entity_type)?;
        OperationTimeValidation::validate_no_subtypes(snapshot, entity_type)?;
        self.delete_thing_type_unchecked(snapshot, entity_type)
    }

    /// Deletes the relation type together with the role types it relates. Every check, including those
    /// on the roles, runs before anything is removed.
    pub(crate) fn delete_relation_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        relation_type: RelationType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, relation_type)?;
        OperationTimeValidation::validate_no_subtypes(snapshot, relation_type)?;
        let relates = relation_type.get_relates_declared(snapshot)?;
        for relates in &relates {
            OperationTimeValidation::validate_no_subtypes(snapshot, relates.role())?;
            OperationTimeValidation::validate_interface_is_unused::<Plays>(snapshot, relates.role())?;
        }

        for relates in relates {
            self.delete_role_type_unchecked(snapshot, relates)?;
        }
        self.delete_thing_type_unchecked(snapshot, relation_type)
    }

    pub(crate) fn delete_attribute_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        thing_manager: &ThingManager,
        attribute_type: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, attribute_type)?;
        OperationTimeValidation::validate_no_subtypes(snapshot, attribute_type)?;
        OperationTimeValidation::validate_no_instances(snapshot, thing_manager, attribute_type)?;
        OperationTimeValidation::validate_interface_is_unused::<Owns>(snapshot, attribute_type)?;
        self.delete_thing_type_unchecked(snapshot, attribute_type)
    }

    pub(crate) fn delete_role_type(
        &self,
        snapshot: &mut impl WritableSnapshot,
        role_type: RoleType,
    ) -> Result<(), ConceptWriteError> {
        OperationTimeValidation::validate_type_is_not_root(snapshot, role_type)?;
        OperationTimeValidation::validate_no_subtypes(snapshot, role_type)?;
        OperationTimeValidation::validate_interface_is_unused::<Plays>(snapshot, role_type)?;
        let relates = role_type.get_relates(snapshot)?;
        self.delete_role_type_unchecked(snapshot, relates)
    }

    fn delete_role_type_unchecked(
        &self,
        snapshot: &mut impl WritableSnapshot,
        relates: Relates,
    ) -> Result<(), ConceptWriteError> {
        let role_type = relates.role();
        let label = role_type.get_label(snapshot)?;
        TypeWriter::storage_delete_edge(snapshot, relates);
        TypeWriter::storage_may_delete_supertype(snapshot, role_type)?;
        TypeWriter::storage_delete_vertex(snapshot, role_type.vertex())?;
        debug!("Deleted role type '{}'", label);
        Ok(())
    }

    /// Removes the declared owns and plays edges, the supertype edge and the vertex itself.
    fn delete_thing_type_unchecked(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_: impl ThingTypeAPI + OwnerAPI + PlayerAPI,
    ) -> Result<(), ConceptWriteError> {
        let label = type_.get_label(snapshot)?;
        for owns in type_.get_owns_declared(snapshot)? {
            TypeWriter::storage_delete_edge(snapshot, owns);
        }
        for plays in type_.get_plays_declared(snapshot)? {
            TypeWriter::storage_delete_edge(snapshot, plays);
        }
        TypeWriter::storage_may_delete_supertype(snapshot, type_)?;
        TypeWriter::storage_delete_vertex(snapshot, type_.vertex())?;
        debug!("Deleted {} '{}'", type_.kind(), label);
        Ok(())
    }
}
