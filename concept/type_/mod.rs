/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::HashSet, fmt, hash::Hash};

use encoding::{
    error::EncodingError,
    graph::type_::{
        edge::{TypeEdge, TypeEdgeEncoding},
        property::TypeEdgePropertyEncoding,
        vertex::TypeVertex,
        CapabilityKind, Kind,
    },
    layout::infix::Infix,
    value::label::Label,
};
use iterator::{ChainIterator, TreeIterator};
use itertools::Itertools;
use storage::snapshot::{ReadableSnapshot, WritableSnapshot};

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::thing_manager::ThingManager,
    type_::{
        annotation::{Annotation, AnnotationAbstract},
        attribute_type::AttributeType,
        owns::Owns,
        plays::Plays,
        role_type::RoleType,
        thing_type::ThingType,
        type_manager::{
            type_reader::TypeReader,
            validation::{commit_time_validation::CommitTimeValidation, SchemaValidationError},
            TypeManager,
        },
    },
    ConceptAPI,
};

pub mod annotation;
pub mod attribute_type;
pub mod entity_type;
pub mod owns;
pub mod plays;
pub mod relates;
pub mod relation_type;
pub mod role_type;
pub mod sub;
pub mod thing_type;
pub mod type_manager;

/// A view over one schema vertex. Views hold no state of their own: every read goes to the snapshot,
/// and any number of views may wrap the same vertex.
pub trait TypeAPI: ConceptAPI + Copy + Hash + Eq + fmt::Debug + Sized + 'static {
    fn vertex(&self) -> TypeVertex;

    fn kind(&self) -> Kind {
        self.vertex().kind()
    }

    /// Wraps a stored vertex, failing if it is not of a kind this view can represent.
    fn from_vertex(snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError>;

    /// Wraps a vertex reached by traversal from `self`.
    fn related(&self, snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Self, ConceptReadError> {
        Self::from_vertex(snapshot, vertex)
    }

    /// Whether a direct subtype belongs to the hierarchy seen through this view.
    fn includes_subtype(&self, _subtype: &Self) -> bool {
        true
    }

    fn get_label(&self, snapshot: &impl ReadableSnapshot) -> Result<Label, ConceptReadError> {
        TypeReader::get_label(snapshot, self.vertex())
    }

    fn is_root(&self, snapshot: &impl ReadableSnapshot) -> Result<bool, ConceptReadError> {
        Ok(self.get_label(snapshot)? == self.kind().root_label())
    }

    fn is_abstract(&self, snapshot: &impl ReadableSnapshot) -> Result<bool, ConceptReadError> {
        TypeReader::is_abstract(snapshot, self.vertex())
    }

    fn get_annotations_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Annotation>, ConceptReadError> {
        let mut annotations = HashSet::new();
        if self.is_abstract(snapshot)? {
            annotations.insert(Annotation::from(AnnotationAbstract));
        }
        Ok(annotations)
    }

    fn get_supertype(&self, snapshot: &impl ReadableSnapshot) -> Result<Option<Self>, ConceptReadError> {
        match TypeReader::get_supertype_vertex(snapshot, self.vertex())? {
            None => Ok(None),
            Some(vertex) => Ok(Some(self.related(snapshot, vertex)?)),
        }
    }

    /// The chain from `self` up to the root of its kind, both included.
    fn get_supertypes<'a, Snapshot: ReadableSnapshot>(
        self,
        snapshot: &'a Snapshot,
    ) -> impl Iterator<Item = Result<Self, ConceptReadError>> + 'a {
        ChainIterator::new(self, move |type_: &Self| type_.get_supertype(snapshot))
    }

    fn get_subtypes_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<Vec<Self>, ConceptReadError> {
        TypeReader::get_subtype_vertices(snapshot, self.vertex())?
            .into_iter()
            .map(|vertex| self.related(snapshot, vertex))
            .filter_ok(|subtype| self.includes_subtype(subtype))
            .collect()
    }

    /// `self` followed by every transitive subtype, in pre-order.
    fn get_subtypes<'a, Snapshot: ReadableSnapshot>(
        self,
        snapshot: &'a Snapshot,
    ) -> impl Iterator<Item = Result<Self, ConceptReadError>> + 'a {
        TreeIterator::new(self, move |type_: &Self| type_.get_subtypes_declared(snapshot))
    }

    fn set_label(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        label: &Label,
    ) -> Result<(), ConceptWriteError> {
        type_manager.set_label(snapshot, *self, label)
    }

    fn set_abstract(&self, snapshot: &mut impl WritableSnapshot, type_manager: &TypeManager) -> Result<(), ConceptWriteError> {
        type_manager.set_abstract(snapshot, *self)
    }

    fn unset_abstract(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
    ) -> Result<(), ConceptWriteError> {
        type_manager.unset_abstract(snapshot, *self)
    }

    fn set_supertype(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        supertype: Self,
    ) -> Result<(), ConceptWriteError> {
        type_manager.set_supertype(snapshot, *self, supertype)
    }

    fn delete(
        self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        thing_manager: &ThingManager,
    ) -> Result<(), ConceptWriteError>;
}

/// Entity, relation and attribute types: the types that may own attributes and play roles.
pub trait ThingTypeAPI: TypeAPI {
    fn into_thing_type(self) -> ThingType;

    /// Schema findings for this type alone. Empty when the type is commit-safe.
    fn validate(&self, snapshot: &impl ReadableSnapshot) -> Vec<SchemaValidationError> {
        CommitTimeValidation::validate_single_type(snapshot, *self)
    }
}

pub trait OwnerAPI: ThingTypeAPI {
    fn set_owns(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        attribute_type: AttributeType,
        overridden: Option<AttributeType>,
        is_key: bool,
    ) -> Result<Owns, ConceptWriteError> {
        type_manager.set_owns(snapshot, self.into_thing_type(), attribute_type, overridden, is_key)
    }

    fn unset_owns(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        attribute_type: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        type_manager.unset_owns(snapshot, self.into_thing_type(), attribute_type)
    }

    fn get_owns_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Owns>, ConceptReadError> {
        TypeReader::get_capabilities_declared::<Owns>(snapshot, self.into_thing_type())
    }

    /// Declared and inherited ownerships, excluding those narrowed by an override further down.
    fn get_owns(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Owns>, ConceptReadError> {
        TypeReader::get_capabilities::<Owns>(snapshot, self.into_thing_type())
    }

    fn get_owns_attribute(
        &self,
        snapshot: &impl ReadableSnapshot,
        attribute_type: AttributeType,
    ) -> Result<Option<Owns>, ConceptReadError> {
        Ok(self.get_owns(snapshot)?.into_iter().find(|owns| owns.attribute() == attribute_type))
    }

    fn has_owns_attribute(
        &self,
        snapshot: &impl ReadableSnapshot,
        attribute_type: AttributeType,
    ) -> Result<bool, ConceptReadError> {
        Ok(self.get_owns_attribute(snapshot, attribute_type)?.is_some())
    }
}

pub trait PlayerAPI: ThingTypeAPI {
    fn set_plays(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        role_type: RoleType,
        overridden: Option<RoleType>,
    ) -> Result<Plays, ConceptWriteError> {
        type_manager.set_plays(snapshot, self.into_thing_type(), role_type, overridden)
    }

    fn unset_plays(
        &self,
        snapshot: &mut impl WritableSnapshot,
        type_manager: &TypeManager,
        role_type: RoleType,
    ) -> Result<(), ConceptWriteError> {
        type_manager.unset_plays(snapshot, self.into_thing_type(), role_type)
    }

    fn get_plays_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Plays>, ConceptReadError> {
        TypeReader::get_capabilities_declared::<Plays>(snapshot, self.into_thing_type())
    }

    fn get_plays(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Plays>, ConceptReadError> {
        TypeReader::get_capabilities::<Plays>(snapshot, self.into_thing_type())
    }

    fn get_plays_role(
        &self,
        snapshot: &impl ReadableSnapshot,
        role_type: RoleType,
    ) -> Result<Option<Plays>, ConceptReadError> {
        Ok(self.get_plays(snapshot)?.into_iter().find(|plays| plays.role() == role_type))
    }
}

/// An edge from an object type to an interface type it may use: owns, plays or relates.
pub trait Capability: ConceptAPI + Copy + Hash + Eq + fmt::Debug + Sized + 'static {
    type ObjectType: TypeAPI;
    type InterfaceType: TypeAPI;
    type EdgeEncoder: TypeEdgeEncoding;
    const KIND: CapabilityKind;

    fn new(object: Self::ObjectType, interface: Self::InterfaceType) -> Self;

    fn object(&self) -> Self::ObjectType;

    fn interface(&self) -> Self::InterfaceType;

    fn canonical_edge(&self) -> TypeEdge {
        Self::EdgeEncoder::canonical_edge(self.object().vertex(), self.interface().vertex())
    }

    fn reverse_edge(&self) -> TypeEdge {
        Self::EdgeEncoder::reverse_edge(self.object().vertex(), self.interface().vertex())
    }

    /// The inherited interface this capability narrows, if any.
    fn get_override(&self, snapshot: &impl ReadableSnapshot) -> Result<Option<Self::InterfaceType>, ConceptReadError> {
        TypeReader::get_capability_override(snapshot, *self)
    }
}

/// Edge property naming the interface an owns or plays edge overrides.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct EdgeOverride {
    overridden: TypeVertex,
}

impl EdgeOverride {
    pub(crate) fn new(overridden: TypeVertex) -> Self {
        EdgeOverride { overridden }
    }

    pub(crate) fn overridden(&self) -> TypeVertex {
        self.overridden
    }
}

impl TypeEdgePropertyEncoding for EdgeOverride {
    const INFIX: Infix = Infix::PropertyOverride;

    fn from_value_bytes(value: &[u8]) -> Result<Self, EncodingError> {
        Ok(EdgeOverride { overridden: TypeVertex::decode(value)? })
    }

    fn to_value_bytes(&self) -> Option<Box<[u8]>> {
        Some(Box::from(self.overridden.to_array().as_slice()))
    }
}
