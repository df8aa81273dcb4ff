/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

use encoding::{
    graph::type_::{
        edge::{EdgeSubEncoder, TypeEdge, TypeEdgeEncoding},
        index::LabelToTypeVertexIndex,
        property::{TypeEdgePropertyEncoding, TypeVertexPropertyEncoding},
        vertex::TypeVertex,
        Kind,
    },
    value::{label::Label, value_type::ValueType},
    Keyable,
};
use storage::snapshot::ReadableSnapshot;

use crate::{
    error::ConceptReadError,
    type_::{annotation::AnnotationAbstract, Capability, EdgeOverride, TypeAPI},
};

/// Stateless reads of the schema graph. Every call goes straight to the snapshot.
pub struct TypeReader {}

impl TypeReader {
    pub(crate) fn check_kind(vertex: TypeVertex, expected: Kind) -> Result<(), ConceptReadError> {
        if vertex.kind() == expected {
            Ok(())
        } else {
            Err(ConceptReadError::TypeRootMismatch { expected, actual: vertex.kind() })
        }
    }

    pub(crate) fn get_labelled_type_vertex(
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<Option<TypeVertex>, ConceptReadError> {
        let key = LabelToTypeVertexIndex::build(label).to_storage_key();
        snapshot.get(&key).map(TypeVertex::decode).transpose().map_err(ConceptReadError::from)
    }

    /// Looks a label up, ignoring a type of another kind holding it.
    pub(crate) fn get_labelled_type<T: TypeAPI>(
        snapshot: &impl ReadableSnapshot,
        label: &Label,
        kind: Kind,
    ) -> Result<Option<T>, ConceptReadError> {
        match Self::get_labelled_type_vertex(snapshot, label)? {
            Some(vertex) if vertex.kind() == kind => Ok(Some(T::from_vertex(snapshot, vertex)?)),
            _ => Ok(None),
        }
    }

    pub(crate) fn get_type_vertices(
        snapshot: &impl ReadableSnapshot,
        kind: Kind,
    ) -> Result<Vec<TypeVertex>, ConceptReadError> {
        snapshot
            .iterate_prefix(TypeVertex::build_prefix_for_kind(kind))
            .map(|(key, _)| TypeVertex::decode(key.bytes()).map_err(ConceptReadError::from))
            .collect()
    }

    pub(crate) fn get_label(snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<Label, ConceptReadError> {
        Self::get_type_property::<Label>(snapshot, vertex)?
            .ok_or(ConceptReadError::CorruptMissingLabelOfType { vertex })
    }

    pub(crate) fn is_abstract(snapshot: &impl ReadableSnapshot, vertex: TypeVertex) -> Result<bool, ConceptReadError> {
        Ok(Self::get_type_property::<AnnotationAbstract>(snapshot, vertex)?.is_some())
    }

    pub(crate) fn get_value_type(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
    ) -> Result<ValueType, ConceptReadError> {
        match Self::get_type_property::<ValueType>(snapshot, vertex)? {
            Some(value_type) => Ok(value_type),
            None => Err(ConceptReadError::CorruptMissingValueType { label: Self::get_label(snapshot, vertex)? }),
        }
    }

    pub(crate) fn get_type_property<P: TypeVertexPropertyEncoding>(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
    ) -> Result<Option<P>, ConceptReadError> {
        snapshot.get(&P::build_key(vertex)).map(P::from_value_bytes).transpose().map_err(ConceptReadError::from)
    }

    pub(crate) fn get_type_edge_property<P: TypeEdgePropertyEncoding>(
        snapshot: &impl ReadableSnapshot,
        edge: TypeEdge,
    ) -> Result<Option<P>, ConceptReadError> {
        snapshot.get(&P::build_key(edge)).map(P::from_value_bytes).transpose().map_err(ConceptReadError::from)
    }

    pub(crate) fn get_supertype_vertex(
        snapshot: &impl ReadableSnapshot,
        subtype: TypeVertex,
    ) -> Result<Option<TypeVertex>, ConceptReadError> {
        let supertypes = snapshot
            .iterate_prefix(EdgeSubEncoder::prefix_for_canonical_edges_from(subtype))
            .map(|(key, _)| EdgeSubEncoder::decode_canonical_edge(key.bytes()).map(|(_, supertype)| supertype))
            .collect::<Result<Vec<_>, _>>()?;
        match supertypes.as_slice() {
            [] => Ok(None),
            [supertype] => Ok(Some(*supertype)),
            _ => Err(ConceptReadError::CorruptMultipleSupertypes {
                label: Self::get_label(snapshot, subtype)?,
                count: supertypes.len(),
            }),
        }
    }

    pub(crate) fn get_subtype_vertices(
        snapshot: &impl ReadableSnapshot,
        supertype: TypeVertex,
    ) -> Result<Vec<TypeVertex>, ConceptReadError> {
        snapshot
            .iterate_prefix(EdgeSubEncoder::prefix_for_reverse_edges_from(supertype))
            .map(|(key, _)| {
                EdgeSubEncoder::decode_reverse_edge(key.bytes())
                    .map(|(subtype, _)| subtype)
                    .map_err(ConceptReadError::from)
            })
            .collect()
    }

    pub(crate) fn get_capabilities_declared<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        object_type: CAP::ObjectType,
    ) -> Result<HashSet<CAP>, ConceptReadError> {
        let interface_vertices = snapshot
            .iterate_prefix(CAP::EdgeEncoder::prefix_for_canonical_edges_from(object_type.vertex()))
            .map(|(key, _)| CAP::EdgeEncoder::decode_canonical_edge(key.bytes()).map(|(_, to)| to))
            .collect::<Result<Vec<_>, _>>()?;
        interface_vertices
            .into_iter()
            .map(|vertex| Ok(CAP::new(object_type, CAP::InterfaceType::from_vertex(snapshot, vertex)?)))
            .collect()
    }

    /// Walks from `object_type` up its supertypes. A capability is visible unless its interface was
    /// already seen lower down, or was overridden at its own level or lower down.
    pub(crate) fn get_capabilities<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        object_type: CAP::ObjectType,
    ) -> Result<HashSet<CAP>, ConceptReadError> {
        let mut transitive_capabilities: HashSet<CAP> = HashSet::new();
        let mut overridden_interfaces: HashSet<CAP::InterfaceType> = HashSet::new();
        let mut saved_interfaces: HashSet<CAP::InterfaceType> = HashSet::new();
        for current_type in object_type.get_supertypes(snapshot) {
            let declared = Self::get_capabilities_declared::<CAP>(snapshot, current_type?)?;
            for capability in &declared {
                if let Some(overridden) = Self::get_capability_override(snapshot, *capability)? {
                    overridden_interfaces.insert(overridden);
                }
            }
            for capability in declared {
                let interface = capability.interface();
                if !overridden_interfaces.contains(&interface) && saved_interfaces.insert(interface) {
                    transitive_capabilities.insert(capability);
                }
            }
        }
        Ok(transitive_capabilities)
    }

    pub(crate) fn get_capability_override<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        capability: CAP,
    ) -> Result<Option<CAP::InterfaceType>, ConceptReadError> {
        match Self::get_type_edge_property::<EdgeOverride>(snapshot, capability.canonical_edge())? {
            None => Ok(None),
            Some(edge_override) => Ok(Some(capability.interface().related(snapshot, edge_override.overridden())?)),
        }
    }

    pub(crate) fn get_capabilities_for_interface_declared<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        interface_type: CAP::InterfaceType,
    ) -> Result<HashSet<CAP>, ConceptReadError> {
        let object_vertices = snapshot
            .iterate_prefix(CAP::EdgeEncoder::prefix_for_reverse_edges_from(interface_type.vertex()))
            .map(|(key, _)| CAP::EdgeEncoder::decode_reverse_edge(key.bytes()).map(|(from, _)| from))
            .collect::<Result<Vec<_>, _>>()?;
        object_vertices
            .into_iter()
            .map(|vertex| Ok(CAP::new(CAP::ObjectType::from_vertex(snapshot, vertex)?, interface_type)))
            .collect()
    }

    /// Every object type that can use `interface_type`, through the nearest declaration it inherits.
    /// Descent into a subtree stops where the subtree overrides the interface.
    pub(crate) fn get_capabilities_for_interface<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        interface_type: CAP::InterfaceType,
    ) -> Result<HashMap<CAP::ObjectType, CAP>, ConceptReadError> {
        let mut declared_by_depth = Vec::new();
        for declared_capability in Self::get_capabilities_for_interface_declared::<CAP>(snapshot, interface_type)? {
            let depth = declared_capability.object().get_supertypes(snapshot).collect::<Result<Vec<_>, _>>()?.len();
            declared_by_depth.push((depth, declared_capability));
        }
        // deepest first, so the nearest declaration claims each object type
        declared_by_depth.sort_by_key(|(depth, capability)| (Reverse(*depth), capability.object().vertex()));

        let mut capabilities: HashMap<CAP::ObjectType, CAP> = HashMap::new();
        for (_, declared_capability) in declared_by_depth {
            let mut stack = vec![declared_capability.object()];
            while let Some(object_type) = stack.pop() {
                let mut overridden = false;
                for capability in Self::get_capabilities_declared::<CAP>(snapshot, object_type)? {
                    if Self::get_capability_override(snapshot, capability)? == Some(interface_type) {
                        overridden = true;
                    }
                }
                if !overridden {
                    capabilities.entry(object_type).or_insert(declared_capability);
                    stack.extend(object_type.get_subtypes_declared(snapshot)?);
                }
            }
        }
        Ok(capabilities)
    }
}
