/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::marker::PhantomData;

use encoding::{
    graph::type_::{
        edge::TypeEdge,
        index::LabelToTypeVertexIndex,
        property::{TypeEdgeProperty, TypeEdgePropertyEncoding, TypeVertexProperty, TypeVertexPropertyEncoding},
        vertex::TypeVertex,
    },
    value::label::Label,
    Keyable,
};
use storage::{key_value::StorageKey, snapshot::WritableSnapshot};

use crate::{
    error::ConceptReadError,
    type_::{sub::Sub, type_manager::type_reader::TypeReader, Capability, TypeAPI},
};

/// Raw schema writes. Callers are expected to have validated the change already.
pub struct TypeWriter<Snapshot: WritableSnapshot> {
    snapshot: PhantomData<Snapshot>,
}

impl<Snapshot: WritableSnapshot> TypeWriter<Snapshot> {
    pub(crate) fn storage_put_label(snapshot: &mut Snapshot, vertex: TypeVertex, label: &Label) {
        Self::storage_put_type_vertex_property(snapshot, vertex, label.clone());
        let label_to_vertex_key = LabelToTypeVertexIndex::build(label);
        snapshot.put_val(label_to_vertex_key.to_storage_key(), vertex.to_bytes());
    }

    pub(crate) fn storage_delete_label(snapshot: &mut Snapshot, vertex: TypeVertex) -> Result<(), ConceptReadError> {
        if let Some(label) = TypeReader::get_type_property::<Label>(snapshot, vertex)? {
            Self::storage_delete_type_vertex_property::<Label>(snapshot, vertex);
            snapshot.delete(LabelToTypeVertexIndex::build(&label).to_storage_key());
        }
        Ok(())
    }

    pub(crate) fn storage_put_type_vertex_property<P: TypeVertexPropertyEncoding>(
        snapshot: &mut Snapshot,
        vertex: TypeVertex,
        property: P,
    ) {
        let key = P::build_key(vertex);
        match property.to_value_bytes() {
            Some(value) => snapshot.put_val(key, value),
            None => snapshot.put(key),
        }
    }

    pub(crate) fn storage_delete_type_vertex_property<P: TypeVertexPropertyEncoding>(
        snapshot: &mut Snapshot,
        vertex: TypeVertex,
    ) {
        snapshot.delete(P::build_key(vertex));
    }

    pub(crate) fn storage_put_type_edge_property<P: TypeEdgePropertyEncoding>(
        snapshot: &mut Snapshot,
        edge: TypeEdge,
        property: P,
    ) {
        let key = P::build_key(edge);
        match property.to_value_bytes() {
            Some(value) => snapshot.put_val(key, value),
            None => snapshot.put(key),
        }
    }

    pub(crate) fn storage_delete_type_edge_property<P: TypeEdgePropertyEncoding>(
        snapshot: &mut Snapshot,
        edge: TypeEdge,
    ) {
        snapshot.delete(P::build_key(edge));
    }

    pub(crate) fn storage_put_supertype<T: TypeAPI>(snapshot: &mut Snapshot, subtype: T, supertype: T) {
        let sub = Sub::new(subtype, supertype);
        snapshot.put(sub.canonical_edge().to_storage_key());
        snapshot.put(sub.reverse_edge().to_storage_key());
    }

    pub(crate) fn storage_may_delete_supertype<T: TypeAPI>(
        snapshot: &mut Snapshot,
        subtype: T,
    ) -> Result<(), ConceptReadError> {
        if let Some(supertype) = subtype.get_supertype(snapshot)? {
            let sub = Sub::new(subtype, supertype);
            snapshot.delete(sub.canonical_edge().to_storage_key());
            snapshot.delete(sub.reverse_edge().to_storage_key());
        }
        Ok(())
    }

    pub(crate) fn storage_put_edge<CAP: Capability>(snapshot: &mut Snapshot, capability: CAP) {
        snapshot.put(capability.canonical_edge().to_storage_key());
        snapshot.put(capability.reverse_edge().to_storage_key());
    }

    /// Removes both directions of the edge together with every property stored against it.
    pub(crate) fn storage_delete_edge<CAP: Capability>(snapshot: &mut Snapshot, capability: CAP) {
        let canonical_edge = capability.canonical_edge();
        Self::delete_prefix(snapshot, TypeEdgeProperty::build_prefix_for_edge(canonical_edge));
        snapshot.delete(canonical_edge.to_storage_key());
        snapshot.delete(capability.reverse_edge().to_storage_key());
    }

    /// Removes the vertex, its properties and its label index entry. Edges must already be gone.
    pub(crate) fn storage_delete_vertex(snapshot: &mut Snapshot, vertex: TypeVertex) -> Result<(), ConceptReadError> {
        Self::storage_delete_label(snapshot, vertex)?;
        Self::delete_prefix(snapshot, TypeVertexProperty::build_prefix_for_vertex(vertex));
        snapshot.delete(vertex.to_storage_key());
        Ok(())
    }

    fn delete_prefix(snapshot: &mut Snapshot, prefix: StorageKey) {
        let keys: Vec<StorageKey> = snapshot.iterate_prefix(prefix).map(|(key, _)| key.clone()).collect();
        for key in keys {
            snapshot.delete(key);
        }
    }
}
