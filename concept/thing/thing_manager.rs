/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::{graph::thing::vertex_attribute::AttributeVertex, value::value::Value, Keyable};
use storage::snapshot::{ReadableSnapshot, WritableSnapshot};
use tracing::trace;

use crate::{
    error::{ConceptReadError, ConceptWriteError},
    thing::attribute::Attribute,
    type_::{attribute_type::AttributeType, TypeAPI},
};

/// Stores attribute instances in the data keyspace. Schema rules are checked by the attribute type
/// before it calls in here.
#[derive(Debug, Default)]
pub struct ThingManager {}

impl ThingManager {
    pub fn new() -> Self {
        ThingManager {}
    }

    /// Get-or-create: an existing attribute is returned untouched.
    pub(crate) fn put_attribute(
        &self,
        snapshot: &mut impl WritableSnapshot,
        attribute_type: AttributeType,
        value: Value<'_>,
        is_inferred: bool,
    ) -> Result<Attribute, ConceptWriteError> {
        let vertex = AttributeVertex::build(attribute_type.vertex().type_id(), &value);
        let key = vertex.to_storage_key();
        if !snapshot.contains(&key) {
            let flag = if is_inferred { Attribute::INFERRED } else { Attribute::EXPLICIT };
            snapshot.put_val(key, flag);
            trace!("Created attribute {:?} (inferred: {})", vertex, is_inferred);
        }
        Ok(Attribute::new(vertex))
    }

    pub fn get_attribute(
        &self,
        snapshot: &impl ReadableSnapshot,
        attribute_type: AttributeType,
        value: Value<'_>,
    ) -> Result<Option<Attribute>, ConceptReadError> {
        let vertex = AttributeVertex::build(attribute_type.vertex().type_id(), &value);
        if snapshot.contains(&vertex.to_storage_key()) {
            Ok(Some(Attribute::new(vertex)))
        } else {
            Ok(None)
        }
    }

    /// Attributes of exactly `attribute_type`, in value order.
    pub fn get_attributes_in<'a, Snapshot: ReadableSnapshot>(
        &self,
        snapshot: &'a Snapshot,
        attribute_type: AttributeType,
    ) -> impl Iterator<Item = Result<Attribute, ConceptReadError>> + 'a {
        snapshot
            .iterate_prefix(AttributeVertex::build_prefix_type(attribute_type.vertex().type_id()))
            .map(|(key, _)| -> Result<Attribute, ConceptReadError> {
                Ok(Attribute::new(AttributeVertex::decode(key.bytes())?))
            })
    }

    pub fn has_instances(&self, snapshot: &impl ReadableSnapshot, attribute_type: AttributeType) -> bool {
        snapshot.iterate_prefix(AttributeVertex::build_prefix_type(attribute_type.vertex().type_id())).next().is_some()
    }

    pub(crate) fn set_inferred(&self, snapshot: &mut impl WritableSnapshot, attribute: &Attribute, is_inferred: bool) {
        let flag = if is_inferred { Attribute::INFERRED } else { Attribute::EXPLICIT };
        snapshot.put_val(attribute.vertex().to_storage_key(), flag);
        trace!("Set attribute {:?} inferred: {}", attribute.vertex(), is_inferred);
    }
}
