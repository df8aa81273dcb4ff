/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::{
    graph::{
        thing::vertex_attribute::AttributeVertex,
        type_::{vertex::TypeVertex, Kind},
    },
    value::{value::Value, value_type::ValueType},
    Keyable,
};
use storage::snapshot::ReadableSnapshot;

use crate::{error::ConceptReadError, thing::ThingAPI, type_::attribute_type::AttributeType, ConceptAPI};

/// A value of an attribute type. Each `(type, value)` pair is stored exactly once.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Attribute {
    vertex: AttributeVertex,
}

impl Attribute {
    pub(crate) const INFERRED: [u8; 1] = [1];
    pub(crate) const EXPLICIT: [u8; 1] = [0];

    pub(crate) fn new(vertex: AttributeVertex) -> Self {
        Attribute { vertex }
    }

    pub fn vertex(&self) -> &AttributeVertex {
        &self.vertex
    }

    pub fn value_type(&self) -> ValueType {
        self.vertex.value_type()
    }

    pub fn get_value(&self) -> Result<Value<'static>, ConceptReadError> {
        Ok(self.vertex.value()?)
    }

    pub fn is_inferred(&self, snapshot: &impl ReadableSnapshot) -> Result<bool, ConceptReadError> {
        Ok(snapshot.get(&self.vertex.to_storage_key()) == Some(&Self::INFERRED[..]))
    }

    pub fn get_type(&self, snapshot: &impl ReadableSnapshot) -> Result<AttributeType, ConceptReadError> {
        let type_vertex = TypeVertex::build(Kind::Attribute, self.vertex.type_id());
        AttributeType::from_vertex_with_value_type(snapshot, type_vertex, self.value_type())
    }
}

impl ConceptAPI for Attribute {}

impl ThingAPI for Attribute {}
