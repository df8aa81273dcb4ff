/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use encoding::graph::type_::{edge::EdgeOwnsEncoder, CapabilityKind};
use storage::snapshot::ReadableSnapshot;

use crate::{
    error::ConceptReadError,
    type_::{
        annotation::{Annotation, AnnotationKey},
        attribute_type::AttributeType,
        thing_type::ThingType,
        type_manager::type_reader::TypeReader,
        Capability,
    },
    ConceptAPI,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Owns {
    owner: ThingType,
    attribute: AttributeType,
}

impl Owns {
    pub fn owner(&self) -> ThingType {
        self.owner
    }

    pub fn attribute(&self) -> AttributeType {
        self.attribute
    }

    pub fn is_key(&self, snapshot: &impl ReadableSnapshot) -> Result<bool, ConceptReadError> {
        Ok(TypeReader::get_type_edge_property::<AnnotationKey>(snapshot, self.canonical_edge())?.is_some())
    }

    pub fn get_annotations_declared(&self, snapshot: &impl ReadableSnapshot) -> Result<HashSet<Annotation>, ConceptReadError> {
        let mut annotations = HashSet::new();
        if self.is_key(snapshot)? {
            annotations.insert(Annotation::from(AnnotationKey));
        }
        Ok(annotations)
    }
}

impl ConceptAPI for Owns {}

impl Capability for Owns {
    type ObjectType = ThingType;
    type InterfaceType = AttributeType;
    type EdgeEncoder = EdgeOwnsEncoder;
    const KIND: CapabilityKind = CapabilityKind::Owns;

    fn new(owner: ThingType, attribute: AttributeType) -> Self {
        Owns { owner, attribute }
    }

    fn object(&self) -> ThingType {
        self.owner
    }

    fn interface(&self) -> AttributeType {
        self.attribute
    }
}
