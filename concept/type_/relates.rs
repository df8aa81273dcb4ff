/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::graph::type_::{edge::EdgeRelatesEncoder, CapabilityKind};

use crate::{
    type_::{relation_type::RelationType, role_type::RoleType, Capability},
    ConceptAPI,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Relates {
    relation: RelationType,
    role: RoleType,
}

impl Relates {
    pub fn relation(&self) -> RelationType {
        self.relation
    }

    pub fn role(&self) -> RoleType {
        self.role
    }
}

impl ConceptAPI for Relates {}

impl Capability for Relates {
    type ObjectType = RelationType;
    type InterfaceType = RoleType;
    type EdgeEncoder = EdgeRelatesEncoder;
    const KIND: CapabilityKind = CapabilityKind::Relates;

    fn new(relation: RelationType, role: RoleType) -> Self {
        Relates { relation, role }
    }

    fn object(&self) -> RelationType {
        self.relation
    }

    fn interface(&self) -> RoleType {
        self.role
    }
}
