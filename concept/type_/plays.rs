/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::graph::type_::{edge::EdgePlaysEncoder, CapabilityKind};

use crate::{
    type_::{role_type::RoleType, thing_type::ThingType, Capability},
    ConceptAPI,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Plays {
    player: ThingType,
    role: RoleType,
}

impl Plays {
    pub fn player(&self) -> ThingType {
        self.player
    }

    pub fn role(&self) -> RoleType {
        self.role
    }
}

impl ConceptAPI for Plays {}

impl Capability for Plays {
    type ObjectType = ThingType;
    type InterfaceType = RoleType;
    type EdgeEncoder = EdgePlaysEncoder;
    const KIND: CapabilityKind = CapabilityKind::Plays;

    fn new(player: ThingType, role: RoleType) -> Self {
        Plays { player, role }
    }

    fn object(&self) -> ThingType {
        self.player
    }

    fn interface(&self) -> RoleType {
        self.role
    }
}
