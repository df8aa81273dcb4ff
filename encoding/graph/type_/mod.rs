/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display, Formatter};

use crate::{layout::prefix::Prefix, value::label::Label};

pub mod edge;
pub mod index;
pub mod property;
pub mod vertex;
pub mod vertex_generator;

// Declared in prefix order, so that deriving Ord on vertices matches their byte order
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Entity,
    Relation,
    Attribute,
    Role,
}

impl Kind {
    pub const fn all_kinds() -> [Kind; 4] {
        [Kind::Entity, Kind::Relation, Kind::Attribute, Kind::Role]
    }

    pub const fn root_label(&self) -> Label {
        match self {
            Kind::Entity => Label::new_static("entity"),
            Kind::Relation => Label::new_static("relation"),
            Kind::Attribute => Label::new_static("attribute"),
            Kind::Role => Label::new_static_scoped("role", "relation", "relation:role"),
        }
    }

    pub fn is_root_label(label: &Label) -> bool {
        Kind::all_kinds().iter().any(|kind| kind.root_label() == *label)
    }

    pub const fn prefix(&self) -> Prefix {
        match self {
            Kind::Entity => Prefix::VertexEntityType,
            Kind::Relation => Prefix::VertexRelationType,
            Kind::Attribute => Prefix::VertexAttributeType,
            Kind::Role => Prefix::VertexRoleType,
        }
    }

    pub fn from_prefix(prefix: Prefix) -> Option<Kind> {
        match prefix {
            Prefix::VertexEntityType => Some(Kind::Entity),
            Prefix::VertexRelationType => Some(Kind::Relation),
            Prefix::VertexAttributeType => Some(Kind::Attribute),
            Prefix::VertexRoleType => Some(Kind::Role),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Entity => "entity type",
            Kind::Relation => "relation type",
            Kind::Attribute => "attribute type",
            Kind::Role => "role type",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Kind[{}]", self.root_label().scoped_name())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    Relates,
    Plays,
    Owns,
}

impl Display for CapabilityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let str = match self {
            CapabilityKind::Relates => "relates",
            CapabilityKind::Plays => "plays",
            CapabilityKind::Owns => "owns",
        };
        write!(f, "{}", str)
    }
}

impl fmt::Debug for CapabilityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CapabilityKind[{}]", self)
    }
}
