/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::graph::type_::edge::{EdgeSubEncoder, TypeEdge, TypeEdgeEncoding};

use crate::type_::TypeAPI;

/// The single inheritance edge of a type: `subtype -> supertype`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sub<T: TypeAPI> {
    subtype: T,
    supertype: T,
}

impl<T: TypeAPI> Sub<T> {
    pub fn new(subtype: T, supertype: T) -> Self {
        Sub { subtype, supertype }
    }

    pub fn subtype(&self) -> T {
        self.subtype
    }

    pub fn supertype(&self) -> T {
        self.supertype
    }

    pub(crate) fn canonical_edge(&self) -> TypeEdge {
        EdgeSubEncoder::canonical_edge(self.subtype.vertex(), self.supertype.vertex())
    }

    pub(crate) fn reverse_edge(&self) -> TypeEdge {
        EdgeSubEncoder::reverse_edge(self.subtype.vertex(), self.supertype.vertex())
    }
}
