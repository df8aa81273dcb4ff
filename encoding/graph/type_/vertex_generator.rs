/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::atomic::{AtomicU16, Ordering};

use storage::snapshot::{ReadableSnapshot, WritableSnapshot};

use crate::{
    error::EncodingError,
    graph::type_::{
        vertex::{TypeID, TypeVertex},
        Kind,
    },
    Keyable,
};

// Type ids are never reused after a type is deleted.
pub struct TypeVertexGenerator {
    next_entity: AtomicU16,
    next_relation: AtomicU16,
    next_attribute: AtomicU16,
    next_role: AtomicU16,
}

impl Default for TypeVertexGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeVertexGenerator {
    pub fn new() -> TypeVertexGenerator {
        TypeVertexGenerator {
            next_entity: AtomicU16::new(0),
            next_relation: AtomicU16::new(0),
            next_attribute: AtomicU16::new(0),
            next_role: AtomicU16::new(0),
        }
    }

    /// Continues numbering after the highest type id of each kind visible in the snapshot.
    pub fn load(snapshot: &impl ReadableSnapshot) -> Result<TypeVertexGenerator, EncodingError> {
        let next_for = |kind: Kind| -> Result<AtomicU16, EncodingError> {
            let last = snapshot.iterate_prefix(TypeVertex::build_prefix_for_kind(kind)).last();
            match last {
                None => Ok(AtomicU16::new(0)),
                Some((key, _)) => {
                    let last_id = TypeVertex::decode(key.bytes())?.type_id().as_u16();
                    let next = last_id.checked_add(1).ok_or(EncodingError::TypeIDsExhausted { kind })?;
                    Ok(AtomicU16::new(next))
                }
            }
        };
        Ok(TypeVertexGenerator {
            next_entity: next_for(Kind::Entity)?,
            next_relation: next_for(Kind::Relation)?,
            next_attribute: next_for(Kind::Attribute)?,
            next_role: next_for(Kind::Role)?,
        })
    }

    pub fn create_type_vertex(
        &self,
        snapshot: &mut impl WritableSnapshot,
        kind: Kind,
    ) -> Result<TypeVertex, EncodingError> {
        let counter = match kind {
            Kind::Entity => &self.next_entity,
            Kind::Relation => &self.next_relation,
            Kind::Attribute => &self.next_attribute,
            Kind::Role => &self.next_role,
        };
        let id = counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map_err(|_| EncodingError::TypeIDsExhausted { kind })?;
        let vertex = TypeVertex::build(kind, TypeID::new(id));
        snapshot.put(vertex.to_storage_key());
        Ok(vertex)
    }
}
