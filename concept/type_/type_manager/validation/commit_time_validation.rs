/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{HashMap, HashSet};

use encoding::graph::type_::{vertex::TypeVertex, Kind};
use storage::snapshot::ReadableSnapshot;

use crate::{
    error::ConceptReadError,
    type_::{
        owns::Owns, plays::Plays, thing_type::ThingType, type_manager::type_reader::TypeReader,
        type_manager::validation::SchemaValidationError, Capability, OwnerAPI, TypeAPI,
    },
};

/// Whole-schema checks run before a schema commit. Every finding is collected; none aborts the pass.
pub struct CommitTimeValidation {}

impl CommitTimeValidation {
    pub fn validate(snapshot: &impl ReadableSnapshot) -> Vec<SchemaValidationError> {
        let mut errors = Vec::new();
        for kind in Kind::all_kinds() {
            let vertices = match TypeReader::get_type_vertices(snapshot, kind) {
                Ok(vertices) => vertices,
                Err(error) => {
                    errors.push(error.into());
                    continue;
                }
            };
            for vertex in vertices {
                if let Err(error) = Self::validate_type(snapshot, vertex, &mut errors) {
                    errors.push(error.into());
                }
            }
        }
        errors
    }

    /// The checks of `validate` restricted to one type.
    pub fn validate_single_type(snapshot: &impl ReadableSnapshot, type_: impl TypeAPI) -> Vec<SchemaValidationError> {
        let mut errors = Vec::new();
        if let Err(error) = Self::validate_type(snapshot, type_.vertex(), &mut errors) {
            errors.push(error.into());
        }
        errors
    }

    fn validate_type(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Result<(), ConceptReadError> {
        Self::validate_label_index(snapshot, vertex, errors)?;
        let hierarchy_is_sound = Self::validate_supertype_chain(snapshot, vertex, errors)?;
        if vertex.kind() == Kind::Attribute {
            Self::validate_attribute_type(snapshot, vertex, errors)?;
        }
        // capability resolution walks the supertype chain, which must be finite
        if hierarchy_is_sound && vertex.kind() != Kind::Role {
            let thing_type = ThingType::from_vertex(snapshot, vertex)?;
            Self::validate_capabilities::<Owns>(snapshot, thing_type, errors)?;
            Self::validate_capabilities::<Plays>(snapshot, thing_type, errors)?;
            Self::validate_keys(snapshot, thing_type, errors)?;
        }
        Ok(())
    }

    fn validate_label_index(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Result<(), ConceptReadError> {
        let label = TypeReader::get_label(snapshot, vertex)?;
        if TypeReader::get_labelled_type_vertex(snapshot, &label)? != Some(vertex) {
            errors.push(SchemaValidationError::LabelIndexMismatch { label });
        }
        Ok(())
    }

    /// Returns whether the chain above `vertex` is acyclic and ends at the root of its kind.
    fn validate_supertype_chain(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Result<bool, ConceptReadError> {
        let label = TypeReader::get_label(snapshot, vertex)?;
        let root = vertex.kind().root_label();
        let supertype = TypeReader::get_supertype_vertex(snapshot, vertex)?;
        if label == root {
            return match supertype {
                None => Ok(true),
                Some(_) => {
                    errors.push(SchemaValidationError::RootHasSupertype { label });
                    Ok(false)
                }
            };
        }

        let Some(supertype) = supertype else {
            errors.push(SchemaValidationError::MissingSupertype { label });
            return Ok(false);
        };
        if supertype.kind() != vertex.kind() {
            errors.push(SchemaValidationError::SupertypeKindMismatch {
                label,
                kind: vertex.kind(),
                supertype: TypeReader::get_label(snapshot, supertype)?,
                supertype_kind: supertype.kind(),
            });
            return Ok(false);
        }

        let mut visited = HashSet::from([vertex]);
        let mut current = supertype;
        loop {
            if TypeReader::get_label(snapshot, current)? == root {
                // a root with a supertype is reported on its own
                return Ok(TypeReader::get_supertype_vertex(snapshot, current)?.is_none());
            }
            if !visited.insert(current) {
                break;
            }
            match TypeReader::get_supertype_vertex(snapshot, current)? {
                Some(next) => current = next,
                None => break,
            }
        }
        errors.push(SchemaValidationError::SupertypeChainDoesNotReachRoot { label, root });
        Ok(false)
    }

    fn validate_attribute_type(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Result<(), ConceptReadError> {
        let label = TypeReader::get_label(snapshot, vertex)?;
        let is_abstract = TypeReader::is_abstract(snapshot, vertex)?;
        let has_attribute_subtypes =
            TypeReader::get_subtype_vertices(snapshot, vertex)?.iter().any(|subtype| subtype.kind() == Kind::Attribute);
        if !is_abstract && has_attribute_subtypes {
            errors.push(SchemaValidationError::ConcreteAttributeTypeWithSubtypes { label: label.clone() });
        }

        let Some(supertype) = TypeReader::get_supertype_vertex(snapshot, vertex)? else {
            return Ok(());
        };
        if supertype.kind() != Kind::Attribute {
            return Ok(());
        }
        let supertype_label = TypeReader::get_label(snapshot, supertype)?;
        if !TypeReader::is_abstract(snapshot, supertype)? {
            errors.push(SchemaValidationError::AttributeSupertypeNotAbstract {
                label: label.clone(),
                supertype: supertype_label.clone(),
            });
        }
        if supertype_label != Kind::Attribute.root_label() {
            let value_type = TypeReader::get_value_type(snapshot, vertex)?;
            let supertype_value_type = TypeReader::get_value_type(snapshot, supertype)?;
            if value_type != supertype_value_type {
                errors.push(SchemaValidationError::AttributeSupertypeValueTypeMismatch {
                    label,
                    value_type,
                    supertype: supertype_label,
                    supertype_value_type,
                });
            }
        }
        Ok(())
    }

    fn validate_capabilities<CAP: Capability<ObjectType = ThingType>>(
        snapshot: &impl ReadableSnapshot,
        object_type: ThingType,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Result<(), ConceptReadError> {
        let declared = TypeReader::get_capabilities_declared::<CAP>(snapshot, object_type)?;
        if declared.is_empty() {
            return Ok(());
        }
        let label = object_type.get_label(snapshot)?;
        let inherited_interfaces: HashSet<CAP::InterfaceType> = match object_type.get_supertype(snapshot)? {
            None => HashSet::new(),
            Some(supertype) => TypeReader::get_capabilities::<CAP>(snapshot, supertype)?
                .into_iter()
                .map(|capability| capability.interface())
                .collect(),
        };

        let mut override_counts: HashMap<CAP::InterfaceType, usize> = HashMap::new();
        for capability in &declared {
            let interface = capability.interface();
            match capability.get_override(snapshot)? {
                Some(overridden) => {
                    *override_counts.entry(overridden).or_default() += 1;
                    if !inherited_interfaces.contains(&overridden) {
                        errors.push(SchemaValidationError::OverriddenCapabilityNotInherited {
                            label: label.clone(),
                            capability: CAP::KIND,
                            overridden: overridden.get_label(snapshot)?,
                        });
                    }
                    if !Self::is_proper_supertype(snapshot, interface.vertex(), overridden.vertex())? {
                        errors.push(SchemaValidationError::OverriddenInterfaceNotSupertype {
                            label: label.clone(),
                            capability: CAP::KIND,
                            interface: interface.get_label(snapshot)?,
                            overridden: overridden.get_label(snapshot)?,
                        });
                    }
                }
                None => {
                    if inherited_interfaces.contains(&interface) {
                        errors.push(SchemaValidationError::RedeclaredCapabilityWithoutOverride {
                            label: label.clone(),
                            capability: CAP::KIND,
                            interface: interface.get_label(snapshot)?,
                        });
                    }
                }
            }
        }

        for (overridden, count) in &override_counts {
            if *count > 1 {
                errors.push(SchemaValidationError::MultipleOverridesOfSameInterface {
                    label: label.clone(),
                    capability: CAP::KIND,
                    overridden: overridden.get_label(snapshot)?,
                });
            }
        }
        for capability in &declared {
            if override_counts.contains_key(&capability.interface()) {
                errors.push(SchemaValidationError::DeclaredCapabilityHiddenByOverride {
                    label: label.clone(),
                    capability: CAP::KIND,
                    interface: capability.interface().get_label(snapshot)?,
                });
            }
        }
        Ok(())
    }

    fn validate_keys(
        snapshot: &impl ReadableSnapshot,
        owner: ThingType,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Result<(), ConceptReadError> {
        let effective = owner.get_owns(snapshot)?;
        for owns in owner.get_owns_declared(snapshot)? {
            if owns.is_key(snapshot)? && !effective.contains(&owns) {
                errors.push(SchemaValidationError::KeyOwnsNotVisible {
                    label: owner.get_label(snapshot)?,
                    attribute: owns.attribute().get_label(snapshot)?,
                });
            }
        }
        Ok(())
    }

    /// Walks raw supertype edges so that a corrupt interface hierarchy cannot loop forever.
    fn is_proper_supertype(
        snapshot: &impl ReadableSnapshot,
        vertex: TypeVertex,
        candidate: TypeVertex,
    ) -> Result<bool, ConceptReadError> {
        let mut visited = HashSet::from([vertex]);
        let mut current = TypeReader::get_supertype_vertex(snapshot, vertex)?;
        while let Some(supertype) = current {
            if supertype == candidate {
                return Ok(true);
            }
            if !visited.insert(supertype) {
                break;
            }
            current = TypeReader::get_supertype_vertex(snapshot, supertype)?;
        }
        Ok(false)
    }
}
