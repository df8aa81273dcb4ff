/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::{
    graph::type_::Kind,
    value::{label::Label, value_type::ValueType},
};
use storage::snapshot::ReadableSnapshot;

use crate::{
    error::ConceptWriteError,
    thing::thing_manager::ThingManager,
    type_::{
        attribute_type::AttributeType,
        type_manager::type_reader::TypeReader,
        Capability, TypeAPI,
    },
};

/// Checks run before a schema mutation is written. Each fails fast with the error the caller sees.
pub(crate) struct OperationTimeValidation {}

impl OperationTimeValidation {
    pub(crate) fn validate_type_is_not_root(
        snapshot: &impl ReadableSnapshot,
        type_: impl TypeAPI,
    ) -> Result<(), ConceptWriteError> {
        if type_.is_root(snapshot)? {
            Err(ConceptWriteError::RootTypeMutation { label: type_.get_label(snapshot)? })
        } else {
            Ok(())
        }
    }

    pub(crate) fn validate_label_uniqueness(
        snapshot: &impl ReadableSnapshot,
        label: &Label,
    ) -> Result<(), ConceptWriteError> {
        if TypeReader::get_labelled_type_vertex(snapshot, label)?.is_some() {
            Err(ConceptWriteError::LabelAlreadyInUse { label: label.clone() })
        } else {
            Ok(())
        }
    }

    pub(crate) fn validate_value_type_is_not_reserved(
        label: &Label,
        value_type: ValueType,
    ) -> Result<(), ConceptWriteError> {
        if value_type == ValueType::Object {
            Err(ConceptWriteError::ReservedValueType { label: label.clone(), value_type })
        } else {
            Ok(())
        }
    }

    pub(crate) fn validate_supertype_is_not_self<T: TypeAPI>(
        snapshot: &impl ReadableSnapshot,
        type_: T,
        supertype: T,
    ) -> Result<(), ConceptWriteError> {
        if type_ == supertype {
            Err(ConceptWriteError::SupertypeSelf { label: type_.get_label(snapshot)? })
        } else {
            Ok(())
        }
    }

    pub(crate) fn validate_supertype_kind<T: TypeAPI>(
        snapshot: &impl ReadableSnapshot,
        type_: T,
        supertype: T,
    ) -> Result<(), ConceptWriteError> {
        if type_.kind() == supertype.kind() {
            Ok(())
        } else {
            Err(ConceptWriteError::SupertypeKindMismatch {
                label: type_.get_label(snapshot)?,
                kind: type_.kind(),
                supertype: supertype.get_label(snapshot)?,
                supertype_kind: supertype.kind(),
            })
        }
    }

    pub(crate) fn validate_supertype_does_not_create_cycle<T: TypeAPI>(
        snapshot: &impl ReadableSnapshot,
        type_: T,
        supertype: T,
    ) -> Result<(), ConceptWriteError> {
        let ancestors = supertype.get_supertypes(snapshot).collect::<Result<Vec<_>, _>>()?;
        if ancestors.contains(&type_) {
            Err(ConceptWriteError::SupertypeCycle {
                label: type_.get_label(snapshot)?,
                supertype: supertype.get_label(snapshot)?,
            })
        } else {
            Ok(())
        }
    }

    /// A root supertype accepts every value type.
    pub(crate) fn validate_attribute_supertype_value_type(
        snapshot: &impl ReadableSnapshot,
        attribute_type: AttributeType,
        supertype: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        if supertype.is_root(snapshot)? || attribute_type.get_value_type() == supertype.get_value_type() {
            Ok(())
        } else {
            Err(ConceptWriteError::AttributeSupertypeValueTypeMismatch {
                label: attribute_type.get_label(snapshot)?,
                value_type: attribute_type.get_value_type(),
                supertype: supertype.get_label(snapshot)?,
                supertype_value_type: supertype.get_value_type(),
            })
        }
    }

    pub(crate) fn validate_attribute_supertype_is_abstract(
        snapshot: &impl ReadableSnapshot,
        attribute_type: AttributeType,
        supertype: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        if supertype.is_abstract(snapshot)? {
            Ok(())
        } else {
            Err(ConceptWriteError::AttributeSupertypeNotAbstract {
                label: attribute_type.get_label(snapshot)?,
                supertype: supertype.get_label(snapshot)?,
            })
        }
    }

    pub(crate) fn validate_no_subtypes(
        snapshot: &impl ReadableSnapshot,
        type_: impl TypeAPI,
    ) -> Result<(), ConceptWriteError> {
        if TypeReader::get_subtype_vertices(snapshot, type_.vertex())?.is_empty() {
            Ok(())
        } else {
            Err(ConceptWriteError::CannotDeleteTypeWithSubtypes { label: type_.get_label(snapshot)? })
        }
    }

    /// Only attribute types are constrained: their supertypes must stay abstract.
    pub(crate) fn validate_type_can_be_concrete(
        snapshot: &impl ReadableSnapshot,
        type_: impl TypeAPI,
    ) -> Result<(), ConceptWriteError> {
        if type_.kind() != Kind::Attribute || TypeReader::get_subtype_vertices(snapshot, type_.vertex())?.is_empty() {
            Ok(())
        } else {
            Err(ConceptWriteError::AttributeTypeWithSubtypesMustBeAbstract { label: type_.get_label(snapshot)? })
        }
    }

    pub(crate) fn validate_no_instances(
        snapshot: &impl ReadableSnapshot,
        thing_manager: &ThingManager,
        attribute_type: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        if thing_manager.has_instances(snapshot, attribute_type) {
            Err(ConceptWriteError::CannotDeleteTypeWithInstances { label: attribute_type.get_label(snapshot)? })
        } else {
            Ok(())
        }
    }

    pub(crate) fn validate_key_is_keyable(
        snapshot: &impl ReadableSnapshot,
        owner: impl TypeAPI,
        attribute_type: AttributeType,
    ) -> Result<(), ConceptWriteError> {
        if attribute_type.is_keyable() {
            Ok(())
        } else {
            Err(ConceptWriteError::AttributeTypeNotKeyable {
                owner: owner.get_label(snapshot)?,
                attribute: attribute_type.get_label(snapshot)?,
                value_type: attribute_type.get_value_type(),
            })
        }
    }

    /// The overridden interface must be a proper supertype of the new one.
    pub(crate) fn validate_overridden_interface_is_supertype<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        object_type: CAP::ObjectType,
        interface_type: CAP::InterfaceType,
        overridden: CAP::InterfaceType,
    ) -> Result<(), ConceptWriteError> {
        let proper_supertypes = interface_type.get_supertypes(snapshot).skip(1).collect::<Result<Vec<_>, _>>()?;
        if proper_supertypes.contains(&overridden) {
            Ok(())
        } else {
            Err(ConceptWriteError::OverriddenInterfaceNotSupertype {
                label: object_type.get_label(snapshot)?,
                capability: CAP::KIND,
                interface: interface_type.get_label(snapshot)?,
                overridden: overridden.get_label(snapshot)?,
            })
        }
    }

    /// The overridden interface must be available to the object type through its supertype.
    pub(crate) fn validate_overridden_interface_is_inherited<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        object_type: CAP::ObjectType,
        overridden: CAP::InterfaceType,
    ) -> Result<(), ConceptWriteError> {
        let inherited = match object_type.get_supertype(snapshot)? {
            None => false,
            Some(supertype) => TypeReader::get_capabilities::<CAP>(snapshot, supertype)?
                .iter()
                .any(|capability| capability.interface() == overridden),
        };
        if inherited {
            Ok(())
        } else {
            Err(ConceptWriteError::OverriddenInterfaceNotInherited {
                label: object_type.get_label(snapshot)?,
                capability: CAP::KIND,
                overridden: overridden.get_label(snapshot)?,
            })
        }
    }

    pub(crate) fn validate_capability_is_declared<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        capability: CAP,
    ) -> Result<(), ConceptWriteError> {
        let declared = TypeReader::get_capabilities_declared::<CAP>(snapshot, capability.object())?;
        if declared.contains(&capability) {
            Ok(())
        } else {
            Err(ConceptWriteError::CapabilityNotDeclared {
                label: capability.object().get_label(snapshot)?,
                capability: CAP::KIND,
                interface: capability.interface().get_label(snapshot)?,
            })
        }
    }

    pub(crate) fn validate_interface_is_unused<CAP: Capability>(
        snapshot: &impl ReadableSnapshot,
        interface_type: CAP::InterfaceType,
    ) -> Result<(), ConceptWriteError> {
        let users = TypeReader::get_capabilities_for_interface_declared::<CAP>(snapshot, interface_type)?;
        if users.is_empty() {
            Ok(())
        } else {
            Err(ConceptWriteError::CannotDeleteInterfaceInUse {
                label: interface_type.get_label(snapshot)?,
                capability: CAP::KIND,
            })
        }
    }
}
