/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::{
    error::EncodingError,
    graph::type_::{vertex::TypeVertex, CapabilityKind, Kind},
    value::{label::Label, value_type::ValueType},
};
use error::typegraph_error;
use storage::error::SnapshotError;

typegraph_error! {
    pub ConceptReadError(component = "Concept read", prefix = "COR") {
        CorruptMissingLabelOfType(1, "Corrupt schema: type {vertex:?} has no label.", vertex: TypeVertex),
        CorruptMissingValueType(2, "Corrupt schema: attribute type '{label}' has no value type.", label: Label),
        CorruptMultipleSupertypes(3, "Corrupt schema: type '{label}' has {count} supertypes.", label: Label, count: usize),
        CorruptRoleWithoutRelation(4, "Corrupt schema: role type '{label}' is not related by any relation type.", label: Label),
        UnrecognisedValue(5, "Unrecognised value type tag '{byte}' stored on an attribute type.", byte: u8),
        TypeRootMismatch(6, "Expected a vertex of kind '{expected}' but found one of kind '{actual}'.", expected: Kind, actual: Kind),
        ValueTypeMismatch(7, "Attribute type '{label}' has value type '{actual}', not '{expected}'.", label: Label, expected: ValueType, actual: ValueType),
        InvalidConceptCasting(8, "Attribute type '{label}' of value type '{from}' cannot be cast to value type '{to}'.", label: Label, from: ValueType, to: ValueType),
        Encoding(9, "Failed to decode stored schema data.", ( typegraph_source: EncodingError )),
        CorruptMissingRootType(10, "Corrupt schema: the root {kind} is missing.", kind: Kind),
    }
}

impl From<EncodingError> for ConceptReadError {
    fn from(error: EncodingError) -> Self {
        match error {
            EncodingError::UnrecognisedValueType { byte } => ConceptReadError::UnrecognisedValue { byte },
            error => ConceptReadError::Encoding { typegraph_source: error },
        }
    }
}

typegraph_error! {
    pub ConceptWriteError(component = "Concept write", prefix = "COW") {
        ConceptRead(1, "Failed to read the schema.", ( typegraph_source: ConceptReadError )),
        Encoding(2, "Failed to encode schema data.", ( typegraph_source: EncodingError )),
        Commit(3, "Failed to commit schema changes.", ( typegraph_source: SnapshotError )),
        RootTypeMutation(4, "Root type '{label}' cannot be modified.", label: Label),
        LabelAlreadyInUse(5, "Label '{label}' is already in use by another type.", label: Label),
        SupertypeSelf(6, "Type '{label}' cannot be its own supertype.", label: Label),
        SupertypeCycle(7, "Setting '{supertype}' as the supertype of '{label}' would create a cycle.", label: Label, supertype: Label),
        SupertypeKindMismatch(8, "Type '{label}' of kind '{kind}' cannot subtype '{supertype}' of kind '{supertype_kind}'.", label: Label, kind: Kind, supertype: Label, supertype_kind: Kind),
        AttributeSupertypeNotAbstract(9, "Attribute type '{label}' cannot subtype '{supertype}', which is not abstract.", label: Label, supertype: Label),
        AttributeSupertypeValueTypeMismatch(10, "Attribute type '{label}' with value type '{value_type}' cannot subtype '{supertype}' with value type '{supertype_value_type}'.", label: Label, value_type: ValueType, supertype: Label, supertype_value_type: ValueType),
        AttributeTypeWithSubtypesMustBeAbstract(11, "Attribute type '{label}' has subtypes and must remain abstract.", label: Label),
        ReservedValueType(12, "Attribute type '{label}' cannot be created with the reserved value type '{value_type}'.", label: Label, value_type: ValueType),
        AttributeTypeIsAbstract(13, "Attribute type '{label}' is abstract and cannot hold values.", label: Label),
        TypeNotCommitted(14, "Attribute type '{label}' must be committed before values are added to it.", label: Label),
        AttributeValueTypeMismatch(15, "Attribute type '{label}' holds '{expected}' values but was given a '{provided}' value.", label: Label, expected: ValueType, provided: ValueType),
        IllegalStringSize(16, "String value of {length} bytes exceeds the maximum of {max} bytes for attribute type '{label}'.", label: Label, length: usize, max: usize),
        AttributeTypeNotKeyable(17, "Type '{owner}' cannot own '{attribute}' as a key: value type '{value_type}' is not keyable.", owner: Label, attribute: Label, value_type: ValueType),
        OverriddenInterfaceNotSupertype(18, "Type '{label}' cannot override '{overridden}' with '{interface}' ({capability}): it is not a proper supertype.", label: Label, capability: CapabilityKind, interface: Label, overridden: Label),
        OverriddenInterfaceNotInherited(19, "Type '{label}' cannot override '{overridden}' ({capability}): it is not inherited from a supertype.", label: Label, capability: CapabilityKind, overridden: Label),
        CapabilityNotDeclared(20, "Type '{label}' does not declare {capability} '{interface}'.", label: Label, capability: CapabilityKind, interface: Label),
        CannotDeleteTypeWithSubtypes(21, "Type '{label}' cannot be deleted while it has subtypes.", label: Label),
        CannotDeleteTypeWithInstances(22, "Type '{label}' cannot be deleted while it has instances.", label: Label),
        CannotDeleteInterfaceInUse(23, "Type '{label}' cannot be deleted while it is still used through {capability}.", label: Label, capability: CapabilityKind),
        TypeDeleted(24, "Attribute type {vertex:?} has been deleted and cannot hold values.", vertex: TypeVertex),
    }
}

impl From<ConceptReadError> for ConceptWriteError {
    fn from(error: ConceptReadError) -> Self {
        ConceptWriteError::ConceptRead { typegraph_source: error }
    }
}

impl From<EncodingError> for ConceptWriteError {
    fn from(error: EncodingError) -> Self {
        ConceptWriteError::Encoding { typegraph_source: error }
    }
}

impl From<SnapshotError> for ConceptWriteError {
    fn from(error: SnapshotError) -> Self {
        ConceptWriteError::Commit { typegraph_source: error }
    }
}
