/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::{
    graph::type_::{CapabilityKind, Kind},
    value::{label::Label, value_type::ValueType},
};
use error::typegraph_error;

use crate::error::ConceptReadError;

pub mod commit_time_validation;
pub(crate) mod operation_time_validation;

typegraph_error! {
    pub SchemaValidationError(component = "Schema validation", prefix = "SVL") {
        ConceptRead(1, "Failed to read the schema while validating it.", ( typegraph_source: ConceptReadError )),
        LabelIndexMismatch(2, "Type '{label}' is not the type its label is indexed to.", label: Label),
        RootHasSupertype(3, "Root type '{label}' has a supertype.", label: Label),
        MissingSupertype(4, "Type '{label}' has no supertype.", label: Label),
        SupertypeKindMismatch(5, "Type '{label}' of kind '{kind}' subtypes '{supertype}' of kind '{supertype_kind}'.", label: Label, kind: Kind, supertype: Label, supertype_kind: Kind),
        SupertypeChainDoesNotReachRoot(6, "The supertypes of '{label}' do not lead to the root type '{root}'.", label: Label, root: Label),
        AttributeSupertypeValueTypeMismatch(7, "Attribute type '{label}' with value type '{value_type}' subtypes '{supertype}' with value type '{supertype_value_type}'.", label: Label, value_type: ValueType, supertype: Label, supertype_value_type: ValueType),
        AttributeSupertypeNotAbstract(8, "Attribute type '{label}' subtypes '{supertype}', which is not abstract.", label: Label, supertype: Label),
        ConcreteAttributeTypeWithSubtypes(9, "Attribute type '{label}' has subtypes but is not abstract.", label: Label),
        OverriddenCapabilityNotInherited(10, "Type '{label}' overrides {capability} '{overridden}', which it does not inherit.", label: Label, capability: CapabilityKind, overridden: Label),
        OverriddenInterfaceNotSupertype(11, "Type '{label}' overrides {capability} '{overridden}' with '{interface}', which is not a subtype of it.", label: Label, capability: CapabilityKind, interface: Label, overridden: Label),
        MultipleOverridesOfSameInterface(12, "Type '{label}' overrides {capability} '{overridden}' more than once.", label: Label, capability: CapabilityKind, overridden: Label),
        DeclaredCapabilityHiddenByOverride(13, "Type '{label}' declares {capability} '{interface}' and also overrides it.", label: Label, capability: CapabilityKind, interface: Label),
        RedeclaredCapabilityWithoutOverride(14, "Type '{label}' redeclares inherited {capability} '{interface}'.", label: Label, capability: CapabilityKind, interface: Label),
        KeyOwnsNotVisible(15, "Type '{label}' declares '{attribute}' as a key but does not effectively own it.", label: Label, attribute: Label),
    }
}

impl From<ConceptReadError> for SchemaValidationError {
    fn from(error: ConceptReadError) -> Self {
        SchemaValidationError::ConceptRead { typegraph_source: error }
    }
}
