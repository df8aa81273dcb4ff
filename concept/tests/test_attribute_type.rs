/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::Arc;

use chrono::NaiveDate;
use concept::{
    error::{ConceptReadError, ConceptWriteError},
    thing::thing_manager::ThingManager,
    type_::{
        attribute_type::AttributeType, entity_type::EntityType, thing_type::ThingType, type_manager::TypeManager,
        TypeAPI,
    },
};
use encoding::{
    graph::type_::{property::TypeVertexPropertyEncoding, vertex_generator::TypeVertexGenerator, Kind},
    value::{label::Label, value::Value, value_type::ValueType},
};
use resource::constants::encoding::STRING_MAX_LENGTH;
use storage::{snapshot::WritableSnapshot, MVCCStorage};
use test_utils::init_logging;

fn setup() -> (Arc<MVCCStorage>, TypeManager, ThingManager) {
    init_logging();
    let storage = Arc::new(MVCCStorage::new("storage"));
    let type_vertex_generator = Arc::new(TypeVertexGenerator::new());
    TypeManager::initialise_types(storage.clone(), type_vertex_generator.clone()).unwrap();
    (storage, TypeManager::new(type_vertex_generator), ThingManager::new())
}

fn create_committed(storage: &Arc<MVCCStorage>, type_manager: &TypeManager, name: &str, value_type: ValueType) {
    let mut snapshot = storage.clone().open_snapshot_write();
    type_manager.create_attribute_type(&mut snapshot, &Label::build(name), value_type).unwrap();
    snapshot.commit().unwrap();
}

#[test]
fn casting_is_checked_against_value_type() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();
    assert_eq!(age.get_value_type(), ValueType::Long);
    assert_eq!(age.as_long(&snapshot).unwrap(), age);
    let result = age.as_string(&snapshot);
    assert!(matches!(result, Err(ConceptReadError::InvalidConceptCasting { .. })), "{:?}", result);

    let result = AttributeType::from_vertex_with_value_type(&snapshot, age.vertex(), ValueType::Double);
    assert!(matches!(result, Err(ConceptReadError::ValueTypeMismatch { .. })), "{:?}", result);

    let root = type_manager.get_root_attribute_type(&snapshot).unwrap();
    assert!(!root.is_keyable());
    let root_as_string = root.as_string(&snapshot).unwrap();
    assert_eq!(root_as_string.get_value_type(), ValueType::String);
    assert_eq!(root_as_string, root);
    let root_as_long = AttributeType::from_vertex_with_value_type(&snapshot, root.vertex(), ValueType::Long).unwrap();
    assert_eq!(root_as_long.get_value_type(), ValueType::Long);
}

#[test]
fn root_view_sees_subtypes_of_its_value_type() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();
    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    let root = type_manager.get_root_attribute_type(&snapshot).unwrap();

    let all: Vec<_> = root.get_subtypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(all, vec![root, age, name]);
    let longs: Vec<_> = root.as_long(&snapshot).unwrap().get_subtypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(longs, vec![root, age]);
    let strings = root.as_string(&snapshot).unwrap().get_subtypes_declared(&snapshot).unwrap();
    assert_eq!(strings, vec![name]);

    // climbing from a typed subtype keeps the value type on the root
    let supertype = age.get_supertype(&snapshot).unwrap().unwrap();
    assert_eq!(supertype, root);
    assert_eq!(supertype.get_value_type(), ValueType::Long);
}

#[test]
fn attribute_supertypes_must_be_abstract_and_share_value_type() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    let first_name =
        type_manager.create_attribute_type(&mut snapshot, &Label::build("first-name"), ValueType::String).unwrap();
    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();

    let result = first_name.set_supertype(&mut snapshot, &type_manager, name);
    assert!(matches!(result, Err(ConceptWriteError::AttributeSupertypeNotAbstract { .. })), "{:?}", result);

    // value type is checked before abstractness
    let result = age.set_supertype(&mut snapshot, &type_manager, name);
    assert!(matches!(result, Err(ConceptWriteError::AttributeSupertypeValueTypeMismatch { .. })), "{:?}", result);

    name.set_abstract(&mut snapshot, &type_manager).unwrap();
    first_name.set_supertype(&mut snapshot, &type_manager, name).unwrap();
    assert_eq!(first_name.get_supertype(&snapshot).unwrap(), Some(name));

    let result = name.set_supertype(&mut snapshot, &type_manager, name);
    assert!(matches!(result, Err(ConceptWriteError::SupertypeSelf { .. })), "{:?}", result);

    let result = name.unset_abstract(&mut snapshot, &type_manager);
    assert!(
        matches!(result, Err(ConceptWriteError::AttributeTypeWithSubtypesMustBeAbstract { .. })),
        "{:?}",
        result
    );
    assert!(name.is_abstract(&snapshot).unwrap());

    // the root accepts every value type
    let root = type_manager.get_root_attribute_type(&snapshot).unwrap();
    age.set_supertype(&mut snapshot, &type_manager, root).unwrap();
}

#[test]
fn object_value_type_is_reserved() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let result = type_manager.create_attribute_type(&mut snapshot, &Label::build("thing"), ValueType::Object);
    assert!(matches!(result, Err(ConceptWriteError::ReservedValueType { .. })), "{:?}", result);
    assert_eq!(type_manager.get_attribute_type(&snapshot, &Label::build("thing")).unwrap(), None);
}

#[test]
fn values_require_a_committed_concrete_type() {
    let (storage, type_manager, thing_manager) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();
    let result = age.put(&mut snapshot, &thing_manager, Value::from(10i64));
    assert!(matches!(result, Err(ConceptWriteError::TypeNotCommitted { .. })), "{:?}", result);
    snapshot.commit().unwrap();

    let mut snapshot = storage.clone().open_snapshot_write();
    let age = type_manager.get_attribute_type(&snapshot, &Label::build("age")).unwrap().unwrap();
    let first = age.put(&mut snapshot, &thing_manager, Value::from(10i64)).unwrap();
    let second = age.put(&mut snapshot, &thing_manager, Value::from(10i64)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get_value().unwrap(), Value::from(10i64));
    assert_eq!(first.get_type(&snapshot).unwrap(), age);
    assert_eq!(age.get(&snapshot, &thing_manager, Value::from(10i64)).unwrap(), Some(first));
    assert_eq!(age.get(&snapshot, &thing_manager, Value::from(11i64)).unwrap(), None);
    assert_eq!(age.get(&snapshot, &thing_manager, Value::from("10")).unwrap(), None);

    let result = age.put(&mut snapshot, &thing_manager, Value::from(1.5f64));
    assert!(matches!(result, Err(ConceptWriteError::AttributeValueTypeMismatch { .. })), "{:?}", result);

    age.set_abstract(&mut snapshot, &type_manager).unwrap();
    let result = age.put(&mut snapshot, &thing_manager, Value::from(12i64));
    assert!(matches!(result, Err(ConceptWriteError::AttributeTypeIsAbstract { .. })), "{:?}", result);

    let root = type_manager.get_root_attribute_type(&snapshot).unwrap().as_long(&snapshot).unwrap();
    let result = root.put(&mut snapshot, &thing_manager, Value::from(12i64));
    assert!(matches!(result, Err(ConceptWriteError::AttributeTypeIsAbstract { .. })), "{:?}", result);
}

#[test]
fn string_values_are_bounded() {
    let (storage, type_manager, thing_manager) = setup();
    create_committed(&storage, &type_manager, "name", ValueType::String);

    let mut snapshot = storage.clone().open_snapshot_write();
    let name = type_manager.get_attribute_type(&snapshot, &Label::build("name")).unwrap().unwrap();

    let longest = "a".repeat(STRING_MAX_LENGTH);
    let attribute = name.put(&mut snapshot, &thing_manager, Value::from(longest.as_str())).unwrap();
    assert_eq!(attribute.get_value().unwrap(), Value::from(longest.as_str()));

    let too_long = "a".repeat(STRING_MAX_LENGTH + 1);
    let result = name.put(&mut snapshot, &thing_manager, Value::from(too_long.as_str()));
    assert!(
        matches!(result, Err(ConceptWriteError::IllegalStringSize { length, .. }) if length == STRING_MAX_LENGTH + 1),
        "{:?}",
        result
    );
    assert_eq!(name.get(&snapshot, &thing_manager, Value::from(too_long.as_str())).unwrap(), None);
}

#[test]
fn only_datetime_attributes_are_promoted_to_explicit() {
    let (storage, type_manager, thing_manager) = setup();
    create_committed(&storage, &type_manager, "birth-date", ValueType::DateTime);
    create_committed(&storage, &type_manager, "age", ValueType::Long);

    let mut snapshot = storage.clone().open_snapshot_write();
    let birth_date = type_manager.get_attribute_type(&snapshot, &Label::build("birth-date")).unwrap().unwrap();
    let age = type_manager.get_attribute_type(&snapshot, &Label::build("age")).unwrap().unwrap();
    let date_time = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();

    let inferred = birth_date.put_with_inferred(&mut snapshot, &thing_manager, Value::from(date_time), true).unwrap();
    assert!(inferred.is_inferred(&snapshot).unwrap());
    let explicit = birth_date.put(&mut snapshot, &thing_manager, Value::from(date_time)).unwrap();
    assert_eq!(inferred, explicit);
    assert!(!explicit.is_inferred(&snapshot).unwrap());

    let inferred = age.put_with_inferred(&mut snapshot, &thing_manager, Value::from(42i64), true).unwrap();
    let again = age.put(&mut snapshot, &thing_manager, Value::from(42i64)).unwrap();
    assert_eq!(inferred, again);
    assert!(again.is_inferred(&snapshot).unwrap());

    // an explicit attribute never becomes inferred
    let explicit = age.put(&mut snapshot, &thing_manager, Value::from(7i64)).unwrap();
    age.put_with_inferred(&mut snapshot, &thing_manager, Value::from(7i64), true).unwrap();
    assert!(!explicit.is_inferred(&snapshot).unwrap());
}

#[test]
fn instances_span_subtypes_and_block_deletion() {
    let (storage, type_manager, thing_manager) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();
    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    name.set_abstract(&mut snapshot, &type_manager).unwrap();
    let first_name =
        type_manager.create_attribute_type(&mut snapshot, &Label::build("first-name"), ValueType::String).unwrap();
    let last_name =
        type_manager.create_attribute_type(&mut snapshot, &Label::build("last-name"), ValueType::String).unwrap();
    first_name.set_supertype(&mut snapshot, &type_manager, name).unwrap();
    last_name.set_supertype(&mut snapshot, &type_manager, name).unwrap();
    snapshot.commit().unwrap();

    let mut snapshot = storage.clone().open_snapshot_write();
    first_name.put(&mut snapshot, &thing_manager, Value::from("ada")).unwrap();
    first_name.put(&mut snapshot, &thing_manager, Value::from("grace")).unwrap();
    last_name.put(&mut snapshot, &thing_manager, Value::from("lovelace")).unwrap();

    let values: Vec<_> = name
        .get_instances(&snapshot, &thing_manager)
        .map(|attribute| attribute.and_then(|attribute| attribute.get_value()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values, vec![Value::from("ada"), Value::from("grace"), Value::from("lovelace")]);
    assert_eq!(last_name.get_instances(&snapshot, &thing_manager).count(), 1);

    let result = last_name.delete(&mut snapshot, &type_manager, &thing_manager);
    assert!(matches!(result, Err(ConceptWriteError::CannotDeleteTypeWithInstances { .. })), "{:?}", result);
    snapshot.commit().unwrap();

    let snapshot = storage.open_snapshot_read();
    assert_eq!(name.get_instances(&snapshot, &thing_manager).count(), 3);
}

#[test]
fn deleted_types_reject_values() {
    let (storage, type_manager, thing_manager) = setup();
    create_committed(&storage, &type_manager, "age", ValueType::Long);

    let mut snapshot = storage.clone().open_snapshot_write();
    let age = type_manager.get_attribute_type(&snapshot, &Label::build("age")).unwrap().unwrap();
    age.delete(&mut snapshot, &type_manager, &thing_manager).unwrap();
    let result = age.put(&mut snapshot, &thing_manager, Value::from(5i64));
    assert!(matches!(result, Err(ConceptWriteError::TypeDeleted { vertex }) if vertex == age.vertex()), "{:?}", result);
    assert_eq!(thing_manager.get_attributes_in(&snapshot, age).count(), 0);
    snapshot.commit().unwrap();

    let snapshot = storage.open_snapshot_read();
    assert_eq!(type_manager.get_attribute_type(&snapshot, &Label::build("age")).unwrap(), None);
    assert!(!thing_manager.has_instances(&snapshot, age));
}

#[test]
fn vertices_of_the_wrong_kind_or_value_type_are_rejected() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();
    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();
    let root_role = type_manager.get_root_role_type(&snapshot).unwrap();

    let result = EntityType::from_vertex(&snapshot, age.vertex());
    assert!(
        matches!(result, Err(ConceptReadError::TypeRootMismatch { expected: Kind::Entity, actual: Kind::Attribute })),
        "{:?}",
        result
    );
    let result = ThingType::from_vertex(&snapshot, root_role.vertex());
    assert!(matches!(result, Err(ConceptReadError::TypeRootMismatch { actual: Kind::Role, .. })), "{:?}", result);

    snapshot.put_val(ValueType::build_key(age.vertex()), vec![42u8]);
    let result = AttributeType::from_vertex(&snapshot, age.vertex());
    assert!(matches!(result, Err(ConceptReadError::UnrecognisedValue { byte: 42 })), "{:?}", result);
    let result = type_manager.get_attribute_type(&snapshot, &Label::build("age"));
    assert!(matches!(result, Err(ConceptReadError::UnrecognisedValue { .. })), "{:?}", result);
}
