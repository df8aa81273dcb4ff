/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::HashSet, sync::Arc};

use concept::{
    error::ConceptWriteError,
    thing::thing_manager::ThingManager,
    type_::{
        thing_type::ThingType, type_manager::TypeManager, Capability, OwnerAPI, PlayerAPI, ThingTypeAPI, TypeAPI,
    },
};
use encoding::{
    graph::type_::{vertex_generator::TypeVertexGenerator, Kind},
    value::{label::Label, value_type::ValueType},
};
use storage::MVCCStorage;
use test_utils::init_logging;

fn setup() -> (Arc<MVCCStorage>, TypeManager, ThingManager) {
    init_logging();
    let storage = Arc::new(MVCCStorage::new("storage"));
    let type_vertex_generator = Arc::new(TypeVertexGenerator::new());
    TypeManager::initialise_types(storage.clone(), type_vertex_generator.clone()).unwrap();
    (storage, TypeManager::new(type_vertex_generator), ThingManager::new())
}

#[test]
fn root_types_are_initialised() {
    let (storage, type_manager, _) = setup();
    let snapshot = storage.clone().open_snapshot_read();

    let root_entity = type_manager.get_root_entity_type(&snapshot).unwrap();
    assert_eq!(root_entity.get_label(&snapshot).unwrap(), Kind::Entity.root_label());
    assert!(root_entity.is_root(&snapshot).unwrap());
    assert!(root_entity.is_abstract(&snapshot).unwrap());
    assert_eq!(root_entity.get_supertype(&snapshot).unwrap(), None);

    let root_attribute = type_manager.get_root_attribute_type(&snapshot).unwrap();
    assert_eq!(root_attribute.get_value_type(), ValueType::Object);

    let root_relation = type_manager.get_root_relation_type(&snapshot).unwrap();
    let root_role = type_manager.get_root_role_type(&snapshot).unwrap();
    assert_eq!(root_role.get_label(&snapshot).unwrap().scoped_name(), "relation:role");
    assert_eq!(root_role.get_relation_type(&snapshot).unwrap(), root_relation);

    // a second initialisation finds the roots and leaves them alone
    TypeManager::initialise_types(storage.clone(), Arc::new(TypeVertexGenerator::new())).unwrap();
    let snapshot = storage.open_snapshot_read();
    assert_eq!(type_manager.get_entity_types(&snapshot).unwrap(), vec![root_entity]);
}

#[test]
fn root_types_reject_structural_mutation() {
    let (storage, type_manager, thing_manager) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let root_entity = type_manager.get_root_entity_type(&snapshot).unwrap();
    let root_attribute = type_manager.get_root_attribute_type(&snapshot).unwrap();
    let root_role = type_manager.get_root_role_type(&snapshot).unwrap();
    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();

    let results = [
        root_entity.set_label(&mut snapshot, &type_manager, &Label::build("thing")),
        root_entity.set_abstract(&mut snapshot, &type_manager),
        root_entity.unset_abstract(&mut snapshot, &type_manager),
        root_entity.set_supertype(&mut snapshot, &type_manager, person),
        root_entity.set_owns(&mut snapshot, &type_manager, name, None, false).map(|_| ()),
        root_entity.set_plays(&mut snapshot, &type_manager, root_role, None).map(|_| ()),
        root_entity.unset_plays(&mut snapshot, &type_manager, root_role),
        root_attribute.set_label(&mut snapshot, &type_manager, &Label::build("property")),
        root_attribute.set_supertype(&mut snapshot, &type_manager, name),
        root_role.set_abstract(&mut snapshot, &type_manager),
        root_entity.delete(&mut snapshot, &type_manager, &thing_manager),
    ];
    for result in results {
        assert!(matches!(result, Err(ConceptWriteError::RootTypeMutation { .. })), "{:?}", result);
    }

    assert_eq!(root_entity.get_label(&snapshot).unwrap(), Kind::Entity.root_label());
    assert!(root_entity.is_abstract(&snapshot).unwrap());
    assert_eq!(root_entity.get_supertype(&snapshot).unwrap(), None);
    assert!(root_entity.get_owns(&snapshot).unwrap().is_empty());
    assert!(root_entity.get_plays(&snapshot).unwrap().is_empty());
}

#[test]
fn subtypes_are_traversed_in_pre_order() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let root = type_manager.get_root_entity_type(&snapshot).unwrap();
    let a = type_manager.create_entity_type(&mut snapshot, &Label::build("a")).unwrap();
    let b = type_manager.create_entity_type(&mut snapshot, &Label::build("b")).unwrap();
    let c = type_manager.create_entity_type(&mut snapshot, &Label::build("c")).unwrap();
    let d = type_manager.create_entity_type(&mut snapshot, &Label::build("d")).unwrap();
    b.set_supertype(&mut snapshot, &type_manager, a).unwrap();
    c.set_supertype(&mut snapshot, &type_manager, a).unwrap();
    d.set_supertype(&mut snapshot, &type_manager, b).unwrap();

    let subtypes: Vec<_> = a.get_subtypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(subtypes, vec![a, b, d, c]);
    let again: Vec<_> = a.get_subtypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(subtypes, again);

    let all: Vec<_> = root.get_subtypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(all, vec![root, a, b, d, c]);
    assert_eq!(HashSet::<_>::from_iter(a.get_subtypes_declared(&snapshot).unwrap()), HashSet::from([b, c]));

    let supertypes: Vec<_> = d.get_supertypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(supertypes, vec![d, b, a, root]);

    snapshot.commit().unwrap();
    let snapshot = storage.open_snapshot_read();
    let subtypes: Vec<_> = a.get_subtypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(subtypes, vec![a, b, d, c]);
}

#[test]
fn supertype_is_single_and_replaced() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let root = type_manager.get_root_entity_type(&snapshot).unwrap();
    let animal = type_manager.create_entity_type(&mut snapshot, &Label::build("animal")).unwrap();
    let plant = type_manager.create_entity_type(&mut snapshot, &Label::build("plant")).unwrap();
    let fern = type_manager.create_entity_type(&mut snapshot, &Label::build("fern")).unwrap();
    assert_eq!(fern.get_supertype(&snapshot).unwrap(), Some(root));

    fern.set_supertype(&mut snapshot, &type_manager, animal).unwrap();
    fern.set_supertype(&mut snapshot, &type_manager, plant).unwrap();
    assert_eq!(fern.get_supertype(&snapshot).unwrap(), Some(plant));
    assert!(animal.get_subtypes_declared(&snapshot).unwrap().is_empty());
    assert!(!root.get_subtypes_declared(&snapshot).unwrap().contains(&fern));

    let supertypes: Vec<_> = fern.get_supertypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(supertypes, vec![fern, plant, root]);
}

#[test]
fn supertype_cycles_and_self_are_rejected() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let a = type_manager.create_entity_type(&mut snapshot, &Label::build("a")).unwrap();
    let b = type_manager.create_entity_type(&mut snapshot, &Label::build("b")).unwrap();
    let c = type_manager.create_entity_type(&mut snapshot, &Label::build("c")).unwrap();
    b.set_supertype(&mut snapshot, &type_manager, a).unwrap();
    c.set_supertype(&mut snapshot, &type_manager, b).unwrap();

    let result = a.set_supertype(&mut snapshot, &type_manager, c);
    assert!(matches!(result, Err(ConceptWriteError::SupertypeCycle { .. })), "{:?}", result);
    let result = a.set_supertype(&mut snapshot, &type_manager, a);
    assert!(matches!(result, Err(ConceptWriteError::SupertypeSelf { .. })), "{:?}", result);

    let supertypes: Vec<_> = c.get_supertypes(&snapshot).collect::<Result<_, _>>().unwrap();
    assert_eq!(supertypes.len(), 4);
}

#[test]
fn supertype_must_be_of_the_same_kind() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();

    let result = person.into_thing_type().set_supertype(&mut snapshot, &type_manager, age.into_thing_type());
    assert!(matches!(result, Err(ConceptWriteError::SupertypeKindMismatch { .. })), "{:?}", result);
}

#[test]
fn labels_are_unique_across_kinds() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    type_manager.create_entity_type(&mut snapshot, &Label::build("company")).unwrap();

    let result = type_manager.create_entity_type(&mut snapshot, &Label::build("person"));
    assert!(matches!(result, Err(ConceptWriteError::LabelAlreadyInUse { .. })), "{:?}", result);
    let result = type_manager.create_attribute_type(&mut snapshot, &Label::build("person"), ValueType::Long);
    assert!(matches!(result, Err(ConceptWriteError::LabelAlreadyInUse { .. })), "{:?}", result);
    let result = person.set_label(&mut snapshot, &type_manager, &Label::build("company"));
    assert!(matches!(result, Err(ConceptWriteError::LabelAlreadyInUse { .. })), "{:?}", result);

    person.set_label(&mut snapshot, &type_manager, &Label::build("human")).unwrap();
    assert_eq!(person.get_label(&snapshot).unwrap(), Label::build("human"));
    assert_eq!(type_manager.get_entity_type(&snapshot, &Label::build("person")).unwrap(), None);
    assert_eq!(type_manager.get_entity_type(&snapshot, &Label::build("human")).unwrap(), Some(person));
    assert_eq!(type_manager.get_relation_type(&snapshot, &Label::build("human")).unwrap(), None);
    assert_eq!(
        type_manager.get_thing_type(&snapshot, &Label::build("human")).unwrap(),
        Some(ThingType::Entity(person))
    );

    // the old label is free again
    type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
}

#[test]
fn abstractness_round_trips() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    assert!(!person.is_abstract(&snapshot).unwrap());
    assert!(person.get_annotations_declared(&snapshot).unwrap().is_empty());
    person.set_abstract(&mut snapshot, &type_manager).unwrap();
    assert!(person.is_abstract(&snapshot).unwrap());
    assert_eq!(person.get_annotations_declared(&snapshot).unwrap().len(), 1);
    person.unset_abstract(&mut snapshot, &type_manager).unwrap();
    assert!(!person.is_abstract(&snapshot).unwrap());
}

#[test]
fn owns_are_inherited_and_narrowed_by_override() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    name.set_abstract(&mut snapshot, &type_manager).unwrap();
    let first_name =
        type_manager.create_attribute_type(&mut snapshot, &Label::build("first-name"), ValueType::String).unwrap();
    first_name.set_supertype(&mut snapshot, &type_manager, name).unwrap();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let child = type_manager.create_entity_type(&mut snapshot, &Label::build("child")).unwrap();
    let adult = type_manager.create_entity_type(&mut snapshot, &Label::build("adult")).unwrap();
    child.set_supertype(&mut snapshot, &type_manager, person).unwrap();
    adult.set_supertype(&mut snapshot, &type_manager, person).unwrap();

    let person_owns_name = person.set_owns(&mut snapshot, &type_manager, name, None, false).unwrap();
    let child_owns_first_name = child.set_owns(&mut snapshot, &type_manager, first_name, Some(name), false).unwrap();

    assert_eq!(person.get_owns(&snapshot).unwrap(), HashSet::from([person_owns_name]));
    assert_eq!(adult.get_owns(&snapshot).unwrap(), HashSet::from([person_owns_name]));
    assert!(adult.get_owns_declared(&snapshot).unwrap().is_empty());
    assert_eq!(child.get_owns(&snapshot).unwrap(), HashSet::from([child_owns_first_name]));
    assert!(!child.has_owns_attribute(&snapshot, name).unwrap());
    assert_eq!(child.get_owns_attribute(&snapshot, first_name).unwrap(), Some(child_owns_first_name));

    assert_eq!(child_owns_first_name.get_override(&snapshot).unwrap(), Some(name));
    assert_eq!(person_owns_name.get_override(&snapshot).unwrap(), None);
    assert_eq!(child_owns_first_name.owner(), ThingType::Entity(child));

    let owners = name.get_owners(&snapshot).unwrap();
    assert_eq!(
        owners.keys().copied().collect::<HashSet<_>>(),
        HashSet::from([ThingType::Entity(person), ThingType::Entity(adult)])
    );
    assert_eq!(owners[&ThingType::Entity(adult)], person_owns_name);
    assert_eq!(name.get_owners_declared(&snapshot).unwrap(), HashSet::from([person_owns_name]));
    assert_eq!(
        first_name.get_owners(&snapshot).unwrap().keys().copied().collect::<Vec<_>>(),
        vec![ThingType::Entity(child)]
    );

    snapshot.commit().unwrap();
    let snapshot = storage.open_snapshot_read();
    assert_eq!(child.get_owns(&snapshot).unwrap(), HashSet::from([child_owns_first_name]));
}

#[test]
fn owns_rejects_invalid_overrides_and_keys() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    name.set_abstract(&mut snapshot, &type_manager).unwrap();
    let first_name =
        type_manager.create_attribute_type(&mut snapshot, &Label::build("first-name"), ValueType::String).unwrap();
    first_name.set_supertype(&mut snapshot, &type_manager, name).unwrap();
    let age = type_manager.create_attribute_type(&mut snapshot, &Label::build("age"), ValueType::Long).unwrap();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let child = type_manager.create_entity_type(&mut snapshot, &Label::build("child")).unwrap();
    let company = type_manager.create_entity_type(&mut snapshot, &Label::build("company")).unwrap();
    child.set_supertype(&mut snapshot, &type_manager, person).unwrap();
    person.set_owns(&mut snapshot, &type_manager, name, None, false).unwrap();

    let result = child.set_owns(&mut snapshot, &type_manager, age, Some(name), false);
    assert!(matches!(result, Err(ConceptWriteError::OverriddenInterfaceNotSupertype { .. })), "{:?}", result);
    let result = company.set_owns(&mut snapshot, &type_manager, first_name, Some(name), false);
    assert!(matches!(result, Err(ConceptWriteError::OverriddenInterfaceNotInherited { .. })), "{:?}", result);
    let result = child.unset_owns(&mut snapshot, &type_manager, name);
    assert!(matches!(result, Err(ConceptWriteError::CapabilityNotDeclared { .. })), "{:?}", result);

    let root_attribute = type_manager.get_root_attribute_type(&snapshot).unwrap();
    let result = person.set_owns(&mut snapshot, &type_manager, root_attribute, None, true);
    assert!(matches!(result, Err(ConceptWriteError::AttributeTypeNotKeyable { .. })), "{:?}", result);

    let owns_age = person.set_owns(&mut snapshot, &type_manager, age, None, true).unwrap();
    assert!(owns_age.is_key(&snapshot).unwrap());
    let owns_age = person.set_owns(&mut snapshot, &type_manager, age, None, false).unwrap();
    assert!(!owns_age.is_key(&snapshot).unwrap());

    person.unset_owns(&mut snapshot, &type_manager, age).unwrap();
    assert!(!person.has_owns_attribute(&snapshot, age).unwrap());
    assert!(age.get_owners(&snapshot).unwrap().is_empty());
}

#[test]
fn relation_types_relate_scoped_roles() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let employment = type_manager.create_relation_type(&mut snapshot, &Label::build("employment")).unwrap();
    let employee = employment.create_relates(&mut snapshot, &type_manager, "employee").unwrap();
    let employer = employment.create_relates(&mut snapshot, &type_manager, "employer").unwrap();

    assert_eq!(employee.get_label(&snapshot).unwrap().scoped_name(), "employment:employee");
    assert_eq!(
        type_manager.get_role_type(&snapshot, &Label::build_scoped("employer", "employment")).unwrap(),
        Some(employer)
    );
    assert_eq!(employee.get_relation_type(&snapshot).unwrap(), employment);
    assert_eq!(employment.get_relates_role(&snapshot, "employer").unwrap(), Some(employer));
    assert_eq!(employment.get_relates_role(&snapshot, "contractor").unwrap(), None);
    assert_eq!(employment.get_relates_declared(&snapshot).unwrap().len(), 2);
    assert_eq!(employment.get_relates(&snapshot).unwrap().len(), 3);
    assert_eq!(employee.get_supertype(&snapshot).unwrap(), Some(type_manager.get_root_role_type(&snapshot).unwrap()));

    let result = employment.create_relates(&mut snapshot, &type_manager, "employee");
    assert!(matches!(result, Err(ConceptWriteError::LabelAlreadyInUse { .. })), "{:?}", result);
    let root_relation = type_manager.get_root_relation_type(&snapshot).unwrap();
    let result = root_relation.create_relates(&mut snapshot, &type_manager, "member");
    assert!(matches!(result, Err(ConceptWriteError::RootTypeMutation { .. })), "{:?}", result);

    // relates are inherited by subtypes of the relation
    let contract = type_manager.create_relation_type(&mut snapshot, &Label::build("contract")).unwrap();
    contract.set_supertype(&mut snapshot, &type_manager, employment).unwrap();
    assert_eq!(contract.get_relates_role(&snapshot, "employee").unwrap(), Some(employee));
    assert!(contract.get_relates_declared(&snapshot).unwrap().is_empty());
}

#[test]
fn plays_are_inherited_and_narrowed_by_override() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let employment = type_manager.create_relation_type(&mut snapshot, &Label::build("employment")).unwrap();
    let employee = employment.create_relates(&mut snapshot, &type_manager, "employee").unwrap();
    let contract = type_manager.create_relation_type(&mut snapshot, &Label::build("contract")).unwrap();
    contract.set_supertype(&mut snapshot, &type_manager, employment).unwrap();
    let contractor = contract.create_relates(&mut snapshot, &type_manager, "contractor").unwrap();
    contractor.set_supertype(&mut snapshot, &type_manager, employee).unwrap();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let freelancer = type_manager.create_entity_type(&mut snapshot, &Label::build("freelancer")).unwrap();
    freelancer.set_supertype(&mut snapshot, &type_manager, person).unwrap();

    let person_plays = person.set_plays(&mut snapshot, &type_manager, employee, None).unwrap();
    assert_eq!(freelancer.get_plays(&snapshot).unwrap(), HashSet::from([person_plays]));
    assert_eq!(freelancer.get_plays_role(&snapshot, employee).unwrap(), Some(person_plays));

    let freelancer_plays = freelancer.set_plays(&mut snapshot, &type_manager, contractor, Some(employee)).unwrap();
    assert_eq!(freelancer.get_plays(&snapshot).unwrap(), HashSet::from([freelancer_plays]));
    assert_eq!(freelancer_plays.get_override(&snapshot).unwrap(), Some(employee));
    assert_eq!(
        employee.get_players(&snapshot).unwrap().keys().copied().collect::<Vec<_>>(),
        vec![ThingType::Entity(person)]
    );
    assert_eq!(employee.get_players_declared(&snapshot).unwrap(), HashSet::from([person_plays]));

    let result = person.set_plays(&mut snapshot, &type_manager, contractor, Some(contractor));
    assert!(matches!(result, Err(ConceptWriteError::OverriddenInterfaceNotSupertype { .. })), "{:?}", result);
    let result = freelancer.unset_plays(&mut snapshot, &type_manager, employee);
    assert!(matches!(result, Err(ConceptWriteError::CapabilityNotDeclared { .. })), "{:?}", result);

    freelancer.unset_plays(&mut snapshot, &type_manager, contractor).unwrap();
    assert_eq!(freelancer.get_plays(&snapshot).unwrap(), HashSet::from([person_plays]));
}

#[test]
fn deletion_requires_unreferenced_leaf_types() {
    let (storage, type_manager, thing_manager) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let child = type_manager.create_entity_type(&mut snapshot, &Label::build("child")).unwrap();
    child.set_supertype(&mut snapshot, &type_manager, person).unwrap();
    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    let employment = type_manager.create_relation_type(&mut snapshot, &Label::build("employment")).unwrap();
    let employee = employment.create_relates(&mut snapshot, &type_manager, "employee").unwrap();
    child.set_owns(&mut snapshot, &type_manager, name, None, false).unwrap();
    child.set_plays(&mut snapshot, &type_manager, employee, None).unwrap();

    let result = person.delete(&mut snapshot, &type_manager, &thing_manager);
    assert!(matches!(result, Err(ConceptWriteError::CannotDeleteTypeWithSubtypes { .. })), "{:?}", result);
    let result = name.delete(&mut snapshot, &type_manager, &thing_manager);
    assert!(matches!(result, Err(ConceptWriteError::CannotDeleteInterfaceInUse { .. })), "{:?}", result);
    let result = employment.delete(&mut snapshot, &type_manager, &thing_manager);
    assert!(matches!(result, Err(ConceptWriteError::CannotDeleteInterfaceInUse { .. })), "{:?}", result);
    assert_eq!(employee.get_relation_type(&snapshot).unwrap(), employment);

    child.delete(&mut snapshot, &type_manager, &thing_manager).unwrap();
    assert_eq!(type_manager.get_entity_type(&snapshot, &Label::build("child")).unwrap(), None);
    assert!(person.get_subtypes_declared(&snapshot).unwrap().is_empty());
    assert!(name.get_owners(&snapshot).unwrap().is_empty());
    assert!(employee.get_players(&snapshot).unwrap().is_empty());

    name.delete(&mut snapshot, &type_manager, &thing_manager).unwrap();
    assert_eq!(type_manager.get_attribute_type(&snapshot, &Label::build("name")).unwrap(), None);
    employment.delete(&mut snapshot, &type_manager, &thing_manager).unwrap();
    assert_eq!(type_manager.get_relation_type(&snapshot, &Label::build("employment")).unwrap(), None);
    assert_eq!(type_manager.get_role_type(&snapshot, &Label::build_scoped("employee", "employment")).unwrap(), None);
    assert_eq!(type_manager.get_role_types(&snapshot).unwrap().len(), 1);

    person.delete(&mut snapshot, &type_manager, &thing_manager).unwrap();
    snapshot.commit().unwrap();
    let snapshot = storage.open_snapshot_read();
    assert_eq!(type_manager.get_entity_types(&snapshot).unwrap().len(), 1);
}

#[test]
fn role_type_deletion_leaves_relation() {
    let (storage, type_manager, thing_manager) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let employment = type_manager.create_relation_type(&mut snapshot, &Label::build("employment")).unwrap();
    let employee = employment.create_relates(&mut snapshot, &type_manager, "employee").unwrap();
    let employer = employment.create_relates(&mut snapshot, &type_manager, "employer").unwrap();

    employee.delete(&mut snapshot, &type_manager, &thing_manager).unwrap();
    assert_eq!(employment.get_relates_role(&snapshot, "employee").unwrap(), None);
    assert_eq!(employment.get_relates_role(&snapshot, "employer").unwrap(), Some(employer));
    assert!(type_manager.get_relation_type(&snapshot, &Label::build("employment")).unwrap().is_some());
}

#[test]
fn owners_resolve_to_the_nearest_declaration() {
    let (storage, type_manager, _) = setup();
    let mut snapshot = storage.clone().open_snapshot_write();

    let name = type_manager.create_attribute_type(&mut snapshot, &Label::build("name"), ValueType::String).unwrap();
    let person = type_manager.create_entity_type(&mut snapshot, &Label::build("person")).unwrap();
    let adult = type_manager.create_entity_type(&mut snapshot, &Label::build("adult")).unwrap();
    let senior = type_manager.create_entity_type(&mut snapshot, &Label::build("senior")).unwrap();
    adult.set_supertype(&mut snapshot, &type_manager, person).unwrap();
    senior.set_supertype(&mut snapshot, &type_manager, adult).unwrap();

    let person_owns_name = person.set_owns(&mut snapshot, &type_manager, name, None, false).unwrap();
    let adult_owns_name = adult.set_owns(&mut snapshot, &type_manager, name, None, false).unwrap();

    let owners = name.get_owners(&snapshot).unwrap();
    assert_eq!(owners.len(), 3);
    assert_eq!(owners[&ThingType::Entity(person)], person_owns_name);
    assert_eq!(owners[&ThingType::Entity(adult)], adult_owns_name);
    assert_eq!(owners[&ThingType::Entity(senior)], adult_owns_name);
}
