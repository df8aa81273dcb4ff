/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chrono::NaiveDate;
use encoding::{
    error::EncodingError,
    graph::{thing::vertex_attribute::AttributeVertex, type_::vertex::TypeID},
    value::{value::Value, value_type::ValueType},
    Keyable,
};

#[test]
fn same_value_encodes_to_same_vertex() {
    let first = AttributeVertex::build(TypeID::new(3), &Value::from("alice"));
    let second = AttributeVertex::build(TypeID::new(3), &Value::from("alice".to_owned()));
    assert_eq!(first, second);
    assert_eq!(first.to_bytes(), second.to_bytes());

    let other_type = AttributeVertex::build(TypeID::new(4), &Value::from("alice"));
    assert_ne!(first.to_storage_key(), other_type.to_storage_key());
}

#[test]
fn attribute_vertex_decodes_type_and_value() {
    let date_time = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap().and_hms_nano_opt(15, 9, 26, 535_000_000).unwrap();
    let values = [
        Value::Boolean(true),
        Value::Long(-42),
        Value::Double(2.5),
        Value::from("bob"),
        Value::DateTime(date_time),
    ];
    for value in values {
        let vertex = AttributeVertex::build(TypeID::new(9), &value);
        let decoded = AttributeVertex::decode(&vertex.to_bytes()).unwrap();
        assert_eq!(decoded.type_id(), TypeID::new(9));
        assert_eq!(decoded.value_type(), value.value_type());
        assert_eq!(decoded.value().unwrap(), value);
    }
}

#[test]
fn instances_of_a_type_share_a_prefix() {
    let prefix = AttributeVertex::build_prefix_type(TypeID::new(5));
    let vertex = AttributeVertex::build(TypeID::new(5), &Value::Long(10));
    assert!(vertex.to_storage_key().starts_with(&prefix));
    let vertex = AttributeVertex::build(TypeID::new(6), &Value::Long(10));
    assert!(!vertex.to_storage_key().starts_with(&prefix));
}

#[test]
fn long_values_sort_numerically_within_a_type() {
    let keys: Vec<_> = [-5i64, -1, 0, 3, 1000]
        .into_iter()
        .map(|long| AttributeVertex::build(TypeID::new(1), &Value::Long(long)).to_storage_key())
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn object_value_type_has_no_values() {
    assert!(matches!(
        Value::decode(ValueType::Object, &[]),
        Err(EncodingError::ValueTypeWithoutValues { value_type: ValueType::Object })
    ));
    assert!(matches!(Value::decode(ValueType::Long, &[1, 2]), Err(EncodingError::UnexpectedLength { .. })));
}
