/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{borrow::Cow, fmt};

use chrono::NaiveDateTime;

use crate::{
    error::EncodingError,
    value::{
        boolean_bytes::BooleanBytes, date_time_bytes::DateTimeBytes, double_bytes::DoubleBytes,
        long_bytes::LongBytes, string_bytes::StringBytes, value_type::ValueType,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Boolean(bool),
    Long(i64),
    Double(f64),
    String(Cow<'a, str>),
    DateTime(NaiveDateTime),
}

impl<'a> Value<'a> {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Long(_) => ValueType::Long,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::DateTime(_) => ValueType::DateTime,
        }
    }

    pub fn as_reference(&self) -> Value<'_> {
        match self {
            Value::Boolean(boolean) => Value::Boolean(*boolean),
            Value::Long(long) => Value::Long(*long),
            Value::Double(double) => Value::Double(*double),
            Value::String(string) => Value::String(Cow::Borrowed(string.as_ref())),
            Value::DateTime(date_time) => Value::DateTime(*date_time),
        }
    }

    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Boolean(boolean) => Value::Boolean(boolean),
            Value::Long(long) => Value::Long(long),
            Value::Double(double) => Value::Double(double),
            Value::String(string) => Value::String(Cow::Owned(string.into_owned())),
            Value::DateTime(date_time) => Value::DateTime(date_time),
        }
    }

    pub fn unwrap_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    pub fn unwrap_long(&self) -> Option<i64> {
        match self {
            Value::Long(long) => Some(*long),
            _ => None,
        }
    }

    pub fn unwrap_double(&self) -> Option<f64> {
        match self {
            Value::Double(double) => Some(*double),
            _ => None,
        }
    }

    pub fn unwrap_string(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string.as_ref()),
            _ => None,
        }
    }

    pub fn unwrap_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(date_time) => Some(*date_time),
            _ => None,
        }
    }

    /// Order-preserving encoding of the value within its value type.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Value::Boolean(boolean) => BooleanBytes::build(*boolean).bytes().to_vec(),
            Value::Long(long) => LongBytes::build(*long).bytes().to_vec(),
            Value::Double(double) => DoubleBytes::build(*double).bytes().to_vec(),
            Value::String(string) => StringBytes::build(string).bytes().to_vec(),
            Value::DateTime(date_time) => DateTimeBytes::build(*date_time).bytes().to_vec(),
        }
    }

    pub fn decode(value_type: ValueType, bytes: &[u8]) -> Result<Value<'static>, EncodingError> {
        match value_type {
            ValueType::Object => Err(EncodingError::ValueTypeWithoutValues { value_type }),
            ValueType::Boolean => Ok(Value::Boolean(BooleanBytes::new(fixed_width(bytes)?).as_bool())),
            ValueType::Long => Ok(Value::Long(LongBytes::new(fixed_width(bytes)?).as_i64())),
            ValueType::Double => Ok(Value::Double(DoubleBytes::new(fixed_width(bytes)?).as_f64())),
            ValueType::String => {
                let string = StringBytes::new(bytes).as_str()?.to_owned();
                Ok(Value::String(Cow::Owned(string)))
            }
            ValueType::DateTime => Ok(Value::DateTime(DateTimeBytes::new(fixed_width(bytes)?).as_naive_date_time()?)),
        }
    }
}

fn fixed_width<const N: usize>(bytes: &[u8]) -> Result<[u8; N], EncodingError> {
    bytes.try_into().map_err(|_| EncodingError::UnexpectedLength { expected: N, actual: bytes.len() })
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(boolean) => write!(f, "{}", boolean),
            Value::Long(long) => write!(f, "{}", long),
            Value::Double(double) => write!(f, "{}", double),
            Value::String(string) => write!(f, "\"{}\"", string),
            Value::DateTime(date_time) => write!(f, "{}", date_time),
        }
    }
}

impl From<bool> for Value<'static> {
    fn from(boolean: bool) -> Self {
        Value::Boolean(boolean)
    }
}

impl From<i64> for Value<'static> {
    fn from(long: i64) -> Self {
        Value::Long(long)
    }
}

impl From<f64> for Value<'static> {
    fn from(double: f64) -> Self {
        Value::Double(double)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(string: &'a str) -> Self {
        Value::String(Cow::Borrowed(string))
    }
}

impl From<String> for Value<'static> {
    fn from(string: String) -> Self {
        Value::String(Cow::Owned(string))
    }
}

impl From<NaiveDateTime> for Value<'static> {
    fn from(date_time: NaiveDateTime) -> Self {
        Value::DateTime(date_time)
    }
}
