// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute values and nested property records
//!
//! Scalar attribute values appear on object-definition components and as the
//! nominal values of property records. Property records are recursive: a
//! complex property wraps a nested list of records. Nested records are
//! embedded by value and never receive their own component identity.

use serde::{Deserialize, Serialize};

/// Scalar attribute value as it appears on the wire
///
/// Serializes to plain JSON; the variant is recovered from the JSON shape on
/// deserialization. Enumeration values are carried as strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Absent / null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String or enumeration value
    String(String),
    /// List of values
    List(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as float (integers widen)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(f: f64) -> Self {
        AttributeValue::Float(f)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

/// A single property record inside a property-set component
///
/// Exactly one of `nominal_value` (a scalar) or `wrapped_value` (a nested
/// record list) is populated. The `type` field carries the declared value
/// type name from the source schema (e.g. `IfcLabel`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Property name
    pub name: String,
    /// Declared value type name
    #[serde(rename = "type")]
    pub value_type: String,
    /// Scalar value, for simple properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_value: Option<AttributeValue>,
    /// Nested records, for complex properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped_value: Option<Vec<PropertyRecord>>,
}

impl PropertyRecord {
    /// Create a simple property with a scalar value
    pub fn nominal(
        name: impl Into<String>,
        value_type: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            nominal_value: Some(value.into()),
            wrapped_value: None,
        }
    }

    /// Create a complex property wrapping nested records
    pub fn wrapped(
        name: impl Into<String>,
        value_type: impl Into<String>,
        records: Vec<PropertyRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            nominal_value: None,
            wrapped_value: Some(records),
        }
    }
}
