//! Tagged attribute value and attribute map wire types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single attribute in the store's wire format.
///
/// Externally tagged: the serde representation is exactly the store's JSON
/// shape — `{"S": "..."}`, `{"N": "123"}`, `{"BOOL": true}`. Numbers travel
/// as decimal text under the `N` tag, which is shared by integers, floats,
/// and epoch-millisecond dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// String attribute.
    S(String),
    /// Number attribute, decimal text.
    N(String),
    /// Boolean attribute.
    #[serde(rename = "BOOL")]
    Bool(bool),
}

/// One full record in the store's wire format. Unordered; a missing key is
/// meaningful and distinct from "present but empty."
pub type AttrMap = HashMap<String, AttrValue>;

impl AttrValue {
    /// Build an `S` value.
    pub fn s(value: impl Into<String>) -> Self {
        AttrValue::S(value.into())
    }

    /// Build an `N` value from anything with a decimal text form.
    pub fn n(value: impl ToString) -> Self {
        AttrValue::N(value.to_string())
    }

    /// Build a `BOOL` value.
    pub fn bool(value: bool) -> Self {
        AttrValue::Bool(value)
    }

    /// The wire tag name of this value.
    pub fn tag(&self) -> &'static str {
        match self {
            AttrValue::S(_) => "S",
            AttrValue::N(_) => "N",
            AttrValue::Bool(_) => "BOOL",
        }
    }

    /// The string payload, if this carries the `S` tag.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttrValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// The decimal-text payload, if this carries the `N` tag.
    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttrValue::N(n) => Some(n),
            _ => None,
        }
    }

    /// The boolean payload, if this carries the `BOOL` tag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
