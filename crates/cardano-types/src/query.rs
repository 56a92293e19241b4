// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pass-through query parameters
//!
//! Every Blockfrost endpoint accepts optional query parameters (`count`,
//! `page`, `order`, `from`, `to`, ...). The client does not know or validate
//! them: [`QueryParams`] is an open, ordered mapping of parameter name to a
//! scalar [`QueryValue`] that is forwarded verbatim.

use std::fmt;

use serde::Serialize;

/// A scalar query parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Text value
    String(String),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating point value
    Float(f64),
    /// Boolean value, rendered as `true`/`false`
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! query_value_from_int {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

query_value_from_int!(Int => i8, i16, i32, i64);
query_value_from_int!(UInt => u8, u16, u32, u64);

/// Ordered set of query parameters forwarded verbatim to the upstream API
///
/// Keys are unique: inserting an existing key replaces its value in place.
///
/// # Examples
///
/// ```rust
/// use cardano_types::QueryParams;
///
/// let params = QueryParams::new().with("count", 10).with("order", "desc");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("order").unwrap().to_string(), "desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value for that key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a parameter by name
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut params = QueryParams::new();
        assert!(params.insert("count", 10).is_none());
        assert!(params.insert("order", "asc").is_none());

        let previous = params.insert("count", 20);
        assert_eq!(previous, Some(QueryValue::Int(10)));

        let keys: Vec<_> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["count", "order"]);
        assert_eq!(params.get("count"), Some(&QueryValue::Int(20)));
    }

    #[test]
    fn values_render_verbatim() {
        assert_eq!(QueryValue::from("desc").to_string(), "desc");
        assert_eq!(QueryValue::from(-3_i32).to_string(), "-3");
        assert_eq!(QueryValue::from(42_u64).to_string(), "42");
        assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from(true).to_string(), "true");
    }

    #[test]
    fn serializes_as_ordered_pairs() {
        let params = QueryParams::from([("page", QueryValue::from(2_u32))])
            .with("order", "desc")
            .with("count", 5);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!([["page", 2], ["order", "desc"], ["count", 5]])
        );
    }

    #[test]
    fn empty_by_default() {
        let params = QueryParams::default();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert!(params.get("count").is_none());
    }
}
