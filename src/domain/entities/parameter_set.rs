//! Resolved deployment parameters
//!
//! The shape mirrors what ARM expects in `properties.parameters`:
//! `{ "name": { "value": ... } }`.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Text(String),
    /// `NaN` marks text that did not convert to a number.
    Number(f64),
    Bool(bool),
    /// The declared type has no coercion.
    Null,
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // 2^53: beyond this f64 no longer represents every integer.
        const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

        match self {
            ParameterValue::Text(s) => serializer.serialize_str(s),
            ParameterValue::Bool(b) => serializer.serialize_bool(*b),
            ParameterValue::Number(n) if !n.is_finite() => serializer.serialize_none(),
            ParameterValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            ParameterValue::Number(n) => serializer.serialize_f64(*n),
            ParameterValue::Null => serializer.serialize_none(),
        }
    }
}

/// One entry of a [`ParameterSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameter {
    pub value: ParameterValue,
}

/// Parameter name → resolved value, in template declaration order.
///
/// Only the parameter builder can add entries; callers receive a finished set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: IndexMap<String, ResolvedParameter>,
}

impl ParameterSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.entries
            .insert(name.into(), ResolvedParameter { value });
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries.get(name).map(|p| &p.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), &p.value))
    }
}
