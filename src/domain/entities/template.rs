//! Deployment template entity
//!
//! A deployment template is an ARM template document. Only its `parameters`
//! section is interpreted here; the rest is passed through untouched to the
//! deployment request.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DeployError, DeployResult};

/// Declared type of a template parameter.
///
/// Matching is case-insensitive. Types other than `string`, `int` and `bool`
/// (`securestring`, `object`, `array`, ...) are kept verbatim and receive no
/// coercion or validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterType {
    #[default]
    String,
    Int,
    Bool,
    Other(String),
}

impl From<&str> for ParameterType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "string" => ParameterType::String,
            "int" => ParameterType::Int,
            "bool" => ParameterType::Bool,
            _ => ParameterType::Other(s.to_string()),
        }
    }
}

impl From<String> for ParameterType {
    fn from(s: String) -> Self {
        ParameterType::from(s.as_str())
    }
}

impl From<ParameterType> for String {
    fn from(t: ParameterType) -> Self {
        t.to_string()
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterType::String => write!(f, "string"),
            ParameterType::Int => write!(f, "int"),
            ParameterType::Bool => write!(f, "bool"),
            ParameterType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Contract a resolved parameter value must satisfy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterTemplateEntry {
    #[serde(rename = "type", default)]
    pub param_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl ParameterTemplateEntry {
    pub fn new(param_type: impl Into<ParameterType>) -> Self {
        Self {
            param_type: param_type.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_allowed_values(mut self, values: Vec<Value>) -> Self {
        self.allowed_values = Some(values);
        self
    }

    pub fn with_value_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_length_range(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Text to pre-fill a free-form prompt with.
    ///
    /// Objects and arrays have no textual form and pre-fill nothing.
    pub fn default_text(&self) -> String {
        match &self.default_value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => {
                String::new()
            }
        }
    }

    /// Allowed values as choice labels, literal `null`s removed.
    pub fn allowed_labels(&self) -> Option<Vec<String>> {
        self.allowed_values.as_ref().map(|values| {
            values
                .iter()
                .filter_map(|v| match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect()
        })
    }
}

/// Parameter name → entry, in declaration order.
pub type ParameterTemplate = IndexMap<String, ParameterTemplateEntry>;

/// An ARM template plus its parsed parameter declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentTemplate {
    raw: Value,
    parameters: ParameterTemplate,
}

impl DeploymentTemplate {
    /// Build from a parsed template document.
    ///
    /// A document without a `parameters` section has no parameters.
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let parameters = match raw.get("parameters") {
            Some(section) => serde_json::from_value(section.clone())?,
            None => ParameterTemplate::new(),
        };
        Ok(Self { raw, parameters })
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(source)?)
    }

    pub fn load(path: &Path) -> DeployResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| DeployError::InvalidTemplate {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn parameters(&self) -> &ParameterTemplate {
        &self.parameters
    }

    /// The full template document, as submitted to ARM.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
