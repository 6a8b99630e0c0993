//! Deployment request and outcome

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parameter_set::ParameterSet;

/// How ARM treats resources already in the group.
///
/// Only incremental deployments are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeploymentMode {
    #[default]
    Incremental,
}

/// Body of `PUT .../deployments/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentRequest {
    pub properties: DeploymentProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentProperties {
    pub template: Value,
    pub parameters: ParameterSet,
    pub mode: DeploymentMode,
}

impl DeploymentRequest {
    pub fn incremental(template: Value, parameters: ParameterSet) -> Self {
        Self {
            properties: DeploymentProperties {
                template,
                parameters,
                mode: DeploymentMode::Incremental,
            },
        }
    }
}

/// What ARM returned for a submitted deployment.
///
/// Only a few fields are read; the full response is kept in `raw`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentOutcome {
    pub name: String,
    pub id: Option<String>,
    pub provisioning_state: Option<String>,
    pub raw: Value,
}

impl DeploymentOutcome {
    pub fn from_response(name: &str, raw: Value) -> Self {
        let id = raw.get("id").and_then(Value::as_str).map(str::to_string);
        let provisioning_state = raw
            .pointer("/properties/provisioningState")
            .and_then(Value::as_str)
            .map(str::to_string);
        let name = raw
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string();
        Self {
            name,
            id,
            provisioning_state,
            raw,
        }
    }
}
