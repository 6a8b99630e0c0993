//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::DeploymentMode;
use crate::domain::value_objects::DEFAULT_DEPLOYMENT_PREFIX;

/// Deployment defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Subscription to use without asking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,

    #[serde(default = "default_deployment_prefix")]
    pub deployment_prefix: String,

    #[serde(default)]
    pub mode: DeploymentMode,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            subscription: None,
            deployment_prefix: default_deployment_prefix(),
            mode: DeploymentMode::default(),
        }
    }
}

fn default_deployment_prefix() -> String {
    DEFAULT_DEPLOYMENT_PREFIX.to_string()
}

/// Azure Resource Manager endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_api_version_resources")]
    pub api_version_resources: String,

    #[serde(default = "default_api_version_subscriptions")]
    pub api_version_subscriptions: String,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            api_version_resources: default_api_version_resources(),
            api_version_subscriptions: default_api_version_subscriptions(),
        }
    }
}

fn default_endpoint() -> String {
    "https://management.azure.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_api_version_resources() -> String {
    "2021-04-01".to_string()
}

fn default_api_version_subscriptions() -> String {
    "2022-12-01".to_string()
}

/// Where the signed-in account's subscriptions are read from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub arm: ArmConfig,

    #[serde(default)]
    pub accounts: AccountsConfig,

    /// Free-form values read by `$name` template parameters
    #[serde(default)]
    pub settings: Map<String, Value>,
}
