//! Deployment name value object - `<prefix><epoch-millis>`

use chrono::{DateTime, Utc};

pub const DEFAULT_DEPLOYMENT_PREFIX: &str = "IoTWorkbenchDeploy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentName(String);

impl DeploymentName {
    pub fn at(prefix: &str, time: DateTime<Utc>) -> Self {
        Self(format!("{}{}", prefix, time.timestamp_millis()))
    }

    pub fn now(prefix: &str) -> Self {
        Self::at(prefix, Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeploymentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
