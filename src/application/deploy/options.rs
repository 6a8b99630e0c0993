//! Deploy Options and per-run session state

use std::path::PathBuf;

use crate::domain::value_objects::DEFAULT_DEPLOYMENT_PREFIX;

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Prefix of generated deployment names
    pub deployment_prefix: String,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            deployment_prefix: DEFAULT_DEPLOYMENT_PREFIX.to_string(),
        }
    }
}

impl DeployOptions {
    pub fn with_deployment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.deployment_prefix = prefix.into();
        self
    }
}

/// State carried through one deployment.
///
/// The subscription is chosen at most once per session; later steps (and the
/// `$subscription` parameter) reuse it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploySession {
    pub subscription_id: Option<String>,
    pub workspace_root: Option<PathBuf>,
}

impl DeploySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscription(mut self, subscription_id: Option<String>) -> Self {
        self.subscription_id = subscription_id.filter(|s| !s.is_empty());
        self
    }

    pub fn with_workspace_root(mut self, root: Option<PathBuf>) -> Self {
        self.workspace_root = root;
        self
    }
}
