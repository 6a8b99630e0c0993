//! Accounts-file session provider
//!
//! Reads the signed-in account's subscriptions from a JSON file:
//!
//! ```json
//! {"subscriptions": [
//!   {"subscriptionId": "...", "displayName": "...", "accessToken": "..."}
//! ]}
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{Credentials, SubscriptionFilter};
use crate::domain::ports::SessionProvider;
use crate::error::{DeployError, DeployResult};

pub const ACCOUNT_SESSION: &str = "Azure account session";

#[derive(Debug, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    subscriptions: Vec<AccountEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountEntry {
    subscription_id: String,
    #[serde(default)]
    display_name: Option<String>,
    access_token: Credentials,
}

impl From<AccountEntry> for SubscriptionFilter {
    fn from(entry: AccountEntry) -> Self {
        let display_name = entry
            .display_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| entry.subscription_id.clone());
        SubscriptionFilter {
            subscription_id: entry.subscription_id,
            display_name,
            credentials: entry.access_token,
        }
    }
}

/// `SessionProvider` backed by an accounts file.
///
/// The file is re-read on every call so a token refreshed mid-run is picked up.
#[derive(Debug, Clone)]
pub struct JsonSessionProvider {
    path: Option<PathBuf>,
}

impl JsonSessionProvider {
    /// `None` means no accounts file could be located at all.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl SessionProvider for JsonSessionProvider {
    fn filters(&self) -> DeployResult<Vec<SubscriptionFilter>> {
        let Some(path) = self.path.as_deref().filter(|p| p.is_file()) else {
            return Err(DeployError::missing(ACCOUNT_SESSION));
        };

        let content = std::fs::read_to_string(path)?;
        let file: AccountsFile =
            serde_json::from_str(&content).map_err(|e| DeployError::Config {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(path = %path.display(), count = file.subscriptions.len(), "accounts loaded");
        Ok(file.subscriptions.into_iter().map(Into::into).collect())
    }
}
