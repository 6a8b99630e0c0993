//! Subscription, credential and resource-group entities

use serde::{Deserialize, Serialize};

/// Bearer credentials for ARM calls.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credentials(String);

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credentials(***)")
    }
}

/// A subscription the signed-in account can deploy to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFilter {
    pub subscription_id: String,
    pub display_name: String,
    pub credentials: Credentials,
}

/// Subscription id plus the credentials to act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionScope {
    pub subscription_id: String,
    pub credentials: Credentials,
}

/// An Azure region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Programmatic name, e.g. `westus2`
    pub name: String,
    /// Human name, e.g. `West US 2`
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub name: String,
    pub location: String,
}
