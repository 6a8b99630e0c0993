//! Azure Resource Manager REST client
//!
//! Blocking `reqwest` client for the handful of ARM calls a deployment needs.
//! Every request carries the bearer token of the scope it acts on.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ArmConfig;
use crate::domain::entities::{
    DeploymentOutcome, DeploymentRequest, Location, ResourceGroup, SubscriptionScope,
};
use crate::domain::ports::ResourceManager;
use crate::error::{DeployError, DeployResult};

/// A page of an ARM list response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
    #[serde(default)]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// `ResourceManager` over the ARM REST API.
pub struct ArmRestClient {
    client: Client,
    endpoint: String,
    api_version_resources: String,
    api_version_subscriptions: String,
}

impl ArmRestClient {
    /// Build a client for the endpoint and API versions in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Http`] when the TLS backend cannot be set up.
    pub fn new(config: &ArmConfig) -> DeployResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("armdeploy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_version_resources: config.api_version_resources.clone(),
            api_version_subscriptions: config.api_version_subscriptions.clone(),
        })
    }

    fn groups_url(&self, scope: &SubscriptionScope) -> String {
        format!(
            "{}/subscriptions/{}/resourcegroups",
            self.endpoint, scope.subscription_id
        )
    }

    fn group_url(&self, scope: &SubscriptionScope, name: &str) -> String {
        format!("{}/{}", self.groups_url(scope), name)
    }

    fn authorized(&self, builder: RequestBuilder, scope: &SubscriptionScope) -> RequestBuilder {
        builder.bearer_auth(scope.credentials.token())
    }

    fn send(&self, builder: RequestBuilder) -> DeployResult<Response> {
        let response = builder.send()?;
        let status = response.status();
        trace!(url = %response.url(), %status, "ARM response");
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(arm_error(status, &body))
        }
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        scope: &SubscriptionScope,
        url: &str,
        api_version: &str,
    ) -> DeployResult<T> {
        let builder = self
            .client
            .get(url)
            .query(&[("api-version", api_version)]);
        Ok(self.send(self.authorized(builder, scope))?.json()?)
    }

    /// Collect every page of a list endpoint.
    ///
    /// `nextLink` already carries its own query string.
    fn list_all<T: DeserializeOwned>(
        &self,
        scope: &SubscriptionScope,
        url: &str,
        api_version: &str,
    ) -> DeployResult<Vec<T>> {
        let first: Page<T> = self.get_json(scope, url, api_version)?;
        let mut items = first.value;
        let mut next = first.next_link;

        while let Some(link) = next.take() {
            debug!(next_link = %link, "following ARM page");
            let page: Page<T> = self
                .send(self.authorized(self.client.get(&link), scope))?
                .json()?;
            items.extend(page.value);
            next = page.next_link;
        }

        Ok(items)
    }
}

/// Turn a failed ARM response into an error, keeping ARM's own code and
/// message when the body has them.
fn arm_error(status: StatusCode, body: &str) -> DeployError {
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (
            status.canonical_reason().unwrap_or("Unknown").to_string(),
            body.trim().to_string(),
        ),
    };
    DeployError::Arm {
        status: status.as_u16(),
        code,
        message,
    }
}

impl ResourceManager for ArmRestClient {
    fn list_resource_groups(&self, scope: &SubscriptionScope) -> DeployResult<Vec<ResourceGroup>> {
        self.list_all(scope, &self.groups_url(scope), &self.api_version_resources)
    }

    fn resource_group_exists(&self, scope: &SubscriptionScope, name: &str) -> DeployResult<bool> {
        let builder = self
            .client
            .head(self.group_url(scope, name))
            .query(&[("api-version", self.api_version_resources.as_str())]);
        let response = self.authorized(builder, scope).send()?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(arm_error(status, "")),
        }
    }

    fn create_resource_group(
        &self,
        scope: &SubscriptionScope,
        name: &str,
        location: &str,
    ) -> DeployResult<ResourceGroup> {
        let builder = self
            .client
            .put(self.group_url(scope, name))
            .query(&[("api-version", self.api_version_resources.as_str())])
            .json(&serde_json::json!({ "location": location }));
        Ok(self.send(self.authorized(builder, scope))?.json()?)
    }

    fn list_locations(&self, scope: &SubscriptionScope) -> DeployResult<Vec<Location>> {
        let url = format!(
            "{}/subscriptions/{}/locations",
            self.endpoint, scope.subscription_id
        );
        self.list_all(scope, &url, &self.api_version_subscriptions)
    }

    fn create_deployment(
        &self,
        scope: &SubscriptionScope,
        resource_group: &str,
        deployment_name: &str,
        request: &DeploymentRequest,
    ) -> DeployResult<DeploymentOutcome> {
        let url = format!(
            "{}/providers/Microsoft.Resources/deployments/{}",
            self.group_url(scope, resource_group),
            deployment_name
        );
        let builder = self
            .client
            .put(url)
            .query(&[("api-version", self.api_version_resources.as_str())])
            .json(request);
        let raw: Value = self.send(self.authorized(builder, scope))?.json()?;
        Ok(DeploymentOutcome::from_response(deployment_name, raw))
    }
}
