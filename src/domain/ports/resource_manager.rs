//! Resource manager port - the ARM operations a deployment needs

use crate::domain::entities::{
    DeploymentOutcome, DeploymentRequest, Location, ResourceGroup, SubscriptionScope,
};
use crate::error::DeployResult;

pub trait ResourceManager {
    fn list_resource_groups(&self, scope: &SubscriptionScope) -> DeployResult<Vec<ResourceGroup>>;

    fn resource_group_exists(&self, scope: &SubscriptionScope, name: &str) -> DeployResult<bool>;

    fn create_resource_group(
        &self,
        scope: &SubscriptionScope,
        name: &str,
        location: &str,
    ) -> DeployResult<ResourceGroup>;

    fn list_locations(&self, scope: &SubscriptionScope) -> DeployResult<Vec<Location>>;

    fn create_deployment(
        &self,
        scope: &SubscriptionScope,
        resource_group: &str,
        deployment_name: &str,
        request: &DeploymentRequest,
    ) -> DeployResult<DeploymentOutcome>;
}
