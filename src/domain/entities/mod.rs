//! Domain Entities
//!
//! Templates going in, parameter sets and deployment requests coming out.

mod deployment;
mod parameter_set;
mod subscription;
mod template;

pub use deployment::{DeploymentMode, DeploymentOutcome, DeploymentProperties, DeploymentRequest};
pub use parameter_set::{ParameterSet, ParameterValue, ResolvedParameter};
pub use subscription::{Credentials, Location, ResourceGroup, SubscriptionFilter, SubscriptionScope};
pub use template::{DeploymentTemplate, ParameterTemplate, ParameterTemplateEntry, ParameterType};
