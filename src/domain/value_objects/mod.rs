//! Value Objects
//!
//! Small immutable types with their own rules.

mod connection_string;
mod deployment_name;
mod parameter_source;
mod resource_group_name;

pub use connection_string::ConnectionString;
pub use deployment_name::{DeploymentName, DEFAULT_DEPLOYMENT_PREFIX};
pub use parameter_source::{ConfigKey, ParameterSource, IOTHUB_CONNECTION_STRING};
pub use resource_group_name::{
    is_valid_resource_group_name, INVALID_RESOURCE_GROUP_NAME, RESOURCE_GROUP_NAME_TAKEN,
};
