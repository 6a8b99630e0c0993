//! armdeploy - interactive ARM template deployment
//!
//! Resolves an ARM template's parameters from user choices, free-form input,
//! workspace files and configuration, then submits the deployment to a
//! picked (or newly created) resource group.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeploySession, DeployUseCase, ParameterSetBuilder};
pub use config::Config;
pub use domain::entities::{
    DeploymentTemplate, ParameterSet, ParameterTemplate, ParameterTemplateEntry, ParameterType,
    ParameterValue,
};
pub use domain::services::{coerce, validate};
pub use error::{DeployError, DeployResult};
