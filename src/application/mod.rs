//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - subscription, resource group, parameters, submit
//! - `ParameterSetBuilder` - resolve a template's parameters on their own

pub mod deploy;
pub mod parameters;

#[cfg(test)]
pub(crate) mod test_support;

pub use deploy::{DeployOptions, DeploySession, DeployUseCase};
pub use parameters::{ParameterResolver, ParameterSetBuilder, ResolutionContext};
