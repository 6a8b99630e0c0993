//! Deploy Module
//!
//! Orchestrates an ARM template deployment.
//!
//! ## Structure
//!
//! - `options` - Configuration and per-run state (`DeployOptions`, `DeploySession`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use armdeploy::application::deploy::{DeploySession, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(session, arm, config, fs, prompter, events);
//! let outcome = use_case.deploy(&template, &mut DeploySession::new())?;
//! ```

mod options;
mod use_case;

pub use options::{DeployOptions, DeploySession};
pub use use_case::{DeployUseCase, CREATE_RESOURCE_GROUP_LABEL, NO_SUBSCRIPTION_LABEL};
