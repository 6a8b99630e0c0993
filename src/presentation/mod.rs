//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Choosing how progress is reported (console or NDJSON)
//!
//! ## Usage
//!
//! ```ignore
//! use armdeploy::presentation::factory;
//!
//! let events = factory::create_event_sink(false, 1, "deploy");
//! let use_case = factory::create_deploy_use_case(&config, accounts, events)?;
//! let outcome = use_case.deploy(&template, &mut session)?;
//! ```

pub mod factory;

pub use factory::{create_deploy_use_case, ConcreteDeployUseCase};
