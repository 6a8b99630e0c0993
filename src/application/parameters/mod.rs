//! Parameter Resolution
//!
//! Turns a template's parameter declarations into the values a deployment is
//! submitted with. Each key is served by exactly one source:
//!
//! - `allowedValues` present → the user picks one
//! - `$$path` → file beside the workspace folder
//! - `$name` → configuration (IoT Hub connection string fields, the selected
//!   subscription, or any other setting)
//! - anything else → validated free-form input

mod builder;
mod resolver;

pub use builder::ParameterSetBuilder;
pub use resolver::{workspace_file_path, ParameterResolver, ResolutionContext};
