//! Configuration module for armdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARMDEPLOY_*)
//! 3. Project config (.armdeploy/config.toml)
//! 4. User config (~/.config/armdeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    default_accounts_path, discover, ConfigWarning, LoadedConfig, PROJECT_CONFIG, USER_CONFIG,
};
pub use types::{AccountsConfig, ArmConfig, Config, DeployConfig};
