//! Command implementations
//!
//! Each command loads configuration, wires a use case through the factory
//! and reports the outcome. A user abandoning a prompt exits with status 2.

pub mod deploy;
pub mod group;
pub mod params;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use armdeploy::config::{self, Config};
use armdeploy::presentation::factory;

/// Flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub json: bool,
    pub verbose: u8,
    pub workspace: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub accounts: Option<PathBuf>,
}

/// Everything a command needs before it can build a use case
pub struct Environment {
    pub config: Config,
    pub workspace: Option<PathBuf>,
    pub accounts: Option<PathBuf>,
}

impl Environment {
    pub fn load(globals: &Globals) -> Result<Self> {
        let workspace = globals
            .workspace
            .clone()
            .or_else(|| std::env::current_dir().ok());

        let loaded = config::discover(workspace.as_deref(), globals.config.as_deref())
            .context("failed to load configuration")?;
        for warning in &loaded.warnings {
            eprintln!("Warning: {}", warning);
        }

        let accounts = factory::accounts_path(globals.accounts.as_deref(), &loaded.config);
        Ok(Self {
            config: loaded.config,
            workspace,
            accounts,
        })
    }
}

/// Report an abandoned flow and exit.
pub fn aborted() -> ! {
    eprintln!("Aborted.");
    std::process::exit(2);
}
