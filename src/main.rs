//! armdeploy CLI - interactive ARM template deployment
//!
//! Usage: armdeploy <COMMAND>
//!
//! Commands:
//!   deploy    Deploy an ARM template to a resource group
//!   params    Resolve a template's parameters and print them
//!   group     Pick or create a resource group
//!   validate  Check parameter values against a template

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Globals;

/// `ARMDEPLOY_LOG` if set, else a level from the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ARMDEPLOY_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let globals = Globals {
        json: cli.json,
        verbose: cli.verbose,
        workspace: cli.workspace,
        config: cli.config,
        accounts: cli.accounts,
    };

    match cli.command {
        Commands::Deploy {
            template,
            subscription,
        } => commands::deploy::cmd_deploy(&globals, &template, subscription),
        Commands::Params {
            template,
            subscription,
        } => commands::params::cmd_params(&globals, &template, subscription),
        Commands::Group { subscription } => commands::group::cmd_group(&globals, subscription),
        Commands::Validate { template, params } => {
            commands::validate::cmd_validate(&globals, &template, &params)
        }
    }
}
