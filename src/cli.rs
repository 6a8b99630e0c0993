use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// armdeploy - interactive ARM template deployment
#[derive(Parser, Debug)]
#[command(name = "armdeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Set ARMDEPLOY_LOG (e.g. ARMDEPLOY_LOG=debug) for detailed logs.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Workspace folder; `$$` parameters read files next to it
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Config file to use instead of the project/user config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Accounts file with subscriptions and access tokens
    #[arg(long, global = true, value_name = "FILE")]
    pub accounts: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy an ARM template to a resource group
    Deploy {
        /// ARM template file
        template: PathBuf,

        /// Subscription to deploy to (skips the subscription prompt)
        #[arg(long)]
        subscription: Option<String>,
    },

    /// Resolve a template's parameters and print them
    Params {
        /// ARM template file
        template: PathBuf,

        /// Subscription for `$subscription` parameters
        #[arg(long)]
        subscription: Option<String>,
    },

    /// Pick or create a resource group
    Group {
        /// Subscription to use (skips the subscription prompt)
        #[arg(long)]
        subscription: Option<String>,
    },

    /// Check parameter values against a template without prompting
    Validate {
        /// ARM template file
        template: PathBuf,

        /// Value to check, repeatable
        #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

/// Split `NAME=VALUE` at the first `=`; the value may be empty.
fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}
