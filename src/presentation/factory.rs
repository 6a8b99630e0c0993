//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::application::{DeployOptions, DeploySession, DeployUseCase};
use crate::config::{default_accounts_path, Config};
use crate::domain::ports::{DeployEventSink, NoopEventSink, Prompter};
use crate::error::DeployResult;
use crate::infrastructure::{
    ArmRestClient, ConsoleEventSink, JsonEventSink, JsonSessionProvider, LocalFs, SettingsStore,
    TerminalPrompter,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<JsonSessionProvider, ArmRestClient, SettingsStore, LocalFs>;

/// Accounts file: the flag, then config (which already carries
/// `ARMDEPLOY_ACCOUNTS`), then the per-user default.
pub fn accounts_path(flag: Option<&Path>, config: &Config) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| config.accounts.path.clone())
        .or_else(default_accounts_path)
}

/// Session state seeded from the flag or configured subscription.
pub fn create_session(
    config: &Config,
    subscription: Option<String>,
    workspace_root: Option<PathBuf>,
) -> DeploySession {
    DeploySession::new()
        .with_subscription(subscription.or_else(|| config.deploy.subscription.clone()))
        .with_workspace_root(workspace_root)
}

/// Event sink for a command: NDJSON on stdout, else progress on stderr.
pub fn create_event_sink(json: bool, verbose: u8, command: &'static str) -> Rc<dyn DeployEventSink> {
    if json {
        Rc::new(JsonEventSink::stdout(command))
    } else if verbose > 0 {
        Rc::new(ConsoleEventSink::stderr(verbose > 1))
    } else {
        Rc::new(NoopEventSink)
    }
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(
    config: &Config,
    accounts: Option<PathBuf>,
    events: Rc<dyn DeployEventSink>,
) -> DeployResult<ConcreteDeployUseCase> {
    let prompter: Rc<dyn Prompter> = Rc::new(TerminalPrompter::new());
    create_deploy_use_case_with_prompter(config, accounts, prompter, events)
}

/// Create a deploy use case with a specific prompter
pub fn create_deploy_use_case_with_prompter(
    config: &Config,
    accounts: Option<PathBuf>,
    prompter: Rc<dyn Prompter>,
    events: Rc<dyn DeployEventSink>,
) -> DeployResult<ConcreteDeployUseCase> {
    let use_case = DeployUseCase::new(
        JsonSessionProvider::new(accounts),
        ArmRestClient::new(&config.arm)?,
        SettingsStore::from_config(config),
        LocalFs::new(),
        prompter,
        events,
    )
    .with_options(
        DeployOptions::default().with_deployment_prefix(config.deploy.deployment_prefix.clone()),
    );
    Ok(use_case)
}
