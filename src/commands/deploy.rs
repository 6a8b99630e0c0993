use std::path::Path;

use anyhow::Result;
use armdeploy::domain::entities::DeploymentTemplate;
use armdeploy::presentation::factory;

use super::{aborted, Environment, Globals};

pub fn cmd_deploy(globals: &Globals, template: &Path, subscription: Option<String>) -> Result<()> {
    let env = Environment::load(globals)?;
    let template = DeploymentTemplate::load(template)?;

    let events = factory::create_event_sink(globals.json, globals.verbose, "deploy");
    let use_case = factory::create_deploy_use_case(&env.config, env.accounts, events)?;
    let mut session = factory::create_session(&env.config, subscription, env.workspace);

    let Some(outcome) = use_case.deploy(&template, &mut session)? else {
        aborted();
    };

    if !globals.json {
        println!(
            "Deployment {} submitted ({})",
            outcome.name,
            outcome.provisioning_state.as_deref().unwrap_or("unknown")
        );
    }
    Ok(())
}
