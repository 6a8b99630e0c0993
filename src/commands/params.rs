use std::path::Path;

use anyhow::Result;
use armdeploy::domain::entities::DeploymentTemplate;
use armdeploy::presentation::factory;

use super::{aborted, Environment, Globals};

pub fn cmd_params(globals: &Globals, template: &Path, subscription: Option<String>) -> Result<()> {
    let env = Environment::load(globals)?;
    let template = DeploymentTemplate::load(template)?;

    let events = factory::create_event_sink(globals.json, globals.verbose, "params");
    let use_case = factory::create_deploy_use_case(&env.config, env.accounts, events)?;
    let session = factory::create_session(&env.config, subscription, env.workspace);

    let Some(parameters) = use_case.resolve_parameters(template.parameters(), &session)? else {
        aborted();
    };

    if globals.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "data",
                "command": "params",
                "parameters": parameters,
            })
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&parameters)?);
    }
    Ok(())
}
