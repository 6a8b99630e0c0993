use anyhow::Result;
use armdeploy::presentation::factory;

use super::{aborted, Environment, Globals};

pub fn cmd_group(globals: &Globals, subscription: Option<String>) -> Result<()> {
    let env = Environment::load(globals)?;

    let events = factory::create_event_sink(globals.json, globals.verbose, "group");
    let use_case = factory::create_deploy_use_case(&env.config, env.accounts, events)?;
    let mut session = factory::create_session(&env.config, subscription, env.workspace);

    let Some(name) = use_case.select_resource_group(&mut session)? else {
        aborted();
    };

    if globals.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "data",
                "command": "group",
                "resource_group": name,
            })
        );
    } else {
        println!("{}", name);
    }
    Ok(())
}
