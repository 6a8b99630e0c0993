use std::path::Path;

use anyhow::{bail, Result};
use armdeploy::domain::entities::{DeploymentTemplate, ParameterTemplateEntry};
use armdeploy::domain::services::violation;

use super::Globals;

pub const NOT_ALLOWED: &str = "The value is not one of the allowed values.";

/// Problem with `value`, if any. Choice parameters only accept their labels.
fn check(value: &str, entry: &ParameterTemplateEntry) -> Option<String> {
    match entry.allowed_labels() {
        Some(labels) if !labels.iter().any(|l| l == value) => Some(NOT_ALLOWED.to_string()),
        Some(_) => None,
        None => violation(value, entry),
    }
}

pub fn cmd_validate(globals: &Globals, template: &Path, params: &[(String, String)]) -> Result<()> {
    let template = DeploymentTemplate::load(template)?;

    let mut results = Vec::with_capacity(params.len());
    for (name, value) in params {
        let Some(entry) = template.parameters().get(name) else {
            bail!("template has no parameter named '{}'", name);
        };
        results.push((name.as_str(), check(value, entry)));
    }

    let valid = results.iter().all(|(_, message)| message.is_none());

    if globals.json {
        let items: Vec<serde_json::Value> = results
            .iter()
            .map(|(name, message)| serde_json::json!({ "name": name, "message": message }))
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "data",
                "command": "validate",
                "valid": valid,
                "results": items,
            })
        );
    } else {
        for (name, message) in &results {
            match message {
                Some(message) => println!("{}: {}", name, message),
                None => println!("{}: ok", name),
            }
        }
    }

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}
