use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const TEMPLATE: &str = r#"{
  "$schema": "https://schema.management.azure.com/schemas/2019-04-01/deploymentTemplate.json#",
  "parameters": {
    "hubName": { "type": "string", "minLength": 3, "maxLength": 50 },
    "partitions": { "type": "int", "minValue": 2, "maxValue": 32 },
    "sku": { "type": "string", "allowedValues": ["F1", "S1"] }
  },
  "resources": []
}"#;

fn write_template(dir: &Path) -> PathBuf {
    let path = dir.join("azuredeploy.json");
    fs::write(&path, TEMPLATE).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_armdeploy"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_validate_accepts_good_values() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());

    let output = run(
        dir.path(),
        &[
            "validate",
            template.to_str().unwrap(),
            "--param",
            "hubName=myhub",
            "--param",
            "partitions=4",
            "--param",
            "sku=S1",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "hubName: ok\npartitions: ok\nsku: ok\n");
}

#[test]
fn test_validate_reports_each_violation() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());

    let output = run(
        dir.path(),
        &[
            "validate",
            template.to_str().unwrap(),
            "--param",
            "hubName=ab",
            "--param",
            "partitions=lots",
            "--param",
            "sku=P1",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    hubName: The value doesn't meet requirement: minLength 3.
    partitions: The value is not a valid number.
    sku: The value is not one of the allowed values.
    ");
}

#[test]
fn test_validate_json_output() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());

    let output = run(
        dir.path(),
        &[
            "validate",
            "--json",
            template.to_str().unwrap(),
            "--param",
            "partitions=40",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["command"], "validate");
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["results"][0]["message"],
        "The value doesn't meet requirement: maxValue 32."
    );
}

#[test]
fn test_validate_unknown_parameter_is_an_error() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());

    let output = run(
        dir.path(),
        &["validate", template.to_str().unwrap(), "--param", "nope=1"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("template has no parameter named 'nope'"), "{stderr}");
}

#[test]
fn test_validate_missing_template_fails() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["validate", "missing.json"]);

    assert!(!output.status.success());
}
