//! Parameter source value object - where a parameter's raw value comes from
//!
//! Precedence is fixed: a closed choice wins over the `$$` file form, which
//! wins over the `$` configuration form, which wins over free-form input.
//! A key like `$$sku` with `allowedValues` is therefore a choice.

use crate::domain::entities::ParameterTemplateEntry;

/// Configuration name holding the IoT Hub connection string.
pub const IOTHUB_CONNECTION_STRING: &str = "iothubConnectionString";

/// Acquisition strategy for one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterSource<'a> {
    /// Pick one of the allowed values
    Choice(Vec<String>),
    /// Read a file relative to the workspace parent
    File(&'a str),
    /// Read from configuration
    Config(ConfigKey<'a>),
    /// Free-form, validated input
    Input,
}

/// Sub-name of a `$`-prefixed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey<'a> {
    IotHubName,
    IotHubKeyName,
    IotHubKey,
    Subscription,
    Setting(&'a str),
}

impl<'a> ConfigKey<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name {
            "iotHubName" => ConfigKey::IotHubName,
            "iotHubKeyName" => ConfigKey::IotHubKeyName,
            "iotHubKey" => ConfigKey::IotHubKey,
            "subscription" => ConfigKey::Subscription,
            other => ConfigKey::Setting(other),
        }
    }
}

impl<'a> ParameterSource<'a> {
    pub fn classify(key: &'a str, entry: &ParameterTemplateEntry) -> Self {
        if let Some(labels) = entry.allowed_labels() {
            return ParameterSource::Choice(labels);
        }
        if let Some(path) = key.strip_prefix("$$") {
            return ParameterSource::File(path);
        }
        if let Some(name) = key.strip_prefix('$') {
            return ParameterSource::Config(ConfigKey::parse(name));
        }
        ParameterSource::Input
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterSource::Choice(_) => "choice",
            ParameterSource::File(_) => "file",
            ParameterSource::Config(_) => "config",
            ParameterSource::Input => "input",
        }
    }
}
