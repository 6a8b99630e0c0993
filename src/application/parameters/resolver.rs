//! Parameter source resolution
//!
//! Obtains the raw text for one template parameter from whichever source its
//! key and entry select. `Ok(None)` means the user walked away and the whole
//! parameter set must be abandoned.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::{ParameterTemplateEntry, ParameterValue};
use crate::domain::ports::{
    ChoiceItem, ConfigStore, DeployEvent, DeployEventSink, FileSystem, FsError, InputRequest,
    Prompter, SelectRequest,
};
use crate::domain::services::{coerce, violation};
use crate::domain::value_objects::{
    ConfigKey, ConnectionString, ParameterSource, IOTHUB_CONNECTION_STRING,
};
use crate::error::DeployResult;

/// What a resolution may consult besides configuration and the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionContext<'a> {
    /// Subscription already chosen for this deployment
    pub subscription_id: Option<&'a str>,
    /// Anchor for `$$` file parameters
    pub workspace_root: Option<&'a Path>,
}

/// Resolves single parameters against config, files and the user.
pub struct ParameterResolver<'a> {
    config: &'a dyn ConfigStore,
    fs: &'a dyn FileSystem,
    prompter: &'a dyn Prompter,
    events: &'a dyn DeployEventSink,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(
        config: &'a dyn ConfigStore,
        fs: &'a dyn FileSystem,
        prompter: &'a dyn Prompter,
        events: &'a dyn DeployEventSink,
    ) -> Self {
        Self {
            config,
            fs,
            prompter,
            events,
        }
    }

    /// Raw text for `key`, or `None` if the user abandoned the prompt.
    pub fn resolve(
        &self,
        key: &str,
        entry: &ParameterTemplateEntry,
        ctx: &ResolutionContext,
    ) -> DeployResult<Option<String>> {
        let source = ParameterSource::classify(key, entry);
        debug!(key, source = source.kind(), "resolving parameter");

        let raw = match &source {
            ParameterSource::Choice(labels) => self.from_choice(key, labels)?,
            ParameterSource::File(path) => Some(self.from_file(path, ctx)),
            ParameterSource::Config(name) => Some(self.from_config(*name, ctx)),
            ParameterSource::Input => self.from_input(key, entry)?,
        };

        match &raw {
            Some(_) if self.events.wants_detailed_events() => {
                self.events.on_event(DeployEvent::ParameterResolved {
                    name: key.to_string(),
                    source: source.kind(),
                });
            }
            Some(_) => {}
            None => debug!(key, "parameter abandoned"),
        }
        Ok(raw)
    }

    /// [`resolve`](Self::resolve) followed by coercion to the declared type.
    pub fn resolve_value(
        &self,
        key: &str,
        entry: &ParameterTemplateEntry,
        ctx: &ResolutionContext,
    ) -> DeployResult<Option<ParameterValue>> {
        Ok(self
            .resolve(key, entry, ctx)?
            .map(|raw| coerce(&raw, &entry.param_type)))
    }

    fn from_choice(&self, key: &str, labels: &[String]) -> DeployResult<Option<String>> {
        if labels.is_empty() {
            debug!(key, "no selectable allowed values");
            return Ok(None);
        }

        let items: Vec<ChoiceItem> = labels.iter().map(ChoiceItem::new).collect();
        let prompt = format!("Select value of {}", key);
        let picked = self.prompter.select(&SelectRequest {
            prompt: &prompt,
            items: &items,
            searchable: false,
        })?;

        Ok(picked.and_then(|i| labels.get(i).cloned()))
    }

    fn from_file(&self, relative: &str, ctx: &ResolutionContext) -> String {
        let Some(root) = ctx.workspace_root else {
            debug!(path = relative, "no workspace root; file parameter is empty");
            return String::new();
        };

        let path = workspace_file_path(root, relative);
        if !self.fs.exists(&path) {
            debug!(path = %path.display(), "parameter file not found");
            return String::new();
        }

        match self.fs.read(&path) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => String::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read parameter file");
                String::new()
            }
        }
    }

    fn from_config(&self, name: ConfigKey, ctx: &ResolutionContext) -> String {
        let hub_field = |extract: fn(&ConnectionString) -> Option<&str>| {
            let Some(raw) = self.config.get_string(IOTHUB_CONNECTION_STRING) else {
                debug!("{} is not configured", IOTHUB_CONNECTION_STRING);
                return String::new();
            };
            let parsed = ConnectionString::parse(&raw);
            match extract(&parsed) {
                Some(value) => value.to_string(),
                None => {
                    warn!("{} is missing an expected field", IOTHUB_CONNECTION_STRING);
                    String::new()
                }
            }
        };

        match name {
            ConfigKey::IotHubName => hub_field(ConnectionString::hub_name),
            ConfigKey::IotHubKeyName => hub_field(ConnectionString::shared_access_key_name),
            ConfigKey::IotHubKey => hub_field(ConnectionString::shared_access_key),
            ConfigKey::Subscription => ctx.subscription_id.unwrap_or_default().to_string(),
            ConfigKey::Setting(setting) => self.config.get_string(setting).unwrap_or_default(),
        }
    }

    fn from_input(
        &self,
        key: &str,
        entry: &ParameterTemplateEntry,
    ) -> DeployResult<Option<String>> {
        let prompt = format!("Input value for {}", key);
        let initial = entry.default_text();
        let validate = |value: &str| violation(value, entry);

        let answer = self.prompter.input(
            &InputRequest {
                prompt: &prompt,
                initial: &initial,
            },
            &validate,
        )?;

        // An empty submission counts as walking away.
        Ok(answer.filter(|value| !value.is_empty()))
    }
}

/// `<root>/../<relative>`, i.e. `relative` beside the workspace folder.
pub fn workspace_file_path(root: &Path, relative: &str) -> PathBuf {
    let relative = relative.trim_start_matches(['/', '\\']);
    match root.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(relative),
        _ => root.join("..").join(relative),
    }
}
