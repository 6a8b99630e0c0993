//! Mock ports shared by the application layer tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::entities::{
    Credentials, DeploymentOutcome, DeploymentRequest, Location, ResourceGroup,
    SubscriptionFilter, SubscriptionScope,
};
use crate::domain::ports::{
    ConfigStore, DeployEvent, DeployEventSink, FileSystem, FsError, FsResult, InputRequest,
    InputValidator, Prompter, ResourceManager, SelectRequest, SessionProvider,
};
use crate::error::{DeployError, DeployResult};

/// One scripted user action
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick the item at this index
    Pick(usize),
    /// Pick the item whose label matches
    PickLabel(&'static str),
    /// Submit this text
    Type(&'static str),
    /// Escape / Ctrl+C
    Cancel,
}

/// Prompter that replays scripted answers and records what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    /// Prompt texts in the order they were shown
    pub asked: RefCell<Vec<String>>,
    /// Labels offered by each select, in order
    pub offered: RefCell<Vec<Vec<String>>>,
    /// Initial text of each input prompt
    pub prefilled: RefCell<Vec<String>>,
    /// Validation messages shown for rejected submissions
    pub rejections: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.asked.borrow().len()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for prompt {prompt:?}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, request: &SelectRequest) -> DeployResult<Option<usize>> {
        self.asked.borrow_mut().push(request.prompt.to_string());
        self.offered
            .borrow_mut()
            .push(request.items.iter().map(|i| i.label.clone()).collect());

        match self.next(request.prompt) {
            Answer::Pick(i) => Ok(Some(i)),
            Answer::PickLabel(label) => Ok(request.items.iter().position(|i| i.label == label)),
            Answer::Cancel => Ok(None),
            Answer::Type(text) => panic!("typed {text:?} into select {:?}", request.prompt),
        }
    }

    fn input(
        &self,
        request: &InputRequest,
        validate: &InputValidator,
    ) -> DeployResult<Option<String>> {
        self.asked.borrow_mut().push(request.prompt.to_string());
        self.prefilled.borrow_mut().push(request.initial.to_string());

        loop {
            match self.next(request.prompt) {
                Answer::Type(text) => match validate(text) {
                    Some(message) => self.rejections.borrow_mut().push(message),
                    None => return Ok(Some(text.to_string())),
                },
                Answer::Cancel => return Ok(None),
                other => panic!("{other:?} given to input {:?}", request.prompt),
            }
        }
    }
}

/// Prompter whose terminal is gone.
pub struct BrokenPrompter;

impl Prompter for BrokenPrompter {
    fn select(&self, _request: &SelectRequest) -> DeployResult<Option<usize>> {
        Err(DeployError::Prompt("stdin closed".to_string()))
    }

    fn input(
        &self,
        _request: &InputRequest,
        _validate: &InputValidator,
    ) -> DeployResult<Option<String>> {
        Err(DeployError::Prompt("stdin closed".to_string()))
    }
}

#[derive(Default)]
pub struct MapConfig(pub HashMap<String, Value>);

impl MapConfig {
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }
}

impl ConfigStore for MapConfig {
    fn get_value(&self, name: &str) -> Option<Value> {
        self.0.get(name).cloned()
    }
}

/// In-memory file system that counts every access.
#[derive(Default)]
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
    pub accesses: Cell<usize>,
}

impl MockFileSystem {
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.accesses.set(self.accesses.get() + 1);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.accesses.set(self.accesses.get() + 1);
        self.files.contains_key(path)
    }
}

#[derive(Default)]
pub struct RecordingEventSink {
    pub events: RefCell<Vec<DeployEvent>>,
}

impl DeployEventSink for RecordingEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.borrow_mut().push(event);
    }
}

pub struct MockSession {
    pub filters: Option<Vec<SubscriptionFilter>>,
    pub calls: Cell<usize>,
}

impl MockSession {
    pub fn with_subscriptions(subscriptions: &[(&str, &str)]) -> Self {
        let filters = subscriptions
            .iter()
            .map(|(id, name)| SubscriptionFilter {
                subscription_id: id.to_string(),
                display_name: name.to_string(),
                credentials: Credentials::bearer(format!("token-{id}")),
            })
            .collect();
        Self {
            filters: Some(filters),
            calls: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            filters: None,
            calls: Cell::new(0),
        }
    }
}

impl SessionProvider for MockSession {
    fn filters(&self) -> DeployResult<Vec<SubscriptionFilter>> {
        self.calls.set(self.calls.get() + 1);
        self.filters
            .clone()
            .ok_or_else(|| DeployError::missing("Azure account session"))
    }
}

/// In-memory resource manager recording every mutation.
#[derive(Default)]
pub struct MockResourceManager {
    pub groups: RefCell<Vec<ResourceGroup>>,
    pub locations: Vec<Location>,
    pub created_groups: RefCell<Vec<(String, String)>>,
    pub deployments: RefCell<Vec<(String, String, DeploymentRequest)>>,
    pub scopes_seen: RefCell<Vec<SubscriptionScope>>,
}

impl MockResourceManager {
    pub fn with_groups(groups: &[(&str, &str)]) -> Self {
        Self {
            groups: RefCell::new(
                groups
                    .iter()
                    .map(|(name, location)| ResourceGroup {
                        name: name.to_string(),
                        location: location.to_string(),
                    })
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn with_locations(mut self, locations: &[(&str, &str)]) -> Self {
        self.locations = locations
            .iter()
            .map(|(name, display)| Location {
                name: name.to_string(),
                display_name: display.to_string(),
            })
            .collect();
        self
    }
}

impl ResourceManager for MockResourceManager {
    fn list_resource_groups(&self, scope: &SubscriptionScope) -> DeployResult<Vec<ResourceGroup>> {
        self.scopes_seen.borrow_mut().push(scope.clone());
        Ok(self.groups.borrow().clone())
    }

    fn resource_group_exists(&self, _scope: &SubscriptionScope, name: &str) -> DeployResult<bool> {
        Ok(self.groups.borrow().iter().any(|g| g.name == name))
    }

    fn create_resource_group(
        &self,
        _scope: &SubscriptionScope,
        name: &str,
        location: &str,
    ) -> DeployResult<ResourceGroup> {
        let group = ResourceGroup {
            name: name.to_string(),
            location: location.to_string(),
        };
        self.groups.borrow_mut().push(group.clone());
        self.created_groups
            .borrow_mut()
            .push((name.to_string(), location.to_string()));
        Ok(group)
    }

    fn list_locations(&self, _scope: &SubscriptionScope) -> DeployResult<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn create_deployment(
        &self,
        _scope: &SubscriptionScope,
        resource_group: &str,
        deployment_name: &str,
        request: &DeploymentRequest,
    ) -> DeployResult<DeploymentOutcome> {
        self.deployments.borrow_mut().push((
            resource_group.to_string(),
            deployment_name.to_string(),
            request.clone(),
        ));
        Ok(DeploymentOutcome::from_response(
            deployment_name,
            serde_json::json!({
                "name": deployment_name,
                "properties": {"provisioningState": "Accepted"}
            }),
        ))
    }
}
