//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Pick a subscription (once per session)
//! 2. Look up its credentials
//! 3. Pick or create a resource group
//! 4. Resolve the template parameters
//! 5. Submit an incremental deployment
//!
//! Any step the user walks away from ends the flow with `Ok(None)`. Nothing
//! is rolled back: a resource group created in step 3 stays.

use std::rc::Rc;

use tracing::{debug, info};

use crate::application::parameters::{ParameterResolver, ParameterSetBuilder, ResolutionContext};
use crate::domain::entities::{
    DeploymentOutcome, DeploymentRequest, DeploymentTemplate, ParameterSet, ParameterTemplate,
    SubscriptionScope,
};
use crate::domain::ports::{
    ChoiceItem, ConfigStore, DeployEvent, DeployEventSink, FileSystem, InputRequest, Prompter,
    ResourceManager, SelectRequest, SessionProvider,
};
use crate::domain::value_objects::{
    is_valid_resource_group_name, DeploymentName, INVALID_RESOURCE_GROUP_NAME,
    RESOURCE_GROUP_NAME_TAKEN,
};
use crate::error::DeployResult;

use super::options::{DeployOptions, DeploySession};

pub const NO_SUBSCRIPTION_LABEL: &str = "No subscription found";
pub const CREATE_RESOURCE_GROUP_LABEL: &str = "+ Create Resource Group";

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can swap in mocks.
pub struct DeployUseCase<S, R, C, F>
where
    S: SessionProvider,
    R: ResourceManager,
    C: ConfigStore,
    F: FileSystem,
{
    session: S,
    arm: R,
    config: C,
    file_system: F,
    prompter: Rc<dyn Prompter>,
    events: Rc<dyn DeployEventSink>,
    options: DeployOptions,
}

impl<S, R, C, F> DeployUseCase<S, R, C, F>
where
    S: SessionProvider,
    R: ResourceManager,
    C: ConfigStore,
    F: FileSystem,
{
    pub fn new(
        session: S,
        arm: R,
        config: C,
        file_system: F,
        prompter: Rc<dyn Prompter>,
        events: Rc<dyn DeployEventSink>,
    ) -> Self {
        Self {
            session,
            arm,
            config,
            file_system,
            prompter,
            events,
            options: DeployOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DeployOptions) -> Self {
        self.options = options;
        self
    }

    pub fn session_provider(&self) -> &S {
        &self.session
    }

    pub fn resource_manager(&self) -> &R {
        &self.arm
    }

    /// Run the whole flow for `template`.
    pub fn deploy(
        &self,
        template: &DeploymentTemplate,
        session: &mut DeploySession,
    ) -> DeployResult<Option<DeploymentOutcome>> {
        let Some(scope) = self.subscription_scope(session)? else {
            return Ok(None);
        };

        let Some(resource_group) = self.pick_resource_group(&scope)? else {
            return Ok(None);
        };

        let Some(parameters) = self.resolve_parameters(template.parameters(), session)? else {
            self.aborted("parameters");
            return Ok(None);
        };

        let name = DeploymentName::now(&self.options.deployment_prefix);
        let request = DeploymentRequest::incremental(template.raw().clone(), parameters);

        self.events.on_event(DeployEvent::Submitting {
            resource_group: resource_group.clone(),
            deployment_name: name.to_string(),
        });
        info!(resource_group = %resource_group, deployment = %name, "submitting deployment");

        let outcome = self
            .arm
            .create_deployment(&scope, &resource_group, name.as_str(), &request)?;

        self.events.on_event(DeployEvent::Completed {
            deployment_name: outcome.name.clone(),
            provisioning_state: outcome.provisioning_state.clone(),
        });
        Ok(Some(outcome))
    }

    /// Pick an existing resource group or create one.
    pub fn select_resource_group(&self, session: &mut DeploySession) -> DeployResult<Option<String>> {
        match self.subscription_scope(session)? {
            Some(scope) => self.pick_resource_group(&scope),
            None => Ok(None),
        }
    }

    /// Resolve `template` without asking for a subscription.
    ///
    /// `$subscription` reads whatever the session already holds.
    pub fn resolve_parameters(
        &self,
        template: &ParameterTemplate,
        session: &DeploySession,
    ) -> DeployResult<Option<ParameterSet>> {
        let resolver = ParameterResolver::new(
            &self.config,
            &self.file_system,
            self.prompter.as_ref(),
            self.events.as_ref(),
        );
        let ctx = ResolutionContext {
            subscription_id: session.subscription_id.as_deref(),
            workspace_root: session.workspace_root.as_deref(),
        };

        let parameters = ParameterSetBuilder::new(resolver).build(template, &ctx)?;
        if let Some(set) = &parameters {
            self.events
                .on_event(DeployEvent::ParametersResolved { count: set.len() });
        }
        Ok(parameters)
    }

    /// The session's subscription, asking for one if none is cached.
    pub fn ensure_subscription(&self, session: &mut DeploySession) -> DeployResult<Option<String>> {
        if let Some(id) = &session.subscription_id {
            return Ok(Some(id.clone()));
        }

        let filters = self.session.filters()?;
        let items: Vec<ChoiceItem> = if filters.is_empty() {
            vec![ChoiceItem::new(NO_SUBSCRIPTION_LABEL)]
        } else {
            filters
                .iter()
                .map(|f| ChoiceItem::new(&f.display_name).with_description(&f.subscription_id))
                .collect()
        };

        let picked = self.prompter.select(&SelectRequest {
            prompt: "Select Subscription",
            items: &items,
            searchable: false,
        })?;

        let Some(filter) = picked.and_then(|i| filters.get(i)) else {
            self.aborted("subscription");
            return Ok(None);
        };

        let id = filter.subscription_id.clone();
        info!(subscription = %id, name = %filter.display_name, "subscription selected");
        self.events.on_event(DeployEvent::SubscriptionSelected {
            subscription_id: id.clone(),
        });
        session.subscription_id = Some(id.clone());
        Ok(Some(id))
    }

    /// Subscription plus credentials, or `None` if either is unavailable.
    pub fn subscription_scope(
        &self,
        session: &mut DeploySession,
    ) -> DeployResult<Option<SubscriptionScope>> {
        let Some(subscription_id) = self.ensure_subscription(session)? else {
            return Ok(None);
        };

        let credentials = self
            .session
            .filters()?
            .into_iter()
            .find(|f| f.subscription_id == subscription_id)
            .map(|f| f.credentials);

        match credentials {
            Some(credentials) => Ok(Some(SubscriptionScope {
                subscription_id,
                credentials,
            })),
            None => {
                debug!(subscription = %subscription_id, "no credentials for subscription");
                self.aborted("credentials");
                Ok(None)
            }
        }
    }

    fn pick_resource_group(&self, scope: &SubscriptionScope) -> DeployResult<Option<String>> {
        let groups = self.arm.list_resource_groups(scope)?;

        let mut items = vec![ChoiceItem::new(CREATE_RESOURCE_GROUP_LABEL)];
        items.extend(
            groups
                .iter()
                .map(|g| ChoiceItem::new(&g.name).with_description(&g.location)),
        );

        let picked = self.prompter.select(&SelectRequest {
            prompt: "Select Resource Group",
            items: &items,
            searchable: false,
        })?;

        let name = match picked {
            Some(0) => return self.create_resource_group(scope),
            Some(i) => groups.get(i - 1).map(|g| g.name.clone()),
            None => None,
        };

        match name {
            Some(name) => {
                info!(resource_group = %name, "resource group selected");
                self.events.on_event(DeployEvent::ResourceGroupSelected {
                    name: name.clone(),
                    created: false,
                });
                Ok(Some(name))
            }
            None => {
                self.aborted("resource group");
                Ok(None)
            }
        }
    }

    fn create_resource_group(&self, scope: &SubscriptionScope) -> DeployResult<Option<String>> {
        let validate = |name: &str| -> Option<String> {
            if !is_valid_resource_group_name(name) {
                return Some(INVALID_RESOURCE_GROUP_NAME.to_string());
            }
            match self.arm.resource_group_exists(scope, name) {
                Ok(true) => Some(RESOURCE_GROUP_NAME_TAKEN.to_string()),
                Ok(false) => None,
                Err(e) => Some(format!("Unable to check name availability: {}", e)),
            }
        };

        let name = self.prompter.input(
            &InputRequest {
                prompt: "Input resource group name",
                initial: "",
            },
            &validate,
        )?;
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.aborted("resource group name");
            return Ok(None);
        };

        let locations = self.arm.list_locations(scope)?;
        let items: Vec<ChoiceItem> = locations
            .iter()
            .map(|l| ChoiceItem::new(&l.display_name).with_description(&l.name))
            .collect();

        let picked = self.prompter.select(&SelectRequest {
            prompt: "Select Resource Group Location",
            items: &items,
            searchable: true,
        })?;
        let Some(location) = picked.and_then(|i| locations.get(i)) else {
            self.aborted("resource group location");
            return Ok(None);
        };

        let group = self.arm.create_resource_group(scope, &name, &location.name)?;
        info!(resource_group = %group.name, location = %group.location, "resource group created");
        self.events.on_event(DeployEvent::ResourceGroupSelected {
            name: group.name.clone(),
            created: true,
        });
        Ok(Some(group.name))
    }

    fn aborted(&self, stage: &'static str) {
        debug!(stage, "deployment abandoned");
        self.events.on_event(DeployEvent::Aborted { stage });
    }
}
