//! Deploy Event Port
//!
//! Observable progress for the deploy flow. Sinks render it for humans or as
//! an NDJSON stream.

/// Event emitted during a deployment
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Subscription chosen (or reused from the session)
    SubscriptionSelected { subscription_id: String },

    /// Resource group chosen or created
    ResourceGroupSelected { name: String, created: bool },

    /// One parameter resolved
    ParameterResolved { name: String, source: &'static str },

    /// All parameters resolved
    ParametersResolved { count: usize },

    /// Deployment request about to be sent
    Submitting {
        resource_group: String,
        deployment_name: String,
    },

    /// ARM accepted the deployment
    Completed {
        deployment_name: String,
        provisioning_state: Option<String>,
    },

    /// The user abandoned a step
    Aborted { stage: &'static str },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);

    /// Per-parameter events are skipped when this is false.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
