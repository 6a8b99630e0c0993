//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::SubscriptionSelected { subscription_id } => {
                serde_json::json!({
                    "event": "subscription_selected",
                    "command": command,
                    "subscription_id": subscription_id,
                })
            }

            DeployEvent::ResourceGroupSelected { name, created } => {
                serde_json::json!({
                    "event": "resource_group_selected",
                    "command": command,
                    "name": name,
                    "created": created,
                })
            }

            DeployEvent::ParameterResolved { name, source } => {
                serde_json::json!({
                    "event": "parameter_resolved",
                    "command": command,
                    "name": name,
                    "source": source,
                })
            }

            DeployEvent::ParametersResolved { count } => {
                serde_json::json!({
                    "event": "parameters_resolved",
                    "command": command,
                    "count": count,
                })
            }

            DeployEvent::Submitting {
                resource_group,
                deployment_name,
            } => {
                serde_json::json!({
                    "event": "submitting",
                    "command": command,
                    "resource_group": resource_group,
                    "deployment_name": deployment_name,
                })
            }

            DeployEvent::Completed {
                deployment_name,
                provisioning_state,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "deployment_name": deployment_name,
                    "provisioning_state": provisioning_state,
                })
            }

            DeployEvent::Aborted { stage } => {
                serde_json::json!({
                    "event": "aborted",
                    "command": command,
                    "stage": stage,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
