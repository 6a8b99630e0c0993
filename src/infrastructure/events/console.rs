//! Console Event Sink
//!
//! Human-readable progress on stderr, leaving stdout for results.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }
}

/// One line of progress text, or `None` for events not worth a line.
fn render(event: &DeployEvent) -> Option<String> {
    match event {
        DeployEvent::SubscriptionSelected { subscription_id } => {
            Some(format!("Subscription: {}", subscription_id))
        }
        DeployEvent::ResourceGroupSelected {
            name,
            created: true,
        } => Some(format!("Resource group: {} (created)", name)),
        DeployEvent::ResourceGroupSelected {
            name,
            created: false,
        } => Some(format!("Resource group: {}", name)),
        DeployEvent::ParameterResolved { name, source } => {
            Some(format!("  {} <- {}", name, source))
        }
        DeployEvent::ParametersResolved { count } => Some(format!("Parameters resolved: {}", count)),
        DeployEvent::Submitting {
            resource_group,
            deployment_name,
        } => Some(format!(
            "Deploying {} to {}...",
            deployment_name, resource_group
        )),
        DeployEvent::Completed { .. } | DeployEvent::Aborted { .. } => None,
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_progress_lines() {
        assert_eq!(
            render(&DeployEvent::ResourceGroupSelected {
                name: "iot-rg".to_string(),
                created: true,
            })
            .as_deref(),
            Some("Resource group: iot-rg (created)")
        );
        assert_eq!(
            render(&DeployEvent::ParameterResolved {
                name: "sku".to_string(),
                source: "choice",
            })
            .as_deref(),
            Some("  sku <- choice")
        );
    }

    #[test]
    fn results_are_left_to_the_command() {
        assert_eq!(render(&DeployEvent::Aborted { stage: "parameters" }), None);
        assert_eq!(
            render(&DeployEvent::Completed {
                deployment_name: "d".to_string(),
                provisioning_state: None,
            }),
            None
        );
    }

    #[test]
    fn detail_follows_verbosity() {
        assert!(ConsoleEventSink::with_writer(io::sink(), true).wants_detailed_events());
        assert!(!ConsoleEventSink::with_writer(io::sink(), false).wants_detailed_events());
    }
}
