//! Terminal Prompter
//!
//! `dialoguer` prompts on stderr. Esc/q on a list, Ctrl-C, or an empty
//! submission on a text prompt comes back as `Ok(None)`.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input, Select};
use is_terminal::IsTerminal;

use crate::domain::ports::{InputRequest, InputValidator, Prompter, SelectRequest};
use crate::error::{DeployError, DeployResult};

pub const INTERACTIVE_TERMINAL: &str = "interactive terminal";

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn ensure_terminal(&self) -> DeployResult<()> {
        if std::io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(DeployError::missing(INTERACTIVE_TERMINAL))
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Ctrl-C surfaces as an interrupted read; that is the user walking away.
fn answered<T>(result: Result<Option<T>, dialoguer::Error>) -> DeployResult<Option<T>> {
    match result {
        Ok(answer) => Ok(answer),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(DeployError::Prompt(err.to_string())),
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, request: &SelectRequest) -> DeployResult<Option<usize>> {
        self.ensure_terminal()?;
        if request.items.is_empty() {
            return Ok(None);
        }

        let labels: Vec<String> = request.items.iter().map(|i| i.display()).collect();
        let picked = if request.searchable {
            FuzzySelect::with_theme(&self.theme)
                .with_prompt(request.prompt)
                .items(&labels)
                .default(0)
                .interact_opt()
        } else {
            Select::with_theme(&self.theme)
                .with_prompt(request.prompt)
                .items(&labels)
                .default(0)
                .interact_opt()
        };
        answered(picked)
    }

    fn input(
        &self,
        request: &InputRequest,
        validate: &InputValidator,
    ) -> DeployResult<Option<String>> {
        self.ensure_terminal()?;

        let text: Option<String> = answered(
            Input::<String>::with_theme(&self.theme)
                .with_prompt(request.prompt)
                .with_initial_text(request.initial)
                .allow_empty(true)
                .validate_with(|input: &String| -> Result<(), String> {
                    // Empty submits so the caller can treat it as a cancel.
                    if input.is_empty() {
                        return Ok(());
                    }
                    match validate(input) {
                        Some(message) => Err(message),
                        None => Ok(()),
                    }
                })
                .interact_text()
                .map(Some),
        )?;

        Ok(text.filter(|t| !t.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_is_an_abandoned_prompt() {
        let interrupted = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "^C"));
        assert!(matches!(answered::<usize>(Err(interrupted)), Ok(None)));
    }

    #[test]
    fn other_io_failures_are_errors() {
        let broken = dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(
            answered::<usize>(Err(broken)),
            Err(DeployError::Prompt(message)) if message.contains("closed")
        ));
    }

    #[test]
    fn answers_pass_through() {
        assert!(matches!(answered(Ok(Some(2usize))), Ok(Some(2))));
        assert!(matches!(answered::<usize>(Ok(None)), Ok(None)));
    }
}
