//! Prompter Port
//!
//! Interactive requests to the user. Every request can come back cancelled
//! (`Ok(None)`); callers must check for it. `Err` is reserved for a broken
//! terminal, not for a user saying no.

use crate::error::DeployResult;

/// One entry of a closed choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub label: String,
    pub description: Option<String>,
}

impl ChoiceItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Text shown in the list.
    pub fn display(&self) -> String {
        match &self.description {
            Some(d) if !d.is_empty() => format!("{} ({})", self.label, d),
            _ => self.label.clone(),
        }
    }
}

/// A closed choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest<'a> {
    pub prompt: &'a str,
    pub items: &'a [ChoiceItem],
    /// Long lists (locations) get type-to-filter.
    pub searchable: bool,
}

/// A free-form text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest<'a> {
    pub prompt: &'a str,
    pub initial: &'a str,
}

/// Returns `Some(message)` to reject a submission and ask again.
pub type InputValidator<'a> = dyn Fn(&str) -> Option<String> + 'a;

pub trait Prompter {
    /// Ask the user to pick one item. Returns the chosen index.
    fn select(&self, request: &SelectRequest) -> DeployResult<Option<usize>>;

    /// Ask for text, re-asking until `validate` accepts it.
    fn input(
        &self,
        request: &InputRequest,
        validate: &InputValidator,
    ) -> DeployResult<Option<String>>;
}
