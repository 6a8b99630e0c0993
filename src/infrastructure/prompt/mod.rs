//! Prompter implementations

mod terminal;

pub use terminal::{TerminalPrompter, INTERACTIVE_TERMINAL};
