//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `arm/` - Azure Resource Manager REST client
//! - `config/` - Configuration store over `[settings]`
//! - `events/` - Event sinks (console, NDJSON)
//! - `fs/` - Local file system
//! - `prompt/` - Terminal prompts
//! - `session/` - Accounts-file session provider

pub mod arm;
pub mod config;
pub mod events;
pub mod fs;
pub mod prompt;
pub mod session;

// Re-export for convenience
pub use arm::ArmRestClient;
pub use config::SettingsStore;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use prompt::TerminalPrompter;
pub use session::JsonSessionProvider;
