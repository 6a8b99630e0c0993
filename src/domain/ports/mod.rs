//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_store;
pub mod deploy_events;
pub mod file_system;
pub mod prompter;
pub mod resource_manager;
pub mod session_provider;

pub use config_store::ConfigStore;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use prompter::{ChoiceItem, InputRequest, InputValidator, Prompter, SelectRequest};
pub use resource_manager::ResourceManager;
pub use session_provider::SessionProvider;
