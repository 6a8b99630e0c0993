//! Session provider implementations

mod json;

pub use json::{JsonSessionProvider, ACCOUNT_SESSION};
