//! Azure Resource Manager implementations

mod rest;

pub use rest::ArmRestClient;
