//! Domain Layer
//!
//! Parameter rules and the interfaces to the outside world, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Templates, parameter sets, subscriptions, deployments
//! - `value_objects/` - Parameter sources, connection strings, names
//! - `services/` - Type coercion and constraint validation
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
