//! Domain Services
//!
//! Stateless rules applied to parameter values.

pub mod coercer;
pub mod validator;

pub use coercer::{coerce, to_number};
pub use validator::{validate, violation, NOT_A_NUMBER};
