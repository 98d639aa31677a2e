//! Job validation module.

mod validate;

pub use validate::{validate_cabinets, validate_requests, ValidationResult};
