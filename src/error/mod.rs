//! Error types for validation failures.
//!
//! This module provides types for representing validation failures with full
//! context: the failing location, the offending value and the violated
//! constraint.

mod validation_error;

pub use validation_error::{ValidationError, ValidationErrors};
