//! Union schema validation.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::schema::Schema;
use crate::ValidationResult;

/// A schema accepting a value that matches any of its alternatives.
///
/// Alternatives are tried in declaration order and the first match wins.
/// When none match, the failure is a single mismatch error naming every
/// alternative; the individual alternatives' errors are not reported.
///
/// A union with no alternatives accepts everything.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::any(vec![Schema::string().into(), Schema::none().into()]);
///
/// assert!(schema.validate(&json!("a"), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!(null), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!(42), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnySchema {
    alternatives: Vec<Schema>,
}

impl AnySchema {
    /// Creates a new union schema over `alternatives`.
    pub fn new(alternatives: Vec<Schema>) -> Self {
        Self { alternatives }
    }

    /// Validates a value against this schema.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        if self.alternatives.is_empty() {
            return Validation::Success(());
        }

        for alternative in &self.alternatives {
            if alternative.validate(value, path).is_success() {
                return Validation::Success(());
            }
        }

        Validation::Failure(ValidationErrors::single(ValidationError::SchemaMismatch {
            path: path.clone(),
            actual_value: value.clone(),
            expected_schemas: self.alternatives.clone(),
        }))
    }
}

impl Display for AnySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.any")?;
        if !self.alternatives.is_empty() {
            let rendered: Vec<String> = self.alternatives.iter().map(|s| s.to_string()).collect();
            write!(f, "({})", rendered.join(", "))?;
        }
        Ok(())
    }
}
