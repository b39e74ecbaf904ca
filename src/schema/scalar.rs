//! Boolean and null schema validation.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::render::ValueType;
use crate::ValidationResult;

/// A schema for validating boolean values.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::boolean().equal_to(true);
///
/// assert!(schema.validate(&json!(true), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!(false), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanSchema {
    equal_to: Option<bool>,
}

impl BooleanSchema {
    /// Creates a new boolean schema accepting both `true` and `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the boolean to equal `value` exactly.
    pub fn equal_to(mut self, value: bool) -> Self {
        self.equal_to = Some(value);
        self
    }

    /// Validates a value against this schema.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        let b = match value.as_bool() {
            Some(b) => b,
            None => {
                return Validation::Failure(ValidationErrors::single(ValidationError::Type {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_type: ValueType::Bool,
                }))
            }
        };

        match self.equal_to {
            Some(expected) if b != expected => {
                Validation::Failure(ValidationErrors::single(ValidationError::Value {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_value: Value::Bool(expected),
                }))
            }
            _ => Validation::Success(()),
        }
    }
}

impl Display for BooleanSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.bool")?;
        if let Some(value) = self.equal_to {
            write!(f, "({})", value)?;
        }
        Ok(())
    }
}

/// A schema accepting only `null`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::none();
///
/// assert!(schema.validate(&json!(null), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!(0), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoneSchema;

impl NoneSchema {
    /// Creates a new null schema.
    pub fn new() -> Self {
        Self
    }

    /// Validates a value against this schema.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        if value.is_null() {
            Validation::Success(())
        } else {
            Validation::Failure(ValidationErrors::single(ValidationError::Type {
                path: path.clone(),
                actual_value: value.clone(),
                expected_type: ValueType::None,
            }))
        }
    }
}

impl Display for NoneSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.none")
    }
}
