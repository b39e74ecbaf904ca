//! Numeric schema validation.
//!
//! This module provides [`IntegerSchema`] and [`FloatSchema`]. The two are
//! strictly split: an integer schema rejects `1.0` and a float schema
//! rejects `1`, mirroring the distinct runtime types.

use std::fmt::{self, Display};

use serde_json::{Number, Value};
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::render::ValueType;
use crate::ValidationResult;

/// A constraint applied to integer values.
#[derive(Debug, Clone, PartialEq)]
enum IntegerConstraint {
    EqualTo(i64),
    Min(i64),
    Max(i64),
}

/// A schema for validating integral numbers.
///
/// `IntegerSchema` validates that values are integral numbers and optionally
/// applies an exact value or inclusive bounds. All constraint violations are
/// accumulated rather than short-circuiting on the first failure.
///
/// Values in the full u64 range are judged correctly against bounds;
/// comparisons widen internally instead of overflowing.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::integer().min(0).max(100);
///
/// assert!(schema.validate(&json!(50), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!(-50), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerSchema {
    constraints: Vec<IntegerConstraint>,
}

impl IntegerSchema {
    /// Creates a new integer schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the integer to equal `value` exactly.
    pub fn equal_to(mut self, value: i64) -> Self {
        self.constraints.push(IntegerConstraint::EqualTo(value));
        self
    }

    /// Requires the integer to be at least `min` (inclusive).
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::integer().min(1);
    ///
    /// assert!(schema.validate(&json!(1), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!(0), &ValuePath::root()).is_failure());
    /// ```
    pub fn min(mut self, min: i64) -> Self {
        self.constraints.push(IntegerConstraint::Min(min));
        self
    }

    /// Requires the integer to be at most `max` (inclusive).
    pub fn max(mut self, max: i64) -> Self {
        self.constraints.push(IntegerConstraint::Max(max));
        self
    }

    /// Validates a value against this schema.
    ///
    /// A non-integral value produces a single type error; constraint errors
    /// are only reported for values of the right type.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        let n = match integral(value) {
            Some(n) => n,
            None => {
                return Validation::Failure(ValidationErrors::single(ValidationError::Type {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_type: ValueType::Int,
                }))
            }
        };

        let errors: Vec<ValidationError> = self
            .constraints
            .iter()
            .filter_map(|c| check_integer_constraint(c, n, value, path))
            .collect();

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

impl Display for IntegerSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.int")?;
        for constraint in &self.constraints {
            match constraint {
                IntegerConstraint::EqualTo(value) => write!(f, "({})", value)?,
                IntegerConstraint::Min(min) => write!(f, ".min({})", min)?,
                IntegerConstraint::Max(max) => write!(f, ".max({})", max)?,
            }
        }
        Ok(())
    }
}

/// Widens any integral JSON number to i128 so u64-range values compare
/// correctly against i64 bounds.
fn integral(value: &Value) -> Option<i128> {
    match value {
        Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Some(i128::from(i))
            } else {
                num.as_u64().map(i128::from)
            }
        }
        _ => None,
    }
}

/// Checks a single constraint and returns an error if it fails.
fn check_integer_constraint(
    constraint: &IntegerConstraint,
    n: i128,
    value: &Value,
    path: &ValuePath,
) -> Option<ValidationError> {
    match constraint {
        IntegerConstraint::EqualTo(expected) => {
            if n != i128::from(*expected) {
                Some(ValidationError::Value {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_value: Value::Number(Number::from(*expected)),
                })
            } else {
                None
            }
        }
        IntegerConstraint::Min(min) => {
            if n < i128::from(*min) {
                Some(ValidationError::MinValue {
                    path: path.clone(),
                    actual_value: value.clone(),
                    min_value: Number::from(*min),
                })
            } else {
                None
            }
        }
        IntegerConstraint::Max(max) => {
            if n > i128::from(*max) {
                Some(ValidationError::MaxValue {
                    path: path.clone(),
                    actual_value: value.clone(),
                    max_value: Number::from(*max),
                })
            } else {
                None
            }
        }
    }
}

/// A constraint applied to float values.
#[derive(Debug, Clone, PartialEq)]
enum FloatConstraint {
    EqualTo(Number),
    Min(Number),
    Max(Number),
}

/// A schema for validating non-integral numbers.
///
/// `FloatSchema` validates that values are non-integral numbers and
/// optionally applies an exact value or inclusive bounds. All constraint
/// violations are accumulated rather than short-circuiting on the first
/// failure.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::float().min(0.5);
///
/// assert!(schema.validate(&json!(1.5), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!(0.25), &ValuePath::root()).is_failure());
///
/// // Integral numbers are a different type
/// assert!(schema.validate(&json!(1), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatSchema {
    constraints: Vec<FloatConstraint>,
}

impl FloatSchema {
    /// Creates a new float schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the float to equal `value` exactly.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or infinite.
    pub fn equal_to(mut self, value: f64) -> Self {
        self.constraints.push(FloatConstraint::EqualTo(finite(value)));
        self
    }

    /// Requires the float to be at least `min` (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if `min` is NaN or infinite.
    pub fn min(mut self, min: f64) -> Self {
        self.constraints.push(FloatConstraint::Min(finite(min)));
        self
    }

    /// Requires the float to be at most `max` (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if `max` is NaN or infinite.
    pub fn max(mut self, max: f64) -> Self {
        self.constraints.push(FloatConstraint::Max(finite(max)));
        self
    }

    /// Validates a value against this schema.
    ///
    /// An integral or non-numeric value produces a single type error;
    /// constraint errors are only reported for values of the right type.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        let x = match fractional(value) {
            Some(x) => x,
            None => {
                return Validation::Failure(ValidationErrors::single(ValidationError::Type {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_type: ValueType::Float,
                }))
            }
        };

        let errors: Vec<ValidationError> = self
            .constraints
            .iter()
            .filter_map(|c| check_float_constraint(c, x, value, path))
            .collect();

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

impl Display for FloatSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.float")?;
        for constraint in &self.constraints {
            match constraint {
                FloatConstraint::EqualTo(value) => write!(f, "({})", value)?,
                FloatConstraint::Min(min) => write!(f, ".min({})", min)?,
                FloatConstraint::Max(max) => write!(f, ".max({})", max)?,
            }
        }
        Ok(())
    }
}

/// Converts a declared bound into a JSON number.
///
/// Panics on NaN or infinity; the panic is documented on each builder method.
fn finite(bound: f64) -> Number {
    Number::from_f64(bound).expect("float bound must be finite")
}

/// Extracts a non-integral number, rejecting integral and non-numeric values.
fn fractional(value: &Value) -> Option<f64> {
    match value {
        Value::Number(num) if !num.is_i64() && !num.is_u64() => num.as_f64(),
        _ => None,
    }
}

/// Checks a single constraint and returns an error if it fails.
fn check_float_constraint(
    constraint: &FloatConstraint,
    x: f64,
    value: &Value,
    path: &ValuePath,
) -> Option<ValidationError> {
    match constraint {
        FloatConstraint::EqualTo(expected) => {
            if Some(x) != expected.as_f64() {
                Some(ValidationError::Value {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_value: Value::Number(expected.clone()),
                })
            } else {
                None
            }
        }
        FloatConstraint::Min(min) => {
            if min.as_f64().is_some_and(|bound| x < bound) {
                Some(ValidationError::MinValue {
                    path: path.clone(),
                    actual_value: value.clone(),
                    min_value: min.clone(),
                })
            } else {
                None
            }
        }
        FloatConstraint::Max(max) => {
            if max.as_f64().is_some_and(|bound| x > bound) {
                Some(ValidationError::MaxValue {
                    path: path.clone(),
                    actual_value: value.clone(),
                    max_value: max.clone(),
                })
            } else {
                None
            }
        }
    }
}
