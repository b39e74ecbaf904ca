//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating string values with
//! constraints like an exact value, length bounds, an alphabet, a substring
//! and a regex pattern.

use std::fmt::{self, Display};

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::render::ValueType;
use crate::ValidationResult;

use super::DeclarationError;

/// A constraint applied to string values.
#[derive(Debug, Clone)]
enum StringConstraint {
    EqualTo(String),
    Len(usize),
    MinLen(usize),
    MaxLen(usize),
    Alphabet(String),
    Contains(String),
    Pattern { regex: Regex, source: String },
}

// Compiled regexes do not compare; two patterns are the same constraint
// exactly when their source text is the same.
impl PartialEq for StringConstraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StringConstraint::EqualTo(a), StringConstraint::EqualTo(b)) => a == b,
            (StringConstraint::Len(a), StringConstraint::Len(b)) => a == b,
            (StringConstraint::MinLen(a), StringConstraint::MinLen(b)) => a == b,
            (StringConstraint::MaxLen(a), StringConstraint::MaxLen(b)) => a == b,
            (StringConstraint::Alphabet(a), StringConstraint::Alphabet(b)) => a == b,
            (StringConstraint::Contains(a), StringConstraint::Contains(b)) => a == b,
            (
                StringConstraint::Pattern { source: a, .. },
                StringConstraint::Pattern { source: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

/// A schema for validating string values.
///
/// `StringSchema` validates that values are strings and optionally applies
/// constraints. All constraint violations are accumulated rather than
/// short-circuiting on the first failure. Lengths count characters, not
/// bytes.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::string().min_len(3).alphabet("abcdefghijklmnopqrstuvwxyz");
///
/// let result = schema.validate(&json!("banana"), &ValuePath::root());
/// assert!(result.is_success());
///
/// // "A1" violates both constraints; both are reported
/// let result = schema.validate(&json!("A1"), &ValuePath::root());
/// assert!(result.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringSchema {
    constraints: Vec<StringConstraint>,
}

impl StringSchema {
    /// Creates a new string schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the string to equal `value` exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::string().equal_to("banana");
    ///
    /// assert!(schema.validate(&json!("banana"), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!("orange"), &ValuePath::root()).is_failure());
    /// ```
    pub fn equal_to(mut self, value: impl Into<String>) -> Self {
        self.constraints.push(StringConstraint::EqualTo(value.into()));
        self
    }

    /// Requires the string to have exactly `len` characters.
    pub fn len(mut self, len: usize) -> Self {
        self.constraints.push(StringConstraint::Len(len));
        self
    }

    /// Requires the string to have at least `min` characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::string().min_len(5);
    ///
    /// assert!(schema.validate(&json!("hello"), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!("hi"), &ValuePath::root()).is_failure());
    /// ```
    pub fn min_len(mut self, min: usize) -> Self {
        self.constraints.push(StringConstraint::MinLen(min));
        self
    }

    /// Requires the string to have at most `max` characters.
    pub fn max_len(mut self, max: usize) -> Self {
        self.constraints.push(StringConstraint::MaxLen(max));
        self
    }

    /// Requires every character of the string to come from `alphabet`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::string().alphabet("0123456789");
    ///
    /// assert!(schema.validate(&json!("123"), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!("12a"), &ValuePath::root()).is_failure());
    /// ```
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.constraints.push(StringConstraint::Alphabet(alphabet.into()));
        self
    }

    /// Requires the string to contain `substr`.
    pub fn contains(mut self, substr: impl Into<String>) -> Self {
        self.constraints.push(StringConstraint::Contains(substr.into()));
        self
    }

    /// Requires the string to match the regex `pattern`.
    ///
    /// The pattern compiles when the schema is declared, so an invalid
    /// pattern is reported here rather than at validation time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::string().pattern(r"^\d+$")?;
    ///
    /// assert!(schema.validate(&json!("12345"), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!("abc"), &ValuePath::root()).is_failure());
    /// # Ok::<(), verdict::DeclarationError>(())
    /// ```
    pub fn pattern(mut self, pattern: &str) -> Result<Self, DeclarationError> {
        let regex = Regex::new(pattern).map_err(|source| DeclarationError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.constraints.push(StringConstraint::Pattern {
            regex,
            source: pattern.to_string(),
        });
        Ok(self)
    }

    /// Validates a value against this schema.
    ///
    /// A non-string value produces a single type error; constraint errors are
    /// only reported for values of the right type.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                return Validation::Failure(ValidationErrors::single(ValidationError::Type {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_type: ValueType::Str,
                }))
            }
        };

        let errors: Vec<ValidationError> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, s, value, path))
            .collect();

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

impl Display for StringSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.str")?;
        for constraint in &self.constraints {
            match constraint {
                StringConstraint::EqualTo(value) => write!(f, "('{}')", value)?,
                StringConstraint::Len(len) => write!(f, ".len({})", len)?,
                StringConstraint::MinLen(min) => write!(f, ".min_len({})", min)?,
                StringConstraint::MaxLen(max) => write!(f, ".max_len({})", max)?,
                StringConstraint::Alphabet(alphabet) => write!(f, ".alphabet('{}')", alphabet)?,
                StringConstraint::Contains(substr) => write!(f, ".contains('{}')", substr)?,
                StringConstraint::Pattern { source, .. } => write!(f, ".pattern('{}')", source)?,
            }
        }
        Ok(())
    }
}

/// Checks a single constraint and returns an error if it fails.
fn check_constraint(
    constraint: &StringConstraint,
    s: &str,
    value: &Value,
    path: &ValuePath,
) -> Option<ValidationError> {
    match constraint {
        StringConstraint::EqualTo(expected) => {
            if s != expected {
                Some(ValidationError::Value {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_value: Value::String(expected.clone()),
                })
            } else {
                None
            }
        }
        StringConstraint::Len(len) => {
            if s.chars().count() != *len {
                Some(ValidationError::Length {
                    path: path.clone(),
                    actual_value: value.clone(),
                    length: *len,
                })
            } else {
                None
            }
        }
        StringConstraint::MinLen(min) => {
            if s.chars().count() < *min {
                Some(ValidationError::MinLength {
                    path: path.clone(),
                    actual_value: value.clone(),
                    min_length: *min,
                })
            } else {
                None
            }
        }
        StringConstraint::MaxLen(max) => {
            if s.chars().count() > *max {
                Some(ValidationError::MaxLength {
                    path: path.clone(),
                    actual_value: value.clone(),
                    max_length: *max,
                })
            } else {
                None
            }
        }
        StringConstraint::Alphabet(alphabet) => {
            if !s.chars().all(|c| alphabet.contains(c)) {
                Some(ValidationError::Alphabet {
                    path: path.clone(),
                    actual_value: value.clone(),
                    alphabet: alphabet.clone(),
                })
            } else {
                None
            }
        }
        StringConstraint::Contains(substr) => {
            if !s.contains(substr.as_str()) {
                Some(ValidationError::Substr {
                    path: path.clone(),
                    actual_value: value.clone(),
                    substr: substr.clone(),
                })
            } else {
                None
            }
        }
        StringConstraint::Pattern { regex, source } => {
            if !regex.is_match(s) {
                Some(ValidationError::Regex {
                    path: path.clone(),
                    actual_value: value.clone(),
                    pattern: source.clone(),
                })
            } else {
                None
            }
        }
    }
}
