//! Rendering of validation errors into stable, human-readable messages.
//!
//! [`Formatter`] maps each error kind to a single-line message. Formatting
//! never fails and equal errors always produce byte-identical text, so
//! messages are safe to assert on and to snapshot.

use std::fmt::{self, Display};

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::render::{elements, render_value, value_len, ValueType};

/// Renders validation errors as single-line messages.
///
/// The formatter is stateless and cheap to copy. Most messages locate the
/// offending value with an ` at _['id']` clause, omitted when the value is
/// the document root. The two existence errors work differently: a missing
/// list position or dictionary key is spliced onto the path itself, so the
/// message names the absent location (`Key _['id']['email'] does not exist`)
/// rather than the container.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Formatter, ValidationError, ValuePath};
///
/// let formatter = Formatter::new();
/// let error = ValidationError::MaxValue {
///     path: ValuePath::root().with_key("id"),
///     actual_value: json!(1),
///     max_value: serde_json::Number::from(0),
/// };
///
/// assert_eq!(
///     formatter.format(&error),
///     "Value <class 'int'> at _['id'] must be less than or equal to 0, but 1 given"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter;

impl Formatter {
    /// Creates a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Renders a single error as its canonical message.
    pub fn format(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::Type {
                path,
                actual_value,
                expected_type,
            } => format!(
                "Value {}{} must be {}, but {} given",
                render_value(actual_value),
                location(path),
                expected_type,
                ValueType::of(actual_value)
            ),
            ValidationError::Value {
                path,
                actual_value,
                expected_value,
            } => format!(
                "Value {}{} must be equal to {}, but {} given",
                ValueType::of(actual_value),
                location(path),
                render_value(expected_value),
                render_value(actual_value)
            ),
            ValidationError::MinValue {
                path,
                actual_value,
                min_value,
            } => format!(
                "Value {}{} must be greater than or equal to {}, but {} given",
                ValueType::of(actual_value),
                location(path),
                min_value,
                render_value(actual_value)
            ),
            ValidationError::MaxValue {
                path,
                actual_value,
                max_value,
            } => format!(
                "Value {}{} must be less than or equal to {}, but {} given",
                ValueType::of(actual_value),
                location(path),
                max_value,
                render_value(actual_value)
            ),
            ValidationError::Length {
                path,
                actual_value,
                length,
            } => format!(
                "Value {}{} must have exactly {}, but it has {}",
                ValueType::of(actual_value),
                location(path),
                elements(*length),
                elements(value_len(actual_value))
            ),
            ValidationError::MinLength {
                path,
                actual_value,
                min_length,
            } => format!(
                "Value {}{} must have at least {}, but it has {}",
                ValueType::of(actual_value),
                location(path),
                elements(*min_length),
                elements(value_len(actual_value))
            ),
            ValidationError::MaxLength {
                path,
                actual_value,
                max_length,
            } => format!(
                "Value {}{} must have at most {}, but it has {}",
                ValueType::of(actual_value),
                location(path),
                elements(*max_length),
                elements(value_len(actual_value))
            ),
            ValidationError::Alphabet {
                path,
                actual_value,
                alphabet,
            } => format!(
                "Value {}{} must contain only '{}', but {} given",
                ValueType::of(actual_value),
                location(path),
                alphabet,
                render_value(actual_value)
            ),
            ValidationError::Substr {
                path,
                actual_value,
                substr,
            } => format!(
                "Value {}{} must contain '{}', but {} given",
                ValueType::of(actual_value),
                location(path),
                substr,
                render_value(actual_value)
            ),
            ValidationError::Regex {
                path,
                actual_value,
                pattern,
            } => format!(
                "Value {}{} must match pattern '{}', but {} given",
                ValueType::of(actual_value),
                location(path),
                pattern,
                render_value(actual_value)
            ),
            ValidationError::Index { path, index, .. } => {
                format!("Element {} does not exist", path.with_index(*index))
            }
            ValidationError::ExtraElement { path, index, .. } => {
                format!("Value{} contains extra element at index {}", location(path), index)
            }
            ValidationError::MissingKey {
                path, missing_key, ..
            } => format!("Key {} does not exist", path.with_key(missing_key.clone())),
            ValidationError::ExtraKey {
                path, extra_key, ..
            } => format!("Value{} contains extra key '{}'", location(path), extra_key),
            ValidationError::SchemaMismatch {
                path,
                actual_value,
                expected_schemas,
            } => {
                let alternatives = expected_schemas
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "Value {}{} must match any of ({}), but {} given",
                    ValueType::of(actual_value),
                    location(path),
                    alternatives,
                    render_value(actual_value)
                )
            }
        }
    }
}

/// The ` at _['id']` clause, empty for the document root.
fn location(path: &ValuePath) -> String {
    if path.is_root() {
        String::new()
    } else {
        format!(" at {}", path)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Formatter::new().format(self))
    }
}

impl std::error::Error for ValidationError {}
