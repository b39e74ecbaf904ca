//! List schema validation.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::render::ValueType;
use crate::schema::Schema;
use crate::ValidationResult;

/// How the elements of a list are validated.
#[derive(Debug, Clone, PartialEq, Default)]
enum ElementShape {
    /// Elements may be anything.
    #[default]
    Untyped,
    /// Every element must match one schema.
    Every(Box<Schema>),
    /// Element at position `i` must match the schema at position `i`.
    Fixed(Vec<Schema>),
}

/// A constraint applied to list lengths.
#[derive(Debug, Clone, PartialEq)]
enum ListConstraint {
    Len(usize),
    MinLen(usize),
    MaxLen(usize),
}

/// A schema for validating lists.
///
/// A list schema can constrain the overall length and the shape of its
/// elements. With [`ListSchema::of`] every element is checked against one
/// schema; with [`ListSchema::elements`] each position gets its own schema
/// and the list must not run past the declared positions.
///
/// Element errors carry the element's own position in their path, so a
/// failure inside the third element of `_['items']` reports itself at
/// `_['items'][2]`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::list_of(Schema::string()).min_len(1);
///
/// assert!(schema.validate(&json!(["a", "b"]), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!([]), &ValuePath::root()).is_failure());
/// assert!(schema.validate(&json!(["a", 1]), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSchema {
    shape: ElementShape,
    constraints: Vec<ListConstraint>,
}

impl ListSchema {
    /// Creates a new list schema accepting any elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every element to match `element`.
    pub fn of(mut self, element: impl Into<Schema>) -> Self {
        self.shape = ElementShape::Every(Box::new(element.into()));
        self
    }

    /// Requires element `i` to match the `i`-th schema, with no elements
    /// past the declared positions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::list().elements(vec![
    ///     Schema::string().into(),
    ///     Schema::integer().into(),
    /// ]);
    ///
    /// assert!(schema.validate(&json!(["a", 1]), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!(["a"]), &ValuePath::root()).is_failure());
    /// assert!(schema.validate(&json!(["a", 1, 2]), &ValuePath::root()).is_failure());
    /// ```
    pub fn elements(mut self, elements: Vec<Schema>) -> Self {
        self.shape = ElementShape::Fixed(elements);
        self
    }

    /// Requires the list to have exactly `len` elements.
    pub fn len(mut self, len: usize) -> Self {
        self.constraints.push(ListConstraint::Len(len));
        self
    }

    /// Requires the list to have at least `min_len` elements.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.constraints.push(ListConstraint::MinLen(min_len));
        self
    }

    /// Requires the list to have at most `max_len` elements.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.constraints.push(ListConstraint::MaxLen(max_len));
        self
    }

    /// Validates a value against this schema.
    ///
    /// A non-list value produces a single type error. For lists, length
    /// errors and element errors accumulate in one failure.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        let items = match value.as_array() {
            Some(items) => items,
            None => {
                return Validation::Failure(ValidationErrors::single(ValidationError::Type {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_type: ValueType::List,
                }))
            }
        };

        let mut errors: Vec<ValidationError> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, items.len(), value, path))
            .collect();

        match &self.shape {
            ElementShape::Untyped => {}
            ElementShape::Every(element) => {
                for (index, item) in items.iter().enumerate() {
                    if let Validation::Failure(nested) =
                        element.validate(item, &path.with_index(index))
                    {
                        errors.extend(nested.into_vec());
                    }
                }
            }
            ElementShape::Fixed(declared) => {
                for (index, schema) in declared.iter().enumerate() {
                    match items.get(index) {
                        Some(item) => {
                            if let Validation::Failure(nested) =
                                schema.validate(item, &path.with_index(index))
                            {
                                errors.extend(nested.into_vec());
                            }
                        }
                        None => errors.push(ValidationError::Index {
                            path: path.clone(),
                            actual_value: value.clone(),
                            index,
                        }),
                    }
                }
                for index in declared.len()..items.len() {
                    errors.push(ValidationError::ExtraElement {
                        path: path.clone(),
                        actual_value: value.clone(),
                        index,
                    });
                }
            }
        }

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

impl Display for ListSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.list")?;
        match &self.shape {
            ElementShape::Untyped => {}
            ElementShape::Every(element) => write!(f, "({})", element)?,
            ElementShape::Fixed(declared) => {
                let rendered: Vec<String> = declared.iter().map(|s| s.to_string()).collect();
                write!(f, "([{}])", rendered.join(", "))?;
            }
        }
        for constraint in &self.constraints {
            match constraint {
                ListConstraint::Len(len) => write!(f, ".len({})", len)?,
                ListConstraint::MinLen(min_len) => write!(f, ".min_len({})", min_len)?,
                ListConstraint::MaxLen(max_len) => write!(f, ".max_len({})", max_len)?,
            }
        }
        Ok(())
    }
}

/// Checks a single length constraint and returns an error if it fails.
fn check_constraint(
    constraint: &ListConstraint,
    len: usize,
    value: &Value,
    path: &ValuePath,
) -> Option<ValidationError> {
    match constraint {
        ListConstraint::Len(expected) => {
            if len != *expected {
                Some(ValidationError::Length {
                    path: path.clone(),
                    actual_value: value.clone(),
                    length: *expected,
                })
            } else {
                None
            }
        }
        ListConstraint::MinLen(min_len) => {
            if len < *min_len {
                Some(ValidationError::MinLength {
                    path: path.clone(),
                    actual_value: value.clone(),
                    min_length: *min_len,
                })
            } else {
                None
            }
        }
        ListConstraint::MaxLen(max_len) => {
            if len > *max_len {
                Some(ValidationError::MaxLength {
                    path: path.clone(),
                    actual_value: value.clone(),
                    max_length: *max_len,
                })
            } else {
                None
            }
        }
    }
}
