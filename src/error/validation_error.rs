//! Validation error taxonomy and the accumulating error collection.
//!
//! This module provides [`ValidationError`], one record per failure kind, and
//! [`ValidationErrors`] for accumulating every failure found in a document.

use std::fmt::{self, Display};

use serde_json::{Number, Value};
use stillwater::prelude::*;

use crate::path::ValuePath;
use crate::schema::Schema;

/// A single validation failure.
///
/// Each variant is one kind from the closed failure taxonomy. An error is a
/// plain record: the location of the offending value, the offending value
/// itself, and the violated constraint. Errors carry no text; rendering is
/// the job of [`Formatter`](crate::Formatter), and `Display` delegates to it.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{ValidationError, ValuePath, ValueType};
///
/// let error = ValidationError::Type {
///     path: ValuePath::root(),
///     actual_value: json!("banana"),
///     expected_type: ValueType::Int,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "Value 'banana' must be <class 'int'>, but <class 'str'> given"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The value has the wrong runtime type.
    Type {
        path: ValuePath,
        actual_value: Value,
        expected_type: crate::render::ValueType,
    },
    /// The value does not equal the declared constant.
    Value {
        path: ValuePath,
        actual_value: Value,
        expected_value: Value,
    },
    /// The value is below the declared minimum.
    MinValue {
        path: ValuePath,
        actual_value: Value,
        min_value: Number,
    },
    /// The value is above the declared maximum.
    MaxValue {
        path: ValuePath,
        actual_value: Value,
        max_value: Number,
    },
    /// The value does not have exactly the declared element count.
    Length {
        path: ValuePath,
        actual_value: Value,
        length: usize,
    },
    /// The value has fewer elements than the declared minimum.
    MinLength {
        path: ValuePath,
        actual_value: Value,
        min_length: usize,
    },
    /// The value has more elements than the declared maximum.
    MaxLength {
        path: ValuePath,
        actual_value: Value,
        max_length: usize,
    },
    /// The string contains characters outside the declared alphabet.
    Alphabet {
        path: ValuePath,
        actual_value: Value,
        alphabet: String,
    },
    /// The string does not contain the declared substring.
    Substr {
        path: ValuePath,
        actual_value: Value,
        substr: String,
    },
    /// The string does not match the declared pattern.
    ///
    /// `pattern` is the source text the pattern was declared with.
    Regex {
        path: ValuePath,
        actual_value: Value,
        pattern: String,
    },
    /// A declared list position is absent from the value.
    Index {
        path: ValuePath,
        actual_value: Value,
        index: usize,
    },
    /// The list has an element at a position the declaration does not cover.
    ExtraElement {
        path: ValuePath,
        actual_value: Value,
        index: usize,
    },
    /// A required key is absent from the dictionary.
    MissingKey {
        path: ValuePath,
        actual_value: Value,
        missing_key: String,
    },
    /// The dictionary has a key the declaration does not cover.
    ExtraKey {
        path: ValuePath,
        actual_value: Value,
        extra_key: String,
    },
    /// The value matches none of the declared alternatives.
    SchemaMismatch {
        path: ValuePath,
        actual_value: Value,
        expected_schemas: Vec<Schema>,
    },
}

impl ValidationError {
    /// Returns the location of the value this error describes.
    pub fn path(&self) -> &ValuePath {
        match self {
            ValidationError::Type { path, .. }
            | ValidationError::Value { path, .. }
            | ValidationError::MinValue { path, .. }
            | ValidationError::MaxValue { path, .. }
            | ValidationError::Length { path, .. }
            | ValidationError::MinLength { path, .. }
            | ValidationError::MaxLength { path, .. }
            | ValidationError::Alphabet { path, .. }
            | ValidationError::Substr { path, .. }
            | ValidationError::Regex { path, .. }
            | ValidationError::Index { path, .. }
            | ValidationError::ExtraElement { path, .. }
            | ValidationError::MissingKey { path, .. }
            | ValidationError::ExtraKey { path, .. }
            | ValidationError::SchemaMismatch { path, .. } => path,
        }
    }

    /// Returns the offending value this error describes.
    pub fn actual_value(&self) -> &Value {
        match self {
            ValidationError::Type { actual_value, .. }
            | ValidationError::Value { actual_value, .. }
            | ValidationError::MinValue { actual_value, .. }
            | ValidationError::MaxValue { actual_value, .. }
            | ValidationError::Length { actual_value, .. }
            | ValidationError::MinLength { actual_value, .. }
            | ValidationError::MaxLength { actual_value, .. }
            | ValidationError::Alphabet { actual_value, .. }
            | ValidationError::Substr { actual_value, .. }
            | ValidationError::Regex { actual_value, .. }
            | ValidationError::Index { actual_value, .. }
            | ValidationError::ExtraElement { actual_value, .. }
            | ValidationError::MissingKey { actual_value, .. }
            | ValidationError::ExtraKey { actual_value, .. }
            | ValidationError::SchemaMismatch { actual_value, .. } => actual_value,
        }
    }
}

// ValidationError is Send + Sync since all payloads are owned types
// (ValuePath, serde_json::Value, String, Vec<Schema>). These assertions
// keep that true if the payloads change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` to guarantee that
/// at least one error is present. This is essential for use with
/// `Validation<T, ValidationErrors>` since a failure must have at least one
/// error.
///
/// The collection imposes no consumption policy: errors stay in the order
/// they were accumulated, and callers decide how many to render.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`, allowing errors from multiple
/// checks to be combined:
///
/// ```rust
/// use serde_json::json;
/// use stillwater::prelude::*;
/// use verdict::{ValidationError, ValidationErrors, ValuePath};
///
/// let first = ValidationErrors::single(ValidationError::MissingKey {
///     path: ValuePath::root(),
///     actual_value: json!({}),
///     missing_key: "id".to_string(),
/// });
/// let second = ValidationErrors::single(ValidationError::MissingKey {
///     path: ValuePath::root(),
///     actual_value: json!({}),
///     missing_key: "name".to_string(),
/// });
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained errors in accumulation order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors located at the specified path.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.path() == path).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<ValidationError> {
        &self.0
    }

    /// Creates a `ValidationErrors` from a `Vec<ValidationError>`.
    ///
    /// Use this when you're certain the vec contains at least one error.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ValidationErrors requires at least one error"))
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// ValidationErrors is Send + Sync since it only contains ValidationError
// which is Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
