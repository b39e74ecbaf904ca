//! Dict schema validation.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::render::ValueType;
use crate::schema::Schema;
use crate::ValidationResult;

/// A declared field and whether it must be present.
#[derive(Debug, Clone, PartialEq)]
struct FieldDef {
    schema: Schema,
    required: bool,
}

/// A schema for validating dicts.
///
/// Fields declared with [`DictSchema::field`] must be present and match
/// their schema; fields declared with [`DictSchema::optional`] may be
/// absent. Undeclared keys are rejected unless the schema is
/// [`DictSchema::relaxed`].
///
/// Declared fields are checked in declaration order; undeclared keys are
/// reported in the key's sorted order, after all declared fields.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Schema, ValuePath};
///
/// let schema = Schema::dict()
///     .field("id", Schema::integer())
///     .optional("name", Schema::string());
///
/// assert!(schema
///     .validate(&json!({"id": 1, "name": "Bob"}), &ValuePath::root())
///     .is_success());
/// assert!(schema.validate(&json!({"id": 1}), &ValuePath::root()).is_success());
/// assert!(schema.validate(&json!({}), &ValuePath::root()).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictSchema {
    fields: IndexMap<String, FieldDef>,
    relaxed: bool,
}

impl DictSchema {
    /// Creates a new dict schema with no declared fields.
    ///
    /// With no declarations only the empty dict validates; call
    /// [`DictSchema::relaxed`] to accept arbitrary keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    ///
    /// Re-declaring a name replaces the earlier declaration.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.insert(
            name.into(),
            FieldDef {
                schema: schema.into(),
                required: true,
            },
        );
        self
    }

    /// Declares an optional field.
    ///
    /// An absent optional field is fine; a present one must match its
    /// schema.
    pub fn optional(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.insert(
            name.into(),
            FieldDef {
                schema: schema.into(),
                required: false,
            },
        );
        self
    }

    /// Allows keys beyond the declared fields.
    pub fn relaxed(mut self) -> Self {
        self.relaxed = true;
        self
    }

    /// Validates a value against this schema.
    ///
    /// A non-dict value produces a single type error. For dicts, missing
    /// required fields, field errors, and extra keys accumulate in one
    /// failure.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                return Validation::Failure(ValidationErrors::single(ValidationError::Type {
                    path: path.clone(),
                    actual_value: value.clone(),
                    expected_type: ValueType::Dict,
                }))
            }
        };

        let mut errors: Vec<ValidationError> = Vec::new();

        for (name, field) in &self.fields {
            match obj.get(name) {
                Some(item) => {
                    if let Validation::Failure(nested) =
                        field.schema.validate(item, &path.with_key(name.clone()))
                    {
                        errors.extend(nested.into_vec());
                    }
                }
                None if field.required => errors.push(ValidationError::MissingKey {
                    path: path.clone(),
                    actual_value: value.clone(),
                    missing_key: name.clone(),
                }),
                None => {}
            }
        }

        if !self.relaxed {
            for key in obj.keys() {
                if !self.fields.contains_key(key) {
                    errors.push(ValidationError::ExtraKey {
                        path: path.clone(),
                        actual_value: value.clone(),
                        extra_key: key.clone(),
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

impl Display for DictSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema.dict")
    }
}
