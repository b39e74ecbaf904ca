//! Schema descriptors for validation.
//!
//! This module provides the closed set of schema descriptors. Each descriptor
//! type (string, integer, dict, etc.) is declared through a builder, validates
//! values against its constraints and accumulates all violations rather than
//! short-circuiting on the first failure. Every descriptor also renders a
//! canonical textual identifier (`schema.str`, `schema.int.min(1)`) used when
//! a message needs to name a schema.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use verdict::{Schema, ValuePath};
//!
//! let schema = Schema::dict()
//!     .field("id", Schema::integer().min(1))
//!     .field("name", Schema::string().min_len(1));
//!
//! let result = schema.validate(&json!({"id": 1, "name": "Bob"}), &ValuePath::root());
//! assert!(result.is_success());
//! ```

mod any;
mod dict;
mod list;
mod numeric;
mod scalar;
mod string;

pub use any::AnySchema;
pub use dict::DictSchema;
pub use list::ListSchema;
pub use numeric::{FloatSchema, IntegerSchema};
pub use scalar::{BooleanSchema, NoneSchema};
pub use string::StringSchema;

use std::fmt::{self, Display};

use serde_json::Value;
use thiserror::Error;

use crate::path::ValuePath;
use crate::ValidationResult;

/// An error produced while declaring a schema.
#[derive(Debug, Error)]
pub enum DeclarationError {
    /// The declared pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A schema descriptor for JSON-like values.
///
/// `Schema` is the closed set of descriptors this crate understands. The
/// factory methods are the entry points for declaring schemas; each returns
/// its builder type, and every builder converts back into `Schema` via
/// `From`, so refined descriptors can be nested inside lists, dicts and
/// alternatives.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stillwater::Validation;
/// use verdict::{Schema, ValuePath};
///
/// let schema: Schema = Schema::integer().min(1).into();
///
/// match schema.validate(&json!(0), &ValuePath::root()) {
///     Validation::Success(()) => unreachable!(),
///     Validation::Failure(errors) => assert_eq!(
///         errors.first().to_string(),
///         "Value <class 'int'> must be greater than or equal to 1, but 0 given"
///     ),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Matches `null` only.
    None(NoneSchema),
    /// Matches booleans.
    Bool(BooleanSchema),
    /// Matches integral numbers.
    Int(IntegerSchema),
    /// Matches non-integral numbers.
    Float(FloatSchema),
    /// Matches strings.
    Str(StringSchema),
    /// Matches lists.
    List(ListSchema),
    /// Matches dictionaries.
    Dict(DictSchema),
    /// Matches any of an ordered set of alternatives.
    Any(AnySchema),
}

impl Schema {
    /// Creates a new string schema.
    ///
    /// The returned schema matches strings. Use builder methods to add
    /// constraints like an exact value, length bounds or a pattern.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::string().min_len(5);
    ///
    /// let result = schema.validate(&json!("hello"), &ValuePath::root());
    /// assert!(result.is_success());
    ///
    /// let result = schema.validate(&json!("hi"), &ValuePath::root());
    /// assert!(result.is_failure());
    /// ```
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new integer schema.
    ///
    /// The returned schema matches integral numbers only; `1.0` is a float
    /// and is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::integer().min(0).max(100);
    ///
    /// let result = schema.validate(&json!(50), &ValuePath::root());
    /// assert!(result.is_success());
    ///
    /// let result = schema.validate(&json!(1.5), &ValuePath::root());
    /// assert!(result.is_failure());
    /// ```
    pub fn integer() -> IntegerSchema {
        IntegerSchema::new()
    }

    /// Creates a new float schema.
    ///
    /// The returned schema matches non-integral numbers only; `1` is an
    /// integer and is rejected.
    pub fn float() -> FloatSchema {
        FloatSchema::new()
    }

    /// Creates a new boolean schema.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new()
    }

    /// Creates a new none schema, matching `null` only.
    pub fn none() -> NoneSchema {
        NoneSchema::new()
    }

    /// Creates a new list schema with no element declaration.
    ///
    /// Use [`Schema::list_of`] to validate every element against one schema,
    /// or [`ListSchema::elements`] to declare a fixed element-wise sequence.
    pub fn list() -> ListSchema {
        ListSchema::new()
    }

    /// Creates a new list schema validating every element against `element`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::list_of(Schema::string().min_len(1));
    ///
    /// let result = schema.validate(&json!(["a", "b"]), &ValuePath::root());
    /// assert!(result.is_success());
    /// ```
    pub fn list_of(element: impl Into<Schema>) -> ListSchema {
        ListSchema::new().of(element)
    }

    /// Creates a new dict schema with no declared fields.
    pub fn dict() -> DictSchema {
        DictSchema::new()
    }

    /// Creates a new schema matching any of the given alternatives.
    ///
    /// Alternatives are tried in declaration order and the first match wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::{Schema, ValuePath};
    ///
    /// let schema = Schema::any(vec![Schema::string().into(), Schema::none().into()]);
    ///
    /// assert!(schema.validate(&json!("id"), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!(null), &ValuePath::root()).is_success());
    /// assert!(schema.validate(&json!(42), &ValuePath::root()).is_failure());
    /// ```
    pub fn any(alternatives: Vec<Schema>) -> AnySchema {
        AnySchema::new(alternatives)
    }

    /// Validates a value against this schema.
    ///
    /// Dispatches to the wrapped descriptor. Returns `Validation::Success` if
    /// the value matches, or `Validation::Failure` with every violation found.
    pub fn validate(&self, value: &Value, path: &ValuePath) -> ValidationResult {
        match self {
            Schema::None(schema) => schema.validate(value, path),
            Schema::Bool(schema) => schema.validate(value, path),
            Schema::Int(schema) => schema.validate(value, path),
            Schema::Float(schema) => schema.validate(value, path),
            Schema::Str(schema) => schema.validate(value, path),
            Schema::List(schema) => schema.validate(value, path),
            Schema::Dict(schema) => schema.validate(value, path),
            Schema::Any(schema) => schema.validate(value, path),
        }
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::None(schema) => write!(f, "{}", schema),
            Schema::Bool(schema) => write!(f, "{}", schema),
            Schema::Int(schema) => write!(f, "{}", schema),
            Schema::Float(schema) => write!(f, "{}", schema),
            Schema::Str(schema) => write!(f, "{}", schema),
            Schema::List(schema) => write!(f, "{}", schema),
            Schema::Dict(schema) => write!(f, "{}", schema),
            Schema::Any(schema) => write!(f, "{}", schema),
        }
    }
}

impl From<NoneSchema> for Schema {
    fn from(schema: NoneSchema) -> Self {
        Schema::None(schema)
    }
}

impl From<BooleanSchema> for Schema {
    fn from(schema: BooleanSchema) -> Self {
        Schema::Bool(schema)
    }
}

impl From<IntegerSchema> for Schema {
    fn from(schema: IntegerSchema) -> Self {
        Schema::Int(schema)
    }
}

impl From<FloatSchema> for Schema {
    fn from(schema: FloatSchema) -> Self {
        Schema::Float(schema)
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::Str(schema)
    }
}

impl From<ListSchema> for Schema {
    fn from(schema: ListSchema) -> Self {
        Schema::List(schema)
    }
}

impl From<DictSchema> for Schema {
    fn from(schema: DictSchema) -> Self {
        Schema::Dict(schema)
    }
}

impl From<AnySchema> for Schema {
    fn from(schema: AnySchema) -> Self {
        Schema::Any(schema)
    }
}
