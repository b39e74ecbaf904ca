//! # Verdict
//!
//! A schema validation library that accumulates ALL validation errors and
//! renders each one as an exact, human-readable message.
//!
//! ## Overview
//!
//! Unlike typical validation libraries that stop at the first error, verdict
//! collects all validation errors to give users complete information about
//! what needs to be fixed. This is achieved through integration with
//! stillwater's `Validation` type for applicative error accumulation. Every
//! error knows where in the document it happened and formats itself as a
//! stable, diff-friendly sentence.
//!
//! ## Core Types
//!
//! - [`ValuePath`]: Represents paths to values in nested structures, rendered as `_['users'][0]`
//! - [`ValidationError`]: A single validation error with context (path, failing value, expectation)
//! - [`ValidationErrors`]: A non-empty collection of validation errors
//! - [`Schema`]: Entry point for declaring validation schemas
//! - [`Formatter`]: Renders errors as exact human-readable messages
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use verdict::{Schema, ValuePath};
//!
//! // Declare a schema
//! let schema = Schema::dict()
//!     .field("id", Schema::integer().min(1))
//!     .field("name", Schema::string().min_len(1));
//!
//! // Validate a value
//! let result = schema.validate(&json!({"id": 1, "name": "Bob"}), &ValuePath::root());
//! assert!(result.is_success());
//!
//! // Invalid values produce exact messages
//! let result = schema.validate(&json!({"id": 0, "name": "Bob"}), &ValuePath::root());
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(
//!     errors.first().to_string(),
//!     "Value <class 'int'> at _['id'] must be greater than or equal to 1, but 0 given"
//! );
//! ```

pub mod error;
pub mod format;
pub mod path;
pub mod render;
pub mod schema;

pub use error::{ValidationError, ValidationErrors};
pub use format::Formatter;
pub use path::{PathSegment, ValuePath};
pub use render::ValueType;
pub use schema::{
    AnySchema, BooleanSchema, DeclarationError, DictSchema, FloatSchema, IntegerSchema,
    ListSchema, NoneSchema, Schema, StringSchema,
};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult = stillwater::Validation<(), ValidationErrors>;
