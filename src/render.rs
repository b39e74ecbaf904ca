//! Canonical textual depiction of runtime values and their types.
//!
//! Every message produced by this crate renders values and type tags through
//! this module, so equal inputs always yield identical text:
//!
//! - strings appear verbatim between single quotes (`'banana'`),
//! - numbers, booleans and null appear as their JSON literals,
//! - lists and dictionaries appear as compact JSON,
//! - runtime types appear as tags like `<class 'int'>`.

use std::fmt::{self, Display};

use serde_json::Value;

/// The runtime type of a document value.
///
/// There are exactly seven runtime types. Integral and non-integral numbers
/// are distinct types, so `1` is an [`Int`](ValueType::Int) while `1.5` is a
/// [`Float`](ValueType::Float).
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::ValueType;
///
/// assert_eq!(ValueType::of(&json!(1)), ValueType::Int);
/// assert_eq!(ValueType::of(&json!(1.5)), ValueType::Float);
/// assert_eq!(ValueType::of(&json!(1)).to_string(), "<class 'int'>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The null value.
    None,
    /// A boolean.
    Bool,
    /// An integral number.
    Int,
    /// A non-integral number.
    Float,
    /// A string.
    Str,
    /// A list of values.
    List,
    /// A dictionary of keyed values.
    Dict,
}

impl ValueType {
    /// Returns the runtime type of a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::None,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    ValueType::Int
                } else {
                    ValueType::Float
                }
            }
            Value::String(_) => ValueType::Str,
            Value::Array(_) => ValueType::List,
            Value::Object(_) => ValueType::Dict,
        }
    }

    /// Returns the bare type name without the tag decoration.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::None => "NoneType",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Dict => "dict",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.name())
    }
}

/// Renders a value in its canonical message form.
///
/// Strings are emitted verbatim between single quotes with no escaping; an
/// embedded quote passes through unchanged. Every other value renders as
/// compact JSON, which for dictionaries is key-ordered and therefore
/// deterministic.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::render::render_value;
///
/// assert_eq!(render_value(&json!("banana")), "'banana'");
/// assert_eq!(render_value(&json!(42)), "42");
/// assert_eq!(render_value(&json!(null)), "null");
/// assert_eq!(render_value(&json!([1, 2])), "[1,2]");
/// ```
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

/// Returns the number of countable elements in a value.
///
/// Strings count characters rather than bytes, lists count items and
/// dictionaries count entries.
///
/// # Panics
///
/// Panics if the value is not countable (null, a boolean or a number).
/// Length constraints are only ever declared on countable schemas, so a
/// non-countable value here is a bug in the caller.
pub fn value_len(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        other => panic!("value has no length: {}", ValueType::of(other)),
    }
}

/// Renders a count with its pluralized unit: `1 element`, `2 elements`.
pub fn elements(count: usize) -> String {
    if count == 1 {
        "1 element".to_string()
    } else {
        format!("{} elements", count)
    }
}
