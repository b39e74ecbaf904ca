//! Integration tests for the message formatter.
//!
//! Every error kind is rendered twice, once at the document root and once
//! at a nested location, and each message is asserted byte for byte.

use serde_json::{json, Number};
use verdict::{Formatter, Schema, ValidationError, ValuePath, ValueType};

/// Helper for the nested location used throughout.
fn at_id() -> ValuePath {
    ValuePath::root().with_key("id")
}

/// Helper to render an error through the formatter.
fn fmt(error: &ValidationError) -> String {
    Formatter::new().format(error)
}

#[test]
fn test_type_error() {
    let root = ValidationError::Type {
        path: ValuePath::root(),
        actual_value: json!("banana"),
        expected_type: ValueType::Int,
    };
    assert_eq!(
        fmt(&root),
        "Value 'banana' must be <class 'int'>, but <class 'str'> given"
    );

    let nested = ValidationError::Type {
        path: at_id(),
        actual_value: json!("banana"),
        expected_type: ValueType::Int,
    };
    assert_eq!(
        fmt(&nested),
        "Value 'banana' at _['id'] must be <class 'int'>, but <class 'str'> given"
    );
}

#[test]
fn test_value_error() {
    let root = ValidationError::Value {
        path: ValuePath::root(),
        actual_value: json!("orange"),
        expected_value: json!("banana"),
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must be equal to 'banana', but 'orange' given"
    );

    let nested = ValidationError::Value {
        path: at_id(),
        actual_value: json!("orange"),
        expected_value: json!("banana"),
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must be equal to 'banana', but 'orange' given"
    );
}

#[test]
fn test_min_value_error() {
    let root = ValidationError::MinValue {
        path: ValuePath::root(),
        actual_value: json!(0),
        min_value: Number::from(1),
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'int'> must be greater than or equal to 1, but 0 given"
    );

    let nested = ValidationError::MinValue {
        path: at_id(),
        actual_value: json!(0),
        min_value: Number::from(1),
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'int'> at _['id'] must be greater than or equal to 1, but 0 given"
    );
}

#[test]
fn test_max_value_error() {
    let root = ValidationError::MaxValue {
        path: ValuePath::root(),
        actual_value: json!(1),
        max_value: Number::from(0),
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'int'> must be less than or equal to 0, but 1 given"
    );

    let nested = ValidationError::MaxValue {
        path: at_id(),
        actual_value: json!(1),
        max_value: Number::from(0),
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'int'> at _['id'] must be less than or equal to 0, but 1 given"
    );
}

#[test]
fn test_length_error() {
    let root = ValidationError::Length {
        path: ValuePath::root(),
        actual_value: json!("ab"),
        length: 1,
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must have exactly 1 element, but it has 2 elements"
    );

    let nested = ValidationError::Length {
        path: at_id(),
        actual_value: json!("ab"),
        length: 1,
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must have exactly 1 element, but it has 2 elements"
    );
}

#[test]
fn test_length_pluralizes_each_count_independently() {
    // 2 required, 1 present
    let error = ValidationError::Length {
        path: ValuePath::root(),
        actual_value: json!("a"),
        length: 2,
    };
    assert_eq!(
        fmt(&error),
        "Value <class 'str'> must have exactly 2 elements, but it has 1 element"
    );
}

#[test]
fn test_min_length_error() {
    let root = ValidationError::MinLength {
        path: ValuePath::root(),
        actual_value: json!(""),
        min_length: 1,
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must have at least 1 element, but it has 0 elements"
    );

    let other = ValidationError::MinLength {
        path: ValuePath::root(),
        actual_value: json!("a"),
        min_length: 3,
    };
    assert_eq!(
        fmt(&other),
        "Value <class 'str'> must have at least 3 elements, but it has 1 element"
    );

    let nested = ValidationError::MinLength {
        path: at_id(),
        actual_value: json!(""),
        min_length: 1,
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must have at least 1 element, but it has 0 elements"
    );
}

#[test]
fn test_max_length_error() {
    let root = ValidationError::MaxLength {
        path: ValuePath::root(),
        actual_value: json!("ab"),
        max_length: 1,
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must have at most 1 element, but it has 2 elements"
    );

    let other = ValidationError::MaxLength {
        path: ValuePath::root(),
        actual_value: json!("a"),
        max_length: 0,
    };
    assert_eq!(
        fmt(&other),
        "Value <class 'str'> must have at most 0 elements, but it has 1 element"
    );

    let nested = ValidationError::MaxLength {
        path: at_id(),
        actual_value: json!("ab"),
        max_length: 1,
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must have at most 1 element, but it has 2 elements"
    );
}

#[test]
fn test_alphabet_error() {
    let root = ValidationError::Alphabet {
        path: ValuePath::root(),
        actual_value: json!("banana"),
        alphabet: "0123456789".to_string(),
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must contain only '0123456789', but 'banana' given"
    );

    let nested = ValidationError::Alphabet {
        path: at_id(),
        actual_value: json!("banana"),
        alphabet: "0123456789".to_string(),
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must contain only '0123456789', but 'banana' given"
    );
}

#[test]
fn test_substr_error() {
    let root = ValidationError::Substr {
        path: ValuePath::root(),
        actual_value: json!("ananab"),
        substr: "banana".to_string(),
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must contain 'banana', but 'ananab' given"
    );

    let nested = ValidationError::Substr {
        path: at_id(),
        actual_value: json!("ananab"),
        substr: "banana".to_string(),
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must contain 'banana', but 'ananab' given"
    );
}

#[test]
fn test_regex_error() {
    let root = ValidationError::Regex {
        path: ValuePath::root(),
        actual_value: json!("banana"),
        pattern: "[0-9]+".to_string(),
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'str'> must match pattern '[0-9]+', but 'banana' given"
    );

    let nested = ValidationError::Regex {
        path: at_id(),
        actual_value: json!("banana"),
        pattern: "[0-9]+".to_string(),
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'str'> at _['id'] must match pattern '[0-9]+', but 'banana' given"
    );
}

#[test]
fn test_index_error_names_the_absent_position() {
    let root = ValidationError::Index {
        path: ValuePath::root(),
        actual_value: json!(["a"]),
        index: 1,
    };
    assert_eq!(fmt(&root), "Element _[1] does not exist");

    let nested = ValidationError::Index {
        path: at_id(),
        actual_value: json!(["a"]),
        index: 1,
    };
    assert_eq!(fmt(&nested), "Element _['id'][1] does not exist");
}

#[test]
fn test_extra_element_error() {
    let root = ValidationError::ExtraElement {
        path: ValuePath::root(),
        actual_value: json!(["a", "b"]),
        index: 1,
    };
    assert_eq!(fmt(&root), "Value contains extra element at index 1");

    let nested = ValidationError::ExtraElement {
        path: at_id(),
        actual_value: json!(["a", "b"]),
        index: 1,
    };
    assert_eq!(fmt(&nested), "Value at _['id'] contains extra element at index 1");
}

#[test]
fn test_missing_key_error_names_the_absent_key() {
    let root = ValidationError::MissingKey {
        path: ValuePath::root(),
        actual_value: json!({}),
        missing_key: "missing_key".to_string(),
    };
    assert_eq!(fmt(&root), "Key _['missing_key'] does not exist");

    let nested = ValidationError::MissingKey {
        path: at_id(),
        actual_value: json!({}),
        missing_key: "missing_key".to_string(),
    };
    assert_eq!(fmt(&nested), "Key _['id']['missing_key'] does not exist");
}

#[test]
fn test_extra_key_error() {
    let root = ValidationError::ExtraKey {
        path: ValuePath::root(),
        actual_value: json!({"extra_key": "value"}),
        extra_key: "extra_key".to_string(),
    };
    assert_eq!(fmt(&root), "Value contains extra key 'extra_key'");

    let nested = ValidationError::ExtraKey {
        path: at_id(),
        actual_value: json!({"extra_key": "value"}),
        extra_key: "extra_key".to_string(),
    };
    assert_eq!(fmt(&nested), "Value at _['id'] contains extra key 'extra_key'");
}

#[test]
fn test_schema_mismatch_error() {
    let root = ValidationError::SchemaMismatch {
        path: ValuePath::root(),
        actual_value: json!(42),
        expected_schemas: vec![Schema::string().into(), Schema::none().into()],
    };
    assert_eq!(
        fmt(&root),
        "Value <class 'int'> must match any of (schema.str, schema.none), but 42 given"
    );

    let nested = ValidationError::SchemaMismatch {
        path: at_id(),
        actual_value: json!(42),
        expected_schemas: vec![Schema::string().into(), Schema::none().into()],
    };
    assert_eq!(
        fmt(&nested),
        "Value <class 'int'> at _['id'] must match any of (schema.str, schema.none), but 42 given"
    );
}

#[test]
fn test_schema_mismatch_renders_refined_alternatives() {
    let error = ValidationError::SchemaMismatch {
        path: ValuePath::root(),
        actual_value: json!(0),
        expected_schemas: vec![Schema::integer().min(1).into(), Schema::none().into()],
    };
    assert_eq!(
        fmt(&error),
        "Value <class 'int'> must match any of (schema.int.min(1), schema.none), but 0 given"
    );
}

#[test]
fn test_root_messages_have_no_location_clause() {
    let errors = vec![
        ValidationError::Type {
            path: ValuePath::root(),
            actual_value: json!(1),
            expected_type: ValueType::Str,
        },
        ValidationError::MinValue {
            path: ValuePath::root(),
            actual_value: json!(0),
            min_value: Number::from(1),
        },
        ValidationError::ExtraKey {
            path: ValuePath::root(),
            actual_value: json!({"a": 1}),
            extra_key: "a".to_string(),
        },
    ];

    for error in &errors {
        assert!(
            !fmt(error).contains(" at "),
            "unexpected location clause in '{}'",
            fmt(error)
        );
    }
}

#[test]
fn test_nested_message_differs_only_by_location() {
    let root = ValidationError::Value {
        path: ValuePath::root(),
        actual_value: json!("orange"),
        expected_value: json!("banana"),
    };
    let nested = ValidationError::Value {
        path: at_id(),
        actual_value: json!("orange"),
        expected_value: json!("banana"),
    };

    let nested_message = fmt(&nested);
    let stripped = nested_message.replace(" at _['id']", "");
    assert_eq!(stripped, fmt(&root));
}

#[test]
fn test_deeper_paths_render_fully() {
    let error = ValidationError::Type {
        path: ValuePath::root().with_key("users").with_index(0).with_key("email"),
        actual_value: json!(42),
        expected_type: ValueType::Str,
    };
    assert_eq!(
        fmt(&error),
        "Value 42 at _['users'][0]['email'] must be <class 'str'>, but <class 'int'> given"
    );
}

#[test]
fn test_composite_values_render_as_compact_json() {
    let error = ValidationError::Type {
        path: ValuePath::root(),
        actual_value: json!([1, "a"]),
        expected_type: ValueType::Str,
    };
    assert_eq!(
        fmt(&error),
        r#"Value [1,"a"] must be <class 'str'>, but <class 'list'> given"#
    );

    let error = ValidationError::Type {
        path: ValuePath::root(),
        actual_value: json!({"b": 2, "a": 1}),
        expected_type: ValueType::Str,
    };
    assert_eq!(
        fmt(&error),
        r#"Value {"a":1,"b":2} must be <class 'str'>, but <class 'dict'> given"#
    );
}

#[test]
fn test_display_matches_formatter_for_every_kind() {
    let formatter = Formatter::new();
    let errors = vec![
        ValidationError::Type {
            path: at_id(),
            actual_value: json!("banana"),
            expected_type: ValueType::Int,
        },
        ValidationError::Value {
            path: at_id(),
            actual_value: json!("orange"),
            expected_value: json!("banana"),
        },
        ValidationError::MinValue {
            path: at_id(),
            actual_value: json!(0),
            min_value: Number::from(1),
        },
        ValidationError::MaxValue {
            path: at_id(),
            actual_value: json!(1),
            max_value: Number::from(0),
        },
        ValidationError::Length {
            path: at_id(),
            actual_value: json!("ab"),
            length: 1,
        },
        ValidationError::MinLength {
            path: at_id(),
            actual_value: json!(""),
            min_length: 1,
        },
        ValidationError::MaxLength {
            path: at_id(),
            actual_value: json!("ab"),
            max_length: 1,
        },
        ValidationError::Alphabet {
            path: at_id(),
            actual_value: json!("banana"),
            alphabet: "0123456789".to_string(),
        },
        ValidationError::Substr {
            path: at_id(),
            actual_value: json!("ananab"),
            substr: "banana".to_string(),
        },
        ValidationError::Regex {
            path: at_id(),
            actual_value: json!("banana"),
            pattern: "[0-9]+".to_string(),
        },
        ValidationError::Index {
            path: at_id(),
            actual_value: json!(["a"]),
            index: 1,
        },
        ValidationError::ExtraElement {
            path: at_id(),
            actual_value: json!(["a", "b"]),
            index: 1,
        },
        ValidationError::MissingKey {
            path: at_id(),
            actual_value: json!({}),
            missing_key: "missing_key".to_string(),
        },
        ValidationError::ExtraKey {
            path: at_id(),
            actual_value: json!({"extra_key": "value"}),
            extra_key: "extra_key".to_string(),
        },
        ValidationError::SchemaMismatch {
            path: at_id(),
            actual_value: json!(42),
            expected_schemas: vec![Schema::string().into(), Schema::none().into()],
        },
    ];

    for error in &errors {
        assert_eq!(error.to_string(), formatter.format(error));
    }
}

#[test]
fn test_formatting_is_deterministic() {
    let error = ValidationError::SchemaMismatch {
        path: at_id(),
        actual_value: json!({"b": 2, "a": 1}),
        expected_schemas: vec![Schema::dict().into(), Schema::none().into()],
    };

    let formatter = Formatter::new();
    let first = formatter.format(&error);
    let second = formatter.format(&error);
    assert_eq!(first, second);

    // Equal errors render identically through a second formatter
    assert_eq!(Formatter::new().format(&error.clone()), first);
}

#[test]
fn test_end_to_end_message_from_validation() {
    let schema = Schema::dict().field("id", Schema::integer());

    let result = schema.validate(&json!({"id": "banana"}), &ValuePath::root());
    let errors = result.into_result().unwrap_err();

    assert_eq!(
        errors.first().to_string(),
        "Value 'banana' at _['id'] must be <class 'int'>, but <class 'str'> given"
    );
}
