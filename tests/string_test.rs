//! Integration tests for string schema validation.

use serde_json::json;
use verdict::{Schema, ValidationError, ValidationErrors, ValuePath};

/// Helper to extract the error value from a Validation
fn unwrap_failure<T, E>(v: stillwater::Validation<T, E>) -> E
where
    T: std::fmt::Debug,
{
    v.into_result().unwrap_err()
}

#[test]
fn test_schema_string_factory() {
    let schema = Schema::string();
    let result = schema.validate(&json!("test"), &ValuePath::root());
    assert!(result.is_success());
}

#[test]
fn test_equal_to() {
    let schema = Schema::string().equal_to("banana");

    let result = schema.validate(&json!("banana"), &ValuePath::root());
    assert!(result.is_success());

    let result = schema.validate(&json!("orange"), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must be equal to 'banana', but 'orange' given"
    );
}

#[test]
fn test_len_requires_exact_length() {
    let schema = Schema::string().len(5);

    let result = schema.validate(&json!("hello"), &ValuePath::root());
    assert!(result.is_success());

    let result = schema.validate(&json!("hi"), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must have exactly 5 elements, but it has 2 elements"
    );
}

#[test]
fn test_min_len_rejects_short_strings() {
    let schema = Schema::string().min_len(5);

    // Exactly 5 characters - should pass
    let result = schema.validate(&json!("hello"), &ValuePath::root());
    assert!(result.is_success());

    // 4 characters - should fail
    let result = schema.validate(&json!("test"), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must have at least 5 elements, but it has 4 elements"
    );
}

#[test]
fn test_max_len_rejects_long_strings() {
    let schema = Schema::string().max_len(10);

    // Exactly 10 characters - should pass
    let result = schema.validate(&json!("1234567890"), &ValuePath::root());
    assert!(result.is_success());

    // 11 characters - should fail
    let result = schema.validate(&json!("12345678901"), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must have at most 10 elements, but it has 11 elements"
    );
}

#[test]
fn test_combined_min_max_len() {
    let schema = Schema::string().min_len(5).max_len(10);

    // Within range
    assert!(schema.validate(&json!("hello"), &ValuePath::root()).is_success());
    assert!(schema.validate(&json!("1234567890"), &ValuePath::root()).is_success());

    // Below minimum
    assert!(schema.validate(&json!("hi"), &ValuePath::root()).is_failure());

    // Above maximum
    assert!(schema
        .validate(&json!("this is too long"), &ValuePath::root())
        .is_failure());
}

#[test]
fn test_alphabet_restricts_characters() {
    let schema = Schema::string().alphabet("0123456789");

    let result = schema.validate(&json!("20260822"), &ValuePath::root());
    assert!(result.is_success());

    let result = schema.validate(&json!("banana"), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must contain only '0123456789', but 'banana' given"
    );
}

#[test]
fn test_contains_requires_substring() {
    let schema = Schema::string().contains("banana");

    let result = schema.validate(&json!("one banana"), &ValuePath::root());
    assert!(result.is_success());

    let result = schema.validate(&json!("ananab"), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must contain 'banana', but 'ananab' given"
    );
}

#[test]
fn test_pattern_validates_regex() {
    let schema = Schema::string().pattern(r"^\d+$").unwrap();

    // Digits only - should pass
    let result = schema.validate(&json!("12345"), &ValuePath::root());
    assert!(result.is_success());

    // Contains letters - should fail
    let result = schema.validate(&json!("abc123"), &ValuePath::root());
    assert!(result.is_failure());
}

#[test]
fn test_pattern_error_includes_pattern() {
    let schema = Schema::string().pattern("[0-9]+").unwrap();
    let result = schema.validate(&json!("banana"), &ValuePath::root());

    let errors = unwrap_failure(result);
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must match pattern '[0-9]+', but 'banana' given"
    );
}

#[test]
fn test_invalid_pattern_fails_at_declaration() {
    let result = Schema::string().pattern("[invalid");

    let error = result.err().expect("pattern should be rejected");
    let message = error.to_string();
    assert!(message.starts_with("invalid pattern '[invalid':"));
}

#[test]
fn test_non_string_produces_single_type_error() {
    let schema = Schema::string().min_len(5).pattern(r"^\d+$").unwrap();

    // Number: the constraints are never consulted
    let result = schema.validate(&json!(42), &ValuePath::root());
    let errors = unwrap_failure(result);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.first().to_string(),
        "Value 42 must be <class 'str'>, but <class 'int'> given"
    );

    // Boolean
    assert!(schema.validate(&json!(true), &ValuePath::root()).is_failure());

    // Null
    assert!(schema.validate(&json!(null), &ValuePath::root()).is_failure());

    // Array
    assert!(schema.validate(&json!([1, 2, 3]), &ValuePath::root()).is_failure());

    // Object
    assert!(schema
        .validate(&json!({"key": "value"}), &ValuePath::root())
        .is_failure());
}

#[test]
fn test_constraint_error_accumulation() {
    let schema = Schema::string().min_len(10).pattern(r"^\d+$").unwrap();

    // "abc" is both too short AND doesn't match the pattern
    let result = schema.validate(&json!("abc"), &ValuePath::root());
    let errors = unwrap_failure(result);

    // Both errors, in declaration order
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors.first(), ValidationError::MinLength { .. }));
    let second = errors.iter().nth(1).expect("second error");
    assert!(matches!(second, ValidationError::Regex { .. }));
}

#[test]
fn test_path_included_in_errors() {
    let schema = Schema::string().min_len(5);
    let path = ValuePath::root()
        .with_key("users")
        .with_index(0)
        .with_key("name");

    let result = schema.validate(&json!("ab"), &path);
    let errors = unwrap_failure(result);
    assert_eq!(errors.first().path().to_string(), "_['users'][0]['name']");
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> at _['users'][0]['name'] must have at least 5 elements, but it has 2 elements"
    );
}

#[test]
fn test_empty_string_validation() {
    let schema = Schema::string().min_len(1);

    let result = schema.validate(&json!(""), &ValuePath::root());
    assert!(result.is_failure());

    // Empty string with no constraints should pass
    let schema = Schema::string();
    let result = schema.validate(&json!(""), &ValuePath::root());
    assert!(result.is_success());
}

#[test]
fn test_unicode_character_counting() {
    // Unicode strings should count characters (Unicode scalar values), not bytes
    let schema = Schema::string().min_len(3).max_len(5);

    // "日本語" is 3 characters (9 bytes)
    let result = schema.validate(&json!("日本語"), &ValuePath::root());
    assert!(result.is_success());

    // "🎉🎊" is 2 characters (8 bytes) - should fail min_len(3)
    let result = schema.validate(&json!("🎉🎊"), &ValuePath::root());
    assert!(result.is_failure());

    // "日本語です" is 5 characters - should pass max_len(5)
    let result = schema.validate(&json!("日本語です"), &ValuePath::root());
    assert!(result.is_success());

    // "日本語ですね" is 6 characters - should fail max_len(5)
    let result = schema.validate(&json!("日本語ですね"), &ValuePath::root());
    assert!(result.is_failure());
}

#[test]
fn test_reported_length_counts_chars() {
    let schema = Schema::string().max_len(1);

    let errors = unwrap_failure(schema.validate(&json!("日本語"), &ValuePath::root()));
    assert_eq!(
        errors.first().to_string(),
        "Value <class 'str'> must have at most 1 element, but it has 3 elements"
    );
}

#[test]
fn test_display_identifier() {
    assert_eq!(Schema::string().to_string(), "schema.str");
    assert_eq!(Schema::string().equal_to("banana").to_string(), "schema.str('banana')");
    assert_eq!(
        Schema::string().min_len(3).max_len(20).to_string(),
        "schema.str.min_len(3).max_len(20)"
    );
}

#[test]
fn test_complex_validation_scenario() {
    // Username: 3-20 characters, alphanumeric only
    let schema = Schema::string()
        .min_len(3)
        .max_len(20)
        .pattern(r"^[a-zA-Z0-9]+$")
        .unwrap();

    // Valid username
    let result = schema.validate(&json!("john123"), &ValuePath::root());
    assert!(result.is_success());

    // Invalid: too short and contains special char
    let result = schema.validate(&json!("a@"), &ValuePath::root());
    let errors = unwrap_failure(result);
    // Should have both errors
    assert_eq!(errors.len(), 2);
}

#[allow(dead_code)]
fn assert_errors_contain(errors: &ValidationErrors, messages: &[&str]) {
    for msg in messages {
        assert!(
            errors.iter().any(|e| e.to_string().contains(msg)),
            "Expected error containing '{}' but not found in {:?}",
            msg,
            errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
        );
    }
}
