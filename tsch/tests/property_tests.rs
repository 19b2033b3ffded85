//! Property-based tests for descriptors.
//!
//! Properties tested:
//! - Clones behave identically in emission and validation
//! - Builder calls never alter the receiver
//! - Emission is idempotent
//! - `min_length` accepts exactly the strings at or above the bound
//! - Uniqueness fails exactly when the array holds a duplicate

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Value};
use tsch::prelude::*;

// =============================================================================
// Generators for property tests
// =============================================================================

/// Generate a string descriptor with arbitrary length bounds.
fn arb_string_schema() -> impl Strategy<Value = StringSchema> {
    (proptest::option::of(0usize..8), proptest::option::of(0usize..8)).prop_map(|(min, max)| {
        let mut schema = string();
        if let Some(min) = min {
            schema = schema.min_length(min);
        }
        if let Some(max) = max {
            schema = schema.max_length(max);
        }
        schema
    })
}

/// Generate a number descriptor with arbitrary bounds and integer flag.
fn arb_number_schema() -> impl Strategy<Value = NumberSchema> {
    (any::<bool>(), proptest::option::of(-100i32..100), proptest::option::of(-100i32..100)).prop_map(
        |(integer, min, max)| {
            let mut schema = number();
            if integer {
                schema = schema.integer();
            }
            if let Some(min) = min {
                schema = schema.min(min);
            }
            if let Some(max) = max {
                schema = schema.max(max);
            }
            schema
        },
    )
}

/// Generate an object with a string and a number property, either optional.
fn arb_object_schema() -> impl Strategy<Value = ObjectSchema> {
    (arb_string_schema(), arb_number_schema(), any::<bool>()).prop_map(|(text, count, optional)| {
        let count: Schema = if optional {
            count.optional().into()
        } else {
            count.into()
        };
        object().property("text", text).property("count", count)
    })
}

/// Generate a JSON value that may or may not match the object generator.
fn arb_input() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[a-z]{0,10}"),
        proptest::option::of(-200.0f64..200.0),
    )
        .prop_map(|(text, count)| {
            let mut input = json!({});
            if let Some(text) = text {
                input["text"] = json!(text);
            }
            if let Some(count) = count {
                input["count"] = json!(count);
            }
            input
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_is_equivalent(schema in arb_object_schema(), input in arb_input()) {
        let copy = schema.clone();
        prop_assert_eq!(copy.to_json_schema(), schema.to_json_schema());
        prop_assert_eq!(copy.validate(&input), schema.validate(&input));
    }

    #[test]
    fn prop_builders_leave_receiver_untouched(schema in arb_object_schema(), title in "[A-Za-z ]{1,12}") {
        let before = schema.to_json_schema();
        let _titled = schema.title(title.clone()).description(title);
        let _extended = schema.property("flag", boolean());
        prop_assert_eq!(schema.to_json_schema(), before);
    }

    #[test]
    fn prop_emission_is_idempotent(schema in arb_object_schema()) {
        let first = schema.to_json_schema().to_value().unwrap();
        let second = schema.to_json_schema().to_value().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_min_length_boundary(min in 0usize..16, text in "[a-z]{0,16}") {
        let result = string().min_length(min).validate(&json!(text));
        prop_assert_eq!(result.is_valid(), text.chars().count() >= min);
    }

    #[test]
    fn prop_uniqueness(values in proptest::collection::vec(0i64..5, 0..8)) {
        let result = array(number()).unique().validate(&json!(values));
        let distinct: HashSet<_> = values.iter().collect();
        let has_duplicate = distinct.len() < values.len();

        prop_assert_eq!(result.is_valid(), !has_duplicate);
        prop_assert_eq!(result.errors().len(), usize::from(has_duplicate));
    }

    #[test]
    fn prop_errors_are_valid_flag(schema in arb_object_schema(), input in arb_input()) {
        let result = schema.validate(&input);
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }
}
