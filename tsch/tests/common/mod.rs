//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use tsch::prelude::*;

/// The person form used across the integration tests.
pub fn person() -> ObjectSchema {
    object()
        .title("Person")
        .property(
            "name",
            string()
                .description("First and Last Name")
                .min_length(4)
                .default("Jeremy Dorn"),
        )
        .property(
            "age",
            number()
                .integer()
                .default(25)
                .min(18)
                .max(99)
                .optional()
                .title("Age"),
        )
        .property(
            "favorite_color",
            string()
                .color()
                .title("favorite color")
                .default("#ffa500")
                .examples(["#fff", "#00ff00"]),
        )
        .property(
            "gender",
            string().enumeration(["male", "female", "other"]).nullable(),
        )
        .property(
            "date",
            string()
                .date()
                .enumeration(["2022/12/22", "2021/11/11"])
                .union(number().min(50))
                .union(number().min(25)),
        )
        .property(
            "location",
            object()
                .shape([
                    ("city", string().default("San Francisco")),
                    ("state", string().default("CA")),
                ])
                .title("Location"),
        )
        .property(
            "pets",
            array(
                object()
                    .shape([
                        (
                            "type",
                            string()
                                .enumeration(["cat", "dog", "bird", "reptile", "other"])
                                .default("dog"),
                        ),
                        ("name", string()),
                    ])
                    .title("Pet"),
            )
            .unique()
            .table()
            .default(json!([{ "type": "dog", "name": "Walter" }]))
            .min_elements(1)
            .max_elements(1),
        )
}

/// A value that satisfies [`person`].
pub fn valid_person() -> Value {
    json!({
        "pets": [{ "type": "reptile", "name": "Johny" }],
        "favorite_color": "#fff",
        "name": "John Doe",
        "age": 51,
        "gender": null,
        "date": "2022/12/22",
        "location": { "city": "", "state": "" }
    })
}

/// Messages of a result, rendered as `path: message`.
pub fn messages(result: &tsch::ValidationResult) -> Vec<String> {
    result.errors().iter().map(ToString::to_string).collect()
}
