//! Person Form Example
//!
//! Builds a person form, prints its JSON-Schema document and validates two
//! instances against it.
//!
//! Run with: `RUST_LOG=tsch=trace cargo run --example person`

use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsch::export::{generate_document, ExportConfig};
use tsch::prelude::*;

fn person() -> ObjectSchema {
    let location = object()
        .shape([
            ("city", string().default("San Francisco")),
            ("state", string().default("CA")),
        ])
        .title("Location");

    let pet = object()
        .shape([
            (
                "type",
                string()
                    .enumeration(["cat", "dog", "bird", "reptile", "other"])
                    .default("dog"),
            ),
            ("name", string()),
        ])
        .title("Pet");

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
        .property("location", location)
        .property(
            "pets",
            array(pet)
                .unique()
                .table()
                .default(json!([{ "type": "dog", "name": "Walter" }]))
                .min_elements(1)
                .max_elements(1),
        )
}

fn main() -> Result<(), tsch::SchemaError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let schema = person();

    println!("=== Person schema ===\n");
    println!("{}", generate_document(&schema, &ExportConfig::default())?);

    println!("\n=== Valid instance ===\n");
    let valid = json!({
        "pets": [{ "type": "reptile", "name": "Johny" }],
        "favorite_color": "#fff",
        "name": "John Doe",
        "age": 51,
        "gender": null,
        "date": "2022/12/22",
        "location": { "city": "", "state": "" }
    });
    let result = schema.validate(&valid);
    println!("valid: {}", result.is_valid());

    println!("\n=== Invalid instance ===\n");
    let invalid = json!({
        "name": "Joe",
        "age": 12.5,
        "favorite_color": "orange",
        "gender": "unknown",
        "date": 10,
        "location": { "city": "Paris" },
        "pets": [{ "type": "dog", "name": "Rex" }, { "type": "dog", "name": "Rex" }]
    });
    let result = schema.validate(&invalid);
    println!("valid: {}", result.is_valid());
    for error in result.errors() {
        println!("  {error}");
    }

    Ok(())
}
