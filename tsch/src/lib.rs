//! # tsch
//!
//! Immutable schema descriptors for JSON data. A descriptor does two things:
//! it emits a JSON-Schema document describing itself, and it validates JSON
//! values, reporting every violation with the path where it occurred.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tsch::prelude::*;
//!
//! let person = tsch::object()
//!     .title("Person")
//!     .property("name", tsch::string().min_length(1))
//!     .property("age", tsch::number().integer().min(0).optional())
//!     .property("pets", tsch::array(tsch::string()).unique());
//!
//! let emitted = person.to_json_schema().to_value().unwrap();
//! assert_eq!(emitted["required"], json!(["name", "pets"]));
//! assert_eq!(emitted["properties"]["age"], json!({ "type": "integer", "minimum": 0 }));
//!
//! let result = person.validate(&json!({ "name": "Ada", "pets": ["cat", "cat"] }));
//! assert_eq!(result.errors()[0].to_string(), "pets: All values have to be unique.");
//! ```
//!
//! ## Descriptors
//!
//! | Factory | Emits | Accepts |
//! |---------|-------|---------|
//! | [`string()`] | `"type": "string"` | JSON strings |
//! | [`number()`] | `"type": "number"` (`"integer"` after `.integer()`) | JSON numbers |
//! | [`boolean()`] | `"type": "boolean"` | `true` / `false` |
//! | [`object()`] | `"type": "object"` with `properties` and `required` | JSON objects |
//! | [`array()`] | `"type": "array"` with `items` | JSON arrays |
//!
//! Any two descriptors combine with [`Descriptor::union`].
//! [`Descriptor::optional`] and [`Descriptor::nullable`] are unions with the
//! `undefined` and `null` markers.
//!
//! ## Builders never mutate
//!
//! Every builder method takes `&self` and returns a modified copy, so a
//! descriptor can be shared and specialised freely:
//!
//! ```rust
//! use tsch::prelude::*;
//!
//! let name = tsch::string().min_length(1);
//! let first = name.title("First name");
//! let last = name.title("Last name");
//!
//! assert!(name.metadata().title.is_none());
//! assert_ne!(first, last);
//! ```
//!
//! ## Exporting documents
//!
//! ```rust
//! use tsch::export::{generate_document, ExportConfig};
//!
//! let config = ExportConfig::new().with_id("https://example.com/flag.json");
//! let document = generate_document(&tsch::boolean(), &config).unwrap();
//! assert!(document.contains("\"$id\": \"https://example.com/flag.json\""));
//! ```

pub mod descriptor;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod path;
pub mod types;
pub mod validation;

pub use descriptor::{Descriptor, Metadata, Node, Schema};
pub use document::{JsonSchema, SchemaType};
pub use error::{SchemaError, SchemaResult, ValidationError, ValidationErrors};
pub use export::ExportConfig;
pub use format::{ArrayFormat, StringFormat};
pub use path::Path;
pub use types::{
    ArraySchema, BooleanSchema, NullSchema, NumberSchema, ObjectSchema, StringSchema,
    UndefinedSchema, UnionSchema,
};
pub use validation::ValidationResult;

/// Everything needed to build and use descriptors.
pub mod prelude {
    pub use crate::descriptor::{Descriptor, Node, Schema};
    pub use crate::types::{
        ArraySchema, BooleanSchema, NumberSchema, ObjectSchema, StringSchema, UnionSchema,
    };
    pub use crate::{array, boolean, number, object, string};
}

/// An unconstrained string descriptor.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// An unconstrained number descriptor.
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// An unconstrained boolean descriptor.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// An object descriptor with no properties yet.
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

/// An array descriptor whose elements must match `element`.
pub fn array(element: impl Into<Schema>) -> ArraySchema {
    ArraySchema::of(element)
}
