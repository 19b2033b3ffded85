//! Constraint-free leaves: booleans and the synthetic `null`/`undefined`
//! markers used by `nullable()` and `optional()`.

use serde_json::Value;

use crate::descriptor::{Descriptor, Metadata, Node, Sealed};
use crate::document::JsonSchema;
use crate::error::ValidationError;
use crate::path::Path;

macro_rules! leaf_schema {
    ($(#[$doc:meta])* $name:ident, $tag:literal, |$input:ident| $accepts:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            metadata: Metadata,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    metadata: Metadata::new(),
                }
            }
        }

        impl Node for $name {
            fn type_tag(&self) -> String {
                $tag.to_string()
            }

            fn type_name(&self) -> String {
                $tag.to_string()
            }

            fn metadata(&self) -> &Metadata {
                &self.metadata
            }

            fn is_correct_type(&self, $input: Option<&Value>) -> bool {
                $accepts
            }

            fn validate_correct_type(&self, _path: &Path, _input: &Value, _errors: &mut Vec<ValidationError>) {}

            fn to_json_schema(&self) -> JsonSchema {
                self.base_json_schema()
            }
        }

        impl Sealed for $name {
            fn metadata_mut(&mut self) -> &mut Metadata {
                &mut self.metadata
            }
        }

        impl Descriptor for $name {}
    };
}

leaf_schema!(
    /// `true` or `false`.
    BooleanSchema,
    "boolean",
    |input| matches!(input, Some(Value::Bool(_)))
);

leaf_schema!(
    /// The JSON `null` value. Only reachable through `nullable()`.
    NullSchema,
    "null",
    |input| matches!(input, Some(Value::Null))
);

leaf_schema!(
    /// An absent value. Only reachable through `optional()`.
    UndefinedSchema,
    "undefined",
    |input| input.is_none()
);
