//! The descriptor contract.
//!
//! Every schema node implements two traits:
//!
//! - [`Node`]: what emission and validation need from a node, such as its
//!   type tag and name, the type check and the constraint checks.
//! - [`Descriptor`]: the fluent surface. Every builder call clones the
//!   descriptor, changes one field on the copy and returns it; the receiver is
//!   never altered.
//!
//! [`Schema`] closes the set of variants. Composite descriptors hold their
//! children as `Arc<Schema>`, so cloning a parent shares its children.
//!
//! ## Overview
//!
//! ```rust
//! use serde_json::json;
//! use tsch::prelude::*;
//!
//! let age = tsch::number().integer().min(18).max(99);
//! let adult = age.title("Age");
//!
//! assert!(age.metadata().title.is_none());
//! assert!(adult.validate(&json!(42)).is_valid());
//! assert_eq!(adult.validate(&json!(17.5)).errors().len(), 2);
//! ```

use serde_json::Value;

use crate::document::JsonSchema;
use crate::error::ValidationError;
use crate::path::Path;
use crate::types::{
    ArraySchema, BooleanSchema, NullSchema, NumberSchema, ObjectSchema, StringSchema,
    UndefinedSchema, UnionSchema,
};
use crate::validation::{report, ValidationResult};

/// Annotations shared by every descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub examples: Vec<Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.examples.push(example.into());
        self
    }
}

mod sealed {
    use super::Metadata;

    pub trait Sealed {
        fn metadata_mut(&mut self) -> &mut Metadata;
    }
}

pub(crate) use sealed::Sealed;

/// Capabilities every schema node provides to emission and validation.
pub trait Node {
    /// Identifier of the node kind, e.g. `"string"` or `"union_string_null"`.
    fn type_tag(&self) -> String;

    /// Name used in validation messages, e.g. `"string | null"` for a union.
    fn type_name(&self) -> String;

    fn metadata(&self) -> &Metadata;

    fn is_optional(&self) -> bool {
        false
    }

    fn is_nullable(&self) -> bool {
        false
    }

    /// Whether `input` has the runtime type this node describes. `None` stands
    /// for an absent value.
    fn is_correct_type(&self, input: Option<&Value>) -> bool;

    /// Constraint checks for an input that already passed
    /// [`is_correct_type`](Node::is_correct_type). Composite nodes recurse into
    /// their children from here.
    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>);

    /// Emits the JSON-Schema document for this node.
    fn to_json_schema(&self) -> JsonSchema;

    /// Type check, then constraint checks. A type mismatch reports a single
    /// error and skips the rest of the subtree.
    fn validate_at(&self, path: &Path, input: Option<&Value>, errors: &mut Vec<ValidationError>) {
        if !self.is_correct_type(input) {
            report(
                errors,
                path,
                format!("Value has to be of type {}", self.type_name()),
            );
            return;
        }
        if let Some(input) = input {
            self.validate_correct_type(path, input, errors);
        }
    }

    /// Document carrying `type` and whatever metadata is set.
    fn base_json_schema(&self) -> JsonSchema {
        let mut schema = JsonSchema::of_type(&self.type_tag());
        schema.apply_metadata(self.metadata());
        schema
    }
}

/// The fluent, clone-returning descriptor API.
pub trait Descriptor: Node + Clone + Into<Schema> + Sealed {
    fn title(&self, title: impl Into<String>) -> Self {
        modified(self, |clone| clone.metadata_mut().title = Some(title.into()))
    }

    fn description(&self, description: impl Into<String>) -> Self {
        modified(self, |clone| {
            clone.metadata_mut().description = Some(description.into())
        })
    }

    fn default(&self, value: impl Into<Value>) -> Self {
        modified(self, |clone| clone.metadata_mut().default = Some(value.into()))
    }

    fn examples<I, V>(&self, examples: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let examples: Vec<Value> = examples.into_iter().map(Into::into).collect();
        modified(self, |clone| clone.metadata_mut().examples = examples)
    }

    /// A union of this descriptor and `other`.
    fn union(&self, other: impl Into<Schema>) -> UnionSchema {
        UnionSchema::new(self.clone(), other)
    }

    /// This descriptor or an absent value.
    fn optional(&self) -> UnionSchema {
        self.union(UndefinedSchema::new())
    }

    /// This descriptor or `null`.
    fn nullable(&self) -> UnionSchema {
        self.union(NullSchema::new())
    }

    /// Validates a present value.
    fn validate(&self, input: &Value) -> ValidationResult {
        self.validate_input(Some(input))
    }

    /// Validates a value that may be absent altogether.
    fn validate_input(&self, input: Option<&Value>) -> ValidationResult {
        let mut errors = Vec::new();
        self.validate_at(&Path::root(), input, &mut errors);
        ValidationResult::from_errors(errors)
    }

    /// Converts into the closed [`Schema`] form without consuming `self`.
    fn to_schema(&self) -> Schema {
        self.clone().into()
    }
}

/// Copy of `value` with `change` applied.
pub(crate) fn modified<T: Clone>(value: &T, change: impl FnOnce(&mut T)) -> T {
    let mut clone = value.clone();
    change(&mut clone);
    clone
}

/// Any descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Null(NullSchema),
    Undefined(UndefinedSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Union(UnionSchema),
}

macro_rules! dispatch {
    ($self:expr, $node:ident => $body:expr) => {
        match $self {
            Schema::String($node) => $body,
            Schema::Number($node) => $body,
            Schema::Boolean($node) => $body,
            Schema::Null($node) => $body,
            Schema::Undefined($node) => $body,
            Schema::Object($node) => $body,
            Schema::Array($node) => $body,
            Schema::Union($node) => $body,
        }
    };
}

impl Node for Schema {
    fn type_tag(&self) -> String {
        dispatch!(self, node => node.type_tag())
    }

    fn type_name(&self) -> String {
        dispatch!(self, node => node.type_name())
    }

    fn metadata(&self) -> &Metadata {
        dispatch!(self, node => node.metadata())
    }

    fn is_optional(&self) -> bool {
        dispatch!(self, node => node.is_optional())
    }

    fn is_nullable(&self) -> bool {
        dispatch!(self, node => node.is_nullable())
    }

    fn is_correct_type(&self, input: Option<&Value>) -> bool {
        dispatch!(self, node => node.is_correct_type(input))
    }

    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>) {
        dispatch!(self, node => node.validate_correct_type(path, input, errors))
    }

    fn to_json_schema(&self) -> JsonSchema {
        dispatch!(self, node => node.to_json_schema())
    }
}

impl Sealed for Schema {
    fn metadata_mut(&mut self) -> &mut Metadata {
        dispatch!(self, node => node.metadata_mut())
    }
}

impl Descriptor for Schema {}

macro_rules! impl_into_schema {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Schema {
                fn from(node: $ty) -> Self {
                    Schema::$variant(node)
                }
            }
        )*
    };
}

impl_into_schema!(
    String => StringSchema,
    Number => NumberSchema,
    Boolean => BooleanSchema,
    Null => NullSchema,
    Undefined => UndefinedSchema,
    Object => ObjectSchema,
    Array => ArraySchema,
    Union => UnionSchema,
);
