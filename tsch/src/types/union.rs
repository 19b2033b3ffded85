use std::sync::Arc;

use serde_json::Value;

use crate::descriptor::{Descriptor, Metadata, Node, Schema, Sealed};
use crate::document::{JsonSchema, UNDEFINED};
use crate::error::ValidationError;
use crate::path::Path;

const NULL: &str = "null";

/// A value matching either of two descriptors.
///
/// `optional()` and `nullable()` produce unions whose second branch is the
/// `undefined` or `null` marker. Both queries look through nested unions, so
/// `string().optional().nullable()` is both optional and nullable.
///
/// When a value has the right type for both branches, the errors of both
/// branches are reported. A non-empty error list therefore does not mean that
/// no branch matched.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    metadata: Metadata,
    first: Arc<Schema>,
    second: Arc<Schema>,
}

impl UnionSchema {
    pub fn new(first: impl Into<Schema>, second: impl Into<Schema>) -> Self {
        Self {
            metadata: Metadata::new(),
            first: Arc::new(first.into()),
            second: Arc::new(second.into()),
        }
    }

    pub fn first(&self) -> &Schema {
        &self.first
    }

    pub fn second(&self) -> &Schema {
        &self.second
    }

    fn branches(&self) -> [&Schema; 2] {
        [&*self.first, &*self.second]
    }

    fn branch_json_schema(branch: &Schema) -> JsonSchema {
        if branch.type_tag() == UNDEFINED {
            JsonSchema::default()
        } else {
            branch.to_json_schema()
        }
    }
}

impl Node for UnionSchema {
    /// `union_<first>_<second>`, derived from the branches on every call.
    fn type_tag(&self) -> String {
        format!("union_{}_{}", self.first.type_tag(), self.second.type_tag())
    }

    fn type_name(&self) -> String {
        format!("{} | {}", self.first.type_name(), self.second.type_name())
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn is_optional(&self) -> bool {
        self.branches()
            .iter()
            .any(|branch| branch.type_tag() == UNDEFINED || branch.is_optional())
    }

    fn is_nullable(&self) -> bool {
        self.branches()
            .iter()
            .any(|branch| branch.type_tag() == NULL || branch.is_nullable())
    }

    fn is_correct_type(&self, input: Option<&Value>) -> bool {
        self.branches()
            .iter()
            .any(|branch| branch.is_correct_type(input))
    }

    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>) {
        for branch in self.branches() {
            if branch.is_correct_type(Some(input)) {
                branch.validate_correct_type(path, input, errors);
            }
        }
    }

    fn to_json_schema(&self) -> JsonSchema {
        let mut combined = JsonSchema::merge(
            Self::branch_json_schema(&self.first),
            Self::branch_json_schema(&self.second),
        );
        combined.apply_metadata(&self.metadata);
        combined
    }
}

impl Sealed for UnionSchema {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Descriptor for UnionSchema {}
