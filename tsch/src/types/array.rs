use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{Number, Value};

use crate::descriptor::{modified, Descriptor, Metadata, Node, Schema, Sealed};
use crate::document::JsonSchema;
use crate::error::ValidationError;
use crate::format::ArrayFormat;
use crate::path::Path;
use crate::validation::report;

/// A JSON array whose elements all match one descriptor.
///
/// An array built without an element descriptor is representable but
/// malformed: it emits no `items` and fails every validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    metadata: Metadata,
    element: Option<Arc<Schema>>,
    format: Option<ArrayFormat>,
    unique: bool,
    min_elements: Option<usize>,
    max_elements: Option<usize>,
}

impl ArraySchema {
    /// An array without an element descriptor; see [`element`](Self::element).
    pub fn new() -> Self {
        Self {
            metadata: Metadata::new(),
            element: None,
            format: None,
            unique: false,
            min_elements: None,
            max_elements: None,
        }
    }

    pub fn of(element: impl Into<Schema>) -> Self {
        Self::new().element(element)
    }

    pub fn element(&self, element: impl Into<Schema>) -> Self {
        let element = Arc::new(element.into());
        modified(self, |clone| clone.element = Some(element))
    }

    /// Reject arrays holding the same value twice.
    pub fn unique(&self) -> Self {
        modified(self, |clone| clone.unique = true)
    }

    /// Render as a table in form generators.
    pub fn table(&self) -> Self {
        modified(self, |clone| clone.format = Some(ArrayFormat::Table))
    }

    pub fn min_elements(&self, min: usize) -> Self {
        modified(self, |clone| clone.min_elements = Some(min))
    }

    pub fn max_elements(&self, max: usize) -> Self {
        modified(self, |clone| clone.max_elements = Some(max))
    }

    pub fn element_schema(&self) -> Option<&Schema> {
        self.element.as_deref()
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }
}

/// Serialization with object keys sorted, so equal values compare equal
/// regardless of key order.
fn canonical(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let body: Vec<String> = entries
                .into_iter()
                .map(|(key, value)| format!("{}:{}", Value::String(key.clone()), canonical(value)))
                .collect();
            format!("{{{}}}", body.join(","))
        }
        Value::Array(values) => {
            let body: Vec<String> = values.iter().map(canonical).collect();
            format!("[{}]", body.join(","))
        }
        Value::Number(number) => canonical_number(number),
        scalar => scalar.to_string(),
    }
}

/// Whole numbers render as integers, so `1` and `1.0` share a key.
fn canonical_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            (value as i64).to_string()
        }
        Some(value) => value.to_string(),
        None => number.to_string(),
    }
}

impl Node for ArraySchema {
    fn type_tag(&self) -> String {
        "array".to_string()
    }

    fn type_name(&self) -> String {
        "array".to_string()
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn is_correct_type(&self, input: Option<&Value>) -> bool {
        matches!(input, Some(Value::Array(_)))
    }

    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Array(values) = input else {
            return;
        };

        if let Some(min) = self.min_elements {
            if values.len() < min {
                report(
                    errors,
                    path,
                    format!("Array has to contain at least {min} elements."),
                );
            }
        }
        if let Some(max) = self.max_elements {
            if values.len() > max {
                report(
                    errors,
                    path,
                    format!("Array has to contain at most {max} elements."),
                );
            }
        }

        let Some(element) = &self.element else {
            report(errors, path, "array element type is undefined");
            return;
        };

        let mut seen = HashSet::new();
        let mut duplicate_reported = false;
        for (index, value) in values.iter().enumerate() {
            element.validate_at(&path.join(index.to_string()), Some(value), errors);

            if self.unique && !seen.insert(canonical(value)) && !duplicate_reported {
                report(errors, path, "All values have to be unique.");
                duplicate_reported = true;
            }
        }
    }

    fn to_json_schema(&self) -> JsonSchema {
        let mut schema = self.base_json_schema();
        schema.items = self
            .element
            .as_ref()
            .map(|element| Box::new(element.to_json_schema()));
        schema.format = self.format.map(|format| format.as_str().to_string());
        if self.unique {
            schema.unique_items = Some(true);
        }
        schema.min_items = self.min_elements;
        schema.max_items = self.max_elements;
        schema
    }
}

impl Sealed for ArraySchema {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Descriptor for ArraySchema {}
