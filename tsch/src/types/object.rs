use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::descriptor::{modified, Descriptor, Metadata, Node, Schema, Sealed};
use crate::document::JsonSchema;
use crate::error::ValidationError;
use crate::path::Path;
use crate::validation::report;

/// A JSON object with named, ordered properties.
///
/// Declaration order drives both emission and validation order. A property is
/// required unless its descriptor is optional. Undeclared properties in the
/// input are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    metadata: Metadata,
    shape: IndexMap<String, Arc<Schema>>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self {
            metadata: Metadata::new(),
            shape: IndexMap::new(),
        }
    }

    /// Replaces the whole shape.
    pub fn shape<I, K, S>(&self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<Schema>,
    {
        let shape: IndexMap<String, Arc<Schema>> = properties
            .into_iter()
            .map(|(key, schema)| (key.into(), Arc::new(schema.into())))
            .collect();
        modified(self, |clone| clone.shape = shape)
    }

    /// Adds one property. Re-declaring a key replaces its descriptor but keeps
    /// its position.
    pub fn property(&self, key: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let key = key.into();
        let schema = Arc::new(schema.into());
        modified(self, |clone| {
            clone.shape.insert(key, schema);
        })
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.shape
            .iter()
            .map(|(key, schema)| (key.as_str(), schema.as_ref()))
    }

    pub fn get(&self, key: &str) -> Option<&Schema> {
        self.shape.get(key).map(Arc::as_ref)
    }

    /// Keys whose descriptor is not optional, in declaration order.
    pub fn required_keys(&self) -> Vec<String> {
        self.shape
            .iter()
            .filter(|(_, schema)| !schema.is_optional())
            .map(|(key, _)| key.clone())
            .collect()
    }
}

impl Node for ObjectSchema {
    fn type_tag(&self) -> String {
        "object".to_string()
    }

    fn type_name(&self) -> String {
        "object".to_string()
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn is_correct_type(&self, input: Option<&Value>) -> bool {
        matches!(input, Some(Value::Object(_)))
    }

    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Object(map) = input else {
            return;
        };

        for (key, schema) in &self.shape {
            let property_path = path.join(key.as_str());
            match map.get(key) {
                Some(value) => schema.validate_at(&property_path, Some(value), errors),
                None if !schema.is_optional() => report(
                    errors,
                    &property_path,
                    format!(
                        "Property {} of type {} is required.",
                        key,
                        schema.type_name()
                    ),
                ),
                None => {}
            }
        }
    }

    fn to_json_schema(&self) -> JsonSchema {
        let mut schema = self.base_json_schema();
        schema.required = Some(self.required_keys());
        schema.properties = Some(
            self.shape
                .iter()
                .map(|(key, property)| (key.clone(), property.to_json_schema()))
                .collect(),
        );
        schema
    }
}

impl Sealed for ObjectSchema {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Descriptor for ObjectSchema {}
