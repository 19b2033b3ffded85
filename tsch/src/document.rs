//! The emitted JSON-Schema document.
//!
//! [`JsonSchema`] is the typed form of the document every descriptor emits.
//! Every key is optional and serialized only when present, so an absent key
//! means "unconstrained". The union merge rules also live here because they
//! operate purely on documents.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::descriptor::Metadata;

/// Type name dropped when two documents are merged.
pub(crate) const UNDEFINED: &str = "undefined";

/// The `type` key: a single type name or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    pub fn names(&self) -> &[String] {
        match self {
            SchemaType::Single(name) => std::slice::from_ref(name),
            SchemaType::Multiple(names) => names,
        }
    }

    /// Flattens both sides into one ordered list, dropping the `undefined`
    /// marker, empty names and duplicates.
    ///
    /// Returns `None` when nothing is left, a scalar for one name, and a list
    /// otherwise.
    pub fn combine(first: Option<&SchemaType>, second: Option<&SchemaType>) -> Option<SchemaType> {
        let mut names: Vec<String> = Vec::new();
        for name in first
            .into_iter()
            .chain(second)
            .flat_map(|schema_type| schema_type.names())
        {
            if name.is_empty() || name == UNDEFINED || names.contains(name) {
                continue;
            }
            names.push(name.clone());
        }

        match names.len() {
            0 => None,
            1 => names.pop().map(SchemaType::Single),
            _ => Some(SchemaType::Multiple(names)),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        SchemaType::Single(name.to_string())
    }
}

/// A JSON-Schema document describing one descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, JsonSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,
}

impl JsonSchema {
    /// A document carrying only `type`.
    pub fn of_type(name: &str) -> Self {
        Self {
            schema_type: Some(name.into()),
            ..Self::default()
        }
    }

    /// Writes every metadata field that is set, replacing what was there.
    /// Empty titles and descriptions count as unset.
    pub(crate) fn apply_metadata(&mut self, metadata: &Metadata) {
        if let Some(title) = metadata.title.as_ref().filter(|title| !title.is_empty()) {
            self.title = Some(title.clone());
        }
        if let Some(description) = metadata
            .description
            .as_ref()
            .filter(|description| !description.is_empty())
        {
            self.description = Some(description.clone());
        }
        if let Some(default) = &metadata.default {
            self.default = Some(default.clone());
        }
        if !metadata.examples.is_empty() {
            self.examples = Some(metadata.examples.clone());
        }
    }

    /// Merges the documents of a union's two branches.
    ///
    /// Keys are overridden by `second` on collision, except `type`, which
    /// collects both sides (see [`SchemaType::combine`]). When both sides are
    /// object documents, their `properties` are merged and `required` keeps
    /// only the keys both sides require.
    pub fn merge(first: JsonSchema, second: JsonSchema) -> JsonSchema {
        let schema_type = SchemaType::combine(first.schema_type.as_ref(), second.schema_type.as_ref());

        let object_parts = match (&first.properties, &second.properties) {
            (Some(first_properties), Some(second_properties)) => {
                let mut properties = first_properties.clone();
                for (key, property) in second_properties {
                    properties.insert(key.clone(), property.clone());
                }
                let required = intersect_required(first.required.as_ref(), second.required.as_ref());
                Some((properties, required))
            }
            _ => None,
        };

        let mut combined = overlay(first, second);
        combined.schema_type = schema_type;
        if let Some((properties, required)) = object_parts {
            combined.properties = Some(properties);
            combined.required = Some(required);
        }
        combined
    }

    /// Serializes the document into a JSON value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Field-wise override of `base` by `top`.
fn overlay(base: JsonSchema, top: JsonSchema) -> JsonSchema {
    JsonSchema {
        schema_type: top.schema_type.or(base.schema_type),
        properties: top.properties.or(base.properties),
        required: top.required.or(base.required),
        title: top.title.or(base.title),
        description: top.description.or(base.description),
        default: top.default.or(base.default),
        examples: top.examples.or(base.examples),
        minimum: top.minimum.or(base.minimum),
        maximum: top.maximum.or(base.maximum),
        min_length: top.min_length.or(base.min_length),
        max_length: top.max_length.or(base.max_length),
        format: top.format.or(base.format),
        enumeration: top.enumeration.or(base.enumeration),
        unique_items: top.unique_items.or(base.unique_items),
        min_items: top.min_items.or(base.min_items),
        max_items: top.max_items.or(base.max_items),
        items: top.items.or(base.items),
    }
}

fn intersect_required(first: Option<&Vec<String>>, second: Option<&Vec<String>>) -> Vec<String> {
    match (first, second) {
        (Some(first), Some(second)) => first
            .iter()
            .filter(|key| second.contains(key))
            .cloned()
            .collect(),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => Vec::new(),
    }
}

/// JSON number for a bound, integral when the value has no fractional part.
pub(crate) fn bound_number(value: f64) -> Option<Number> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
