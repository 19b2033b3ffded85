//! Export utilities for writing standalone JSON-Schema documents.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::descriptor::Node;
use crate::document::JsonSchema;
use crate::error::SchemaResult;

/// Dialect URI written to `$schema` by default.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Configuration for document export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Dialect URI for the `$schema` key; omitted when `None`.
    pub schema_uri: Option<String>,

    /// Value of the `$id` key; omitted when `None`.
    pub id: Option<String>,

    /// Whether to pretty-print the output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            schema_uri: Some(DRAFT_07.to_string()),
            id: None,
            pretty: true,
        }
    }
}

impl ExportConfig {
    /// Create a new export configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialect URI.
    pub fn with_schema_uri(mut self, uri: impl Into<String>) -> Self {
        self.schema_uri = Some(uri.into());
        self
    }

    /// Leave out the `$schema` key.
    pub fn without_schema_uri(mut self) -> Self {
        self.schema_uri = None;
        self
    }

    /// Set the document `$id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set whether to pretty-print.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// A document with its header keys ahead of the schema body.
#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    schema_uri: Option<&'a str>,

    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,

    #[serde(flatten)]
    body: JsonSchema,
}

impl<'a> Document<'a> {
    fn new<N: Node + ?Sized>(schema: &N, config: &'a ExportConfig) -> Self {
        Self {
            schema_uri: config.schema_uri.as_deref(),
            id: config.id.as_deref(),
            body: schema.to_json_schema(),
        }
    }
}

/// Build the document of `schema` as a JSON value, with the `$schema` and
/// `$id` header keys first.
pub fn document_value<N: Node + ?Sized>(schema: &N, config: &ExportConfig) -> SchemaResult<Value> {
    Ok(serde_json::to_value(Document::new(schema, config))?)
}

/// Generate a serialized JSON-Schema document for `schema`.
pub fn generate_document<N: Node + ?Sized>(schema: &N, config: &ExportConfig) -> SchemaResult<String> {
    let document = Document::new(schema, config);
    let output = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    debug!(
        schema_uri = ?config.schema_uri,
        bytes = output.len(),
        "Generated schema document"
    );
    Ok(output)
}
