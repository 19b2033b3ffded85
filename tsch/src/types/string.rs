use serde_json::Value;

use crate::descriptor::{modified, Descriptor, Metadata, Node, Sealed};
use crate::document::JsonSchema;
use crate::error::ValidationError;
use crate::format::StringFormat;
use crate::path::Path;
use crate::validation::report;

/// A JSON string with optional enumeration, length bounds and format.
///
/// Lengths count Unicode scalar values. No relation between `min_length` and
/// `max_length` is enforced; an inverted pair simply rejects every value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    metadata: Metadata,
    format: Option<StringFormat>,
    enumeration: Option<Vec<String>>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self {
            metadata: Metadata::new(),
            format: None,
            enumeration: None,
            min_length: None,
            max_length: None,
        }
    }

    pub fn min_length(&self, min: usize) -> Self {
        modified(self, |clone| clone.min_length = Some(min))
    }

    pub fn max_length(&self, max: usize) -> Self {
        modified(self, |clone| clone.max_length = Some(max))
    }

    /// Restricts the value to one of `values`, in the given order.
    pub fn enumeration<I, S>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        modified(self, |clone| clone.enumeration = Some(values))
    }

    pub fn format(&self, format: StringFormat) -> Self {
        modified(self, |clone| clone.format = Some(format))
    }

    pub fn color(&self) -> Self {
        self.format(StringFormat::Color)
    }

    pub fn date(&self) -> Self {
        self.format(StringFormat::Date)
    }

    pub fn email(&self) -> Self {
        self.format(StringFormat::Email)
    }

    pub fn password(&self) -> Self {
        self.format(StringFormat::Password)
    }

    pub fn textarea(&self) -> Self {
        self.format(StringFormat::Textarea)
    }

    pub fn url(&self) -> Self {
        self.format(StringFormat::Url)
    }

    pub fn string_format(&self) -> Option<StringFormat> {
        self.format
    }

    pub fn allowed_values(&self) -> Option<&[String]> {
        self.enumeration.as_deref()
    }
}

impl Node for StringSchema {
    fn type_tag(&self) -> String {
        "string".to_string()
    }

    fn type_name(&self) -> String {
        "string".to_string()
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn is_correct_type(&self, input: Option<&Value>) -> bool {
        matches!(input, Some(Value::String(_)))
    }

    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>) {
        let Value::String(value) = input else {
            return;
        };
        let length = value.chars().count();

        if let Some(allowed) = &self.enumeration {
            if !allowed.iter().any(|candidate| candidate == value) {
                report(
                    errors,
                    path,
                    format!("Value has to be one of: {}.", allowed.join(", ")),
                );
            }
        }
        if let Some(min) = self.min_length {
            if length < min {
                report(
                    errors,
                    path,
                    format!("Value has to be at least {min} characters long."),
                );
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                report(
                    errors,
                    path,
                    format!("Value has to be at most {max} characters long."),
                );
            }
        }
        if let Some(format) = self.format {
            if !format.accepts(value) {
                report(errors, path, format.error_message());
            }
        }
    }

    fn to_json_schema(&self) -> JsonSchema {
        let mut schema = self.base_json_schema();
        schema.format = self.format.map(|format| format.as_str().to_string());
        schema.enumeration = self.enumeration.clone();
        schema.min_length = self.min_length;
        schema.max_length = self.max_length;
        schema
    }
}

impl Sealed for StringSchema {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Descriptor for StringSchema {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(schema: &StringSchema, input: Value) -> Vec<String> {
        schema
            .validate(&input)
            .errors()
            .iter()
            .map(|error| error.message().to_string())
            .collect()
    }

    #[test]
    fn test_min_length_boundary() {
        let schema = StringSchema::new().min_length(4);
        assert!(!schema.validate(&json!("abc")).is_valid());
        assert!(schema.validate(&json!("abcd")).is_valid());
    }

    #[test]
    fn test_max_length_counts_characters() {
        let schema = StringSchema::new().max_length(3);
        assert!(schema.validate(&json!("äöü")).is_valid());
        assert_eq!(
            messages(&schema, json!("abcd")),
            vec!["Value has to be at most 3 characters long."]
        );
    }

    #[test]
    fn test_enumeration_membership() {
        let schema = StringSchema::new().enumeration(["male", "female", "other"]);
        assert!(schema.validate(&json!("other")).is_valid());
        assert_eq!(
            messages(&schema, json!("unknown")),
            vec!["Value has to be one of: male, female, other."]
        );
    }

    #[test]
    fn test_all_checks_run_independently() {
        let schema = StringSchema::new()
            .enumeration(["#ffffff"])
            .min_length(5)
            .color();
        assert_eq!(
            messages(&schema, json!("red")),
            vec![
                "Value has to be one of: #ffffff.",
                "Value has to be at least 5 characters long.",
                "Value has to be a valid color.",
            ]
        );
    }

    #[test]
    fn test_inverted_lengths_reject_everything() {
        let schema = StringSchema::new().min_length(5).max_length(2);
        assert_eq!(messages(&schema, json!("abc")).len(), 2);
    }

    #[test]
    fn test_type_mismatch_skips_constraints() {
        let schema = StringSchema::new().min_length(4).email();
        assert_eq!(
            messages(&schema, json!(42)),
            vec!["Value has to be of type string"]
        );
    }

    #[test]
    fn test_presentation_formats_only_emit() {
        let schema = StringSchema::new().password();
        assert!(schema.validate(&json!("")).is_valid());
        assert_eq!(schema.to_json_schema().format.as_deref(), Some("password"));
    }

    #[test]
    fn test_emission() {
        let schema = StringSchema::new()
            .description("First and Last Name")
            .min_length(4)
            .default("Jeremy Dorn");
        assert_eq!(
            schema.to_json_schema().to_value().unwrap(),
            json!({
                "type": "string",
                "description": "First and Last Name",
                "default": "Jeremy Dorn",
                "minLength": 4
            })
        );
    }

    #[test]
    fn test_accessors() {
        let schema = StringSchema::new().url().enumeration(["https://a.io"]);
        assert_eq!(schema.string_format(), Some(StringFormat::Url));
        assert_eq!(schema.allowed_values(), Some(&["https://a.io".to_string()][..]));
    }
}
