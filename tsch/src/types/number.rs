use serde_json::{Number, Value};

use crate::descriptor::{modified, Descriptor, Metadata, Node, Sealed};
use crate::document::{bound_number, JsonSchema};
use crate::error::ValidationError;
use crate::path::Path;
use crate::validation::report;

/// A JSON number, optionally restricted to integers and inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    metadata: Metadata,
    integer: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self {
            metadata: Metadata::new(),
            integer: false,
            min: None,
            max: None,
        }
    }

    /// Only accept whole numbers. The emitted `type` becomes `"integer"`.
    pub fn integer(&self) -> Self {
        modified(self, |clone| clone.integer = true)
    }

    pub fn min(&self, min: impl Into<f64>) -> Self {
        let min = min.into();
        modified(self, |clone| clone.min = Some(min))
    }

    pub fn max(&self, max: impl Into<f64>) -> Self {
        let max = max.into();
        modified(self, |clone| clone.max = Some(max))
    }

    pub fn is_integer(&self) -> bool {
        self.integer
    }
}

fn is_whole(number: &Number) -> bool {
    number.is_i64()
        || number.is_u64()
        || number.as_f64().is_some_and(|value| value.fract() == 0.0)
}

impl Node for NumberSchema {
    fn type_tag(&self) -> String {
        "number".to_string()
    }

    fn type_name(&self) -> String {
        "number".to_string()
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn is_correct_type(&self, input: Option<&Value>) -> bool {
        matches!(input, Some(Value::Number(_)))
    }

    fn validate_correct_type(&self, path: &Path, input: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Number(number) = input else {
            return;
        };
        let Some(value) = number.as_f64() else {
            return;
        };

        if self.integer && !is_whole(number) {
            report(errors, path, "Value has to be an integer.");
        }
        if let Some(min) = self.min {
            if value < min {
                report(errors, path, format!("Value has to be at least {min}."));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                report(errors, path, format!("Value has to be at most {max}."));
            }
        }
    }

    fn to_json_schema(&self) -> JsonSchema {
        let mut schema = self.base_json_schema();
        if self.integer {
            schema.schema_type = Some("integer".into());
        }
        schema.minimum = self.min.and_then(bound_number);
        schema.maximum = self.max.and_then(bound_number);
        schema
    }
}

impl Sealed for NumberSchema {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Descriptor for NumberSchema {}
