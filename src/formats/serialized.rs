//! Serde-backed formats: JSON and YAML
//!
//! Nodes serialize with an internal `kind` tag; empty tag arguments are omitted.

use super::registry::{FormatError, Formatter};
use crate::ast::Outline;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(outline)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        serde_yaml::to_string(outline).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
