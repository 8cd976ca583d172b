//! Output formats for a parsed outline
//!
//! The CLI picks one by `--format` name; `--list-formats` prints every
//! registered name with its description.

use crate::ast::Outline;
use std::collections::BTreeMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

pub trait Formatter: Send + Sync {
    /// Name used on the command line (`treeviz`, `sexp`, ...)
    fn name(&self) -> &str;

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Output formats keyed by name, listed in name order.
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Register a formatter under its own name, replacing any earlier one.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Find a formatter, so callers can reject a bad `--format` before parsing.
    pub fn lookup(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Render an outline in the named format
    pub fn serialize(&self, outline: &Outline, format: &str) -> Result<String, FormatError> {
        self.lookup(format)?.serialize(outline)
    }

    pub fn list_formats(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    /// `(name, description)` for every format, in name order
    pub fn describe(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.formatters
            .iter()
            .map(|(name, f)| (name.as_str(), f.description()))
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter);
        registry.register(super::SexpFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
