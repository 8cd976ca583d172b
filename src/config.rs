//! Parse configuration
//!
//! A [`ParseConfig`] selects:
//! 1. Which resolution policy attaches nodes (nested by indentation, or flat)
//! 2. How a line's leading whitespace becomes a comparable nesting level
//!
//! Named configurations live in a [`ConfigRegistry`] so callers (the CLI in
//! particular) can pick one by name.

use crate::ast::{Indent, IndentLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which resolver attaches nodes to the forest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Indentation-driven nesting with open project/task stacks
    #[default]
    Nested,

    /// Projects are roots; everything else hangs off the latest root
    Flat,
}

/// How leading whitespace maps to a nesting level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentPolicy {
    /// The sorted, deduplicated set of whitespace characters.
    /// `"\t"` and `"\t\t"` are the same level.
    #[default]
    CharacterSet,

    /// The literal number of leading whitespace characters
    Width,
}

impl IndentPolicy {
    pub fn level(&self, raw_indent: &str) -> IndentLevel {
        match self {
            IndentPolicy::CharacterSet => IndentLevel::from_indent(&Indent::canonical(raw_indent)),
            IndentPolicy::Width => IndentLevel::from_width(raw_indent),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    pub mode: ResolveMode,
    pub indent: IndentPolicy,
}

impl ParseConfig {
    pub fn nested() -> Self {
        ParseConfig {
            mode: ResolveMode::Nested,
            indent: IndentPolicy::CharacterSet,
        }
    }

    pub fn flat() -> Self {
        ParseConfig {
            mode: ResolveMode::Flat,
            indent: IndentPolicy::CharacterSet,
        }
    }

    pub fn with_indent(mut self, indent: IndentPolicy) -> Self {
        self.indent = indent;
        self
    }
}

/// A named configuration
#[derive(Debug, Clone)]
pub struct NamedConfig {
    pub name: String,
    pub description: String,
    pub config: ParseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownConfig(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownConfig(name) => write!(f, "Unknown configuration '{name}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Registry of named parse configurations
pub struct ConfigRegistry {
    configs: HashMap<String, NamedConfig>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration, replacing any with the same name
    pub fn register(&mut self, config: NamedConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    pub fn get(&self, name: &str) -> Option<&NamedConfig> {
        self.configs.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Look up the parse settings for a name
    pub fn resolve(&self, name: &str) -> Result<ParseConfig, ConfigError> {
        self.get(name)
            .map(|named| named.config)
            .ok_or_else(|| ConfigError::UnknownConfig(name.to_string()))
    }

    /// List all configurations (sorted by name)
    pub fn list_all(&self) -> Vec<&NamedConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with the standard configurations
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(NamedConfig {
            name: "nested".into(),
            description: "Indentation nesting, levels by whitespace character set".into(),
            config: ParseConfig::nested(),
        });

        registry.register(NamedConfig {
            name: "nested-width".into(),
            description: "Indentation nesting, levels by leading whitespace width".into(),
            config: ParseConfig::nested().with_indent(IndentPolicy::Width),
        });

        registry.register(NamedConfig {
            name: "flat".into(),
            description: "Projects as roots, everything else under the latest root".into(),
            config: ParseConfig::flat(),
        });

        registry
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
