//! Inline tags: `@name` and `@name(arg)`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tag found in a node's text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
}

impl Tag {
    /// A bare tag, `@name`
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            arg: None,
        }
    }

    /// A tag with an argument, `@name(arg)`
    pub fn with_arg(name: impl Into<String>, arg: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            arg: Some(arg.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg(&self) -> Option<&str> {
        self.arg.as_deref()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "@{}({})", self.name, arg),
            None => write!(f, "@{}", self.name),
        }
    }
}
