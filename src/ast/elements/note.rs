//! Note element: free text, structurally inert

use super::tag::Tag;
use crate::ast::indent::Indent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub indent: Indent,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Note {
    pub fn new(indent: Indent, text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Note {
            indent,
            text: text.into(),
            tags,
        }
    }
}
