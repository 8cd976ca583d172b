//! S-expression formatter
//!
//! Every node renders as `(kind "text" tag* child*)` where a tag is
//! `(tag "name")` or `(tag "name" "arg")`. Children go on their own lines,
//! indented two spaces per level. Strings escape `\` and `"`.

use super::registry::{FormatError, Formatter};
use crate::ast::{Node, Outline, Tag};

pub fn to_sexp_str(outline: &Outline) -> String {
    let mut result = String::new();
    for node in outline.roots() {
        append_node(&mut result, node, 0);
        result.push('\n');
    }
    result
}

fn append_node(result: &mut String, node: &Node, depth: usize) {
    result.push('(');
    result.push_str(node.node_type());
    result.push(' ');
    push_quoted(result, node.text());

    for tag in node.tags() {
        result.push(' ');
        append_tag(result, tag);
    }

    for child in node.children() {
        result.push('\n');
        result.push_str(&"  ".repeat(depth + 1));
        append_node(result, child, depth + 1);
    }
    result.push(')');
}

fn append_tag(result: &mut String, tag: &Tag) {
    result.push_str("(tag ");
    push_quoted(result, &tag.name);
    if let Some(arg) = &tag.arg {
        result.push(' ');
        push_quoted(result, arg);
    }
    result.push(')');
}

fn push_quoted(result: &mut String, s: &str) {
    result.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('"');
}

pub struct SexpFormatter;

impl Formatter for SexpFormatter {
    fn name(&self) -> &str {
        "sexp"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(to_sexp_str(outline))
    }

    fn description(&self) -> &str {
        "Nested S-expressions"
    }
}
