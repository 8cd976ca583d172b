//! Treeviz formatter for outlines
//!
//! One line per node, nesting drawn with tree connectors:
//!
//! ```text
//! ├─ project: Work
//! │ ├─ task: Email @due(today) [@due(today)]
//! │ └─ note: ask about the budget
//! └─ project: Personal
//!   └─ task: Call mom
//! ```
//!
//! Each line is `<prefix><connector> <kind>: <text>`, followed by the node's
//! tags in brackets when it has any.

use super::registry::{FormatError, Formatter};
use crate::ast::{Node, Outline};

pub fn to_treeviz_str(outline: &Outline) -> String {
    let mut result = String::new();
    append_children(&mut result, outline.roots(), "");
    result
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        node.display_label()
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix);
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(to_treeviz_str(outline))
    }

    fn description(&self) -> &str {
        "Tree view with one line per node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::parse_str;
    use crate::config::ParseConfig;

    #[test]
    fn test_treeviz_nested() {
        let outline = parse_str(
            "Work:\n\t- Email @due(today)\n\task about the budget\nPersonal:\n\t- Call mom\n",
            &ParseConfig::default(),
        );
        insta::assert_snapshot!(to_treeviz_str(&outline), @r###"
        ├─ project: Work
        │ ├─ task: Email @due(today) [@due(today)]
        │ └─ note: ask about the budget
        └─ project: Personal
          └─ task: Call mom
        "###);
    }

    #[test]
    fn test_treeviz_empty() {
        assert_eq!(to_treeviz_str(&Outline::new()), "");
    }
}
