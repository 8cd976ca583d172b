//! Tag scanning
//!
//! Grammar, tried at every `@` in order:
//! - `@name(arg)` where `name` is one or more word characters and `arg` holds no parentheses
//! - `@name`
//! - `@` followed by a non-word character, which is consumed and ignored
//!
//! The last alternative means `@@name` yields no tag: the first `@` swallows the
//! second one. Everything else is skipped silently.

use crate::ast::Tag;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(?P<name>\w+)\((?P<arg>[^()]*)\)|@(?P<bare>\w+)|@\W").unwrap()
});

/// Extract tags from text, left to right.
///
/// Empty parentheses (`@due()`) give a tag without an argument.
pub fn scan_tags(text: &str) -> Vec<Tag> {
    TAG_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(name) = caps.name("name") {
                let arg = caps
                    .name("arg")
                    .map(|m| m.as_str())
                    .filter(|arg| !arg.is_empty());
                return Some(Tag {
                    name: name.as_str().to_string(),
                    arg: arg.map(str::to_string),
                });
            }
            caps.name("bare").map(|bare| Tag::new(bare.as_str()))
        })
        .collect()
}
