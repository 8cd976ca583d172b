//! Tree building
//!
//! Turns the scanner's per-line records into a forest.
//!
//! Pipeline position: [`ScannedLine`](crate::lexing::ScannedLine) → node →
//! [`Resolver::resolve`] → [`Arena::attach`] → [`Outline`].
//!
//! Two resolvers share the scanner and the node model:
//! - [`NestedResolver`]: nesting inferred from indentation
//! - [`FlatResolver`]: projects as roots, no indentation nesting

pub mod arena;
pub mod builder;
pub mod errors;
pub mod flat;
pub mod nested;
pub mod resolver;

pub use arena::{Arena, NodeId};
pub use builder::OutlineBuilder;
pub use errors::{DecodeError, ReadError};
pub use flat::FlatResolver;
pub use nested::NestedResolver;
pub use resolver::{resolver_for, Resolver};

use crate::ast::Outline;
use crate::config::ParseConfig;
use std::io::BufRead;

/// Parse a complete text.
pub fn parse_str(text: &str, config: &ParseConfig) -> Outline {
    let mut builder = OutlineBuilder::new(*config);
    builder.feed(text);
    builder.finish()
}

/// Parse everything a reader yields, one line at a time.
pub fn read_outline<R: BufRead>(reader: R, config: &ParseConfig) -> Result<Outline, ReadError> {
    let mut builder = OutlineBuilder::new(*config);
    builder.read(reader)?;
    Ok(builder.finish())
}
