//! Output format implementations for parsed outlines
//!
//! Formats are collaborators of the parser, not part of it: each takes a
//! finished [`Outline`](crate::ast::Outline) and renders it.
//! - `treeviz`: one line per node with tree connectors
//! - `sexp`: nested S-expressions
//! - `json` / `yaml`: serde serialization of the forest

pub mod registry;
pub mod serialized;
pub mod sexp;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use sexp::{to_sexp_str, SexpFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
