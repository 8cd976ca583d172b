//! Testing utilities for outline assertions
//!
//! Tree-shape tests should assert the whole shape at once instead of
//! hand-matching nested variants. [`assert_outline`] starts a fluent chain:
//!
//! ```rust-example
//! use taskpaper::testing::assert_outline;
//!
//! assert_outline(&outline)
//!     .root_count(1)
//!     .root(0, |p| {
//!         p.assert_project()
//!             .text("Groceries")
//!             .child_count(2)
//!             .child(0, |t| {
//!                 t.assert_task().text("Milk").no_tags();
//!             });
//!     });
//! ```
//!
//! Every failure message carries the path of the node, e.g. `roots[0].children[1]`.

mod testing_assertions;

pub use testing_assertions::{assert_outline, NodeAssertion, OutlineAssertion, TypedAssertion};
