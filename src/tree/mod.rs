//! Directory traversal and tree rendering
//!
//! - `filter` - `PatternMatcher`: ignore rules, include allowlist, size ceiling
//! - `walker` - `TreeWalker`: one pre-order pass yielding files and tree text
//! - `utils` - depth, line rendering and path helpers

mod filter;
mod utils;
mod walker;

pub use filter::{PatternMatcher, Verdict};
pub use utils::{language_label, relative_to, root_name, tree_line};
pub use walker::{Entry, TreeWalker, Visit, Walk};
