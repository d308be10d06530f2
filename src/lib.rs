//! Heft - find files by size in a directory tree

pub mod error;
pub mod filter;
pub mod output;
pub mod query;
pub mod size;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::QueryError;
pub use filter::{Operator, Traversal, TreeFilter};
pub use output::{print_diagnostics, print_json, print_matches};
pub use query::{QueryOutput, SizeQuery};
pub use size::parse_size;
