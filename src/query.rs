//! Size query invocation boundary.
//!
//! [`SizeQuery`] is the seam a host embeds: it takes the raw string inputs
//! (path, size expression, operator token), applies the documented
//! defaults, and runs the parser and walker. Every validation failure is
//! soft: [`SizeQuery::run`] never returns an error and never panics, it
//! yields no matches plus a diagnostic for the host's logging channel.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::filter::{Operator, TreeFilter};
use crate::size::parse_size;

/// Outcome of a size query.
///
/// `matches` is `None` when input validation failed (invalid operator,
/// size expression or root) and `Some` otherwise, even if nothing matched.
/// `diagnostics` collects validation errors, irregular-entry flags and
/// per-entry walk errors.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutput {
    pub matches: Option<Vec<String>>,
    pub diagnostics: Vec<String>,
}

impl QueryOutput {
    fn failed(diagnostic: String) -> Self {
        Self {
            matches: None,
            diagnostics: vec![diagnostic],
        }
    }
}

/// A "which files under this directory match a size comparison?" query.
#[derive(Debug, Clone)]
pub struct SizeQuery {
    path: PathBuf,
    size: Option<String>,
    operator: Option<String>,
}

impl SizeQuery {
    /// Query rooted at `path`, with the defaults: size `"0"`, operator `eq`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: None,
            operator: None,
        }
    }

    /// Set the size expression, e.g. `"10MB"`. An empty string keeps the
    /// `"0"` default.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the operator token, one of `eq`, `le`, `ge`, `gt`, `lt`. An
    /// empty string keeps the `eq` default.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the query: parse inputs, walk the tree, collect matches.
    ///
    /// Blocks the calling thread until the walk completes.
    pub fn run(&self) -> QueryOutput {
        let operator_token = self
            .operator
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("eq");
        let size_expr = self
            .size
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("0");

        let op: Operator = match operator_token.parse() {
            Ok(op) => op,
            Err(err) => return QueryOutput::failed(err.to_string()),
        };

        let threshold = match parse_size(size_expr) {
            Ok(bytes) => bytes,
            Err(err) => return QueryOutput::failed(err.to_string()),
        };

        match TreeFilter::new(threshold, op).filter(&self.path) {
            Ok(traversal) => QueryOutput {
                matches: Some(traversal.matches),
                diagnostics: traversal.notes,
            },
            Err(err) => QueryOutput::failed(err.to_string()),
        }
    }
}
