//! Error types for size queries.
//!
//! Every variant is terminal to the call that produced it, never to the
//! process: callers downgrade these to diagnostics and return no result.
//! Per-entry traversal errors are not represented here; the walker recovers
//! from them locally and records them as notes (see [`crate::filter`]).

use thiserror::Error;

/// Errors that invalidate a size query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Operator string outside the recognized set.
    #[error("invalid operator '{0}', expected one of: eq, le, ge, gt, lt")]
    InvalidOperator(String),

    /// Size expression with a non-numeric or negative magnitude, or an
    /// unrecognized unit suffix.
    #[error("invalid size '{0}', expected a non-negative number with an optional unit (e.g. 10MB, 2.5GiB)")]
    InvalidSize(String),

    /// Root path does not exist.
    #[error("cannot access '{0}': no such directory")]
    RootNotFound(String),

    /// Root path exists but is not a directory.
    #[error("'{0}' is not a directory")]
    RootNotDirectory(String),
}
