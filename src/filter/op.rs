//! Size comparison operators

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Comparison applied between a file's size and the query threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// Size equals the threshold (the default).
    #[default]
    Eq,
    /// Size is strictly below the threshold.
    Lt,
    /// Size is strictly above the threshold.
    Gt,
    /// Size is at most the threshold.
    Le,
    /// Size is at least the threshold.
    Ge,
}

impl Operator {
    /// Evaluate the comparison for a given size and threshold.
    pub fn holds(self, size: i64, threshold: i64) -> bool {
        match self {
            Operator::Eq => size == threshold,
            Operator::Lt => size < threshold,
            Operator::Gt => size > threshold,
            Operator::Le => size <= threshold,
            Operator::Ge => size >= threshold,
        }
    }

    /// The short token accepted by [`FromStr`] and shown in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::Le => "le",
            Operator::Ge => "ge",
        }
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Operator::Eq),
            "lt" => Ok(Operator::Lt),
            "gt" => Ok(Operator::Gt),
            "le" => Ok(Operator::Le),
            "ge" => Ok(Operator::Ge),
            other => Err(QueryError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
