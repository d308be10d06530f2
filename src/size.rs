//! Size expression parsing.
//!
//! Converts human-readable size strings like "10MB" or "2.5GiB" into byte
//! counts. Units are binary (IEC): each step is a multiple of 1024, never
//! 1000, regardless of whether the suffix is spelled "K", "KB" or "KIB".

use crate::error::QueryError;

const KILOBYTE: i64 = 1 << 10;
const MEGABYTE: i64 = 1 << 20;
const GIGABYTE: i64 = 1 << 30;
const TERABYTE: i64 = 1 << 40;
const PETABYTE: i64 = 1 << 50;
const EXABYTE: i64 = 1 << 60;

/// Parse a size expression into a byte count.
///
/// The expression is a decimal magnitude followed by an optional unit
/// suffix, matched case-insensitively: `B`, `K`/`KB`/`KIB`,
/// `M`/`MB`/`MIB`, `G`/`GB`/`GIB`, `T`/`TB`/`TIB`, `P`/`PB`/`PIB`,
/// `E`/`EB`/`EIB`. Fractional magnitudes are allowed ("2.5K" is 2560
/// bytes); the result is truncated toward zero.
///
/// A string containing no letter at all ("100", "0", "") parses to **zero
/// bytes**, not to a raw byte count. This quirk is intentional and load
/// bearing: callers that omit the size argument rely on it defaulting to
/// an exact-zero threshold.
///
/// # Errors
///
/// Returns [`QueryError::InvalidSize`] when the magnitude is not a valid
/// non-negative number or the suffix is not in the table above.
pub fn parse_size(input: &str) -> Result<i64, QueryError> {
    let expr = input.trim().to_uppercase();

    let Some(split) = expr.find(|c: char| c.is_alphabetic()) else {
        return Ok(0);
    };

    let (number, unit) = expr.split_at(split);
    let magnitude: f64 = number
        .parse()
        .map_err(|_| QueryError::InvalidSize(input.to_string()))?;
    if magnitude < 0.0 {
        return Err(QueryError::InvalidSize(input.to_string()));
    }

    let multiplier = match unit {
        "B" => 1,
        "K" | "KB" | "KIB" => KILOBYTE,
        "M" | "MB" | "MIB" => MEGABYTE,
        "G" | "GB" | "GIB" => GIGABYTE,
        "T" | "TB" | "TIB" => TERABYTE,
        "P" | "PB" | "PIB" => PETABYTE,
        "E" | "EB" | "EIB" => EXABYTE,
        _ => return Err(QueryError::InvalidSize(input.to_string())),
    };

    Ok((magnitude * multiplier as f64) as i64)
}
