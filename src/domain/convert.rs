//! Conversion of raw string values into typed values.
//!
//! Every conversion falls back to the caller's default. A value that is
//! absent, malformed or out of range is indistinguishable to the caller.

use std::str::FromStr;

/// Parse `raw` as `T`, returning `default` when absent or unparsable.
///
/// Surrounding whitespace is ignored so that `port = 8080 ` still reads as a
/// number even though the stored string keeps the spaces.
pub fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Strict boolean literal: `true` or `false`, ASCII case-insensitive.
pub fn parse_bool_literal(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Boolean with integer fallback: a literal first, then any `i32` where
/// nonzero means `true`.
pub fn parse_bool_or(raw: Option<&str>, default: bool) -> bool {
    let Some(value) = raw else {
        return default;
    };
    parse_bool_literal(value)
        .unwrap_or_else(|| parse_or::<i32>(Some(value), i32::from(default)) != 0)
}
