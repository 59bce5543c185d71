//! Parser for plain numeric value lists.
//!
//! Accepts integers separated by commas and/or whitespace, optionally wrapped
//! in square brackets. `#` starts a comment that runs to the end of the line.
//!
//! ```text
//! [9, 86, 1, 2]
//! 9 86 1 2   # same thing
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// A comment or a run of non-separator characters.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\n]*|[^\s,\[\]#]+").expect("token pattern is valid"));

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

/// Parse every integer in `src`, in order.
pub fn parse_values(src: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for m in TOKEN.find_iter(src) {
        let token = m.as_str();
        if token.starts_with('#') {
            continue;
        }
        if !INTEGER.is_match(token) {
            return Err(Error::Parse {
                token: token.to_string(),
                position: m.start(),
            });
        }
        let value = token.parse::<i64>().map_err(|_| Error::Overflow {
            token: token.to_string(),
            position: m.start(),
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_values.rs"]
mod tests;
