//! Version keys: comparable forms of vendor release identifiers
//!
//! Handles plain dotted versions (`14.0.1`, `19.29`) and composite forms
//! carrying a parenthesised qualifier, such as `14.0.0 (Update 1)`, whose
//! inner segments are appended after the outer ones.

use crate::error::ConformanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leading keyword dropped from qualifiers like `Update 2`
const UPDATE_KEYWORD: &str = "Update";

/// Ordered integer key parsed from a version string.
///
/// Ordering is plain sequence ordering: element-wise, and a strict prefix
/// sorts before its extension, so `19` < `19.0`. No zero padding happens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionKey {
    segments: Vec<u64>,
}

impl VersionKey {
    /// Parse a version identifier
    pub fn parse(text: &str) -> Result<Self, ConformanceError> {
        let mut rest = text.trim();
        if let Some(stripped) = rest.strip_prefix(UPDATE_KEYWORD) {
            rest = stripped.trim();
        }

        if rest.ends_with(')') {
            let open = matching_open_paren(rest).ok_or_else(|| {
                ConformanceError::ParseError(format!("unbalanced `)` in version `{}`", text))
            })?;
            let mut key = Self::parse(&rest[..open])?;
            let inner = Self::parse(&rest[open + 1..rest.len() - 1])?;
            key.segments.extend(inner.segments);
            return Ok(key);
        }

        let segments = rest
            .split('.')
            .map(|part| {
                let part = part.trim();
                part.parse::<u64>().map_err(|_| {
                    ConformanceError::ParseError(format!(
                        "non-numeric component `{}` in version `{}`",
                        part, text
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

/// Byte index of the `(` that closes against the final `)` of `text`
fn matching_open_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, ch) in text.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

impl FromStr for VersionKey {
    type Err = ConformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}
