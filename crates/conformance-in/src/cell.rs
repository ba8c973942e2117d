//! Support cell analysis
//!
//! Converts the text fragments of one vendor's table cell into a
//! [`SupportRecord`]. Cells look like `["10"]`, `["11", "(partial)"]`,
//! `["14.0.0 (Update 1)"]`, `["Yes"]`, `["partial"]` or nothing at all.

use crate::normalizer::normalize_token;
use conformance_core::{SupportEntry, SupportRecord};
use tracing::trace;

const PARTIAL: &str = "partial";

/// Build the support record for one vendor cell
pub fn analyze_support<S: AsRef<str>>(vendor: &str, cell: &[S]) -> SupportRecord {
    let tokens: Vec<String> = cell
        .iter()
        .map(|t| normalize_token(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect();

    let Some(last) = tokens.last() else {
        return SupportRecord::unsupported(vendor);
    };

    if tokens.len() == 1 && last == PARTIAL {
        return SupportRecord::new(vendor, vec![SupportEntry::partial("Yes")]);
    }

    let trailing_partial = last.ends_with("partial)")
        || (tokens.len() >= 2 && last == ")" && tokens[tokens.len() - 2] == PARTIAL);

    let versions: Vec<&str> = tokens
        .iter()
        .map(|t| strip_qualifier(t))
        .filter(|t| !t.is_empty() && *t != PARTIAL)
        .collect();
    trace!(vendor, ?tokens, ?versions, trailing_partial, "analyzed support cell");

    let last_index = versions.len().saturating_sub(1);
    let entries = versions
        .iter()
        .enumerate()
        .map(|(i, version)| SupportEntry::new(*version, i == last_index && trailing_partial))
        .collect();
    SupportRecord::new(vendor, entries)
}

/// Drop a parenthesised qualifier such as `(partial)` or `(Update 2)`
fn strip_qualifier(token: &str) -> &str {
    if let Some(open) = token.find('(') {
        token[..open].trim()
    } else if let Some(stripped) = token.strip_suffix(')') {
        stripped.trim()
    } else {
        token
    }
}
