//! Text normalization for scraped table text.
//!
//! - Whitespace collapsing in feature names
//! - Footnote marker (`*`) stripping on cell tokens and vendor headers
//! - Canonical casing of the `Yes` marker

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Multiple whitespace pattern (spaces, tabs, line breaks)
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Footnote marker trailing scraped tokens, e.g. `11*`
const FOOTNOTE_MARKER: char = '*';

/// Normalize one raw cell token. Returns an empty string for tokens that
/// carried only whitespace or footnote markers.
pub fn normalize_token(token: &str) -> String {
    let token = token.trim().trim_end_matches(FOOTNOTE_MARKER).trim();
    if token.eq_ignore_ascii_case("yes") {
        "Yes".to_string()
    } else {
        token.to_string()
    }
}

/// Normalize a vendor column header, e.g. `"GCC libstdc++* "` → `"GCC libstdc++"`
pub fn normalize_vendor(header: &str) -> String {
    header.trim().trim_end_matches(FOOTNOTE_MARKER).trim().to_string()
}

/// Collapse a multi-line feature name onto one line
pub fn normalize_name(name: &str) -> String {
    MULTI_SPACE.replace_all(name.trim(), " ").to_string()
}

/// Trim paper identifiers, dropping empty fragments
pub fn normalize_papers<S: AsRef<str>>(papers: &[S]) -> Vec<String> {
    papers
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
