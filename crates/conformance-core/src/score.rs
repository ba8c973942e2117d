//! Support score calculation
//!
//! Scores a single vendor record in `[0, 1]`. Each versioned entry is one
//! implementation milestone; the score is the share of milestones reached
//! by the cutoff. When every milestone is partial the denominator grows by
//! one, so such a record stays below 1.0 at any cutoff.

use crate::error::ConformanceError;
use crate::support::{SupportEntry, SupportRecord};
use crate::version::VersionKey;
use tracing::debug;

/// Score of a full sentinel (`Yes` / `N/A`)
pub const SENTINEL_FULL_SCORE: f64 = 1.0;

/// Score of a partial sentinel
pub const SENTINEL_PARTIAL_SCORE: f64 = 0.5;

/// Calculate the support score of one record's entries.
///
/// `cutoff` of `None` counts every entry as reached.
pub fn calculate_score(
    entries: &[SupportEntry],
    cutoff: Option<&VersionKey>,
) -> Result<f64, ConformanceError> {
    if entries.is_empty() {
        return Ok(0.0);
    }

    if let Some(sentinel_entry) = entries.iter().find(|e| e.sentinel().is_some()) {
        if entries.len() != 1 {
            return Err(ConformanceError::FormatError(format!(
                "sentinel `{}` alongside {} other entries",
                sentinel_entry.version,
                entries.len() - 1
            )));
        }
        return Ok(if sentinel_entry.is_partial {
            SENTINEL_PARTIAL_SCORE
        } else {
            SENTINEL_FULL_SCORE
        });
    }

    let mut reached = 0usize;
    for entry in entries {
        let key = VersionKey::parse(&entry.version)?;
        if cutoff.map_or(true, |max| key <= *max) {
            reached += 1;
        }
    }

    let mut denominator = entries.len();
    if entries.iter().all(|e| e.is_partial) {
        denominator += 1;
    }

    let score = reached as f64 / denominator as f64;
    debug!(reached, denominator, score, "scored support entries");
    Ok(score)
}

impl SupportRecord {
    /// Support score of this record under an optional cutoff
    pub fn score(&self, cutoff: Option<&VersionKey>) -> Result<f64, ConformanceError> {
        calculate_score(&self.entries, cutoff)
    }
}
