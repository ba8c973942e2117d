//! Score series: a vendor's table score at each of its releases

use crate::timeline::{Release, VendorTimeline};
use chrono::NaiveDate;
use conformance_core::{ConformanceError, FeatureTable, TableKind, VersionKey};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Score of one vendor release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub version: String,
    pub date: NaiveDate,
    /// Table score with the release as cutoff, in `[0, 1]`
    pub score: f64,
}

impl ScorePoint {
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Scores of one vendor over its releases, in release order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSeries {
    /// Vendor column name the scores were computed for
    pub vendor: String,
    pub points: Vec<ScorePoint>,
}

impl ScoreSeries {
    /// Score `vendor` in `table` at every release, keeping release order.
    ///
    /// Unreleased versions are dated `as_of`.
    pub fn build(
        table: &FeatureTable,
        vendor: &str,
        releases: &[Release],
        as_of: NaiveDate,
    ) -> Result<Self, ConformanceError> {
        let mut points = Vec::with_capacity(releases.len());
        for release in releases {
            let cutoff = VersionKey::parse(&release.version)?;
            let score = table.support_score_at(vendor, Some(&cutoff))?;
            if release.date.is_none() {
                warn!(vendor, version = %release.version, %as_of, "dating unreleased version at as-of date");
            }
            points.push(ScorePoint {
                version: release.version.clone(),
                date: release.resolved_date(as_of),
                score,
            });
        }

        let series = Self {
            vendor: vendor.to_string(),
            points,
        };
        if !series.is_date_monotonic() {
            warn!(vendor, title = %table.title, "score series dates are not increasing");
        }
        Ok(series)
    }

    /// Series for a timeline vendor, using its column name for `kind`
    pub fn for_vendor(
        table: &FeatureTable,
        vendor: &VendorTimeline,
        kind: TableKind,
        as_of: NaiveDate,
    ) -> Result<Self, ConformanceError> {
        Self::build(table, vendor.name_for(kind), &vendor.releases, as_of)
    }

    /// Whether point dates never decrease
    pub fn is_date_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| w[0].date <= w[1].date)
    }

    pub fn latest(&self) -> Option<&ScorePoint> {
        self.points.last()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
