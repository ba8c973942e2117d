//! Adoption chart data
//!
//! Collects, for one table kind, a score series per (standard revision,
//! vendor) pair together with the revision markers. Drawing is left to the
//! caller.

use crate::series::ScoreSeries;
use crate::timeline::ReleaseTimeline;
use chrono::NaiveDate;
use conformance_core::{ConformanceError, FeatureTable, TableKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLine {
    /// Standard revision (ex: "20")
    pub standard: String,
    /// Timeline vendor key (ex: "gcc")
    pub vendor_key: String,
    pub series: ScoreSeries,
}

/// Vertical marker for a standard revision's final working draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionMarker {
    pub standard: String,
    pub date: NaiveDate,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionChart {
    pub kind: TableKind,
    pub lines: Vec<ChartLine>,
    pub markers: Vec<RevisionMarker>,
}

impl AdoptionChart {
    /// Build the chart for `kind` from per-revision tables.
    ///
    /// Revisions follow the timeline order; revisions without a table are
    /// skipped. The newest revision's marker is labelled "Current".
    pub fn build(
        timeline: &ReleaseTimeline,
        tables: &HashMap<String, FeatureTable>,
        kind: TableKind,
        as_of: NaiveDate,
    ) -> Result<Self, ConformanceError> {
        let mut lines = Vec::new();
        for standard in &timeline.standards {
            let Some(table) = tables.get(&standard.name) else {
                debug!(standard = %standard.name, ?kind, "no table for revision");
                continue;
            };
            for vendor in &timeline.vendors {
                lines.push(ChartLine {
                    standard: standard.name.clone(),
                    vendor_key: vendor.key.clone(),
                    series: ScoreSeries::for_vendor(table, vendor, kind, as_of)?,
                });
            }
        }

        let newest = timeline.standards.len().saturating_sub(1);
        let markers = timeline
            .standards
            .iter()
            .enumerate()
            .filter_map(|(i, standard)| {
                let date = standard.final_draft?;
                let label = if i == newest {
                    "Current".to_string()
                } else {
                    format!("C++{} Final WD", standard.name)
                };
                Some(RevisionMarker {
                    standard: standard.name.clone(),
                    date,
                    label,
                })
            })
            .collect();

        Ok(Self {
            kind,
            lines,
            markers,
        })
    }

    /// Lines of one standard revision
    pub fn lines_for(&self, standard: &str) -> impl Iterator<Item = &ChartLine> + '_ {
        let standard = standard.to_string();
        self.lines.iter().filter(move |l| l.standard == standard)
    }
}
