//! Raw table ingestion
//!
//! A [`RawTable`] is what the scraping side hands over: a title, the vendor
//! column headers and, per row, the feature name, paper fragments and one
//! token list per vendor column. Cells are matched to vendors by position.

use crate::cell::analyze_support;
use crate::normalizer::{normalize_name, normalize_papers, normalize_vendor};
use conformance_core::{ConformanceError, Feature, FeatureTable};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Pre-tokenized feature table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    pub title: String,
    /// Vendor column headers as scraped
    pub vendors: Vec<String>,
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

/// One feature row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    pub name: String,
    #[serde(default)]
    pub papers: Vec<String>,
    /// One token list per vendor column, in header order
    #[serde(default)]
    pub cells: Vec<Vec<String>>,
}

impl RawTable {
    pub fn from_json(json: &str) -> Result<Self, ConformanceError> {
        serde_json::from_str(json).map_err(|e| ConformanceError::ConfigError(e.to_string()))
    }

    /// Load a table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConformanceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConformanceError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

/// Build the feature table for a raw table
pub fn analyze_table(raw: &RawTable) -> FeatureTable {
    let vendors: Vec<String> = raw.vendors.iter().map(|v| normalize_vendor(v)).collect();

    let features = raw
        .rows
        .iter()
        .map(|row| {
            if row.cells.len() > vendors.len() {
                warn!(
                    feature = %row.name,
                    cells = row.cells.len(),
                    vendors = vendors.len(),
                    "row has more cells than vendor columns; extra cells ignored"
                );
            }
            let mut feature = Feature::new(normalize_name(&row.name), normalize_papers(&row.papers));
            for (vendor, cell) in vendors.iter().zip(&row.cells) {
                feature = feature.with_record(analyze_support(vendor, cell));
            }
            feature
        })
        .collect();

    let table = FeatureTable::new(raw.title.trim(), vendors, features);
    debug!(title = %table.title, features = table.features.len(), "analyzed table");
    table
}
