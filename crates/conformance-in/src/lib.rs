//! Conformance-IN: scraped support tables to the conformance model
//!
//! The scraper splits each table cell into text fragments; this crate
//! cleans those fragments and builds the [`FeatureTable`] the scorer reads.
//!
//! # Example
//!
//! ```
//! use conformance_in::{analyze_support, analyze_table, RawTable};
//!
//! let record = analyze_support("Clang", &["14.0", "(partial)"]);
//! assert!(record.entries[0].is_partial);
//!
//! let raw = RawTable::from_json(r#"{
//!     "title": "C++20 core language features",
//!     "vendors": ["GCC", "Clang"],
//!     "rows": [{ "name": "Concepts", "papers": ["P0734R0"], "cells": [["10"], ["10", "(partial)"]] }]
//! }"#).unwrap();
//! let table = analyze_table(&raw);
//! assert_eq!(table.support_score("Clang", Some("11")).unwrap(), 0.5);
//! ```

pub mod cell;
pub mod normalizer;
pub mod table;

pub use cell::analyze_support;
pub use table::{analyze_table, RawRow, RawTable};

use conformance_core::{ConformanceError, FeatureTable};
use std::path::Path;

/// Load a raw table file and build its feature table
pub fn load_table(path: impl AsRef<Path>) -> Result<FeatureTable, ConformanceError> {
    let raw = RawTable::load(path)?;
    Ok(analyze_table(&raw))
}
