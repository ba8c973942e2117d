//! Feature tables and per-vendor aggregate scores
//!
//! A table groups the features of one standard revision under a title
//! ("C++20 core language features", "C++20 library features") together
//! with the vendors whose columns it tracks.

use crate::error::ConformanceError;
use crate::feature::Feature;
use crate::version::VersionKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Which side of the toolchain a table tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Core language features, implemented by compilers
    Language,
    /// Standard library features
    Library,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    pub title: String,
    /// Vendor column names, in table order
    pub vendors: Vec<String>,
    pub features: Vec<Feature>,
}

/// One row of a vendor ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorScore {
    pub vendor: String,
    pub score: f64,
}

impl FeatureTable {
    /// Build a table. Records of vendors missing from `vendors` are kept
    /// but logged, since rendering only lists declared columns.
    pub fn new(title: impl Into<String>, vendors: Vec<String>, features: Vec<Feature>) -> Self {
        let table = Self {
            title: title.into(),
            vendors,
            features,
        };
        for vendor in table.undeclared_vendors() {
            warn!(vendor = %vendor, title = %table.title, "feature references undeclared vendor");
        }
        table
    }

    /// Average score of `vendor` over the features that carry a record for it.
    ///
    /// Features without a record for the vendor are left out entirely. A
    /// vendor referenced by no feature scores 0.0.
    pub fn support_score(
        &self,
        vendor: &str,
        cutoff: Option<&str>,
    ) -> Result<f64, ConformanceError> {
        let cutoff = cutoff.map(VersionKey::parse).transpose()?;
        self.support_score_at(vendor, cutoff.as_ref())
    }

    /// Same as [`support_score`](Self::support_score) with a parsed cutoff
    pub fn support_score_at(
        &self,
        vendor: &str,
        cutoff: Option<&VersionKey>,
    ) -> Result<f64, ConformanceError> {
        let mut total = 0.0;
        let mut counted = 0usize;
        for feature in &self.features {
            let Some(record) = feature.record(vendor) else {
                continue;
            };
            total += record.score(cutoff)?;
            counted += 1;
        }

        if counted == 0 {
            debug!(vendor, title = %self.title, "no features reference vendor");
            return Ok(0.0);
        }
        Ok(total / counted as f64)
    }

    /// Every declared vendor with its score, best first. Ties keep table order.
    pub fn ranking(&self, cutoff: Option<&str>) -> Result<Vec<VendorScore>, ConformanceError> {
        let cutoff = cutoff.map(VersionKey::parse).transpose()?;
        let mut scores = self
            .vendors
            .iter()
            .map(|vendor| {
                Ok(VendorScore {
                    vendor: vendor.clone(),
                    score: self.support_score_at(vendor, cutoff.as_ref())?,
                })
            })
            .collect::<Result<Vec<_>, ConformanceError>>()?;
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(scores)
    }

    /// Vendors referenced by some feature but missing from `vendors`
    pub fn undeclared_vendors(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for feature in &self.features {
            for vendor in feature.vendors() {
                if !self.vendors.iter().any(|v| v == vendor) && !missing.iter().any(|m| m == vendor) {
                    missing.push(vendor.to_string());
                }
            }
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.vendors.join(", "))?;
        for feature in &self.features {
            write!(f, "\n{}", feature.display_with_order(&self.vendors))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::{SupportEntry, SupportRecord};

    fn concepts_table() -> FeatureTable {
        let concepts = Feature::new("Concepts", vec!["P0734R0".to_string()])
            .with_record(SupportRecord::new("GCC", vec![SupportEntry::full("10")]))
            .with_record(SupportRecord::new("Clang", vec![SupportEntry::partial("10")]));
        FeatureTable::new(
            "C++20 core language features",
            vec!["GCC".to_string(), "Clang".to_string()],
            vec![concepts],
        )
    }

    #[test]
    fn test_concepts_scores() {
        let table = concepts_table();
        assert_eq!(table.support_score("GCC", Some("12")).unwrap(), 1.0);
        assert_eq!(table.support_score("Clang", Some("9")).unwrap(), 0.0);
        assert_eq!(table.support_score("Clang", Some("11")).unwrap(), 0.5);
        assert_eq!(table.support_score("Clang", None).unwrap(), 0.5);
    }

    #[test]
    fn test_absent_vendor_is_excluded_not_zero() {
        let a = Feature::new("A", vec![])
            .with_record(SupportRecord::new("X", vec![SupportEntry::full("Yes")]));
        let b = Feature::new("B", vec![])
            .with_record(SupportRecord::new("Y", vec![SupportEntry::full("1")]));
        let table = FeatureTable::new(
            "t",
            vec!["X".to_string(), "Y".to_string()],
            vec![a, b],
        );
        assert_eq!(table.support_score("X", None).unwrap(), 1.0);
    }

    #[test]
    fn test_unreferenced_vendor_scores_zero() {
        let table = concepts_table();
        assert_eq!(table.support_score("MSVC", None).unwrap(), 0.0);
        let empty = FeatureTable::new("empty", vec!["GCC".to_string()], vec![]);
        assert_eq!(empty.support_score("GCC", Some("10")).unwrap(), 0.0);
    }

    #[test]
    fn test_bad_cutoff_propagates() {
        let table = concepts_table();
        assert!(matches!(
            table.support_score("GCC", Some("trunk")),
            Err(ConformanceError::ParseError(_))
        ));
    }

    #[test]
    fn test_sentinel_mixed_with_versions_aborts_table_score() {
        let broken = Feature::new("Broken", vec![]).with_record(SupportRecord::new(
            "GCC",
            vec![SupportEntry::full("10"), SupportEntry::full("Yes")],
        ));
        let mut table = concepts_table();
        table.features.push(broken);

        assert!(matches!(
            table.support_score("GCC", Some("12")),
            Err(ConformanceError::FormatError(_))
        ));
        assert!(matches!(
            table.ranking(None),
            Err(ConformanceError::FormatError(_))
        ));
        // Vendors without the malformed record still score
        assert_eq!(table.support_score("Clang", Some("11")).unwrap(), 0.5);
    }

    #[test]
    fn test_ranking_order() {
        let table = concepts_table();
        let ranking = table.ranking(None).unwrap();
        assert_eq!(ranking[0].vendor, "GCC");
        assert_eq!(ranking[0].score, 1.0);
        assert_eq!(ranking[1].vendor, "Clang");
        assert_eq!(ranking[1].score, 0.5);
    }

    #[test]
    fn test_ranking_ties_keep_table_order() {
        let feature = Feature::new("F", vec![])
            .with_record(SupportRecord::new("B", vec![SupportEntry::full("1")]))
            .with_record(SupportRecord::new("A", vec![SupportEntry::full("1")]));
        let table = FeatureTable::new("t", vec!["B".to_string(), "A".to_string()], vec![feature]);
        let vendors: Vec<String> = table.ranking(None).unwrap().into_iter().map(|s| s.vendor).collect();
        assert_eq!(vendors, vec!["B", "A"]);
    }

    #[test]
    fn test_undeclared_vendors() {
        let mut table = concepts_table();
        table.vendors.pop();
        assert_eq!(table.undeclared_vendors(), vec!["Clang".to_string()]);
    }

    #[test]
    fn test_undeclared_vendor_kept_but_not_rendered() {
        let feature = Feature::new("Concepts", vec!["P0734R0".to_string()])
            .with_record(SupportRecord::new("GCC", vec![SupportEntry::full("10")]))
            .with_record(SupportRecord::new("EDG eccp", vec![SupportEntry::full("6.1")]));
        let table = FeatureTable::new("t", vec!["GCC".to_string()], vec![feature]);

        assert_eq!(table.undeclared_vendors(), vec!["EDG eccp".to_string()]);
        assert_eq!(table.support_score("EDG eccp", None).unwrap(), 1.0);
        assert_eq!(table.to_string(), "t (GCC)\nConcepts (P0734R0): GCC [10]");
    }

    #[test]
    fn test_display() {
        let table = concepts_table();
        assert_eq!(
            table.to_string(),
            "C++20 core language features (GCC, Clang)\nConcepts (P0734R0): GCC [10], Clang [10 <partial>]"
        );
    }
}
