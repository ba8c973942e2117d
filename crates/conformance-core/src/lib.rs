//! Conformance Core: feature support model and scoring
//!
//! Holds the normalized view of a C++ compiler support table and scores
//! how much of it each vendor implements, optionally up to a given release.
//!
//! # Example
//!
//! ```
//! use conformance_core::{Feature, FeatureTable, SupportEntry, SupportRecord};
//!
//! let concepts = Feature::new("Concepts", vec!["P0734R0".to_string()])
//!     .with_record(SupportRecord::new("GCC", vec![SupportEntry::full("10")]))
//!     .with_record(SupportRecord::new("Clang", vec![SupportEntry::partial("10")]));
//! let table = FeatureTable::new(
//!     "C++20 core language features",
//!     vec!["GCC".to_string(), "Clang".to_string()],
//!     vec![concepts],
//! );
//!
//! assert_eq!(table.support_score("GCC", Some("12")).unwrap(), 1.0);
//! assert_eq!(table.support_score("Clang", Some("11")).unwrap(), 0.5);
//! ```

pub mod error;
pub mod feature;
pub mod score;
pub mod support;
pub mod table;
pub mod version;

pub use error::ConformanceError;
pub use feature::Feature;
pub use score::calculate_score;
pub use support::{Sentinel, SupportEntry, SupportRecord};
pub use table::{FeatureTable, TableKind, VendorScore};
pub use version::VersionKey;
