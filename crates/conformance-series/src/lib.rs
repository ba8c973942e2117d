//! Conformance Series: support scores over vendor release history
//!
//! Pairs a [`FeatureTable`](conformance_core::FeatureTable) with a vendor
//! release timeline to produce the dated score points a trend chart plots.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use conformance_core::{Feature, FeatureTable, SupportEntry, SupportRecord, TableKind};
//! use conformance_series::{ReleaseTimeline, ScoreSeries};
//!
//! let timeline = ReleaseTimeline::from_yaml(r#"
//! vendors:
//!   - key: clang
//!     compiler_name: Clang
//!     library_name: Clang libc++
//!     releases:
//!       - { version: "9.0.0", date: "2019-09-19" }
//!       - { version: "10.0.0", date: "2020-03-24" }
//!       - { version: "11.0.0" }
//! "#).unwrap();
//!
//! let concepts = Feature::new("Concepts", vec!["P0734R0".to_string()])
//!     .with_record(SupportRecord::new("Clang", vec![SupportEntry::partial("10")]));
//! let table = FeatureTable::new("C++20 core language features", vec!["Clang".to_string()], vec![concepts]);
//!
//! let today = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
//! let clang = timeline.vendor("clang").unwrap();
//! let series = ScoreSeries::for_vendor(&table, clang, TableKind::Language, today).unwrap();
//!
//! let percents: Vec<f64> = series.points.iter().map(|p| p.percent()).collect();
//! assert_eq!(percents, vec![0.0, 50.0, 50.0]);
//! assert_eq!(series.latest().unwrap().date, today);
//! ```

pub mod chart;
pub mod series;
pub mod timeline;

pub use chart::{AdoptionChart, ChartLine, RevisionMarker};
pub use series::{ScorePoint, ScoreSeries};
pub use timeline::{Release, ReleaseTimeline, StandardRevision, VendorTimeline};
