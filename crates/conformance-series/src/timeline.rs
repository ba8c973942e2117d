//! Vendor release timelines
//!
//! Static configuration describing, per vendor, which releases exist and
//! when they shipped, plus the standard revisions drawn as chart markers.
//! Loaded from YAML or JSON and passed explicitly to series construction.

use chrono::NaiveDate;
use conformance_core::{ConformanceError, TableKind, VersionKey};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Complete timeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseTimeline {
    /// Standard revisions, oldest first
    #[serde(default)]
    pub standards: Vec<StandardRevision>,

    /// Tracked vendors
    pub vendors: Vec<VendorTimeline>,
}

/// A C++ standard revision (ex: "20")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRevision {
    pub name: String,

    /// Date of the final working draft, if one exists yet
    #[serde(default)]
    pub final_draft: Option<NaiveDate>,
}

/// Release history of one vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorTimeline {
    /// Short identifier (ex: "gcc")
    pub key: String,

    /// Column name in language tables (ex: "GCC")
    pub compiler_name: String,

    /// Column name in library tables (ex: "GCC libstdc++")
    pub library_name: String,

    /// Releases in publication order
    pub releases: Vec<Release>,
}

/// One vendor release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,

    /// Release date; absent for the upcoming, unreleased version
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Release {
    pub fn new(version: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            version: version.into(),
            date,
        }
    }

    /// Release date, with unreleased versions placed at `as_of`
    pub fn resolved_date(&self, as_of: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(as_of)
    }
}

impl VendorTimeline {
    /// Column name this vendor uses in tables of `kind`
    pub fn name_for(&self, kind: TableKind) -> &str {
        match kind {
            TableKind::Language => &self.compiler_name,
            TableKind::Library => &self.library_name,
        }
    }
}

impl ReleaseTimeline {
    /// Load a timeline from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConformanceError> {
        let timeline: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConformanceError::ConfigError(e.to_string()))?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Load a timeline from JSON
    pub fn from_json(json: &str) -> Result<Self, ConformanceError> {
        let timeline: Self =
            serde_json::from_str(json).map_err(|e| ConformanceError::ConfigError(e.to_string()))?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Load a timeline file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConformanceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConformanceError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Look up a vendor by key
    pub fn vendor(&self, key: &str) -> Option<&VendorTimeline> {
        self.vendors.iter().find(|v| v.key == key)
    }

    /// Check keys are unique and every release version parses.
    ///
    /// Out-of-order dates are only reported, since series built from them
    /// remain valid, just not monotonic in time.
    pub fn validate(&self) -> Result<(), ConformanceError> {
        for (i, vendor) in self.vendors.iter().enumerate() {
            if self.vendors[..i].iter().any(|v| v.key == vendor.key) {
                return Err(ConformanceError::TimelineError(format!(
                    "duplicate vendor key `{}`",
                    vendor.key
                )));
            }

            for release in &vendor.releases {
                VersionKey::parse(&release.version).map_err(|e| {
                    ConformanceError::TimelineError(format!(
                        "vendor `{}` release `{}`: {}",
                        vendor.key, release.version, e
                    ))
                })?;
            }

            let dated: Vec<NaiveDate> = vendor.releases.iter().filter_map(|r| r.date).collect();
            if dated.windows(2).any(|w| w[0] > w[1]) {
                warn!(vendor = %vendor.key, "release dates are not in increasing order");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
standards:
  - name: "20"
    final_draft: "2020-04-01"
  - name: "26"
vendors:
  - key: gcc
    compiler_name: GCC
    library_name: GCC libstdc++
    releases:
      - { version: "10.1", date: "2020-05-07" }
      - { version: "11.1", date: "2021-04-27" }
      - { version: "15.1" }
"#;

    #[test]
    fn test_from_yaml() {
        let timeline = ReleaseTimeline::from_yaml(SAMPLE).unwrap();
        assert_eq!(timeline.standards.len(), 2);
        assert_eq!(timeline.standards[1].final_draft, None);

        let gcc = timeline.vendor("gcc").unwrap();
        assert_eq!(gcc.releases.len(), 3);
        assert_eq!(gcc.releases[0].date, NaiveDate::from_ymd_opt(2020, 5, 7));
        assert_eq!(gcc.releases[2].date, None);
    }

    #[test]
    fn test_name_for_kind() {
        let timeline = ReleaseTimeline::from_yaml(SAMPLE).unwrap();
        let gcc = timeline.vendor("gcc").unwrap();
        assert_eq!(gcc.name_for(TableKind::Language), "GCC");
        assert_eq!(gcc.name_for(TableKind::Library), "GCC libstdc++");
    }

    #[test]
    fn test_resolved_date() {
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(Release::new("15.1", None).resolved_date(as_of), as_of);
        let shipped = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(Release::new("14.1", Some(shipped)).resolved_date(as_of), shipped);
    }

    #[test]
    fn test_bad_date_is_config_error() {
        let yaml = r#"
vendors:
  - key: gcc
    compiler_name: GCC
    library_name: GCC libstdc++
    releases:
      - { version: "10.1", date: "May 2020" }
"#;
        assert!(matches!(
            ReleaseTimeline::from_yaml(yaml),
            Err(ConformanceError::ConfigError(_))
        ));
    }

    #[test]
    fn test_bad_version_is_timeline_error() {
        let json = r#"{
            "vendors": [{
                "key": "msvc",
                "compiler_name": "MSVC",
                "library_name": "MSVC STL",
                "releases": [{ "version": "vNext" }]
            }]
        }"#;
        assert!(matches!(
            ReleaseTimeline::from_json(json),
            Err(ConformanceError::TimelineError(_))
        ));
    }

    #[test]
    fn test_duplicate_vendor_key() {
        let json = r#"{
            "vendors": [
                { "key": "gcc", "compiler_name": "GCC", "library_name": "GCC libstdc++", "releases": [] },
                { "key": "gcc", "compiler_name": "GCC", "library_name": "GCC libstdc++", "releases": [] }
            ]
        }"#;
        assert!(matches!(
            ReleaseTimeline::from_json(json),
            Err(ConformanceError::TimelineError(_))
        ));
    }
}
