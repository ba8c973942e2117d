//! Support records: one vendor's implementation history for one feature

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-versioned support markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentinel {
    /// `N/A`: the feature does not apply to this vendor
    NotApplicable,
    /// `Yes`: supported, with no version history attached
    Yes,
}

impl Sentinel {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "N/A" => Some(Self::NotApplicable),
            "Yes" => Some(Self::Yes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::Yes => "Yes",
        }
    }
}

/// A single implementation milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    /// Version identifier, or a sentinel token (`N/A` / `Yes`)
    pub version: String,
    /// Whether support at this version is only partial
    pub is_partial: bool,
}

impl SupportEntry {
    pub fn new(version: impl Into<String>, is_partial: bool) -> Self {
        Self {
            version: version.into(),
            is_partial,
        }
    }

    pub fn full(version: impl Into<String>) -> Self {
        Self::new(version, false)
    }

    pub fn partial(version: impl Into<String>) -> Self {
        Self::new(version, true)
    }

    pub fn sentinel(&self) -> Option<Sentinel> {
        Sentinel::from_token(&self.version)
    }
}

/// A vendor's ordered support entries for one feature.
///
/// A record holding a sentinel entry is expected to hold nothing else;
/// scoring rejects records that break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportRecord {
    pub vendor: String,
    pub entries: Vec<SupportEntry>,
}

impl SupportRecord {
    pub fn new(vendor: impl Into<String>, entries: Vec<SupportEntry>) -> Self {
        Self {
            vendor: vendor.into(),
            entries,
        }
    }

    /// Record with no support recorded
    pub fn unsupported(vendor: impl Into<String>) -> Self {
        Self::new(vendor, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry list rendered without the vendor, e.g. `[10, 11 <partial>]`
    pub fn entries_display(&self) -> String {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|e| {
                if e.is_partial {
                    format!("{} <partial>", e.version)
                } else {
                    e.version.clone()
                }
            })
            .collect();
        format!("[{}]", entries.join(", "))
    }
}

impl fmt::Display for SupportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.vendor, self.entries_display())
    }
}
