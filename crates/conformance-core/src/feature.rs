//! Feature: one tracked standardization item
use crate::support::SupportRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name (ex: "Concepts")
    pub name: String,
    /// Originating paper identifiers (ex: "P0734R0")
    pub papers: Vec<String>,
    /// Support records in column order, at most one per vendor. Vendors may be absent.
    pub support: Vec<SupportRecord>,
}

impl Feature {
    pub fn new(name: impl Into<String>, papers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            papers,
            support: Vec::new(),
        }
    }

    /// Attach a record, replacing any earlier record of the same vendor
    pub fn with_record(mut self, record: SupportRecord) -> Self {
        match self.support.iter_mut().find(|r| r.vendor == record.vendor) {
            Some(existing) => *existing = record,
            None => self.support.push(record),
        }
        self
    }

    pub fn record(&self, vendor: &str) -> Option<&SupportRecord> {
        self.support.iter().find(|r| r.vendor == vendor)
    }

    /// Vendors with a record, in insertion order
    pub fn vendors(&self) -> impl Iterator<Item = &str> + '_ {
        self.support.iter().map(|r| r.vendor.as_str())
    }

    /// Render with records ordered as `vendors`, skipping empty ones
    pub fn display_with_order<S: AsRef<str>>(&self, vendors: impl IntoIterator<Item = S>) -> String {
        let records: Vec<String> = vendors
            .into_iter()
            .filter_map(|v| self.record(v.as_ref()))
            .filter(|r| !r.is_empty())
            .map(|r| format!("{} {}", r.vendor, r.entries_display()))
            .collect();
        format!("{} ({}): {}", self.name, self.papers.join(", "), records.join(", "))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with_order(self.vendors()))
    }
}
