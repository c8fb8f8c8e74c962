//! Monthly report domain models.
//!
//! A report is materialized per request and never persisted.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single cost entry as it appears inside a monthly report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportItem {
    pub sum: f64,
    pub description: String,
    pub day: u32,
}

/// The entries of one category within a monthly report.
///
/// Serializes as a single-key object (`{"food": [...]}`), which is the wire
/// shape report consumers expect.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCosts {
    pub category: String,
    pub items: Vec<ReportItem>,
}

impl Serialize for CategoryCosts {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.category, &self.items)?;
        map.end()
    }
}

/// A user's costs for one calendar month, grouped by category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyReport {
    pub userid: i64,
    pub year: i32,
    pub month: u32,
    pub costs: Vec<CategoryCosts>,
}
