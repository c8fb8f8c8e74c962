//! Cost entry domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::COST_CATEGORIES;
use crate::errors::{Result, ValidationError};

/// Domain model representing a single recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostEntry {
    pub id: String,
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub date: NaiveDate,
}

/// Input model for recording a new cost.
///
/// `date` falls back to the current date when not supplied.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewCost {
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub date: Option<NaiveDate>,
}

impl NewCost {
    /// Checks the category against the fixed set the service recognizes.
    pub fn validate(&self) -> Result<()> {
        if !COST_CATEGORIES.contains(&self.category.as_str()) {
            return Err(ValidationError::InvalidInput(format!(
                "Unknown category '{}', expected one of: {}",
                self.category,
                COST_CATEGORIES.join(", ")
            ))
            .into());
        }
        Ok(())
    }
}
