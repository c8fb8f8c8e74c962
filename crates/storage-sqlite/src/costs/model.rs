//! Database models for cost entries.

use chrono::{Local, NaiveDate};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for cost entries
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::costs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CostDB {
    pub id: String,
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub date: NaiveDate,
}

/// Database model for creating a new cost entry
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::costs)]
pub struct NewCostDB {
    pub id: Option<String>,
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub date: NaiveDate,
}

// Conversion to and from domain models
impl From<CostDB> for costmanager_core::costs::CostEntry {
    fn from(db: CostDB) -> Self {
        Self {
            id: db.id,
            description: db.description,
            category: db.category,
            userid: db.userid,
            sum: db.sum,
            date: db.date,
        }
    }
}

impl From<costmanager_core::costs::NewCost> for NewCostDB {
    fn from(domain: costmanager_core::costs::NewCost) -> Self {
        Self {
            id: None,
            description: domain.description,
            category: domain.category,
            userid: domain.userid,
            sum: domain.sum,
            // Schema default: an unspecified date means "today".
            date: domain.date.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}
