use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use costmanager_core::costs as core_costs;
use costmanager_core::errors::ValidationError;
use costmanager_core::team as core_team;
use costmanager_core::users as core_users;

/// Roster entry describing one of the application's authors.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TeamMember {
    pub first_name: String,
    pub last_name: String,
}

impl From<core_team::TeamMember> for TeamMember {
    fn from(m: core_team::TeamMember) -> Self {
        Self {
            first_name: m.first_name,
            last_name: m.last_name,
        }
    }
}

/// A user together with the total of all their recorded costs.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserDetails {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub total: f64,
}

impl From<core_users::UserDetails> for UserDetails {
    fn from(u: core_users::UserDetails) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            total: u.total,
        }
    }
}

/// Request body for recording a cost.
///
/// Every field the contract requires is optional at the wire level so that an
/// absent field maps to a validation failure rather than a deserialization
/// rejection.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct AddCostRequest {
    pub description: Option<String>,
    pub category: Option<String>,
    pub userid: Option<i64>,
    pub sum: Option<f64>,
    pub date: Option<String>,
}

impl TryFrom<AddCostRequest> for core_costs::NewCost {
    type Error = ValidationError;

    fn try_from(req: AddCostRequest) -> Result<Self, Self::Error> {
        let date = req
            .date
            .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
            .transpose()?;
        Ok(Self {
            description: req
                .description
                .ok_or_else(|| ValidationError::MissingField("description".to_string()))?,
            category: req
                .category
                .ok_or_else(|| ValidationError::MissingField("category".to_string()))?,
            userid: req
                .userid
                .ok_or_else(|| ValidationError::MissingField("userid".to_string()))?,
            sum: req
                .sum
                .ok_or_else(|| ValidationError::MissingField("sum".to_string()))?,
            date,
        })
    }
}

/// A stored cost entry as echoed back by the add endpoint.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CostResponse {
    pub id: String,
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub date: NaiveDate,
}

impl From<core_costs::CostEntry> for CostResponse {
    fn from(c: core_costs::CostEntry) -> Self {
        Self {
            id: c.id,
            description: c.description,
            category: c.category,
            userid: c.userid,
            sum: c.sum,
            date: c.date,
        }
    }
}

/// Query parameters for the monthly report endpoint.
#[derive(Deserialize, IntoParams, Debug, Clone)]
pub struct ReportQuery {
    pub id: i64,
    pub year: i32,
    pub month: u32,
}
