//! User domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model representing a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    pub marital_status: Option<String>,
}

/// Input model for creating a user.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    pub marital_status: Option<String>,
}

/// Read view of a user together with the total of all their recorded costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDetails {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub total: f64,
}
