//! Database models for users.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for users
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    pub marital_status: Option<String>,
}

// Conversion to and from domain models
impl From<UserDB> for costmanager_core::users::User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            birthday: db.birthday,
            marital_status: db.marital_status,
        }
    }
}

impl From<costmanager_core::users::NewUser> for UserDB {
    fn from(domain: costmanager_core::users::NewUser) -> Self {
        Self {
            id: domain.id,
            first_name: domain.first_name,
            last_name: domain.last_name,
            birthday: domain.birthday,
            marital_status: domain.marital_status,
        }
    }
}
