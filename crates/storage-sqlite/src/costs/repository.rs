use chrono::NaiveDate;
use costmanager_core::costs::{CostEntry, CostRepositoryTrait, NewCost};
use costmanager_core::Result;

use super::model::{CostDB, NewCostDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::costs;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct CostRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CostRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CostRepository { pool, writer }
    }
}

#[async_trait]
impl CostRepositoryTrait for CostRepository {
    async fn insert_new_cost(&self, new_cost: NewCost) -> Result<CostEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CostEntry> {
                let mut new_cost_db: NewCostDB = new_cost.into();
                new_cost_db.id = Some(Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(costs::table)
                    .values(&new_cost_db)
                    .returning(CostDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(CostEntry::from(result_db))
            })
            .await
    }

    fn total_for_user(&self, user_id: i64) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;

        let total = costs::table
            .filter(costs::userid.eq(user_id))
            .select(diesel::dsl::sum(costs::sum))
            .first::<Option<f64>>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total.unwrap_or(0.0))
    }

    fn list_for_user_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CostEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = costs::table
            .filter(costs::userid.eq(user_id))
            .filter(costs::date.ge(start))
            .filter(costs::date.lt(end))
            .order(costs::date.asc())
            .select(CostDB::as_select())
            .load::<CostDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(CostEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use crate::users::UserRepository;
    use costmanager_core::errors::{DatabaseError, Error};
    use costmanager_core::users::{NewUser, UserRepositoryTrait};
    use tempfile::TempDir;

    const USER_ID: i64 = 42;

    async fn setup() -> (TempDir, CostRepository) {
        let tmp = TempDir::new().unwrap();
        let db_path = init(tmp.path().join("test.db").to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());

        let users = UserRepository::new(pool.clone(), writer.clone());
        users
            .insert_new_user(NewUser {
                id: USER_ID,
                first_name: "Mosh".to_string(),
                last_name: "Israeli".to_string(),
                birthday: None,
                marital_status: None,
            })
            .await
            .unwrap();

        (tmp, CostRepository::new(pool, writer))
    }

    fn new_cost(sum: f64, date: &str) -> NewCost {
        NewCost {
            description: "lunch".to_string(),
            category: "food".to_string(),
            userid: USER_ID,
            sum,
            date: Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        }
    }

    #[tokio::test]
    async fn total_is_zero_without_costs() {
        let (_tmp, repo) = setup().await;
        assert_eq!(repo.total_for_user(USER_ID).unwrap(), 0.0);
    }

    #[tokio::test]
    async fn insert_assigns_id_and_total_accumulates() {
        let (_tmp, repo) = setup().await;

        let first = repo.insert_new_cost(new_cost(50.0, "2025-05-30")).await.unwrap();
        assert!(!first.id.is_empty());
        repo.insert_new_cost(new_cost(25.5, "2025-05-31")).await.unwrap();

        assert_eq!(repo.total_for_user(USER_ID).unwrap(), 75.5);
    }

    #[tokio::test]
    async fn missing_date_defaults_to_today() {
        let (_tmp, repo) = setup().await;

        let mut cost = new_cost(10.0, "2025-05-30");
        cost.date = None;
        let created = repo.insert_new_cost(cost).await.unwrap();
        assert_eq!(created.date, chrono::Local::now().date_naive());
    }

    #[tokio::test]
    async fn month_window_filters_entries() {
        let (_tmp, repo) = setup().await;

        repo.insert_new_cost(new_cost(1.0, "2025-04-30")).await.unwrap();
        repo.insert_new_cost(new_cost(2.0, "2025-05-01")).await.unwrap();
        repo.insert_new_cost(new_cost(3.0, "2025-05-31")).await.unwrap();
        repo.insert_new_cost(new_cost(4.0, "2025-06-01")).await.unwrap();

        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let entries = repo.list_for_user_between(USER_ID, start, end).unwrap();

        let sums: Vec<f64> = entries.iter().map(|e| e.sum).collect();
        assert_eq!(sums, [2.0, 3.0]);
    }

    #[tokio::test]
    async fn insert_for_missing_user_violates_foreign_key() {
        let (_tmp, repo) = setup().await;

        let mut cost = new_cost(10.0, "2025-05-30");
        cost.userid = 999999;
        let err = repo.insert_new_cost(cost).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::ForeignKeyViolation(_))
        ));
    }
}
