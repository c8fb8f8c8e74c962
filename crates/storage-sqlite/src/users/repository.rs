use costmanager_core::users::{NewUser, User, UserRepositoryTrait};
use costmanager_core::{Error, Result};

use super::model::UserDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: i64) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user_db = users::table
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        user_db.map(User::from).ok_or(Error::UserNotFound(user_id))
    }

    fn exists(&self, user_id: i64) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;

        let present = diesel::select(diesel::dsl::exists(users::table.find(user_id)))
            .get_result::<bool>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(present)
    }

    async fn insert_new_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let user_db: UserDB = new_user.into();
                let result_db = diesel::insert_into(users::table)
                    .values(&user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }
}
