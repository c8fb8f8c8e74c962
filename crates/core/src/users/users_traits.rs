use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserDetails};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: i64) -> Result<User>;
    fn exists(&self, user_id: i64) -> Result<bool>;
    async fn insert_new_user(&self, new_user: NewUser) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: i64) -> Result<User>;
    fn get_user_details(&self, user_id: i64) -> Result<UserDetails>;
    async fn ensure_user(&self, new_user: NewUser) -> Result<User>;
}
