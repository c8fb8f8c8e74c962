use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserDetails};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::costs::CostRepositoryTrait;
use crate::errors::Result;

/// Service for reading users and their aggregate spending.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    cost_repository: Arc<dyn CostRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        cost_repository: Arc<dyn CostRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            cost_repository,
        }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    /// Retrieves a user by id
    fn get_user(&self, user_id: i64) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    /// Retrieves a user together with the sum of all their cost entries
    fn get_user_details(&self, user_id: i64) -> Result<UserDetails> {
        let user = self.repository.get_by_id(user_id)?;
        let total = self.cost_repository.total_for_user(user_id)?;
        Ok(UserDetails {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            total,
        })
    }

    /// Inserts the user unless a user with that id already exists
    async fn ensure_user(&self, new_user: NewUser) -> Result<User> {
        if self.repository.exists(new_user.id)? {
            debug!("User {} already present, skipping insert", new_user.id);
            return self.repository.get_by_id(new_user.id);
        }
        self.repository.insert_new_user(new_user).await
    }
}
