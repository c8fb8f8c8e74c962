use log::debug;
use std::sync::Arc;

use super::costs_model::{CostEntry, NewCost};
use super::costs_traits::{CostRepositoryTrait, CostServiceTrait};
use crate::errors::{Error, Result};
use crate::users::UserRepositoryTrait;

/// Service for recording cost entries.
pub struct CostService {
    repository: Arc<dyn CostRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl CostService {
    /// Creates a new CostService instance
    pub fn new(
        repository: Arc<dyn CostRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }
}

#[async_trait::async_trait]
impl CostServiceTrait for CostService {
    /// Records a new cost for an existing user
    async fn add_cost(&self, new_cost: NewCost) -> Result<CostEntry> {
        new_cost.validate()?;

        if !self.user_repository.exists(new_cost.userid)? {
            return Err(Error::UserNotFound(new_cost.userid));
        }

        debug!(
            "Adding cost of {} in '{}' for user {}",
            new_cost.sum, new_cost.category, new_cost.userid
        );
        self.repository.insert_new_cost(new_cost).await
    }
}
