use crate::costs::costs_model::{CostEntry, NewCost};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for cost repository operations
#[async_trait]
pub trait CostRepositoryTrait: Send + Sync {
    async fn insert_new_cost(&self, new_cost: NewCost) -> Result<CostEntry>;
    fn total_for_user(&self, user_id: i64) -> Result<f64>;
    fn list_for_user_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CostEntry>>;
}

/// Trait for cost service operations
#[async_trait]
pub trait CostServiceTrait: Send + Sync {
    async fn add_cost(&self, new_cost: NewCost) -> Result<CostEntry>;
}
