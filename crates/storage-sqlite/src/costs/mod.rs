//! SQLite storage implementation for cost entries.

mod model;
mod repository;

pub use model::{CostDB, NewCostDB};
pub use repository::CostRepository;
