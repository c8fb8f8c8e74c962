//! Costs module - domain models, services, and traits.

mod costs_model;
mod costs_service;
mod costs_traits;

#[cfg(test)]
mod costs_model_tests;

pub use costs_model::{CostEntry, NewCost};
pub use costs_service::CostService;
pub use costs_traits::{CostRepositoryTrait, CostServiceTrait};
