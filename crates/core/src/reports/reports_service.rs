use chrono::{Datelike, NaiveDate};
use log::debug;
use std::sync::Arc;

use super::reports_model::{CategoryCosts, MonthlyReport, ReportItem};
use super::reports_traits::ReportServiceTrait;
use crate::constants::COST_CATEGORIES;
use crate::costs::{CostEntry, CostRepositoryTrait};
use crate::errors::{Result, ValidationError};
use crate::users::UserRepositoryTrait;

/// Service materializing per-month cost reports.
pub struct ReportService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    cost_repository: Arc<dyn CostRepositoryTrait>,
}

impl ReportService {
    /// Creates a new ReportService instance
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        cost_repository: Arc<dyn CostRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            cost_repository,
        }
    }
}

/// First day of the given month and of the following one, i.e. the half-open
/// date range covering exactly that calendar month.
pub(crate) fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let invalid =
        || ValidationError::InvalidInput(format!("Invalid year/month: {}-{}", year, month));
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    Ok((start, end))
}

/// Groups entries into the fixed category list, preserving entry order.
/// Every category appears in the result, empty or not.
pub(crate) fn group_by_category(entries: Vec<CostEntry>) -> Vec<CategoryCosts> {
    COST_CATEGORIES
        .iter()
        .map(|&category| CategoryCosts {
            category: category.to_string(),
            items: entries
                .iter()
                .filter(|entry| entry.category == category)
                .map(|entry| ReportItem {
                    sum: entry.sum,
                    description: entry.description.clone(),
                    day: entry.date.day(),
                })
                .collect(),
        })
        .collect()
}

impl ReportServiceTrait for ReportService {
    /// Builds the report for one user and calendar month
    fn monthly_report(&self, user_id: i64, year: i32, month: u32) -> Result<MonthlyReport> {
        self.user_repository.get_by_id(user_id)?;
        let (start, end) = month_bounds(year, month)?;
        debug!("Building report for user {} over {}..{}", user_id, start, end);
        let entries = self
            .cost_repository
            .list_for_user_between(user_id, start, end)?;
        Ok(MonthlyReport {
            userid: user_id,
            year,
            month,
            costs: group_by_category(entries),
        })
    }
}
