use crate::errors::Result;
use crate::reports::reports_model::MonthlyReport;

/// Trait for report service operations
pub trait ReportServiceTrait: Send + Sync {
    fn monthly_report(&self, user_id: i64, year: i32, month: u32) -> Result<MonthlyReport>;
}
