use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use costmanager_core::constants::{
    DEFAULT_USER_FIRST_NAME, DEFAULT_USER_ID, DEFAULT_USER_LAST_NAME,
};
use costmanager_core::costs::{CostService, CostServiceTrait};
use costmanager_core::reports::{ReportService, ReportServiceTrait};
use costmanager_core::users::{NewUser, UserService, UserServiceTrait};
use costmanager_storage_sqlite::costs::CostRepository;
use costmanager_storage_sqlite::db::{self, spawn_writer};
use costmanager_storage_sqlite::users::UserRepository;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub cost_service: Arc<dyn CostServiceTrait + Send + Sync>,
    pub report_service: Arc<dyn ReportServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("CM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let cost_repository = Arc::new(CostRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        cost_repository.clone(),
    ));
    let cost_service = Arc::new(CostService::new(
        cost_repository.clone(),
        user_repository.clone(),
    ));
    let report_service = Arc::new(ReportService::new(user_repository, cost_repository));

    // Seed the built-in demo user on first run.
    user_service
        .ensure_user(NewUser {
            id: DEFAULT_USER_ID,
            first_name: DEFAULT_USER_FIRST_NAME.to_string(),
            last_name: DEFAULT_USER_LAST_NAME.to_string(),
            birthday: None,
            marital_status: None,
        })
        .await?;

    Ok(Arc::new(AppState {
        user_service,
        cost_service,
        report_service,
        db_path,
    }))
}
