use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::ApiResult,
    main_lib::AppState,
    models::{AddCostRequest, CostResponse, ReportQuery, TeamMember, UserDetails},
};
use costmanager_core::costs::NewCost;
use costmanager_core::reports::MonthlyReport;
use costmanager_core::team;

#[utoipa::path(get, path = "/api/about", responses((status = 200, body = [TeamMember])))]
async fn about() -> Json<Vec<TeamMember>> {
    Json(
        team::team_members()
            .into_iter()
            .map(TeamMember::from)
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, body = UserDetails), (status = 404, description = "Unknown user"))
)]
async fn get_user(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserDetails>> {
    let details = state.user_service.get_user_details(id)?;
    Ok(Json(details.into()))
}

#[utoipa::path(
    post,
    path = "/api/add",
    request_body = AddCostRequest,
    responses(
        (status = 201, body = CostResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Unknown user")
    )
)]
async fn add_cost(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddCostRequest>,
) -> ApiResult<(StatusCode, Json<CostResponse>)> {
    let new_cost: NewCost = payload.try_into()?;
    let created = state.cost_service.add_cost(new_cost).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Monthly report for the user"),
        (status = 404, description = "Unknown user")
    )
)]
async fn monthly_report(
    Query(query): Query<ReportQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlyReport>> {
    let report = state
        .report_service
        .monthly_report(query.id, query.year, query.month)?;
    Ok(Json(report))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(about, get_user, add_cost, monthly_report),
    components(schemas(TeamMember, UserDetails, AddCostRequest, CostResponse)),
    tags((name = "costmanager"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/about", get(about))
        .route("/users/{id}", get(get_user))
        .route("/add", post(add_cost))
        .route("/report", get(monthly_report));

    Router::new()
        .nest("/api", api)
        // Older clients fetch the roster without the /api prefix.
        .route("/about", get(about))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
