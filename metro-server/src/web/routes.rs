//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::dataset::DatasetError;
use crate::domain::StationId;
use crate::routing::RouteError;

use super::dto::*;
use super::state::AppState;
use super::templates::{AboutTemplate, IndexTemplate, StationOption};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(find_route))
        .route("/api/refresh", post(refresh_dataset))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route search form, dropdowns populated from the
/// current graph.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let graph = state.network().snapshot().await;
    let stations = graph.stations().map(StationOption::from_station).collect();

    Html(
        IndexTemplate { stations }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Full station listing for clients building their own UI.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let graph = state.network().snapshot().await;
    let stations = graph.stations().map(StationResult::from_station).collect();

    Json(StationListResponse { stations })
}

/// Compute a route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let source = StationId::parse(&req.from).map_err(|_| AppError::BadRequest {
        message: format!("Invalid source station id: {:?}", req.from),
    })?;
    let destination = StationId::parse(&req.to).map_err(|_| AppError::BadRequest {
        message: format!("Invalid destination station id: {:?}", req.to),
    })?;

    let outcome = state.router.find_route(&source, &destination).await?;

    let graph = state.network().snapshot().await;
    let response = RouteResponse::from_outcome(&outcome, |id| graph.station(id).ok());

    Ok(Json(response))
}

/// Re-fetch the dataset and rebuild the graph.
async fn refresh_dataset(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let stations = state.router.refresh().await?;
    Ok(Json(RefreshResponse { stations }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<DatasetError> for AppError {
    fn from(e: DatasetError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
