pub mod health;
pub mod report;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn fallback() -> AppError {
    AppError::NotFound("route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/report", post(report::handle_full_report))
        .route("/api/v1/report/ats", post(report::handle_ats_report))
        .route(
            "/api/v1/report/details",
            post(report::handle_details_report),
        )
        .fallback(fallback)
        .with_state(state)
}
