//! Route definitions for the reporting API.

pub mod health;
pub mod reports;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full API router over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let report_routes = Router::new()
        .route("/kpis", get(reports::kpis))
        .route("/monthly-revenue", get(reports::monthly_revenue))
        .route("/mom-growth", get(reports::mom_growth))
        .route("/revenue-by-country", get(reports::revenue_by_country))
        .route("/top-customers", get(reports::top_customers));

    Router::new()
        .route("/", get(health::root))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api", report_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
