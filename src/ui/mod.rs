//! Dashboard UI: fetches the reporting API and renders bar charts.

pub mod charts;
pub mod client;
pub mod page;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use client::ApiClient;

/// GET / — load every metric and render the page.
async fn index(State(client): State<ApiClient>) -> Response {
    let data = client::load_dashboard(&client).await;
    match page::render(&data) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Dashboard render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render dashboard").into_response()
        }
    }
}

/// Router serving the dashboard page backed by the given API client.
pub fn router(client: ApiClient) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
