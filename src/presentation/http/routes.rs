//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(company_routes())
        .merge(invoice_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Company routes
fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(handlers::company::list_companies).post(handlers::company::create_company),
        )
        .route(
            "/companies/{code}",
            get(handlers::company::get_company)
                .put(handlers::company::update_company)
                .delete(handlers::company::delete_company),
        )
}

/// Invoice routes
fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invoices",
            get(handlers::invoice::list_invoices).post(handlers::invoice::create_invoice),
        )
        .route(
            "/invoices/{id}",
            get(handlers::invoice::get_invoice)
                .put(handlers::invoice::update_invoice)
                .delete(handlers::invoice::delete_invoice),
        )
}
