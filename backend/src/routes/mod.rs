//! Route definitions for the Inventory Analytics Service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Reorder alerts
        .route("/alerts", get(handlers::get_reorder_alerts))
        // Per-location views
        .nest("/locations", location_routes())
        // Derived analytics views
        .nest("/analytics", analytics_routes())
        // BOM cost rollups
        .route("/bom", get(handlers::get_bom_rollup))
        // Raw fact listings
        .route("/inventory", get(handlers::get_inventory))
        .route("/movements", get(handlers::get_movements))
        .route("/orders", get(handlers::get_orders))
}

/// Location-scoped views
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", get(handlers::get_location_reorder_alerts))
        .route("/summary", get(handlers::get_location_summary))
}

/// Derived analytics views
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/velocity", get(handlers::get_product_velocity))
        .route("/dead-stock", get(handlers::get_dead_stock))
        .route("/margins", get(handlers::get_product_margins))
        .route("/categories", get(handlers::get_category_summary))
}
