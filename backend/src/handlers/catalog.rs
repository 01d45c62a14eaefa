//! Reference listing handlers over the raw fact tables

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{OrderHeader, OrderStatus};
use crate::services::CatalogService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub product_id: Option<Uuid>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct MovementQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub status: Option<String>,
    pub limit: Option<usize>,
}

/// Per-product inventory positions, or the line-level detail for one product
pub async fn get_inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<impl IntoResponse> {
    let service = CatalogService::new(state.db.clone());

    if let Some(product_id) = query.product_id {
        let lines = service.get_inventory_detail(product_id).await?;
        return Ok(Json(lines).into_response());
    }

    let statuses = service.list_inventory_status(query.limit).await?;
    Ok(Json(statuses).into_response())
}

/// The stock movement ledger, most recent first
pub async fn get_movements(
    State(state): State<AppState>,
    Query(query): Query<MovementQuery>,
) -> AppResult<impl IntoResponse> {
    let service = CatalogService::new(state.db.clone());
    let limit = query.limit.unwrap_or(state.config.analytics.default_result_cap);
    let movements = service.list_movements(Some(limit)).await?;
    Ok(Json(movements))
}

/// Order history, optionally restricted to one status
pub async fn get_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<impl IntoResponse> {
    // An unrecognized status value yields an empty sequence, never an error
    let status = match query.status.as_deref() {
        Some(raw) => match OrderStatus::parse(raw) {
            Some(status) => Some(status),
            None => return Ok(Json(Vec::<OrderHeader>::new())),
        },
        None => None,
    };

    let service = CatalogService::new(state.db.clone());
    let limit = query.limit.unwrap_or(state.config.analytics.default_result_cap);
    let orders = service.list_orders(status, Some(limit)).await?;
    Ok(Json(orders))
}
