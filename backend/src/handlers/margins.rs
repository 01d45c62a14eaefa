//! Product margin handlers

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::csv_or_json;
use crate::services::MarginService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MarginQuery {
    pub limit: Option<usize>,
    pub format: Option<String>,
}

/// Get per-product margins, highest margin percent first
pub async fn get_product_margins(
    State(state): State<AppState>,
    Query(query): Query<MarginQuery>,
) -> AppResult<impl IntoResponse> {
    let service = MarginService::new(state.db.clone());
    let limit = query.limit.unwrap_or(state.config.analytics.default_result_cap);
    let margins = service.get_product_margins(limit).await?;

    csv_or_json(margins, "product_margins.csv", query.format.as_deref())
}
