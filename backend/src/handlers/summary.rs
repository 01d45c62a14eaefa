//! Category and location rollup handlers

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::csv_or_json;
use crate::services::SummaryService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub format: Option<String>,
}

/// Inventory totals rolled up by product category
pub async fn get_category_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<impl IntoResponse> {
    let service = SummaryService::new(state.db.clone());
    let summaries = service.get_category_summary().await?;

    csv_or_json(summaries, "category_summary.csv", query.format.as_deref())
}

/// Inventory totals rolled up by stocking location
pub async fn get_location_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<impl IntoResponse> {
    let service = SummaryService::new(state.db.clone());
    let summaries = service.get_location_summary().await?;

    csv_or_json(summaries, "location_summary.csv", query.format.as_deref())
}
