//! Bill of materials rollup handlers

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::csv_or_json;
use crate::services::BomService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct BomQuery {
    pub product_id: Option<Uuid>,
    pub limit: Option<usize>,
    pub format: Option<String>,
}

/// Single-level BOM cost rollups
///
/// Without `product_id`, returns the per-parent summary. With it, returns
/// the component lines for that parent (empty when the parent has no BOM).
/// Both shapes honor `limit` and `format=csv`.
pub async fn get_bom_rollup(
    State(state): State<AppState>,
    Query(query): Query<BomQuery>,
) -> AppResult<Response> {
    let service = BomService::new(state.db.clone());
    let limit = query.limit.unwrap_or(state.config.analytics.default_result_cap);

    if let Some(parent_id) = query.product_id {
        let lines: Vec<_> = service
            .get_bom_detail(parent_id)
            .await?
            .into_iter()
            .take(limit)
            .collect();
        return csv_or_json(lines, "bom_components.csv", query.format.as_deref());
    }

    let summaries = service.get_bom_summary(limit).await?;
    csv_or_json(summaries, "bom_rollup.csv", query.format.as_deref())
}
