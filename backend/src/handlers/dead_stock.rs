//! Dead stock aging handlers

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use shared::analytics::DeadStockTier;

use crate::error::AppResult;
use crate::handlers::csv_or_json;
use crate::models::DeadStockEntry;
use crate::services::DeadStockService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeadStockQuery {
    pub tier: Option<String>,
    pub limit: Option<usize>,
    pub format: Option<String>,
}

/// Get stale inventory lines bucketed by age tier
pub async fn get_dead_stock(
    State(state): State<AppState>,
    Query(query): Query<DeadStockQuery>,
) -> AppResult<Response> {
    // An unrecognized tier value yields an empty sequence, never an error,
    // in whichever format the caller asked for
    let tier = match query.tier.as_deref() {
        Some(raw) => match DeadStockTier::parse(raw) {
            Some(tier) => Some(tier),
            None => {
                return csv_or_json(
                    Vec::<DeadStockEntry>::new(),
                    "dead_stock.csv",
                    query.format.as_deref(),
                )
            }
        },
        None => None,
    };

    let service = DeadStockService::new(state.db.clone());
    let limit = query.limit.unwrap_or(state.config.analytics.default_result_cap);
    let entries = service.get_dead_stock(tier, limit).await?;

    csv_or_json(entries, "dead_stock.csv", query.format.as_deref())
}
