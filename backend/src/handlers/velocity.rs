//! Sales velocity handlers

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use shared::analytics::VelocityTier;

use crate::error::AppResult;
use crate::handlers::csv_or_json;
use crate::models::ProductVelocity;
use crate::services::VelocityService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VelocityQuery {
    pub tier: Option<String>,
    pub limit: Option<usize>,
    pub format: Option<String>,
}

/// Get per-product sales velocity, optionally filtered by tier
pub async fn get_product_velocity(
    State(state): State<AppState>,
    Query(query): Query<VelocityQuery>,
) -> AppResult<Response> {
    // An unrecognized tier value yields an empty sequence, never an error,
    // in whichever format the caller asked for
    let tier = match query.tier.as_deref() {
        Some(raw) => match VelocityTier::parse(raw) {
            Some(tier) => Some(tier),
            None => {
                return csv_or_json(
                    Vec::<ProductVelocity>::new(),
                    "product_velocity.csv",
                    query.format.as_deref(),
                )
            }
        },
        None => None,
    };

    let service = VelocityService::new(
        state.db.clone(),
        state.config.analytics.velocity_thresholds(),
    );
    let limit = query.limit.unwrap_or(state.config.analytics.default_result_cap);
    let products = service.get_product_velocity(tier, limit).await?;

    csv_or_json(products, "product_velocity.csv", query.format.as_deref())
}
