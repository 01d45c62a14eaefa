//! Reorder alert handlers

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::csv_or_json;
use crate::services::AlertService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub limit: Option<usize>,
    pub format: Option<String>,
}

/// Products whose on-hand quantity has fallen below their reorder point
pub async fn get_reorder_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<impl IntoResponse> {
    let service = AlertService::new(state.db.clone());
    let alerts = service.get_reorder_alerts(query.limit).await?;

    csv_or_json(alerts, "reorder_alerts.csv", query.format.as_deref())
}

/// Per-location reorder alerts enriched with preferred vendor context
pub async fn get_location_reorder_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<impl IntoResponse> {
    let service = AlertService::new(state.db.clone());
    let alerts = service.get_location_reorder_alerts().await?;
    let alerts = match query.limit {
        Some(limit) => alerts.into_iter().take(limit).collect(),
        None => alerts,
    };

    csv_or_json(alerts, "location_reorder_alerts.csv", query.format.as_deref())
}
