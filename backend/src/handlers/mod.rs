//! HTTP handlers for the Inventory Analytics Service

mod alerts;
mod bom;
mod catalog;
mod dead_stock;
mod health;
mod margins;
mod summary;
mod velocity;

pub use alerts::*;
pub use bom::*;
pub use catalog::*;
pub use dead_stock::*;
pub use health::*;
pub use margins::*;
pub use summary::*;
pub use velocity::*;

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::services::export;

/// Render a derived view as JSON, or as a CSV attachment when
/// `format=csv` was requested
pub fn csv_or_json<T: Serialize>(
    data: Vec<T>,
    filename: &str,
    format: Option<&str>,
) -> AppResult<Response> {
    if format == Some("csv") {
        let csv = export::to_csv(&data)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}
