//! CSV export for derived views

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Serialize a derived view as CSV with a header row.
///
/// The header row is derived from the first record, so an empty view renders
/// as an empty body rather than a lone header line.
pub fn to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in data {
        wtr.serialize(record)
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
    }
    let csv_data = String::from_utf8(
        wtr.into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
    )
    .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
    Ok(csv_data)
}
