//! Dead-stock aging view

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::DeadStockTier;

/// An inventory line with no recent movement, aged into a tier
///
/// One row per (product, location, lot) line, not aggregated per product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadStockEntry {
    pub product_id: Uuid,
    pub sku: String,
    pub product_name: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub location_id: Option<Uuid>,
    pub location_name: Option<String>,
    pub lot_number: Option<String>,
    pub quantity_on_hand: Decimal,
    /// Minimum cost across the product's vendor items
    pub unit_cost: Option<Decimal>,
    pub total_value: Option<Decimal>,
    pub last_movement_date: Option<NaiveDate>,
    /// None when the line has never moved (indefinitely stale)
    pub days_since_movement: Option<i64>,
    pub dead_stock_tier: DeadStockTier,
}
