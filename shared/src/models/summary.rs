//! Category and location rollup views

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock position summed per category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: Uuid,
    pub category_name: String,
    pub is_active: bool,
    pub product_count: i64,
    pub total_on_hand: Decimal,
    pub total_available: Decimal,
    pub total_on_order: Decimal,
    pub total_reserved: Decimal,
}

/// Stock position summed per location, with capability flags passed through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSummary {
    pub location_id: Uuid,
    pub location_name: String,
    pub abbreviation: Option<String>,
    pub is_shippable: bool,
    pub is_receivable: bool,
    pub sku_count: i64,
    pub total_on_hand: Decimal,
    pub total_available: Decimal,
    pub total_on_order: Decimal,
    pub total_reserved: Decimal,
}
