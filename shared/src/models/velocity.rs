//! Sales velocity view

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::VelocityTier;

/// Per-product sales velocity over trailing 7/30/90-day windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVelocity {
    pub product_id: Uuid,
    pub sku: String,
    pub product_name: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub quantity_on_hand: Decimal,
    pub sold_7d: Decimal,
    pub sold_30d: Decimal,
    pub sold_90d: Decimal,
    pub avg_daily_sales: Decimal,
    /// None when there are no sales in the 30-day window
    pub days_of_stock: Option<Decimal>,
    pub last_sale_date: Option<DateTime<Utc>>,
    pub velocity_tier: VelocityTier,
}
