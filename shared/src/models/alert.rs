//! Reorder alert views

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product whose current quantity has fallen below its reorder point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderAlert {
    pub product_id: Uuid,
    pub sku: String,
    pub name: String,
    pub current_quantity: Decimal,
    pub reorder_point: Decimal,
    /// Configured replenishment quantity for the product
    pub reorder_quantity: Decimal,
}

/// A location-scoped reorder alert with shortfall math and vendor context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReorderAlert {
    pub product_id: Uuid,
    pub sku: String,
    pub product_name: String,
    pub category_id: Option<Uuid>,
    pub location_id: Uuid,
    pub location_name: String,
    pub location_abbreviation: Option<String>,
    pub quantity_on_hand: Decimal,
    pub quantity_available: Decimal,
    pub quantity_on_order: Decimal,
    pub quantity_in_transit: Decimal,
    pub reorder_point: Decimal,
    pub reorder_quantity: Decimal,
    /// max(0, reorder_point - quantity_on_hand)
    pub shortfall_quantity: Decimal,
    /// Never less than the shortfall, net of stock already inbound
    pub suggested_order_quantity: Decimal,
    pub preferred_vendor_id: Option<Uuid>,
    pub vendor_name: Option<String>,
    pub vendor_code: Option<String>,
    pub vendor_item_code: Option<String>,
    pub vendor_cost: Option<Decimal>,
    pub lead_time_days: Option<i32>,
}
