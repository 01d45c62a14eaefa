//! Raw inventory status facts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-product inventory position with reorder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInventoryStatus {
    pub product_id: Uuid,
    pub sku: String,
    pub name: String,
    pub item_type: Option<String>,
    pub category_id: Option<Uuid>,
    pub quantity_on_hand: Decimal,
    pub quantity_available: Decimal,
    pub quantity_on_order: Decimal,
    pub quantity_reserved: Decimal,
    pub reorder_point: Option<Decimal>,
    pub reorder_quantity: Option<Decimal>,
}

/// Quantity on hand at a (product, location, sublocation, lot?, serial?) tuple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLine {
    pub product_id: Uuid,
    pub location_id: Uuid,
    pub sublocation: Option<String>,
    pub lot_number: Option<String>,
    pub serial_number: Option<String>,
    pub quantity_on_hand: Decimal,
}
