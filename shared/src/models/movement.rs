//! Stock movement facts

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Types of stock movements recorded by the ingestion process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Sale,
    Purchase,
    Transfer,
    Adjustment,
    Build,
    Unbuild,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Sale => "sale",
            MovementType::Purchase => "purchase",
            MovementType::Transfer => "transfer",
            MovementType::Adjustment => "adjustment",
            MovementType::Build => "build",
            MovementType::Unbuild => "unbuild",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sale" => Some(MovementType::Sale),
            "purchase" => Some(MovementType::Purchase),
            "transfer" => Some(MovementType::Transfer),
            "adjustment" => Some(MovementType::Adjustment),
            "build" => Some(MovementType::Build),
            "unbuild" => Some(MovementType::Unbuild),
            _ => None,
        }
    }
}

/// A signed quantity delta against a product, with the document that caused it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub movement_id: Uuid,
    pub product_id: Uuid,
    pub sku: String,
    pub product_name: String,
    pub location_id: Option<Uuid>,
    pub location_name: Option<String>,
    pub movement_type: MovementType,
    /// Signed delta: sales and transfer-outs are negative
    pub quantity: Decimal,
    pub reference_type: Option<String>,
    pub reference_id: Option<Uuid>,
    pub moved_at: DateTime<Utc>,
}
