//! Product margin view

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Margin between a product's default price and its representative cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMargin {
    pub product_id: Uuid,
    pub name: String,
    pub sku: String,
    pub item_type: Option<String>,
    pub category_name: Option<String>,
    pub price: Decimal,
    /// Minimum cost across the product's vendor items
    pub cost: Option<Decimal>,
    pub margin_amount: Option<Decimal>,
    pub margin_percent: Option<Decimal>,
}
