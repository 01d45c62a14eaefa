//! Bill-of-materials cost rollup views

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-parent rollup across its BOM edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomRollupSummary {
    pub product_id: Uuid,
    pub name: String,
    pub sku: String,
    pub item_type: Option<String>,
    pub category_name: Option<String>,
    pub component_count: i64,
    /// Sum of line costs; undercounts when any child cost is unknown
    pub total_bom_cost: Decimal,
}

/// A single BOM edge with its costed line
///
/// Children are costed as leaves: a child that is itself an assembly is not
/// exploded recursively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomRollupLine {
    pub item_bom_id: Uuid,
    pub parent_product_id: Uuid,
    pub parent_name: String,
    pub parent_sku: String,
    pub child_product_id: Uuid,
    pub child_name: String,
    pub child_sku: String,
    pub quantity: Decimal,
    pub uom_name: Option<String>,
    pub component_cost: Option<Decimal>,
    pub line_cost: Decimal,
}
