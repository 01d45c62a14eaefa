//! Dead-stock aging rules

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lines idle for fewer days than this are not dead stock at all
pub const DEAD_STOCK_MIN_DAYS: i64 = 30;
pub const DEAD_STOCK_60_DAYS: i64 = 60;
pub const DEAD_STOCK_90_DAYS: i64 = 90;

/// Aging buckets; the highest qualifying tier wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeadStockTier {
    #[serde(rename = "30_DAYS")]
    ThirtyDays,
    #[serde(rename = "60_DAYS")]
    SixtyDays,
    #[serde(rename = "90_DAYS")]
    NinetyDays,
}

impl DeadStockTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadStockTier::ThirtyDays => "30_DAYS",
            DeadStockTier::SixtyDays => "60_DAYS",
            DeadStockTier::NinetyDays => "90_DAYS",
        }
    }

    /// Parse a caller-supplied filter value against the closed tier set
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "30_DAYS" => Some(DeadStockTier::ThirtyDays),
            "60_DAYS" => Some(DeadStockTier::SixtyDays),
            "90_DAYS" => Some(DeadStockTier::NinetyDays),
            _ => None,
        }
    }
}

/// Bucket a line by days since its last movement.
///
/// `None` days (no movement ever recorded) is indefinitely stale and lands
/// in the highest bucket. Lines under [`DEAD_STOCK_MIN_DAYS`] return `None`:
/// they are excluded from the view entirely.
pub fn classify_dead_stock(days_since_movement: Option<i64>) -> Option<DeadStockTier> {
    match days_since_movement {
        None => Some(DeadStockTier::NinetyDays),
        Some(days) if days >= DEAD_STOCK_90_DAYS => Some(DeadStockTier::NinetyDays),
        Some(days) if days >= DEAD_STOCK_60_DAYS => Some(DeadStockTier::SixtyDays),
        Some(days) if days >= DEAD_STOCK_MIN_DAYS => Some(DeadStockTier::ThirtyDays),
        Some(_) => None,
    }
}

/// Value at risk for a line; None propagates from an unknown unit cost
pub fn dead_stock_value(quantity_on_hand: Decimal, unit_cost: Option<Decimal>) -> Option<Decimal> {
    unit_cost.map(|cost| (quantity_on_hand * cost).round_dp(2))
}
