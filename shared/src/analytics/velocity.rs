//! Sales velocity tiering rules

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalization base for the daily average; 7d/90d are reported but not
/// used for the average.
pub const VELOCITY_WINDOW_DAYS: i64 = 30;

/// Qualitative buckets summarizing a product's sales rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VelocityTier {
    Fast,
    Medium,
    Slow,
    Dead,
}

impl VelocityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            VelocityTier::Fast => "FAST",
            VelocityTier::Medium => "MEDIUM",
            VelocityTier::Slow => "SLOW",
            VelocityTier::Dead => "DEAD",
        }
    }

    /// Parse a caller-supplied filter value against the closed tier set
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FAST" => Some(VelocityTier::Fast),
            "MEDIUM" => Some(VelocityTier::Medium),
            "SLOW" => Some(VelocityTier::Slow),
            "DEAD" => Some(VelocityTier::Dead),
            _ => None,
        }
    }
}

/// Tiering cutoffs on 30-day sold quantity; a configuration surface,
/// not hardcoded into the classification rule
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityThresholds {
    /// sold_30d at or above this is a fast mover
    pub fast_sold_30d: Decimal,
    /// sold_30d at or below this (with any 90-day sales) is a slow mover
    pub slow_sold_30d: Decimal,
}

impl Default for VelocityThresholds {
    fn default() -> Self {
        Self {
            fast_sold_30d: Decimal::from(60),
            slow_sold_30d: Decimal::from(6),
        }
    }
}

/// 30-day sold quantity normalized to a per-day rate, 2 decimal places
pub fn avg_daily_sales(sold_30d: Decimal) -> Decimal {
    (sold_30d / Decimal::from(VELOCITY_WINDOW_DAYS)).round_dp(2)
}

/// Days until on-hand stock is exhausted at the current rate, 1 decimal
/// place; None when the rate is zero
pub fn days_of_stock(quantity_on_hand: Decimal, avg_daily_sales: Decimal) -> Option<Decimal> {
    if avg_daily_sales > Decimal::ZERO {
        Some((quantity_on_hand / avg_daily_sales).round_dp(1))
    } else {
        None
    }
}

/// Assign a velocity tier; arms are mutually exclusive and evaluated in order
pub fn classify_velocity(
    sold_30d: Decimal,
    sold_90d: Decimal,
    thresholds: &VelocityThresholds,
) -> VelocityTier {
    if sold_30d >= thresholds.fast_sold_30d {
        VelocityTier::Fast
    } else if sold_90d == Decimal::ZERO {
        VelocityTier::Dead
    } else if sold_30d <= thresholds.slow_sold_30d {
        VelocityTier::Slow
    } else {
        VelocityTier::Medium
    }
}
