//! Sales velocity deriver
//!
//! Aggregates sale movements over trailing 7/30/90-day windows per product,
//! then applies the tiering rules from `shared::analytics`.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::analytics::{avg_daily_sales, classify_velocity, days_of_stock, VelocityThresholds, VelocityTier};

use crate::error::AppResult;
use crate::models::{MovementType, ProductVelocity};

/// Velocity service; thresholds come from configuration, not the rule
#[derive(Clone)]
pub struct VelocityService {
    db: PgPool,
    thresholds: VelocityThresholds,
}

/// Raw window aggregates per product
#[derive(Debug, FromRow)]
struct VelocityRow {
    product_id: Uuid,
    sku: String,
    product_name: String,
    category_id: Option<Uuid>,
    category_name: Option<String>,
    quantity_on_hand: Decimal,
    sold_7d: Decimal,
    sold_30d: Decimal,
    sold_90d: Decimal,
    last_sale_date: Option<DateTime<Utc>>,
}

impl VelocityService {
    pub fn new(db: PgPool, thresholds: VelocityThresholds) -> Self {
        Self { db, thresholds }
    }

    /// Derive per-product velocity, ordered by sold_90d descending.
    ///
    /// `tier` is an already-validated filter; unrecognized caller values are
    /// rejected to an empty result before reaching this service.
    pub async fn get_product_velocity(
        &self,
        tier: Option<VelocityTier>,
        limit: usize,
    ) -> AppResult<Vec<ProductVelocity>> {
        let now = Utc::now();
        let cutoff_7d = now - Duration::days(7);
        let cutoff_30d = now - Duration::days(30);
        let cutoff_90d = now - Duration::days(90);

        let rows = sqlx::query_as::<_, VelocityRow>(
            r#"
            SELECT p.product_id, p.sku, p.name AS product_name,
                   p.category_id, c.name AS category_name,
                   COALESCE(s.quantity_on_hand, 0) AS quantity_on_hand,
                   COALESCE(SUM(ABS(m.quantity)) FILTER (WHERE m.moved_at >= $1), 0) AS sold_7d,
                   COALESCE(SUM(ABS(m.quantity)) FILTER (WHERE m.moved_at >= $2), 0) AS sold_30d,
                   COALESCE(SUM(ABS(m.quantity)), 0) AS sold_90d,
                   ls.last_sale_date
            FROM products p
            LEFT JOIN categories c ON c.category_id = p.category_id
            LEFT JOIN product_inventory_status s ON s.product_id = p.product_id
            LEFT JOIN stock_movements m ON m.product_id = p.product_id
                AND m.movement_type = $3
                AND m.moved_at >= $4
            LEFT JOIN (
                SELECT product_id, MAX(moved_at) AS last_sale_date
                FROM stock_movements
                WHERE movement_type = $3
                GROUP BY product_id
            ) ls ON ls.product_id = p.product_id
            GROUP BY p.product_id, p.sku, p.name, p.category_id, c.name,
                     s.quantity_on_hand, ls.last_sale_date
            ORDER BY sold_90d DESC
            "#,
        )
        .bind(cutoff_7d)
        .bind(cutoff_30d)
        .bind(MovementType::Sale.as_str())
        .bind(cutoff_90d)
        .fetch_all(&self.db)
        .await?;

        let products = rows
            .into_iter()
            .map(|row| {
                let avg = avg_daily_sales(row.sold_30d);
                ProductVelocity {
                    product_id: row.product_id,
                    sku: row.sku,
                    product_name: row.product_name,
                    category_id: row.category_id,
                    category_name: row.category_name,
                    days_of_stock: days_of_stock(row.quantity_on_hand, avg),
                    velocity_tier: classify_velocity(row.sold_30d, row.sold_90d, &self.thresholds),
                    quantity_on_hand: row.quantity_on_hand,
                    sold_7d: row.sold_7d,
                    sold_30d: row.sold_30d,
                    sold_90d: row.sold_90d,
                    avg_daily_sales: avg,
                    last_sale_date: row.last_sale_date,
                }
            })
            .filter(|p| tier.map_or(true, |t| p.velocity_tier == t))
            .take(limit)
            .collect();

        Ok(products)
    }
}
