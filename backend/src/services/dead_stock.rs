//! Dead-stock aging deriver
//!
//! Row per inventory line (product x location, split by lot), aged by the
//! date of the last movement touching that line's product and location.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::analytics::{classify_dead_stock, dead_stock_value, DeadStockTier};

use crate::error::AppResult;
use crate::models::DeadStockEntry;

#[derive(Clone)]
pub struct DeadStockService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct DeadStockRow {
    product_id: Uuid,
    sku: String,
    product_name: String,
    category_id: Option<Uuid>,
    category_name: Option<String>,
    location_id: Option<Uuid>,
    location_name: Option<String>,
    lot_number: Option<String>,
    quantity_on_hand: Decimal,
    unit_cost: Option<Decimal>,
    last_movement_date: Option<NaiveDate>,
}

impl DeadStockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Derive dead-stock lines, ordered by days idle descending with
    /// never-moved lines first. Lines idle under 30 days are excluded.
    pub async fn get_dead_stock(
        &self,
        tier: Option<DeadStockTier>,
        limit: usize,
    ) -> AppResult<Vec<DeadStockEntry>> {
        let rows = sqlx::query_as::<_, DeadStockRow>(
            r#"
            SELECT p.product_id, p.sku, p.name AS product_name,
                   p.category_id, c.name AS category_name,
                   il.location_id, l.name AS location_name, il.lot_number,
                   il.quantity_on_hand,
                   vi.cost AS unit_cost,
                   lm.last_movement_date
            FROM inventory_lines il
            JOIN products p ON p.product_id = il.product_id
            LEFT JOIN categories c ON c.category_id = p.category_id
            LEFT JOIN locations l ON l.location_id = il.location_id
            LEFT JOIN (
                SELECT product_id, MIN(cost) AS cost
                FROM vendor_items
                WHERE cost IS NOT NULL
                GROUP BY product_id
            ) vi ON vi.product_id = il.product_id
            LEFT JOIN (
                SELECT product_id, location_id, MAX(moved_at)::date AS last_movement_date
                FROM stock_movements
                GROUP BY product_id, location_id
            ) lm ON lm.product_id = il.product_id AND lm.location_id = il.location_id
            WHERE il.quantity_on_hand > 0
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let today = Utc::now().date_naive();

        let mut entries: Vec<DeadStockEntry> = rows
            .into_iter()
            .filter_map(|row| {
                let days_since_movement = row
                    .last_movement_date
                    .map(|date| (today - date).num_days());
                // Fresh lines drop out here; never-moved lines age into the
                // highest tier.
                let dead_stock_tier = classify_dead_stock(days_since_movement)?;
                Some(DeadStockEntry {
                    product_id: row.product_id,
                    sku: row.sku,
                    product_name: row.product_name,
                    category_id: row.category_id,
                    category_name: row.category_name,
                    location_id: row.location_id,
                    location_name: row.location_name,
                    lot_number: row.lot_number,
                    total_value: dead_stock_value(row.quantity_on_hand, row.unit_cost),
                    quantity_on_hand: row.quantity_on_hand,
                    unit_cost: row.unit_cost,
                    last_movement_date: row.last_movement_date,
                    days_since_movement,
                    dead_stock_tier,
                })
            })
            .filter(|entry| tier.map_or(true, |t| entry.dead_stock_tier == t))
            .collect();

        entries.sort_by_key(|entry| {
            std::cmp::Reverse(entry.days_since_movement.unwrap_or(i64::MAX))
        });
        entries.truncate(limit);

        Ok(entries)
    }
}
