//! Category and location summary deriver
//!
//! Pure grouping and summing over the inventory status facts; no tiering.
//! These are small reference views, so no default row cap applies.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{CategorySummary, LocationSummary};

#[derive(Clone)]
pub struct SummaryService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    category_id: Uuid,
    category_name: String,
    is_active: bool,
    product_count: i64,
    total_on_hand: Decimal,
    total_available: Decimal,
    total_on_order: Decimal,
    total_reserved: Decimal,
}

#[derive(Debug, FromRow)]
struct LocationRow {
    location_id: Uuid,
    location_name: String,
    abbreviation: Option<String>,
    is_shippable: bool,
    is_receivable: bool,
    sku_count: i64,
    total_on_hand: Decimal,
    total_available: Decimal,
    total_on_order: Decimal,
    total_reserved: Decimal,
}

impl SummaryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Stock position per category, ordered by total on-hand descending
    pub async fn get_category_summary(&self) -> AppResult<Vec<CategorySummary>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT c.category_id, c.name AS category_name, c.is_active,
                   COUNT(DISTINCT p.product_id) AS product_count,
                   COALESCE(SUM(s.quantity_on_hand), 0) AS total_on_hand,
                   COALESCE(SUM(s.quantity_available), 0) AS total_available,
                   COALESCE(SUM(s.quantity_on_order), 0) AS total_on_order,
                   COALESCE(SUM(s.quantity_reserved), 0) AS total_reserved
            FROM categories c
            LEFT JOIN products p ON p.category_id = c.category_id
            LEFT JOIN product_inventory_status s ON s.product_id = p.product_id
            GROUP BY c.category_id, c.name, c.is_active
            ORDER BY total_on_hand DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CategorySummary {
                category_id: row.category_id,
                category_name: row.category_name,
                is_active: row.is_active,
                product_count: row.product_count,
                total_on_hand: row.total_on_hand,
                total_available: row.total_available,
                total_on_order: row.total_on_order,
                total_reserved: row.total_reserved,
            })
            .collect())
    }

    /// Stock position per location with distinct SKU counts and the
    /// shippable/receivable capability flags passed through unchanged
    pub async fn get_location_summary(&self) -> AppResult<Vec<LocationSummary>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT l.location_id, l.name AS location_name, l.abbreviation,
                   l.is_shippable, l.is_receivable,
                   COUNT(DISTINCT ls.product_id) AS sku_count,
                   COALESCE(SUM(ls.quantity_on_hand), 0) AS total_on_hand,
                   COALESCE(SUM(ls.quantity_available), 0) AS total_available,
                   COALESCE(SUM(ls.quantity_on_order), 0) AS total_on_order,
                   COALESCE(SUM(ls.quantity_reserved), 0) AS total_reserved
            FROM locations l
            LEFT JOIN location_inventory_status ls ON ls.location_id = l.location_id
            GROUP BY l.location_id, l.name, l.abbreviation, l.is_shippable, l.is_receivable
            ORDER BY total_on_hand DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| LocationSummary {
                location_id: row.location_id,
                location_name: row.location_name,
                abbreviation: row.abbreviation,
                is_shippable: row.is_shippable,
                is_receivable: row.is_receivable,
                sku_count: row.sku_count,
                total_on_hand: row.total_on_hand,
                total_available: row.total_available,
                total_on_order: row.total_on_order,
                total_reserved: row.total_reserved,
            })
            .collect())
    }
}
