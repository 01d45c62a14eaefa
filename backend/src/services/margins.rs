//! Margin deriver
//!
//! Joins each priced product against its representative vendor cost (the
//! minimum across vendor items, a stated business policy) and computes the
//! margin fields. Products without a default price are excluded entirely.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::analytics::{margin_amount, margin_percent};

use crate::error::AppResult;
use crate::models::ProductMargin;

#[derive(Clone)]
pub struct MarginService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct MarginRow {
    product_id: Uuid,
    name: String,
    sku: String,
    item_type: Option<String>,
    category_name: Option<String>,
    price: Decimal,
    cost: Option<Decimal>,
}

impl MarginService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Derive per-product margins, ordered by margin_percent descending with
    /// null margins last.
    pub async fn get_product_margins(&self, limit: usize) -> AppResult<Vec<ProductMargin>> {
        let rows = sqlx::query_as::<_, MarginRow>(
            r#"
            SELECT p.product_id, p.name, p.sku, p.item_type,
                   c.name AS category_name,
                   pp.unit_price AS price,
                   vi.cost
            FROM products p
            LEFT JOIN categories c ON c.category_id = p.category_id
            JOIN product_prices pp ON pp.product_id = p.product_id
                AND pp.price_type = 'Default'
            LEFT JOIN (
                SELECT product_id, MIN(cost) AS cost
                FROM vendor_items
                WHERE cost IS NOT NULL
                GROUP BY product_id
            ) vi ON vi.product_id = p.product_id
            WHERE pp.unit_price IS NOT NULL
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let mut margins: Vec<ProductMargin> = rows
            .into_iter()
            .map(|row| ProductMargin {
                margin_amount: margin_amount(row.price, row.cost),
                margin_percent: margin_percent(row.price, row.cost),
                product_id: row.product_id,
                name: row.name,
                sku: row.sku,
                item_type: row.item_type,
                category_name: row.category_name,
                price: row.price,
                cost: row.cost,
            })
            .collect();

        // Descending by margin_percent, nulls last
        margins.sort_by(|a, b| match (a.margin_percent, b.margin_percent) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        margins.truncate(limit);

        Ok(margins)
    }
}
