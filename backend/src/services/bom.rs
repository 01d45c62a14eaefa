//! BOM cost rollup deriver
//!
//! Children are costed as leaves: a child that is itself an assembly is not
//! exploded recursively. Unknown child costs count as zero, so a parent's
//! total undercounts rather than failing.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::analytics::line_cost;

use crate::error::AppResult;
use crate::models::{BomRollupLine, BomRollupSummary};

#[derive(Clone)]
pub struct BomService {
    db: PgPool,
}

/// One BOM edge with parent context, ordered by parent for grouping
#[derive(Debug, FromRow)]
struct SummaryEdgeRow {
    parent_product_id: Uuid,
    parent_name: String,
    parent_sku: String,
    item_type: Option<String>,
    category_name: Option<String>,
    quantity: Decimal,
    component_cost: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct DetailEdgeRow {
    item_bom_id: Uuid,
    parent_product_id: Uuid,
    parent_name: String,
    parent_sku: String,
    child_product_id: Uuid,
    child_name: String,
    child_sku: String,
    quantity: Decimal,
    uom_name: Option<String>,
    component_cost: Option<Decimal>,
}

impl BomService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Rollup across all parents with at least one BOM edge, ordered by
    /// component count descending.
    pub async fn get_bom_summary(&self, limit: usize) -> AppResult<Vec<BomRollupSummary>> {
        let rows = sqlx::query_as::<_, SummaryEdgeRow>(
            r#"
            SELECT b.product_id AS parent_product_id,
                   p.name AS parent_name, p.sku AS parent_sku,
                   p.item_type, c.name AS category_name,
                   b.quantity,
                   vi.cost AS component_cost
            FROM item_boms b
            JOIN products p ON p.product_id = b.product_id
            LEFT JOIN categories c ON c.category_id = p.category_id
            LEFT JOIN (
                SELECT product_id, MIN(cost) AS cost
                FROM vendor_items
                WHERE cost IS NOT NULL
                GROUP BY product_id
            ) vi ON vi.product_id = b.child_product_id
            ORDER BY b.product_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        // Rows arrive grouped by parent; fold each run into one summary.
        let mut summaries: Vec<BomRollupSummary> = Vec::new();
        for row in rows {
            let cost = line_cost(row.quantity, row.component_cost);
            match summaries.last_mut() {
                Some(summary) if summary.product_id == row.parent_product_id => {
                    summary.component_count += 1;
                    summary.total_bom_cost += cost;
                }
                _ => summaries.push(BomRollupSummary {
                    product_id: row.parent_product_id,
                    name: row.parent_name,
                    sku: row.parent_sku,
                    item_type: row.item_type,
                    category_name: row.category_name,
                    component_count: 1,
                    total_bom_cost: cost,
                }),
            }
        }

        summaries.sort_by_key(|summary| std::cmp::Reverse(summary.component_count));
        summaries.truncate(limit);

        Ok(summaries)
    }

    /// Every edge for one parent with its costed line, ordered by child name.
    /// A parent with no BOM yields an empty list, not an error.
    pub async fn get_bom_detail(&self, parent_id: Uuid) -> AppResult<Vec<BomRollupLine>> {
        let rows = sqlx::query_as::<_, DetailEdgeRow>(
            r#"
            SELECT b.item_bom_id,
                   b.product_id AS parent_product_id,
                   pp.name AS parent_name, pp.sku AS parent_sku,
                   b.child_product_id,
                   pc.name AS child_name, pc.sku AS child_sku,
                   b.quantity, b.uom_name,
                   vi.cost AS component_cost
            FROM item_boms b
            JOIN products pp ON pp.product_id = b.product_id
            JOIN products pc ON pc.product_id = b.child_product_id
            LEFT JOIN (
                SELECT product_id, MIN(cost) AS cost
                FROM vendor_items
                WHERE cost IS NOT NULL
                GROUP BY product_id
            ) vi ON vi.product_id = b.child_product_id
            WHERE b.product_id = $1
            ORDER BY pc.name
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.db)
        .await?;

        let lines = rows
            .into_iter()
            .map(|row| BomRollupLine {
                line_cost: line_cost(row.quantity, row.component_cost),
                item_bom_id: row.item_bom_id,
                parent_product_id: row.parent_product_id,
                parent_name: row.parent_name,
                parent_sku: row.parent_sku,
                child_product_id: row.child_product_id,
                child_name: row.child_name,
                child_sku: row.child_sku,
                quantity: row.quantity,
                uom_name: row.uom_name,
                component_cost: row.component_cost,
            })
            .collect();

        Ok(lines)
    }
}
