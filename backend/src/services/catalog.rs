//! Read-only reference listings over the raw fact tables
//!
//! These feed the list pages of the dashboard; no derivation beyond joins
//! for display names.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    InventoryLine, MovementType, OrderHeader, OrderKind, OrderStatus, ProductInventoryStatus,
    StockMovement,
};

#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct MovementRow {
    movement_id: Uuid,
    product_id: Uuid,
    sku: String,
    product_name: String,
    location_id: Option<Uuid>,
    location_name: Option<String>,
    movement_type: String,
    quantity: Decimal,
    reference_type: Option<String>,
    reference_id: Option<Uuid>,
    moved_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct OrderRow {
    order_id: Uuid,
    order_number: String,
    kind: String,
    party_id: Uuid,
    party_name: String,
    order_date: NaiveDate,
    status: String,
    total: Decimal,
}

#[derive(Debug, FromRow)]
struct StatusRow {
    product_id: Uuid,
    sku: String,
    name: String,
    item_type: Option<String>,
    category_id: Option<Uuid>,
    quantity_on_hand: Decimal,
    quantity_available: Decimal,
    quantity_on_order: Decimal,
    quantity_reserved: Decimal,
    reorder_point: Option<Decimal>,
    reorder_quantity: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct LineRow {
    product_id: Uuid,
    location_id: Uuid,
    sublocation: Option<String>,
    lot_number: Option<String>,
    serial_number: Option<String>,
    quantity_on_hand: Decimal,
}

impl CatalogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Per-product inventory position snapshot
    pub async fn list_inventory_status(
        &self,
        limit: Option<usize>,
    ) -> AppResult<Vec<ProductInventoryStatus>> {
        let rows = sqlx::query_as::<_, StatusRow>(
            r#"
            SELECT p.product_id, p.sku, p.name, p.item_type, p.category_id,
                   s.quantity_on_hand, s.quantity_available,
                   s.quantity_on_order, s.quantity_reserved,
                   s.reorder_point, s.reorder_quantity
            FROM products p
            JOIN product_inventory_status s ON s.product_id = p.product_id
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|row| ProductInventoryStatus {
                product_id: row.product_id,
                sku: row.sku,
                name: row.name,
                item_type: row.item_type,
                category_id: row.category_id,
                quantity_on_hand: row.quantity_on_hand,
                quantity_available: row.quantity_available,
                quantity_on_order: row.quantity_on_order,
                quantity_reserved: row.quantity_reserved,
                reorder_point: row.reorder_point,
                reorder_quantity: row.reorder_quantity,
            })
            .collect())
    }

    /// Inventory lines for one product, preserving location/lot/serial
    /// granularity
    pub async fn get_inventory_detail(&self, product_id: Uuid) -> AppResult<Vec<InventoryLine>> {
        let rows = sqlx::query_as::<_, LineRow>(
            r#"
            SELECT product_id, location_id, sublocation,
                   lot_number, serial_number, quantity_on_hand
            FROM inventory_lines
            WHERE product_id = $1
            ORDER BY location_id, sublocation
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| InventoryLine {
                product_id: row.product_id,
                location_id: row.location_id,
                sublocation: row.sublocation,
                lot_number: row.lot_number,
                serial_number: row.serial_number,
                quantity_on_hand: row.quantity_on_hand,
            })
            .collect())
    }

    /// The stock movement ledger, most recent first
    pub async fn list_movements(&self, limit: Option<usize>) -> AppResult<Vec<StockMovement>> {
        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT m.movement_id, m.product_id, p.sku, p.name AS product_name,
                   m.location_id, l.name AS location_name,
                   m.movement_type, m.quantity,
                   m.reference_type, m.reference_id, m.moved_at
            FROM stock_movements m
            JOIN products p ON p.product_id = m.product_id
            LEFT JOIN locations l ON l.location_id = m.location_id
            ORDER BY m.moved_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|row| {
                let movement_type = MovementType::parse(&row.movement_type).ok_or_else(|| {
                    AppError::Internal(format!("unknown movement type: {}", row.movement_type))
                })?;
                Ok(StockMovement {
                    movement_id: row.movement_id,
                    product_id: row.product_id,
                    sku: row.sku,
                    product_name: row.product_name,
                    location_id: row.location_id,
                    location_name: row.location_name,
                    movement_type,
                    quantity: row.quantity,
                    reference_type: row.reference_type,
                    reference_id: row.reference_id,
                    moved_at: row.moved_at,
                })
            })
            .collect()
    }

    /// Order history, optionally restricted to one status, most recent first
    pub async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        limit: Option<usize>,
    ) -> AppResult<Vec<OrderHeader>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT order_id, order_number, kind, party_id, party_name,
                   order_date, status, total
            FROM order_history
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY order_date DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|row| {
                let kind = OrderKind::parse(&row.kind).ok_or_else(|| {
                    AppError::Internal(format!("unknown order kind: {}", row.kind))
                })?;
                let status = OrderStatus::parse(&row.status).ok_or_else(|| {
                    AppError::Internal(format!("unknown order status: {}", row.status))
                })?;
                Ok(OrderHeader {
                    order_id: row.order_id,
                    order_number: row.order_number,
                    kind,
                    party_id: row.party_id,
                    party_name: row.party_name,
                    order_date: row.order_date,
                    status,
                    total: row.total,
                })
            })
            .collect()
    }
}
