//! Reorder alert deriver
//!
//! Product-level alerts compare the current quantity against the configured
//! reorder point; the location-scoped variant adds shortfall math and the
//! preferred vendor context for raising a purchase order.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::analytics::{should_alert, shortfall_quantity, suggested_order_quantity};

use crate::error::AppResult;
use crate::models::{LocationReorderAlert, ReorderAlert};

#[derive(Clone)]
pub struct AlertService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct ProductAlertRow {
    product_id: Uuid,
    sku: String,
    name: String,
    current_quantity: Decimal,
    reorder_point: Decimal,
    reorder_quantity: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct LocationAlertRow {
    product_id: Uuid,
    sku: String,
    product_name: String,
    category_id: Option<Uuid>,
    location_id: Uuid,
    location_name: String,
    location_abbreviation: Option<String>,
    quantity_on_hand: Decimal,
    quantity_available: Decimal,
    quantity_on_order: Decimal,
    quantity_in_transit: Decimal,
    reorder_point: Decimal,
    reorder_quantity: Option<Decimal>,
    preferred_vendor_id: Option<Uuid>,
    vendor_name: Option<String>,
    vendor_code: Option<String>,
    vendor_item_code: Option<String>,
    vendor_cost: Option<Decimal>,
    lead_time_days: Option<i32>,
}

impl AlertService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Products whose current quantity is strictly below their reorder point.
    /// Products with no (or zero) reorder point never alert.
    pub async fn get_reorder_alerts(&self, limit: Option<usize>) -> AppResult<Vec<ReorderAlert>> {
        let rows = sqlx::query_as::<_, ProductAlertRow>(
            r#"
            SELECT p.product_id, p.sku, p.name,
                   s.quantity_on_hand AS current_quantity,
                   s.reorder_point, s.reorder_quantity
            FROM products p
            JOIN product_inventory_status s ON s.product_id = p.product_id
            WHERE s.reorder_point IS NOT NULL
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let alerts = rows
            .into_iter()
            .filter(|row| should_alert(row.current_quantity, Some(row.reorder_point)))
            .map(|row| ReorderAlert {
                product_id: row.product_id,
                sku: row.sku,
                name: row.name,
                current_quantity: row.current_quantity,
                reorder_point: row.reorder_point,
                reorder_quantity: row.reorder_quantity.unwrap_or(Decimal::ZERO),
            })
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        Ok(alerts)
    }

    /// Location-scoped alerts with shortfall and suggested order quantities,
    /// grouped for display by location then product name.
    pub async fn get_location_reorder_alerts(&self) -> AppResult<Vec<LocationReorderAlert>> {
        let rows = sqlx::query_as::<_, LocationAlertRow>(
            r#"
            SELECT p.product_id, p.sku, p.name AS product_name, p.category_id,
                   ls.location_id, l.name AS location_name,
                   l.abbreviation AS location_abbreviation,
                   ls.quantity_on_hand, ls.quantity_available,
                   ls.quantity_on_order, ls.quantity_in_transit,
                   ls.reorder_point, ls.reorder_quantity,
                   ls.preferred_vendor_id,
                   v.name AS vendor_name, v.vendor_code,
                   vi.vendor_item_code, vi.cost AS vendor_cost, vi.lead_time_days
            FROM location_inventory_status ls
            JOIN products p ON p.product_id = ls.product_id
            JOIN locations l ON l.location_id = ls.location_id
            LEFT JOIN vendors v ON v.vendor_id = ls.preferred_vendor_id
            LEFT JOIN vendor_items vi ON vi.vendor_id = ls.preferred_vendor_id
                AND vi.product_id = ls.product_id
            WHERE ls.reorder_point IS NOT NULL
            ORDER BY l.name, p.name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let alerts = rows
            .into_iter()
            .filter(|row| should_alert(row.quantity_on_hand, Some(row.reorder_point)))
            .map(|row| {
                let shortfall = shortfall_quantity(row.reorder_point, row.quantity_on_hand);
                let inbound = row.quantity_on_order + row.quantity_in_transit;
                let reorder_quantity = row.reorder_quantity.unwrap_or(Decimal::ZERO);
                LocationReorderAlert {
                    product_id: row.product_id,
                    sku: row.sku,
                    product_name: row.product_name,
                    category_id: row.category_id,
                    location_id: row.location_id,
                    location_name: row.location_name,
                    location_abbreviation: row.location_abbreviation,
                    quantity_on_hand: row.quantity_on_hand,
                    quantity_available: row.quantity_available,
                    quantity_on_order: row.quantity_on_order,
                    quantity_in_transit: row.quantity_in_transit,
                    reorder_point: row.reorder_point,
                    reorder_quantity,
                    shortfall_quantity: shortfall,
                    suggested_order_quantity: suggested_order_quantity(
                        shortfall,
                        reorder_quantity,
                        inbound,
                    ),
                    preferred_vendor_id: row.preferred_vendor_id,
                    vendor_name: row.vendor_name,
                    vendor_code: row.vendor_code,
                    vendor_item_code: row.vendor_item_code,
                    vendor_cost: row.vendor_cost,
                    lead_time_days: row.lead_time_days,
                }
            })
            .collect();

        Ok(alerts)
    }
}
