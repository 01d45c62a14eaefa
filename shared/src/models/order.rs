//! Order header facts

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an order is a sale to a customer or a purchase from a vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Sales,
    Purchase,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Sales => "sales",
            OrderKind::Purchase => "purchase",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sales" => Some(OrderKind::Sales),
            "purchase" => Some(OrderKind::Purchase),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Closed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(OrderStatus::Open),
            "closed" => Some(OrderStatus::Closed),
            _ => None,
        }
    }
}

/// An order header as surfaced by the order history view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHeader {
    pub order_id: Uuid,
    pub order_number: String,
    pub kind: OrderKind,
    pub party_id: Uuid,
    pub party_name: String,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub total: Decimal,
}
