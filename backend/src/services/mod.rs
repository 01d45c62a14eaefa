//! Metric derivation services for the Inventory Analytics Service
//!
//! Each service runs parameterized aggregation SQL over the read-only fact
//! store and applies the pure rules from `shared::analytics` to produce one
//! derived view. Services hold no state beyond the pool; every call computes
//! its view fresh from the current facts.

pub mod alerts;
pub mod bom;
pub mod catalog;
pub mod dead_stock;
pub mod export;
pub mod margins;
pub mod summary;
pub mod velocity;

pub use alerts::AlertService;
pub use bom::BomService;
pub use catalog::CatalogService;
pub use dead_stock::DeadStockService;
pub use margins::MarginService;
pub use summary::SummaryService;
pub use velocity::VelocityService;
