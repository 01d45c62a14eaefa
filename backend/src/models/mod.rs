//! Database models for the Inventory Analytics Service
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
