//! Shared types and rules for the Inventory Analytics Service
//!
//! This crate contains the record types read from (and derived over) the
//! inventory fact store, plus the pure derivation rules the backend applies
//! to them. Everything in [`analytics`] is a plain function over values so
//! the rule set can be tested without a database.

pub mod analytics;
pub mod models;

pub use analytics::*;
pub use models::*;
