//! Domain models for the Inventory Analytics Service

mod alert;
mod bom;
mod dead_stock;
mod inventory;
mod margin;
mod movement;
mod order;
mod summary;
mod velocity;

pub use alert::*;
pub use bom::*;
pub use dead_stock::*;
pub use inventory::*;
pub use margin::*;
pub use movement::*;
pub use order::*;
pub use summary::*;
pub use velocity::*;
