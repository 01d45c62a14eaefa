//! Pure derivation rules for the analytic views
//!
//! Each submodule holds the numeric rules for one deriver. All functions are
//! pure: no I/O, no shared state, explicit null policies instead of panics.

mod bom;
mod dead_stock;
mod margin;
mod reorder;
mod velocity;

pub use bom::*;
pub use dead_stock::*;
pub use margin::*;
pub use reorder::*;
pub use velocity::*;
