//! Domain models for the formulary system.

mod formulary;
mod inventory;

pub use formulary::*;
pub use inventory::*;
