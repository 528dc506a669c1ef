//! Data models for Commgear

pub mod soldier;
pub mod tool;
pub mod unit;

// Re-export commonly used types
pub use soldier::{Soldier, SoldierRole};
pub use tool::{Tool, ToolSpecs, ToolStatus, UnitToolCount};
pub use unit::Unit;
