//! Rules configuration schema types with serde deserialization.
//!
//! Defines the layered configuration a host hands to the rules editor:
//! - `RulesConfig`: top-level document (controls, descriptors, notifications)
//! - `RulesDescriptors`: the `all` / `when` / `action` sections
//! - `RulesDescriptorSection`: asset allow/deny lists and per-type overrides
//! - `RulesControls`: UI toggles, passed through without interpretation

mod config;
mod controls;
mod descriptors;
mod side;

pub use config::*;
pub use controls::*;
pub use descriptors::*;
pub use side::*;
