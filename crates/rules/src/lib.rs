//! Rules editor configuration engine.
//!
//! This crate provides:
//! - `RulesConfig` schema with serde deserialization (YAML or JSON)
//! - Layered `all` / `when` / `action` resolution of asset type metadata
//! - Selection/edit guard protecting unsaved ruleset edits
//! - Filesystem loader with hot-reload via `notify` watcher
//! - Configuration validation with "did you mean" suggestions

pub mod guard;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;
