//! Layered configuration resolution of asset type metadata.
//!
//! Merges the `all` section of a [`RulesConfig`](crate::schema::RulesConfig)
//! with the section for the requested [`Side`](crate::schema::Side) and
//! produces the asset type infos the editor may offer:
//! - allow/deny filtering of asset types
//! - icon/colour overrides
//! - attribute include/exclude patterns
//! - attribute field overrides (type, format, units, prepended constraints)
//!
//! The catalog is never mutated. Types without an override are returned as the
//! catalog's own shared `Arc`; overridden types are fresh values.

mod catalog;
mod core;
mod error;
mod overrides;
pub mod pattern;

#[cfg(test)]
mod tests;

pub use self::catalog::{AssetCatalog, StaticCatalog};
pub use self::core::{resolve_asset_infos, AssetFilter, ConfigResolver, ResolvedSides};
pub use self::error::{ResolveError, Result};
