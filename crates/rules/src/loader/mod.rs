//! File-backed rules configuration and catalog loading with hot-reload.
//!
//! Reads a [`RulesConfig`](crate::schema::RulesConfig) from YAML or JSON and
//! optionally watches it via `notify`, swapping the shared copy whenever the
//! file changes. Asset catalogs are read from the same formats into a
//! [`StaticCatalog`](crate::resolver::StaticCatalog).

mod core;
mod error;
mod watcher;


pub use self::core::{load_catalog, parse_catalog, parse_config, CatalogFile, ConfigLoader};
pub use self::error::{LoaderError, Result};
