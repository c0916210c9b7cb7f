//! Core [`ConfigLoader`] struct: file-backed rules configuration with optional hot-reload.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ruledesk_core::AssetTypeDescriptor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::resolver::StaticCatalog;
use crate::schema::RulesConfig;

use super::error::{LoaderError, Result};
use super::watcher::handle_fs_event;

/// On-disk asset catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub asset_types: Vec<AssetTypeDescriptor>,
    /// Types present at runtime; defaults to every listed type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_types: Option<Vec<String>>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> StaticCatalog {
        let catalog = StaticCatalog::new(self.asset_types);
        match self.runtime_types {
            Some(names) => catalog.with_runtime_types(names),
            None => catalog,
        }
    }
}

/// Deserialize `contents` as YAML or JSON depending on the extension of `path`.
fn parse_as<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => Ok(serde_yaml::from_str(contents)?),
        Some("json") => Ok(serde_json::from_str(contents)?),
        _ => Err(LoaderError::Unsupported(path.to_path_buf())),
    }
}

/// Parse a rules configuration document.
pub fn parse_config(path: &Path, contents: &str) -> Result<RulesConfig> {
    parse_as(path, contents)
}

/// Parse a catalog document.
pub fn parse_catalog(path: &Path, contents: &str) -> Result<CatalogFile> {
    parse_as(path, contents)
}

/// Read a catalog file into an in-memory catalog.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog> {
    let contents = fs::read_to_string(path)?;
    let file = parse_catalog(path, &contents)?;
    info!(path = %path.display(), asset_types = file.asset_types.len(), "loaded asset catalog");
    Ok(file.into_catalog())
}

/// File-backed rules configuration with optional hot-reload.
///
/// Holds the most recently parsed [`RulesConfig`] behind a shared lock. A
/// failed reload keeps the previous value; deleting the file clears it.
pub struct ConfigLoader {
    /// Path of the YAML/JSON configuration file.
    config_path: PathBuf,
    /// Last successfully parsed configuration.
    config: Arc<RwLock<Option<RulesConfig>>>,
    /// Active filesystem watcher (held to keep it alive).
    _watcher: Option<RecommendedWatcher>,
}

impl ConfigLoader {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            config: Arc::new(RwLock::new(None)),
            _watcher: None,
        }
    }

    /// Read and parse the configuration file, replacing the shared copy.
    pub fn load(&self) -> Result<RulesConfig> {
        let contents = fs::read_to_string(&self.config_path)?;
        let config = parse_config(&self.config_path, &contents)?;
        info!(path = %self.config_path.display(), "loaded rules config");
        *self.config.write().expect("rules config lock poisoned") = Some(config.clone());
        Ok(config)
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> Option<RulesConfig> {
        self.config
            .read()
            .expect("rules config lock poisoned")
            .clone()
    }

    /// Shared handle to the configuration slot.
    pub fn shared(&self) -> Arc<RwLock<Option<RulesConfig>>> {
        Arc::clone(&self.config)
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Start watching the configuration file.
    pub fn watch(&mut self) -> Result<()> {
        self.watch_with(|_| {})
    }

    /// Start watching the configuration file, calling `on_change` after each
    /// successful reload or removal.
    ///
    /// Watches the parent directory so editors that save by rename are seen.
    pub fn watch_with<F>(&mut self, on_change: F) -> Result<()>
    where
        F: Fn(Option<&RulesConfig>) + Send + 'static,
    {
        let config = Arc::clone(&self.config);
        let config_path = self.config_path.clone();
        let watch_dir = match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => handle_fs_event(&event, &config, &config_path, &on_change),
                Err(e) => warn!(error = %e, "filesystem watcher error"),
            },
        )?;

        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        let _ = watcher.configure(notify::Config::default().with_poll_interval(Duration::from_millis(500)));

        info!(path = %self.config_path.display(), "watching rules config for changes");
        self._watcher = Some(watcher);
        Ok(())
    }
}
