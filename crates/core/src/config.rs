use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

/// Split a comma-separated list, dropping blanks.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    /// Asset catalog file (YAML or JSON).
    pub catalog_path: PathBuf,
    /// Rules configuration file (YAML or JSON).
    pub rules_config_path: PathBuf,
    /// Side resolved when none is given (`when` or `action`).
    pub default_side: String,
    /// Runtime asset type names; `None` means every catalog type.
    pub runtime_types: Option<Vec<String>>,
    /// tracing filter directive.
    pub log_filter: String,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `RULEDESK_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("RULEDESK_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            catalog_path: PathBuf::from(profiled_env_or(p, "RULEDESK_CATALOG", "data/catalog.yml")),
            rules_config_path: PathBuf::from(profiled_env_or(
                p,
                "RULEDESK_RULES_CONFIG",
                "data/rules-config.yml",
            )),
            default_side: profiled_env_or(p, "RULEDESK_SIDE", "when").to_lowercase(),
            runtime_types: profiled_env_opt(p, "RULEDESK_RUNTIME_TYPES").map(|v| parse_list(&v)),
            log_filter: profiled_env_or(p, "RULEDESK_LOG", "info"),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Reject settings no binary can start with.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.default_side.as_str(), "when" | "action") {
            return Err(CoreError::Config(format!(
                "RULEDESK_SIDE must be 'when' or 'action', got '{}'",
                self.default_side
            )));
        }
        if self.catalog_path.as_os_str().is_empty() {
            return Err(CoreError::Config("RULEDESK_CATALOG is empty".to_string()));
        }
        Ok(())
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  catalog:       {}", self.catalog_path.display());
        tracing::info!("  rules config:  {}", self.rules_config_path.display());
        tracing::info!("  default side:  {}", self.default_side);
        tracing::info!(
            "  runtime types: {}",
            self.runtime_types
                .as_ref()
                .map(|t| t.join(","))
                .unwrap_or_else(|| "(catalog)".to_string())
        );
    }
}
