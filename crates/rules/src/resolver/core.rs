//! [`resolve_asset_infos`] and the [`ConfigResolver`] wrapper.

use std::sync::Arc;

use ruledesk_core::{AssetTypeInfo, UNKNOWN_ASSET_TYPE};
use tracing::{debug, info};

use crate::schema::{RulesConfig, RulesDescriptorSection, Side};

use super::catalog::AssetCatalog;
use super::error::Result;
use super::overrides::{apply_asset_override, find_asset_override};

/// Asset type allow/deny lists for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFilter {
    /// Allowed type names. Empty means "no restriction".
    pub allowed: Vec<String>,
    /// Excluded type names (union of both sections).
    pub excluded: Vec<String>,
}

impl AssetFilter {
    /// Combine the side section and the `all` section over `default_allowed`.
    ///
    /// An `includeAssets` list replaces the default set. The `all` list is
    /// assigned after the side list, so it wins when both are present.
    pub fn new(
        side: Option<&RulesDescriptorSection>,
        all: Option<&RulesDescriptorSection>,
        default_allowed: Vec<String>,
    ) -> Self {
        let mut allowed = default_allowed;
        if let Some(include) = side.and_then(|s| s.include_assets.as_ref()) {
            allowed = include.clone();
        }
        if let Some(include) = all.and_then(|s| s.include_assets.as_ref()) {
            allowed = include.clone();
        }

        let mut excluded: Vec<String> = side
            .and_then(|s| s.exclude_assets.clone())
            .unwrap_or_default();
        if let Some(exclude) = all.and_then(|s| s.exclude_assets.as_ref()) {
            excluded.extend(exclude.iter().cloned());
        }

        Self { allowed, excluded }
    }

    pub fn allows(&self, asset_type: &str) -> bool {
        if !self.allowed.is_empty() && !self.allowed.iter().any(|a| a == asset_type) {
            return false;
        }
        !self.excluded.iter().any(|e| e == asset_type)
    }
}

/// Resolve the asset type infos available on `side` under `config`.
///
/// Without a config (or without `descriptors`) every catalog entry is returned
/// as-is and the runtime type query is skipped. Otherwise the runtime type
/// names (minus [`UNKNOWN_ASSET_TYPE`]) form the default allow-list.
/// Output keeps catalog order.
pub async fn resolve_asset_infos<C: AssetCatalog + ?Sized>(
    catalog: &C,
    config: Option<&RulesConfig>,
    side: Side,
) -> Result<Vec<Arc<AssetTypeInfo>>> {
    let descriptors = catalog.asset_descriptors();

    let Some(sections) = config.and_then(|c| c.descriptors.as_ref()) else {
        debug!(side = %side, count = descriptors.len(), "no descriptor config, returning catalog");
        return Ok(descriptors
            .iter()
            .map(|d| catalog.asset_type_info(d))
            .collect());
    };

    let default_allowed: Vec<String> = catalog
        .asset_type_names()
        .await?
        .into_iter()
        .filter(|name| name != UNKNOWN_ASSET_TYPE)
        .collect();

    let side_section = sections.section(side);
    let all_section = sections.all.as_ref();
    let filter = AssetFilter::new(side_section, all_section, default_allowed);

    let resolved: Vec<Arc<AssetTypeInfo>> = descriptors
        .iter()
        .filter(|d| {
            let keep = filter.allows(&d.name);
            if !keep {
                debug!(side = %side, asset_type = %d.name, "asset type filtered out");
            }
            keep
        })
        .map(|d| {
            let native = catalog.asset_type_info(d);
            match find_asset_override(side_section, all_section, &d.name) {
                Some(type_override) => {
                    debug!(side = %side, asset_type = %d.name, "applying asset type override");
                    Arc::new(apply_asset_override(
                        &native,
                        type_override,
                        side_section,
                        all_section,
                    ))
                }
                None => native,
            }
        })
        .collect();

    info!(
        side = %side,
        catalog = descriptors.len(),
        resolved = resolved.len(),
        "resolved asset type infos"
    );
    Ok(resolved)
}

/// Infos for both sides of a rule.
#[derive(Debug, Clone)]
pub struct ResolvedSides {
    pub when: Vec<Arc<AssetTypeInfo>>,
    pub action: Vec<Arc<AssetTypeInfo>>,
}

impl ResolvedSides {
    pub fn side(&self, side: Side) -> &[Arc<AssetTypeInfo>] {
        match side {
            Side::When => &self.when,
            Side::Action => &self.action,
        }
    }
}

/// Resolver bound to an injected catalog.
#[derive(Clone)]
pub struct ConfigResolver {
    catalog: Arc<dyn AssetCatalog>,
}

impl ConfigResolver {
    pub fn new(catalog: Arc<dyn AssetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<dyn AssetCatalog> {
        &self.catalog
    }

    /// Resolve one side. See [`resolve_asset_infos`].
    pub async fn resolve(
        &self,
        config: Option<&RulesConfig>,
        side: Side,
    ) -> Result<Vec<Arc<AssetTypeInfo>>> {
        resolve_asset_infos(self.catalog.as_ref(), config, side).await
    }

    /// Resolve both sides concurrently.
    pub async fn resolve_sides(&self, config: Option<&RulesConfig>) -> Result<ResolvedSides> {
        let (when, action) = tokio::try_join!(
            self.resolve(config, Side::When),
            self.resolve(config, Side::Action)
        )?;
        Ok(ResolvedSides { when, action })
    }
}
