//! Descriptor sections: asset filtering and attribute overrides.

use indexmap::IndexMap;
use ruledesk_core::{ValueConstraint, ValueFormat};
use serde::{Deserialize, Serialize};

use super::Side;

/// Key in `assets` that applies to every asset type without its own entry.
pub const WILDCARD: &str = "*";

/// The three configuration layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesDescriptors {
    /// Context-independent defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<RulesDescriptorSection>,
    /// Condition-side overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<RulesDescriptorSection>,
    /// Action-side overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RulesDescriptorSection>,
}

impl RulesDescriptors {
    /// The section specific to `side`.
    pub fn section(&self, side: Side) -> Option<&RulesDescriptorSection> {
        match side {
            Side::When => self.when.as_ref(),
            Side::Action => self.action.as_ref(),
        }
    }
}

/// One configuration layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RulesDescriptorSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_assets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_assets: Option<Vec<String>>,
    /// Attribute overrides shared by every asset type, keyed by attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_descriptors: Option<IndexMap<String, AttributeOverride>>,
    /// Per-type overrides keyed by asset type name or [`WILDCARD`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<IndexMap<String, AssetTypeOverride>>,
}

impl RulesDescriptorSection {
    /// Override for `asset_type`, falling back to the wildcard entry.
    pub fn asset_override(&self, asset_type: &str) -> Option<&AssetTypeOverride> {
        let assets = self.assets.as_ref()?;
        assets.get(asset_type).or_else(|| assets.get(WILDCARD))
    }

    /// Shared attribute override for `attribute`.
    pub fn attribute_override(&self, attribute: &str) -> Option<&AttributeOverride> {
        self.attribute_descriptors.as_ref()?.get(attribute)
    }
}

/// Presentation and attribute overrides for one asset type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetTypeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Attribute name patterns to keep (exact or glob).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_attributes: Option<Vec<String>>,
    /// Attribute name patterns to drop (exact or glob).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_attributes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_descriptors: Option<IndexMap<String, AttributeOverride>>,
}

impl AssetTypeOverride {
    pub fn attribute_override(&self, attribute: &str) -> Option<&AttributeOverride> {
        self.attribute_descriptors.as_ref()?.get(attribute)
    }
}

/// Field overrides for one attribute descriptor.
///
/// `type`, `format` and `units` replace the native value; `constraints` are
/// prepended to the native list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AttributeOverride {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<ValueConstraint>>,
}
