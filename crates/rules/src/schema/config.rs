//! Top-level rules configuration document.

use serde::{Deserialize, Serialize};

use super::{RulesControls, RulesDescriptors, RulesDescriptorSection, Side};

/// Layered configuration supplied by the host for one tenant/application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<RulesControls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<RulesDescriptors>,
    /// Default name given to newly created rulesets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruleset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<serde_json::Value>,
    /// Template for new JSON rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
}

impl RulesConfig {
    /// The `all` section, if descriptors are configured.
    pub fn all_section(&self) -> Option<&RulesDescriptorSection> {
        self.descriptors.as_ref()?.all.as_ref()
    }

    /// The section specific to `side`, if descriptors are configured.
    pub fn side_section(&self, side: Side) -> Option<&RulesDescriptorSection> {
        self.descriptors.as_ref()?.section(side)
    }
}
