//! UI feature toggles carried by the configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Feature-flag style toggles for the rendering layer.
///
/// Never interpreted here: resolution hands them to the host verbatim.
/// Toggles without a typed field land in `extra` so they survive a round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RulesControls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_action_type_options: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_action_target_options: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_action_update_options: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_condition_type_options: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_then_add_action: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_when_add_condition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_condition_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_action_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_asset_query_operators: Option<IndexMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_recurrence_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_action_target_types: Option<IndexMap<String, Vec<String>>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}
