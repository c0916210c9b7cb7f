//! Override lookup and clone-then-modify application.

use ruledesk_core::{AssetTypeInfo, AttributeDescriptor};
use tracing::debug;

use crate::schema::{AssetTypeOverride, AttributeOverride, RulesDescriptorSection};

use super::pattern::{compile_all, matches_any, NamePattern};

/// Find the override for an asset type.
///
/// Side section (exact name, then `"*"`) before the `all` section (exact, then `"*"`).
pub(crate) fn find_asset_override<'a>(
    side: Option<&'a RulesDescriptorSection>,
    all: Option<&'a RulesDescriptorSection>,
    asset_type: &str,
) -> Option<&'a AssetTypeOverride> {
    side.and_then(|s| s.asset_override(asset_type))
        .or_else(|| all.and_then(|s| s.asset_override(asset_type)))
}

/// Find the override for one attribute.
///
/// The type override's own map, then the side section's shared map, then the `all` section's.
pub(crate) fn find_attribute_override<'a>(
    type_override: &'a AssetTypeOverride,
    side: Option<&'a RulesDescriptorSection>,
    all: Option<&'a RulesDescriptorSection>,
    attribute: &str,
) -> Option<&'a AttributeOverride> {
    type_override
        .attribute_override(attribute)
        .or_else(|| side.and_then(|s| s.attribute_override(attribute)))
        .or_else(|| all.and_then(|s| s.attribute_override(attribute)))
}

/// Produce a new info with `type_override` applied to a copy of `info`.
pub(crate) fn apply_asset_override(
    info: &AssetTypeInfo,
    type_override: &AssetTypeOverride,
    side: Option<&RulesDescriptorSection>,
    all: Option<&RulesDescriptorSection>,
) -> AssetTypeInfo {
    let mut resolved = info.clone();

    if let Some(icon) = type_override.icon.as_ref().filter(|s| !s.is_empty()) {
        resolved.asset_descriptor.icon = Some(icon.clone());
    }
    if let Some(color) = type_override.color.as_ref().filter(|s| !s.is_empty()) {
        resolved.asset_descriptor.colour = Some(color.clone());
    }

    if type_override.include_attributes.is_some() || type_override.exclude_attributes.is_some() {
        let include = type_override.include_attributes.as_deref().map(compile_all);
        let exclude = type_override.exclude_attributes.as_deref().map(compile_all);
        let before = resolved.attribute_descriptors.len();
        resolved
            .attribute_descriptors
            .retain(|attr| attribute_visible(include.as_deref(), exclude.as_deref(), &attr.name));
        debug!(
            asset_type = %info.name(),
            kept = resolved.attribute_descriptors.len(),
            dropped = before - resolved.attribute_descriptors.len(),
            "filtered attributes"
        );
    }

    for attr in resolved.attribute_descriptors.iter_mut() {
        if let Some(attr_override) = find_attribute_override(type_override, side, all, &attr.name) {
            apply_attribute_override(attr, attr_override);
        }
    }

    resolved
}

/// Include patterns (when given) must match; exclude patterns (when given) must not.
fn attribute_visible(include: Option<&[NamePattern]>, exclude: Option<&[NamePattern]>, name: &str) -> bool {
    let included = include.map_or(true, |patterns| matches_any(patterns, name));
    let excluded = exclude.is_some_and(|patterns| matches_any(patterns, name));
    included && !excluded
}

/// Apply field overrides to an attribute descriptor.
///
/// Constraints only grow: override constraints go first, native ones follow.
pub(crate) fn apply_attribute_override(attr: &mut AttributeDescriptor, attr_override: &AttributeOverride) {
    if let Some(value_type) = attr_override.value_type.as_ref().filter(|s| !s.is_empty()) {
        attr.value_type = value_type.clone();
    }
    if let Some(format) = &attr_override.format {
        attr.format = Some(format.clone());
    }
    if let Some(units) = &attr_override.units {
        attr.units = Some(units.clone());
    }
    if let Some(constraints) = &attr_override.constraints {
        let mut merged = constraints.clone();
        if let Some(native) = attr.constraints.take() {
            merged.extend(native);
        }
        attr.constraints = Some(merged);
    }
}
