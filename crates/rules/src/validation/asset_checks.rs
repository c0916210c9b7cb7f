//! Asset type and attribute checks for descriptor sections.

use ruledesk_core::AssetTypeDescriptor;

use crate::resolver::pattern::string_match;
use crate::schema::{AssetTypeOverride, RulesDescriptorSection, RulesDescriptors, WILDCARD};

use super::fuzzy::fuzzy_match;
use super::ValidationResult;

pub(super) fn validate_sections(
    descriptors: &RulesDescriptors,
    catalog: &[AssetTypeDescriptor],
    result: &mut ValidationResult,
) {
    let type_names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();

    let sections = [
        ("all", descriptors.all.as_ref()),
        ("when", descriptors.when.as_ref()),
        ("action", descriptors.action.as_ref()),
    ];
    for (name, section) in sections {
        if let Some(section) = section {
            validate_section(name, section, catalog, &type_names, result);
        }
    }

    // Resolution assigns the `all` include list last, so it silently wins.
    let all_includes = descriptors
        .all
        .as_ref()
        .is_some_and(|s| s.include_assets.is_some());
    if all_includes {
        for (name, section) in [("when", &descriptors.when), ("action", &descriptors.action)] {
            if section.as_ref().is_some_and(|s| s.include_assets.is_some()) {
                result.warn(
                    format!("descriptors.{name}.includeAssets"),
                    format!("ignored: descriptors.all.includeAssets takes precedence over the {name} list"),
                );
            }
        }
    }
}

fn validate_section(
    name: &str,
    section: &RulesDescriptorSection,
    catalog: &[AssetTypeDescriptor],
    type_names: &[&str],
    result: &mut ValidationResult,
) {
    let base = format!("descriptors.{name}");

    if let Some(include) = &section.include_assets {
        if include.is_empty() {
            result.warn(
                format!("{base}.includeAssets"),
                "empty list does not restrict asset types",
            );
        }
        for (i, asset_type) in include.iter().enumerate() {
            if !type_names.contains(&asset_type.as_str()) {
                result.error_with_suggestion(
                    format!("{base}.includeAssets[{i}]"),
                    format!("unknown asset type '{asset_type}'"),
                    fuzzy_match(asset_type, type_names),
                );
            }
        }
    }

    if let Some(exclude) = &section.exclude_assets {
        for (i, asset_type) in exclude.iter().enumerate() {
            if !type_names.contains(&asset_type.as_str()) {
                result.warn(
                    format!("{base}.excludeAssets[{i}]"),
                    format!("excluding unknown asset type '{asset_type}' has no effect"),
                );
            }
            if section
                .include_assets
                .as_ref()
                .is_some_and(|inc| inc.contains(asset_type))
            {
                result.warn(
                    format!("{base}.excludeAssets[{i}]"),
                    format!("'{asset_type}' is both included and excluded; exclusion wins"),
                );
            }
        }
    }

    if let Some(assets) = &section.assets {
        for (asset_type, type_override) in assets {
            let path = format!("{base}.assets.{asset_type}");
            if asset_type == WILDCARD {
                continue;
            }
            match catalog.iter().find(|d| &d.name == asset_type) {
                Some(descriptor) => validate_type_override(&path, descriptor, type_override, result),
                None => result.error_with_suggestion(
                    path,
                    format!("unknown asset type '{asset_type}'"),
                    fuzzy_match(asset_type, type_names),
                ),
            }
        }
    }
}

fn validate_type_override(
    path: &str,
    descriptor: &AssetTypeDescriptor,
    type_override: &AssetTypeOverride,
    result: &mut ValidationResult,
) {
    let attribute_names: Vec<&str> = descriptor.attributes.iter().map(|a| a.name.as_str()).collect();

    if let Some(overrides) = &type_override.attribute_descriptors {
        for attribute in overrides.keys() {
            if !attribute_names.contains(&attribute.as_str()) {
                result.error_with_suggestion(
                    format!("{path}.attributeDescriptors.{attribute}"),
                    format!("asset type '{}' has no attribute '{attribute}'", descriptor.name),
                    fuzzy_match(attribute, &attribute_names),
                );
            }
        }
    }

    let pattern_lists = [
        ("includeAttributes", &type_override.include_attributes),
        ("excludeAttributes", &type_override.exclude_attributes),
    ];
    for (key, patterns) in pattern_lists {
        let Some(patterns) = patterns else { continue };
        for (i, pattern) in patterns.iter().enumerate() {
            if !attribute_names.iter().any(|a| string_match(pattern, a)) {
                result.warn(
                    format!("{path}.{key}[{i}]"),
                    format!("pattern '{pattern}' matches no attribute of '{}'", descriptor.name),
                );
            }
        }
    }
}
