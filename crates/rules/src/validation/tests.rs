//! Tests for rules configuration validation.

use ruledesk_core::{AssetTypeDescriptor, AttributeDescriptor};

use super::*;

fn catalog() -> Vec<AssetTypeDescriptor> {
    vec![
        AssetTypeDescriptor {
            name: "ThingAsset".to_string(),
            icon: None,
            colour: None,
            attributes: vec![
                AttributeDescriptor::new("temperature", "number"),
                AttributeDescriptor::new("notes", "text"),
            ],
            meta_items: vec![],
        },
        AssetTypeDescriptor {
            name: "LightAsset".to_string(),
            icon: None,
            colour: None,
            attributes: vec![AttributeDescriptor::new("onOff", "boolean")],
            meta_items: vec![],
        },
    ]
}

#[test]
fn clean_config_is_valid() {
    let yaml = r#"
descriptors:
  all:
    excludeAssets: [LightAsset]
    assets:
      "*":
        icon: cube
      ThingAsset:
        includeAttributes: ["temp*"]
        attributeDescriptors:
          temperature:
            units: [celsius]
"#;
    let result = validate_yaml(yaml, &catalog());
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
}

#[test]
fn unknown_included_type_suggests_fix() {
    let yaml = r#"
descriptors:
  when:
    includeAssets: [ThingAset]
"#;
    let result = validate_yaml(yaml, &catalog());
    assert!(!result.valid);
    assert_eq!(result.errors[0].path, "descriptors.when.includeAssets[0]");
    assert_eq!(
        result.errors[0].suggestion.as_deref(),
        Some("Did you mean 'ThingAsset'?")
    );
}

#[test]
fn unknown_override_type_and_attribute() {
    let yaml = r#"
descriptors:
  action:
    assets:
      LigthAsset:
        icon: bulb
      ThingAsset:
        attributeDescriptors:
          temprature:
            type: number
"#;
    let result = validate_yaml(yaml, &catalog());
    assert!(!result.valid);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "descriptors.action.assets.LigthAsset",
            "descriptors.action.assets.ThingAsset.attributeDescriptors.temprature",
        ]
    );
    assert_eq!(
        result.errors[1].suggestion.as_deref(),
        Some("Did you mean 'temperature'?")
    );
}

#[test]
fn include_precedence_is_flagged() {
    let yaml = r#"
descriptors:
  all:
    includeAssets: [ThingAsset]
  when:
    includeAssets: [LightAsset]
"#;
    let result = validate_yaml(yaml, &catalog());
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path, "descriptors.when.includeAssets");
}

#[test]
fn contradictory_and_empty_lists_warn() {
    let yaml = r#"
descriptors:
  when:
    includeAssets: [ThingAsset]
    excludeAssets: [ThingAsset, GhostAsset]
  action:
    includeAssets: []
"#;
    let result = validate_yaml(yaml, &catalog());
    assert!(result.valid);
    let paths: Vec<&str> = result.warnings.iter().map(|w| w.path.as_str()).collect();
    assert!(paths.contains(&"descriptors.when.excludeAssets[0]"));
    assert!(paths.contains(&"descriptors.when.excludeAssets[1]"));
    assert!(paths.contains(&"descriptors.action.includeAssets"));
}

#[test]
fn dead_attribute_pattern_warns() {
    let yaml = r#"
descriptors:
  all:
    assets:
      LightAsset:
        excludeAttributes: ["bright*"]
"#;
    let result = validate_yaml(yaml, &catalog());
    assert!(result.valid);
    assert_eq!(
        result.warnings[0].path,
        "descriptors.all.assets.LightAsset.excludeAttributes[0]"
    );
}

#[test]
fn parse_error_is_reported() {
    let result = validate_yaml("descriptors: [", &catalog());
    assert!(!result.valid);
    assert!(result.errors[0].message.starts_with("YAML parse error"));
}

#[test]
fn config_without_descriptors_is_valid() {
    let result = validate_config(&RulesConfig::default(), &catalog());
    assert!(result.valid);
    assert!(result.warnings.is_empty());
}
