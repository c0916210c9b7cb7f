//! Tests for asset info resolution.

use std::sync::Arc;

use async_trait::async_trait;
use ruledesk_core::{AssetTypeDescriptor, AssetTypeInfo, AttributeDescriptor, ValueConstraint};

use super::*;
use crate::schema::{RulesConfig, Side};

fn attr(name: &str, value_type: &str) -> AttributeDescriptor {
    AttributeDescriptor::new(name, value_type)
}

fn descriptors() -> Vec<AssetTypeDescriptor> {
    let mut temperature = attr("temperature", "number");
    temperature.constraints = Some(vec![ValueConstraint::Min { min: 0.0 }]);
    temperature.units = Some(vec!["kelvin".to_string()]);

    vec![
        AssetTypeDescriptor {
            name: "ThingAsset".to_string(),
            icon: Some("cube".to_string()),
            colour: Some("111111".to_string()),
            attributes: vec![temperature, attr("humidity", "number"), attr("notes", "text")],
            meta_items: vec![],
        },
        AssetTypeDescriptor {
            name: "RoomAsset".to_string(),
            icon: Some("door".to_string()),
            colour: None,
            attributes: vec![attr("area", "number"), attr("notes", "text"), attr("location", "GEO_JSONPoint")],
            meta_items: vec![],
        },
        AssetTypeDescriptor {
            name: "LightAsset".to_string(),
            icon: Some("lightbulb".to_string()),
            colour: None,
            attributes: vec![attr("onOff", "boolean"), attr("brightness", "positiveInteger")],
            meta_items: vec![],
        },
        AssetTypeDescriptor {
            name: "UnknownAsset".to_string(),
            icon: None,
            colour: None,
            attributes: vec![],
            meta_items: vec![],
        },
    ]
}

fn catalog() -> StaticCatalog {
    StaticCatalog::new(descriptors())
}

fn config(yaml: &str) -> RulesConfig {
    serde_yaml::from_str(yaml).unwrap()
}

fn names(infos: &[Arc<AssetTypeInfo>]) -> Vec<&str> {
    infos.iter().map(|i| i.name()).collect()
}

struct FailingCatalog {
    inner: StaticCatalog,
}

#[async_trait]
impl AssetCatalog for FailingCatalog {
    async fn asset_type_names(&self) -> Result<Vec<String>> {
        Err(ResolveError::Catalog("asset service unavailable".to_string()))
    }

    fn asset_descriptors(&self) -> &[AssetTypeDescriptor] {
        self.inner.asset_descriptors()
    }

    fn asset_type_info(&self, descriptor: &AssetTypeDescriptor) -> Arc<AssetTypeInfo> {
        self.inner.asset_type_info(descriptor)
    }
}

// -- default transparency ------------------------------------------------

#[tokio::test]
async fn no_config_returns_catalog_unchanged() {
    let catalog = catalog();
    let resolved = resolve_asset_infos(&catalog, None, Side::When).await.unwrap();

    assert_eq!(
        names(&resolved),
        vec!["ThingAsset", "RoomAsset", "LightAsset", "UnknownAsset"]
    );
    for (info, descriptor) in resolved.iter().zip(catalog.asset_descriptors()) {
        assert!(Arc::ptr_eq(info, &catalog.asset_type_info(descriptor)));
    }
}

#[tokio::test]
async fn config_without_descriptors_skips_runtime_query() {
    let failing = FailingCatalog { inner: catalog() };
    let cfg = config("rulesetName: Draft\n");
    let resolved = resolve_asset_infos(&failing, Some(&cfg), Side::Action)
        .await
        .unwrap();
    assert_eq!(resolved.len(), 4);
}

// -- idempotence ---------------------------------------------------------

#[tokio::test]
async fn repeated_resolution_is_stable_and_pure() {
    let catalog = catalog();
    let before = catalog.asset_descriptors().to_vec();
    let native_thing = catalog.asset_type_info(&before[0]);
    let cfg = config(
        r#"
descriptors:
  all:
    assets:
      "*":
        icon: star
        excludeAttributes: [notes]
        attributeDescriptors:
          temperature:
            constraints:
              - type: max
                max: 100
"#,
    );

    let first = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    let second = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(catalog.asset_descriptors(), &before[..]);
    // The shared native info is untouched by the override.
    assert_eq!(native_thing.asset_descriptor.icon.as_deref(), Some("cube"));
    assert_eq!(
        native_thing.attribute("temperature").unwrap().constraints,
        Some(vec![ValueConstraint::Min { min: 0.0 }])
    );
    assert!(native_thing.attribute("notes").is_some());
}

// -- asset type filtering ------------------------------------------------

#[tokio::test]
async fn all_include_list_wins_over_side_list() {
    let cfg = config(
        r#"
descriptors:
  all:
    includeAssets: [ThingAsset, RoomAsset]
  when:
    includeAssets: [LightAsset]
"#,
    );
    let sections = cfg.descriptors.as_ref().unwrap();
    let filter = AssetFilter::new(sections.section(Side::When), sections.all.as_ref(), vec![]);
    assert_eq!(filter.allowed, vec!["ThingAsset", "RoomAsset"]);

    let resolved = resolve_asset_infos(&catalog(), Some(&cfg), Side::When)
        .await
        .unwrap();
    assert_eq!(names(&resolved), vec!["ThingAsset", "RoomAsset"]);
}

#[tokio::test]
async fn side_include_list_replaces_default() {
    let cfg = config(
        r#"
descriptors:
  action:
    includeAssets: [LightAsset]
"#,
    );
    let catalog = catalog();
    let action = resolve_asset_infos(&catalog, Some(&cfg), Side::Action).await.unwrap();
    assert_eq!(names(&action), vec!["LightAsset"]);

    // The `when` side has no include list and falls back to the runtime set.
    let when = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    assert_eq!(names(&when), vec!["ThingAsset", "RoomAsset", "LightAsset"]);
}

#[tokio::test]
async fn exclusions_are_unioned() {
    let cfg = config(
        r#"
descriptors:
  all:
    excludeAssets: [RoomAsset]
  when:
    excludeAssets: [LightAsset]
"#,
    );
    let catalog = catalog();
    let when = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    assert_eq!(names(&when), vec!["ThingAsset"]);

    let action = resolve_asset_infos(&catalog, Some(&cfg), Side::Action).await.unwrap();
    assert_eq!(names(&action), vec!["ThingAsset", "LightAsset"]);
}

#[tokio::test]
async fn runtime_types_bound_the_default_allow_list() {
    let catalog = catalog().with_runtime_types(vec![
        "RoomAsset".to_string(),
        "ThingAsset".to_string(),
        "UnknownAsset".to_string(),
        "ConsoleAsset".to_string(),
    ]);
    let cfg = config("descriptors: {}\n");
    let resolved = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    // Catalog order, sentinel dropped, runtime-only names ignored.
    assert_eq!(names(&resolved), vec!["ThingAsset", "RoomAsset"]);
}

#[tokio::test]
async fn explicit_include_may_name_types_missing_at_runtime() {
    let catalog = catalog().with_runtime_types(vec!["ThingAsset".to_string()]);
    let cfg = config(
        r#"
descriptors:
  when:
    includeAssets: [LightAsset]
"#,
    );
    let resolved = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    assert_eq!(names(&resolved), vec!["LightAsset"]);
}

#[tokio::test]
async fn runtime_query_failure_propagates() {
    let failing = FailingCatalog { inner: catalog() };
    let cfg = config("descriptors: {}\n");
    let err = resolve_asset_infos(&failing, Some(&cfg), Side::When)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("asset service unavailable"));
}

// -- overrides -----------------------------------------------------------

#[tokio::test]
async fn types_without_override_share_the_catalog_info() {
    let catalog = catalog();
    let cfg = config(
        r#"
descriptors:
  when:
    assets:
      RoomAsset:
        icon: sofa
"#,
    );
    let resolved = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    let thing = catalog.asset_type_info(catalog.descriptor("ThingAsset").unwrap());
    let room = catalog.asset_type_info(catalog.descriptor("RoomAsset").unwrap());

    assert!(Arc::ptr_eq(&resolved[0], &thing));
    assert!(!Arc::ptr_eq(&resolved[1], &room));
    assert_eq!(resolved[1].asset_descriptor.icon.as_deref(), Some("sofa"));
    assert_eq!(room.asset_descriptor.icon.as_deref(), Some("door"));
}

#[tokio::test]
async fn asset_override_precedence() {
    let cfg = config(
        r#"
descriptors:
  all:
    assets:
      "*":
        icon: all-wildcard
      LightAsset:
        icon: all-light
      RoomAsset:
        icon: all-room
  when:
    assets:
      "*":
        icon: when-wildcard
      ThingAsset:
        icon: when-thing
"#,
    );
    let catalog = catalog();

    let when = resolve_asset_infos(&catalog, Some(&cfg), Side::When).await.unwrap();
    let icons: Vec<_> = when
        .iter()
        .map(|i| i.asset_descriptor.icon.as_deref().unwrap())
        .collect();
    // Side wildcard beats the `all` section's exact entries.
    assert_eq!(icons, vec!["when-thing", "when-wildcard", "when-wildcard"]);

    let action = resolve_asset_infos(&catalog, Some(&cfg), Side::Action).await.unwrap();
    let icons: Vec<_> = action
        .iter()
        .map(|i| i.asset_descriptor.icon.as_deref().unwrap())
        .collect();
    assert_eq!(icons, vec!["all-wildcard", "all-room", "all-light"]);
}

#[tokio::test]
async fn colour_override() {
    let cfg = config(
        r#"
descriptors:
  action:
    assets:
      ThingAsset:
        color: "00ff00"
"#,
    );
    let resolved = resolve_asset_infos(&catalog(), Some(&cfg), Side::Action)
        .await
        .unwrap();
    assert_eq!(resolved[0].asset_descriptor.colour.as_deref(), Some("00ff00"));
    assert_eq!(resolved[0].asset_descriptor.icon.as_deref(), Some("cube"));
}

#[tokio::test]
async fn attribute_include_and_exclude_patterns() {
    let cfg = config(
        r#"
descriptors:
  when:
    assets:
      ThingAsset:
        includeAttributes: ["*"]
        excludeAttributes: ["hum*"]
      RoomAsset:
        includeAttributes: [area, "loc*"]
"#,
    );
    let resolved = resolve_asset_infos(&catalog(), Some(&cfg), Side::When)
        .await
        .unwrap();

    let thing: Vec<_> = resolved[0].attribute_descriptors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(thing, vec!["temperature", "notes"]);

    let room: Vec<_> = resolved[1].attribute_descriptors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(room, vec!["area", "location"]);
}

#[tokio::test]
async fn constraints_are_prepended() {
    let cfg = config(
        r#"
descriptors:
  when:
    assets:
      ThingAsset:
        attributeDescriptors:
          temperature:
            type: positiveNumber
            units: [celsius]
            constraints:
              - type: max
                max: 50
"#,
    );
    let resolved = resolve_asset_infos(&catalog(), Some(&cfg), Side::When)
        .await
        .unwrap();
    let temperature = resolved[0].attribute("temperature").unwrap();
    assert_eq!(temperature.value_type, "positiveNumber");
    assert_eq!(temperature.units, Some(vec!["celsius".to_string()]));
    assert_eq!(
        temperature.constraints,
        Some(vec![
            ValueConstraint::Max { max: 50.0 },
            ValueConstraint::Min { min: 0.0 },
        ])
    );
}

#[tokio::test]
async fn empty_override_constraints_keep_native_ones() {
    let cfg = config(
        r#"
descriptors:
  when:
    assets:
      ThingAsset:
        attributeDescriptors:
          temperature:
            constraints: []
          humidity:
            constraints: []
"#,
    );
    let resolved = resolve_asset_infos(&catalog(), Some(&cfg), Side::When)
        .await
        .unwrap();
    assert_eq!(
        resolved[0].attribute("temperature").unwrap().constraints,
        Some(vec![ValueConstraint::Min { min: 0.0 }])
    );
    assert_eq!(resolved[0].attribute("humidity").unwrap().constraints, Some(vec![]));
}

#[tokio::test]
async fn attribute_override_lookup_order() {
    let cfg = config(
        r#"
descriptors:
  all:
    attributeDescriptors:
      notes:
        type: all-notes
      humidity:
        type: all-humidity
      area:
        type: all-area
    assets:
      RoomAsset:
        icon: door-open
  when:
    attributeDescriptors:
      humidity:
        type: when-humidity
    assets:
      ThingAsset:
        attributeDescriptors:
          notes:
            type: thing-notes
"#,
    );
    let resolved = resolve_asset_infos(&catalog(), Some(&cfg), Side::When)
        .await
        .unwrap();

    let thing = &resolved[0];
    assert_eq!(thing.attribute("notes").unwrap().value_type, "thing-notes");
    assert_eq!(thing.attribute("humidity").unwrap().value_type, "when-humidity");
    assert_eq!(thing.attribute("temperature").unwrap().value_type, "number");

    // RoomAsset picks up the `all` override, which activates the shared maps.
    let room = &resolved[1];
    assert_eq!(room.attribute("area").unwrap().value_type, "all-area");
    assert_eq!(room.attribute("notes").unwrap().value_type, "all-notes");

    // LightAsset has no type override at all, so shared maps do not apply.
    let light = &resolved[2];
    assert_eq!(light.attribute("onOff").unwrap().value_type, "boolean");
}

// -- ConfigResolver ------------------------------------------------------

#[tokio::test]
async fn resolver_resolves_both_sides() {
    let resolver = ConfigResolver::new(Arc::new(catalog()));
    let cfg = config(
        r#"
descriptors:
  when:
    excludeAssets: [LightAsset]
  action:
    includeAssets: [LightAsset]
"#,
    );
    let sides = resolver.resolve_sides(Some(&cfg)).await.unwrap();
    assert_eq!(names(sides.side(Side::When)), vec!["ThingAsset", "RoomAsset"]);
    assert_eq!(names(sides.side(Side::Action)), vec!["LightAsset"]);
}
