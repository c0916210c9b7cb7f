use serde::{Deserialize, Serialize};

/// Sentinel asset type that never appears in the default allow-list.
pub const UNKNOWN_ASSET_TYPE: &str = "UnknownAsset";

/// A validation constraint attached to an attribute value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValueConstraint {
    Min {
        min: f64,
    },
    Max {
        max: f64,
    },
    Size {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    Pattern {
        regexp: String,
    },
    AllowedValues {
        #[serde(rename = "allowedValues")]
        allowed_values: Vec<serde_json::Value>,
        #[serde(
            rename = "allowedValueNames",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        allowed_value_names: Option<Vec<String>>,
    },
    NotNull,
    NotEmpty,
    NotBlank,
    Past,
    Future,
}

/// Display hints for an attribute value. Overrides replace it as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_boolean: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_date: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_number: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_slider: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_js_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f64>,
}

/// Metadata for one named property of an asset type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeDescriptor {
    pub name: String,
    /// Value type name, e.g. `"number"` or `"GEO_JSONPoint"`.
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<ValueConstraint>>,
    #[serde(default)]
    pub optional: bool,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            format: None,
            units: None,
            constraints: None,
            optional: false,
        }
    }
}

/// Catalog entry describing one asset kind.
///
/// Owned by the catalog and never mutated by resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetTypeDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
    #[serde(default, rename = "metaItems")]
    pub meta_items: Vec<String>,
}

/// Identity and presentation of an asset type (the overridable header of an info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

/// Resolved view of one asset type for a given editing side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeInfo {
    pub asset_descriptor: AssetDescriptor,
    pub attribute_descriptors: Vec<AttributeDescriptor>,
    #[serde(default)]
    pub meta_item_descriptors: Vec<String>,
    #[serde(default)]
    pub value_descriptors: Vec<String>,
}

impl AssetTypeInfo {
    /// Build the native info of a catalog descriptor.
    ///
    /// Value descriptors are the distinct attribute value types, in first-seen order.
    pub fn from_descriptor(descriptor: &AssetTypeDescriptor) -> Self {
        let mut value_descriptors: Vec<String> = Vec::new();
        for attr in &descriptor.attributes {
            if !value_descriptors.contains(&attr.value_type) {
                value_descriptors.push(attr.value_type.clone());
            }
        }

        Self {
            asset_descriptor: AssetDescriptor {
                name: descriptor.name.clone(),
                icon: descriptor.icon.clone(),
                colour: descriptor.colour.clone(),
            },
            attribute_descriptors: descriptor.attributes.clone(),
            meta_item_descriptors: descriptor.meta_items.clone(),
            value_descriptors,
        }
    }

    pub fn name(&self) -> &str {
        &self.asset_descriptor.name
    }

    /// Look up an attribute descriptor by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attribute_descriptors.iter().find(|a| a.name == name)
    }
}
