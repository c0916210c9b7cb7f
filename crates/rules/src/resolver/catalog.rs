//! Asset catalog capability consumed by the resolver.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use ruledesk_core::{AssetTypeDescriptor, AssetTypeInfo};

use super::error::Result;

/// Read access to the host's asset model.
///
/// Injected into the resolver instead of a process-wide registry so that
/// resolution stays a function of its inputs.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Names of every asset type present at runtime.
    ///
    /// May be a superset or subset of [`asset_descriptors`](Self::asset_descriptors);
    /// hosts typically back this with a remote query.
    async fn asset_type_names(&self) -> Result<Vec<String>>;

    /// Every known asset type descriptor, in display order.
    fn asset_descriptors(&self) -> &[AssetTypeDescriptor];

    /// Native info for a descriptor.
    fn asset_type_info(&self, descriptor: &AssetTypeDescriptor) -> Arc<AssetTypeInfo>;
}

/// Blanket implementation so `Arc<dyn AssetCatalog>` can be used directly.
#[async_trait]
impl<T: AssetCatalog + ?Sized> AssetCatalog for Arc<T> {
    async fn asset_type_names(&self) -> Result<Vec<String>> {
        (**self).asset_type_names().await
    }

    fn asset_descriptors(&self) -> &[AssetTypeDescriptor] {
        (**self).asset_descriptors()
    }

    fn asset_type_info(&self, descriptor: &AssetTypeDescriptor) -> Arc<AssetTypeInfo> {
        (**self).asset_type_info(descriptor)
    }
}

/// In-memory catalog built from a fixed list of descriptors.
///
/// Builds one shared [`AssetTypeInfo`] per descriptor up front, so every
/// resolution that passes a type through hands out the same allocation.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    descriptors: Vec<AssetTypeDescriptor>,
    infos: HashMap<String, Arc<AssetTypeInfo>>,
    /// Explicit runtime names; `None` reports every descriptor name.
    runtime_types: Option<Vec<String>>,
}

impl StaticCatalog {
    pub fn new(descriptors: Vec<AssetTypeDescriptor>) -> Self {
        let infos = descriptors
            .iter()
            .map(|d| (d.name.clone(), Arc::new(AssetTypeInfo::from_descriptor(d))))
            .collect();
        Self {
            descriptors,
            infos,
            runtime_types: None,
        }
    }

    /// Report `names` from [`AssetCatalog::asset_type_names`] instead of the descriptor names.
    pub fn with_runtime_types(mut self, names: Vec<String>) -> Self {
        self.runtime_types = Some(names);
        self
    }

    pub fn descriptor(&self, name: &str) -> Option<&AssetTypeDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[async_trait]
impl AssetCatalog for StaticCatalog {
    async fn asset_type_names(&self) -> Result<Vec<String>> {
        Ok(match &self.runtime_types {
            Some(names) => names.clone(),
            None => self.descriptors.iter().map(|d| d.name.clone()).collect(),
        })
    }

    fn asset_descriptors(&self) -> &[AssetTypeDescriptor] {
        &self.descriptors
    }

    fn asset_type_info(&self, descriptor: &AssetTypeDescriptor) -> Arc<AssetTypeInfo> {
        match self.infos.get(&descriptor.name) {
            Some(info) => Arc::clone(info),
            None => Arc::new(AssetTypeInfo::from_descriptor(descriptor)),
        }
    }
}
