//! Resource service implementation.
//!
//! The ResourceService lists one resource per indexed module and serves the
//! module's raw source text on read.

use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents, ResourceTemplate,
};
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::{MODULE_MIME_TYPE, get_all_resource_templates, module_from_uri, module_uri};
use crate::domains::reference::ModuleIndex;

/// Service for listing and reading module resources.
pub struct ResourceService {
    /// The module index backing every resource.
    index: Arc<ModuleIndex>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the given module index.
    pub fn new(index: Arc<ModuleIndex>) -> Self {
        info!("Initializing ResourceService ({} modules)", index.len());

        Self {
            index,
            templates: get_all_resource_templates(),
        }
    }

    /// List one resource per indexed module, in index order.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.index
            .iter()
            .map(|(name, record)| {
                let mut raw = RawResource::new(module_uri(name), name);
                raw.description = Some(format!(
                    "Reference source of {} ({} exports)",
                    name,
                    record.exports.len()
                ));
                raw.mime_type = Some(MODULE_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a module's source by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let module_name = module_from_uri(uri).ok_or_else(|| ResourceError::invalid_uri(uri))?;
        let record = self
            .index
            .get(module_name)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(record.content.clone(), uri)],
        })
    }
}
