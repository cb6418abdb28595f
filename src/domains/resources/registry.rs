//! Resource Registry - URI scheme and templates for module resources.
//!
//! Every indexed reference module is readable as
//! `endstone://module/{module}`.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

/// URI prefix of module source resources.
pub const MODULE_URI_PREFIX: &str = "endstone://module/";

/// MIME type of reference sources.
pub const MODULE_MIME_TYPE: &str = "text/x-python";

/// Resource URI for a module.
pub fn module_uri(module_name: &str) -> String {
    format!("{MODULE_URI_PREFIX}{module_name}")
}

/// Module name addressed by a resource URI.
pub fn module_from_uri(uri: &str) -> Option<&str> {
    uri.strip_prefix(MODULE_URI_PREFIX)
        .filter(|module| !module.is_empty())
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: format!("{MODULE_URI_PREFIX}{{module}}"),
            name: "Endstone Module Source".to_string(),
            title: Some("Reference Module Source".to_string()),
            description: Some(
                "Raw reference source of an Endstone module by module name (e.g., endstone.event)"
                    .to_string(),
            ),
            mime_type: Some(MODULE_MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}
