//! Reference domain module.
//!
//! Indexes the public exports of the Endstone reference sources and answers
//! queries about them.
//!
//! ## Architecture
//!
//! - `extractor.rs` - Text scanner for `__all__` declarations
//! - `catalog.rs` - Reference file to module name mapping
//! - `index.rs` - Immutable module index built once at startup
//! - `report.rs` - Markdown reports served by the tools

pub mod catalog;
pub mod extractor;
mod index;
pub mod report;

pub use catalog::{CatalogEntry, EVENT_MODULE, ModuleCatalog};
pub use extractor::extract_exports;
pub use index::{ExportMatch, LoadError, ModuleIndex, ModuleRecord};
