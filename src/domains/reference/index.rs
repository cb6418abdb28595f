//! In-memory module index.
//!
//! The index is built once at startup from a [`ModuleCatalog`] and is
//! read-only afterwards. Iteration always follows catalog order.

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::catalog::ModuleCatalog;
use super::extractor::extract_exports;

/// Errors raised while loading a single reference file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Indexed data for one reference module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    /// Path of the file the record was read from.
    pub source_path: PathBuf,

    /// Exported names in declaration order.
    pub exports: Vec<String>,

    /// Raw file text.
    pub content: String,
}

impl ModuleRecord {
    /// Build a record from already-loaded text.
    pub fn from_content(source_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            source_path: source_path.into(),
            exports: extract_exports(&content),
            content,
        }
    }

    /// Read and index the file at `path`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_content(path, content))
    }
}

/// A single search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportMatch<'a> {
    /// The matching export name.
    pub export: &'a str,

    /// The module declaring it.
    pub module: &'a str,
}

/// Immutable mapping from module name to [`ModuleRecord`].
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    modules: IndexMap<String, ModuleRecord>,
    event_module: String,
}

impl ModuleIndex {
    /// Build the index by reading every catalog entry found under `base_dir`.
    ///
    /// Missing files are skipped silently. Files that exist but cannot be
    /// read are logged and skipped; the build itself never fails.
    pub fn build(catalog: &ModuleCatalog, base_dir: &Path) -> Self {
        let mut modules = IndexMap::with_capacity(catalog.entries().len());

        for entry in catalog.entries() {
            let path = base_dir.join(&entry.file_name);
            if !path.exists() {
                debug!("Skipping {}: {} not found", entry.module_name, path.display());
                continue;
            }

            match ModuleRecord::load(&path) {
                Ok(record) => {
                    debug!(
                        "Indexed {} ({} exports)",
                        entry.module_name,
                        record.exports.len()
                    );
                    modules.insert(entry.module_name.clone(), record);
                }
                Err(e) => warn!("Failed to load {}: {}", entry.file_name, e),
            }
        }

        info!(
            "Indexed {} of {} reference modules from {}",
            modules.len(),
            catalog.entries().len(),
            base_dir.display()
        );

        Self {
            modules,
            event_module: catalog.event_module().to_string(),
        }
    }

    /// Build an index from records that are already in memory.
    pub fn from_records<I, S>(records: I, event_module: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (S, ModuleRecord)>,
        S: Into<String>,
    {
        Self {
            modules: records
                .into_iter()
                .map(|(name, record)| (name.into(), record))
                .collect(),
            event_module: event_module.into(),
        }
    }

    /// Look up a module by name.
    pub fn get(&self, module_name: &str) -> Option<&ModuleRecord> {
        self.modules.get(module_name)
    }

    /// Iterate over `(module name, record)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleRecord)> {
        self.modules.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Module names in index order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Number of indexed modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module was indexed.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total number of exports across all modules.
    pub fn total_exports(&self) -> usize {
        self.modules.values().map(|r| r.exports.len()).sum()
    }

    /// Name of the module designated to hold event types.
    pub fn event_module_name(&self) -> &str {
        &self.event_module
    }

    /// The event module's record, if it was indexed.
    pub fn event_module(&self) -> Option<&ModuleRecord> {
        self.modules.get(&self.event_module)
    }

    /// Case-insensitive substring search over every export of every module.
    ///
    /// Results are ordered by module, then by declaration order.
    pub fn search(&self, query: &str) -> Vec<ExportMatch<'_>> {
        let needle = query.to_lowercase();
        self.iter()
            .flat_map(|(module, record)| {
                record
                    .exports
                    .iter()
                    .map(move |export| ExportMatch {
                        export: export.as_str(),
                        module,
                    })
            })
            .filter(|m| m.export.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn test_catalog() -> ModuleCatalog {
        ModuleCatalog::new(
            [
                ("event.py", "pkg.event"),
                ("form.py", "pkg.form"),
                ("missing.py", "pkg.missing"),
            ],
            "pkg.event",
        )
    }

    #[test]
    fn test_build_skips_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "event.py", r#"__all__ = ["Event", "PlayerJoinEvent"]"#);
        write(temp_dir.path(), "form.py", "__all__ = [\n    \"ActionForm\",\n]\n");

        let index = ModuleIndex::build(&test_catalog(), temp_dir.path());

        assert_eq!(index.len(), 2);
        assert!(index.get("pkg.missing").is_none());
        let names: Vec<_> = index.module_names().collect();
        assert_eq!(names, vec!["pkg.event", "pkg.form"]);

        let event = index.get("pkg.event").unwrap();
        assert_eq!(event.exports, vec!["Event", "PlayerJoinEvent"]);
        assert_eq!(event.source_path, temp_dir.path().join("event.py"));
        assert!(event.content.contains("PlayerJoinEvent"));
    }

    #[test]
    fn test_build_skips_unreadable_files() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "event.py", r#"__all__ = ["Event"]"#);
        fs::write(temp_dir.path().join("form.py"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let index = ModuleIndex::build(&test_catalog(), temp_dir.path());

        assert_eq!(index.len(), 1);
        assert!(index.get("pkg.form").is_none());
    }

    #[test]
    fn test_build_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let index = ModuleIndex::build(&test_catalog(), temp_dir.path());
        assert!(index.is_empty());
        assert!(index.event_module().is_none());
        assert_eq!(index.event_module_name(), "pkg.event");
    }

    #[test]
    fn test_load_error_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = ModuleRecord::load(&temp_dir.path().join("absent.py")).unwrap_err();
        assert!(err.to_string().contains("absent.py"));
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let index = ModuleIndex::from_records(
            [
                (
                    "pkg.form",
                    ModuleRecord::from_content(
                        "form.py",
                        r#"__all__ = ["ActionForm", "ModalForm", "Label"]"#,
                    ),
                ),
                (
                    "pkg.util",
                    ModuleRecord::from_content("util.py", r#"__all__ = ["Transform", "Vector"]"#),
                ),
            ],
            "pkg.event",
        );

        let hits = index.search("FORM");
        assert_eq!(
            hits,
            vec![
                ExportMatch { export: "ActionForm", module: "pkg.form" },
                ExportMatch { export: "ModalForm", module: "pkg.form" },
                ExportMatch { export: "Transform", module: "pkg.util" },
            ]
        );
        assert!(index.search("nothing-like-this").is_empty());
        assert_eq!(index.total_exports(), 5);
    }
}
