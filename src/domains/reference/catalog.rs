//! Reference file catalog.
//!
//! Maps reference file names to the logical module names they back, and
//! designates which module holds the event types.

/// Default module holding event types.
pub const EVENT_MODULE: &str = "endstone.event";

/// Reference files shipped with the Endstone Python package.
const ENDSTONE_MODULES: &[(&str, &str)] = &[
    ("__init__.py", "endstone"),
    ("actor.py", "endstone.actor"),
    ("ban.py", "endstone.ban"),
    ("block.py", "endstone.block"),
    ("boss.py", "endstone.boss"),
    ("command.py", "endstone.command"),
    ("damage.py", "endstone.damage"),
    ("enchantments.py", "endstone.enchantments"),
    ("event.py", "endstone.event"),
    ("form.py", "endstone.form"),
    ("inventory.py", "endstone.inventory"),
    ("lang.py", "endstone.lang"),
    ("level.py", "endstone.level"),
    ("map.py", "endstone.map"),
    ("permissions.py", "endstone.permissions"),
    ("plugin.py", "endstone.plugin"),
    ("scheduler.py", "endstone.scheduler"),
    ("scoreboard.py", "endstone.scoreboard"),
    ("util.py", "endstone.util"),
];

/// One configured reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// File name relative to the reference directory.
    pub file_name: String,

    /// Logical module name the file is indexed under.
    pub module_name: String,
}

/// Ordered set of reference files to index.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    entries: Vec<CatalogEntry>,
    event_module: String,
}

impl ModuleCatalog {
    /// Create a catalog from `(file name, module name)` pairs.
    pub fn new<I, F, M>(entries: I, event_module: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(file_name, module_name)| CatalogEntry {
                    file_name: file_name.into(),
                    module_name: module_name.into(),
                })
                .collect(),
            event_module: event_module.into(),
        }
    }

    /// The catalog of the Endstone reference package.
    pub fn endstone() -> Self {
        Self::new(ENDSTONE_MODULES.iter().copied(), EVENT_MODULE)
    }

    /// Entries in configuration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Name of the module that holds event types.
    pub fn event_module(&self) -> &str {
        &self.event_module
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::endstone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endstone_catalog() {
        let catalog = ModuleCatalog::endstone();
        assert_eq!(catalog.entries().len(), 19);
        assert_eq!(catalog.event_module(), "endstone.event");

        let first = &catalog.entries()[0];
        assert_eq!(first.file_name, "__init__.py");
        assert_eq!(first.module_name, "endstone");
        assert!(
            catalog
                .entries()
                .iter()
                .any(|e| e.file_name == "event.py" && e.module_name == EVENT_MODULE)
        );
    }

    #[test]
    fn test_custom_catalog_preserves_order() {
        let catalog = ModuleCatalog::new([("b.py", "pkg.b"), ("a.py", "pkg.a")], "pkg.b");
        let names: Vec<_> = catalog
            .entries()
            .iter()
            .map(|e| e.module_name.as_str())
            .collect();
        assert_eq!(names, vec!["pkg.b", "pkg.a"]);
    }
}
