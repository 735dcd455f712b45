//! Module registry - the ordered set of catalogs known to the process
//!
//! Built once at startup from a compile-time-known list, mirroring a
//! static registration table. Lookup is a linear scan; registries are
//! small and cold.

use crate::catalog::Catalog;
use serde::Serialize;

/// One row of a registry-level listing (module id + description).
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRow {
    pub id: String,
    pub description: String,
}

/// Ordered, immutable collection of registered catalogs.
///
/// Registry order defines the execution order of "run everything"
/// batches. There is no insertion or removal after construction.
#[derive(Debug, Default)]
pub struct Registry {
    catalogs: Vec<Catalog>,
}

impl Registry {
    /// Build the registry from its full catalog list.
    pub fn new(catalogs: Vec<Catalog>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = catalogs.iter().map(Catalog::id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "module identifiers must be unique"
        );
        Self { catalogs }
    }

    /// Find a catalog by module identifier.
    pub fn lookup(&self, id: &str) -> Option<&Catalog> {
        self.catalogs.iter().find(|c| c.id() == id)
    }

    /// Iterate catalogs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.iter()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// True when no module is registered.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Registry-level listing: one row per module.
    pub fn modules(&self) -> Vec<ModuleRow> {
        self.catalogs
            .iter()
            .map(|c| ModuleRow {
                id: c.id().to_string(),
                description: c.description().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TestRecord;
    use pretty_assertions::assert_eq;

    fn pass() -> Result<(), String> {
        Ok(())
    }

    fn sample() -> Registry {
        Registry::new(vec![
            Catalog::new("net", "Networking", vec![TestRecord::new("ping", pass)]),
            Catalog::new("fs", "Filesystem", vec![TestRecord::new("mount", pass)]),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = sample();
        assert_eq!(registry.lookup("fs").unwrap().description(), "Filesystem");
        assert!(registry.lookup("bogus").is_none());
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let registry = sample();
        let ids: Vec<&str> = registry.iter().map(Catalog::id).collect();
        assert_eq!(ids, vec!["net", "fs"]);
    }

    #[test]
    fn test_module_rows() {
        let rows = sample().modules();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "net");
        assert_eq!(rows[1].description, "Filesystem");
    }
}
