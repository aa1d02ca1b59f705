//! Owned holder for the currently loaded catalog.
//!
//! The store is an explicit context object: hosts create one, load a catalog
//! into it, and hand out resolvers that borrow it. A failed load leaves the
//! previous catalog (or nothing) in place.

use crate::catalog::location::CatalogLocation;
use crate::catalog::model::ForageCatalog;
use crate::catalog::resolver::CatalogResolver;
use crate::error::CatalogError;
use tracing::debug;

/// Parsed catalog plus the location it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedCatalog {
    pub catalog: ForageCatalog,
    pub source: CatalogLocation,
}

#[derive(Debug, Default)]
/// In-memory store for a single catalog with load/clear lifecycle.
pub struct CatalogStore {
    loaded: Option<LoadedCatalog>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog at `location` and replace the current one on success.
    pub fn load(&mut self, location: CatalogLocation) -> Result<&ForageCatalog, CatalogError> {
        let catalog = location.fetch()?;
        Ok(self.replace(catalog, location))
    }

    /// Install an already-parsed catalog, dropping whatever was loaded before.
    pub fn replace(&mut self, catalog: ForageCatalog, source: CatalogLocation) -> &ForageCatalog {
        debug!(source = %source, replaced = self.loaded.is_some(), "installing catalog");
        let loaded = self.loaded.insert(LoadedCatalog { catalog, source });
        &loaded.catalog
    }

    /// Forget the loaded catalog.
    pub fn clear(&mut self) {
        if let Some(previous) = self.loaded.take() {
            debug!(source = %previous.source, "catalog cleared");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn catalog(&self) -> Option<&ForageCatalog> {
        self.loaded.as_ref().map(|loaded| &loaded.catalog)
    }

    pub fn source(&self) -> Option<&CatalogLocation> {
        self.loaded.as_ref().map(|loaded| &loaded.source)
    }

    /// Query surface over the current catalog; empty when nothing is loaded.
    pub fn resolver(&self) -> CatalogResolver<'_> {
        CatalogResolver::new(self.catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn catalog_with(artifact_id: &str) -> ForageCatalog {
        ForageCatalog::from_json_str(&format!(
            r#"{{"components":[{{"artifactId":"{artifact_id}"}}]}}"#
        ))
        .unwrap()
    }

    #[test]
    fn starts_unloaded_with_empty_resolver() {
        let store = CatalogStore::new();
        assert!(!store.is_loaded());
        assert!(store.source().is_none());
        assert!(store.resolver().all_beans().is_empty());
    }

    #[test]
    fn replace_then_clear() {
        let mut store = CatalogStore::new();
        let source = CatalogLocation::Path(PathBuf::from("first.json"));
        store.replace(catalog_with("forage-jdbc"), source.clone());
        assert_eq!(store.source(), Some(&source));
        assert!(store.resolver().component_by_artifact_id("forage-jdbc").is_some());

        store.replace(
            catalog_with("forage-jms"),
            CatalogLocation::Path(PathBuf::from("second.json")),
        );
        assert!(store.resolver().component_by_artifact_id("forage-jdbc").is_none());
        assert!(store.resolver().component_by_artifact_id("forage-jms").is_some());

        store.clear();
        assert!(!store.is_loaded());
        assert!(store.catalog().is_none());
    }

    #[test]
    fn failed_load_keeps_previous_catalog() {
        let mut store = CatalogStore::new();
        let source = CatalogLocation::Path(PathBuf::from("kept.json"));
        store.replace(catalog_with("forage-jdbc"), source.clone());

        let result = store.load(CatalogLocation::parse("/no/such/catalog.json"));
        assert!(result.is_err());
        assert_eq!(store.source(), Some(&source));
        assert!(store.resolver().component_by_artifact_id("forage-jdbc").is_some());
    }
}
