//! In-memory template store with built-in templates.

use std::{collections::HashMap, sync::Arc};

use fastforge_core::{
    application::ports::TemplateStore,
    domain::{Architecture, ProjectIdentity, SupportFile, TemplateKey},
    error::ForgeResult,
};

use crate::templates;

type Catalog = HashMap<(Architecture, TemplateKey), String>;

/// Read-only template store. Cloning shares the same catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Catalog>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in catalog for every architecture.
    pub fn with_builtin() -> Self {
        let catalog = Architecture::ALL
            .into_iter()
            .flat_map(|arch| {
                templates::catalog(arch)
                    .iter()
                    .map(move |(key, body)| ((arch, TemplateKey::from_static(key)), body.to_string()))
            })
            .collect();

        Self {
            inner: Arc::new(catalog),
        }
    }

    /// Return a copy of this store with one more template registered.
    pub fn with_template(&self, architecture: Architecture, key: &str, body: &str) -> Self {
        let mut catalog = Catalog::clone(&self.inner);
        catalog.insert((architecture, TemplateKey::new(key)), body.to_string());
        Self {
            inner: Arc::new(catalog),
        }
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, architecture: Architecture, key: &TemplateKey) -> ForgeResult<Option<String>> {
        Ok(self.inner.get(&(architecture, key.clone())).cloned())
    }

    fn support_files(
        &self,
        architecture: Architecture,
        identity: &ProjectIdentity,
    ) -> ForgeResult<Vec<SupportFile>> {
        Ok(templates::support_files(architecture, identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_has_every_catalog_entry() {
        let store = InMemoryStore::with_builtin();
        assert_eq!(store.len(), 10 + 10 + 8);

        let clean = |key| store.get(Architecture::Clean, &TemplateKey::from_static(key)).unwrap();
        assert!(clean("domain_entity").is_some());
        assert!(clean("crud").is_none());
    }

    #[test]
    fn lookup_is_scoped_by_architecture() {
        let store = InMemoryStore::with_builtin();
        let crud = TemplateKey::from_static("crud");

        assert!(store.get(Architecture::Modular, &crud).unwrap().is_some());
        assert!(store.get(Architecture::Layered, &crud).unwrap().is_none());
    }

    #[test]
    fn with_template_leaves_original_untouched() {
        let base = InMemoryStore::new();
        let extended = base.with_template(Architecture::Layered, "util", "# util");

        assert!(base.is_empty());
        assert_eq!(
            extended
                .get(Architecture::Layered, &TemplateKey::new("util"))
                .unwrap()
                .as_deref(),
            Some("# util")
        );
    }
}
