//! Per-locale catalog storage

use crate::message::MessageTree;
use std::collections::HashMap;
use tracing::debug;

/// Holds one message tree per loaded locale.
///
/// Trees are replaced wholesale on every store; nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalogs: HashMap<String, MessageTree>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `tree` as the complete catalog for `locale`, returning the
    /// catalog it replaced
    pub fn set_catalog(
        &mut self,
        locale: impl Into<String>,
        tree: MessageTree,
    ) -> Option<MessageTree> {
        let locale = locale.into();
        debug!("Storing catalog for locale {} ({} entries)", locale, tree.leaf_count());
        self.catalogs.insert(locale, tree)
    }

    /// Whether a catalog is loaded for `locale`
    pub fn has_catalog(&self, locale: &str) -> bool {
        self.catalogs.contains_key(locale)
    }

    /// Catalog for `locale`, if loaded
    pub fn catalog(&self, locale: &str) -> Option<&MessageTree> {
        self.catalogs.get(locale)
    }

    /// Drop the catalog for `locale`
    pub fn remove_catalog(&mut self, locale: &str) -> Option<MessageTree> {
        self.catalogs.remove(locale)
    }

    /// Loaded locale codes, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of loaded catalogs
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// Whether no catalog is loaded
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl<K: Into<String>> Extend<(K, MessageTree)> for CatalogStore {
    fn extend<T: IntoIterator<Item = (K, MessageTree)>>(&mut self, iter: T) {
        for (locale, tree) in iter {
            self.set_catalog(locale, tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_catalog_replaces_wholesale() {
        let mut store = CatalogStore::new();
        store.set_catalog("en", MessageTree::node().with_entry("a", "1").with_entry("b", "2"));
        let previous = store.set_catalog("en", MessageTree::node().with_entry("c", "3"));

        assert_eq!(previous.map(|t| t.leaf_count()), Some(2));
        let current = store.catalog("en").unwrap();
        assert_eq!(current.lookup(["a"]), None);
        assert_eq!(current.lookup(["c"]), Some("3"));
    }

    #[test]
    fn test_membership_and_listing() {
        let mut store = CatalogStore::new();
        assert!(store.is_empty());
        store.extend([("fr", MessageTree::node()), ("de", MessageTree::node())]);

        assert!(store.has_catalog("fr"));
        assert!(!store.has_catalog("en"));
        assert_eq!(store.locales(), vec!["de", "fr"]);

        store.remove_catalog("de");
        assert_eq!(store.len(), 1);
    }
}
