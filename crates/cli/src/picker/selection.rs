//! The selection store: name-keyed multi-select state.
//!
//! Selection is independent of filtering. Entries are toggled by name, so
//! narrowing the filter until an entry disappears and widening it again
//! leaves its selection untouched. The store only accepts names that exist
//! in the catalog it was built for.

use std::collections::HashSet;

use indexmap::IndexMap;
use mcp_picker_core::output::SelectionSnapshot;
use mcp_picker_core::server_definitions::Catalog;

#[derive(Debug, Clone)]
pub struct SelectionStore {
    known_names: HashSet<String>,
    selected: IndexMap<String, bool>,
}

impl SelectionStore {
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            known_names: catalog.iter().map(|entry| entry.name.clone()).collect(),
            selected: IndexMap::new(),
        }
    }

    /// Flips the selection for `name`, inserting `true` if absent.
    /// Silently ignores names not present in the catalog.
    pub fn toggle(&mut self, name: &str) {
        if !self.known_names.contains(name) {
            return;
        }

        let value = self.selected.entry(name.to_string()).or_insert(false);
        *value = !*value;
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.get(name).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.values().filter(|&&selected| selected).count()
    }

    /// The full current state, taken at confirm time.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use mcp_picker_core::server_definitions::ServerConfig;

    fn catalog_of(names: &[&str]) -> Catalog {
        let configs: IndexMap<String, ServerConfig> = names
            .iter()
            .map(|name| (name.to_string(), ServerConfig::default()))
            .collect();
        Catalog::new(configs)
    }

    #[test]
    fn test_toggle_flips_state() {
        let catalog = catalog_of(&["github"]);
        let mut store = SelectionStore::for_catalog(&catalog);

        assert!(!store.is_selected("github"));
        store.toggle("github");
        assert!(store.is_selected("github"));
        store.toggle("github");
        assert!(!store.is_selected("github"));
    }

    #[test]
    fn test_toggle_unknown_name_is_noop() {
        let catalog = catalog_of(&["github"]);
        let mut store = SelectionStore::for_catalog(&catalog);

        store.toggle("gitlab");
        assert!(!store.is_selected("gitlab"));
        assert_eq!(store.snapshot().len(), 0);
    }

    #[test]
    fn test_selected_count_ignores_untoggled() {
        let catalog = catalog_of(&["a", "b", "c"]);
        let mut store = SelectionStore::for_catalog(&catalog);

        store.toggle("a");
        store.toggle("b");
        store.toggle("b"); // back off
        assert_eq!(store.selected_count(), 1);
    }

    #[test]
    fn test_snapshot_contains_explicit_state() {
        let catalog = catalog_of(&["a", "b"]);
        let mut store = SelectionStore::for_catalog(&catalog);

        store.toggle("a");
        store.toggle("b");
        store.toggle("b");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.get("a"), Some(&true));
        assert_eq!(snapshot.get("b"), Some(&false));
    }
}
