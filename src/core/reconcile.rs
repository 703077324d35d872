//! Reconciling discovered identifiers with the existing catalog.
//!
//! [`reconcile`] builds the catalog `extract` writes; [`diff`] computes the
//! report `check` prints. Both agree: `diff` lists exactly the identifiers
//! `reconcile` inserts and deletes.

use std::collections::BTreeMap;

use super::{
    DiscoveredSet,
    catalog::{Catalog, CatalogEntry},
};

/// Identifiers that differ between the source tree and the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDiff {
    /// Discovered but missing from the catalog, sorted.
    pub added: Vec<String>,
    /// In the catalog but no longer discovered, sorted.
    pub removed: Vec<String>,
}

impl CatalogDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// One `Added: <id>` line per added identifier, then one `Removed: <id>`
    /// line per removed identifier.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let added = self.added.iter().map(|id| format!("Added: {}", id));
        let removed = self.removed.iter().map(|id| format!("Removed: {}", id));
        added.chain(removed)
    }
}

/// Result of reconciling for `extract`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// The new catalog, sorted by identifier.
    pub catalog: Catalog,
    pub diff: CatalogDiff,
}

pub fn diff(discovered: &DiscoveredSet, catalog: &Catalog) -> CatalogDiff {
    let existing = catalog.ids();

    let added = discovered
        .iter()
        .filter(|id| !existing.contains(id.as_str()))
        .cloned()
        .collect();
    let removed = existing
        .iter()
        .filter(|id| !discovered.contains(**id))
        .map(|id| id.to_string())
        .collect();

    CatalogDiff { added, removed }
}

/// Rebuild `catalog` so its identifiers are exactly `discovered`.
///
/// Existing translations are kept untouched, new identifiers get an empty
/// translation and identifiers no longer discovered are dropped. When the
/// catalog holds the same identifier twice the later entry wins.
pub fn reconcile(discovered: &DiscoveredSet, catalog: Catalog) -> Reconciliation {
    let diff = diff(discovered, &catalog);

    let mut working: BTreeMap<String, CatalogEntry> = catalog
        .entries
        .into_iter()
        .map(|entry| (entry.id.clone(), entry))
        .collect();

    for id in &diff.added {
        working.insert(id.clone(), CatalogEntry::untranslated(id.as_str()));
    }
    for id in &diff.removed {
        working.remove(id);
    }

    Reconciliation {
        catalog: Catalog::new(working.into_values().collect()),
        diff,
    }
}
