//! Scanning and reconciliation engine.
//!
//! ## Pipeline
//!
//! 1. `file_scanner` walks the source roots and filters files
//! 2. `scanner` parses each Go file and applies the `patterns` rules
//! 3. `dynamic` adds identifiers that only exist at runtime
//! 4. `catalog` loads the translations file
//! 5. `reconcile` rebuilds the catalog (extract) or diffs it (check)
//!
//! `context` ties the steps together for one run.

use std::collections::BTreeSet;

pub mod catalog;
pub mod context;
pub mod dynamic;
pub mod file_scanner;
pub mod patterns;
pub mod reconcile;
pub mod scanner;

pub use catalog::{Catalog, CatalogEntry, MalformedPolicy};
pub use context::ExtractContext;
pub use reconcile::{CatalogDiff, Reconciliation, diff, reconcile};

/// Identifiers found in the source tree. Presence only, kept sorted.
pub type DiscoveredSet = BTreeSet<String>;
