//! Loading and saving the translation catalog.
//!
//! The catalog is a JSON array of `{ "id": ..., "translation": ... }` objects.
//! Translations are opaque: strings, plural objects and `null` all round-trip
//! unchanged, including object key order.

use std::{
    collections::BTreeSet,
    fs,
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub translation: Value,
}

impl CatalogEntry {
    /// Placeholder entry for a newly discovered identifier.
    pub fn untranslated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            translation: Value::String(String::new()),
        }
    }
}

/// How to treat a catalog file that is not valid catalog JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the run.
    #[default]
    Reject,
    /// Keep every entry that decodes and skip the rest. A document that is
    /// not a JSON array decodes to an empty catalog.
    BestEffort,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path, policy: MalformedPolicy) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations file: {}", path.display()))?;
        Self::from_json(&content, policy)
            .with_context(|| format!("Failed to parse translations file: {}", path.display()))
    }

    pub fn from_json(content: &str, policy: MalformedPolicy) -> Result<Self> {
        match policy {
            MalformedPolicy::Reject => Ok(serde_json::from_str(content)?),
            MalformedPolicy::BestEffort => Ok(decode_best_effort(content)),
        }
    }

    /// Serialize with 2-space indentation and a trailing newline.
    ///
    /// serde_json does not HTML-escape, so markup in translations is written as is.
    pub fn to_json(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }

    /// Write the catalog, replacing `path` atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write file: {}", file.path().display()))?;

        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(file.path(), metadata.permissions())
                .with_context(|| format!("Failed to copy permissions of: {}", path.display()))?;
        }

        file.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }

    /// Distinct identifiers, sorted.
    pub fn ids(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_best_effort(content: &str) -> Catalog {
    let items = match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!("translations file is not a JSON array, starting from an empty catalog");
            return Catalog::default();
        }
        Err(err) => {
            tracing::warn!(%err, "translations file is not valid JSON, starting from an empty catalog");
            return Catalog::default();
        }
    };

    let total = items.len();
    let entries: Vec<CatalogEntry> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if entries.len() < total {
        tracing::warn!(
            skipped = total - entries.len(),
            "skipped malformed translations file entries"
        );
    }

    Catalog::new(entries)
}
