use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

const SOURCE_EXTENSION: &str = "go";
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Why a file was left out of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Under the vendored-dependency directory of the first root.
    Vendor,
    /// A generated client file.
    Generated,
    Test,
    NotSource,
    /// Matched a user `ignores` pattern.
    Ignored,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Exclusion::Vendor => "vendored dependency",
            Exclusion::Generated => "generated file",
            Exclusion::Test => "test file",
            Exclusion::NotSource => "not a Go source file",
            Exclusion::Ignored => "matches an ignore pattern",
        };
        f.write_str(reason)
    }
}

/// Inclusion and exclusion rules for source files.
///
/// Rules are checked in a fixed order and the first one that applies wins.
#[derive(Debug, Clone)]
pub struct FileFilter {
    vendor_dir: PathBuf,
    generated_files: Vec<PathBuf>,
    ignores: Vec<Pattern>,
}

impl FileFilter {
    /// Build the filter for a walk whose first root is `primary_root`.
    pub fn new(primary_root: &Path, config: &Config) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            vendor_dir: primary_root.join(&config.vendor_dir),
            generated_files: config.generated_files.iter().map(PathBuf::from).collect(),
            ignores,
        })
    }

    pub fn exclusion(&self, path: &Path) -> Option<Exclusion> {
        if self.is_vendored(path) {
            return Some(Exclusion::Vendor);
        }
        if self
            .generated_files
            .iter()
            .any(|generated| path.ends_with(generated))
        {
            return Some(Exclusion::Generated);
        }

        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if file_name.ends_with(TEST_FILE_SUFFIX) {
            return Some(Exclusion::Test);
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            return Some(Exclusion::NotSource);
        }

        let path_str = path.to_string_lossy();
        if self.ignores.iter().any(|p| p.matches(&path_str)) {
            return Some(Exclusion::Ignored);
        }

        None
    }

    fn is_vendored(&self, path: &Path) -> bool {
        path.starts_with(&self.vendor_dir)
    }
}

/// Result of walking the source roots.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to scan, in walk order.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read and were skipped.
    pub skipped_count: usize,
}

/// Walk every root in order and collect the files the filter keeps.
///
/// Directory entries are visited sorted by file name so the walk order is
/// stable. A root that does not exist is skipped. Any other walk error aborts
/// unless `skip_unreadable` is set, in which case it is counted and logged.
pub fn scan_files(roots: &[PathBuf], filter: &FileFilter, skip_unreadable: bool) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for root in roots {
        if !root.exists() {
            tracing::debug!(root = %root.display(), "source root does not exist, skipping");
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !filter.is_vendored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if skip_unreadable => {
                    result.skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                    continue;
                }
                Err(e) => Err(e)
                    .with_context(|| format!("Cannot access path under {}", root.display()))?,
            };

            let path = entry.path();
            if entry.file_type().is_symlink() {
                // Links are not followed; a target that cannot be resolved is a walk error.
                match fs::metadata(path) {
                    Ok(metadata) if metadata.is_file() => {}
                    Ok(_) => continue,
                    Err(e) if skip_unreadable => {
                        result.skipped_count += 1;
                        tracing::warn!("Cannot access path: {}: {}", path.display(), e);
                        continue;
                    }
                    Err(e) => Err(e)
                        .with_context(|| format!("Cannot access path: {}", path.display()))?,
                }
            } else if !entry.file_type().is_file() {
                continue;
            }
            if let Some(reason) = filter.exclusion(path) {
                if reason != Exclusion::NotSource {
                    tracing::debug!(file = %path.display(), %reason, "skipped");
                }
                continue;
            }
            if seen.insert(path.to_path_buf()) {
                result.files.push(path.to_path_buf());
            }
        }
    }

    Ok(result)
}
