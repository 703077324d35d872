use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        Catalog, CatalogDiff, DiscoveredSet, MalformedPolicy, Reconciliation,
        dynamic::inject_dynamic_identifiers,
        file_scanner::{FileFilter, scan_files},
        reconcile::{diff, reconcile},
        scanner::scan_file,
    },
};

/// Everything one `extract` or `check` run works on.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--enterprise-dir ../ee`)
/// 2. `.gotransrc.json` config file (searched from the source directory upwards)
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Primary source root. Its vendor directory is never scanned.
    pub source_dir: PathBuf,

    /// Secondary root scanned with the same rules, except vendoring.
    pub enterprise_dir: PathBuf,

    pub catalog_path: PathBuf,

    /// Scanned Go files, in walk order.
    pub files: Vec<PathBuf>,

    /// Identifiers found in `files` plus the runtime-only ones.
    pub discovered: DiscoveredSet,

    /// The catalog as currently stored on disk.
    pub catalog: Catalog,
}

impl ExtractContext {
    /// Resolve configuration, load the catalog and scan both roots.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A directory argument is not valid UTF-8
    /// - The config file is invalid
    /// - The translations file is missing, unreadable or malformed
    /// - A source root cannot be walked
    /// - A Go file fails to parse
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let search_root = common_args
            .source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let search_root = Path::new(path_str(&search_root, "source-dir")?);

        let config_result = load_config(search_root)?;
        match &config_result.path {
            Some(path) => tracing::debug!(config = %path.display(), "loaded config"),
            None => tracing::debug!("no {} found, using defaults", crate::config::CONFIG_FILE_NAME),
        }
        let config = config_result.config;

        let source_dir = common_args
            .source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source_dir));
        let enterprise_dir = common_args
            .enterprise_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.enterprise_dir));
        path_str(&source_dir, "source-dir")?;
        path_str(&enterprise_dir, "enterprise-dir")?;

        let catalog_path = common_args
            .catalog_path
            .clone()
            .unwrap_or_else(|| config.catalog_file(&source_dir));
        let policy = if common_args.allow_malformed_catalog || config.allow_malformed_catalog {
            MalformedPolicy::BestEffort
        } else {
            MalformedPolicy::Reject
        };

        Self::build(config, source_dir, enterprise_dir, catalog_path, policy)
    }

    /// Run the pipeline with fully resolved settings.
    pub fn build(
        config: Config,
        source_dir: PathBuf,
        enterprise_dir: PathBuf,
        catalog_path: PathBuf,
        policy: MalformedPolicy,
    ) -> Result<Self> {
        let catalog = Catalog::load(&catalog_path, policy)?;

        let filter = FileFilter::new(&source_dir, &config)?;
        let roots = [source_dir.clone(), enterprise_dir.clone()];
        let scan_result = scan_files(&roots, &filter, config.skip_unreadable)?;

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
            );
        }

        let mut discovered = scan_sources(&scan_result.files)?;
        inject_dynamic_identifiers(&mut discovered);

        tracing::debug!(
            files = scan_result.files.len(),
            identifiers = discovered.len(),
            catalog = catalog.len(),
            "scan complete"
        );

        Ok(Self {
            config,
            source_dir,
            enterprise_dir,
            catalog_path,
            files: scan_result.files,
            discovered,
            catalog,
        })
    }

    /// Differences between the source tree and the stored catalog.
    pub fn diff(&self) -> CatalogDiff {
        diff(&self.discovered, &self.catalog)
    }

    /// Rebuild the catalog for the current source tree without writing it.
    pub fn reconcile(&self) -> Reconciliation {
        reconcile(&self.discovered, self.catalog.clone())
    }
}

/// Scan files in parallel, each into its own set, and merge them.
///
/// Results are merged in walk order, so the reported parse error is the
/// first one in that order regardless of scheduling.
pub fn scan_sources(files: &[PathBuf]) -> Result<DiscoveredSet> {
    let partials: Vec<Result<DiscoveredSet>> =
        files.par_iter().map(|file| scan_file(file)).collect();

    let mut discovered = DiscoveredSet::new();
    for partial in partials {
        discovered.extend(partial?);
    }
    Ok(discovered)
}

fn path_str<'a>(path: &'a Path, param: &str) -> Result<&'a str> {
    path.to_str()
        .with_context(|| anyhow!("Invalid {} parameter: {:?}", param, path))
}
