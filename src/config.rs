use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gotransrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_enterprise_dir")]
    pub enterprise_dir: String,
    /// Relative to `source_dir` unless absolute.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Relative to `source_dir`. Never descended into.
    #[serde(default = "default_vendor_dir")]
    pub vendor_dir: String,
    /// Path suffixes of generated files that are not scanned.
    #[serde(default = "default_generated_files")]
    pub generated_files: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Count and skip unreadable paths instead of aborting the walk.
    #[serde(default)]
    pub skip_unreadable: bool,
    /// Decode what can be decoded from a malformed translations file
    /// instead of failing.
    #[serde(default)]
    pub allow_malformed_catalog: bool,
}

fn default_source_dir() -> String {
    "./".to_string()
}

fn default_enterprise_dir() -> String {
    "../enterprise".to_string()
}

fn default_catalog_path() -> String {
    "i18n/en.json".to_string()
}

fn default_vendor_dir() -> String {
    "vendor".to_string()
}

fn default_generated_files() -> Vec<String> {
    vec!["model/client4.go".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            enterprise_dir: default_enterprise_dir(),
            catalog_path: default_catalog_path(),
            vendor_dir: default_vendor_dir(),
            generated_files: default_generated_files(),
            ignores: Vec::new(),
            skip_unreadable: false,
            allow_malformed_catalog: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores` and a `vendorDir` that is
    /// empty or escapes the source directory.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        let vendor = Path::new(&self.vendor_dir);
        let is_relative_child = vendor
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if self.vendor_dir.trim().is_empty() || !is_relative_child {
            bail!(
                "Invalid 'vendorDir': \"{}\" must be a relative path inside the source directory",
                self.vendor_dir
            );
        }

        if self.generated_files.iter().any(|f| f.trim().is_empty()) {
            bail!("Invalid 'generatedFiles': entries must not be empty");
        }

        Ok(())
    }

    /// Location of the translations file for a given source directory.
    pub fn catalog_file(&self, source_dir: &Path) -> PathBuf {
        let path = Path::new(&self.catalog_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            source_dir.join(path)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file that was loaded, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
