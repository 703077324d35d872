use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use gotrans::core::dynamic::DYNAMIC_IDENTIFIERS;
use insta_cmd::get_cargo_bin;
use serde_json::{Value, json};
use tempfile::TempDir;

mod check;

const BIN_NAME: &str = "gotrans";

/// Translations file used by the helpers below.
pub const CATALOG: &str = "server/i18n/en.json";

/// A throwaway project with a `server/` tree and an `enterprise/` tree.
pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config file search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project whose translations file already holds every runtime-only
    /// identifier plus `entries`.
    pub fn with_catalog(entries: &[(&str, Value)]) -> Result<Self> {
        let test = Self::new()?;
        test.write_catalog(entries)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_catalog(&self, entries: &[(&str, Value)]) -> Result<()> {
        let mut catalog: Vec<Value> = DYNAMIC_IDENTIFIERS
            .iter()
            .map(|id| json!({ "id": id, "translation": "runtime" }))
            .collect();
        catalog.extend(
            entries
                .iter()
                .map(|(id, translation)| json!({ "id": id, "translation": translation })),
        );
        self.write_file(CATALOG, &serde_json::to_string_pretty(&catalog)?)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    fn project_command(&self, name: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg(name)
            .args(["--source-dir", "server"])
            .args(["--enterprise-dir", "enterprise"]);
        cmd
    }

    pub fn extract_command(&self) -> Command {
        self.project_command("extract")
    }

    pub fn check_command(&self) -> Command {
        self.project_command("check")
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Catalog entries as `(id, translation)` pairs, runtime-only identifiers left out.
    pub fn source_entries(&self) -> Result<Vec<(String, Value)>> {
        let catalog: Vec<Value> = serde_json::from_str(&self.read_file(CATALOG)?)?;
        Ok(catalog
            .into_iter()
            .filter_map(|entry| {
                let id = entry["id"].as_str()?.to_string();
                (!DYNAMIC_IDENTIFIERS.contains(&id.as_str()))
                    .then(|| (id, entry["translation"].clone()))
            })
            .collect())
    }
}

pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
