use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locmergerc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_locales_root() -> String {
    "src/locales".to_string()
}

fn default_file_name() -> String {
    "translation.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// `fileName` must be a bare file name: not empty and without path separators.
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            bail!("'fileName' must not be empty");
        }
        if self.file_name.contains('/') || self.file_name.contains('\\') {
            bail!(
                "'fileName' must be a file name, not a path: \"{}\"",
                self.file_name
            );
        }
        Ok(())
    }

    /// Path of the locale file for `locale`, relative to `root`.
    ///
    /// `<root>/<localesRoot>/<locale>/<fileName>`
    pub fn target_path(&self, root: &Path, locale: &str) -> PathBuf {
        root.join(&self.locales_root)
            .join(locale)
            .join(&self.file_name)
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
