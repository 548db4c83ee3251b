//! ccrm configuration.
//!
//! The configuration is an explicit value built once at startup and passed
//! to whatever needs a storage location.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "ccrm.toml";

/// Environment variable that overrides `data_dir`.
pub const DATA_DIR_ENV: &str = "CCRM_DATA_DIR";

/// Top-level ccrm configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CcrmConfig {
    /// Root folder for the registry snapshot.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Parent folder for timestamped backups. Defaults to `data_dir`.
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
    /// Default file name for student exports.
    #[serde(default = "default_students_export")]
    pub students_export: PathBuf,
    /// Default file name for course exports.
    #[serde(default = "default_courses_export")]
    pub courses_export: PathBuf,
    /// How many students the GPA report ranks.
    #[serde(default = "default_top_students")]
    pub top_students: usize,
}

fn default_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join("ccrm-data"),
        Err(_) => PathBuf::from("ccrm-data"),
    }
}
fn default_students_export() -> PathBuf {
    PathBuf::from("students_export.csv")
}
fn default_courses_export() -> PathBuf {
    PathBuf::from("courses_export.csv")
}
fn default_top_students() -> usize {
    ccrm_core::statistics::DEFAULT_TOP_N
}

impl Default for CcrmConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backup_dir: None,
            students_export: default_students_export(),
            courses_export: default_courses_export(),
            top_students: default_top_students(),
        }
    }
}

impl CcrmConfig {
    /// Where backups are created.
    pub fn backup_root(&self) -> &Path {
        self.backup_dir.as_deref().unwrap_or(&self.data_dir)
    }

    /// Path of the registry snapshot inside the data folder.
    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join(crate::snapshot::REGISTRY_FILE)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Unset variables expand to an empty string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `ccrm.toml` in the current directory
/// 2. `~/.config/ccrm/config.toml`
///
/// `CCRM_DATA_DIR` overrides the data folder from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<CcrmConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else {
            global_config_path().filter(|p| p.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => parse_config_file(path)?,
        None => CcrmConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.backup_dir = config.backup_dir.as_deref().map(resolve_path);

    tracing::debug!(
        source = ?config_path,
        data_dir = %config.data_dir.display(),
        "configuration loaded"
    );
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<CcrmConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<CcrmConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("ccrm")
            .join("config.toml")
    })
}

/// Render a config as TOML, e.g. for `ccrm init`.
pub fn to_toml(config: &CcrmConfig) -> Result<String> {
    toml::to_string_pretty(config).context("failed to serialize config")
}
