//! JSON persistence of the whole registry.
//!
//! The interchange format carries no enrollments, so the registry itself
//! is saved as a JSON snapshot inside the data folder.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ccrm_core::registry::Registry;

/// File name of the snapshot inside the data folder.
pub const REGISTRY_FILE: &str = "registry.json";

/// Loads and saves a [`Registry`] at a fixed path.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at `<data_dir>/registry.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(REGISTRY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry. A missing snapshot is an empty registry.
    pub fn load(&self) -> Result<Registry> {
        if !self.path.exists() {
            tracing::debug!("no snapshot at {}, starting empty", self.path.display());
            return Ok(Registry::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read registry from {}", self.path.display()))?;
        let registry: Registry = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse registry JSON: {}", self.path.display()))?;
        tracing::debug!(
            students = registry.student_count(),
            courses = registry.course_count(),
            "loaded registry from {}",
            self.path.display()
        );
        Ok(registry)
    }

    /// Save the registry as pretty JSON, creating the data folder if needed.
    pub fn save(&self, registry: &Registry) -> Result<()> {
        let json = serde_json::to_string_pretty(registry).context("failed to serialize registry")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write registry to {}", self.path.display()))?;
        tracing::debug!("saved registry to {}", self.path.display());
        Ok(())
    }
}
