//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use ccrm_core::registry::Registry;
use ccrm_store::config::{load_config_from, CcrmConfig};
use ccrm_store::snapshot::RegistryStore;

pub mod backup;
pub mod enroll;
pub mod init;
pub mod interchange;
pub mod records;
pub mod report;
pub mod transcript;

/// Configuration and storage shared by every command.
pub struct Context {
    pub config: CcrmConfig,
    pub store: RegistryStore,
}

impl Context {
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = load_config_from(config_path)?;
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        let store = RegistryStore::new(config.registry_path());
        Ok(Self { config, store })
    }

    /// Load the registry, apply `change`, and save it back.
    pub fn update<T>(&self, change: impl FnOnce(&mut Registry) -> Result<T>) -> Result<T> {
        let mut registry = self.store.load()?;
        let value = change(&mut registry)?;
        self.store.save(&registry)?;
        Ok(value)
    }
}

/// Marks must be finite and between 0 and 100 before they reach the engine.
pub fn validate_marks(marks: f64) -> Result<f64> {
    anyhow::ensure!(marks.is_finite(), "marks must be a finite number");
    anyhow::ensure!(
        (0.0..=100.0).contains(&marks),
        "marks must be between 0 and 100, got {marks}"
    );
    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_validation() {
        assert_eq!(validate_marks(0.0).unwrap(), 0.0);
        assert_eq!(validate_marks(100.0).unwrap(), 100.0);
        assert!(validate_marks(-0.5).is_err());
        assert!(validate_marks(100.5).is_err());
        assert!(validate_marks(f64::NAN).is_err());
        assert!(validate_marks(f64::INFINITY).is_err());
    }
}
