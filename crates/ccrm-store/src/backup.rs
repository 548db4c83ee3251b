//! Directory backups.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// Folder name for a backup taken at `now`: `backup_YYYYMMDD_HHMMSS`.
pub fn timestamped_name(now: DateTime<Local>) -> String {
    format!("backup_{}", now.format("%Y%m%d_%H%M%S"))
}

/// Outcome of a finished backup.
#[derive(Debug, Clone)]
pub struct BackupSummary {
    pub destination: PathBuf,
    pub files_copied: u64,
    pub total_bytes: u64,
}

/// Copy `src` into a new timestamped folder under `backup_root`.
///
/// Neither `backup_root` nor the new backup folder is copied when either
/// lies inside `src`, so a backup never copies into itself. This includes
/// `src` and `backup_root` being the same folder.
pub fn create_backup(src: &Path, backup_root: &Path) -> Result<BackupSummary> {
    let destination = backup_root.join(timestamped_name(Local::now()));
    std::fs::create_dir_all(&destination)
        .with_context(|| format!("failed to create {}", destination.display()))?;

    let skip: Vec<PathBuf> = [backup_root, destination.as_path()]
        .iter()
        .filter_map(|p| p.canonicalize().ok())
        .collect();
    let files_copied = copy_tree(src, &destination, &skip)?;
    let total_bytes = dir_size(&destination)?;

    tracing::info!(
        files = files_copied,
        bytes = total_bytes,
        "backup written to {}",
        destination.display()
    );
    Ok(BackupSummary {
        destination,
        files_copied,
        total_bytes,
    })
}

/// Recursively copy `src` into `dest`, overwriting files that exist.
///
/// Returns the number of files copied.
pub fn backup_dir(src: &Path, dest: &Path) -> Result<u64> {
    copy_tree(src, dest, &[])
}

fn copy_tree(src: &Path, dest: &Path, skip: &[PathBuf]) -> Result<u64> {
    std::fs::create_dir_all(dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;

    let mut copied = 0;
    for entry in std::fs::read_dir(src)
        .with_context(|| format!("failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if path.is_dir() {
            if path.canonicalize().is_ok_and(|p| skip.contains(&p)) {
                tracing::debug!("skipping backup folder {}", path.display());
                continue;
            }
            copied += copy_tree(&path, &target, skip)?;
        } else {
            std::fs::copy(&path, &target).with_context(|| {
                format!("failed to copy {} to {}", path.display(), target.display())
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Total size in bytes of all files below `path`.
pub fn dir_size(path: &Path) -> Result<u64> {
    let mut total = 0;
    for entry in std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?
    {
        let entry = entry?;
        let p = entry.path();
        if p.is_dir() {
            total += dir_size(&p)?;
        } else {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
