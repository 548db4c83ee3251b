//! The `ccrm backup` command.

use std::path::PathBuf;

use anyhow::Result;

use ccrm_store::backup::create_backup;

use super::Context;

pub fn execute(ctx: &Context, source: PathBuf) -> Result<()> {
    let summary = create_backup(&source, ctx.config.backup_root())?;
    println!(
        "Backup done at {} ({} files, {} bytes)",
        summary.destination.display(),
        summary.files_copied,
        summary.total_bytes
    );
    Ok(())
}
