//! The `ccrm init` command.

use anyhow::Result;

use ccrm_store::config::{to_toml, CcrmConfig, LOCAL_CONFIG_FILE};

use super::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    let path = std::path::Path::new(LOCAL_CONFIG_FILE);
    if path.exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        let config = CcrmConfig {
            data_dir: ctx.config.data_dir.clone(),
            ..CcrmConfig::default()
        };
        let body = format!("# ccrm configuration\n\n{}", to_toml(&config)?);
        std::fs::write(path, body)?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    std::fs::create_dir_all(&ctx.config.data_dir)?;
    println!("Data folder: {}", ctx.config.data_dir.display());
    println!("Registry: {}", ctx.store.path().display());

    println!("\nNext steps:");
    println!("  1. ccrm add-course --code CS101 --title \"Intro to Programming\" --credits 4");
    println!("  2. ccrm add-student --reg-no R-001 --name \"Ada Lovelace\" --email ada@example.edu");
    println!("  3. ccrm enroll --reg-no R-001 --code CS101 --marks 92");

    Ok(())
}
