//! ccrm-store — Configuration, registry persistence and backups.
//!
//! Everything that knows where files live on disk sits here, so the core
//! engine only ever sees resolved paths.

pub mod backup;
pub mod config;
pub mod snapshot;
