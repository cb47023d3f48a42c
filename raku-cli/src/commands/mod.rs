//! CLI command implementations

mod groups;
mod list;
mod quiz;
mod show;
mod speech;
mod today;
mod validate;

pub use groups::groups;
pub use list::list;
pub use quiz::quiz;
pub use show::show;
pub use speech::speech;
pub use today::today;
pub use validate::validate;

use anyhow::{Context as _, Result};
use raku_core::{Catalog, ReaderConfig};
use std::path::PathBuf;

/// Settings shared by every command
pub struct Context {
    pub config: ReaderConfig,
    pub data: PathBuf,
    pub discussions: PathBuf,
}

impl Context {
    /// Load the story catalog, logging any records that had to be skipped
    pub fn catalog(&self) -> Result<Catalog> {
        let (catalog, skipped) = Catalog::load(&self.data, &self.config)
            .with_context(|| format!("Failed to load stories from {}", self.data.display()))?;

        for record in &skipped {
            tracing::warn!(
                "Skipped story record {} ({}): {}",
                record.index,
                record.id.as_deref().unwrap_or("no id"),
                record.reason
            );
        }

        Ok(catalog)
    }
}
