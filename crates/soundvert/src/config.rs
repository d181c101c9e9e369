use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::format::Format;
use crate::out::{Out, blank, info};
use crate::shell;
use crate::tasks::Tasks;

/// Configuration for a batch of conversions.
pub(crate) struct Config {
    pub(crate) dry_run: bool,
    pub(crate) ffmpeg: PathBuf,
    pub(crate) from: Format,
    pub(crate) from_dir: PathBuf,
    pub(crate) quality: i8,
    pub(crate) to: Format,
    pub(crate) to_dir: PathBuf,
    pub(crate) verbose: bool,
}

impl Config {
    /// Enumerate conversion tasks.
    pub(crate) fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.from_dir, self.from, &self.to_dir, self.to)
    }

    /// Make sure the destination directory exists.
    ///
    /// Unlike individual conversions, failing to do this aborts the batch.
    pub(crate) fn make_dir(&self, o: &mut Out<'_>) -> Result<()> {
        if self.to_dir.is_dir() {
            return Ok(());
        }

        info!(o => v, "making destination dir");
        let mut o = o.indent(1);
        blank!(o => v, "mkdir -p {}", shell::escape(self.to_dir.as_os_str()));

        if self.dry_run {
            return Ok(());
        }

        fs::create_dir_all(&self.to_dir)
            .with_context(|| format!("Creating directory {}", self.to_dir.display()))?;

        Ok(())
    }
}
