//! Filesystem infrastructure — implements `InstallWriter`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::InstallWriter;

/// Production filesystem implementation of `InstallWriter`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl InstallWriter for LocalFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        std::fs::write(path, contents).with_context(|| format!("writing file {}", path.display()))
    }
}
