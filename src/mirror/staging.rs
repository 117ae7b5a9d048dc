//! Local staging of asset files between download and upload.

use crate::error::{MirrorError, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Directory holding downloaded assets, one file per asset name.
///
/// Files are overwritten when a name repeats and are left in place after the run.
#[derive(Debug, Clone)]
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    /// Stage files under `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Staging directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the staged file for an asset name
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !is_plain_file_name(name) {
            return Err(MirrorError::InvalidAssetName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(name))
    }

    /// Create (or truncate) the staged file for writing
    pub async fn create(&self, name: &str) -> Result<File> {
        let path = self.path_for(name)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| MirrorError::Staging {
                path: self.dir.clone(),
                source,
            })?;
        File::create(&path)
            .await
            .map_err(|source| MirrorError::Staging { path, source })
    }

    /// Open a previously staged file for reading
    pub async fn open(&self, name: &str) -> Result<File> {
        let path = self.path_for(name)?;
        File::open(&path)
            .await
            .map_err(|source| MirrorError::Staging { path, source })
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
