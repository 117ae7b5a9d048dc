//! Release synchronization between a source and a destination repository.
//!
//! The sequence is strictly linear: fetch both latest releases, check the source is
//! complete, compare tags, create the destination release, stage every asset locally
//! and re-upload it. Any failure aborts the run without rollback.

mod staging;

pub use staging::StagingArea;

use crate::cli::OutputManager;
use crate::config::MirrorConfig;
use crate::error::{MirrorError, Result};
use crate::github::{Asset, AssetUpload, NewRelease, ReleaseProvider};
use tokio::io::AsyncWriteExt;

/// What a synchronization run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Destination already had the source's latest tag
    AlreadyMirrored {
        /// Tag shared by both repositories
        tag: String,
    },
    /// A new destination release was created and populated
    Mirrored {
        /// Tag of the new release
        tag: String,
        /// ID of the destination release
        release_id: u64,
        /// Number of assets transferred
        assets: usize,
    },
}

/// Mirrors the latest source release into the destination repository
pub struct ReleaseMirror<'a, P: ReleaseProvider + ?Sized> {
    provider: &'a P,
    config: &'a MirrorConfig,
    output: &'a OutputManager,
    staging: StagingArea,
}

impl<'a, P: ReleaseProvider + ?Sized> ReleaseMirror<'a, P> {
    /// Create a mirror over `provider` using `config`
    pub fn new(provider: &'a P, config: &'a MirrorConfig, output: &'a OutputManager) -> Self {
        Self {
            provider,
            config,
            output,
            staging: StagingArea::new(&config.staging_dir),
        }
    }

    /// Run one synchronization.
    ///
    /// Returns [`SyncOutcome::AlreadyMirrored`] without touching the destination when
    /// the tags already match.
    pub async fn synchronize(&self) -> Result<SyncOutcome> {
        let source = &self.config.source;
        let destination = &self.config.destination;

        let current = self.provider.get_latest_release(destination).await?;
        if current.is_none() {
            log::debug!("{} has no release yet", destination);
        }

        let latest = self
            .provider
            .get_latest_release(source)
            .await?
            .ok_or_else(|| MirrorError::NoSourceRelease {
                repository: source.to_string(),
            })?;

        if latest.assets.len() < self.config.min_assets {
            return Err(MirrorError::IncompleteRelease {
                tag: latest.tag_name,
                found: latest.assets.len(),
                required: self.config.min_assets,
            });
        }

        // Asset names are checked before the destination changes
        for asset in &latest.assets {
            self.staging.path_for(&asset.name)?;
        }

        if let Some(current) = &current
            && current.tag_name == latest.tag_name
        {
            self.output
                .warn(&format!("{} tag already exists in this project", current.tag_name));
            return Ok(SyncOutcome::AlreadyMirrored {
                tag: latest.tag_name,
            });
        }

        let created = self
            .provider
            .create_release(destination, &NewRelease::from_release(&latest))
            .await?;
        self.output
            .success(&format!("Release {} created", created.tag_name));

        self.download_assets(&latest.assets).await?;
        self.upload_assets(&latest.assets, created.id).await?;

        Ok(SyncOutcome::Mirrored {
            tag: latest.tag_name,
            release_id: created.id,
            assets: latest.assets.len(),
        })
    }

    async fn download_assets(&self, assets: &[Asset]) -> Result<()> {
        for asset in assets {
            let mut file = self.staging.create(&asset.name).await?;
            let bytes = self
                .provider
                .download_asset(&self.config.source, asset.id, &mut file)
                .await?;
            file.flush().await.map_err(|source| MirrorError::Staging {
                path: self.staging.dir().join(&asset.name),
                source,
            })?;

            log::debug!("staged {} ({} bytes)", asset.name, bytes);
            self.output.indent(&format!(
                "Downloaded {} to {}",
                asset.name,
                self.staging.dir().display()
            ));
        }
        Ok(())
    }

    async fn upload_assets(&self, assets: &[Asset], release_id: u64) -> Result<()> {
        for asset in assets {
            let file = self.staging.open(&asset.name).await?;
            self.output.indent(&format!("Uploading {}", asset.name));

            let uploaded = self
                .provider
                .upload_asset(
                    &self.config.destination,
                    release_id,
                    &AssetUpload::from_asset(asset),
                    file,
                )
                .await?;
            log::debug!("uploaded {} as asset {}", uploaded.name, uploaded.id);
        }
        Ok(())
    }
}
