//! GitHub integration for release mirroring
//!
//! [`ReleaseProvider`] is the capability the mirror needs from a hosting provider.
//! [`GitHubClient`] implements it against the GitHub REST API; tests substitute
//! an in-memory fake.

mod client;
mod types;

pub use client::GitHubClient;
pub use types::{Asset, AssetUpload, NewRelease, Release, RepositoryRef};

use crate::error::ProviderError;
use async_trait::async_trait;
use tokio::io::AsyncWrite;

/// Release operations consumed by the mirror
#[async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Fetch the latest published release.
    ///
    /// Returns `Ok(None)` when the repository has no release (HTTP 404).
    async fn get_latest_release(
        &self,
        repo: &RepositoryRef,
    ) -> Result<Option<Release>, ProviderError>;

    /// Create a release and return it with its assigned ID
    async fn create_release(
        &self,
        repo: &RepositoryRef,
        release: &NewRelease,
    ) -> Result<Release, ProviderError>;

    /// Stream the binary content of an asset into `out`, returning the byte count
    async fn download_asset(
        &self,
        repo: &RepositoryRef,
        asset_id: u64,
        out: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, ProviderError>;

    /// Upload `file` as a new asset of release `release_id`
    async fn upload_asset(
        &self,
        repo: &RepositoryRef,
        release_id: u64,
        upload: &AssetUpload,
        file: tokio::fs::File,
    ) -> Result<Asset, ProviderError>;
}
