//! Release data model, shaped after the GitHub REST payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner/name pair identifying a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    /// Organization or user owning the repository
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepositoryRef {
    /// Create a repository reference
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A published release and its attached assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Server-assigned release ID
    pub id: u64,
    /// Tag the release points at
    pub tag_name: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes
    #[serde(default)]
    pub body: Option<String>,
    /// Whether the release is a draft
    #[serde(default)]
    pub draft: bool,
    /// Whether the release is a prerelease
    #[serde(default)]
    pub prerelease: bool,
    /// Commit-ish the tag was created from
    #[serde(default)]
    pub target_commitish: Option<String>,
    /// Attached binary assets
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One binary file attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset ID, unique within the hosting provider
    pub id: u64,
    /// File name
    pub name: String,
    /// Optional display label
    #[serde(default)]
    pub label: Option<String>,
    /// MIME type reported by the provider
    #[serde(default)]
    pub content_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Payload for creating a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    /// Tag name to create the release for
    pub tag_name: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Create as draft
    pub draft: bool,
    /// Mark as prerelease
    pub prerelease: bool,
    /// Commit-ish for the tag when it does not exist yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
}

impl NewRelease {
    /// Copy the metadata of an existing release
    pub fn from_release(release: &Release) -> Self {
        Self {
            tag_name: release.tag_name.clone(),
            name: release.name.clone(),
            body: release.body.clone(),
            draft: release.draft,
            prerelease: release.prerelease,
            target_commitish: release.target_commitish.clone(),
        }
    }
}

/// Name, label and content type carried over to an uploaded asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpload {
    /// File name
    pub name: String,
    /// Optional display label
    pub label: Option<String>,
    /// MIME type
    pub content_type: Option<String>,
}

impl AssetUpload {
    /// Take the upload options verbatim from a source asset
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            label: asset.label.clone(),
            content_type: asset.content_type.clone(),
        }
    }
}
