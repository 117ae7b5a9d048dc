//! # Release Mirror
//!
//! Mirrors the latest GitHub release of a source repository, including its tag,
//! notes and every binary asset, into a destination repository.
//!
//! The run is idempotent on the tag name: when the destination's latest release
//! already carries the source's tag, nothing is created or transferred.
//!
//! ## Usage
//!
//! ```bash
//! BF3_TOKEN=ghp_... CLONE_FROM_ORG=upstream CLONE_FROM_REPO=tool release_mirror
//! ```
//!
//! ## Library
//!
//! ```ignore
//! use release_mirror::{GitHubClient, MirrorConfig, ReleaseMirror, cli::OutputManager};
//!
//! let config = MirrorConfig::from_env()?;
//! let client = GitHubClient::new(&config.token)?;
//! let output = OutputManager::default();
//! let outcome = ReleaseMirror::new(&client, &config, &output).synchronize().await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod mirror;

pub use config::MirrorConfig;
pub use error::{ConfigError, MirrorError, ProviderError, Result};
pub use github::{GitHubClient, ReleaseProvider, RepositoryRef};
pub use mirror::{ReleaseMirror, StagingArea, SyncOutcome};
