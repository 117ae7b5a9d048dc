//! Error types for release mirroring.
//!
//! Every error here is terminal for a run. The variants exist so the CLI can print
//! an actionable message and recovery suggestions before exiting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release_mirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Main error type for all release_mirror operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Hosting provider call failed
    #[error("GitHub error: {0}")]
    Provider(#[from] ProviderError),

    /// Source repository has no published release
    #[error("No release found in source repository {repository}")]
    NoSourceRelease {
        /// Source repository as `owner/repo`
        repository: String,
    },

    /// Source release is still receiving assets
    #[error(
        "Release assets have not finished uploading. Try again shortly. ({tag} has {found} of {required} assets)"
    )]
    IncompleteRelease {
        /// Source tag name
        tag: String,
        /// Assets currently attached
        found: usize,
        /// Assets required before mirroring
        required: usize,
    },

    /// Asset name cannot be used as a staging file name
    #[error("Asset name '{name}' is not a plain file name")]
    InvalidAssetName {
        /// Offending asset name
        name: String,
    },

    /// Local staging file could not be created, opened or written
    #[error("Staging file {path} failed: {source}")]
    Staging {
        /// Staging file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors raised while reading the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("Missing environment variable '{name}': {hint}")]
    MissingVariable {
        /// Variable name
        name: &'static str,
        /// What the variable should contain
        hint: &'static str,
    },
}

/// Errors from the release hosting provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure
    #[error("{operation} request failed: {source}")]
    Http {
        /// Operation that failed
        operation: &'static str,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status
    #[error("{operation} returned HTTP {status}: {message}")]
    Status {
        /// Operation that failed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body could not be decoded
    #[error("{operation} returned an unreadable response: {reason}")]
    Decode {
        /// Operation that failed
        operation: &'static str,
        /// Decoder message
        reason: String,
    },

    /// Access token cannot be sent as an HTTP header
    #[error("Access token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// Local IO failure while streaming asset content
    #[error("{operation} IO failure: {source}")]
    Io {
        /// Operation that failed
        operation: &'static str,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl ProviderError {
    /// Whether the provider answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Status { status: 404, .. })
    }
}

impl MirrorError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            MirrorError::Config(ConfigError::MissingVariable { name, .. }) => vec![
                format!("Export {} before running the mirror", name),
                "In CI, check that the secret is mapped into the job environment".to_string(),
            ],
            MirrorError::Provider(ProviderError::Status { status: 401, .. })
            | MirrorError::Provider(ProviderError::Status { status: 403, .. }) => vec![
                "Verify BF3_TOKEN is valid and has not expired".to_string(),
                "The token needs contents:write on the destination repository".to_string(),
            ],
            MirrorError::IncompleteRelease { .. } => vec![
                "Wait for the source release workflow to finish uploading assets".to_string(),
                "Re-run the mirror job afterwards".to_string(),
            ],
            MirrorError::NoSourceRelease { .. } => vec![
                "Check CLONE_FROM_ORG and CLONE_FROM_REPO".to_string(),
                "Make sure the source repository has a published (non-draft) release".to_string(),
            ],
            MirrorError::Staging { path, .. } => vec![format!(
                "Check free space and permissions for {}",
                path.parent().unwrap_or(path).display()
            )],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
