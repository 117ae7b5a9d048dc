//! Command line argument parsing.
//!
//! The mirror takes no arguments; everything comes from the environment so the
//! tool can be dropped into a CI job as-is. clap still provides `--help` and
//! `--version`.

use clap::Parser;

/// Mirror the latest GitHub release into this project
#[derive(Parser, Debug)]
#[command(
    name = "release_mirror",
    version,
    about = "Mirror the latest GitHub release into this project",
    long_about = "Copy the latest release (tag, notes and binary assets) of a source repository
into the destination repository, unless the destination already has that tag.

Environment:
  BF3_TOKEN        GitHub personal access token (required)
  CLONE_FROM_ORG   organization to clone the release from (required)
  CLONE_FROM_REPO  repository to clone the release from (required)
  RUST_LOG         log filter for diagnostics (default: info)"
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
