//! Command line interface for release_mirror.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::config::MirrorConfig;
use crate::error::{MirrorError, Result};
use crate::github::{GitHubClient, ReleaseProvider};
use crate::mirror::{ReleaseMirror, SyncOutcome};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let _args = Args::parse_args();
    let output = OutputManager::default();
    let config = MirrorConfig::from_env()?;
    let client = GitHubClient::new(&config.token)?;
    execute_mirror(&client, &config, &output).await
}

/// Mirror through `provider` and report the outcome
pub async fn execute_mirror<P: ReleaseProvider + ?Sized>(
    provider: &P,
    config: &MirrorConfig,
    output: &OutputManager,
) -> Result<i32> {
    log::debug!("{:?}", config);
    output.info(&format!(
        "Mirroring latest release of {} into {}",
        config.source, config.destination
    ));

    let mirror = ReleaseMirror::new(provider, config, output);

    match mirror.synchronize().await? {
        SyncOutcome::AlreadyMirrored { tag } => {
            output.info(&format!("Nothing to do, {} is up to date", tag));
        }
        SyncOutcome::Mirrored {
            tag,
            release_id,
            assets,
        } => {
            output.success(&format!(
                "Mirrored {} ({} assets) into {} release {}",
                tag, assets, config.destination, release_id
            ));
        }
    }

    Ok(0)
}

/// Map a run result to the process exit code, printing fatal errors to stderr
pub fn finish(result: Result<i32>, output: &OutputManager) -> i32 {
    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let mut lines = fatal_report(&e).into_iter();
            if let Some(headline) = lines.next() {
                output.error(&headline);
            }
            for line in lines {
                output.println(&line);
            }
            1
        }
    }
}

/// Lines printed for a fatal error: the headline, then recovery suggestions
pub fn fatal_report(error: &MirrorError) -> Vec<String> {
    let mut lines = vec![format!("Fatal error: {error}")];

    let suggestions = error.recovery_suggestions();
    if !suggestions.is_empty() {
        lines.push("\n💡 Recovery suggestions:".to_string());
        lines.extend(suggestions.into_iter().map(|s| format!("    {}", s)));
    }
    lines
}
