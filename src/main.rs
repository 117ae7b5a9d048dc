//! release_mirror - copy the latest GitHub release of one repository into another.

use release_mirror::cli;
use release_mirror::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = cli::run().await;
    // Fatal errors are never quiet
    let output = OutputManager::new(false);
    process::exit(cli::finish(result, &output));
}
