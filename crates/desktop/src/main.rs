//! `stockroom` entry point: resolve configuration, start logging, run the
//! interactive session on stdin/stdout.

use anyhow::Context;
use clap::Parser;

use stockroom_desktop::{AppState, Cli, DesktopConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = DesktopConfig::from(Cli::parse());

    stockroom_observability::init(config.log_format);
    tracing::info!(storage = %config.storage_path.display(), "starting stockroom");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(AppState::new(&config), stdin, stdout, config.json_output);

    session
        .run(config.autoload)
        .context("interactive session failed")?;

    tracing::info!("session closed");
    Ok(())
}
