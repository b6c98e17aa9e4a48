use anyhow::Result;
use clap::Parser;
use dairo_server::app::bootstrap::{build_state, load_config};
use dairo_server::logging;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so the log level from config.toml applies
    let (paths, config) = load_config(cli.config_dir.as_deref())?;
    let _log_guard = logging::init_logging(&config.logging, &paths.log_dir())?;
    tracing::info!("Starting dairo with config from {}", paths.config_dir().display());

    let state = build_state(&paths, &config)?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            commands::serve::run(state, &bind).await
        }
        Commands::Engineer {
            prompt,
            persona,
            no_explain,
        } => commands::engineer::run(state, prompt, persona, no_explain).await,
        Commands::Personas => {
            commands::personas::run();
            Ok(())
        }
    }
}
