use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dairo")]
#[command(version, about = "Dairo - your intelligent co-pilot for prompt engineering", long_about = None)]
pub struct Cli {
    /// Configuration directory (defaults to ~/.config/dairo)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server and web UI
    Serve {
        /// Address to listen on (overrides config and DAIRO_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Engineer a prompt from the terminal
    Engineer {
        /// The raw prompt to improve
        prompt: String,
        /// Persona key (see `dairo personas`)
        #[arg(long, short)]
        persona: Option<String>,
        /// Skip the explanation call
        #[arg(long)]
        no_explain: bool,
    },
    /// List available personas
    Personas,
}
