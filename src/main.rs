//! # docchat CLI
//!
//! The `docchat` binary starts the chat backend and provides a few
//! operator conveniences.
//!
//! ## Usage
//!
//! ```bash
//! docchat --config ./config/docchat.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docchat serve` | Start the JSON HTTP server |
//! | `docchat languages` | Print the supported target-language table |
//!
//! The config file is optional: when it does not exist, built-in defaults
//! are used (bind `127.0.0.1:5000`, the local dev CORS origins, the public
//! translation endpoint).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use docchat::{config, language, server};

/// docchat — a document-grounded chat backend with translated replies.
#[derive(Parser)]
#[command(
    name = "docchat",
    about = "A document-grounded chat backend with translated replies",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Optional: built-in defaults are used when the file does not exist.
    #[arg(long, global = true, default_value = "./config/docchat.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the JSON HTTP server.
    ///
    /// Serves the chat, document-upload, and context-reset endpoints on
    /// the configured bind address.
    Serve,

    /// Print the supported target-language table.
    ///
    /// Any of the listed codes or names is a valid `target_lang` value
    /// for the chat endpoint.
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Languages => {
            language::print_languages();
        }
        Commands::Serve => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();

            let cfg = config::load_or_default(&cli.config)?;
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
