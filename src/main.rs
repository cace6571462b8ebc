//! Hangman - CLI
//!
//! Serves the hangman HTTP API, or plays a single game in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{ServeConfig, load_words, run_play, run_serve},
    service::GameService,
    store::MemoryStore,
};
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Single-player hangman over a JSON HTTP API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one secret per line (default: embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for secret word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:4567")]
        addr: SocketAddr,

        /// JSON file to persist games in (default: memory only)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Play one game in the terminal
    Play,
}

fn main() -> Result<()> {
    // Initialize logging; stdout belongs to the game board in play mode
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    // Default to serving if no command given
    let command = cli.command.unwrap_or(Commands::Serve {
        addr: ServeConfig::default().addr,
        data: None,
    });

    match command {
        Commands::Serve { addr, data } => {
            let config = ServeConfig {
                addr,
                data,
                words: cli.words,
                seed: cli.seed,
            };
            tokio::runtime::Runtime::new()?.block_on(run_serve(config))
        }
        Commands::Play => run_play_command(cli.words, cli.seed),
    }
}

fn run_play_command(words: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let words = load_words(words.as_deref())?;
    let service = GameService::new(Arc::new(MemoryStore::new()), words, seed);

    run_play(&service, io::stdin().lock(), io::stdout())?;
    Ok(())
}
