mod cli;
mod error;
mod models;
mod registry;

use clap::Parser;
use cli::{App, Cli, ConsoleReader, Session};
use error::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env if present; RUST_LOG may come from there.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the -v count picks the default level.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Initializing pet shelter records app...");

    let mut session = Session::new(App::new(), ConsoleReader::default(), io::stdout());
    session.run()
}
