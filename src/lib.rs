//! jotbox - titled notes for LLM tool calling
//!
//! A note store (files or SQLite) keyed by title, exposed to a host model
//! runtime through [`tools::NoteTools`] and to people through the `jotbox`
//! binary.

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;
pub mod tools;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        StoreLocation, handle_call, handle_completions, handle_get, handle_list, handle_remove,
        handle_save, handle_titles, handle_tools,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let location = StoreLocation::new(
        config.notes_dir(cli.dir.as_ref()),
        config.backend(cli.backend),
    );
    tracing::debug!(dir = %location.dir.display(), backend = %location.backend, "resolved note store");

    match &cli.command {
        Command::Save(args) => handle_save(args, &location),
        Command::Get(args) => handle_get(args, &location),
        Command::Titles(args) => handle_titles(args, &location),
        Command::List(args) => handle_list(args, &location),
        Command::Remove(args) => handle_remove(args, &location),
        Command::Tools => handle_tools(),
        Command::Call(args) => handle_call(args, &location),
        Command::Completions(args) => {
            handle_completions(args);
            Ok(())
        }
    }
}

/// Installs the stderr log subscriber.
///
/// Without `-v` the level comes from `RUST_LOG`, defaulting to `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Already installed when run() is called more than once in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
