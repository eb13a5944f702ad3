//! # CLI Layer
//!
//! The interactive client for igdb, and the only place that touches the
//! terminal.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: `--file`, `--config-dir`, `--verbose` via clap
//!    (`setup.rs`)
//! 2. **Context Setup**: load `igdb.json`, start logging, open the database
//! 3. **Prompt Loop**: read a line, hand it to the API, render the result
//!    (`repl.rs`)
//! 4. **Output Formatting**: the listing table and colored messages
//!    (`render.rs`)
//!
//! Rejected commands are printed and the loop keeps going. Fatal errors are
//! returned to `main`, which exits non-zero.

mod render;
mod repl;
mod setup;

use clap::Parser;
use igdb::api::IgdbApi;
use igdb::config::IgdbConfig;
use igdb::error::Result;
use igdb::logging::init_logging;
use igdb::store::fs::FileStore;
use render::print_messages;
use repl::{run_loop, StdinPrompt};
use setup::Cli;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = IgdbConfig::load(&config_dir)?
        .with_database(cli.file.clone())
        .with_log_level(cli.log_level_override());

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let store = FileStore::new(&config.database);
    let (mut api, opened) = IgdbApi::open(store)?;
    print_messages(&opened.messages);

    let mut prompt = StdinPrompt::new();
    run_loop(&mut api, &mut prompt)
}
