//! # igdb Architecture
//!
//! igdb is an interactive record store for social media handles. Each record
//! holds a handle, a follower count, a short comment and a last-modified Unix
//! timestamp; the whole store lives in memory and is persisted as a flat CSV
//! file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, config, logging, prompt loop, table rendering     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session and the persistence backend             │
//! │  - Parses a line into a Command and dispatches it           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (command.rs, commands/*.rs)                  │
//! │  - Argument validation and the dirty/exit state machine     │
//! │  - Returns CmdResult or a CommandError, never prints        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, fields.rs, model.rs)                │
//! │  - Database: growable record array, lookup by handle        │
//! │  - CSV codec, FileStore (production), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two number parsers
//!
//! Loading from disk uses the lenient parsers in [`fields`] (leading digits
//! win, trailing junk is ignored). Interactive `add`/`update` arguments use the
//! strict parser in [`command`], which rejects the whole command on any
//! deviation. The two are kept separate on purpose.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade, entry point for every operation
//! - [`command`]: Tokenizing and argument parsing
//! - [`commands`]: One module per command, plus the `Session`
//! - [`store`]: `Database`, `DataStore` trait and backends
//! - [`fields`]: Load-time field parsers
//! - [`model`]: `Record` and bounded text fields
//! - [`prompt`]: Interactive input seam
//! - [`config`]: `igdb.json` configuration
//! - [`logging`]: Diagnostic logging setup
//! - [`error`]: Error types

pub mod api;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod store;
