//! # igdb binary
//!
//! The binary is intentionally thin: the interactive client lives in
//! `src/igdb/cli/`, and this file only invokes `cli::run()` and turns a fatal
//! error into a non-zero exit status.
//!
//! Rejected commands (bad arguments, unknown handles, the unsaved-changes
//! guard) never reach this point; the prompt loop reports them and keeps
//! going. Only errors the interpreter cannot recover from end up here, such as
//! a database file that cannot be read or no writable file to save into.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
