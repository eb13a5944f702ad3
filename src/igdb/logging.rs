//! Diagnostic logging bootstrap.
//!
//! Diagnostics go through the `log` facade to stderr via `flexi_logger`. They
//! are separate from the interpreter's user-facing messages, which the CLI
//! prints itself.
//!
//! # Invariants
//! - Initialization happens at most once per process and never panics.
//! - Re-initialization with the same level is a no-op; a different level is
//!   rejected.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Starts stderr logging at `level`.
///
/// # Errors
/// - `level` is not one of off/error/warn/info/debug/trace.
/// - Logging is already active with a different level.
/// - The logger backend fails to start.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=app_start version={} level={}",
            env!("CARGO_PKG_VERSION"),
            level
        );
        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

/// Level logging was started with, if any.
pub fn active_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .copied()
        .find(|supported| *supported == wanted)
        .ok_or_else(|| format!("unsupported log level `{}`", level.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_levels() {
        assert_eq!(normalize_level(" DEBUG "), Ok("debug"));
        assert_eq!(normalize_level("off"), Ok("off"));
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn init_is_idempotent_for_same_level() {
        init_logging("warn").unwrap();
        init_logging("WARN").unwrap();
        assert_eq!(active_level(), Some("warn"));
        assert!(init_logging("trace").is_err());
    }
}
