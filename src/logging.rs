#![cfg(feature = "std")]

//! Stderr logger for the game binaries.

use std::env;
use std::io::Write;
use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` to `trace`, or `off`).
pub const LOG_ENV: &str = "SALVO_LOG";

/// Writes records from this crate to stderr; stdout carries the boards.
struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .module_path()
            .and_then(|p| p.rsplit("::").next())
            .unwrap_or("salvo");
        let _ = writeln!(std::io::stderr().lock(), "[{:<5} {}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: GameLogger = GameLogger;

/// Level for a raw `SALVO_LOG` value; unset or unparsable values give `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger with the level from `SALVO_LOG`. Later calls are no-ops.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
