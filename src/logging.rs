//! Stderr logger for warnings and diagnostics
//!
//! Records are written as `<time> <LEVEL> <message>`, with the time in
//! 12-hour "kitchen" form (`3:04PM`). The level defaults to `warn` and can be
//! raised or lowered with the `LDS_LOG` environment variable.

use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "LDS_LOG";

const DEFAULT_LEVEL: Level = Level::Warn;

pub struct Logger {
    level: Level,
}

impl Logger {
    fn format_record(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%-I:%M%p");
        format!("{} {} {}", timestamp, record.level(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = self.format_record(record);
            // Nothing useful to do if stderr itself is closed.
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name, falling back to `warn` for anything unusable
/// (including `off`, which has no corresponding record level).
fn level_from(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(DEFAULT_LEVEL)
}

fn level_from_env() -> Level {
    level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

/// Install the stderr logger. Safe to call more than once.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}
