//! `env_logger` backend for the `log` facade.
//!
//! The library only emits through `log` macros; binaries and tests that want
//! to see the output call [`init_logger`] once.

use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, Record};

use crate::config::{LogConfig, LogFormat};
use crate::error::{Error, Result};

/// Installs the global logger described by `config`, writing to stderr.
///
/// Fails with [`Error::Logger`] if a logger is already installed.
pub fn init_logger(config: &LogConfig) -> Result<()> {
    build_logger(config)
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

fn build_logger(config: &LogConfig) -> Builder {
    let format = config.format;
    let timestamp = config.timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(config.level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{}", render(format, record))
        });
    builder
}

fn render(format: LogFormat, record: &Record) -> String {
    match format {
        LogFormat::Compact => format!("{} {}", level_tag(record.level()), record.args()),
        LogFormat::Pretty => format!(
            "{} [{}] {}",
            level_tag(record.level()),
            record.target(),
            record.args()
        ),
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
