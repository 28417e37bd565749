// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Installs the stderr logger. stdout stays reserved for the sweep's
/// own progress lines.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// 0 = warnings only, 1 = info, 2 = debug, 3+ = trace.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
  if quiet {
    return LevelFilter::Error;
  }
  match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

fn tag(level: Level) -> &'static str {
  match level {
    Level::Error => "error",
    Level::Warn => "warn",
    Level::Info => "info",
    Level::Debug => "debug",
    Level::Trace => "trace",
  }
}

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "[warn ] File not found"
      let mut err = std::io::stderr().lock();
      let _ = writeln!(err, "[{:<5}] {}", tag(record.level()), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_level_for() {
    assert_eq!(level_for(0, false), LevelFilter::Warn);
    assert_eq!(level_for(2, false), LevelFilter::Debug);
    assert_eq!(level_for(7, false), LevelFilter::Trace);
    assert_eq!(level_for(3, true), LevelFilter::Error);
  }
}
