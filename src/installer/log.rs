//! Setup run log
//!
//! [`SetupLog`] is created once per run and passed by reference to every
//! step. It stamps each line with the time since the run started, forwards it
//! to `tracing`, and counts warnings and errors for the final summary.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub stamp: String,
    pub message: String,
}

#[derive(Debug)]
pub struct SetupLog {
    started: Instant,
    warnings: usize,
    errors: usize,
    entries: Vec<LogEntry>,
}

impl Default for SetupLog {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupLog {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            warnings: 0,
            errors: 0,
            entries: Vec::new(),
        }
    }

    /// Elapsed time as `mm:ss.mmm`
    pub fn timestamp(&self) -> String {
        format_elapsed(self.started.elapsed())
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Debug, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings += 1;
        self.record(LogLevel::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors += 1;
        self.record(LogLevel::Error, message.into());
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// One-line tally written at the end of a run
    pub fn summary(&self) -> String {
        format!(
            "Finished in {} with {} warning(s) and {} error(s)",
            self.timestamp(),
            self.warnings,
            self.errors
        )
    }

    fn record(&mut self, level: LogLevel, message: String) {
        let stamp = self.timestamp();
        match level {
            LogLevel::Debug => debug!("[SETUP] [{}] {}", stamp, message),
            LogLevel::Info => info!("[SETUP] [{}] {}", stamp, message),
            LogLevel::Warning => warn!("[SETUP] [{}] {}", stamp, message),
            LogLevel::Error => error!("[SETUP] [{}] {}", stamp, message),
        }
        self.entries.push(LogEntry {
            level,
            stamp,
            message,
        });
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    format!(
        "{:02}:{:02}.{:03}",
        millis / 60_000,
        (millis / 1000) % 60,
        millis % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "00:00.000");
        assert_eq!(format_elapsed(Duration::from_millis(61_005)), "01:01.005");
        assert_eq!(format_elapsed(Duration::from_millis(754_321)), "12:34.321");
    }

    #[test]
    fn test_counters_track_levels() {
        let mut log = SetupLog::new();
        log.info("a");
        log.warn("b");
        log.warn("c");
        log.error("d");
        log.debug("e");
        assert_eq!(log.warnings(), 2);
        assert_eq!(log.errors(), 1);
        assert_eq!(log.entries().len(), 5);
        assert_eq!(log.entries()[1].level, LogLevel::Warning);
    }
}
