//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a bounded buffer shared with the application state for
//! display in the UI.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Number of entries kept for the log pane.
///
const MAX_ENTRIES: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Bounded list of formatted log entries, oldest first.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    /// Append an entry, dropping the oldest one when full.
    ///
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return a copy of the newest entries, oldest first.
    ///
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(count);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    /// Return the number of stored entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if nothing was logged yet.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom logger that captures logs to a shared buffer
///
pub struct CustomLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl CustomLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        CustomLogger { buffer, level }
    }

    /// Install the logger as the global `log` backend.
    ///
    pub fn init(buffer: LogBuffer, level: LevelFilter) -> AppResult<()> {
        log::set_boxed_logger(Box::new(CustomLogger::new(buffer, level)))
            .map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies log HTTP internals at debug level
        metadata.level() <= self.level
            && (metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
                || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::OnceLock;

    /// Install a global logger once per test binary and return its buffer.
    ///
    pub(crate) fn captured_logs() -> LogBuffer {
        static LOGS: OnceLock<LogBuffer> = OnceLock::new();
        LOGS.get_or_init(|| {
            let buffer = LogBuffer::default();
            CustomLogger::init(buffer.clone(), LevelFilter::Trace).ok();
            buffer
        })
        .clone()
    }

    fn record<'a>(level: Level, target: &'a str, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target(target).args(args).build()
    }

    #[test]
    fn format_log_contains_level_and_message() {
        let formatted = format_log(&record(
            Level::Warn,
            "tasks_tui",
            format_args!("disk almost full"),
        ));
        assert!(formatted.contains("WARN"));
        assert!(formatted.ends_with("disk almost full"));
    }

    #[test]
    fn buffer_drops_oldest_entries() {
        let buffer = LogBuffer::default();
        for i in 0..(MAX_ENTRIES + 5) {
            buffer.push(format!("entry {}", i));
        }
        assert_eq!(buffer.len(), MAX_ENTRIES);
        let tail = buffer.tail(2);
        assert_eq!(
            tail,
            vec![
                format!("entry {}", MAX_ENTRIES + 3),
                format!("entry {}", MAX_ENTRIES + 4)
            ]
        );
    }

    #[test]
    fn tail_larger_than_buffer() {
        let buffer = LogBuffer::default();
        assert!(buffer.is_empty());
        buffer.push("only".to_string());
        assert_eq!(buffer.tail(10), vec!["only".to_string()]);
    }

    #[test]
    fn logger_filters_by_level_and_target() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(buffer.clone(), LevelFilter::Info);

        logger.log(&record(Level::Info, "tasks_tui::app", format_args!("kept")));
        logger.log(&record(Level::Debug, "tasks_tui::app", format_args!("too verbose")));
        logger.log(&record(Level::Info, "hyper::proto", format_args!("foreign")));
        logger.log(&record(Level::Error, "hyper::proto", format_args!("foreign error")));

        let entries = buffer.tail(10);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("kept"));
        assert!(entries[1].ends_with("foreign error"));
    }
}
