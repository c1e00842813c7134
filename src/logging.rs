use std::{
    io::Write,
    sync::{Mutex, OnceLock},
};

use serde::Serialize;

use crate::error::RetargetError;

// Process-wide sink; without one, records go to the `log` facade.
static LOG_SINK: OnceLock<Box<dyn LogSink>> = OnceLock::new();

/// ログレベル定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// A single structured log record handed to a [`LogSink`].
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: &'static str,
    pub message: String,
    pub timestamp: String,
}

/// Destination for structured log records (UI bridge, JSON file, ...).
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord);
}

/// Writes one JSON object per line to any writer.
pub struct JsonLinesSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl LogSink for JsonLinesSink {
    fn emit(&self, record: &LogRecord) {
        let Ok(line) = serde_json::to_string(record) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line) {
                log::error!("Failed to write log record: {}", e);
            }
        }
    }
}

/// Install the process-wide log sink. Returns `false` when one was already set.
pub fn init_logging(sink: Box<dyn LogSink>) -> bool {
    if LOG_SINK.set(sink).is_err() {
        log::warn!("Logging sink already initialized");
        return false;
    }
    true
}

/// Send a log message to the installed sink, or to the `log` facade.
pub fn send_log(level: LogLevel, message: &str) {
    if let Some(sink) = LOG_SINK.get() {
        let record = LogRecord {
            level: level.as_str(),
            message: message.to_string(),
            timestamp: jiff::Zoned::now().to_string(),
        };
        sink.emit(&record);
    } else {
        log::log!(target: "rigmap", level.into(), "{}", message);
    }
}

/// Log a [`RetargetError`] at error level with optional context.
pub fn log_retarget_error(error: &RetargetError, context: Option<&str>) {
    send_log(LogLevel::Error, &format_retarget_error(error, context));
}

fn format_retarget_error(error: &RetargetError, context: Option<&str>) -> String {
    match context {
        Some(ctx) => format!("{}: [{}] {}", ctx, error.code(), error),
        None => format!("[{}] {}", error.code(), error),
    }
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::send_log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::send_log($crate::logging::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::send_log($crate::logging::LogLevel::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::send_log($crate::logging::LogLevel::Error, &format!($($arg)*))
    };
}

/// Result extension for convenient error logging
pub trait ResultExt<T, E> {
    fn log_error(self, context: Option<&str>) -> Self;
}

impl<T> ResultExt<T, RetargetError> for Result<T, RetargetError> {
    fn log_error(self, context: Option<&str>) -> Self {
        if let Err(ref error) = self {
            log_retarget_error(error, context);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn given_json_lines_sink_when_emitting_then_one_json_object_per_line_is_written() {
        let buffer = SharedBuffer::default();
        let sink = JsonLinesSink::new(Box::new(buffer.clone()));

        sink.emit(&LogRecord {
            level: LogLevel::Warn.as_str(),
            message: "vertex group missing".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        });

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let line = written.lines().next().expect("one line");
        let value: serde_json::Value = serde_json::from_str(line).expect("valid json");
        assert_eq!(value["level"], "warn");
        assert_eq!(value["message"], "vertex group missing");
    }

    #[test]
    fn given_log_levels_when_converted_then_facade_levels_match() {
        assert_eq!(log::Level::from(LogLevel::Debug), log::Level::Debug);
        assert_eq!(log::Level::from(LogLevel::Error), log::Level::Error);
        assert_eq!(LogLevel::Info.as_str(), "info");
    }

    #[test]
    fn given_retarget_error_when_formatting_then_context_and_code_prefix_message() {
        let error = RetargetError::BakeFailure("no primary driver".to_string());

        let with_context = format_retarget_error(&error, Some("conversion stopped at stage 'bind'"));
        let bare = format_retarget_error(&error, None);

        assert!(with_context.starts_with("conversion stopped at stage 'bind': ["));
        assert!(with_context.contains(error.code()));
        assert!(with_context.ends_with(&error.to_string()));
        assert_eq!(bare, format!("[{}] {}", error.code(), error));
    }

    #[test]
    fn given_results_when_logging_errors_then_they_pass_through_unchanged() {
        let ok: Result<u32, RetargetError> = Ok(7);
        let err: Result<u32, RetargetError> =
            Err(RetargetError::ConversionAbort("empty mapping".to_string()));

        assert_eq!(ok.log_error(Some("ctx")).unwrap(), 7);
        assert!(matches!(
            err.log_error(None),
            Err(RetargetError::ConversionAbort(message)) if message == "empty mapping"
        ));
    }
}
