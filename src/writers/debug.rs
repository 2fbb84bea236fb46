//! Debug-channel writer
//!
//! Emits plain lines to the process's diagnostic stream (stderr), where
//! debuggers and service supervisors pick them up.

use super::stream::StreamTarget;
use crate::core::{Formatter, LogEntry, LoggerError, Result, TimestampFormat, Writer};
use std::io::{self, Write};

pub struct DebugWriter {
    formatter: Formatter,
    target: StreamTarget,
}

impl DebugWriter {
    pub fn new() -> Self {
        Self {
            formatter: Formatter::plain(),
            target: StreamTarget::new(io::stderr()),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Write + Send + 'static) -> Self {
        self.target = StreamTarget::new(target);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = self.formatter.with_timestamp_format(format);
        self
    }
}

impl Default for DebugWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for DebugWriter {
    fn stop(&self) -> Result<()> {
        self.target
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing debug channel", "flush failed", e))
    }

    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        self.target
            .write_line(&line)
            .map_err(|e| LoggerError::io_operation("writing to debug channel", "write failed", e))
    }

    fn name(&self) -> &str {
        "debug"
    }
}
