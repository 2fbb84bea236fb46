//! Console writer implementation

use super::stream::StreamTarget;
use crate::core::{Formatter, LogEntry, LoggerError, Result, TimestampFormat, Writer};
use std::io::{self, Write};

/// Writes styled lines to standard output.
///
/// Output goes through normal stdout buffering; the writer only flushes on
/// [`stop`](Writer::stop).
pub struct ConsoleWriter {
    formatter: Formatter,
    target: StreamTarget,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    /// With `use_colors == false` lines are rendered by the plain formatter
    pub fn with_colors(use_colors: bool) -> Self {
        let formatter = if use_colors {
            Formatter::styled()
        } else {
            Formatter::plain()
        };
        Self {
            formatter,
            target: StreamTarget::new(io::stdout()),
        }
    }

    /// Redirect output to another stream
    ///
    /// # Example
    ///
    /// ```
    /// use rust_tagged_logger::writers::ConsoleWriter;
    ///
    /// let writer = ConsoleWriter::new().with_target(std::io::sink());
    /// ```
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

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ConsoleWriter {
    fn stop(&self) -> Result<()> {
        self.target
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing console", "flush failed", e))
    }

    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        self.target
            .write_line(&line)
            .map_err(|e| LoggerError::io_operation("writing to console", "write failed", e))
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{strip_sgr, Level};
    use crate::writers::stream::test_support::SharedBuffer;

    #[test]
    fn test_styled_by_default() {
        let buffer = SharedBuffer::default();
        let writer = ConsoleWriter::new().with_target(buffer.clone());

        writer
            .write(&LogEntry::new(Level::Error, "net").with_fragment("timeout"))
            .expect("write");

        let out = buffer.contents();
        assert!(out.starts_with("\x1b[90m"));
        assert!(out.contains("\x1b[31mError"));
        assert!(strip_sgr(&out).ends_with("\tError\tnet\ttimeout\r\n"));
    }

    #[test]
    fn test_without_colors() {
        let buffer = SharedBuffer::default();
        let writer = ConsoleWriter::with_colors(false).with_target(buffer.clone());
        assert!(!writer.formatter().is_styled());

        writer
            .write(&LogEntry::new(Level::Info, "main").with_fragment("ready"))
            .expect("write");

        let out = buffer.contents();
        assert!(!out.contains('\x1b'));
        assert!(out.ends_with("\tInfo\tmain\tready\r\n"));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let buffer = SharedBuffer::default();
        let writer = ConsoleWriter::new().with_target(buffer.clone());
        writer
            .write(&LogEntry::new(Level::Info, "main").with_fragment("x"))
            .expect("write");
        let before = buffer.contents();

        writer.stop().expect("first stop");
        writer.stop().expect("second stop");

        assert_eq!(buffer.contents(), before);
    }
}
