//! Log entries
//!
//! [`Entry`] is the in-flight handle returned by the logger's factory
//! methods. It accumulates message fragments and dispatches the finished
//! [`LogEntry`] to the logger's rules when it goes out of scope.

use super::level::Level;
use super::logger::Logger;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location attached with [`Entry::set_file_line`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file, self.line)
    }
}

/// A finalized log record, as seen by writers.
///
/// Level, tag and timestamp are fixed at construction; fragments are only
/// ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    level: Level,
    tag: String,
    location: Option<Location>,
    fragments: Vec<String>,
}

impl LogEntry {
    pub fn new(level: Level, tag: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            tag: tag.into(),
            location: None,
            fragments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some(Location {
            file: file.into(),
            line,
        });
        self
    }

    #[must_use]
    pub fn with_fragment(mut self, fragment: impl fmt::Display) -> Self {
        self.fragments.push(fragment.to_string());
        self
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// All fragments concatenated in append order, without separators
    pub fn message(&self) -> String {
        self.fragments.concat()
    }

    pub(crate) fn message_len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }
}

/// An in-flight log entry bound to its [`Logger`].
///
/// Fragments are appended with [`append`](Entry::append) (or `write!`).
/// When the entry is dropped, normally at the end of the statement that
/// created it, it is handed to every rule of the logger exactly once.
///
/// ```
/// use rust_tagged_logger::Logger;
///
/// let logger = Logger::new();
/// logger.error("net").append("timeout after ").append(30).append('s');
/// ```
#[must_use = "an entry is dispatched as soon as it is dropped"]
pub struct Entry<'a> {
    logger: &'a Logger,
    record: Option<LogEntry>,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level, tag: impl Into<String>) -> Self {
        Self {
            logger,
            record: Some(LogEntry::new(level, tag)),
        }
    }

    pub fn level(&self) -> Level {
        self.record().level
    }

    pub fn tag(&self) -> &str {
        &self.record().tag
    }

    /// Append one fragment, rendered with its `Display` implementation.
    ///
    /// Integers render as base-10 text. No separator is inserted between
    /// fragments.
    pub fn append(&mut self, fragment: impl fmt::Display) -> &mut Self {
        self.record_mut().fragments.push(fragment.to_string());
        self
    }

    /// Attach a source location; the last call wins.
    pub fn set_file_line(&mut self, file: impl Into<String>, line: u32) -> &mut Self {
        self.record_mut().location = Some(Location {
            file: file.into(),
            line,
        });
        self
    }

    fn record(&self) -> &LogEntry {
        // Only `Drop` takes the record, so it is always present here.
        match self.record {
            Some(ref record) => record,
            None => unreachable!("entry record taken before drop"),
        }
    }

    fn record_mut(&mut self) -> &mut LogEntry {
        match self.record {
            Some(ref mut record) => record,
            None => unreachable!("entry record taken before drop"),
        }
    }
}

impl fmt::Write for Entry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.record_mut().fragments.push(s.to_string());
        Ok(())
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("record", &self.record).finish()
    }
}

impl Drop for Entry<'_> {
    fn drop(&mut self) {
        if let Some(record) = self.record.take() {
            self.logger.dispatch(record);
        }
    }
}
