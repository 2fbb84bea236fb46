//! Severity rules binding a minimum level to a writer

use super::{entry::LogEntry, error::Result, level::Level, writer::Writer};
use std::fmt;
use std::sync::Arc;

/// Forwards entries at or above `min_level` to one writer.
///
/// Several rules may share the same writer.
#[derive(Clone)]
pub struct Rule {
    min_level: Level,
    writer: Arc<dyn Writer>,
}

impl Rule {
    pub fn new(min_level: Level, writer: Arc<dyn Writer>) -> Self {
        Self { min_level, writer }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn writer(&self) -> &Arc<dyn Writer> {
        &self.writer
    }

    #[inline]
    pub fn accepts(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Write the entry if its level passes; writer errors are returned as is.
    pub fn apply(&self, entry: &LogEntry) -> Result<()> {
        if !self.accepts(entry.level()) {
            return Ok(());
        }
        self.writer.write(entry)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("min_level", &self.min_level)
            .field("writer", &self.writer.name())
            .finish()
    }
}
