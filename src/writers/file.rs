//! File writer implementation
//!
//! Each write renders the path template against the current time, creates
//! missing parent directories, opens the file in append mode, takes an
//! exclusive lock, writes one line and closes the file again. No handle is
//! kept between writes, so external rotation or deletion is always safe.

use super::path_template::PathTemplate;
use crate::core::{Formatter, LogEntry, LoggerError, Result, TimestampFormat, Writer};
use chrono::Local;
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Template used by [`FileWriter::default`]
pub const DEFAULT_PATH_FORMAT: &str = "{env:temp}/logger-{now:%Y-%m-%d}.log";

pub struct FileWriter {
    template: PathTemplate,
    formatter: Formatter,
    /// Serializes writers in this process; the file lock covers other processes
    write_lock: Mutex<()>,
}

impl FileWriter {
    /// Create a writer for a path template such as `logs/app-{now:%Y%m%d}.log`
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::PathTemplateError`] if the template is malformed.
    pub fn new(path_format: &str) -> Result<Self> {
        Ok(Self::from_template(PathTemplate::parse(path_format)?))
    }

    pub fn from_template(template: PathTemplate) -> Self {
        Self {
            template,
            formatter: Formatter::plain(),
            write_lock: Mutex::new(()),
        }
    }

    /// Set the timestamp format used in the DateTime field
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_tagged_logger::writers::FileWriter;
    /// use rust_tagged_logger::TimestampFormat;
    ///
    /// let writer = FileWriter::new("/var/log/app-{now:%Y%m%d}.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = self.formatter.with_timestamp_format(format);
        self
    }

    pub fn path_format(&self) -> &str {
        self.template.as_str()
    }

    /// Path the next write would go to
    pub fn current_path(&self) -> Result<PathBuf> {
        self.template.render(&Local::now())
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::file_writer(
                        path.display().to_string(),
                        format!("cannot create directory '{}': {}", parent.display(), e),
                    )
                })
            }
            _ => Ok(()),
        }
    }

    fn append(path: &Path, line: &str) -> Result<()> {
        Self::ensure_parent(path)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::file_writer(path.display().to_string(), format!("cannot open: {}", e))
            })?;

        FileExt::lock_exclusive(&file).map_err(|e| {
            LoggerError::file_writer(path.display().to_string(), format!("cannot lock: {}", e))
        })?;

        let written = file.write_all(line.as_bytes());
        // Closing the file releases the lock as well
        let _ = FileExt::unlock(&file);

        written.map_err(|e| {
            LoggerError::io_operation(
                "appending log file",
                path.display().to_string(),
                e,
            )
        })
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::from_template(PathTemplate::default())
    }
}

impl Writer for FileWriter {
    /// Resolve the current path and create its directory, so that a bad
    /// configuration shows up before the first entry is written
    fn start(&self) -> Result<()> {
        let path = self.current_path()?;
        Self::ensure_parent(&path)
    }

    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);

        let _guard = self.write_lock.lock();
        let path = self.current_path()?;
        Self::append(&path, &line)
    }

    fn name(&self) -> &str {
        "file"
    }
}
