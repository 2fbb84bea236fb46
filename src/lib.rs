//! # Rust Tagged Logger
//!
//! A small structured logging library. Callers open a leveled, tagged entry,
//! stream message fragments into it, and the entry is dispatched when it goes
//! out of scope. Each [`Rule`] forwards entries at or above its minimum level
//! to one [`Writer`].
//!
//! ## Features
//!
//! - **Scoped entries**: dispatch happens exactly once, when the entry drops
//! - **Per-writer rules**: console, debug channel, file and socket writers
//! - **Plain and styled text**: styled lines strip back to the plain layout
//! - **Thread safe**: synchronous delivery by default, optional queued delivery
//!
//! ```
//! use rust_tagged_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let console = Arc::new(ConsoleWriter::new());
//! let logger = Logger::new();
//! logger.add_rule(Rule::new(Level::Warning, console));
//!
//! logger.debug("main").append("filtered out");
//! logger.error("net").append("timeout after ").append(30).append('s');
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Entry, Formatter, Level, LogEntry, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, Rule, TimestampFormat, Writer, WriterGuard,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::writers::{ConsoleWriter, DebugWriter, FileWriter, SocketWriter};
}

pub use self::core::{
    strip_sgr, Delivery, Entry, Formatter, Level, Location, LogEntry, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, Rule, RuleConfig, Style, TimestampFormat,
    Writer, WriterConfig, WriterGuard, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use writers::{ConsoleWriter, DebugWriter, FileWriter, PathTemplate, SocketWriter};
