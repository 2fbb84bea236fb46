//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod rule;
pub mod timestamp;
pub mod writer;

pub use config::{Delivery, LoggerConfig, RuleConfig, WriterConfig};
pub use entry::{Entry, Location, LogEntry};
pub use error::{LoggerError, Result};
pub use format::{strip_sgr, Formatter, Style};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use rule::Rule;
pub use timestamp::TimestampFormat;
pub use writer::{Writer, WriterGuard};
