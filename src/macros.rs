//! Logging macros that record the call site.
//!
//! [`entry!`](crate::entry) opens an entry with `file!()`/`line!()` attached
//! and returns it for chaining. The level macros format a complete message in
//! one call.
//!
//! # Examples
//!
//! ```
//! use rust_tagged_logger::prelude::*;
//! use rust_tagged_logger::{entry, info};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "server", "listening on port {}", 8080);
//! entry!(logger, Level::Warning, "server").append("slow start: ").append(1500).append("ms");
//! ```

/// Open an entry at `level` with the call site as its file/line.
///
/// # Examples
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_tagged_logger::entry;
/// entry!(logger, Level::Info, "main").append("second ").append("line of log");
/// ```
#[macro_export]
macro_rules! entry {
    ($logger:expr, $level:expr, $tag:expr) => {{
        let mut entry = $logger.entry($level, $tag);
        entry.set_file_line(::std::file!(), ::std::line!());
        entry
    }};
}

/// Log one formatted message at `level`.
///
/// # Examples
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_tagged_logger::log;
/// log!(logger, Level::Info, "main", "Simple message");
/// log!(logger, Level::Error, "http", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {{
        $crate::entry!($logger, $level, $tag).append(::std::format_args!($($arg)+));
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_tagged_logger::debug;
/// debug!(logger, "cache", "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Debug, $tag, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Info, $tag, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_tagged_logger::warning;
/// warning!(logger, "retry", "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Warning, $tag, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Error, $tag, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Fatal, $tag, $($arg)+)
    };
}
