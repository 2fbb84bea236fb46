//! Severity levels

use super::error::LoggerError;
use super::format::Style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entry severity, totally ordered from `Debug` to `Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }

    /// Style used for the level field of styled output
    pub fn style(&self) -> Style {
        match self {
            Level::Debug => Style::Muted,
            Level::Info => Style::Secondary,
            Level::Warning => Style::Warning,
            Level::Error | Level::Fatal => Style::Danger,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert_eq!(Level::ALL.iter().max(), Some(&Level::Fatal));
    }

    #[test]
    fn test_words() {
        let words: Vec<&str> = Level::ALL.iter().map(Level::to_str).collect();
        assert_eq!(words, ["Debug", "Info", "Warning", "Error", "Fatal"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert!(matches!(
            "trace".parse::<Level>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_level_styles() {
        assert_eq!(Level::Debug.style(), Style::Muted);
        assert_eq!(Level::Info.style(), Style::Secondary);
        assert_eq!(Level::Warning.style(), Style::Warning);
        assert_eq!(Level::Error.style(), Style::Danger);
        assert_eq!(Level::Fatal.style(), Style::Danger);
    }
}
