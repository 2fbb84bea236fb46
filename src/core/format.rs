//! Text formatting of log entries
//!
//! Both formatters emit the same fields in the same order:
//!
//! ```text
//! <datetime>\t[<file>(<line>)\t]<level>\t<tag>\t<message>\r\n
//! ```
//!
//! The styled formatter prefixes each field with one SGR color sequence and
//! resets the color before the terminator. Stripping the SGR sequences from a
//! styled line yields exactly the plain line.

use super::entry::LogEntry;
use super::timestamp::TimestampFormat;
use colored::Color;

pub const FIELD_SEPARATOR: char = '\t';
pub const ENTRY_SEPARATOR: &str = "\r\n";
pub const SGR_RESET: &str = "\x1b[0m";

/// Semantic style of a field in styled output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Muted,
}

impl Style {
    pub fn color(&self) -> Color {
        match self {
            Style::Primary => Color::White,
            Style::Secondary => Color::BrightWhite,
            Style::Success => Color::Green,
            Style::Danger => Color::Red,
            Style::Warning => Color::Yellow,
            Style::Muted => Color::BrightBlack,
        }
    }

    /// Foreground color selection sequence, e.g. `\x1b[37m`
    pub fn sgr(&self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }
}

/// Stateless renderer turning a [`LogEntry`] into one text line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    styled: bool,
    timestamp_format: TimestampFormat,
}

impl Formatter {
    /// Literal field values, tab separated, CRLF terminated
    pub fn plain() -> Self {
        Self {
            styled: false,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Plain layout with a color sequence before every field
    pub fn styled() -> Self {
        Self {
            styled: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        let mut line = String::with_capacity(64 + entry.tag().len() + entry.message_len());

        self.add_style(&mut line, Style::Muted);
        line.push_str(&self.timestamp_format.format(entry.timestamp()));
        line.push(FIELD_SEPARATOR);

        if let Some(location) = entry.location() {
            self.add_style(&mut line, Style::Primary);
            line.push_str(&location.to_string());
            line.push(FIELD_SEPARATOR);
        }

        let level = entry.level();
        self.add_style(&mut line, level.style());
        line.push_str(level.to_str());
        line.push(FIELD_SEPARATOR);

        self.add_style(&mut line, Style::Primary);
        line.push_str(entry.tag());
        line.push(FIELD_SEPARATOR);

        self.add_style(&mut line, Style::Primary);
        for fragment in entry.fragments() {
            line.push_str(fragment);
        }

        if self.styled {
            line.push_str(SGR_RESET);
        }
        line.push_str(ENTRY_SEPARATOR);
        line
    }

    fn add_style(&self, line: &mut String, style: Style) {
        if self.styled {
            line.push_str(&style.sgr());
        }
    }
}

/// Remove every `ESC [ ... <final byte>` sequence from `text`
pub fn strip_sgr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use chrono::{Local, TimeZone};

    fn entry(level: Level) -> LogEntry {
        let at = Local
            .with_ymd_and_hms(2023, 1, 1, 12, 0, 5)
            .single()
            .expect("valid datetime");
        LogEntry::new(level, "net")
            .with_timestamp(at)
            .with_fragment("time")
            .with_fragment("out")
    }

    #[test]
    fn test_plain_line() {
        let line = Formatter::plain().format(&entry(Level::Error));
        assert_eq!(line, "2023-01-01 12:00:05\tError\tnet\ttimeout\r\n");
    }

    #[test]
    fn test_plain_line_with_location() {
        let line = Formatter::plain().format(&entry(Level::Info).with_location("main.rs", 7));
        assert_eq!(line, "2023-01-01 12:00:05\tmain.rs(7)\tInfo\tnet\ttimeout\r\n");
    }

    #[test]
    fn test_styled_line_colors() {
        let line = Formatter::styled().format(&entry(Level::Warning).with_location("a.rs", 1));
        assert_eq!(
            line,
            "\x1b[90m2023-01-01 12:00:05\t\x1b[37ma.rs(1)\t\x1b[33mWarning\t\
             \x1b[37mnet\t\x1b[37mtimeout\x1b[0m\r\n"
        );
    }

    #[test]
    fn test_styled_stripped_equals_plain() {
        for level in Level::ALL {
            let entry = entry(level);
            let plain = Formatter::plain().format(&entry);
            let styled = Formatter::styled().format(&entry);
            assert_ne!(plain, styled);
            assert_eq!(strip_sgr(&styled), plain);
        }
    }

    #[test]
    fn test_plain_has_no_escape() {
        let line = Formatter::plain().format(&entry(Level::Fatal));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_style_palette() {
        assert_eq!(Style::Primary.sgr(), "\x1b[37m");
        assert_eq!(Style::Secondary.sgr(), "\x1b[97m");
        assert_eq!(Style::Success.sgr(), "\x1b[32m");
        assert_eq!(Style::Danger.sgr(), "\x1b[31m");
        assert_eq!(Style::Warning.sgr(), "\x1b[33m");
        assert_eq!(Style::Muted.sgr(), "\x1b[90m");
    }

    #[test]
    fn test_custom_timestamp_format() {
        let formatter =
            Formatter::plain().with_timestamp_format(TimestampFormat::Custom("%H:%M".into()));
        assert!(formatter.format(&entry(Level::Debug)).starts_with("12:00\tDebug"));
    }

    #[test]
    fn test_strip_sgr_leaves_plain_text() {
        assert_eq!(strip_sgr("no escapes"), "no escapes");
        assert_eq!(strip_sgr("\x1b[1;31mred\x1b[0m"), "red");
    }
}
