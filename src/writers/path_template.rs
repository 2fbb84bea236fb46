//! File path templates
//!
//! A template is literal text with placeholders:
//!
//! - `{env:NAME}`: value of environment variable `NAME`. `temp` and `tmp`
//!   (any case) fall back to the OS temp directory when unset.
//! - `{now:FORMAT}`: current local time. `FORMAT` is a strftime pattern, or,
//!   when it contains no `%`, a date pattern built from the tokens `yyyy`,
//!   `yy`, `MM`, `dd`, `HH`, `mm` and `ss` (e.g. `{now:yyyy-MM-dd}`).
//! - `{{` and `}}`: literal braces.

use crate::core::timestamp::is_valid_strftime;
use crate::core::{LoggerError, Result};
use chrono::{DateTime, Local};
use std::fmt::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Env(String),
    Now(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(LoggerError::path_template(
                            template,
                            "unterminated placeholder",
                        ));
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Self::parse_placeholder(template, &body)?);
                }
                '}' => {
                    return Err(LoggerError::path_template(template, "unmatched '}'"));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    fn parse_placeholder(template: &str, body: &str) -> Result<Segment> {
        let (kind, arg) = body.split_once(':').ok_or_else(|| {
            LoggerError::path_template(
                template,
                format!("placeholder '{{{}}}' has no argument", body),
            )
        })?;

        if arg.is_empty() {
            return Err(LoggerError::path_template(
                template,
                format!("placeholder '{}' has an empty argument", kind),
            ));
        }

        match kind {
            "env" => Ok(Segment::Env(arg.to_string())),
            "now" => {
                let format = date_pattern_to_strftime(arg);
                if is_valid_strftime(&format) {
                    Ok(Segment::Now(format))
                } else {
                    Err(LoggerError::path_template(
                        template,
                        format!("invalid date format '{}'", arg),
                    ))
                }
            }
            other => Err(LoggerError::path_template(
                template,
                format!("unknown placeholder '{}'", other),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Interpolate environment variables and the given time
    pub fn render(&self, now: &DateTime<Local>) -> Result<PathBuf> {
        let mut path = String::with_capacity(self.source.len() + 32);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Env(name) => path.push_str(&self.env_value(name)?),
                Segment::Now(format) => write!(path, "{}", now.format(format)).map_err(|_| {
                    LoggerError::path_template(&self.source, format!("cannot render '{}'", format))
                })?,
            }
        }

        Ok(PathBuf::from(path))
    }

    fn env_value(&self, name: &str) -> Result<String> {
        match std::env::var(name) {
            Ok(value) => Ok(value),
            Err(_) if name.eq_ignore_ascii_case("temp") || name.eq_ignore_ascii_case("tmp") => {
                Ok(std::env::temp_dir().display().to_string())
            }
            Err(e) => Err(LoggerError::path_template(
                &self.source,
                format!("environment variable '{}': {}", name, e),
            )),
        }
    }
}

/// Token table for `yyyy-MM-dd` style patterns, longest token first
const DATE_TOKENS: [(&str, &str); 7] = [
    ("yyyy", "%Y"),
    ("yy", "%y"),
    ("MM", "%m"),
    ("dd", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Translate a token date pattern into strftime; `%` patterns pass through
fn date_pattern_to_strftime(pattern: &str) -> String {
    if pattern.contains('%') {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        match DATE_TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, item)) => {
                out.push_str(item);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

impl Default for PathTemplate {
    /// `{env:temp}/logger-{now:%Y-%m-%d}.log`
    fn default() -> Self {
        Self {
            source: super::file::DEFAULT_PATH_FORMAT.to_string(),
            segments: vec![
                Segment::Env("temp".to_string()),
                Segment::Literal("/logger-".to_string()),
                Segment::Now("%Y-%m-%d".to_string()),
                Segment::Literal(".log".to_string()),
            ],
        }
    }
}

impl FromStr for PathTemplate {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::DEFAULT_PATH_FORMAT;
    use chrono::TimeZone;

    fn new_year() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2023, 1, 1, 8, 0, 0)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_matches_parsed_default() {
        let parsed = PathTemplate::parse(DEFAULT_PATH_FORMAT).expect("parse default");
        assert_eq!(parsed, PathTemplate::default());
    }

    #[test]
    fn test_render_date_and_literals() {
        let template = PathTemplate::parse("/var/log/app-{now:%Y%m%d}.log").expect("parse");
        assert_eq!(
            template.render(&new_year()).expect("render"),
            PathBuf::from("/var/log/app-20230101.log")
        );
    }

    #[test]
    fn test_render_token_date_pattern() {
        std::env::set_var("RUST_TAGGED_LOGGER_TOKEN_DIR", "/var/log");
        let template =
            PathTemplate::parse("{env:RUST_TAGGED_LOGGER_TOKEN_DIR}/logger-{now:yyyy-MM-dd}.log")
                .expect("parse");
        assert_eq!(
            template.render(&new_year()).expect("render"),
            PathBuf::from("/var/log/logger-2023-01-01.log")
        );

        let time = PathTemplate::parse("{now:yyMMdd_HHmmss}").expect("parse");
        assert_eq!(
            time.render(&new_year()).expect("render"),
            PathBuf::from("230101_080000")
        );
    }

    #[test]
    fn test_render_env() {
        std::env::set_var("RUST_TAGGED_LOGGER_TEST_DIR", "/data/logs");
        let template =
            PathTemplate::parse("{env:RUST_TAGGED_LOGGER_TEST_DIR}/a.log").expect("parse");
        assert_eq!(
            template.render(&new_year()).expect("render"),
            PathBuf::from("/data/logs/a.log")
        );
    }

    #[test]
    fn test_temp_falls_back_to_os_temp_dir() {
        let template = PathTemplate::parse("{env:tmp}").expect("parse");
        let rendered = template.render(&new_year()).expect("render");
        match std::env::var("tmp") {
            Ok(value) => assert_eq!(rendered, PathBuf::from(value)),
            Err(_) => assert_eq!(rendered, std::env::temp_dir()),
        }
    }

    #[test]
    fn test_missing_env_is_error() {
        let template =
            PathTemplate::parse("{env:RUST_TAGGED_LOGGER_SURELY_UNSET}/a.log").expect("parse");
        assert!(matches!(
            template.render(&new_year()),
            Err(LoggerError::PathTemplateError { .. })
        ));
    }

    #[test]
    fn test_escaped_braces() {
        let template = PathTemplate::parse("logs/{{x}}.log").expect("parse");
        assert_eq!(
            template.render(&new_year()).expect("render"),
            PathBuf::from("logs/{x}.log")
        );
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "logs/{now:%Y",
            "logs/}",
            "{env}",
            "{env:}",
            "{home:x}",
            "{now:%Y %}",
        ] {
            assert!(
                matches!(PathTemplate::parse(bad), Err(LoggerError::PathTemplateError { .. })),
                "expected parse error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trips_source() {
        let template: PathTemplate = "{env:temp}/x.log".parse().expect("parse");
        assert_eq!(template.to_string(), "{env:temp}/x.log");
        assert_eq!(template.as_str(), "{env:temp}/x.log");
    }
}
