//! Property-based tests for rust_tagged_logger using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use rust_tagged_logger::prelude::*;
use rust_tagged_logger::strip_sgr;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warning),
        Just(Level::Error),
        Just(Level::Fatal),
    ]
}

#[derive(Default)]
struct Capture(Mutex<Vec<LogEntry>>);

impl Writer for Capture {
    fn write(&self, entry: &LogEntry) -> rust_tagged_logger::Result<()> {
        self.0.lock().push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Test that Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that parsing ignores case
    #[test]
    fn test_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let text = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_uppercase()
        };
        prop_assert_eq!(text.parse::<Level>().unwrap(), level);
    }

    /// Test that Level ordering follows the discriminants
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a > b, (a as u8) > (b as u8));
    }

    /// Test that unknown names never parse
    #[test]
    fn test_level_invalid_parse(invalid in "[0-9 _-]{1,12}") {
        prop_assert!(invalid.parse::<Level>().is_err());
    }
}

// ============================================================================
// Rule Filtering Tests
// ============================================================================

proptest! {
    /// A writer receives an entry exactly when its level meets the minimum
    #[test]
    fn test_rule_applies_iff_level_meets_minimum(min in any_level(), level in any_level()) {
        let capture = Arc::new(Capture::default());
        let logger = Logger::new();
        logger.add_rule(Rule::new(min, capture.clone()));

        logger.entry(level, "prop").append("x");

        let delivered = capture.0.lock().len();
        prop_assert_eq!(delivered, usize::from(level >= min));
    }

    /// Every matching rule receives the entry once, in rule order
    #[test]
    fn test_each_matching_rule_receives_once(
        mins in prop::collection::vec(any_level(), 1..6),
        level in any_level(),
    ) {
        let captures: Vec<Arc<Capture>> =
            mins.iter().map(|_| Arc::new(Capture::default())).collect();
        let logger = Logger::new();
        for (min, capture) in mins.iter().zip(&captures) {
            logger.add_rule(Rule::new(*min, capture.clone()));
        }

        logger.entry(level, "prop").append("x");

        for (min, capture) in mins.iter().zip(&captures) {
            prop_assert_eq!(capture.0.lock().len(), usize::from(level >= *min));
        }
    }
}

// ============================================================================
// Entry Tests
// ============================================================================

proptest! {
    /// The message is the plain concatenation of the fragments
    #[test]
    fn test_message_is_fragment_concatenation(
        fragments in prop::collection::vec("[a-zA-Z0-9 .,:]{0,12}", 0..8),
        tag in "[a-z]{1,8}",
    ) {
        let capture = Arc::new(Capture::default());
        let logger = Logger::new();
        logger.add_rule(Rule::new(Level::Debug, capture.clone()));

        {
            let mut entry = logger.info(tag.clone());
            for fragment in &fragments {
                entry.append(fragment);
            }
        }

        let entries = capture.0.lock();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].tag(), tag.as_str());
        prop_assert_eq!(entries[0].message(), fragments.concat());
    }

    /// Numbers and text mix the same way format! would
    #[test]
    fn test_numeric_fragments(n in any::<i64>(), suffix in "[a-z ]{0,10}") {
        let entry = LogEntry::new(Level::Error, "main").with_fragment(n).with_fragment(&suffix);
        prop_assert_eq!(entry.message(), format!("{}{}", n, suffix));
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Styled output reduces to plain output once color codes are removed
    #[test]
    fn test_styled_strips_to_plain(
        level in any_level(),
        tag in "[a-z]{1,8}",
        message in "[a-zA-Z0-9 ]{0,24}",
        line in proptest::option::of(1u32..10_000),
    ) {
        let mut entry = LogEntry::new(level, tag).with_fragment(message);
        if let Some(line) = line {
            entry = entry.with_location("src/main.rs", line);
        }

        let plain = Formatter::plain().format(&entry);
        let styled = Formatter::styled().format(&entry);

        prop_assert!(!plain.contains('\x1b'));
        prop_assert!(styled.contains('\x1b'));
        prop_assert_eq!(strip_sgr(&styled), plain);
    }

    /// Each plain line has a fixed shape: fields, tabs and one CRLF
    #[test]
    fn test_plain_line_shape(
        level in any_level(),
        tag in "[a-z]{1,8}",
        message in "[a-zA-Z0-9 ]{0,24}",
        line in proptest::option::of(1u32..10_000),
    ) {
        let mut entry = LogEntry::new(level, tag.clone()).with_fragment(&message);
        if let Some(line) = line {
            entry = entry.with_location("lib.rs", line);
        }

        let output = Formatter::plain().format(&entry);
        prop_assert!(output.ends_with("\r\n"));
        prop_assert_eq!(output.matches("\r\n").count(), 1);

        let fields: Vec<&str> = output.trim_end_matches("\r\n").split('\t').collect();
        let expected_fields = if line.is_some() { 5 } else { 4 };
        prop_assert_eq!(fields.len(), expected_fields);

        // Location sits between the timestamp and the level when present
        let offset = expected_fields - 4;
        if let Some(line) = line {
            let location = format!("lib.rs({})", line);
            prop_assert_eq!(fields[1], location.as_str());
        }
        prop_assert_eq!(fields[1 + offset], level.to_str());
        prop_assert_eq!(fields[2 + offset], tag.as_str());
        prop_assert_eq!(fields[3 + offset], message.as_str());
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

proptest! {
    /// Test that entries survive JSON serialization
    #[test]
    fn test_log_entry_json_serialization(
        level in any_level(),
        tag in "[a-z]{1,8}",
        message in "[a-zA-Z0-9 ]{0,24}",
    ) {
        let entry = LogEntry::new(level, tag).with_fragment(message);
        let json = serde_json::to_string(&entry).unwrap();
        let restored: LogEntry = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.level(), entry.level());
        prop_assert_eq!(restored.tag(), entry.tag());
        prop_assert_eq!(restored.message(), entry.message());
    }
}
