//! Property-based tests for the line wrapper.
//!
//! Words are generated without the delimiter or newlines so the inserted
//! breaks can be told apart from the input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tdb_fmt::{format_text_with, WrapConfig};

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9äöü]{0,12}", 0..40)
}

fn delimiter_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", ",", ", ", "::"])
}

proptest! {
    #[test]
    fn removing_breaks_recovers_input(
        words in words_strategy(),
        delimiter in delimiter_strategy(),
        line_wrap in 1usize..60,
    ) {
        let text = words.join(delimiter);
        let config = WrapConfig::new(line_wrap).unwrap();
        let formatted = format_text_with(&text, delimiter, &config);

        prop_assert_eq!(formatted.replace('\n', ""), format!("{text}{delimiter}"));
        prop_assert!(formatted.ends_with(delimiter) || formatted.ends_with('\n'));
    }

    #[test]
    fn broken_lines_exceed_width(
        words in words_strategy(),
        line_wrap in 1usize..60,
    ) {
        let text = words.join(" ");
        let config = WrapConfig::new(line_wrap).unwrap();
        let formatted = format_text_with(&text, " ", &config);

        let mut lines: Vec<&str> = formatted.split('\n').collect();
        // The segment after the final break never triggered one.
        let last = lines.pop().unwrap();
        prop_assert!(last.chars().count() <= line_wrap);
        for line in lines {
            let length = line.chars().count();
            prop_assert!(length > line_wrap, "line {:?} broke at {}", line, length);

            // Dropping the last token brings the line back within the width.
            let trimmed = line.strip_suffix(' ').unwrap();
            let before_last = trimmed.rfind(' ').map_or(0, |i| i + 1);
            prop_assert!(line[..before_last].chars().count() <= line_wrap);
        }
    }

    #[test]
    fn wide_enough_never_breaks(words in words_strategy()) {
        let text = words.join(" ");
        let width = text.chars().count() + 1;
        let config = WrapConfig::new(width).unwrap();

        prop_assert!(!format_text_with(&text, " ", &config).contains('\n'));
    }
}
