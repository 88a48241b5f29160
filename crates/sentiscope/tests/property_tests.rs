//! Property-based tests for the validator.
//!
//! These tests use proptest to generate random inputs and verify that
//! sanitization and row validation keep their invariants on any input.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p sentiscope --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p sentiscope --test property_tests
//! ```

use proptest::prelude::*;

use sentiscope::validation::MAX_TEXT_LENGTH;
use sentiscope::{sanitize_text, validate_csv_row, CsvRow, ValidationKind};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary unicode text, including control characters and emoji.
fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[\\x00-\\x7F]{0,80}",
        "[a-zA-Z ]{0,20}[\\u{80}-\\u{9F}\\u{1F300}-\\u{1F5FF}]{0,5}[a-zA-Z ]{0,20}",
        "\\s{0,5}[a-z]{1,10}\\s{0,5}",
    ]
}

fn row_with_text(text: String) -> CsvRow {
    let mut row = CsvRow::new();
    row.insert("text".to_string(), text);
    row
}

// =============================================================================
// Sanitizer Properties
// =============================================================================

proptest! {
    /// Sanitizing twice is the same as sanitizing once.
    #[test]
    fn sanitize_is_idempotent(input in any_text()) {
        let once = sanitize_text(&input);
        prop_assert_eq!(sanitize_text(&once), once);
    }

    /// Output is printable ASCII with no surrounding whitespace.
    #[test]
    fn sanitize_output_is_printable_ascii(input in any_text()) {
        let out = sanitize_text(&input);
        prop_assert!(out.chars().all(|c| (' '..='~').contains(&c)), "got {:?}", out);
        prop_assert_eq!(out.trim(), out.as_str());
    }

    /// Sanitizing never grows the text.
    #[test]
    fn sanitize_never_grows(input in any_text()) {
        prop_assert!(sanitize_text(&input).len() <= input.len());
    }

    /// Plain printable ASCII with no edge spaces is left untouched.
    #[test]
    fn sanitize_keeps_clean_text(input in "[a-zA-Z0-9][a-zA-Z0-9 ,.!?]{0,50}[a-zA-Z0-9]") {
        prop_assert_eq!(sanitize_text(&input), input);
    }
}

// =============================================================================
// Row Validation Properties
// =============================================================================

proptest! {
    /// Any non-empty text within the limit is accepted.
    #[test]
    fn rows_within_limit_pass(len in 1usize..=MAX_TEXT_LENGTH) {
        prop_assert!(validate_csv_row(&row_with_text("x".repeat(len))).is_ok());
    }

    /// Anything over the limit is a structure error.
    #[test]
    fn rows_over_limit_fail(extra in 1usize..200) {
        let err = validate_csv_row(&row_with_text("x".repeat(MAX_TEXT_LENGTH + extra))).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::Structure);
    }

    /// Rows without a text column always fail with structure.
    #[test]
    fn rows_without_text_fail(key in "[a-z]{1,10}", value in any_text()) {
        prop_assume!(key != "text");
        let mut row = CsvRow::new();
        row.insert(key, value);
        let err = validate_csv_row(&row).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::Structure);
    }
}
