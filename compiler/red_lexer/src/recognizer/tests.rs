#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;

fn metadata_header() -> TokenRecognizer {
    let pattern = format!(
        r"(?i)^[ ]?(?:[*]\s*)+\s*{}(?:\s*[*])*",
        word_with_spaces_inside("Metadata")
    );
    TokenRecognizer::new(
        "metadata header",
        Regex::new(&pattern).expect("valid regex"),
        RobotTokenType::SettingsTableHeader,
    )
    .with_applicability(Applicability::Before(RobotVersion::V3_1))
    .exclusive()
}

#[test]
fn test_before_window_excludes_three_one_and_later() {
    let recognizer = metadata_header();
    assert!(!recognizer.is_applicable_for(RobotVersion::new(3, 1)));
    assert!(!recognizer.is_applicable_for(RobotVersion::with_patch(3, 1, 5)));
    assert!(!recognizer.is_applicable_for(RobotVersion::new(3, 2)));
    assert!(recognizer.is_applicable_for(RobotVersion::new(3, 0)));
    assert!(recognizer.is_applicable_for(RobotVersion::with_patch(3, 0, 9)));
    assert!(!recognizer.should_continue_with_other_recognizers());
}

#[test]
fn test_has_next_then_next_yields_positioned_token() {
    let mut recognizer = metadata_header();
    assert!(recognizer.has_next("*** Metadata ***", 4, 2));
    let token = recognizer.next().expect("token");
    assert_eq!(token.text(), "*** Metadata ***");
    assert_eq!(token.line_number(), Some(4));
    assert_eq!(token.start_column(), Some(2));
    assert_eq!(token.types(), &[RobotTokenType::SettingsTableHeader]);
    assert!(recognizer.next().is_none());
}

#[test]
fn test_new_instance_forgets_match() {
    let mut recognizer = metadata_header();
    assert!(recognizer.has_next("* Metadata", 1, 0));
    let fresh = recognizer.new_instance();
    let mut fresh = fresh;
    assert!(fresh.next().is_none());
    assert!(recognizer.next().is_some());
}

#[test]
fn test_word_with_spaces_inside_tolerates_gaps() {
    let pattern = format!("(?i)^{}$", word_with_spaces_inside("Test Cases"));
    let regex = Regex::new(&pattern).expect("valid regex");
    assert!(regex.is_match("Test Cases"));
    assert!(regex.is_match("TESTCASES"));
    assert!(regex.is_match("t e s t  c a s e s"));
    assert!(!regex.is_match("Test Case"));
}

#[test]
fn test_alternatives_prefer_longest() {
    let pattern = format!("(?i)^{}", alternatives(["Keyword", "Keywords"]));
    let regex = Regex::new(&pattern).expect("valid regex");
    assert_eq!(regex.find("Keywords").map(|m| m.end()), Some(8));
}

#[test]
fn test_applicability_window() {
    let between = Applicability::window(Some(RobotVersion::V3_0), Some(RobotVersion::V3_1));
    assert_eq!(between, Applicability::Between(RobotVersion::V3_0, RobotVersion::V3_1));
    assert!(between.contains(RobotVersion::with_patch(3, 0, 2)));
    assert!(!between.contains(RobotVersion::V2_9));
    assert!(!between.contains(RobotVersion::V3_1));
    assert!(Applicability::Since(RobotVersion::V3_1).contains(RobotVersion::V3_2));
}
