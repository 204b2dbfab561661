use pretty_assertions::assert_eq;
use red_diagnostic::Severity;
use red_ir::{FileFormat, RobotVersion};
use red_parse::ParserConfig;

use super::check_text;

fn config(version: RobotVersion) -> ParserConfig {
    ParserConfig::new(version, FileFormat::TxtOrRobot)
}

#[test]
fn clean_file_passes() {
    let report = check_text(
        "*** Settings ***\nLibrary    Collections\n\n*** Test Cases ***\nT\n    Log    x\n",
        config(RobotVersion::V3_1),
    )
    .unwrap();
    assert!(report.messages.is_empty());
    assert!(report.round_trip);
    assert!(report.is_ok());
}

#[test]
fn deprecated_setting_is_a_warning() {
    let report = check_text("*** Settings ***\nDocument    text\n", config(RobotVersion::V3_0)).unwrap();
    assert_eq!(report.count(Severity::Warning), 1);
    assert_eq!(report.count(Severity::Error), 0);
    assert!(report.is_ok());
}

#[test]
fn unknown_setting_fails_the_check() {
    let report = check_text("*** Settings ***\nFrobnicate    x\n", config(RobotVersion::V3_1)).unwrap();
    assert_eq!(report.count(Severity::Error), 1);
    assert!(report.round_trip);
    assert!(!report.is_ok());
}
