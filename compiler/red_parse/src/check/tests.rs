use pretty_assertions::assert_eq;
use red_ir::RobotVersion;

use super::{self_check, self_check_text, SAMPLE_CORPUS};
use crate::ParsingState;

#[test]
fn every_cell_has_exactly_one_mapper() {
    for version in [
        RobotVersion::V2_9,
        RobotVersion::V3_0,
        RobotVersion::V3_1,
        RobotVersion::V3_2,
    ] {
        let report = self_check(version);
        assert!(report.checked > 0);
        assert_eq!(report.overlaps, Vec::new(), "{version}");
        assert_eq!(report.unclaimed, Vec::new(), "{version}");
        assert!(report.is_clean());
    }
}

#[test]
fn corpus_reaches_every_table() {
    for header in [
        "*** Settings ***",
        "*** Variables ***",
        "*** Test Cases ***",
        "*** Tasks ***",
        "*** Keywords ***",
        "*** Comments ***",
    ] {
        assert!(SAMPLE_CORPUS.contains(header), "{header}");
    }
}

#[test]
fn conflicts_render_with_their_location() {
    let conflict = super::MapperConflict {
        line: 3,
        text: "x".to_string(),
        state: ParsingState::Trash,
        mappers: vec!["a", "b"],
    };
    assert_eq!(conflict.to_string(), "line 3: `x` in Trash accepted by a, b");
}

#[test]
fn custom_text_is_checked_too() {
    let report = self_check_text(RobotVersion::V3_1, "*** Settings ***\nLibrary    X\n");
    assert_eq!(report.checked, 3);
    assert!(report.is_clean());
}
