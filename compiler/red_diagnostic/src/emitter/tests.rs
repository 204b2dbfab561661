use red_ir::{FilePosition, RobotToken, RobotTokenType};

use super::*;
use crate::{FileRegion, KeywordsProblem, SettingsProblem};

fn render(messages: &[BuildMessage], mode: ColorMode) -> String {
    let mut out = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, mode, false);
        emitter.emit_all("suite.robot", messages);
        emitter.emit_summary(1, 1);
    }
    String::from_utf8(out).unwrap_or_default()
}

#[test]
fn test_plain_output_lists_location_and_fixers() {
    let token = RobotToken::create_positioned(
        "Document",
        FilePosition::new(2, 0, 17),
        RobotTokenType::SettingDocumentationDeclaration,
    );
    let messages = vec![
        BuildMessage::at_token(
            SettingsProblem::DeprecatedDeclaration {
                used: "Document".to_string(),
                replacement: "Documentation".to_string(),
            },
            &token,
        ),
        BuildMessage::new(KeywordsProblem::ForLoopWithoutVariable, None),
    ];

    let output = render(&messages, ColorMode::Never);
    assert_eq!(
        output,
        "suite.robot:2:0: warning[S001]: setting 'Document' is deprecated\n\
         \x20   help: replace with 'Documentation'\n\
         suite.robot: error[K001]: FOR loop declares no loop variable\n\
         1 error, 1 warning\n"
    );
}

#[test]
fn test_colored_output_uses_ansi_codes() {
    let messages = vec![BuildMessage::new(KeywordsProblem::ForEndWithoutFor, None)];
    let output = render(&messages, ColorMode::Always);
    assert!(output.contains("\x1b[1;31merror\x1b[0m"));
    assert!(output.contains("\x1b[1m[K004]\x1b[0m"));
    assert!(output.ends_with("\x1b[1m1 error, 1 warning\x1b[0m\n"));
}

#[test]
fn test_summary_is_skipped_without_problems() {
    let mut out = Vec::new();
    TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false).emit_summary(0, 0);
    assert!(out.is_empty());

    let mut out = Vec::new();
    TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false).emit_summary(0, 3);
    assert_eq!(String::from_utf8(out).unwrap(), "3 warnings\n");
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_region_of_token() {
    let token = RobotToken::create_positioned("abc", FilePosition::new(1, 4, 4), RobotTokenType::Unknown);
    let region = FileRegion::of_token(&token);
    assert_eq!(
        region,
        Some(FileRegion::new(FilePosition::new(1, 4, 4), FilePosition::new(1, 7, 7)))
    );
    assert_eq!(FileRegion::of_token(&RobotToken::create("x")), None);
}
