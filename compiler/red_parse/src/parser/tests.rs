use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use red_ir::{EndOfLine, RobotTokenType, RobotVersion};

use super::split_lines;
use crate::{ParseError, ParserConfig, RobotParser};

fn source_of(output: &red_model::RobotFileOutput) -> String {
    output
        .file()
        .lines()
        .iter()
        .map(|line| {
            let eol = match line.end_of_line() {
                EndOfLine::Lf => "\n",
                EndOfLine::CrLf => "\r\n",
                EndOfLine::Cr => "\r",
                EndOfLine::None => "",
            };
            format!("{}{eol}", line.text())
        })
        .collect()
}

#[test]
fn split_lines_keeps_terminators_and_offsets() {
    let lines = split_lines("a\r\nbb\rc\nlast");
    let shape: Vec<_> = lines.iter().map(|(text, eol, offset)| (*text, *eol, *offset)).collect();
    assert_eq!(
        shape,
        vec![
            ("a", EndOfLine::CrLf, 0),
            ("bb", EndOfLine::Cr, 3),
            ("c", EndOfLine::Lf, 6),
            ("last", EndOfLine::None, 8),
        ]
    );
}

#[test]
fn trailing_terminator_opens_no_line() {
    assert_eq!(split_lines("a\n").len(), 1);
    assert!(split_lines("").is_empty());
    assert_eq!(split_lines("\n\n").len(), 2);
}

#[test]
fn lines_keep_every_character() {
    let text = "*** Settings ***\r\nLibrary\tCollections    # c\n\n| *** Test Cases *** |\n| Case | Log | x |\n  \n*** Keywords ***\nKw\n    No Operation";
    let output = RobotParser::default().parse_str(text).unwrap();
    assert_eq!(source_of(&output), text);
}

#[test]
fn pipe_lines_are_mapped_like_space_lines() {
    let output = RobotParser::default()
        .parse_str("| *** Settings *** |\n| Library | OperatingSystem | # note |\n")
        .unwrap();
    let imports = output.file().setting_table().imports();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].path_or_name().unwrap().text(), "OperatingSystem");
}

#[test]
fn trailing_empty_cells_are_layout() {
    let output = RobotParser::default()
        .parse_str("*** Settings ***\n| Library | Lib | |\n")
        .unwrap();
    let line = output.file().line(2).unwrap();
    let types: Vec<_> = line.tokens().map(|token| token.primary_type()).collect();
    assert_eq!(types.len(), 3);
    assert_eq!(types[2], RobotTokenType::PrettyAlignSpace);
    assert!(output.file().setting_table().imports()[0].arguments().is_empty());
}

#[test]
fn observer_sees_every_mapped_cell() {
    let mut seen = Vec::new();
    let mut observer = |_: &red_model::RobotFileOutput,
                     context: &crate::ParsingContext,
                     token: &red_ir::RobotToken| {
        seen.push((context.line_number(), token.text().to_string()));
    };
    RobotParser::default()
        .parse_observed("*** Variables ***\n${A}    1\n", Some(&mut observer))
        .unwrap();
    assert_eq!(
        seen,
        vec![
            (1, "*** Variables ***".to_string()),
            (2, "${A}".to_string()),
            (2, "1".to_string()),
        ]
    );
}

#[test]
fn version_is_taken_from_the_config() {
    let parser = RobotParser::new(ParserConfig::default().with_version(RobotVersion::V3_0));
    let output = parser.parse_str("*** Tasks ***\n").unwrap();
    assert_eq!(output.file().version(), RobotVersion::V3_0);
    assert!(!output.file().task_table().is_present());
}

#[test]
fn missing_file_is_an_io_error() {
    let error = RobotParser::default()
        .parse_file(Path::new("/nonexistent/suite.robot"))
        .unwrap_err();
    assert!(matches!(error, ParseError::Io { .. }));
}

#[test]
fn file_that_is_not_utf8_is_decoded_lossily() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.robot");
    fs::write(&path, b"*** Settings ***\nDocumentation    caf\xe9\n").unwrap();
    let output = RobotParser::default().parse_file(&path).unwrap();
    assert_eq!(source_of(&output), "*** Settings ***\nDocumentation    caf\u{FFFD}\n");
    assert_eq!(output.processed_file(), Some(&path));
    assert!(output.file().setting_table().is_present());
}
