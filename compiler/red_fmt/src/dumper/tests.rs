use pretty_assertions::assert_eq;
use red_ir::{EndOfLine, FileFormat, RobotToken, RobotVersion};
use red_model::{ImportKind, RobotFile, VariableType};
use red_parse::{ParserConfig, RobotParser};
use tempfile::tempdir;

use super::RobotDumper;
use crate::DumpConfig;

fn parse(text: &str) -> RobotFile {
    RobotParser::new(ParserConfig::new(RobotVersion::V3_1, FileFormat::TxtOrRobot))
        .parse_str(text)
        .unwrap()
        .into_file()
}

#[test]
fn untouched_file_dumps_to_its_source() {
    let text = "*** Settings ***\r\nLibrary    A\r\n\r\n# closing comment";
    assert_eq!(RobotDumper::default().dump(&parse(text)), text);
}

#[test]
fn line_without_terminator_gets_one_when_lines_follow() {
    let mut file = parse("*** Settings ***\nLibrary    A");
    file.setting_table_mut()
        .new_import(ImportKind::Library)
        .set_path_or_name(RobotToken::create("B"));
    assert_eq!(
        RobotDumper::default().dump(&file),
        "*** Settings ***\nLibrary    A\nLibrary    B\n"
    );
}

#[test]
fn new_lines_use_the_file_terminator() {
    let mut file = parse("*** Settings ***\r\nLibrary    A\r\n");
    file.setting_table_mut()
        .new_import(ImportKind::Resource)
        .set_path_or_name(RobotToken::create("common.robot"));
    assert_eq!(
        RobotDumper::default().dump(&file),
        "*** Settings ***\r\nLibrary    A\r\nResource    common.robot\r\n"
    );

    let dumper = RobotDumper::new(DumpConfig::default().with_default_eol(EndOfLine::Lf));
    assert_eq!(
        dumper.dump(&file),
        "*** Settings ***\r\nLibrary    A\r\nResource    common.robot\n"
    );
}

#[test]
fn new_section_is_set_apart_by_a_blank_line() {
    let mut file = parse("*** Test Cases ***\nT\n    Log    x\n");
    file.variable_table_mut()
        .new_variable(VariableType::Scalar, "x")
        .add_value(RobotToken::create("1"));
    assert_eq!(
        RobotDumper::default().dump(&file),
        "*** Test Cases ***\nT\n    Log    x\n\n*** Variables ***\n${x}    1\n"
    );

    let mut spaced = parse("*** Test Cases ***\nT\n    Log    x\n\n");
    spaced.include_keyword_table_section();
    assert_eq!(
        RobotDumper::default().dump(&spaced),
        "*** Test Cases ***\nT\n    Log    x\n\n*** Keywords ***\n"
    );
}

#[test]
fn empty_model_dumps_to_nothing() {
    let file = RobotFile::new(RobotVersion::V3_1, FileFormat::TxtOrRobot);
    assert_eq!(RobotDumper::default().dump(&file), "");
}

#[test]
fn dump_to_file_writes_the_dump() {
    let file = parse("*** Keywords ***\nK\n    No Operation\n");
    let dir = tempdir().unwrap();
    let path = dir.path().join("suite.robot");
    RobotDumper::default().dump_to_file(&file, &path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "*** Keywords ***\nK\n    No Operation\n"
    );
}
