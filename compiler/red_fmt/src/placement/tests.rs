use pretty_assertions::assert_eq;
use red_ir::{FileFormat, RobotToken, RobotVersion};
use red_model::{ImportKind, RobotFile, UnitKind, VariableType};
use red_parse::{ParserConfig, RobotParser};

use super::{NewLine, Placement};

fn parse(text: &str) -> RobotFile {
    RobotParser::new(ParserConfig::new(RobotVersion::V3_1, FileFormat::TxtOrRobot))
        .parse_str(text)
        .unwrap()
        .into_file()
}

fn texts(lines: &[NewLine<'_>]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.cells.iter().map(ToString::to_string).collect())
        .collect()
}

#[test]
fn source_cells_stay_on_their_line() {
    let file = parse("*** Settings ***\nLibrary    Collections    # lists\n");
    let placement = Placement::of(&file);

    let cells: Vec<(&str, bool)> = placement
        .cells_on(2)
        .unwrap()
        .iter()
        .map(|cell| (cell.token.text(), cell.opens))
        .collect();
    assert_eq!(
        cells,
        vec![("Library", true), ("Collections", false), ("# lists", false)]
    );
    assert_eq!(placement.new_line_count(), 0);
}

#[test]
fn new_import_follows_the_last_import() {
    let mut file = parse(
        "*** Settings ***\nLibrary    A\nLibrary    B\nDocumentation    doc\n\n*** Test Cases ***\nT\n    Log    x\n",
    );
    file.setting_table_mut()
        .new_import(ImportKind::Library)
        .set_path_or_name(RobotToken::create("C"));
    let placement = Placement::of(&file);

    assert_eq!(texts(placement.lines_after(3)), vec![vec!["Library", "C"]]);
    assert!(placement.lines_after(2).is_empty());
    assert_eq!(placement.new_line_count(), 1);
}

#[test]
fn new_unit_follows_the_last_unit_with_an_indented_body() {
    let mut file = parse("*** Test Cases ***\nFirst\n    Log    1\nSecond\n    Log    2\n");
    let unit = file.unit_table_mut(UnitKind::TestCase).create_unit("Third");
    unit.new_row("Log").add_argument(RobotToken::create("3"));
    let placement = Placement::of(&file);

    assert_eq!(
        texts(placement.lines_after(5)),
        vec![vec!["Third"], vec!["", "Log", "3"]]
    );
}

#[test]
fn new_row_follows_the_rows_of_its_unit() {
    let mut file = parse("*** Keywords ***\nFirst\n    Log    1\nSecond\n    Log    2\n");
    let table = file.unit_table_mut(UnitKind::Keyword);
    table.units_mut()[0].new_row("No Operation");
    let placement = Placement::of(&file);

    assert_eq!(texts(placement.lines_after(3)), vec![vec!["", "No Operation"]]);
}

#[test]
fn table_without_header_becomes_a_new_section() {
    let mut file = parse("*** Test Cases ***\nT\n    Log    x\n");
    file.variable_table_mut()
        .new_variable(VariableType::Scalar, "x")
        .add_value(RobotToken::create("1"));
    let placement = Placement::of(&file);

    let sections: Vec<_> = placement.sections().iter().map(|s| texts(s)).collect();
    assert_eq!(
        sections,
        vec![vec![vec!["*** Variables ***".to_string()], vec!["${x}".into(), "1".into()]]]
    );
}

#[test]
fn empty_model_places_nothing() {
    let file = RobotFile::new(RobotVersion::V3_1, FileFormat::TxtOrRobot);
    let placement = Placement::of(&file);
    assert!(placement.sections().is_empty());
    assert_eq!(placement.new_line_count(), 0);
}

#[test]
fn included_sections_keep_model_order() {
    let mut file = RobotFile::new(RobotVersion::V3_1, FileFormat::TxtOrRobot);
    file.include_keyword_table_section();
    file.include_setting_table_section();
    let placement = Placement::of(&file);

    let sections: Vec<_> = placement.sections().iter().map(|s| texts(s)).collect();
    assert_eq!(
        sections,
        vec![vec![vec!["*** Settings ***"]], vec![vec!["*** Keywords ***"]]]
    );
}
