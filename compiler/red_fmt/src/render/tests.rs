use std::borrow::Cow;

use pretty_assertions::assert_eq;
use red_ir::{FileFormat, RobotToken, RobotVersion};
use red_lexer::SeparatorStyle;
use red_model::{RobotFile, UnitKind};
use red_parse::{ParserConfig, RobotParser};

use super::{is_unchanged, new_line, source_line};
use crate::placement::Placement;
use crate::DumpConfig;

fn parse(text: &str) -> RobotFile {
    RobotParser::new(ParserConfig::new(RobotVersion::V3_1, FileFormat::TxtOrRobot))
        .parse_str(text)
        .unwrap()
        .into_file()
}

fn render_with(file: &RobotFile, line_number: u32, config: &DumpConfig) -> String {
    let placement = Placement::of(file);
    let line = file.line(line_number).unwrap();
    let cells = placement.cells_on(line_number).unwrap();
    source_line(line, cells, file.format(), config, config.style_for(file))
}

fn render(file: &RobotFile, line_number: u32) -> String {
    render_with(file, line_number, &DumpConfig::default())
}

fn first_row(file: &mut RobotFile) -> &mut red_model::RobotExecutableRow {
    file.unit_table_mut(UnitKind::Keyword).units_mut()[0]
        .elements_mut()[0]
        .as_row_mut()
        .unwrap()
}

#[test]
fn unchanged_line_is_written_back() {
    let file = parse("*** Settings ***\nLibrary      Collections    # lists\n");
    let placement = Placement::of(&file);
    assert!(is_unchanged(file.line(2).unwrap(), placement.cells_on(2).unwrap()));
    assert_eq!(render(&file, 2), "Library      Collections    # lists");
}

#[test]
fn empty_continuation_line_is_unchanged() {
    let file = parse("*** Settings ***\nDocumentation    first\n...\n...    third\n");
    let placement = Placement::of(&file);
    assert!(is_unchanged(file.line(3).unwrap(), placement.cells_on(3).unwrap()));
    assert_eq!(render(&file, 3), "...");
}

#[test]
fn edited_cell_keeps_the_source_separators() {
    let mut file = parse("*** Settings ***\nLibrary      Collections    # lists\n");
    file.setting_table_mut().imports_mut()[0]
        .path_or_name_mut()
        .unwrap()
        .set_text("OperatingSystem");
    assert_eq!(render(&file, 2), "Library      OperatingSystem    # lists");
}

#[test]
fn removed_cell_closes_the_gap() {
    let mut file = parse("*** Keywords ***\nK\n    Log    a    b\n");
    first_row(&mut file).arguments_mut().remove(0);
    assert_eq!(render(&file, 3), "    Log    b");
}

#[test]
fn new_cell_on_a_pipe_line_keeps_the_closing_pipe() {
    let mut file = parse("| *** Settings *** |\n| Library | A |\n");
    file.setting_table_mut().imports_mut()[0].add_argument(RobotToken::create("x"));
    assert_eq!(render(&file, 2), "| Library | A | x |");
}

#[test]
fn new_empty_cell_is_escaped() {
    let mut file = parse("*** Keywords ***\nK\n    Log    a\n");
    let row = first_row(&mut file);
    row.add_argument(RobotToken::create(""));
    row.add_argument(RobotToken::create("x"));
    assert_eq!(render(&file, 3), "    Log    a    \\    x");
}

#[test]
fn continuation_marker_stays_in_front_of_edited_cells() {
    let mut file = parse("*** Keywords ***\nK\n    Log Many    a\n    ...    b\n");
    first_row(&mut file).arguments_mut()[1].set_text("c");
    assert_eq!(render(&file, 4), "    ...    c");
}

#[test]
fn restyle_rewrites_the_separators() {
    let file = parse("*** Keywords ***\nK\n    Log    x    # note\n");
    let config = DumpConfig::default()
        .with_separator_style(SeparatorStyle::Pipe)
        .with_restyle(true);
    assert_eq!(render_with(&file, 3, &config), "|  | Log | x | # note");
    assert_eq!(render_with(&file, 2, &config), "| K");
}

#[test]
fn new_lines_use_the_requested_style() {
    let config = DumpConfig::default();
    let cells: Vec<Cow<'_, str>> = ["", "Log", "", "x"].into_iter().map(Cow::Borrowed).collect();
    assert_eq!(
        new_line(&cells, SeparatorStyle::Whitespace, &config),
        "    Log    \\    x"
    );
    assert_eq!(new_line(&cells, SeparatorStyle::Tabulator, &config), "\tLog\t\tx");
    assert_eq!(new_line(&cells, SeparatorStyle::Pipe, &config), "|  | Log |  | x");
    assert_eq!(
        new_line(&cells[1..2], SeparatorStyle::Whitespace, &config.with_separator_width(2)),
        "Log"
    );
}
