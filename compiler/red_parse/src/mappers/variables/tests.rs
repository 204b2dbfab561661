use pretty_assertions::assert_eq;
use red_diagnostic::{Problem, VariablesProblem};
use red_ir::{FileFormat, RobotToken, RobotTokenType, RobotVersion};
use red_model::{RobotFileOutput, VariableType};

use crate::{ParserConfig, RobotParser};

fn variables(text: &str) -> RobotFileOutput {
    RobotParser::new(ParserConfig::new(RobotVersion::V3_1, FileFormat::TxtOrRobot))
        .parse_str(&format!("*** Variables ***\n{text}"))
        .unwrap()
}

fn values(output: &RobotFileOutput, index: usize) -> Vec<&str> {
    output.file().variable_table().variables()[index]
        .values()
        .iter()
        .map(RobotToken::text)
        .collect()
}

#[test]
fn declarations_of_every_kind() {
    let output = variables("${NAME}    value\n@{LIST}    a    b\n&{DICT}    k=v\n");
    let table = output.file().variable_table();
    let kinds: Vec<_> = table.variables().iter().map(|v| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![VariableType::Scalar, VariableType::List, VariableType::Dictionary]
    );
    assert_eq!(table.variables()[0].name(), "NAME");
    assert_eq!(values(&output, 1), vec!["a", "b"]);
    assert_eq!(
        table.variables()[2].values()[0].primary_type(),
        RobotTokenType::VariablesVariableValue
    );
    assert!(output.build_messages().is_empty());
}

#[test]
fn list_continues_over_lines() {
    let output = variables("@{LIST}    a\n...    b\n...    c\n");
    assert_eq!(output.file().variable_table().variables().len(), 1);
    assert_eq!(values(&output, 0), vec!["a", "b", "c"]);
}

#[test]
fn invalid_declaration_is_kept_and_reported() {
    let output = variables("NAME    value\n");
    let variable = &output.file().variable_table().variables()[0];
    assert_eq!(variable.kind(), VariableType::Invalid);
    assert_eq!(values(&output, 0), vec!["value"]);
    assert!(matches!(
        output.build_messages()[0].problem(),
        Problem::Variables(VariablesProblem::InvalidDeclaration { .. })
    ));
}

#[test]
fn dictionary_item_without_equals_is_reported() {
    let output = variables("&{DICT}    a=1    broken\n");
    assert!(matches!(
        output.build_messages()[0].problem(),
        Problem::Variables(VariablesProblem::DictionaryItemWithoutSeparator { .. })
    ));
}
