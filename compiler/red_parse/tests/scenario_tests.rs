#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! End-to-end parser scenarios over small suites.

use pretty_assertions::assert_eq;
use red_diagnostic::{Problem, SettingsProblem};
use red_ir::{RobotToken, RobotTokenType, RobotVersion};
use red_model::{ElementPath, ModelType, RobotFileOutput, RowType};
use red_parse::{MapperRegistry, ParserConfig, ParsingContext, ParsingState, RobotParser};

fn parse(version: RobotVersion, text: &str) -> RobotFileOutput {
    RobotParser::new(ParserConfig::default().with_version(version))
        .parse_str(text)
        .unwrap()
}

fn texts(tokens: &[RobotToken]) -> Vec<&str> {
    tokens.iter().map(RobotToken::text).collect()
}

#[test]
fn library_alias_between_tables() {
    let output = parse(
        RobotVersion::V3_1,
        "*** Settings ***\nLibrary  StdLib1  WITH NAME  lib_y\n*** Test Cases ***",
    );
    let imports = output.file().setting_table().imports();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].path_or_name().unwrap().text(), "StdLib1");
    assert_eq!(
        imports[0].alias().unwrap().name().unwrap().text(),
        "lib_y"
    );
    assert!(output.file().test_case_table().is_present());
    assert!(output.build_messages().is_empty());
}

#[test]
fn mapping_a_test_setup_argument() {
    let version = RobotVersion::V3_1;
    let mut output = parse(version, "*** Settings ***\nTest Setup    Open    first\n");
    let before = output.file().setting_table().test_setups()[0].arguments().len();

    let mut context = ParsingContext::new(version);
    context.enter_table(ParsingState::SettingTableHeader);
    context.push(ParsingState::SettingTestSetup);
    context.attach(ElementPath::Setting {
        model_type: ModelType::TestSetup,
        index: 0,
    });
    context.push(ParsingState::SettingTestSetupKeyword);

    let token = RobotToken::create("second");
    let mappers = MapperRegistry::global().mappers_for(version);
    let accepting: Vec<_> = mappers
        .iter()
        .filter(|mapper| mapper.can_map(&output, &context, &token))
        .collect();
    assert_eq!(accepting.len(), 1);
    let mapped = accepting[0].map(&mut output, &mut context, token);

    let setup = output.file().setting_table().test_setups().last().unwrap();
    assert_eq!(setup.arguments().len(), before + 1);
    assert_eq!(texts(setup.arguments()), vec!["first", "second"]);
    assert_eq!(context.top(), ParsingState::SettingTestSetupKeywordArgument);
    assert_eq!(
        mapped.primary_type(),
        RobotTokenType::SettingTestSetupKeywordArgument
    );
}

#[test]
fn deprecated_and_removed_settings_by_version() {
    let text = "*** Settings ***\nSuite Precondition    Prepare\n";

    let output = parse(RobotVersion::V3_0, text);
    assert_eq!(output.file().setting_table().suite_setups().len(), 1);
    assert!(matches!(
        output.build_messages()[0].problem(),
        Problem::Settings(SettingsProblem::DeprecatedDeclaration { .. })
    ));

    let output = parse(RobotVersion::V3_1, text);
    assert!(output.file().setting_table().suite_setups().is_empty());
    assert!(matches!(
        output.build_messages()[0].problem(),
        Problem::Settings(SettingsProblem::RemovedDeclaration { .. })
    ));

    let output = parse(RobotVersion::V2_9, text);
    assert_eq!(output.file().setting_table().suite_setups().len(), 1);
    assert!(output.build_messages().is_empty());
}

#[test]
fn loop_descriptors_hold_copies() {
    let output = parse(
        RobotVersion::V3_0,
        "*** Test Cases ***\nCase\n    :FOR    ${x}    IN    a    b\n    \\    Log    ${x}\n",
    );
    let unit = &output.file().test_case_table().units()[0];
    let mut rows: Vec<_> = unit.rows().cloned().collect();

    let header = rows[0].build_line_description();
    assert_eq!(header.row_type(), RowType::ForDeclaration);
    assert_eq!(texts(header.creating_variables()), vec!["${x}"]);
    assert_eq!(header.in_action().unwrap().text(), "IN");
    assert_eq!(texts(header.keyword_arguments()), vec!["a", "b"]);

    let body = rows[1].build_line_description();
    assert_eq!(body.row_type(), RowType::ForContinue);
    assert_eq!(body.keyword_action().unwrap().text(), "Log");

    rows[0].action_mut().set_text(":FOR-edited");
    rows[1].arguments_mut()[0].set_text("Edited");
    assert_eq!(header.action().text(), ":FOR");
    assert_eq!(body.keyword_action().unwrap().text(), "Log");

    let unchanged = &output.file().test_case_table().units()[0];
    assert_eq!(unchanged.rows().next().unwrap().action().text(), ":FOR");
}

#[test]
fn suite_documentation_merge_view() {
    let mut output = parse(
        RobotVersion::V3_1,
        "*** Settings ***\nDocumentation    doc1    doc2\nDocumentation    doc3\n...    doc4\n",
    );
    let table = output.file_mut().setting_table_mut();
    assert_eq!(table.documentation_declarations().len(), 2);
    let merged: Vec<_> = table
        .documentation()
        .texts()
        .into_iter()
        .map(RobotToken::text)
        .collect();
    assert_eq!(merged, vec!["doc1", "doc2", "doc3", "doc4"]);

    table
        .documentation_mut()
        .add_text(RobotToken::create("doc5"));
    assert_eq!(table.documentation_declarations().len(), 1);
    let merged: Vec<_> = table
        .documentation()
        .texts()
        .into_iter()
        .map(RobotToken::text)
        .collect();
    assert_eq!(merged, vec!["doc1", "doc2", "doc3", "doc4", "doc5"]);
}

#[test]
fn every_line_is_kept_even_when_unmapped() {
    let text = "stray text\n*** Settings ***\n\n  \nLibrary    X\n*** Unknown ***\nfoo\n";
    let output = parse(RobotVersion::V3_1, text);
    assert_eq!(output.file().lines().len(), 7);
    let joined: Vec<String> = output.file().lines().iter().map(|line| line.text()).collect();
    assert_eq!(joined.join("\n") + "\n", text);
}

#[test]
fn self_check_is_clean_for_every_version() {
    for version in [
        RobotVersion::V2_9,
        RobotVersion::V3_0,
        RobotVersion::V3_1,
        RobotVersion::V3_2,
    ] {
        let report = red_parse::self_check(version);
        assert!(report.is_clean(), "{version}: {report:?}");
    }
}
