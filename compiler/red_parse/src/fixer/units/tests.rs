use pretty_assertions::assert_eq;
use red_diagnostic::{KeywordsProblem, Problem};
use red_ir::{RobotToken, RobotTokenType, RobotVersion};
use red_model::{CommentHolder, RobotExecutableRow, RobotFileOutput};

use crate::{ParserConfig, RobotParser};

fn parse(version: RobotVersion, text: &str) -> RobotFileOutput {
    RobotParser::new(ParserConfig::default().with_version(version))
        .parse_str(text)
        .unwrap()
}

fn rows(output: &RobotFileOutput) -> Vec<&RobotExecutableRow> {
    output.file().test_case_table().units()[0].rows().collect()
}

fn keywords_problems(output: &RobotFileOutput) -> Vec<&Problem> {
    output
        .build_messages()
        .iter()
        .map(|message| message.problem())
        .filter(|problem| matches!(problem, Problem::Keywords(_)))
        .collect()
}

#[test]
fn continued_loop_step_is_merged_into_the_step_above() {
    let output = parse(
        RobotVersion::V3_0,
        "*** Test Cases ***\nCase\n    :FOR    ${i}    IN    a    b\n    \\    Log Many    ${i}\n    \\    ...    more    # note\n",
    );
    let rows = rows(&output);
    assert_eq!(rows.len(), 2);
    let step = rows[1];
    assert_eq!(step.action().text(), "\\");
    let arguments: Vec<_> = step.arguments().iter().map(RobotToken::text).collect();
    assert_eq!(arguments, vec!["Log Many", "${i}", "more"]);
    assert_eq!(step.comment().len(), 1);
    assert!(keywords_problems(&output).is_empty());
}

#[test]
fn for_with_end_marks_its_body() {
    let output = parse(
        RobotVersion::V3_1,
        "*** Test Cases ***\nCase\n    FOR    ${i}    IN RANGE    3\n        Log    ${i}\n    END\n    Log    after\n",
    );
    let rows = rows(&output);
    assert!(rows[0].action().has_type(RobotTokenType::ForWithEnd));
    assert!(rows[1].action().has_type(RobotTokenType::ForWithEndContinuation));
    assert!(!rows[2].action().has_type(RobotTokenType::ForWithEndContinuation));
    assert!(!rows[3].action().has_type(RobotTokenType::ForWithEndContinuation));
    assert!(keywords_problems(&output).is_empty());
}

#[test]
fn end_without_for_is_reported() {
    let output = parse(
        RobotVersion::V3_1,
        "*** Keywords ***\nKw\n    Log    x\n    END\n",
    );
    assert_eq!(
        keywords_problems(&output),
        vec![&Problem::Keywords(KeywordsProblem::ForEndWithoutFor)]
    );
}

#[test]
fn end_is_a_keyword_before_3_1() {
    let output = parse(
        RobotVersion::V3_0,
        "*** Keywords ***\nKw\n    Log    x\n    END\n",
    );
    assert!(keywords_problems(&output).is_empty());
}

#[test]
fn escape_row_outside_a_loop_is_reported() {
    let output = parse(
        RobotVersion::V3_1,
        "*** Test Cases ***\nCase\n    Log    x\n    \\    Log    y\n",
    );
    assert_eq!(
        keywords_problems(&output),
        vec![&Problem::Keywords(KeywordsProblem::ForContinueWithoutFor)]
    );
}

#[test]
fn old_style_loop_takes_no_end() {
    let output = parse(
        RobotVersion::V3_1,
        "*** Test Cases ***\nCase\n    :FOR    ${i}    IN    a\n    \\    Log    ${i}\n    END\n",
    );
    let rows = rows(&output);
    assert!(!rows[0].action().has_type(RobotTokenType::ForWithEnd));
    assert_eq!(
        keywords_problems(&output),
        vec![&Problem::Keywords(KeywordsProblem::ForEndWithoutFor)]
    );
}
