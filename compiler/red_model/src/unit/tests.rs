use pretty_assertions::assert_eq;
use red_ir::{FilePosition, RobotToken, RobotTokenType};

use super::*;
use crate::RowType;

#[test]
fn factories_type_names_and_rows() {
    let mut table = UnitTable::new(UnitKind::Keyword);
    let keyword = table.create_unit("My Keyword");
    keyword
        .new_setting(ModelType::UserKeywordArguments)
        .add_token(RobotToken::create("${a}"));
    keyword.new_row("Log").add_argument(RobotToken::create("${a}"));

    let keyword = &table.units()[0];
    assert_eq!(keyword.name().primary_type(), RobotTokenType::KeywordName);
    assert_eq!(keyword.elements().len(), 2);
    let row = keyword.rows().next().expect("row");
    assert_eq!(row.action().primary_type(), RobotTokenType::KeywordActionName);
    assert_eq!(row.arguments()[0].types(), &[RobotTokenType::KeywordActionArgument]);
    assert_eq!(
        keyword.settings().next().map(LocalSetting::model_type),
        Some(ModelType::UserKeywordArguments)
    );
    assert!(table.find("my keyword").is_some());
}

#[test]
fn documentation_view_joins_all_declarations() {
    let mut unit = ExecutableUnit::new(UnitKind::TestCase, RobotToken::create("T"));
    for (line, text) in [(2, "first"), (3, "second")] {
        let mut doc = LocalSetting::new(UnitKind::TestCase, RobotToken::create("[Documentation]"));
        doc.add_token(RobotToken::create_positioned(
            text,
            FilePosition::new(line, 20, 0),
            RobotTokenType::Unknown,
        ));
        unit.add_setting(doc);
    }
    assert_eq!(unit.documentation().len(), 2);
    assert_eq!(unit.documentation_text(), "first\nsecond");
}

#[test]
fn elements_describe_themselves() {
    let mut unit = ExecutableUnit::new(UnitKind::Task, RobotToken::create("Task"));
    unit.new_setting(ModelType::TaskTags);
    unit.new_row("# just a note");
    let types: Vec<RowType> = unit
        .elements()
        .iter()
        .map(|e| e.build_line_description().row_type())
        .collect();
    assert_eq!(types, vec![RowType::Setting, RowType::CommentedHash]);
}
