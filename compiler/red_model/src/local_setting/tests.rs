use pretty_assertions::assert_eq;
use red_ir::{RobotToken, RobotTokenType};

use super::*;

fn tags_with_comment() -> LocalSetting {
    let mut setting = LocalSetting::new(UnitKind::TestCase, RobotToken::create("[Tags]"));
    for text in ["1", "2", "#c1", "c2"] {
        setting.add_token(RobotToken::create(text));
    }
    setting
}

fn texts(setting: &LocalSetting) -> Vec<&str> {
    setting.tokens().iter().map(RobotToken::text).collect()
}

fn primary_types(setting: &LocalSetting) -> Vec<RobotTokenType> {
    setting.tokens().iter().map(RobotToken::primary_type).collect()
}

#[test]
fn cells_are_typed_by_position() {
    let setting = tags_with_comment();
    assert_eq!(setting.model_type(), ModelType::TestCaseTags);
    assert_eq!(
        primary_types(&setting),
        vec![
            RobotTokenType::TestCaseSettingTagsDeclaration,
            RobotTokenType::TestCaseSettingTags,
            RobotTokenType::TestCaseSettingTags,
            RobotTokenType::Comment,
            RobotTokenType::Comment,
        ]
    );
    assert_eq!(setting.values().len(), 2);
    assert_eq!(setting.comment().len(), 2);
}

#[test]
fn renaming_changes_kind_and_retypes() {
    let mut setting = tags_with_comment();
    setting.update_token(0, "[Setup]").unwrap();
    assert_eq!(setting.model_type(), ModelType::TestCaseSetup);
    assert_eq!(
        primary_types(&setting),
        vec![
            RobotTokenType::TestCaseSettingSetup,
            RobotTokenType::TestCaseSettingSetupKeywordName,
            RobotTokenType::TestCaseSettingSetupKeywordArgument,
            RobotTokenType::Comment,
            RobotTokenType::Comment,
        ]
    );
    assert_eq!(setting.keyword_name().map(RobotToken::text), Some("1"));
}

#[test]
fn renaming_to_unknown_bracketed_name() {
    let mut setting = tags_with_comment();
    setting.update_token(0, "[Whatever]").unwrap();
    assert_eq!(setting.model_type(), ModelType::TestCaseSettingUnknown);
    assert_eq!(
        setting.tokens()[1].primary_type(),
        RobotTokenType::TestCaseSettingUnknownArguments
    );
}

#[test]
fn renaming_to_non_setting_is_rejected() {
    let mut setting = tags_with_comment();
    let error = setting.update_token(0, "Tags").unwrap_err();
    assert_eq!(
        error,
        ModelError::NotASettingDeclaration {
            text: "Tags".to_string()
        }
    );
    assert_eq!(setting.model_type(), ModelType::TestCaseTags);
}

#[test]
fn editing_a_value_into_a_comment_moves_the_comment_region() {
    let mut setting = tags_with_comment();
    setting.update_token(1, "#new").unwrap();
    assert_eq!(setting.values().len(), 0);
    assert_eq!(setting.comment().len(), 4);
}

#[test]
fn updating_past_the_end_fills_with_escapes() {
    let mut setting = LocalSetting::new(UnitKind::TestCase, RobotToken::create("[Tags]"));
    setting.add_token(RobotToken::create("1"));
    setting.add_token(RobotToken::create("2"));
    setting.update_token(4, "4").unwrap();
    assert_eq!(texts(&setting), vec!["[Tags]", "1", "2", "\\", "4"]);
    assert!(setting
        .tokens()
        .iter()
        .skip(1)
        .all(|t| t.primary_type() == RobotTokenType::TestCaseSettingTags));
}

#[test]
fn declaration_cell_cannot_be_created_or_deleted() {
    let mut setting = tags_with_comment();
    assert!(matches!(
        setting.create_token(0),
        Err(ModelError::DeclarationCellLocked { .. })
    ));
    assert!(matches!(
        setting.delete_token(0),
        Err(ModelError::DeclarationCellLocked { .. })
    ));
}

#[test]
fn create_and_delete_cells() {
    let mut setting = tags_with_comment();
    setting.create_token(1).unwrap();
    assert_eq!(texts(&setting), vec!["[Tags]", "", "1", "2", "#c1", "c2"]);
    setting.delete_token(3).unwrap();
    assert_eq!(texts(&setting), vec!["[Tags]", "", "1", "#c1", "c2"]);
    setting.create_token(17).unwrap();
    setting.delete_token(17).unwrap();
    assert_eq!(setting.tokens().len(), 5);
}

#[test]
fn keyword_local_settings() {
    let arguments = LocalSetting::new(UnitKind::Keyword, RobotToken::create("[Arguments]"));
    assert_eq!(arguments.model_type(), ModelType::UserKeywordArguments);
    let setup = LocalSetting::new(UnitKind::Keyword, RobotToken::create("[Setup]"));
    assert_eq!(setup.model_type(), ModelType::UserKeywordSettingUnknown);
    let task = LocalSetting::create(UnitKind::Task, ModelType::TaskSettingTimeout);
    assert_eq!(task.declaration().text(), "[Timeout]");
    assert_eq!(task.declaration().primary_type(), RobotTokenType::TaskSettingTimeout);
}

#[test]
fn template_exposes_keyword_and_unwanted_arguments() {
    let mut template = LocalSetting::new(UnitKind::TestCase, RobotToken::create("[Template]"));
    template.add_token(RobotToken::create("Keyword"));
    template.add_token(RobotToken::create("extra"));
    assert_eq!(template.keyword_name().map(RobotToken::text), Some("Keyword"));
    assert_eq!(
        template.arguments()[0].primary_type(),
        RobotTokenType::TestCaseSettingTemplateKeywordUnwantedArgument
    );
}
