use super::*;

#[test]
fn test_setting_declarations_found_case_insensitively() {
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_setting_table("library"),
        RobotTokenType::SettingLibraryDeclaration
    );
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_setting_table(" Suite Setup: "),
        RobotTokenType::SettingSuiteSetupDeclaration
    );
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_setting_table("Librar"),
        RobotTokenType::Unknown
    );
}

#[test]
fn test_local_setting_declarations_are_table_scoped() {
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_test_case_setting_table("[tags]"),
        RobotTokenType::TestCaseSettingTagsDeclaration
    );
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_keyword_setting_table("[Tags]"),
        RobotTokenType::KeywordSettingTags
    );
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_task_setting_table("[Arguments]"),
        RobotTokenType::Unknown
    );
}

#[test]
fn test_table_header_lookup() {
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_table_header("test case"),
        RobotTokenType::TestCasesTableHeader
    );
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_table_header("User Keywords"),
        RobotTokenType::KeywordsTableHeader
    );
    assert_eq!(
        RobotTokenType::find_type_of_declaration_for_table_header("Foo"),
        RobotTokenType::Unknown
    );
}

#[test]
fn test_representation_version_windows() {
    let document = RobotTokenType::SettingDocumentationDeclaration
        .find_representation("document")
        .map(|repr| (repr.is_available_in(RobotVersion::V3_0), repr.is_deprecated_in(RobotVersion::V3_0)));
    assert_eq!(document, Some((true, true)));

    let removed = RobotTokenType::SettingDocumentationDeclaration
        .find_representation("Document")
        .map(|repr| repr.is_available_in(RobotVersion::V3_1));
    assert_eq!(removed, Some(false));

    let for_keyword = RobotTokenType::ForToken.find_representation("FOR");
    assert_eq!(
        for_keyword.map(|repr| repr.is_available_in(RobotVersion::V3_0)),
        Some(false)
    );
}

#[test]
fn test_most_correct_representation_skips_deprecated() {
    let best = RobotTokenType::SettingSuiteSetupDeclaration
        .most_correct_representation(RobotVersion::V3_0)
        .map(Representation::text);
    assert_eq!(best, Some("Suite Setup"));

    let best_for = RobotTokenType::ForToken
        .most_correct_representation(RobotVersion::V3_2)
        .map(Representation::text);
    assert_eq!(best_for, Some(": FOR"));
}

#[test]
fn test_table_membership() {
    assert_eq!(RobotTokenType::TaskName.table(), TokenTable::Tasks);
    assert!(RobotTokenType::SettingLibraryDeclaration.is_setting_declaration());
    assert!(!RobotTokenType::SettingLibraryName.is_setting_declaration());
    assert!(RobotTokenType::UserOwnTableHeader.is_table_header());
    assert!(RobotTokenType::types_for_table(TokenTable::Comments)
        .any(|ty| ty == RobotTokenType::CommentsTableInnerToken));
}
