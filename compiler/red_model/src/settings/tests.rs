use pretty_assertions::assert_eq;
use red_ir::{FilePosition, RobotToken, RobotTokenType};

use super::*;
use crate::TokenRole;

fn positioned(text: &str, line: u32, column: u32) -> RobotToken {
    RobotToken::create_positioned(text, FilePosition::new(line, column, 0), RobotTokenType::Unknown)
}

fn two_documentations() -> SettingTable {
    let mut table = SettingTable::default();
    let first = table.new_documentation();
    first.add_text(positioned("doc1", 2, 17));
    first.add_text(positioned("doc2", 2, 25));
    let second = table.new_documentation();
    second.add_text(positioned("doc3", 3, 17));
    second.add_text(positioned("doc4", 3, 25));
    table
}

fn doc_texts(table: &SettingTable) -> Vec<&str> {
    table.documentation().texts().into_iter().map(RobotToken::text).collect()
}

#[test]
fn documentation_view_merges_declarations() {
    let table = two_documentations();
    assert_eq!(doc_texts(&table), vec!["doc1", "doc2", "doc3", "doc4"]);
    assert_eq!(table.documentation_declarations().len(), 2);
    assert_eq!(table.documentation().text(), "doc1 doc2\ndoc3 doc4");
}

#[test]
fn adding_text_collapses_declarations() {
    let mut table = two_documentations();
    table.documentation_mut().add_text(RobotToken::create("doc5"));
    assert_eq!(table.documentation_declarations().len(), 1);
    assert_eq!(doc_texts(&table), vec!["doc1", "doc2", "doc3", "doc4", "doc5"]);
    assert!(table.documentation_declarations()[0]
        .text()
        .iter()
        .all(|t| t.has_type(RobotTokenType::SettingDocumentationText)));
}

#[test]
fn modifying_text_keeps_declarations() {
    let mut table = two_documentations();
    if let Some(token) = table.documentation_mut().text_mut(2) {
        token.set_text("changed");
    }
    assert_eq!(table.documentation_declarations().len(), 2);
    assert_eq!(doc_texts(&table), vec!["doc1", "doc2", "changed", "doc4"]);
    assert!(table.documentation_declarations()[1].text()[0].is_dirty());
}

#[test]
fn adding_text_without_declaration_creates_one() {
    let mut table = SettingTable::default();
    table.documentation_mut().add_text(RobotToken::create("text"));
    let declarations = table.documentation_declarations();
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].declaration().text(), "Documentation");
}

#[test]
fn library_with_alias_roles() {
    let mut table = SettingTable::default();
    let library = table.new_import(ImportKind::Library);
    library.set_path_or_name(RobotToken::create("StdLib1"));
    library.add_argument(RobotToken::create("arg"));
    let mut alias = LibraryAlias::new(RobotToken::create("WITH NAME"));
    alias.set_name(RobotToken::create("lib_y"));
    library.set_alias(alias);
    library.add_comment_part(RobotToken::create("# c"));

    let roles: Vec<(TokenRole, &str)> = table.imports()[0]
        .role_tokens()
        .into_iter()
        .map(|rt| (rt.role, rt.token.text()))
        .collect();
    assert_eq!(
        roles,
        vec![
            (TokenRole::Declaration, "Library"),
            (TokenRole::Name, "StdLib1"),
            (TokenRole::Argument, "arg"),
            (TokenRole::Alias, "WITH NAME"),
            (TokenRole::AliasValue, "lib_y"),
            (TokenRole::Comment, "# c"),
        ]
    );
    let import = &table.imports()[0];
    assert_eq!(import.model_type(), ModelType::LibraryImport);
    assert_eq!(
        import.alias().and_then(LibraryAlias::name).map(RobotToken::primary_type),
        Some(RobotTokenType::SettingLibraryAliasValue)
    );
    assert_eq!(table.libraries().count(), 1);
}

#[test]
fn keyword_calls_are_typed_by_kind() {
    let mut table = SettingTable::default();
    let setup = table.new_test_setup();
    setup.set_keyword_name(RobotToken::create("Open"));
    setup.add_argument(RobotToken::create("${url}"));
    let setup = &table.test_setups()[0];
    assert_eq!(setup.declaration().text(), "Test Setup");
    assert_eq!(
        setup.keyword_name().map(RobotToken::primary_type),
        Some(RobotTokenType::SettingTestSetupKeywordName)
    );
    assert_eq!(setup.arguments()[0].primary_type(), RobotTokenType::SettingTestSetupKeywordArgument);
    assert_eq!(table.keyword_calls(ModelType::TestSetup).len(), 1);
    assert!(table.keyword_calls(ModelType::SuiteSetup).is_empty());
}

#[test]
fn comments_reach_elements_through_their_kind() {
    let mut table = SettingTable::default();
    table.new_force_tags().add_tag(RobotToken::create("smoke"));
    table.new_metadata().set_key(RobotToken::create("Version"));
    table
        .comment_holder_mut(ModelType::ForceTags, 0)
        .expect("force tags")
        .add_comment_part(RobotToken::create("# why"));
    assert!(table.comment_holder_mut(ModelType::DefaultTags, 0).is_none());
    assert_eq!(table.force_tags()[0].comment()[0].types(), &[RobotTokenType::Comment]);
    assert_eq!(table.elements().len(), 2);
}

#[test]
fn declaration_kinds() {
    assert_eq!(
        setting_model_type(RobotTokenType::SettingTaskTimeoutDeclaration),
        Some(ModelType::TaskTimeout)
    );
    assert_eq!(setting_model_type(RobotTokenType::SettingLibraryName), None);
}
