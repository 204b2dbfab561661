use pretty_assertions::assert_eq;
use red_ir::TokenTable;

use super::*;

#[test]
fn new_line_keeps_only_the_table() {
    let mut stack = ParsingStateStack::new();
    assert_eq!(stack.top(), ParsingState::Unknown);
    assert_eq!(stack.table(), None);

    stack.enter_table(ParsingState::SettingTableHeader);
    stack.push(ParsingState::SettingTestSetup);
    stack.push(ParsingState::SettingTestSetupKeyword);
    assert_eq!(stack.len(), 3);

    stack.start_line();
    assert_eq!(stack.states(), &[ParsingState::SettingTableInside]);
    assert_eq!(stack.table(), Some(TokenTable::Settings));
}

#[test]
fn popping_past_the_bottom_is_an_internal_error() {
    let mut stack = ParsingStateStack::new();
    stack.push(ParsingState::Trash);
    assert_eq!(stack.pop().ok(), Some(ParsingState::Trash));
    assert!(matches!(stack.pop(), Err(ParseError::InternalState(_))));
}

#[test]
fn unknown_tables_read_as_comments() {
    assert_eq!(ParsingState::header_of(None), ParsingState::CommentTableHeader);
    assert_eq!(
        ParsingState::header_of(Some(TokenTable::Keywords)).inside(),
        ParsingState::KeywordTableInside
    );
    assert!(ParsingState::TaskTableHeader.is_table_header());
    assert_eq!(ParsingState::TableHeaderColumn.inside(), ParsingState::TableHeaderColumn);
}

#[test]
fn unit_states_follow_the_kind() {
    let states = UnitStates::of(UnitKind::Keyword);
    assert_eq!(states.declaration, ParsingState::KeywordDeclaration);
    assert_eq!(states.setting_value, ParsingState::KeywordSettingValue);
}
