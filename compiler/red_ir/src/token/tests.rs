use super::*;

#[test]
fn test_new_token_is_unknown_and_unpositioned() {
    let token = RobotToken::new();
    assert_eq!(token.types(), &[RobotTokenType::Unknown]);
    assert_eq!(token.text(), "");
    assert!(!token.is_positioned());
    assert_eq!(token.end_column(), None);
}

#[test]
fn test_positioned_token_columns() {
    let token = RobotToken::create_positioned(
        ":FOR",
        FilePosition::new(1, 2, 10),
        RobotTokenType::ForToken,
    );
    assert_eq!(token.line_number(), Some(1));
    assert_eq!(token.start_column(), Some(2));
    assert_eq!(token.end_column(), Some(6));
    assert_eq!(token.start_offset(), Some(10));
}

#[test]
fn test_set_text_marks_dirty_only_on_change() {
    let mut token = RobotToken::create("a");
    token.set_text("a");
    assert!(!token.is_dirty());
    token.set_text("b");
    assert!(token.is_dirty());
    assert_eq!(token.text(), "b");
}

#[test]
fn test_type_list_editing() {
    let mut token = RobotToken::create("${x}");
    token.add_type(RobotTokenType::VariableUsage);
    token.add_type(RobotTokenType::VariableUsage);
    assert_eq!(
        token.types(),
        &[RobotTokenType::Unknown, RobotTokenType::VariableUsage]
    );

    token.insert_type_first(RobotTokenType::KeywordActionArgument);
    token.remove_type(RobotTokenType::Unknown);
    assert_eq!(
        token.types(),
        &[
            RobotTokenType::KeywordActionArgument,
            RobotTokenType::VariableUsage
        ]
    );
    assert_eq!(token.primary_type(), RobotTokenType::KeywordActionArgument);
}

#[test]
fn test_clone_is_a_distinct_value() {
    let original = RobotToken::create_with_type("Log", RobotTokenType::KeywordActionName);
    let mut copy = original.clone();
    copy.set_text("Other");
    assert_eq!(original.text(), "Log");
    assert!(!std::ptr::eq(&original, &copy));
}

#[test]
fn test_content_eq_ignores_position() {
    let a = RobotToken::create_positioned("x", FilePosition::new(3, 4, 20), RobotTokenType::Unknown);
    let b = RobotToken::create("x");
    assert!(a.content_eq(&b));
    assert_ne!(a, b);
}
