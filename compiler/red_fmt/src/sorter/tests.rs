use pretty_assertions::assert_eq;
use red_ir::{FilePosition, RobotToken, RobotTokenType};
use red_model::{RoleToken, TokenRole};

use super::{arrange, priority, sort_tokens};

fn at(text: &str, line: u32, column: u32) -> RobotToken {
    RobotToken::create_positioned(text, FilePosition::new(line, column, 0), RobotTokenType::Unknown)
}

fn texts(tokens: &[RoleToken<'_>]) -> Vec<String> {
    tokens.iter().map(|rt| rt.token.text().to_string()).collect()
}

#[test]
fn priorities_follow_the_role_order() {
    let roles = [
        TokenRole::Declaration,
        TokenRole::Name,
        TokenRole::Argument,
        TokenRole::Alias,
        TokenRole::AliasValue,
        TokenRole::Comment,
    ];
    let priorities: Vec<u8> = roles.iter().map(|role| priority(*role)).collect();
    assert_eq!(priorities, vec![1, 1, 2, 3, 4, u8::MAX]);
}

#[test]
fn source_cells_keep_their_source_order() {
    // A second `WITH NAME` is stored as an argument but written where it was.
    let declaration = at("Library", 2, 0);
    let name = at("Lib", 2, 11);
    let alias = at("WITH NAME", 2, 18);
    let value = at("a", 2, 31);
    let extra = at("WITH NAME", 2, 36);
    let tokens = vec![
        RoleToken::new(TokenRole::Declaration, &declaration),
        RoleToken::new(TokenRole::Name, &name),
        RoleToken::new(TokenRole::Argument, &extra),
        RoleToken::new(TokenRole::Alias, &alias),
        RoleToken::new(TokenRole::AliasValue, &value),
    ];
    assert_eq!(
        texts(&sort_tokens(tokens)),
        vec!["Library", "Lib", "WITH NAME", "a", "WITH NAME"]
    );
}

#[test]
fn new_cells_slot_in_by_priority() {
    let declaration = at("Test Setup", 2, 0);
    let name = at("Open", 2, 14);
    let first = RobotToken::create("new");
    let old = at("url", 2, 22);
    let comment = at("# note", 2, 29);
    let late_comment = RobotToken::create("# more");
    let tokens = vec![
        RoleToken::new(TokenRole::Declaration, &declaration),
        RoleToken::new(TokenRole::Name, &name),
        RoleToken::new(TokenRole::Argument, &first),
        RoleToken::new(TokenRole::Argument, &old),
        RoleToken::new(TokenRole::Comment, &comment),
        RoleToken::new(TokenRole::Comment, &late_comment),
    ];
    assert_eq!(
        texts(&sort_tokens(tokens)),
        vec!["Test Setup", "Open", "new", "url", "# note", "# more"]
    );
}

#[test]
fn new_element_is_sorted_by_priority() {
    let comment = RobotToken::create("# c");
    let declaration = RobotToken::create("Library");
    let alias_value = RobotToken::create("x");
    let alias = RobotToken::create("WITH NAME");
    let tokens = vec![
        RoleToken::new(TokenRole::Comment, &comment),
        RoleToken::new(TokenRole::AliasValue, &alias_value),
        RoleToken::new(TokenRole::Declaration, &declaration),
        RoleToken::new(TokenRole::Alias, &alias),
    ];
    assert_eq!(
        texts(&sort_tokens(tokens)),
        vec!["Library", "WITH NAME", "x", "# c"]
    );
}

#[test]
fn arrange_puts_new_cells_on_the_line_before_them() {
    let declaration = at("Documentation", 2, 0);
    let first = at("one", 2, 17);
    let second = at("two", 3, 7);
    let added = RobotToken::create("three");
    let tokens = vec![
        RoleToken::new(TokenRole::Declaration, &declaration),
        RoleToken::new(TokenRole::Argument, &first),
        RoleToken::new(TokenRole::Argument, &second),
        RoleToken::new(TokenRole::Argument, &added),
    ];
    let lines: Vec<_> = arrange(tokens)
        .into_iter()
        .map(|(line, token)| (line, token.text()))
        .collect();
    assert_eq!(
        lines,
        vec![
            (Some(2), "Documentation"),
            (Some(2), "one"),
            (Some(3), "two"),
            (Some(3), "three")
        ]
    );
}

#[test]
fn arrange_leaves_new_elements_unplaced() {
    let declaration = RobotToken::create("${x}");
    let value = RobotToken::create("1");
    let tokens = vec![
        RoleToken::new(TokenRole::Declaration, &declaration),
        RoleToken::new(TokenRole::Argument, &value),
    ];
    assert!(arrange(tokens).iter().all(|(line, _)| line.is_none()));
}
