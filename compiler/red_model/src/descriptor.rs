//! Row descriptors.
//!
//! A descriptor classifies an executable row and splits it into the parts
//! validation and navigation care about: variables it creates, the keyword it
//! calls, the variables it uses. Every token in a descriptor is a copy; edits
//! to the row after building do not show through, and edits to the
//! descriptor never reach the row.

use red_diagnostic::{BuildMessage, KeywordsProblem};
use red_ir::{RobotToken, RobotTokenType};

use crate::analysis::{find_variable_uses, is_assignment, VariableUse};
use crate::{LocalSetting, ModelElement, RobotExecutableRow};

/// Shape of an executable row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowType {
    /// A keyword call, optionally assigning its result.
    Simple,
    /// `:FOR ${x} IN ...` or `FOR ${x} IN ...`.
    ForDeclaration,
    /// A body line of a loop: `\ Keyword` or a line inside `FOR ... END`.
    ForContinue,
    /// `END` closing a `FOR` block.
    ForEnd,
    /// A line holding only a `#` comment.
    CommentedHash,
    /// A bracketed local setting seen as a row.
    Setting,
}

/// What a row does, split into copied parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowDescriptor {
    row_type: RowType,
    action: RobotToken,
    creating_variables: Vec<RobotToken>,
    in_action: Option<RobotToken>,
    keyword_action: Option<RobotToken>,
    keyword_arguments: Vec<RobotToken>,
    used_variables: Vec<VariableUse>,
    messages: Vec<BuildMessage>,
}

impl RowDescriptor {
    fn new(row_type: RowType, action: &RobotToken) -> Self {
        RowDescriptor {
            row_type,
            action: action.clone(),
            creating_variables: Vec::new(),
            in_action: None,
            keyword_action: None,
            keyword_arguments: Vec::new(),
            used_variables: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn row_type(&self) -> RowType {
        self.row_type
    }

    /// First cell of the row.
    pub fn action(&self) -> &RobotToken {
        &self.action
    }

    /// `${x}=` cells assigning keyword results, or loop variables.
    pub fn creating_variables(&self) -> &[RobotToken] {
        &self.creating_variables
    }

    /// `IN`, `IN RANGE`, ... of a loop declaration.
    pub fn in_action(&self) -> Option<&RobotToken> {
        self.in_action.as_ref()
    }

    /// Keyword the row calls.
    pub fn keyword_action(&self) -> Option<&RobotToken> {
        self.keyword_action.as_ref()
    }

    /// Arguments of the called keyword, or the values a loop iterates.
    pub fn keyword_arguments(&self) -> &[RobotToken] {
        &self.keyword_arguments
    }

    pub fn used_variables(&self) -> &[VariableUse] {
        &self.used_variables
    }

    pub fn messages(&self) -> &[BuildMessage] {
        &self.messages
    }

    fn collect_uses<'a>(&mut self, tokens: impl IntoIterator<Item = &'a RobotToken>) {
        for token in tokens {
            self.used_variables.extend(find_variable_uses(token));
        }
    }

    /// Splits `cells` into assignments, keyword and arguments.
    fn describe_call(&mut self, cells: &[&RobotToken]) {
        let assignments = cells.iter().take_while(|t| is_assignment(t.text())).count();
        self.creating_variables
            .extend(cells[..assignments].iter().map(|t| (*t).clone()));
        if let Some((keyword, arguments)) = cells[assignments..].split_first() {
            self.keyword_action = Some((*keyword).clone());
            self.keyword_arguments.extend(arguments.iter().map(|t| (*t).clone()));
            self.collect_uses(std::iter::once(*keyword).chain(arguments.iter().copied()));
        }
    }
}

pub(crate) fn describe_row(row: &RobotExecutableRow) -> RowDescriptor {
    let action = row.action();
    if !row.model_type().is_executable_row() {
        return describe_simple(row);
    }
    if action.is_comment_text() {
        return RowDescriptor::new(RowType::CommentedHash, action);
    }
    if is_for_end(action) {
        return RowDescriptor::new(RowType::ForEnd, action);
    }
    if is_for_declaration(action) {
        return describe_for_declaration(row);
    }
    if is_for_continue(action) {
        return describe_for_continue(row);
    }
    describe_simple(row)
}

fn describe_simple(row: &RobotExecutableRow) -> RowDescriptor {
    let mut descriptor = RowDescriptor::new(RowType::Simple, row.action());
    let cells: Vec<&RobotToken> = std::iter::once(row.action())
        .chain(row.arguments())
        .collect();
    descriptor.describe_call(&cells);
    descriptor
}

fn describe_for_declaration(row: &RobotExecutableRow) -> RowDescriptor {
    let action = row.action();
    let mut descriptor = RowDescriptor::new(RowType::ForDeclaration, action);
    let arguments = row.arguments();
    let in_index = arguments.iter().position(is_in_token);
    let variables_end = in_index.unwrap_or(arguments.len());
    descriptor
        .creating_variables
        .extend(arguments[..variables_end].iter().cloned());
    if descriptor.creating_variables.is_empty() {
        descriptor
            .messages
            .push(BuildMessage::at_token(KeywordsProblem::ForLoopWithoutVariable, action));
    }
    match in_index {
        Some(index) => {
            descriptor.in_action = Some(arguments[index].clone());
            let values = &arguments[index + 1..];
            descriptor.keyword_arguments.extend(values.iter().cloned());
            descriptor.collect_uses(values);
            if values.is_empty() {
                descriptor.messages.push(BuildMessage::at_token(
                    KeywordsProblem::ForLoopWithoutValues,
                    &arguments[index],
                ));
            }
        }
        None => descriptor.messages.push(BuildMessage::at_token(
            KeywordsProblem::ForLoopWithoutIn {
                declaration: action.text().to_string(),
            },
            action,
        )),
    }
    descriptor
}

fn describe_for_continue(row: &RobotExecutableRow) -> RowDescriptor {
    let action = row.action();
    let mut descriptor = RowDescriptor::new(RowType::ForContinue, action);
    let cells: Vec<&RobotToken> = if is_escape_cell(action) {
        row.arguments().iter().collect()
    } else {
        std::iter::once(action).chain(row.arguments()).collect()
    };
    descriptor.describe_call(&cells);
    descriptor
}

pub(crate) fn describe_setting(setting: &LocalSetting) -> RowDescriptor {
    let mut descriptor = RowDescriptor::new(RowType::Setting, setting.declaration());
    if setting.calls_keyword() {
        let cells: Vec<&RobotToken> = setting.values().iter().collect();
        descriptor.describe_call(&cells);
    } else {
        descriptor
            .keyword_arguments
            .extend(setting.values().iter().cloned());
        descriptor.collect_uses(setting.values());
    }
    descriptor
}

fn is_escape_cell(token: &RobotToken) -> bool {
    token.text().trim() == "\\"
}

/// `:FOR`, `: FOR` by text, plain `FOR` only when recognized for the version.
pub fn is_for_declaration(token: &RobotToken) -> bool {
    if token.has_type(RobotTokenType::ForToken) {
        return true;
    }
    let text: String = token.text().chars().filter(|c| !c.is_whitespace()).collect();
    text.eq_ignore_ascii_case(":FOR")
}

pub fn is_for_continue(token: &RobotToken) -> bool {
    token.has_type(RobotTokenType::ForContinueToken)
        || token.has_type(RobotTokenType::ForContinueArtificialToken)
        || token.has_type(RobotTokenType::ForWithEndContinuation)
        || is_escape_cell(token)
}

pub fn is_for_end(token: &RobotToken) -> bool {
    token.has_type(RobotTokenType::ForEndToken)
}

pub fn is_in_token(token: &RobotToken) -> bool {
    const IN_SPELLINGS: [&str; 4] = ["IN", "IN RANGE", "IN ENUMERATE", "IN ZIP"];
    token.has_type(RobotTokenType::InToken)
        || IN_SPELLINGS
            .iter()
            .any(|spelling| spelling.eq_ignore_ascii_case(token.text().trim()))
}
