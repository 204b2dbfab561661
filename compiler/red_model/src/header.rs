//! Table headers.

use red_ir::{RobotToken, RobotTokenType, TokenTable};

use crate::element::{impl_comment_holder, tagged};
use crate::{ModelElement, ModelType, RoleToken, TokenRole};

/// `*** Settings ***` and friends, with any extra column cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableHeader {
    declaration: RobotToken,
    columns: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl TableHeader {
    pub fn new(declaration: RobotToken) -> Self {
        TableHeader {
            declaration,
            columns: Vec::new(),
            comment: Vec::new(),
        }
    }

    /// Table this header opens; `None` for user-own and comment tables.
    pub fn table(&self) -> Option<TokenTable> {
        match self.declaration.primary_type() {
            RobotTokenType::SettingsTableHeader => Some(TokenTable::Settings),
            RobotTokenType::VariablesTableHeader => Some(TokenTable::Variables),
            RobotTokenType::TestCasesTableHeader => Some(TokenTable::TestCases),
            RobotTokenType::TasksTableHeader => Some(TokenTable::Tasks),
            RobotTokenType::KeywordsTableHeader => Some(TokenTable::Keywords),
            RobotTokenType::CommentsTableHeader => Some(TokenTable::Comments),
            _ => None,
        }
    }

    pub fn columns(&self) -> &[RobotToken] {
        &self.columns
    }

    pub fn add_column(&mut self, token: RobotToken) {
        self.columns.push(tagged(token, RobotTokenType::TableHeaderColumn));
    }
}

impl ModelElement for TableHeader {
    fn model_type(&self) -> ModelType {
        ModelType::TableHeader
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        let mut tokens = vec![RoleToken::new(TokenRole::Declaration, &self.declaration)];
        tokens.extend(self.columns.iter().map(|t| RoleToken::new(TokenRole::Argument, t)));
        tokens.extend(self.comment.iter().map(|t| RoleToken::new(TokenRole::Comment, t)));
        tokens
    }
}

impl_comment_holder!(TableHeader);
