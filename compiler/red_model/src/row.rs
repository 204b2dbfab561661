//! Executable rows: one keyword call or loop line of a unit body.

use red_ir::{RobotToken, RobotTokenType};

use crate::element::{impl_comment_holder, tagged};
use crate::{ModelElement, ModelType, RoleToken, RowDescriptor, TokenRole, UnitKind};

/// A step of a test case, task or keyword, or a keyword call made by a
/// suite-level setting when viewed as a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotExecutableRow {
    model_type: ModelType,
    action: RobotToken,
    arguments: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl RobotExecutableRow {
    /// Empty row of `model_type`; set its action before dumping.
    pub fn new(model_type: ModelType) -> Self {
        RobotExecutableRow {
            model_type,
            action: RobotToken::new(),
            arguments: Vec::new(),
            comment: Vec::new(),
        }
    }

    /// Body row of a `kind` unit calling `action`.
    pub fn with_action(kind: UnitKind, action: RobotToken) -> Self {
        let mut row = RobotExecutableRow::new(kind.row_model_type());
        row.set_action(action);
        row
    }

    pub fn action(&self) -> &RobotToken {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut RobotToken {
        &mut self.action
    }

    pub fn set_action(&mut self, action: RobotToken) {
        self.action = match UnitKind::of_row(self.model_type) {
            Some(kind) => tagged(action, kind.action_type()),
            None => action,
        };
    }

    pub fn arguments(&self) -> &[RobotToken] {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut Vec<RobotToken> {
        &mut self.arguments
    }

    pub fn add_argument(&mut self, argument: RobotToken) {
        let argument = match UnitKind::of_row(self.model_type) {
            Some(kind) => tagged(argument, kind.argument_type()),
            None => argument,
        };
        self.arguments.push(argument);
    }

    /// Puts `argument` at `index`, shifting later arguments right.
    pub fn insert_argument(&mut self, index: usize, argument: RobotToken) {
        let index = index.min(self.arguments.len());
        self.add_argument(argument);
        if let Some(last) = self.arguments.pop() {
            self.arguments.insert(index, last);
        }
    }

    /// Comment-only rows have a `#` action.
    pub fn is_commented(&self) -> bool {
        self.action.is_comment_text()
    }

    /// Whether the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.action.text().is_empty() && self.arguments.is_empty() && self.comment.is_empty()
    }

    pub fn line_number(&self) -> Option<u32> {
        self.element_tokens().into_iter().find_map(RobotToken::line_number)
    }

    /// Classifies the row and copies out the tokens of each part.
    pub fn build_line_description(&self) -> RowDescriptor {
        crate::descriptor::describe_row(self)
    }

    /// Adds a marker type to the action without changing its role.
    pub fn mark_action(&mut self, ty: RobotTokenType) {
        self.action.add_type(ty);
    }
}

impl ModelElement for RobotExecutableRow {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn declaration(&self) -> &RobotToken {
        &self.action
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        let mut tokens = vec![RoleToken::new(TokenRole::Name, &self.action)];
        tokens.extend(self.arguments.iter().map(|t| RoleToken::new(TokenRole::Argument, t)));
        tokens.extend(self.comment.iter().map(|t| RoleToken::new(TokenRole::Comment, t)));
        tokens
    }

    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl_comment_holder!(RobotExecutableRow);
