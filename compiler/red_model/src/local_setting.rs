//! Bracketed settings inside test cases, tasks and keywords.
//!
//! All local settings share one shape: a declaration cell followed by value
//! cells and an optional trailing comment. Cell types are a function of the
//! setting kind and the cell index, so every edit retypes the whole setting:
//! the comment region starts at the first value cell beginning with `#`.

use red_ir::{RobotToken, RobotTokenType};
use tracing::trace;

use crate::element::{commented, retyped};
use crate::unit_kind::{setting_cells, setting_model_type};
use crate::{
    CommentHolder, ModelElement, ModelError, ModelType, RoleToken, RowDescriptor, TokenRole,
    UnitKind,
};

/// `[Tags]`, `[Setup]`, `[Arguments]`, ... inside an executable unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalSetting {
    kind: UnitKind,
    model_type: ModelType,
    /// Declaration first, then values, then comment cells.
    tokens: Vec<RobotToken>,
}

impl LocalSetting {
    /// Setting opened by `declaration` inside a unit of `kind`.
    ///
    /// Declarations unknown to `kind` make an unknown setting.
    pub fn new(kind: UnitKind, declaration: RobotToken) -> Self {
        let model_type = setting_model_type_of(kind, declaration.text());
        let mut setting = LocalSetting {
            kind,
            model_type,
            tokens: vec![declaration],
        };
        setting.fix_types();
        setting
    }

    /// Empty setting of `model_type` declared with its preferred spelling.
    pub fn create(kind: UnitKind, model_type: ModelType) -> Self {
        let text = setting_cells(model_type)
            .and_then(|cells| cells.declaration.representations().first())
            .map_or("[]", |repr| repr.text());
        let mut setting = LocalSetting {
            kind,
            model_type,
            tokens: vec![RobotToken::create(text)],
        };
        setting.fix_types();
        setting
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Every cell, declaration first.
    pub fn tokens(&self) -> &[RobotToken] {
        &self.tokens
    }

    pub fn token_mut(&mut self, index: usize) -> Option<&mut RobotToken> {
        self.tokens.get_mut(index)
    }

    /// Value cells between the declaration and the comment.
    pub fn values(&self) -> &[RobotToken] {
        &self.tokens[1..self.comment_start()]
    }

    /// First value: keyword name of `[Setup]`/`[Template]`, timeout value, ...
    pub fn value(&self) -> Option<&RobotToken> {
        self.values().first()
    }

    /// Values after the first one.
    pub fn arguments(&self) -> &[RobotToken] {
        self.values().get(1..).unwrap_or_default()
    }

    /// Keyword called by `[Setup]`, `[Teardown]` or `[Template]`.
    pub fn keyword_name(&self) -> Option<&RobotToken> {
        self.calls_keyword().then(|| self.value()).flatten()
    }

    /// Whether the first value names a keyword.
    pub fn calls_keyword(&self) -> bool {
        matches!(
            self.model_type,
            ModelType::TestCaseSetup
                | ModelType::TestCaseTeardown
                | ModelType::TestCaseTemplate
                | ModelType::TaskSettingSetup
                | ModelType::TaskSettingTeardown
                | ModelType::TaskSettingTemplate
                | ModelType::UserKeywordTeardown
        )
    }

    pub fn is_documentation(&self) -> bool {
        self.model_type == self.kind.documentation_model_type()
    }

    /// Appends a value cell; text starting with `#` opens the comment.
    pub fn add_token(&mut self, token: RobotToken) {
        self.tokens.push(token);
        self.fix_types();
    }

    /// Inserts an empty cell at `index`.
    ///
    /// Indices past the end are ignored.
    pub fn create_token(&mut self, index: usize) -> Result<(), ModelError> {
        if index == 0 {
            return Err(self.locked());
        }
        if index < self.tokens.len() {
            self.tokens.insert(index, RobotToken::create(""));
            self.fix_types();
        }
        Ok(())
    }

    /// Removes the cell at `index`.
    ///
    /// Indices past the end are ignored.
    pub fn delete_token(&mut self, index: usize) -> Result<(), ModelError> {
        if index == 0 {
            return Err(self.locked());
        }
        if index < self.tokens.len() {
            self.tokens.remove(index);
            self.fix_types();
        }
        Ok(())
    }

    /// Sets the text of the cell at `index`.
    ///
    /// Index 0 renames the setting and may change its kind. Indices past the
    /// end are reached by filling the gap with `\` cells.
    pub fn update_token(&mut self, index: usize, text: &str) -> Result<(), ModelError> {
        if index == 0 {
            let trimmed = text.trim();
            if !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
                return Err(ModelError::NotASettingDeclaration {
                    text: text.to_string(),
                });
            }
            self.model_type = setting_model_type_of(self.kind, text);
            self.tokens[0].set_text(text);
            trace!(setting = text, model_type = ?self.model_type, "local setting renamed");
        } else if let Some(token) = self.tokens.get_mut(index) {
            token.set_text(text);
        } else {
            while self.tokens.len() < index {
                self.tokens.push(RobotToken::create("\\"));
            }
            self.tokens.push(RobotToken::create(text));
        }
        self.fix_types();
        Ok(())
    }

    /// Describes this setting as a row, for variable and keyword lookups.
    pub fn build_line_description(&self) -> RowDescriptor {
        crate::descriptor::describe_setting(self)
    }

    fn locked(&self) -> ModelError {
        ModelError::DeclarationCellLocked {
            setting: self.tokens[0].text().to_string(),
        }
    }

    fn comment_start(&self) -> usize {
        self.tokens
            .iter()
            .skip(1)
            .position(|t| t.text().starts_with('#'))
            .map_or(self.tokens.len(), |i| i + 1)
    }

    fn fix_types(&mut self) {
        let Some(cells) = setting_cells(self.model_type) else {
            return;
        };
        let comment_start = self.comment_start();
        for (index, token) in self.tokens.iter_mut().enumerate() {
            let ty = match index {
                0 => cells.declaration,
                _ if index >= comment_start => RobotTokenType::Comment,
                1 => cells.first,
                _ => cells.rest,
            };
            retyped(token, ty);
        }
    }
}

fn setting_model_type_of(kind: UnitKind, text: &str) -> ModelType {
    setting_model_type(kind.find_setting_declaration(text))
        .unwrap_or_else(|| kind.unknown_setting_model_type())
}

impl ModelElement for LocalSetting {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn declaration(&self) -> &RobotToken {
        &self.tokens[0]
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        let comment_start = self.comment_start();
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let role = match index {
                    0 => TokenRole::Declaration,
                    _ if index >= comment_start => TokenRole::Comment,
                    1 => TokenRole::Name,
                    _ => TokenRole::Argument,
                };
                RoleToken::new(role, token)
            })
            .collect()
    }
}

impl CommentHolder for LocalSetting {
    fn comment(&self) -> &[RobotToken] {
        &self.tokens[self.comment_start()..]
    }

    fn add_comment_part(&mut self, token: RobotToken) {
        self.tokens.push(commented(token));
        self.fix_types();
    }
}

#[cfg(test)]
mod tests;
