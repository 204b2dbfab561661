//! The variables table.

use red_diagnostic::{BuildMessage, VariablesProblem};
use red_ir::{RobotToken, RobotTokenType};

use crate::analysis::{extract_from_brackets, has_unclosed_variable, split_dictionary_item};
use crate::element::{impl_comment_holder, tagged};
use crate::{ModelElement, ModelType, RoleToken, TableHeader, TokenRole};

/// Container kind of a variable, from its sigil.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// `${name}`
    Scalar,
    /// `@{name}`
    List,
    /// `&{name}`
    Dictionary,
    /// Anything else in the first column.
    Invalid,
}

impl VariableType {
    /// Kind declared by `text`, ignoring a trailing `=`.
    pub fn of_declaration(text: &str) -> Self {
        let name = declared_variable(text);
        if extract_from_brackets(name).is_empty() {
            return VariableType::Invalid;
        }
        match name.as_bytes()[0] {
            b'$' => VariableType::Scalar,
            b'@' => VariableType::List,
            b'&' => VariableType::Dictionary,
            _ => VariableType::Invalid,
        }
    }

    pub const fn model_type(self) -> ModelType {
        match self {
            VariableType::Scalar => ModelType::ScalarVariable,
            VariableType::List => ModelType::ListVariable,
            VariableType::Dictionary => ModelType::DictionaryVariable,
            VariableType::Invalid => ModelType::UnknownVariable,
        }
    }

    const fn declaration_type(self) -> RobotTokenType {
        match self {
            VariableType::Scalar => RobotTokenType::VariablesScalarDeclaration,
            VariableType::List => RobotTokenType::VariablesListDeclaration,
            VariableType::Dictionary => RobotTokenType::VariablesDictionaryDeclaration,
            VariableType::Invalid => RobotTokenType::VariablesWrongDefined,
        }
    }

    const fn sigil(self) -> char {
        match self {
            VariableType::Scalar | VariableType::Invalid => '$',
            VariableType::List => '@',
            VariableType::Dictionary => '&',
        }
    }
}

fn declared_variable(text: &str) -> &str {
    let text = text.trim_end();
    text.strip_suffix('=').map_or(text, str::trim_end)
}

/// `key=value` cell of a dictionary variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryItem<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub token: &'a RobotToken,
}

/// One variable declaration with its values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    kind: VariableType,
    declaration: RobotToken,
    values: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl Variable {
    pub fn new(declaration: RobotToken) -> Self {
        let kind = VariableType::of_declaration(declaration.text());
        Variable {
            kind,
            declaration: tagged(declaration, kind.declaration_type()),
            values: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn kind(&self) -> VariableType {
        self.kind
    }

    /// Name between the brackets, `""` for invalid declarations.
    pub fn name(&self) -> &str {
        extract_from_brackets(declared_variable(self.declaration.text()))
    }

    pub fn values(&self) -> &[RobotToken] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<RobotToken> {
        &mut self.values
    }

    pub fn add_value(&mut self, value: RobotToken) {
        self.values
            .push(tagged(value, RobotTokenType::VariablesVariableValue));
    }

    /// Items of a dictionary variable; cells without `=` are skipped.
    pub fn dictionary_items(&self) -> Vec<DictionaryItem<'_>> {
        self.values
            .iter()
            .filter_map(|token| {
                split_dictionary_item(token.text()).map(|(key, value)| DictionaryItem {
                    key,
                    value,
                    token,
                })
            })
            .collect()
    }

    /// Problems of the declaration noticed while building the model.
    pub fn build_messages(&self) -> Vec<BuildMessage> {
        let mut messages = Vec::new();
        let text = self.declaration.text();
        if has_unclosed_variable(text) {
            messages.push(BuildMessage::at_token(
                VariablesProblem::UnclosedVariable {
                    text: text.to_string(),
                },
                &self.declaration,
            ));
        } else if self.kind == VariableType::Invalid {
            messages.push(BuildMessage::at_token(
                VariablesProblem::InvalidDeclaration {
                    name: text.to_string(),
                },
                &self.declaration,
            ));
        }
        if self.kind == VariableType::Dictionary {
            for value in &self.values {
                if split_dictionary_item(value.text()).is_none() {
                    messages.push(BuildMessage::at_token(
                        VariablesProblem::DictionaryItemWithoutSeparator {
                            item: value.text().to_string(),
                        },
                        value,
                    ));
                }
            }
        }
        messages
    }
}

impl ModelElement for Variable {
    fn model_type(&self) -> ModelType {
        self.kind.model_type()
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        let mut tokens = vec![RoleToken::new(TokenRole::Declaration, &self.declaration)];
        tokens.extend(self.values.iter().map(|t| RoleToken::new(TokenRole::Argument, t)));
        tokens.extend(self.comment.iter().map(|t| RoleToken::new(TokenRole::Comment, t)));
        tokens
    }
}

impl_comment_holder!(Variable);

/// Variables table of one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableTable {
    headers: Vec<TableHeader>,
    variables: Vec<Variable>,
}

impl VariableTable {
    pub fn is_present(&self) -> bool {
        !self.headers.is_empty()
    }

    pub fn headers(&self) -> &[TableHeader] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Vec<TableHeader> {
        &mut self.headers
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Vec<Variable> {
        &mut self.variables
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    /// Appends `${name}`, `@{name}` or `&{name}`.
    pub fn new_variable(&mut self, kind: VariableType, name: &str) -> &mut Variable {
        let declaration = RobotToken::create(format!("{}{{{name}}}", kind.sigil()));
        self.variables.push(Variable::new(declaration));
        let last = self.variables.len() - 1;
        &mut self.variables[last]
    }
}
