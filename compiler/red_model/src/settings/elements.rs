//! Elements of the settings table.

use red_ir::{RobotToken, RobotTokenType};

use crate::element::{impl_comment_holder, tagged};
use crate::{ModelElement, ModelType, RobotExecutableRow, RoleToken, TokenRole};

/// Spelling used for declarations created without source text.
pub(crate) fn declaration_token(ty: RobotTokenType) -> RobotToken {
    let text = ty.representations().first().map_or("", |repr| repr.text());
    RobotToken::create_with_type(text, ty)
}

fn role_tokens<'a>(
    declaration: &'a RobotToken,
    parts: &[(TokenRole, &'a [RobotToken])],
) -> Vec<RoleToken<'a>> {
    let mut tokens = vec![RoleToken::new(TokenRole::Declaration, declaration)];
    for (role, part) in parts {
        tokens.extend(part.iter().map(|t| RoleToken::new(*role, t)));
    }
    tokens
}

/// Which file an import pulls in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Library,
    Resource,
    Variables,
}

impl ImportKind {
    fn types(self) -> (RobotTokenType, RobotTokenType, RobotTokenType) {
        match self {
            ImportKind::Library => (
                RobotTokenType::SettingLibraryDeclaration,
                RobotTokenType::SettingLibraryName,
                RobotTokenType::SettingLibraryArgument,
            ),
            ImportKind::Resource => (
                RobotTokenType::SettingResourceDeclaration,
                RobotTokenType::SettingResourceFileName,
                RobotTokenType::SettingResourceUnwantedArgument,
            ),
            ImportKind::Variables => (
                RobotTokenType::SettingVariablesDeclaration,
                RobotTokenType::SettingVariablesFileName,
                RobotTokenType::SettingVariablesArgument,
            ),
        }
    }

    pub const fn model_type(self) -> ModelType {
        match self {
            ImportKind::Library => ModelType::LibraryImport,
            ImportKind::Resource => ModelType::ResourceImport,
            ImportKind::Variables => ModelType::VariablesImport,
        }
    }
}

/// `WITH NAME alias` of a library import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryAlias {
    declaration: RobotToken,
    name: Option<RobotToken>,
}

impl LibraryAlias {
    pub fn new(declaration: RobotToken) -> Self {
        LibraryAlias {
            declaration: tagged(declaration, RobotTokenType::SettingLibraryAlias),
            name: None,
        }
    }

    pub fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    pub fn name(&self) -> Option<&RobotToken> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, name: RobotToken) {
        self.name = Some(tagged(name, RobotTokenType::SettingLibraryAliasValue));
    }
}

/// `Library`, `Resource` or `Variables` import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    kind: ImportKind,
    declaration: RobotToken,
    path_or_name: Option<RobotToken>,
    arguments: Vec<RobotToken>,
    alias: Option<LibraryAlias>,
    comment: Vec<RobotToken>,
}

impl Import {
    pub fn new(kind: ImportKind, declaration: RobotToken) -> Self {
        Import {
            kind,
            declaration: tagged(declaration, kind.types().0),
            path_or_name: None,
            arguments: Vec::new(),
            alias: None,
            comment: Vec::new(),
        }
    }

    pub fn kind(&self) -> ImportKind {
        self.kind
    }

    pub fn path_or_name(&self) -> Option<&RobotToken> {
        self.path_or_name.as_ref()
    }

    pub fn path_or_name_mut(&mut self) -> Option<&mut RobotToken> {
        self.path_or_name.as_mut()
    }

    pub fn set_path_or_name(&mut self, token: RobotToken) {
        self.path_or_name = Some(tagged(token, self.kind.types().1));
    }

    /// Library or variable file arguments; unwanted extras for resources.
    pub fn arguments(&self) -> &[RobotToken] {
        &self.arguments
    }

    pub fn add_argument(&mut self, token: RobotToken) {
        self.arguments.push(tagged(token, self.kind.types().2));
    }

    pub fn alias(&self) -> Option<&LibraryAlias> {
        self.alias.as_ref()
    }

    pub fn alias_mut(&mut self) -> Option<&mut LibraryAlias> {
        self.alias.as_mut()
    }

    pub fn set_alias(&mut self, alias: LibraryAlias) {
        self.alias = Some(alias);
    }
}

impl ModelElement for Import {
    fn model_type(&self) -> ModelType {
        self.kind.model_type()
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        let mut tokens = role_tokens(
            &self.declaration,
            &[
                (TokenRole::Name, self.path_or_name.as_slice()),
                (TokenRole::Argument, self.arguments.as_slice()),
            ],
        );
        if let Some(alias) = &self.alias {
            tokens.push(RoleToken::new(TokenRole::Alias, &alias.declaration));
            tokens.extend(alias.name.iter().map(|t| RoleToken::new(TokenRole::AliasValue, t)));
        }
        tokens.extend(self.comment.iter().map(|t| RoleToken::new(TokenRole::Comment, t)));
        tokens
    }
}

/// One `Documentation` declaration of the suite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteDocumentation {
    declaration: RobotToken,
    text: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl SuiteDocumentation {
    pub fn new(declaration: RobotToken) -> Self {
        SuiteDocumentation {
            declaration: tagged(declaration, RobotTokenType::SettingDocumentationDeclaration),
            text: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn text(&self) -> &[RobotToken] {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut [RobotToken] {
        &mut self.text
    }

    pub fn add_text(&mut self, token: RobotToken) {
        self.text
            .push(tagged(token, RobotTokenType::SettingDocumentationText));
    }

    /// Puts a text cell at `index`; indices past the end append.
    pub fn insert_text(&mut self, index: usize, token: RobotToken) {
        let index = index.min(self.text.len());
        self.text
            .insert(index, tagged(token, RobotTokenType::SettingDocumentationText));
    }

    /// Moves text and comments of `other` to the end of this declaration.
    pub(crate) fn absorb(&mut self, other: SuiteDocumentation) {
        self.text.extend(other.text);
        self.comment.extend(other.comment);
    }
}

impl ModelElement for SuiteDocumentation {
    fn model_type(&self) -> ModelType {
        ModelType::SuiteDocumentation
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Argument, self.text.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

/// `Metadata  key  value...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    declaration: RobotToken,
    key: Option<RobotToken>,
    values: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl Metadata {
    pub fn new(declaration: RobotToken) -> Self {
        Metadata {
            declaration: tagged(declaration, RobotTokenType::SettingMetadataDeclaration),
            key: None,
            values: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn key(&self) -> Option<&RobotToken> {
        self.key.as_ref()
    }

    pub fn set_key(&mut self, key: RobotToken) {
        self.key = Some(tagged(key, RobotTokenType::SettingMetadataKey));
    }

    pub fn values(&self) -> &[RobotToken] {
        &self.values
    }

    pub fn add_value(&mut self, value: RobotToken) {
        self.values
            .push(tagged(value, RobotTokenType::SettingMetadataValue));
    }
}

impl ModelElement for Metadata {
    fn model_type(&self) -> ModelType {
        ModelType::Metadata
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Name, self.key.as_slice()),
                (TokenRole::Argument, self.values.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

/// Suite, test or task setup or teardown: a setting that calls a keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordCallSetting {
    model_type: ModelType,
    declaration: RobotToken,
    keyword_name: Option<RobotToken>,
    arguments: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl KeywordCallSetting {
    /// `model_type` must be one of the six setup/teardown kinds.
    pub fn new(model_type: ModelType, declaration: RobotToken) -> Self {
        let declaration = match keyword_call_types(model_type) {
            Some((ty, _, _)) => tagged(declaration, ty),
            None => declaration,
        };
        KeywordCallSetting {
            model_type,
            declaration,
            keyword_name: None,
            arguments: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn keyword_name(&self) -> Option<&RobotToken> {
        self.keyword_name.as_ref()
    }

    pub fn set_keyword_name(&mut self, name: RobotToken) {
        self.keyword_name = Some(match keyword_call_types(self.model_type) {
            Some((_, ty, _)) => tagged(name, ty),
            None => name,
        });
    }

    pub fn arguments(&self) -> &[RobotToken] {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut Vec<RobotToken> {
        &mut self.arguments
    }

    pub fn add_argument(&mut self, argument: RobotToken) {
        self.arguments.push(match keyword_call_types(self.model_type) {
            Some((_, _, ty)) => tagged(argument, ty),
            None => argument,
        });
    }

    /// The keyword call as a row, so loops and assignments are never
    /// recognized in it.
    pub fn as_executable_row(&self) -> RobotExecutableRow {
        let mut row = RobotExecutableRow::new(self.model_type);
        row.set_action(self.keyword_name.clone().unwrap_or_default());
        for argument in &self.arguments {
            row.add_argument(argument.clone());
        }
        row
    }
}

fn keyword_call_types(
    model_type: ModelType,
) -> Option<(RobotTokenType, RobotTokenType, RobotTokenType)> {
    use RobotTokenType as T;
    Some(match model_type {
        ModelType::SuiteSetup => (
            T::SettingSuiteSetupDeclaration,
            T::SettingSuiteSetupKeywordName,
            T::SettingSuiteSetupKeywordArgument,
        ),
        ModelType::SuiteTeardown => (
            T::SettingSuiteTeardownDeclaration,
            T::SettingSuiteTeardownKeywordName,
            T::SettingSuiteTeardownKeywordArgument,
        ),
        ModelType::TestSetup => (
            T::SettingTestSetupDeclaration,
            T::SettingTestSetupKeywordName,
            T::SettingTestSetupKeywordArgument,
        ),
        ModelType::TestTeardown => (
            T::SettingTestTeardownDeclaration,
            T::SettingTestTeardownKeywordName,
            T::SettingTestTeardownKeywordArgument,
        ),
        ModelType::TaskSetup => (
            T::SettingTaskSetupDeclaration,
            T::SettingTaskSetupKeywordName,
            T::SettingTaskSetupKeywordArgument,
        ),
        ModelType::TaskTeardown => (
            T::SettingTaskTeardownDeclaration,
            T::SettingTaskTeardownKeywordName,
            T::SettingTaskTeardownKeywordArgument,
        ),
        _ => return None,
    })
}

impl ModelElement for KeywordCallSetting {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Name, self.keyword_name.as_slice()),
                (TokenRole::Argument, self.arguments.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

/// `Force Tags` or `Default Tags`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagsSetting {
    model_type: ModelType,
    declaration: RobotToken,
    tags: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl TagsSetting {
    pub fn new(model_type: ModelType, declaration: RobotToken) -> Self {
        let ty = if model_type == ModelType::DefaultTags {
            RobotTokenType::SettingDefaultTagsDeclaration
        } else {
            RobotTokenType::SettingForceTagsDeclaration
        };
        TagsSetting {
            model_type,
            declaration: tagged(declaration, ty),
            tags: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn tags(&self) -> &[RobotToken] {
        &self.tags
    }

    pub fn add_tag(&mut self, tag: RobotToken) {
        let ty = if self.model_type == ModelType::DefaultTags {
            RobotTokenType::SettingDefaultTag
        } else {
            RobotTokenType::SettingForceTag
        };
        self.tags.push(tagged(tag, ty));
    }
}

impl ModelElement for TagsSetting {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Argument, self.tags.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

/// `Test Template` or `Task Template`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSetting {
    model_type: ModelType,
    declaration: RobotToken,
    keyword_name: Option<RobotToken>,
    unexpected: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl TemplateSetting {
    pub fn new(model_type: ModelType, declaration: RobotToken) -> Self {
        let ty = if model_type == ModelType::TaskTemplate {
            RobotTokenType::SettingTaskTemplateDeclaration
        } else {
            RobotTokenType::SettingTestTemplateDeclaration
        };
        TemplateSetting {
            model_type,
            declaration: tagged(declaration, ty),
            keyword_name: None,
            unexpected: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn keyword_name(&self) -> Option<&RobotToken> {
        self.keyword_name.as_ref()
    }

    pub fn set_keyword_name(&mut self, name: RobotToken) {
        let ty = if self.model_type == ModelType::TaskTemplate {
            RobotTokenType::SettingTaskTemplateKeywordName
        } else {
            RobotTokenType::SettingTestTemplateKeywordName
        };
        self.keyword_name = Some(tagged(name, ty));
    }

    /// Cells after the keyword name; templates take no arguments.
    pub fn unexpected_arguments(&self) -> &[RobotToken] {
        &self.unexpected
    }

    pub fn add_unexpected_argument(&mut self, token: RobotToken) {
        let ty = if self.model_type == ModelType::TaskTemplate {
            RobotTokenType::SettingTaskTemplateKeywordUnwantedArgument
        } else {
            RobotTokenType::SettingTestTemplateKeywordUnwantedArgument
        };
        self.unexpected.push(tagged(token, ty));
    }
}

impl ModelElement for TemplateSetting {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Name, self.keyword_name.as_slice()),
                (TokenRole::Argument, self.unexpected.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

/// `Test Timeout` or `Task Timeout`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeoutSetting {
    model_type: ModelType,
    declaration: RobotToken,
    timeout: Option<RobotToken>,
    message: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl TimeoutSetting {
    pub fn new(model_type: ModelType, declaration: RobotToken) -> Self {
        let ty = if model_type == ModelType::TaskTimeout {
            RobotTokenType::SettingTaskTimeoutDeclaration
        } else {
            RobotTokenType::SettingTestTimeoutDeclaration
        };
        TimeoutSetting {
            model_type,
            declaration: tagged(declaration, ty),
            timeout: None,
            message: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn timeout(&self) -> Option<&RobotToken> {
        self.timeout.as_ref()
    }

    pub fn set_timeout(&mut self, value: RobotToken) {
        let ty = if self.model_type == ModelType::TaskTimeout {
            RobotTokenType::SettingTaskTimeoutValue
        } else {
            RobotTokenType::SettingTestTimeoutValue
        };
        self.timeout = Some(tagged(value, ty));
    }

    pub fn message(&self) -> &[RobotToken] {
        &self.message
    }

    pub fn add_message_part(&mut self, token: RobotToken) {
        let ty = if self.model_type == ModelType::TaskTimeout {
            RobotTokenType::SettingTaskTimeoutMessage
        } else {
            RobotTokenType::SettingTestTimeoutMessage
        };
        self.message.push(tagged(token, ty));
    }
}

impl ModelElement for TimeoutSetting {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Name, self.timeout.as_slice()),
                (TokenRole::Argument, self.message.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

/// A settings-table line whose first cell is no known setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSetting {
    declaration: RobotToken,
    arguments: Vec<RobotToken>,
    comment: Vec<RobotToken>,
}

impl UnknownSetting {
    pub fn new(declaration: RobotToken) -> Self {
        UnknownSetting {
            declaration: tagged(declaration, RobotTokenType::SettingUnknown),
            arguments: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn arguments(&self) -> &[RobotToken] {
        &self.arguments
    }

    pub fn add_argument(&mut self, token: RobotToken) {
        self.arguments
            .push(tagged(token, RobotTokenType::SettingUnknownArgument));
    }
}

impl ModelElement for UnknownSetting {
    fn model_type(&self) -> ModelType {
        ModelType::SettingsUnknown
    }

    fn declaration(&self) -> &RobotToken {
        &self.declaration
    }

    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        role_tokens(
            &self.declaration,
            &[
                (TokenRole::Argument, self.arguments.as_slice()),
                (TokenRole::Comment, self.comment.as_slice()),
            ],
        )
    }
}

impl_comment_holder!(
    Import,
    SuiteDocumentation,
    Metadata,
    KeywordCallSetting,
    TagsSetting,
    TemplateSetting,
    TimeoutSetting,
    UnknownSetting,
);
