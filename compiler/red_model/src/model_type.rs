//! Model element kinds and token roles.

/// Kind of a model element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelType {
    TableHeader,

    LibraryImport,
    ResourceImport,
    VariablesImport,
    SuiteDocumentation,
    Metadata,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TestTeardown,
    TaskSetup,
    TaskTeardown,
    ForceTags,
    DefaultTags,
    TestTemplate,
    TaskTemplate,
    TestTimeout,
    TaskTimeout,
    SettingsUnknown,

    ScalarVariable,
    ListVariable,
    DictionaryVariable,
    UnknownVariable,

    TestCase,
    TestCaseDocumentation,
    TestCaseTags,
    TestCaseSetup,
    TestCaseTeardown,
    TestCaseTemplate,
    TestCaseTimeout,
    TestCaseSettingUnknown,
    TestCaseExecutableRow,

    Task,
    TaskDocumentation,
    TaskTags,
    TaskSettingSetup,
    TaskSettingTeardown,
    TaskSettingTemplate,
    TaskSettingTimeout,
    TaskSettingUnknown,
    TaskExecutableRow,

    UserKeyword,
    UserKeywordDocumentation,
    UserKeywordTags,
    UserKeywordArguments,
    UserKeywordReturn,
    UserKeywordTeardown,
    UserKeywordTimeout,
    UserKeywordSettingUnknown,
    UserKeywordExecutableRow,
}

impl ModelType {
    /// Whether elements of this kind are steps of a test, task or keyword.
    pub const fn is_executable_row(self) -> bool {
        matches!(
            self,
            ModelType::TestCaseExecutableRow
                | ModelType::TaskExecutableRow
                | ModelType::UserKeywordExecutableRow
        )
    }

    /// Whether elements of this kind call a keyword from the settings table.
    pub const fn is_keyword_call_setting(self) -> bool {
        matches!(
            self,
            ModelType::SuiteSetup
                | ModelType::SuiteTeardown
                | ModelType::TestSetup
                | ModelType::TestTeardown
                | ModelType::TaskSetup
                | ModelType::TaskTeardown
        )
    }
}

/// What a token means inside its element.
///
/// Writers order tokens of new or edited elements by role.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// The setting name, header text or unit name.
    Declaration,
    /// The main value: keyword name, library path, variable name, tag.
    Name,
    Argument,
    /// `WITH NAME`.
    Alias,
    /// Name given after `WITH NAME`.
    AliasValue,
    Comment,
}

/// A token borrowed from an element together with its role.
#[derive(Copy, Clone, Debug)]
pub struct RoleToken<'a> {
    pub role: TokenRole,
    pub token: &'a red_ir::RobotToken,
}

impl<'a> RoleToken<'a> {
    pub fn new(role: TokenRole, token: &'a red_ir::RobotToken) -> Self {
        RoleToken { role, token }
    }
}
