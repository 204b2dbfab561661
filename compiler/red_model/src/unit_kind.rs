//! The three kinds of executable units and their token vocabulary.

use red_ir::{RobotTokenType, TokenTable};

use crate::ModelType;

/// Test case, task or user keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    TestCase,
    Task,
    Keyword,
}

impl UnitKind {
    pub const fn table(self) -> TokenTable {
        match self {
            UnitKind::TestCase => TokenTable::TestCases,
            UnitKind::Task => TokenTable::Tasks,
            UnitKind::Keyword => TokenTable::Keywords,
        }
    }

    pub const fn header_type(self) -> RobotTokenType {
        match self {
            UnitKind::TestCase => RobotTokenType::TestCasesTableHeader,
            UnitKind::Task => RobotTokenType::TasksTableHeader,
            UnitKind::Keyword => RobotTokenType::KeywordsTableHeader,
        }
    }

    pub const fn unit_model_type(self) -> ModelType {
        match self {
            UnitKind::TestCase => ModelType::TestCase,
            UnitKind::Task => ModelType::Task,
            UnitKind::Keyword => ModelType::UserKeyword,
        }
    }

    pub const fn row_model_type(self) -> ModelType {
        match self {
            UnitKind::TestCase => ModelType::TestCaseExecutableRow,
            UnitKind::Task => ModelType::TaskExecutableRow,
            UnitKind::Keyword => ModelType::UserKeywordExecutableRow,
        }
    }

    /// Kind whose body rows have `row_type`.
    pub const fn of_row(row_type: ModelType) -> Option<UnitKind> {
        match row_type {
            ModelType::TestCaseExecutableRow => Some(UnitKind::TestCase),
            ModelType::TaskExecutableRow => Some(UnitKind::Task),
            ModelType::UserKeywordExecutableRow => Some(UnitKind::Keyword),
            _ => None,
        }
    }

    pub const fn name_type(self) -> RobotTokenType {
        match self {
            UnitKind::TestCase => RobotTokenType::TestCaseName,
            UnitKind::Task => RobotTokenType::TaskName,
            UnitKind::Keyword => RobotTokenType::KeywordName,
        }
    }

    pub const fn action_type(self) -> RobotTokenType {
        match self {
            UnitKind::TestCase => RobotTokenType::TestCaseActionName,
            UnitKind::Task => RobotTokenType::TaskActionName,
            UnitKind::Keyword => RobotTokenType::KeywordActionName,
        }
    }

    pub const fn argument_type(self) -> RobotTokenType {
        match self {
            UnitKind::TestCase => RobotTokenType::TestCaseActionArgument,
            UnitKind::Task => RobotTokenType::TaskActionArgument,
            UnitKind::Keyword => RobotTokenType::KeywordActionArgument,
        }
    }

    /// Local setting declared by `text` (`[Setup]`, ...), `Unknown` if none.
    pub fn find_setting_declaration(self, text: &str) -> RobotTokenType {
        match self {
            UnitKind::TestCase => {
                RobotTokenType::find_type_of_declaration_for_test_case_setting_table(text)
            }
            UnitKind::Task => RobotTokenType::find_type_of_declaration_for_task_setting_table(text),
            UnitKind::Keyword => {
                RobotTokenType::find_type_of_declaration_for_keyword_setting_table(text)
            }
        }
    }

    pub const fn unknown_setting_model_type(self) -> ModelType {
        match self {
            UnitKind::TestCase => ModelType::TestCaseSettingUnknown,
            UnitKind::Task => ModelType::TaskSettingUnknown,
            UnitKind::Keyword => ModelType::UserKeywordSettingUnknown,
        }
    }

    pub const fn documentation_model_type(self) -> ModelType {
        match self {
            UnitKind::TestCase => ModelType::TestCaseDocumentation,
            UnitKind::Task => ModelType::TaskDocumentation,
            UnitKind::Keyword => ModelType::UserKeywordDocumentation,
        }
    }
}

/// Cell types of one local setting kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SettingCells {
    pub declaration: RobotTokenType,
    pub first: RobotTokenType,
    pub rest: RobotTokenType,
}

const fn cells(
    declaration: RobotTokenType,
    first: RobotTokenType,
    rest: RobotTokenType,
) -> SettingCells {
    SettingCells { declaration, first, rest }
}

/// Cell types of local settings of kind `model_type`.
pub(crate) const fn setting_cells(model_type: ModelType) -> Option<SettingCells> {
    use RobotTokenType as T;
    let found = match model_type {
        ModelType::TestCaseDocumentation => cells(
            T::TestCaseSettingDocumentation,
            T::TestCaseSettingDocumentationText,
            T::TestCaseSettingDocumentationText,
        ),
        ModelType::TestCaseTags => cells(
            T::TestCaseSettingTagsDeclaration,
            T::TestCaseSettingTags,
            T::TestCaseSettingTags,
        ),
        ModelType::TestCaseSetup => cells(
            T::TestCaseSettingSetup,
            T::TestCaseSettingSetupKeywordName,
            T::TestCaseSettingSetupKeywordArgument,
        ),
        ModelType::TestCaseTeardown => cells(
            T::TestCaseSettingTeardown,
            T::TestCaseSettingTeardownKeywordName,
            T::TestCaseSettingTeardownKeywordArgument,
        ),
        ModelType::TestCaseTemplate => cells(
            T::TestCaseSettingTemplate,
            T::TestCaseSettingTemplateKeywordName,
            T::TestCaseSettingTemplateKeywordUnwantedArgument,
        ),
        ModelType::TestCaseTimeout => cells(
            T::TestCaseSettingTimeout,
            T::TestCaseSettingTimeoutValue,
            T::TestCaseSettingTimeoutMessage,
        ),
        ModelType::TestCaseSettingUnknown => cells(
            T::TestCaseSettingUnknownDeclaration,
            T::TestCaseSettingUnknownArguments,
            T::TestCaseSettingUnknownArguments,
        ),
        ModelType::TaskDocumentation => cells(
            T::TaskSettingDocumentation,
            T::TaskSettingDocumentationText,
            T::TaskSettingDocumentationText,
        ),
        ModelType::TaskTags => {
            cells(T::TaskSettingTagsDeclaration, T::TaskSettingTags, T::TaskSettingTags)
        }
        ModelType::TaskSettingSetup => cells(
            T::TaskSettingSetup,
            T::TaskSettingSetupKeywordName,
            T::TaskSettingSetupKeywordArgument,
        ),
        ModelType::TaskSettingTeardown => cells(
            T::TaskSettingTeardown,
            T::TaskSettingTeardownKeywordName,
            T::TaskSettingTeardownKeywordArgument,
        ),
        ModelType::TaskSettingTemplate => cells(
            T::TaskSettingTemplate,
            T::TaskSettingTemplateKeywordName,
            T::TaskSettingTemplateKeywordUnwantedArgument,
        ),
        ModelType::TaskSettingTimeout => cells(
            T::TaskSettingTimeout,
            T::TaskSettingTimeoutValue,
            T::TaskSettingTimeoutMessage,
        ),
        ModelType::TaskSettingUnknown => cells(
            T::TaskSettingUnknownDeclaration,
            T::TaskSettingUnknownArguments,
            T::TaskSettingUnknownArguments,
        ),
        ModelType::UserKeywordDocumentation => cells(
            T::KeywordSettingDocumentation,
            T::KeywordSettingDocumentationText,
            T::KeywordSettingDocumentationText,
        ),
        ModelType::UserKeywordTags => cells(
            T::KeywordSettingTags,
            T::KeywordSettingTagsTagName,
            T::KeywordSettingTagsTagName,
        ),
        ModelType::UserKeywordArguments => cells(
            T::KeywordSettingArguments,
            T::KeywordSettingArgument,
            T::KeywordSettingArgument,
        ),
        ModelType::UserKeywordReturn => cells(
            T::KeywordSettingReturn,
            T::KeywordSettingReturnValue,
            T::KeywordSettingReturnValue,
        ),
        ModelType::UserKeywordTeardown => cells(
            T::KeywordSettingTeardown,
            T::KeywordSettingTeardownKeywordName,
            T::KeywordSettingTeardownKeywordArgument,
        ),
        ModelType::UserKeywordTimeout => cells(
            T::KeywordSettingTimeout,
            T::KeywordSettingTimeoutValue,
            T::KeywordSettingTimeoutMessage,
        ),
        ModelType::UserKeywordSettingUnknown => cells(
            T::KeywordSettingUnknownDeclaration,
            T::KeywordSettingUnknownArguments,
            T::KeywordSettingUnknownArguments,
        ),
        _ => return None,
    };
    Some(found)
}

/// Local setting kind opened by a declaration of type `declaration`.
pub(crate) fn setting_model_type(declaration: RobotTokenType) -> Option<ModelType> {
    const LOCAL_SETTINGS: [ModelType; 21] = [
        ModelType::TestCaseDocumentation,
        ModelType::TestCaseTags,
        ModelType::TestCaseSetup,
        ModelType::TestCaseTeardown,
        ModelType::TestCaseTemplate,
        ModelType::TestCaseTimeout,
        ModelType::TestCaseSettingUnknown,
        ModelType::TaskDocumentation,
        ModelType::TaskTags,
        ModelType::TaskSettingSetup,
        ModelType::TaskSettingTeardown,
        ModelType::TaskSettingTemplate,
        ModelType::TaskSettingTimeout,
        ModelType::TaskSettingUnknown,
        ModelType::UserKeywordDocumentation,
        ModelType::UserKeywordTags,
        ModelType::UserKeywordArguments,
        ModelType::UserKeywordReturn,
        ModelType::UserKeywordTeardown,
        ModelType::UserKeywordTimeout,
        ModelType::UserKeywordSettingUnknown,
    ];
    LOCAL_SETTINGS
        .into_iter()
        .find(|ty| setting_cells(*ty).is_some_and(|cells| cells.declaration == declaration))
}
