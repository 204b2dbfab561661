//! Semantic token types.
//!
//! A [`RobotToken`](crate::RobotToken) carries an ordered list of these tags.
//! Each type knows which table it belongs to, whether it opens a setting, and
//! the textual representations that select it together with the Robot
//! Framework versions in which each representation is valid.

use crate::RobotVersion;

/// Table a token type belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenTable {
    /// Usable in any table (comments, variables, loops).
    NotStrictlyBelongs,
    Settings,
    Variables,
    TestCases,
    Tasks,
    Keywords,
    Comments,
}

/// One spelling of a token type plus its version window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Representation {
    text: &'static str,
    available_from: Option<RobotVersion>,
    deprecated_from: Option<RobotVersion>,
    removed_from: Option<RobotVersion>,
}

impl Representation {
    pub const fn new(text: &'static str) -> Self {
        Representation {
            text,
            available_from: None,
            deprecated_from: None,
            removed_from: None,
        }
    }

    pub const fn available_from(mut self, version: RobotVersion) -> Self {
        self.available_from = Some(version);
        self
    }

    pub const fn deprecated_from(mut self, version: RobotVersion) -> Self {
        self.deprecated_from = Some(version);
        self
    }

    pub const fn removed_from(mut self, version: RobotVersion) -> Self {
        self.removed_from = Some(version);
        self
    }

    pub const fn text(&self) -> &'static str {
        self.text
    }

    pub const fn available_since(&self) -> Option<RobotVersion> {
        self.available_from
    }

    pub const fn deprecated_since(&self) -> Option<RobotVersion> {
        self.deprecated_from
    }

    pub const fn removed_since(&self) -> Option<RobotVersion> {
        self.removed_from
    }

    /// Whether this spelling is accepted by `version` at all.
    pub fn is_available_in(&self, version: RobotVersion) -> bool {
        self.available_from.map_or(true, |from| version >= from)
            && self.removed_from.map_or(true, |removed| version < removed)
    }

    /// Whether this spelling is accepted by `version` but discouraged.
    pub fn is_deprecated_in(&self, version: RobotVersion) -> bool {
        self.is_available_in(version) && self.deprecated_from.is_some_and(|from| version >= from)
    }

    fn is_plain(&self) -> bool {
        self.deprecated_from.is_none() && self.removed_from.is_none()
    }
}

const fn r(text: &'static str) -> Representation {
    Representation::new(text)
}

macro_rules! define_token_types {
    (@decl) => { false };
    (@decl decl) => { true };
    ($(
        $(#[doc = $doc:literal])*
        $variant:ident => $table:ident $($decl:ident)? [$($repr:expr),* $(,)?];
    )*) => {
        /// Semantic tag attached to a [`RobotToken`](crate::RobotToken).
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RobotTokenType {
            $(
                $(#[doc = $doc])*
                $variant,
            )*
        }

        impl RobotTokenType {
            /// Every token type, in declaration order.
            pub const ALL: &'static [RobotTokenType] = &[$(RobotTokenType::$variant,)*];

            /// Table this type belongs to.
            pub const fn table(self) -> TokenTable {
                match self {
                    $(RobotTokenType::$variant => TokenTable::$table,)*
                }
            }

            /// Whether this type opens a setting (`Library`, `[Tags]`, ...).
            pub const fn is_setting_declaration(self) -> bool {
                match self {
                    $(RobotTokenType::$variant => define_token_types!(@decl $($decl)?),)*
                }
            }

            /// All spellings of this type, preferred spelling first.
            pub const fn representations(self) -> &'static [Representation] {
                match self {
                    $(RobotTokenType::$variant => {
                        const REPRESENTATIONS: &[Representation] = &[$($repr),*];
                        REPRESENTATIONS
                    })*
                }
            }
        }
    };
}

const V2_9: RobotVersion = RobotVersion::V2_9;
const V3_0: RobotVersion = RobotVersion::V3_0;
const V3_1: RobotVersion = RobotVersion::V3_1;

define_token_types! {
    Unknown => NotStrictlyBelongs [];
    VariableUsage => NotStrictlyBelongs [];
    Assignment => NotStrictlyBelongs [r("=")];
    PrettyAlignSpace => NotStrictlyBelongs [r(" ")];
    EmptyCell => NotStrictlyBelongs [r(" \\ ")];
    /// Header of a table Robot Framework does not know.
    UserOwnTableHeader => NotStrictlyBelongs [];
    SettingsTableHeader => Settings [
        r("Settings"),
        r("Setting"),
        r("Metadata").deprecated_from(V3_0).removed_from(V3_1),
    ];
    VariablesTableHeader => Variables [r("Variables"), r("Variable")];
    CommentsTableHeader => Comments [r("Comments"), r("Comment")];
    TestCasesTableHeader => TestCases [r("Test Cases"), r("Test Case")];
    TasksTableHeader => Tasks [r("Tasks").available_from(V3_1), r("Task").available_from(V3_1)];
    KeywordsTableHeader => Keywords [
        r("Keywords"),
        r("Keyword"),
        r("User Keywords"),
        r("User Keyword").deprecated_from(V3_0),
    ];
    /// Extra cell after a table header (`*** Test Cases ***  Value`).
    TableHeaderColumn => NotStrictlyBelongs [];
    Comment => NotStrictlyBelongs [r("#")];
    /// The `...` continuation marker.
    PreviousLineContinue => NotStrictlyBelongs [r("...")];
    CommentsTableInnerToken => Comments [];

    SettingNameDuplication => Settings decl [];
    SettingLibraryDeclaration => Settings decl [r("Library"), r("Library:")];
    SettingUnknown => Settings decl [];
    SettingUnknownArgument => Settings [];
    SettingLibraryName => Settings [];
    SettingLibraryArgument => Settings [];
    SettingLibraryAlias => Settings [r("WITH NAME")];
    SettingLibraryAliasValue => Settings [];
    SettingVariablesDeclaration => Settings decl [r("Variables"), r("Variables:")];
    SettingVariablesFileName => Settings [];
    SettingVariablesArgument => Settings [];
    SettingResourceDeclaration => Settings decl [r("Resource"), r("Resource:")];
    SettingResourceFileName => Settings [];
    SettingResourceUnwantedArgument => Settings [];
    SettingDocumentationDeclaration => Settings decl [
        r("Documentation"),
        r("Documentation:"),
        r("Document").deprecated_from(V3_0).removed_from(V3_1),
        r("Document:").deprecated_from(V3_0).removed_from(V3_1),
    ];
    SettingDocumentationText => Settings [];
    SettingMetadataDeclaration => Settings decl [r("Metadata"), r("Metadata:")];
    SettingMetadataKey => Settings [];
    SettingMetadataValue => Settings [];
    SettingSuiteSetupDeclaration => Settings decl [
        r("Suite Setup"),
        r("Suite Setup:"),
        r("Suite Precondition").deprecated_from(V3_0).removed_from(V3_1),
        r("Suite Precondition:").deprecated_from(V3_0).removed_from(V3_1),
    ];
    SettingSuiteSetupKeywordName => Settings [];
    SettingSuiteSetupKeywordArgument => Settings [];
    SettingSuiteTeardownDeclaration => Settings decl [
        r("Suite Teardown"),
        r("Suite Teardown:"),
        r("Suite Postcondition").deprecated_from(V3_0).removed_from(V3_1),
        r("Suite Postcondition:").deprecated_from(V3_0).removed_from(V3_1),
    ];
    SettingSuiteTeardownKeywordName => Settings [];
    SettingSuiteTeardownKeywordArgument => Settings [];
    SettingForceTagsDeclaration => Settings decl [r("Force Tags"), r("Force Tags:")];
    SettingForceTag => Settings [];
    SettingDefaultTagsDeclaration => Settings decl [r("Default Tags"), r("Default Tags:")];
    SettingDefaultTag => Settings [];
    SettingTestSetupDeclaration => Settings decl [
        r("Test Setup"),
        r("Test Setup:"),
        r("Test Precondition").deprecated_from(V3_0).removed_from(V3_1),
        r("Test Precondition:").deprecated_from(V3_0).removed_from(V3_1),
    ];
    SettingTestSetupKeywordName => Settings [];
    SettingTestSetupKeywordArgument => Settings [];
    SettingTestTeardownDeclaration => Settings decl [
        r("Test Teardown"),
        r("Test Teardown:"),
        r("Test Postcondition").deprecated_from(V3_0).removed_from(V3_1),
        r("Test Postcondition:").deprecated_from(V3_0).removed_from(V3_1),
    ];
    SettingTestTeardownKeywordName => Settings [];
    SettingTestTeardownKeywordArgument => Settings [];
    SettingTestTemplateDeclaration => Settings decl [r("Test Template"), r("Test Template:")];
    SettingTestTemplateKeywordName => Settings [];
    SettingTestTemplateKeywordUnwantedArgument => Settings [];
    SettingTestTimeoutDeclaration => Settings decl [r("Test Timeout"), r("Test Timeout:")];
    SettingTestTimeoutValue => Settings [];
    SettingTestTimeoutMessage => Settings [];
    SettingTaskSetupDeclaration => Settings decl [
        r("Task Setup").available_from(V3_1),
        r("Task Setup:").available_from(V3_1),
    ];
    SettingTaskSetupKeywordName => Settings [];
    SettingTaskSetupKeywordArgument => Settings [];
    SettingTaskTeardownDeclaration => Settings decl [
        r("Task Teardown").available_from(V3_1),
        r("Task Teardown:").available_from(V3_1),
    ];
    SettingTaskTeardownKeywordName => Settings [];
    SettingTaskTeardownKeywordArgument => Settings [];
    SettingTaskTemplateDeclaration => Settings decl [
        r("Task Template").available_from(V3_1),
        r("Task Template:").available_from(V3_1),
    ];
    SettingTaskTemplateKeywordName => Settings [];
    SettingTaskTemplateKeywordUnwantedArgument => Settings [];
    SettingTaskTimeoutDeclaration => Settings decl [
        r("Task Timeout").available_from(V3_1),
        r("Task Timeout:").available_from(V3_1),
    ];
    SettingTaskTimeoutValue => Settings [];
    SettingTaskTimeoutMessage => Settings [];

    VariablesWrongDefined => Variables decl [];
    VariablesScalarDeclaration => Variables decl [];
    VariablesListDeclaration => Variables decl [];
    VariablesDictionaryDeclaration => Variables decl [];
    VariablesEnvironmentDeclaration => Variables decl [];
    VariablesUnknownDeclaration => Variables decl [];
    VariablesVariableValue => Variables [];
    VariablesDictionaryKey => Variables [];
    VariablesDictionaryValue => Variables [];

    TestCaseSettingNameDuplication => TestCases decl [];
    TestCaseSettingUnknownDeclaration => TestCases decl [];
    TestCaseSettingUnknownArguments => TestCases [];
    TestCaseSettingDocumentation => TestCases decl [
        r("[Documentation]"),
        r("[Document]").deprecated_from(V3_0).removed_from(V3_1),
    ];
    TestCaseSettingDocumentationText => TestCases [];
    TestCaseSettingTagsDeclaration => TestCases decl [r("[Tags]")];
    TestCaseSettingTags => TestCases [];
    TestCaseSettingSetup => TestCases decl [
        r("[Setup]"),
        r("[Precondition]").deprecated_from(V3_0).removed_from(V3_1),
    ];
    TestCaseSettingSetupKeywordName => TestCases [];
    TestCaseSettingSetupKeywordArgument => TestCases [];
    TestCaseSettingTeardown => TestCases decl [
        r("[Teardown]"),
        r("[Postcondition]").deprecated_from(V3_0).removed_from(V3_1),
    ];
    TestCaseSettingTeardownKeywordName => TestCases [];
    TestCaseSettingTeardownKeywordArgument => TestCases [];
    TestCaseSettingTemplate => TestCases decl [r("[Template]")];
    TestCaseSettingTemplateKeywordName => TestCases [];
    TestCaseSettingTemplateKeywordUnwantedArgument => TestCases [];
    TestCaseSettingTimeout => TestCases decl [r("[Timeout]")];
    TestCaseSettingTimeoutValue => TestCases [];
    TestCaseSettingTimeoutMessage => TestCases [];
    TestCaseName => TestCases [];
    TestCaseActionName => TestCases [];
    TestCaseActionArgument => TestCases [];
    TestCaseTemplateArgument => TestCases [];

    TaskSettingUnknownDeclaration => Tasks decl [];
    TaskSettingUnknownArguments => Tasks [];
    TaskSettingDocumentation => Tasks decl [r("[Documentation]")];
    TaskSettingDocumentationText => Tasks [];
    TaskSettingTagsDeclaration => Tasks decl [r("[Tags]")];
    TaskSettingTags => Tasks [];
    TaskSettingSetup => Tasks decl [r("[Setup]")];
    TaskSettingSetupKeywordName => Tasks [];
    TaskSettingSetupKeywordArgument => Tasks [];
    TaskSettingTeardown => Tasks decl [r("[Teardown]")];
    TaskSettingTeardownKeywordName => Tasks [];
    TaskSettingTeardownKeywordArgument => Tasks [];
    TaskSettingTemplate => Tasks decl [r("[Template]")];
    TaskSettingTemplateKeywordName => Tasks [];
    TaskSettingTemplateKeywordUnwantedArgument => Tasks [];
    TaskSettingTimeout => Tasks decl [r("[Timeout]")];
    TaskSettingTimeoutValue => Tasks [];
    TaskSettingTimeoutMessage => Tasks [];
    TaskName => Tasks [];
    TaskActionName => Tasks [];
    TaskActionArgument => Tasks [];
    TaskTemplateArgument => Tasks [];

    KeywordSettingNameDuplication => Keywords decl [];
    KeywordSettingUnknownDeclaration => Keywords decl [];
    KeywordSettingUnknownArguments => Keywords [];
    KeywordSettingDocumentation => Keywords decl [
        r("[Documentation]"),
        r("[Document]").deprecated_from(V3_0).removed_from(V3_1),
    ];
    KeywordSettingDocumentationText => Keywords [];
    KeywordSettingTags => Keywords decl [r("[Tags]")];
    KeywordSettingTagsTagName => Keywords [];
    KeywordSettingArguments => Keywords decl [r("[Arguments]")];
    KeywordSettingArgument => Keywords [];
    KeywordSettingReturn => Keywords decl [r("[Return]")];
    KeywordSettingReturnValue => Keywords [];
    KeywordSettingTeardown => Keywords decl [
        r("[Teardown]"),
        r("[Postcondition]").deprecated_from(V3_0).removed_from(V3_1),
    ];
    KeywordSettingTeardownKeywordName => Keywords [];
    KeywordSettingTeardownKeywordArgument => Keywords [];
    KeywordSettingTimeout => Keywords decl [r("[Timeout]")];
    KeywordSettingTimeoutValue => Keywords [];
    KeywordSettingTimeoutMessage => Keywords [];
    KeywordName => Keywords [];
    KeywordActionName => Keywords [];
    KeywordActionArgument => Keywords [];

    ForToken => NotStrictlyBelongs [r(": FOR"), r(":FOR"), r("FOR").available_from(V3_1)];
    InToken => NotStrictlyBelongs [
        r("IN"),
        r("IN RANGE"),
        r("IN ENUMERATE").available_from(V2_9),
        r("IN ZIP").available_from(V2_9),
    ];
    /// The `\` marking an old-style FOR body row.
    ForContinueToken => NotStrictlyBelongs [r("\\")];
    /// Added by fixers to rows that belong to a FOR body without a `\`.
    ForContinueArtificialToken => NotStrictlyBelongs [];
    ForEndToken => NotStrictlyBelongs [r("END").available_from(V3_1)];
    ForWithEnd => NotStrictlyBelongs [];
    ForWithEndContinuation => NotStrictlyBelongs [];
}

impl RobotTokenType {
    /// Whether this type tags a table header cell.
    pub fn is_table_header(self) -> bool {
        matches!(
            self,
            RobotTokenType::SettingsTableHeader
                | RobotTokenType::VariablesTableHeader
                | RobotTokenType::TestCasesTableHeader
                | RobotTokenType::TasksTableHeader
                | RobotTokenType::KeywordsTableHeader
                | RobotTokenType::CommentsTableHeader
                | RobotTokenType::UserOwnTableHeader
        )
    }

    /// All types belonging to `table`, in declaration order.
    pub fn types_for_table(table: TokenTable) -> impl Iterator<Item = RobotTokenType> {
        RobotTokenType::ALL
            .iter()
            .copied()
            .filter(move |ty| ty.table() == table)
    }

    /// Finds the spelling matching `text` ignoring case.
    pub fn find_representation(self, text: &str) -> Option<&'static Representation> {
        self.representations()
            .iter()
            .find(|repr| repr.text().eq_ignore_ascii_case(text))
    }

    /// The spelling a writer should emit for `version`.
    ///
    /// Prefers a spelling that is neither deprecated nor removed and is
    /// available in `version`; otherwise falls back to the first spelling.
    pub fn most_correct_representation(
        self,
        version: RobotVersion,
    ) -> Option<&'static Representation> {
        let representations = self.representations();
        representations
            .iter()
            .find(|repr| repr.is_plain() && repr.is_available_in(version))
            .or_else(|| {
                representations
                    .iter()
                    .find(|repr| repr.is_available_in(version) && !repr.is_deprecated_in(version))
            })
            .or_else(|| representations.first())
    }

    pub fn find_type_of_declaration_for_setting_table(text: &str) -> RobotTokenType {
        find_type_of_declaration(TokenTable::Settings, text)
    }

    pub fn find_type_of_declaration_for_test_case_setting_table(text: &str) -> RobotTokenType {
        find_type_of_declaration(TokenTable::TestCases, text)
    }

    pub fn find_type_of_declaration_for_task_setting_table(text: &str) -> RobotTokenType {
        find_type_of_declaration(TokenTable::Tasks, text)
    }

    pub fn find_type_of_declaration_for_keyword_setting_table(text: &str) -> RobotTokenType {
        find_type_of_declaration(TokenTable::Keywords, text)
    }

    /// Maps a header name such as `Test Cases` (without asterisks) to its type.
    pub fn find_type_of_declaration_for_table_header(name: &str) -> RobotTokenType {
        const HEADERS: [RobotTokenType; 6] = [
            RobotTokenType::SettingsTableHeader,
            RobotTokenType::VariablesTableHeader,
            RobotTokenType::KeywordsTableHeader,
            RobotTokenType::TestCasesTableHeader,
            RobotTokenType::TasksTableHeader,
            RobotTokenType::CommentsTableHeader,
        ];
        let name = name.trim();
        HEADERS
            .into_iter()
            .find(|ty| ty.find_representation(name).is_some())
            .unwrap_or(RobotTokenType::Unknown)
    }
}

fn find_type_of_declaration(table: TokenTable, text: &str) -> RobotTokenType {
    let text = text.trim();
    RobotTokenType::types_for_table(table)
        .filter(|ty| ty.is_setting_declaration())
        .find(|ty| ty.find_representation(text).is_some())
        .unwrap_or(RobotTokenType::Unknown)
}

#[cfg(test)]
mod tests;
