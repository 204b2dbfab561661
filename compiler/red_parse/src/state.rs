//! Parsing states and the state stack.
//!
//! The bottom of the stack names the table being read. Every mapper that
//! accepts a cell pushes the state describing what it just read, so the top
//! is always the most specific open construct. At the start of each line the
//! stack drops back to its table state; a `...` line brings the previous
//! line's stack back instead.

use red_ir::TokenTable;
use red_model::UnitKind;

use crate::ParseError;

/// Where in the grammar the parser is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParsingState {
    /// Nothing read yet.
    Unknown,
    /// Content that belongs to no construct.
    Trash,

    SettingTableHeader,
    SettingTableInside,
    VariableTableHeader,
    VariableTableInside,
    TestCaseTableHeader,
    TestCaseTableInside,
    TaskTableHeader,
    TaskTableInside,
    KeywordTableHeader,
    KeywordTableInside,
    /// `*** Comments ***` and tables Robot Framework does not know.
    CommentTableHeader,
    CommentTableInside,
    TableHeaderColumn,
    /// After a `#` cell; the rest of the line is comment.
    Comment,

    SettingLibraryImport,
    SettingLibraryNameOrPath,
    SettingLibraryArguments,
    SettingLibraryImportAlias,
    SettingLibraryImportAliasValue,
    SettingVariableImport,
    SettingVariableImportPath,
    SettingVariableArguments,
    SettingResourceImport,
    SettingResourceImportPath,
    SettingResourceUnwantedArguments,
    SettingDocumentation,
    SettingMetadata,
    SettingMetadataKey,
    SettingMetadataValue,
    SettingSuiteSetup,
    SettingSuiteSetupKeyword,
    SettingSuiteSetupKeywordArgument,
    SettingSuiteTeardown,
    SettingSuiteTeardownKeyword,
    SettingSuiteTeardownKeywordArgument,
    SettingTestSetup,
    SettingTestSetupKeyword,
    SettingTestSetupKeywordArgument,
    SettingTestTeardown,
    SettingTestTeardownKeyword,
    SettingTestTeardownKeywordArgument,
    SettingTaskSetup,
    SettingTaskSetupKeyword,
    SettingTaskSetupKeywordArgument,
    SettingTaskTeardown,
    SettingTaskTeardownKeyword,
    SettingTaskTeardownKeywordArgument,
    SettingForceTags,
    SettingForceTagsTagName,
    SettingDefaultTags,
    SettingDefaultTagsTagName,
    SettingTestTemplate,
    SettingTestTemplateKeyword,
    SettingTestTemplateKeywordUnwantedArguments,
    SettingTaskTemplate,
    SettingTaskTemplateKeyword,
    SettingTaskTemplateKeywordUnwantedArguments,
    SettingTestTimeout,
    SettingTestTimeoutValue,
    SettingTestTimeoutMessage,
    SettingTaskTimeout,
    SettingTaskTimeoutValue,
    SettingTaskTimeoutMessage,
    SettingUnknown,
    SettingUnknownTrashElement,

    ScalarVariableDeclaration,
    ScalarVariableValue,
    ListVariableDeclaration,
    ListVariableValue,
    DictionaryVariableDeclaration,
    DictionaryVariableValue,
    VariableUnknown,
    VariableUnknownValue,

    TestCaseDeclaration,
    TestCaseInsideActions,
    TestCaseInsideActionsArguments,
    TestCaseSettingDeclaration,
    TestCaseSettingValue,
    TaskDeclaration,
    TaskInsideActions,
    TaskInsideActionsArguments,
    TaskSettingDeclaration,
    TaskSettingValue,
    KeywordDeclaration,
    KeywordInsideActions,
    KeywordInsideActionsArguments,
    KeywordSettingDeclaration,
    KeywordSettingValue,
}

impl ParsingState {
    /// Table a table state stands for.
    pub const fn table(self) -> Option<TokenTable> {
        match self {
            ParsingState::SettingTableHeader | ParsingState::SettingTableInside => {
                Some(TokenTable::Settings)
            }
            ParsingState::VariableTableHeader | ParsingState::VariableTableInside => {
                Some(TokenTable::Variables)
            }
            ParsingState::TestCaseTableHeader | ParsingState::TestCaseTableInside => {
                Some(TokenTable::TestCases)
            }
            ParsingState::TaskTableHeader | ParsingState::TaskTableInside => {
                Some(TokenTable::Tasks)
            }
            ParsingState::KeywordTableHeader | ParsingState::KeywordTableInside => {
                Some(TokenTable::Keywords)
            }
            ParsingState::CommentTableHeader | ParsingState::CommentTableInside => {
                Some(TokenTable::Comments)
            }
            _ => None,
        }
    }

    pub const fn is_table_header(self) -> bool {
        matches!(
            self,
            ParsingState::SettingTableHeader
                | ParsingState::VariableTableHeader
                | ParsingState::TestCaseTableHeader
                | ParsingState::TaskTableHeader
                | ParsingState::KeywordTableHeader
                | ParsingState::CommentTableHeader
        )
    }

    /// Header state opening `table`; unknown tables read like comments.
    pub const fn header_of(table: Option<TokenTable>) -> ParsingState {
        match table {
            Some(TokenTable::Settings) => ParsingState::SettingTableHeader,
            Some(TokenTable::Variables) => ParsingState::VariableTableHeader,
            Some(TokenTable::TestCases) => ParsingState::TestCaseTableHeader,
            Some(TokenTable::Tasks) => ParsingState::TaskTableHeader,
            Some(TokenTable::Keywords) => ParsingState::KeywordTableHeader,
            _ => ParsingState::CommentTableHeader,
        }
    }

    /// State of the lines below a header.
    pub const fn inside(self) -> ParsingState {
        match self {
            ParsingState::SettingTableHeader => ParsingState::SettingTableInside,
            ParsingState::VariableTableHeader => ParsingState::VariableTableInside,
            ParsingState::TestCaseTableHeader => ParsingState::TestCaseTableInside,
            ParsingState::TaskTableHeader => ParsingState::TaskTableInside,
            ParsingState::KeywordTableHeader => ParsingState::KeywordTableInside,
            ParsingState::CommentTableHeader => ParsingState::CommentTableInside,
            other => other,
        }
    }
}

/// Unit body states of one [`UnitKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnitStates {
    pub declaration: ParsingState,
    pub action: ParsingState,
    pub argument: ParsingState,
    pub setting: ParsingState,
    pub setting_value: ParsingState,
}

impl UnitStates {
    pub const fn of(kind: UnitKind) -> UnitStates {
        match kind {
            UnitKind::TestCase => UnitStates {
                declaration: ParsingState::TestCaseDeclaration,
                action: ParsingState::TestCaseInsideActions,
                argument: ParsingState::TestCaseInsideActionsArguments,
                setting: ParsingState::TestCaseSettingDeclaration,
                setting_value: ParsingState::TestCaseSettingValue,
            },
            UnitKind::Task => UnitStates {
                declaration: ParsingState::TaskDeclaration,
                action: ParsingState::TaskInsideActions,
                argument: ParsingState::TaskInsideActionsArguments,
                setting: ParsingState::TaskSettingDeclaration,
                setting_value: ParsingState::TaskSettingValue,
            },
            UnitKind::Keyword => UnitStates {
                declaration: ParsingState::KeywordDeclaration,
                action: ParsingState::KeywordInsideActions,
                argument: ParsingState::KeywordInsideActionsArguments,
                setting: ParsingState::KeywordSettingDeclaration,
                setting_value: ParsingState::KeywordSettingValue,
            },
        }
    }
}

/// Stack of [`ParsingState`]s, table state at the bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsingStateStack {
    states: Vec<ParsingState>,
}

impl ParsingStateStack {
    pub fn new() -> Self {
        ParsingStateStack::default()
    }

    pub fn push(&mut self, state: ParsingState) {
        self.states.push(state);
    }

    /// Removes the top state. An empty stack means the parser lost track.
    pub fn pop(&mut self) -> Result<ParsingState, ParseError> {
        self.states
            .pop()
            .ok_or_else(|| ParseError::InternalState("pop from an empty state stack".to_string()))
    }

    /// Top state, `Unknown` before the first table.
    pub fn top(&self) -> ParsingState {
        self.states.last().copied().unwrap_or(ParsingState::Unknown)
    }

    pub fn states(&self) -> &[ParsingState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, state: ParsingState) -> bool {
        self.states.contains(&state)
    }

    /// Table state at the bottom.
    pub fn table_state(&self) -> Option<ParsingState> {
        self.states.first().copied()
    }

    /// Table being read; `None` before the first header.
    pub fn table(&self) -> Option<TokenTable> {
        self.table_state().and_then(ParsingState::table)
    }

    /// Starts a new table: the header state becomes the only state.
    pub fn enter_table(&mut self, header: ParsingState) {
        self.states.clear();
        self.states.push(header);
    }

    /// Drops `state` off the top as long as it is there, never the table.
    pub fn pop_while(&mut self, state: ParsingState) {
        while self.states.len() > 1 && self.top() == state {
            self.states.pop();
        }
    }

    /// Drops everything above the table state for a new line.
    pub fn start_line(&mut self) {
        self.states.truncate(1);
        if let Some(table) = self.states.first_mut() {
            *table = table.inside();
        }
    }
}

#[cfg(test)]
mod tests;
