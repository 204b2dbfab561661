//! The whole-document model.

use std::path::PathBuf;

use red_diagnostic::BuildMessage;
use red_ir::{FileFormat, RobotLine, RobotToken, RobotTokenType, RobotVersion, TokenTable};

use crate::{
    CommentHolder, ModelType, SettingTable, TableHeader, UnitKind, UnitTable, VariableTable,
};

/// Model of one suite or resource file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotFile {
    version: RobotVersion,
    format: FileFormat,
    lines: Vec<RobotLine>,
    setting_table: SettingTable,
    variable_table: VariableTable,
    test_case_table: UnitTable,
    task_table: UnitTable,
    keyword_table: UnitTable,
    /// `*** Comments ***` and tables Robot Framework does not know.
    other_headers: Vec<TableHeader>,
}

impl RobotFile {
    pub fn new(version: RobotVersion, format: FileFormat) -> Self {
        RobotFile {
            version,
            format,
            lines: Vec::new(),
            setting_table: SettingTable::default(),
            variable_table: VariableTable::default(),
            test_case_table: UnitTable::new(UnitKind::TestCase),
            task_table: UnitTable::new(UnitKind::Task),
            keyword_table: UnitTable::new(UnitKind::Keyword),
            other_headers: Vec::new(),
        }
    }

    pub fn version(&self) -> RobotVersion {
        self.version
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Physical lines as read, with their separators.
    pub fn lines(&self) -> &[RobotLine] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<RobotLine> {
        &mut self.lines
    }

    pub fn add_line(&mut self, line: RobotLine) {
        self.lines.push(line);
    }

    /// Source line `line_number` (1-based).
    pub fn line(&self, line_number: u32) -> Option<&RobotLine> {
        let index = usize::try_from(line_number).ok()?.checked_sub(1)?;
        self.lines
            .get(index)
            .filter(|line| line.line_number() == line_number)
            .or_else(|| self.lines.iter().find(|line| line.line_number() == line_number))
    }

    pub fn setting_table(&self) -> &SettingTable {
        &self.setting_table
    }

    pub fn setting_table_mut(&mut self) -> &mut SettingTable {
        &mut self.setting_table
    }

    pub fn variable_table(&self) -> &VariableTable {
        &self.variable_table
    }

    pub fn variable_table_mut(&mut self) -> &mut VariableTable {
        &mut self.variable_table
    }

    pub fn test_case_table(&self) -> &UnitTable {
        &self.test_case_table
    }

    pub fn test_case_table_mut(&mut self) -> &mut UnitTable {
        &mut self.test_case_table
    }

    pub fn task_table(&self) -> &UnitTable {
        &self.task_table
    }

    pub fn task_table_mut(&mut self) -> &mut UnitTable {
        &mut self.task_table
    }

    pub fn keyword_table(&self) -> &UnitTable {
        &self.keyword_table
    }

    pub fn keyword_table_mut(&mut self) -> &mut UnitTable {
        &mut self.keyword_table
    }

    pub fn unit_table(&self, kind: UnitKind) -> &UnitTable {
        match kind {
            UnitKind::TestCase => &self.test_case_table,
            UnitKind::Task => &self.task_table,
            UnitKind::Keyword => &self.keyword_table,
        }
    }

    pub fn unit_table_mut(&mut self, kind: UnitKind) -> &mut UnitTable {
        match kind {
            UnitKind::TestCase => &mut self.test_case_table,
            UnitKind::Task => &mut self.task_table,
            UnitKind::Keyword => &mut self.keyword_table,
        }
    }

    pub fn other_headers(&self) -> &[TableHeader] {
        &self.other_headers
    }

    pub fn other_headers_mut(&mut self) -> &mut Vec<TableHeader> {
        &mut self.other_headers
    }

    /// Headers list of `table`; `None` and user-own tables share one list.
    pub fn headers_mut(&mut self, table: Option<TokenTable>) -> &mut Vec<TableHeader> {
        match table {
            Some(TokenTable::Settings) => self.setting_table.headers_mut(),
            Some(TokenTable::Variables) => self.variable_table.headers_mut(),
            Some(TokenTable::TestCases) => self.test_case_table.headers_mut(),
            Some(TokenTable::Tasks) => self.task_table.headers_mut(),
            Some(TokenTable::Keywords) => self.keyword_table.headers_mut(),
            _ => &mut self.other_headers,
        }
    }

    /// Every table header of the file, in no particular order.
    pub fn all_headers(&self) -> impl Iterator<Item = &TableHeader> {
        self.setting_table
            .headers()
            .iter()
            .chain(self.variable_table.headers())
            .chain(self.test_case_table.headers())
            .chain(self.task_table.headers())
            .chain(self.keyword_table.headers())
            .chain(&self.other_headers)
    }

    pub fn include_setting_table_section(&mut self) {
        self.include_section(TokenTable::Settings, RobotTokenType::SettingsTableHeader);
    }

    pub fn include_variable_table_section(&mut self) {
        self.include_section(TokenTable::Variables, RobotTokenType::VariablesTableHeader);
    }

    pub fn include_test_case_table_section(&mut self) {
        self.include_section(TokenTable::TestCases, RobotTokenType::TestCasesTableHeader);
    }

    pub fn include_task_table_section(&mut self) {
        self.include_section(TokenTable::Tasks, RobotTokenType::TasksTableHeader);
    }

    pub fn include_keyword_table_section(&mut self) {
        self.include_section(TokenTable::Keywords, RobotTokenType::KeywordsTableHeader);
    }

    /// Adds a `*** Name ***` header unless the table is already declared.
    fn include_section(&mut self, table: TokenTable, ty: RobotTokenType) {
        let version = self.version;
        let headers = self.headers_mut(Some(table));
        if headers.is_empty() {
            let name = ty
                .most_correct_representation(version)
                .map_or("", |repr| repr.text());
            let token = RobotToken::create_with_type(format!("*** {name} ***"), ty);
            headers.push(TableHeader::new(token));
        }
    }

    /// Element that trailing comments at `path` belong to.
    pub fn comment_holder_mut(&mut self, path: ElementPath) -> Option<&mut dyn CommentHolder> {
        match path {
            ElementPath::Header { table, index } => self
                .headers_mut(table)
                .get_mut(index)
                .map(|h| h as &mut dyn CommentHolder),
            ElementPath::Setting { model_type, index } => {
                self.setting_table.comment_holder_mut(model_type, index)
            }
            ElementPath::Variable { index } => self
                .variable_table
                .variables_mut()
                .get_mut(index)
                .map(|v| v as &mut dyn CommentHolder),
            ElementPath::Unit { kind, unit } => self
                .unit_table_mut(kind)
                .units_mut()
                .get_mut(unit)
                .map(|u| u as &mut dyn CommentHolder),
            ElementPath::UnitElement {
                kind,
                unit,
                element,
            } => self
                .unit_table_mut(kind)
                .units_mut()
                .get_mut(unit)
                .and_then(|u| u.elements_mut().get_mut(element))
                .map(crate::UnitElement::as_comment_holder_mut),
        }
    }
}

/// Location of a model element inside a [`RobotFile`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementPath {
    Header {
        table: Option<TokenTable>,
        index: usize,
    },
    /// `index`-th element of the settings list holding `model_type`.
    Setting { model_type: ModelType, index: usize },
    Variable { index: usize },
    /// Name line of a unit.
    Unit { kind: UnitKind, unit: usize },
    UnitElement {
        kind: UnitKind,
        unit: usize,
        element: usize,
    },
}

/// Whether a parse went through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Passed,
    /// The file could not be read or the parser hit an internal error.
    Failed,
}

/// A parsed file together with what the parser noticed about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotFileOutput {
    file: RobotFile,
    build_messages: Vec<BuildMessage>,
    status: Status,
    processed_file: Option<PathBuf>,
}

impl RobotFileOutput {
    pub fn new(version: RobotVersion, format: FileFormat) -> Self {
        RobotFileOutput {
            file: RobotFile::new(version, format),
            build_messages: Vec::new(),
            status: Status::Passed,
            processed_file: None,
        }
    }

    pub fn file(&self) -> &RobotFile {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut RobotFile {
        &mut self.file
    }

    pub fn into_file(self) -> RobotFile {
        self.file
    }

    pub fn build_messages(&self) -> &[BuildMessage] {
        &self.build_messages
    }

    pub fn add_build_message(&mut self, message: BuildMessage) {
        self.build_messages.push(message);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn processed_file(&self) -> Option<&PathBuf> {
        self.processed_file.as_ref()
    }

    pub fn set_processed_file(&mut self, path: PathBuf) {
        self.processed_file = Some(path);
    }
}
