//! Problem taxonomy.
//!
//! Problems describe what is wrong with a piece of test data in a structured
//! way. Each category is its own sum type; every variant knows its
//! description, category, default severity and the fixes that can resolve it.
//!
//! The parser only raises problems it can see while reading (deprecated
//! spellings, malformed loop headers, badly formed variable names). Deeper
//! validation is left to consumers of the model.

use std::fmt;

/// How serious a problem is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Groups problems for filtering and configuration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProblemCategory {
    /// Syntax still accepted but scheduled for removal.
    DeprecatedSyntax,
    /// Syntax the selected Robot Framework version no longer accepts.
    RemovedSyntax,
    /// Setting names the parser does not know.
    UnknownSetting,
    /// Malformed FOR loops.
    ForLoop,
    /// Malformed variable declarations and usages.
    Variables,
}

impl ProblemCategory {
    pub const fn default_severity(self) -> Severity {
        match self {
            ProblemCategory::DeprecatedSyntax => Severity::Warning,
            ProblemCategory::RemovedSyntax
            | ProblemCategory::UnknownSetting
            | ProblemCategory::ForLoop
            | ProblemCategory::Variables => Severity::Error,
        }
    }
}

/// An edit that resolves a problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Fixer {
    /// Replace the offending cell text.
    ReplaceWith { text: String },
    /// Insert a new cell after the offending one.
    InsertAfter { text: String },
    /// Remove the offending cell.
    Remove,
}

impl fmt::Display for Fixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fixer::ReplaceWith { text } => write!(f, "replace with '{text}'"),
            Fixer::InsertAfter { text } => write!(f, "insert '{text}'"),
            Fixer::Remove => write!(f, "remove"),
        }
    }
}

/// Problems in settings, whether suite-level or local (`[Setup]`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SettingsProblem {
    /// A spelling deprecated in the active version.
    DeprecatedDeclaration { used: String, replacement: String },
    /// A spelling removed in the active version; parsed as unknown.
    RemovedDeclaration { used: String, replacement: String },
    /// A setting name nothing recognizes.
    UnknownSetting { name: String },
    /// A deprecated table header such as `*** Metadata ***`.
    DeprecatedTableHeader { used: String, replacement: String },
}

impl SettingsProblem {
    pub fn description(&self) -> String {
        match self {
            SettingsProblem::DeprecatedDeclaration { used, .. } => {
                format!("setting '{used}' is deprecated")
            }
            SettingsProblem::RemovedDeclaration { used, .. } => {
                format!("setting '{used}' is no longer supported")
            }
            SettingsProblem::UnknownSetting { name } => format!("unknown setting '{name}'"),
            SettingsProblem::DeprecatedTableHeader { used, .. } => {
                format!("table header '{used}' is deprecated")
            }
        }
    }

    pub fn category(&self) -> ProblemCategory {
        match self {
            SettingsProblem::DeprecatedDeclaration { .. }
            | SettingsProblem::DeprecatedTableHeader { .. } => ProblemCategory::DeprecatedSyntax,
            SettingsProblem::RemovedDeclaration { .. } => ProblemCategory::RemovedSyntax,
            SettingsProblem::UnknownSetting { .. } => ProblemCategory::UnknownSetting,
        }
    }

    pub fn fixers(&self) -> Vec<Fixer> {
        match self {
            SettingsProblem::DeprecatedDeclaration { replacement, .. }
            | SettingsProblem::RemovedDeclaration { replacement, .. }
            | SettingsProblem::DeprecatedTableHeader { replacement, .. } => {
                vec![Fixer::ReplaceWith {
                    text: replacement.clone(),
                }]
            }
            SettingsProblem::UnknownSetting { .. } => vec![Fixer::Remove],
        }
    }
}

/// Problems in test case, task and keyword bodies.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeywordsProblem {
    /// `FOR` with no loop variable.
    ForLoopWithoutVariable,
    /// `FOR` with no `IN` separator.
    ForLoopWithoutIn { declaration: String },
    /// `FOR ... IN` with nothing to iterate over.
    ForLoopWithoutValues,
    /// `END` that closes no loop.
    ForEndWithoutFor,
    /// A `\` body row with no loop above it.
    ForContinueWithoutFor,
}

impl KeywordsProblem {
    pub fn description(&self) -> String {
        match self {
            KeywordsProblem::ForLoopWithoutVariable => {
                "FOR loop declares no loop variable".to_string()
            }
            KeywordsProblem::ForLoopWithoutIn { declaration } => {
                format!("'{declaration}' loop is missing an IN separator")
            }
            KeywordsProblem::ForLoopWithoutValues => {
                "FOR loop has nothing to iterate over".to_string()
            }
            KeywordsProblem::ForEndWithoutFor => "END without an opening FOR".to_string(),
            KeywordsProblem::ForContinueWithoutFor => {
                "loop body row outside of a FOR loop".to_string()
            }
        }
    }

    pub fn category(&self) -> ProblemCategory {
        ProblemCategory::ForLoop
    }

    pub fn fixers(&self) -> Vec<Fixer> {
        match self {
            KeywordsProblem::ForLoopWithoutIn { .. } => vec![Fixer::InsertAfter {
                text: "IN".to_string(),
            }],
            KeywordsProblem::ForEndWithoutFor | KeywordsProblem::ForContinueWithoutFor => {
                vec![Fixer::Remove]
            }
            KeywordsProblem::ForLoopWithoutVariable | KeywordsProblem::ForLoopWithoutValues => {
                Vec::new()
            }
        }
    }
}

/// Problems in variable declarations and usages.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum VariablesProblem {
    /// Declaration that is not `${..}`, `@{..}` or `&{..}`.
    InvalidDeclaration { name: String },
    /// `${` without the matching `}`.
    UnclosedVariable { text: String },
    /// Dictionary item without `=`.
    DictionaryItemWithoutSeparator { item: String },
}

impl VariablesProblem {
    pub fn description(&self) -> String {
        match self {
            VariablesProblem::InvalidDeclaration { name } => {
                format!("invalid variable declaration '{name}'")
            }
            VariablesProblem::UnclosedVariable { text } => {
                format!("variable in '{text}' is not closed")
            }
            VariablesProblem::DictionaryItemWithoutSeparator { item } => {
                format!("dictionary item '{item}' is not in key=value form")
            }
        }
    }

    pub fn category(&self) -> ProblemCategory {
        ProblemCategory::Variables
    }

    pub fn fixers(&self) -> Vec<Fixer> {
        match self {
            VariablesProblem::UnclosedVariable { text } => vec![Fixer::ReplaceWith {
                text: format!("{text}}}"),
            }],
            VariablesProblem::InvalidDeclaration { .. }
            | VariablesProblem::DictionaryItemWithoutSeparator { .. } => Vec::new(),
        }
    }
}

/// Any problem the parser can report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Problem {
    Settings(SettingsProblem),
    Keywords(KeywordsProblem),
    Variables(VariablesProblem),
}

impl Problem {
    pub fn description(&self) -> String {
        match self {
            Problem::Settings(p) => p.description(),
            Problem::Keywords(p) => p.description(),
            Problem::Variables(p) => p.description(),
        }
    }

    pub fn category(&self) -> ProblemCategory {
        match self {
            Problem::Settings(p) => p.category(),
            Problem::Keywords(p) => p.category(),
            Problem::Variables(p) => p.category(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.category().default_severity()
    }

    pub fn fixers(&self) -> Vec<Fixer> {
        match self {
            Problem::Settings(p) => p.fixers(),
            Problem::Keywords(p) => p.fixers(),
            Problem::Variables(p) => p.fixers(),
        }
    }

    pub fn has_resolution(&self) -> bool {
        !self.fixers().is_empty()
    }

    /// Stable identifier, e.g. `S001`.
    pub fn code(&self) -> &'static str {
        match self {
            Problem::Settings(SettingsProblem::DeprecatedDeclaration { .. }) => "S001",
            Problem::Settings(SettingsProblem::RemovedDeclaration { .. }) => "S002",
            Problem::Settings(SettingsProblem::UnknownSetting { .. }) => "S003",
            Problem::Settings(SettingsProblem::DeprecatedTableHeader { .. }) => "S004",
            Problem::Keywords(KeywordsProblem::ForLoopWithoutVariable) => "K001",
            Problem::Keywords(KeywordsProblem::ForLoopWithoutIn { .. }) => "K002",
            Problem::Keywords(KeywordsProblem::ForLoopWithoutValues) => "K003",
            Problem::Keywords(KeywordsProblem::ForEndWithoutFor) => "K004",
            Problem::Keywords(KeywordsProblem::ForContinueWithoutFor) => "K005",
            Problem::Variables(VariablesProblem::InvalidDeclaration { .. }) => "V001",
            Problem::Variables(VariablesProblem::UnclosedVariable { .. }) => "V002",
            Problem::Variables(VariablesProblem::DictionaryItemWithoutSeparator { .. }) => "V003",
        }
    }
}

impl From<SettingsProblem> for Problem {
    fn from(p: SettingsProblem) -> Self {
        Problem::Settings(p)
    }
}

impl From<KeywordsProblem> for Problem {
    fn from(p: KeywordsProblem) -> Self {
        Problem::Keywords(p)
    }
}

impl From<VariablesProblem> for Problem {
    fn from(p: VariablesProblem) -> Self {
        Problem::Variables(p)
    }
}

#[cfg(test)]
mod tests;
