//! Build messages.
//!
//! A build message is a [`Problem`] pinned to the region of the file where the
//! parser noticed it. Messages never stop a parse; they are collected on the
//! parse output for the validation layer.

use std::fmt;

use red_ir::{FilePosition, RobotToken};

use crate::{Problem, Severity};

/// Start and end of a problem in the source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FileRegion {
    pub start: FilePosition,
    pub end: FilePosition,
}

impl FileRegion {
    pub const fn new(start: FilePosition, end: FilePosition) -> Self {
        FileRegion { start, end }
    }

    /// Region covered by a positioned token. `None` for synthetic tokens.
    pub fn of_token(token: &RobotToken) -> Option<Self> {
        let start = token.position()?;
        let length = u32::try_from(token.text().len()).unwrap_or(u32::MAX);
        let end = FilePosition::new(start.line, start.column + length, start.offset + length);
        Some(FileRegion { start, end })
    }
}

impl fmt::Display for FileRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A problem found while building the model.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuildMessage {
    problem: Problem,
    region: Option<FileRegion>,
}

impl BuildMessage {
    pub fn new(problem: impl Into<Problem>, region: Option<FileRegion>) -> Self {
        BuildMessage {
            problem: problem.into(),
            region,
        }
    }

    /// Message located at `token`.
    pub fn at_token(problem: impl Into<Problem>, token: &RobotToken) -> Self {
        BuildMessage::new(problem, FileRegion::of_token(token))
    }

    #[inline]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    #[inline]
    pub fn region(&self) -> Option<FileRegion> {
        self.region
    }

    pub fn level(&self) -> Severity {
        self.problem.severity()
    }

    pub fn message(&self) -> String {
        self.problem.description()
    }
}

impl fmt::Display for BuildMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.level(), self.problem.code(), self.message())?;
        if let Some(region) = self.region {
            write!(f, " at {region}")?;
        }
        Ok(())
    }
}
