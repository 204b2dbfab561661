//! Problems and build messages for the RED Robot Framework parser.
//!
//! The parser never fails on user text. Anything it finds suspicious while
//! reading is recorded as a [`BuildMessage`] wrapping a [`Problem`]:
//!
//! - [`SettingsProblem`]: deprecated or unknown setting spellings
//! - [`KeywordsProblem`]: malformed FOR loops in executable bodies
//! - [`VariablesProblem`]: malformed variable declarations
//!
//! Each problem variant knows its description, severity and fixers, so
//! consumers never need a lookup table.

mod emitter;
mod message;
mod problem;

pub use emitter::{ColorMode, TerminalEmitter};
pub use message::{BuildMessage, FileRegion};
pub use problem::{
    Fixer, KeywordsProblem, Problem, ProblemCategory, SettingsProblem, Severity, VariablesProblem,
};
