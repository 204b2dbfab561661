//! Lexical layer of the RED Robot Framework parser.
//!
//! Two steps turn a line of text into typed cells:
//!
//! 1. [`LineSeparator`] splits the line into cells and separator runs, using
//!    the [`SeparatorStyle`] that [`SeparatorBuilder`] picks for the file
//!    format.
//! 2. [`RecognizerChain`] tags each cell with the [`RobotTokenType`]s its text
//!    could stand for. Which type wins is decided later by the parser, from
//!    the context the cell appears in.
//!
//! [`RobotTokenType`]: red_ir::RobotTokenType

mod catalogue;
mod recognizer;
mod separator;

pub use catalogue::{catalogue, recognizers_for, RecognizerChain};
pub use recognizer::{alternatives, word_with_spaces_inside, Applicability, TokenRecognizer};
pub use separator::{LineSeparator, SeparatorBuilder, SeparatorStyle};
