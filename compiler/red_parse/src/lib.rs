//! State-stack parser for Robot Framework suite and resource files.
//!
//! Reading a file takes three steps:
//!
//! 1. Each line is split into cells and separators, and every cell is tagged
//!    with the token types its text could stand for (`red_lexer`).
//! 2. Every cell is handed to the first [`ElementMapper`] of the
//!    [`MapperRegistry`] that accepts it, given the [`ParsingStateStack`] and
//!    the model built so far. The mapper types the cell, attaches it to the
//!    model and pushes the state describing what it read.
//! 3. Whole-model fixers handle what is only known once every line is read:
//!    empty documentation lines, `\ ...` loop continuations and `FOR ... END`
//!    blocks.
//!
//! # Example
//!
//! ```
//! use red_parse::RobotParser;
//!
//! let output = RobotParser::default()
//!     .parse_str("*** Settings ***\nLibrary    Collections\n")
//!     .unwrap();
//! assert_eq!(output.file().setting_table().imports().len(), 1);
//! ```
//!
//! Text never makes parsing fail. Cells no construct expects end up as
//! unknown, trash or comment cells and are reported as build messages.

mod check;
mod config;
mod context;
mod error;
mod fixer;
mod mapper;
mod mappers;
mod parser;
mod registry;
mod state;

pub use check::{self_check, self_check_text, MapperConflict, SelfCheckReport};
pub use config::ParserConfig;
pub use context::ParsingContext;
pub use error::ParseError;
pub use mapper::ElementMapper;
pub use parser::RobotParser;
pub use registry::{MapperList, MapperRegistry};
pub use state::{ParsingState, ParsingStateStack, UnitStates};
