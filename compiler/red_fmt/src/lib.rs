//! Writes Robot Framework document models back to text.
//!
//! The dumper keeps everything it can of the file the model was read from:
//!
//! - lines whose cells are untouched are written back byte for byte,
//!   separators, alignment and line terminators included
//! - edited lines keep the separators around cells that stayed
//! - new elements get lines of their own right after the element before
//!   them, in the style of the file (spaces, pipes or tabs)
//! - tables without a header in the file are appended as new sections
//!
//! So `dump(parse(text)) == text` for any text, and dumping is idempotent.
//!
//! # Example
//!
//! ```
//! use red_ir::{FileFormat, RobotToken, RobotVersion};
//! use red_model::{ImportKind, RobotFile};
//!
//! let mut file = RobotFile::new(RobotVersion::V3_1, FileFormat::TxtOrRobot);
//! file.include_setting_table_section();
//! file.setting_table_mut()
//!     .new_import(ImportKind::Library)
//!     .set_path_or_name(RobotToken::create("Collections"));
//! assert_eq!(red_fmt::dump(&file), "*** Settings ***\nLibrary    Collections\n");
//! ```

mod config;
mod dumper;
mod emitter;
mod error;
mod placement;
mod render;
mod sorter;

pub use config::{DumpConfig, DEFAULT_SEPARATOR_WIDTH};
pub use dumper::RobotDumper;
pub use emitter::{Emitter, FileEmitter, StringEmitter};
pub use error::DumpError;
pub use sorter::{arrange, priority, sort_tokens};

use red_model::RobotFile;

/// Dump `file` with the default configuration.
pub fn dump(file: &RobotFile) -> String {
    RobotDumper::default().dump(file)
}
