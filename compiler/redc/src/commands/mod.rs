//! Command handlers of the `red` binary.
//!
//! Handlers print their results and return whether they succeeded; the
//! binary turns a failure into exit status 1. The text building parts are
//! public so tests can call them without a terminal.

use std::fs;
use std::path::Path;

use red_model::RobotFileOutput;
use red_parse::RobotParser;

use crate::CliOptions;

mod check;
mod debug;
mod dump;

pub use check::{check_files, check_text, CheckReport};
pub use debug::{describe, lex_file, lex_text, parse_file};
pub use dump::dump_file;

/// Read a source file, reporting failures on stderr.
fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(error) => {
            eprintln!("error: cannot read '{}': {error}", path.display());
            None
        }
    }
}

/// Parse `path` with the grammar the options select.
fn load(path: &Path, options: &CliOptions) -> Option<RobotFileOutput> {
    let config = options.parser_config(path);
    tracing::debug!(path = %path.display(), version = %config.version(), "load");
    match RobotParser::new(config).parse_file(path) {
        Ok(output) => Some(output),
        Err(error) => {
            eprintln!("error: {error}");
            None
        }
    }
}
