//! The `check` command: parse files, report build messages and verify that
//! each file dumps back to its exact text.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use red_diagnostic::{BuildMessage, ColorMode, Severity, TerminalEmitter};
use red_parse::{ParseError, ParserConfig, RobotParser};

use crate::CliOptions;

/// What checking one file found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub messages: Vec<BuildMessage>,
    /// Whether the dump of the parsed model equals the source text.
    pub round_trip: bool,
}

impl CheckReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|message| message.level() == severity)
            .count()
    }

    pub fn is_ok(&self) -> bool {
        self.round_trip && self.count(Severity::Error) == 0
    }
}

pub fn check_text(text: &str, config: ParserConfig) -> Result<CheckReport, ParseError> {
    let output = RobotParser::new(config).parse_str(text)?;
    let round_trip = red_fmt::dump(output.file()) == text;
    Ok(CheckReport {
        messages: output.build_messages().to_vec(),
        round_trip,
    })
}

fn check_path(path: &Path, options: &CliOptions) -> Result<CheckReport, String> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("cannot read '{}': {error}", path.display()))?;
    check_text(&text, options.parser_config(path)).map_err(|error| error.to_string())
}

/// Check every file in parallel and report in argument order.
pub fn check_files(paths: &[PathBuf], options: &CliOptions) -> bool {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| check_path(path, options))
        .collect();

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), ColorMode::Auto, is_tty);
    let mut errors = 0;
    let mut warnings = 0;
    let mut ok = true;
    for (path, result) in paths.iter().zip(results) {
        let name = path.display().to_string();
        match result {
            Ok(report) => {
                emitter.emit_all(&name, &report.messages);
                errors += report.count(Severity::Error);
                warnings += report.count(Severity::Warning);
                if !report.round_trip {
                    eprintln!("error: {name} does not dump back to its source text");
                }
                if report.is_ok() {
                    println!("OK: {name}");
                } else {
                    ok = false;
                }
            }
            Err(error) => {
                eprintln!("error: {error}");
                ok = false;
            }
        }
    }
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    ok
}

#[cfg(test)]
mod tests;
