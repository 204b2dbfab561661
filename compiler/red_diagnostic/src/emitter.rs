//! Terminal Emitter
//!
//! One line per build message, in the `file:line:column: severity[code]`
//! shape editors and CI logs pick up, with optional ANSI colors.

use std::io::Write;

use crate::{BuildMessage, Severity};

const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const CYAN: &str = "\x1b[1;36m";
const GREEN: &str = "\x1b[1;32m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

impl Severity {
    const fn ansi(self) -> &'static str {
        match self {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
            Severity::Info => CYAN,
        }
    }
}

/// When the emitter colors its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Decide from whether the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; the other modes ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes build messages for people.
///
/// Write errors are ignored: a closed pipe must not turn a clean parse into
/// a failure.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn paint(&mut self, text: &str, ansi: &str) {
        let _ = if self.colors {
            write!(self.writer, "{ansi}{text}{RESET}")
        } else {
            write!(self.writer, "{text}")
        };
    }

    /// `file[:line:column]: severity[code]: message`, then one `help` line
    /// per fixer.
    pub fn emit(&mut self, file: &str, message: &BuildMessage) {
        let _ = match message.region() {
            Some(region) => write!(self.writer, "{file}:{}: ", region.start),
            None => write!(self.writer, "{file}: "),
        };
        let level = message.level();
        self.paint(&level.to_string(), level.ansi());
        self.paint(&format!("[{}]", message.problem().code()), BOLD);
        let _ = writeln!(self.writer, ": {}", message.message());

        for fixer in message.problem().fixers() {
            let _ = write!(self.writer, "    ");
            self.paint("help", GREEN);
            let _ = writeln!(self.writer, ": {fixer}");
        }
    }

    pub fn emit_all(&mut self, file: &str, messages: &[BuildMessage]) {
        for message in messages {
            self.emit(file, message);
        }
    }

    /// Closing line with the error and warning counts; nothing when both
    /// are zero.
    pub fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let counts: Vec<String> = [(error_count, "error"), (warning_count, "warning")]
            .into_iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, noun)| match count {
                1 => format!("1 {noun}"),
                _ => format!("{count} {noun}s"),
            })
            .collect();
        if counts.is_empty() {
            return;
        }
        self.paint(&counts.join(", "), BOLD);
        let _ = writeln!(self.writer);
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
