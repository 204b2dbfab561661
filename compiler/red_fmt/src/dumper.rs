//! The dumper loop.
//!
//! Source lines are written in file order. A line holding model cells is
//! rendered from them; any other line (blank lines, comments, trash) is
//! written as read. Lines created for new elements follow the source line
//! they were placed after, and new tables are appended as sections. Lines
//! whose elements were removed from the model are left out.

use std::path::Path;

use red_ir::EndOfLine;
use red_model::RobotFile;
use tracing::{debug, trace};

use crate::emitter::{Emitter, FileEmitter, StringEmitter};
use crate::placement::Placement;
use crate::render::{is_orphaned, new_line, source_line};
use crate::{DumpConfig, DumpError};

/// Writes document models back to text; reusable across files.
#[derive(Copy, Clone, Debug, Default)]
pub struct RobotDumper {
    config: DumpConfig,
}

impl RobotDumper {
    pub fn new(config: DumpConfig) -> Self {
        RobotDumper { config }
    }

    pub fn config(&self) -> DumpConfig {
        self.config
    }

    /// Text of `file`.
    ///
    /// A model read from text and left untouched dumps to that exact text.
    pub fn dump(&self, file: &RobotFile) -> String {
        let mut emitter = StringEmitter::new();
        self.dump_to(file, &mut emitter);
        emitter.output()
    }

    /// Writes `file` to `path`, replacing its content.
    pub fn dump_to_file(&self, file: &RobotFile, path: &Path) -> Result<(), DumpError> {
        let mut emitter = FileEmitter::create(path)?;
        self.dump_to(file, &mut emitter);
        emitter.finish()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(
        version = %file.version(),
        format = ?file.format(),
    ))]
    pub fn dump_to(&self, file: &RobotFile, emitter: &mut dyn Emitter) {
        let placement = Placement::of(file);
        let style = self.config.style_for(file);
        let eol = self.config.eol_for(file);
        debug!(
            lines = file.lines().len(),
            new_lines = placement.new_line_count(),
            sections = placement.sections().len(),
            ?style,
            "dump"
        );

        let mut writer = LineWriter::new(emitter, eol);
        for line in file.lines() {
            let line_number = line.line_number();
            match placement.cells_on(line_number) {
                Some(cells) => {
                    let text = source_line(line, cells, file.format(), &self.config, style);
                    trace!(line = line_number, %text, "source line");
                    writer.line(&text, line.end_of_line());
                }
                None if is_orphaned(line) => trace!(line = line_number, "removed line"),
                None => writer.line(&line.text(), line.end_of_line()),
            }
            for new in placement.lines_after(line_number) {
                writer.line(&new_line(&new.cells, style, &self.config), eol);
            }
        }
        for section in placement.sections() {
            if writer.needs_blank_line() {
                writer.line("", eol);
            }
            for new in section {
                writer.line(&new_line(&new.cells, style, &self.config), eol);
            }
        }
        writer.finish();
    }
}

/// Writes lines, holding back each terminator until the next line shows
/// up; a line that had none gets `default_eol` once something follows it.
struct LineWriter<'e> {
    emitter: &'e mut dyn Emitter,
    default_eol: EndOfLine,
    pending: Option<EndOfLine>,
    last_blank: bool,
}

impl<'e> LineWriter<'e> {
    fn new(emitter: &'e mut dyn Emitter, default_eol: EndOfLine) -> Self {
        LineWriter {
            emitter,
            default_eol,
            pending: None,
            last_blank: false,
        }
    }

    fn line(&mut self, text: &str, eol: EndOfLine) {
        if let Some(pending) = self.pending {
            let pending = match pending {
                EndOfLine::None => self.default_eol,
                other => other,
            };
            self.emitter.emit_end_of_line(pending);
        }
        self.emitter.emit(text);
        self.pending = Some(eol);
        self.last_blank = text.trim().is_empty();
    }

    /// Whether a new section needs a blank line to set it apart.
    fn needs_blank_line(&self) -> bool {
        self.pending.is_some() && !self.last_blank
    }

    fn finish(self) {
        if let Some(eol) = self.pending {
            self.emitter.emit_end_of_line(eol);
        }
    }
}

#[cfg(test)]
mod tests;
