//! The parser loop.
//!
//! Each physical line is split into cells, each cell is tagged by the
//! recognizer chain and handed to the first mapper that accepts it. The
//! mapped cell goes back onto the physical line, so the file keeps every
//! character of its source; the model keeps typed copies of the cells.

use std::fs;
use std::path::Path;

use red_ir::{EndOfLine, LineElement, RobotLine, RobotToken, RobotTokenType};
use red_lexer::{RecognizerChain, SeparatorBuilder, SeparatorStyle};
use red_model::{RobotFileOutput, RowType, UnitKind};
use tracing::{debug, trace};

use crate::{fixer, ElementMapper, MapperRegistry, ParseError, ParserConfig, ParsingContext};

/// Hook called with every cell right before it is mapped.
pub(crate) type CellObserver<'a> = dyn FnMut(&RobotFileOutput, &ParsingContext, &RobotToken) + 'a;

/// Parser for one grammar configuration; reusable across files.
#[derive(Copy, Clone, Debug, Default)]
pub struct RobotParser {
    config: ParserConfig,
}

impl RobotParser {
    pub fn new(config: ParserConfig) -> Self {
        RobotParser { config }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Builds the model of `text`.
    ///
    /// Text never makes this fail: cells no construct expects are kept as
    /// unknown, trash or comment cells and reported as build messages.
    pub fn parse_str(&self, text: &str) -> Result<RobotFileOutput, ParseError> {
        self.parse_observed(text, None)
    }

    /// Reads and parses `path`. Bytes that are not UTF-8 become U+FFFD.
    pub fn parse_file(&self, path: &Path) -> Result<RobotFileOutput, ParseError> {
        let bytes = fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut output = self.parse_str(&String::from_utf8_lossy(&bytes))?;
        output.set_processed_file(path.to_path_buf());
        Ok(output)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(
        version = %self.config.version(),
        format = ?self.config.format(),
    ))]
    pub(crate) fn parse_observed(
        &self,
        text: &str,
        mut observer: Option<&mut CellObserver<'_>>,
    ) -> Result<RobotFileOutput, ParseError> {
        let version = self.config.version();
        let mut output = RobotFileOutput::new(version, self.config.format());
        let mut context = ParsingContext::new(version);
        let chain = RecognizerChain::for_version(version);
        let mappers = MapperRegistry::global().mappers_for(version);
        let reader = LineReader {
            builder: SeparatorBuilder::new(self.config.format()),
            mappers: &mappers,
        };

        for (index, (line, eol, offset)) in split_lines(text).into_iter().enumerate() {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let mut line = reader.read(
                &mut output,
                &mut context,
                &chain,
                observer.as_deref_mut(),
                (line_number, offset, line),
            )?;
            line.set_end_of_line(eol);
            output.file_mut().add_line(line);
        }

        fixer::fix(&mut output);
        collect_model_messages(&mut output);
        debug!(
            lines = output.file().lines().len(),
            messages = output.build_messages().len(),
            "parsed"
        );
        Ok(output)
    }
}

/// Per-parse line reader.
struct LineReader<'a> {
    builder: SeparatorBuilder,
    mappers: &'a [&'static dyn ElementMapper],
}

impl LineReader<'_> {
    fn read(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        chain: &RecognizerChain,
        mut observer: Option<&mut CellObserver<'_>>,
        (line_number, offset, text): (u32, u32, &str),
    ) -> Result<RobotLine, ParseError> {
        context.start_line(line_number);
        let separator = self.builder.create_separator(line_number, offset, text);
        let style = separator.style();
        let elements = separator.split_line();
        let last_content = elements.iter().rposition(|element| {
            element
                .as_token()
                .is_some_and(|token| !token.text().trim().is_empty())
        });

        let mut line = RobotLine::new(line_number);
        for (index, element) in elements.iter().enumerate() {
            let token = match element {
                LineElement::Separator(separator) => {
                    if index == 0 && style != SeparatorStyle::Pipe {
                        context.mark_indented();
                    }
                    line.add_separator(separator.clone());
                    continue;
                }
                LineElement::Token(token) => token,
            };

            let mut token = token.clone();
            if token.text().trim().is_empty()
                && (context.is_first_cell() || last_content.map_or(true, |last| index > last))
            {
                if context.is_first_cell() {
                    context.mark_indented();
                }
                token.set_type(RobotTokenType::PrettyAlignSpace);
                line.add_token(token);
                continue;
            }

            chain.recognize(&mut token);
            if let Some(observer) = observer.as_deref_mut() {
                observer(output, context, &token);
            }
            let mapper = self
                .mappers
                .iter()
                .find(|mapper| mapper.can_map(output, context, &token))
                .ok_or_else(|| {
                    ParseError::InternalState(format!(
                        "no mapper accepts `{}` at line {line_number} in state {:?}",
                        token.text(),
                        context.top(),
                    ))
                })?;
            trace!(line = line_number, text = token.text(), mapper = mapper.name(), "map");
            let mut mapped = mapper.map(output, context, token);
            if context.take_claim() {
                mapped.mark_owned();
            }
            let data = !matches!(
                mapped.primary_type(),
                RobotTokenType::Comment | RobotTokenType::PreviousLineContinue
            );
            context.cell_mapped(data);
            line.add_token(mapped);
        }

        if context.is_attached() {
            line.mark_attached();
        }
        context.end_line();
        Ok(line)
    }
}

/// Lines of `text` with their terminator and starting byte offset.
///
/// A terminator at the very end does not open another line.
fn split_lines(text: &str) -> Vec<(&str, EndOfLine, u32)> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        let eol = match bytes[index] {
            b'\n' => Some((EndOfLine::Lf, 1)),
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => Some((EndOfLine::CrLf, 2)),
            b'\r' => Some((EndOfLine::Cr, 1)),
            _ => None,
        };
        match eol {
            Some((eol, len)) => {
                lines.push((&text[start..index], eol, offset(start)));
                index += len;
                start = index;
            }
            None => index += 1,
        }
    }
    if start < bytes.len() {
        lines.push((&text[start..], EndOfLine::None, offset(start)));
    }
    lines
}

fn offset(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Messages the model derives from itself: variable declarations and loop
/// headers.
fn collect_model_messages(output: &mut RobotFileOutput) {
    let file = output.file();
    let mut messages: Vec<_> = file
        .variable_table()
        .variables()
        .iter()
        .flat_map(|variable| variable.build_messages())
        .collect();
    for kind in [UnitKind::TestCase, UnitKind::Task, UnitKind::Keyword] {
        for unit in file.unit_table(kind).units() {
            for row in unit.rows() {
                let description = row.build_line_description();
                if description.row_type() == RowType::ForDeclaration {
                    messages.extend(description.messages().iter().cloned());
                }
            }
        }
    }
    for message in messages {
        output.add_build_message(message);
    }
}

#[cfg(test)]
mod tests;
