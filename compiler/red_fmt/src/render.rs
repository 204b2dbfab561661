//! Text of single output lines.
//!
//! A source line whose model cells all sit where they were read, with their
//! source text, is written back unchanged. Any other source line holding
//! model cells is recomposed: layout cells (`...`, `\`, alignment cells)
//! stay where they were, model cells follow in writing order, and each cell
//! keeps the separator it had in the source when it still has one.

use std::borrow::Cow;

use red_ir::{FileFormat, RobotLine, RobotToken, RobotTokenType, SeparatorType};
use red_lexer::SeparatorStyle;
use rustc_hash::FxHashSet;

use crate::config::is_pipe_line;
use crate::placement::Cell;
use crate::DumpConfig;

/// Escaped empty cell of a space separated line.
const EMPTY_CELL: &str = "\\";

const CONTINUATION: &str = "...";

/// Source cells no model element owns, plus the alignment, continuation
/// and comment cells the dumper positions itself.
fn is_layout(token: &RobotToken) -> bool {
    !token.is_owned()
        || matches!(
            token.primary_type(),
            RobotTokenType::PrettyAlignSpace
                | RobotTokenType::PreviousLineContinue
                | RobotTokenType::Comment
                | RobotTokenType::CommentsTableInnerToken
                | RobotTokenType::Unknown
        )
        || matches!(token.text().trim(), "" | CONTINUATION | "\\")
}

fn token_at(line: &RobotLine, column: u32) -> Option<&RobotToken> {
    line.tokens().find(|token| token.start_column() == Some(column))
}

/// Empty model cell standing for an empty `...` line; nothing to write.
fn is_virtual(line: &RobotLine, token: &RobotToken) -> bool {
    token.text().is_empty()
        && token
            .start_column()
            .is_some_and(|column| token_at(line, column).is_none())
}

/// Whether `line` held model cells that are all gone from the model.
pub(crate) fn is_orphaned(line: &RobotLine) -> bool {
    line.is_attached() && line.tokens().any(|token| !is_layout(token))
}

/// Whether `cells` are exactly the model cells `line` was read with.
pub(crate) fn is_unchanged(line: &RobotLine, cells: &[Cell<'_>]) -> bool {
    let mut claimed = FxHashSet::default();
    let mut previous = None;
    for cell in cells {
        if is_virtual(line, cell.token) {
            continue;
        }
        let Some(position) = cell.token.position() else {
            return false;
        };
        if position.line != line.line_number() || previous.is_some_and(|p| p >= position.column)
        {
            return false;
        }
        match token_at(line, position.column) {
            Some(source) if source.text() == cell.token.text() => {}
            _ => return false,
        }
        claimed.insert(position.column);
        previous = Some(position.column);
    }
    line.tokens().all(|token| {
        token
            .start_column()
            .is_some_and(|column| claimed.contains(&column))
            || is_layout(token)
    })
}

/// One cell of a recomposed line.
#[derive(Copy, Clone, Debug)]
struct Part<'a> {
    text: &'a str,
    column: Option<u32>,
}

impl<'a> Part<'a> {
    fn of(token: &'a RobotToken) -> Self {
        Part {
            text: token.text(),
            column: token.start_column(),
        }
    }
}

/// Layout cells and model cells of `line` in writing order.
///
/// A line whose first model cell continues an element gets a `...` when it
/// has none left.
fn parts<'a>(line: &'a RobotLine, cells: &[Cell<'a>]) -> Vec<Part<'a>> {
    let claimed: FxHashSet<u32> = cells
        .iter()
        .filter_map(|cell| cell.token.position())
        .filter(|position| position.line == line.line_number())
        .map(|position| position.column)
        .collect();
    let mut layout = line
        .tokens()
        .filter(|token| {
            is_layout(token)
                && !token
                    .start_column()
                    .is_some_and(|column| claimed.contains(&column))
        })
        .peekable();

    let mut parts = Vec::new();
    let mut continued = false;
    let mut first = true;
    for cell in cells {
        if is_virtual(line, cell.token) {
            continue;
        }
        if let Some(column) = cell.token.start_column() {
            while let Some(token) =
                layout.next_if(|token| token.start_column().is_some_and(|c| c < column))
            {
                continued |= token.text().trim() == CONTINUATION;
                parts.push(Part::of(token));
            }
        }
        if first {
            first = false;
            if !cell.opens && !continued {
                parts.push(Part {
                    text: CONTINUATION,
                    column: None,
                });
            }
        }
        parts.push(Part::of(cell.token));
    }
    parts.extend(layout.filter(|token| !token.text().is_empty()).map(Part::of));
    parts
}

/// Separator style `line` was written with.
fn source_style(line: &RobotLine, format: FileFormat) -> SeparatorStyle {
    if is_pipe_line(line) {
        SeparatorStyle::Pipe
    } else if format == FileFormat::Tsv {
        SeparatorStyle::Tabulator
    } else {
        SeparatorStyle::Whitespace
    }
}

fn cell_text(text: &str, index: usize, style: SeparatorStyle) -> &str {
    if text.is_empty() && index > 0 && style == SeparatorStyle::Whitespace {
        EMPTY_CELL
    } else {
        text
    }
}

/// Text of a source line holding model `cells`.
pub(crate) fn source_line(
    line: &RobotLine,
    cells: &[Cell<'_>],
    format: FileFormat,
    config: &DumpConfig,
    style: SeparatorStyle,
) -> String {
    if !config.restyle() && is_unchanged(line, cells) {
        return line.text();
    }
    let parts = parts(line, cells);
    let own_style = source_style(line, format);

    if config.restyle() {
        let mut texts: Vec<Cow<'_, str>> = parts.iter().map(|part| Cow::Borrowed(part.text)).collect();
        if own_style != SeparatorStyle::Pipe && line.leading_separator().is_some() {
            texts.insert(0, Cow::Borrowed(""));
        }
        while texts.len() > 1 && texts.last().is_some_and(|text| text.is_empty()) {
            texts.pop();
        }
        return new_line(&texts, style, config);
    }

    let mut text = String::new();
    for (index, part) in parts.iter().enumerate() {
        let separator = part
            .column
            .and_then(|column| line.separator_before(column))
            .filter(|separator| index > 0 || separator.start_column() == 0);
        match separator {
            Some(separator) => text.push_str(separator.text()),
            None if index == 0 => {
                if let Some(leading) = line.leading_separator() {
                    text.push_str(leading.text());
                }
            }
            None => text.push_str(&config.separator(own_style)),
        }
        text.push_str(cell_text(part.text, index, own_style));
    }
    if let Some(trailing) = line
        .trailing_separator()
        .filter(|separator| separator.kind() == SeparatorType::Pipe)
    {
        text.push_str(trailing.text());
    }
    text
}

/// Text of a line written from scratch.
pub(crate) fn new_line(cells: &[Cow<'_, str>], style: SeparatorStyle, config: &DumpConfig) -> String {
    let separator = config.separator(style);
    let mut text = String::new();
    if style == SeparatorStyle::Pipe {
        text.push_str("| ");
    }
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            text.push_str(&separator);
        }
        text.push_str(cell_text(cell, index, style));
    }
    text
}

#[cfg(test)]
mod tests;
