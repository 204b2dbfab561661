//! Separator scanning.
//!
//! Splits one physical line into alternating cells and separator runs. The
//! split covers the whole line: concatenating the text of every element gives
//! back the line.
//!
//! # Styles
//!
//! - [`SeparatorStyle::Whitespace`]: two or more spaces, or a tab with any
//!   spaces around it
//! - [`SeparatorStyle::Pipe`]: a `|` with whitespace (or line start/end) on
//!   both sides, plus that whitespace
//! - [`SeparatorStyle::Tabulator`]: exactly one tab; runs of tabs produce
//!   empty cells
//!
//! A [`LineSeparator`] splits lazily: nothing is computed until the first
//! query, then the split is cached for the lifetime of the value.

use std::sync::OnceLock;

use red_ir::{
    FileFormat, FilePosition, LineElement, RobotToken, RobotTokenType, Separator, SeparatorType,
};
use regex::Regex;
use tracing::trace;

/// How cells of a line are delimited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorStyle {
    Whitespace,
    Pipe,
    Tabulator,
}

impl SeparatorStyle {
    /// Separator type of the produced runs.
    pub const fn produced_type(self) -> SeparatorType {
        match self {
            SeparatorStyle::Pipe => SeparatorType::Pipe,
            SeparatorStyle::Whitespace | SeparatorStyle::Tabulator => {
                SeparatorType::TabulatorOrDoubleSpace
            }
        }
    }
}

/// Picks the separator style of each line for one file format.
///
/// Plain text files switch to pipes for lines starting with `| `, `|<tab>` or
/// consisting of a lone `|`. TSV files always use tabs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeparatorBuilder {
    format: FileFormat,
}

impl SeparatorBuilder {
    pub const fn new(format: FileFormat) -> Self {
        SeparatorBuilder { format }
    }

    pub const fn format(self) -> FileFormat {
        self.format
    }

    pub fn style_for(self, line: &str) -> SeparatorStyle {
        match self.format {
            FileFormat::Tsv => SeparatorStyle::Tabulator,
            FileFormat::TxtOrRobot => {
                if is_pipe_line(line) {
                    SeparatorStyle::Pipe
                } else {
                    SeparatorStyle::Whitespace
                }
            }
        }
    }

    /// Scanner for `line`, which starts at byte `line_offset` of the file.
    pub fn create_separator(self, line_number: u32, line_offset: u32, line: &str) -> LineSeparator {
        LineSeparator::new(line_number, line_offset, line, self.style_for(line))
    }
}

fn is_pipe_line(line: &str) -> bool {
    line == "|" || line.starts_with("| ") || line.starts_with("|\t")
}

fn whitespace_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"[ ]*\t[ \t]*|[ ]{2,}[ \t]*").ok())
        .as_ref()
}

/// Byte ranges of the separator runs in `line` for `style`.
fn separator_ranges(line: &str, style: SeparatorStyle) -> Vec<(usize, usize)> {
    match style {
        SeparatorStyle::Whitespace => whitespace_pattern()
            .map(|re| re.find_iter(line).map(|m| (m.start(), m.end())).collect())
            .unwrap_or_default(),
        SeparatorStyle::Tabulator => line
            .match_indices('\t')
            .map(|(start, tab)| (start, start + tab.len()))
            .collect(),
        SeparatorStyle::Pipe => pipe_ranges(line),
    }
}

fn pipe_ranges(line: &str) -> Vec<(usize, usize)> {
    let bytes = line.as_bytes();
    let is_blank = |b: u8| b == b' ' || b == b'\t';
    let mut ranges = Vec::new();
    let mut last_end = 0;
    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'|' || index < last_end {
            continue;
        }
        let opens = index == 0 || is_blank(bytes[index - 1]);
        let closes = index + 1 == bytes.len() || is_blank(bytes[index + 1]);
        if !(opens && closes) {
            continue;
        }
        let mut start = index;
        while start > last_end && is_blank(bytes[start - 1]) {
            start -= 1;
        }
        let mut end = index + 1;
        while end < bytes.len() && is_blank(bytes[end]) {
            end += 1;
        }
        ranges.push((start, end));
        last_end = end;
    }
    ranges
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Lazily split line with a cursor over its separators.
#[derive(Debug)]
pub struct LineSeparator {
    line_number: u32,
    line_offset: u32,
    line: String,
    style: SeparatorStyle,
    elements: OnceLock<Vec<LineElement>>,
    cursor: usize,
}

impl LineSeparator {
    pub fn new(line_number: u32, line_offset: u32, line: &str, style: SeparatorStyle) -> Self {
        LineSeparator {
            line_number,
            line_offset,
            line: line.to_string(),
            style,
            elements: OnceLock::new(),
            cursor: 0,
        }
    }

    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }

    #[inline]
    pub fn style(&self) -> SeparatorStyle {
        self.style
    }

    /// The whole line as cells and separators, in order.
    pub fn split_line(&self) -> &[LineElement] {
        self.elements.get_or_init(|| self.split())
    }

    /// Whether another separator follows the cursor.
    pub fn has_next(&self) -> bool {
        self.split_line()[self.cursor..]
            .iter()
            .any(|element| element.as_separator().is_some())
    }

    fn position(&self, column: usize) -> FilePosition {
        let column = to_u32(column);
        FilePosition::new(self.line_number, column, self.line_offset.saturating_add(column))
    }

    fn split(&self) -> Vec<LineElement> {
        let mut elements = Vec::new();
        let mut last_column = 0;
        let line = self.line.as_str();
        let kind = self.style.produced_type();

        for (start, end) in separator_ranges(line, self.style) {
            if start > last_column || !elements.is_empty() {
                elements.push(LineElement::Token(RobotToken::create_positioned(
                    &line[last_column..start],
                    self.position(last_column),
                    RobotTokenType::Unknown,
                )));
            }
            elements.push(LineElement::Separator(Separator::new(
                kind,
                &line[start..end],
                self.position(start),
            )));
            last_column = end;
        }
        if last_column < line.len() {
            elements.push(LineElement::Token(RobotToken::create_positioned(
                &line[last_column..],
                self.position(last_column),
                RobotTokenType::Unknown,
            )));
        }

        trace!(
            line = self.line_number,
            style = ?self.style,
            elements = elements.len(),
            "split line"
        );
        elements
    }
}

impl Iterator for LineSeparator {
    type Item = Separator;

    fn next(&mut self) -> Option<Separator> {
        let elements = self.elements.get_or_init(|| self.split());
        while let Some(element) = elements.get(self.cursor) {
            self.cursor += 1;
            if let Some(separator) = element.as_separator() {
                return Some(separator.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests;
