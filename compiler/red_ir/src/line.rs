//! Physical lines: the layout the parser read, cell by cell.
//!
//! A [`RobotLine`] owns a copy of every token and separator of one source
//! line, with no gaps and no overlaps. It carries no semantics; writers use it
//! to reproduce the original separators around tokens that were not moved.

use crate::{FilePosition, RobotToken};

/// Kind of separator run between two cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorType {
    /// `| ` cell borders of the pipe format.
    Pipe,
    /// Two or more spaces, or a tabulator.
    TabulatorOrDoubleSpace,
}

/// A run of separator characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Separator {
    kind: SeparatorType,
    text: String,
    position: FilePosition,
}

impl Separator {
    pub fn new(kind: SeparatorType, text: impl Into<String>, position: FilePosition) -> Self {
        Separator {
            kind,
            text: text.into(),
            position,
        }
    }

    #[inline]
    pub fn kind(&self) -> SeparatorType {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn position(&self) -> FilePosition {
        self.position
    }

    #[inline]
    pub fn start_column(&self) -> u32 {
        self.position.column
    }

    pub fn end_column(&self) -> u32 {
        self.position.column + u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }
}

/// Line terminator as found in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum EndOfLine {
    #[default]
    Lf,
    CrLf,
    Cr,
    /// Last line of a file without a trailing newline.
    None,
}

impl EndOfLine {
    pub const fn as_str(self) -> &'static str {
        match self {
            EndOfLine::Lf => "\n",
            EndOfLine::CrLf => "\r\n",
            EndOfLine::Cr => "\r",
            EndOfLine::None => "",
        }
    }
}

/// Token or separator within a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineElement {
    Token(RobotToken),
    Separator(Separator),
}

impl LineElement {
    pub fn text(&self) -> &str {
        match self {
            LineElement::Token(token) => token.text(),
            LineElement::Separator(separator) => separator.text(),
        }
    }

    pub fn start_column(&self) -> Option<u32> {
        match self {
            LineElement::Token(token) => token.start_column(),
            LineElement::Separator(separator) => Some(separator.start_column()),
        }
    }

    pub fn as_token(&self) -> Option<&RobotToken> {
        match self {
            LineElement::Token(token) => Some(token),
            LineElement::Separator(_) => None,
        }
    }

    pub fn as_separator(&self) -> Option<&Separator> {
        match self {
            LineElement::Separator(separator) => Some(separator),
            LineElement::Token(_) => None,
        }
    }
}

/// One physical line of the source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotLine {
    line_number: u32,
    elements: Vec<LineElement>,
    end_of_line: EndOfLine,
    attached: bool,
}

impl RobotLine {
    pub fn new(line_number: u32) -> Self {
        RobotLine {
            line_number,
            elements: Vec::new(),
            end_of_line: EndOfLine::None,
            attached: false,
        }
    }

    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    #[inline]
    pub fn elements(&self) -> &[LineElement] {
        &self.elements
    }

    pub fn add_element(&mut self, element: LineElement) {
        self.elements.push(element);
    }

    pub fn add_token(&mut self, token: RobotToken) {
        self.elements.push(LineElement::Token(token));
    }

    pub fn add_separator(&mut self, separator: Separator) {
        self.elements.push(LineElement::Separator(separator));
    }

    pub fn tokens(&self) -> impl Iterator<Item = &RobotToken> {
        self.elements.iter().filter_map(LineElement::as_token)
    }

    pub fn separators(&self) -> impl Iterator<Item = &Separator> {
        self.elements.iter().filter_map(LineElement::as_separator)
    }

    #[inline]
    pub fn end_of_line(&self) -> EndOfLine {
        self.end_of_line
    }

    pub fn set_end_of_line(&mut self, eol: EndOfLine) {
        self.end_of_line = eol;
    }

    /// Whether any token of this line was attached to a model element.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn mark_attached(&mut self) {
        self.attached = true;
    }

    /// Whether the line has no content besides separators.
    pub fn is_blank(&self) -> bool {
        self.tokens().all(|t| t.text().trim().is_empty())
    }

    /// Source text of the line, without the terminator.
    pub fn text(&self) -> String {
        self.elements.iter().map(LineElement::text).collect()
    }

    /// Separator ending exactly where a token starting at `column` begins.
    pub fn separator_before(&self, column: u32) -> Option<&Separator> {
        self.separators().find(|s| s.end_column() == column)
    }

    /// Separator starting exactly where a token ending at `column` ends.
    pub fn separator_after(&self, column: u32) -> Option<&Separator> {
        self.separators().find(|s| s.start_column() == column)
    }

    /// Separator the line begins with, if any.
    pub fn leading_separator(&self) -> Option<&Separator> {
        self.elements.first().and_then(LineElement::as_separator)
    }

    /// Separator the line ends with, if any.
    pub fn trailing_separator(&self) -> Option<&Separator> {
        self.elements.last().and_then(LineElement::as_separator)
    }
}
