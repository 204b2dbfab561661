//! Source positions.

use std::fmt;

/// Position of a token or separator in a source file.
///
/// `line` is 1-based; `column` is the 0-based byte column within the line and
/// `offset` the 0-based byte offset from the start of the file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FilePosition {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl FilePosition {
    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        FilePosition {
            line,
            column,
            offset,
        }
    }

    /// Whether `self` appears strictly before `other` in the file.
    #[inline]
    pub fn is_before(self, other: FilePosition) -> bool {
        (self.line, self.column) < (other.line, other.column)
    }

    /// Whether `self` appears strictly after `other` in the file.
    #[inline]
    pub fn is_after(self, other: FilePosition) -> bool {
        (self.line, self.column) > (other.line, other.column)
    }
}

impl PartialOrd for FilePosition {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilePosition {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.line, self.column, self.offset).cmp(&(other.line, other.column, other.offset))
    }
}

impl fmt::Display for FilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
