//! Dump configuration.

use red_ir::{EndOfLine, FileFormat, RobotLine, SeparatorType};
use red_lexer::SeparatorStyle;
use red_model::RobotFile;

/// Spaces between two cells of a new space separated line.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 4;

/// Fewest spaces that still separate two cells.
const MIN_SEPARATOR_WIDTH: usize = 2;

/// How the dumper writes lines it has to produce itself.
///
/// Lines read from the file keep their own layout unless `restyle` is set.
/// Without an explicit separator style, new lines follow the file: tabs for
/// TSV, pipes when the file is written with pipes, spaces otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DumpConfig {
    separator_style: Option<SeparatorStyle>,
    default_eol: Option<EndOfLine>,
    separator_width: usize,
    restyle: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            separator_style: None,
            default_eol: None,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            restyle: false,
        }
    }
}

impl DumpConfig {
    /// Configuration writing new lines in the native style of `format`.
    pub fn for_format(format: FileFormat) -> Self {
        let style = match format {
            FileFormat::TxtOrRobot => SeparatorStyle::Whitespace,
            FileFormat::Tsv => SeparatorStyle::Tabulator,
        };
        DumpConfig::default().with_separator_style(style)
    }

    #[must_use]
    pub fn with_separator_style(mut self, style: SeparatorStyle) -> Self {
        self.separator_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_default_eol(mut self, eol: EndOfLine) -> Self {
        self.default_eol = Some(eol);
        self
    }

    /// Spaces between cells of new space separated lines; at least two.
    #[must_use]
    pub fn with_separator_width(mut self, width: usize) -> Self {
        self.separator_width = width.max(MIN_SEPARATOR_WIDTH);
        self
    }

    /// Rewrites every line holding model cells in the configured style.
    #[must_use]
    pub fn with_restyle(mut self, restyle: bool) -> Self {
        self.restyle = restyle;
        self
    }

    pub fn separator_style(&self) -> Option<SeparatorStyle> {
        self.separator_style
    }

    pub fn default_eol(&self) -> Option<EndOfLine> {
        self.default_eol
    }

    pub fn separator_width(&self) -> usize {
        self.separator_width
    }

    pub fn restyle(&self) -> bool {
        self.restyle
    }

    /// Style of the lines written from scratch into `file`.
    pub fn style_for(&self, file: &RobotFile) -> SeparatorStyle {
        if let Some(style) = self.separator_style {
            return style;
        }
        match file.format() {
            FileFormat::Tsv => SeparatorStyle::Tabulator,
            FileFormat::TxtOrRobot => {
                let first_split = file
                    .lines()
                    .iter()
                    .find(|line| line.separators().next().is_some());
                if first_split.is_some_and(is_pipe_line) {
                    SeparatorStyle::Pipe
                } else {
                    SeparatorStyle::Whitespace
                }
            }
        }
    }

    /// Terminator of new lines: the configured one, else the first one of
    /// the file, else `\n`.
    pub fn eol_for(&self, file: &RobotFile) -> EndOfLine {
        self.default_eol.unwrap_or_else(|| {
            file.lines()
                .iter()
                .map(RobotLine::end_of_line)
                .find(|eol| *eol != EndOfLine::None)
                .unwrap_or_default()
        })
    }

    /// Text between two cells of a line in `style`.
    pub fn separator(&self, style: SeparatorStyle) -> String {
        match style {
            SeparatorStyle::Whitespace => " ".repeat(self.separator_width),
            SeparatorStyle::Pipe => " | ".to_string(),
            SeparatorStyle::Tabulator => "\t".to_string(),
        }
    }
}

pub(crate) fn is_pipe_line(line: &RobotLine) -> bool {
    line.separators()
        .any(|separator| separator.kind() == SeparatorType::Pipe)
}
