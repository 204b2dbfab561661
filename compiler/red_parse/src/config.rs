//! Parser configuration.

use std::path::Path;

use red_ir::{FileFormat, RobotVersion};

/// What grammar to read a file with.
///
/// The Robot Framework version selects recognizers and mappers; the format
/// selects how lines are split into cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    version: RobotVersion,
    format: FileFormat,
}

impl ParserConfig {
    pub fn new(version: RobotVersion, format: FileFormat) -> Self {
        ParserConfig { version, format }
    }

    /// Default version, format taken from the extension of `path`.
    pub fn for_path(path: &Path) -> Self {
        ParserConfig::default().with_format(FileFormat::from_path(path))
    }

    #[must_use]
    pub fn with_version(mut self, version: RobotVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    pub fn version(&self) -> RobotVersion {
        self.version
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }
}
