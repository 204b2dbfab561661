//! Supported file formats.

use std::path::Path;

/// Format family of a suite or resource file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    /// `.robot`, `.txt` and `.resource` files: space or pipe separated.
    #[default]
    TxtOrRobot,
    /// Tab separated values.
    Tsv,
}

impl FileFormat {
    /// Format implied by a file extension; anything but `tsv` is plain text.
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case("tsv") {
            FileFormat::Tsv
        } else {
            FileFormat::TxtOrRobot
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(FileFormat::TxtOrRobot, FileFormat::from_extension)
    }

    /// Extension written for new files of this format.
    pub const fn extension(self) -> &'static str {
        match self {
            FileFormat::TxtOrRobot => "robot",
            FileFormat::Tsv => "tsv",
        }
    }
}
