//! Command line options shared by every command.

use std::path::{Path, PathBuf};

use red_fmt::DumpConfig;
use red_ir::{FileFormat, RobotVersion, VersionParseError};
use red_lexer::SeparatorStyle;
use red_parse::ParserConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("missing value for `{0}`")]
    MissingValue(String),

    #[error("invalid Robot Framework version: {0}")]
    InvalidVersion(#[from] VersionParseError),

    #[error("unknown format `{0}`, expected `robot` or `tsv`")]
    UnknownFormat(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Options after the command name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--rf-version <x.y[.z]>`
    pub version: Option<RobotVersion>,
    /// `--format <robot|tsv>`; otherwise taken from each file's extension.
    pub format: Option<FileFormat>,
    /// `--pipes`: dump every line with pipe separators.
    pub pipes: bool,
    /// `-o <path>`: where `dump` writes instead of stdout.
    pub output: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
}

impl CliOptions {
    /// Reads `args`; flags and paths may come in any order.
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut options = CliOptions::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_str();
            let mut value = |flag: &str| {
                args.next()
                    .cloned()
                    .ok_or_else(|| OptionsError::MissingValue(flag.to_string()))
            };
            match arg {
                "--rf-version" => options.version = Some(value(arg)?.parse()?),
                "--format" => options.format = Some(parse_format(&value(arg)?)?),
                "--pipes" => options.pipes = true,
                "-o" | "--output" => options.output = Some(PathBuf::from(value(arg)?)),
                flag if flag.starts_with('-') => {
                    if let Some(version) = flag.strip_prefix("--rf-version=") {
                        options.version = Some(version.parse()?);
                    } else if let Some(format) = flag.strip_prefix("--format=") {
                        options.format = Some(parse_format(format)?);
                    } else {
                        return Err(OptionsError::UnknownOption(flag.to_string()));
                    }
                }
                path => options.paths.push(PathBuf::from(path)),
            }
        }
        Ok(options)
    }

    /// Parser settings for `path`.
    pub fn parser_config(&self, path: &Path) -> ParserConfig {
        let mut config = ParserConfig::for_path(path);
        if let Some(version) = self.version {
            config = config.with_version(version);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        config
    }

    pub fn dump_config(&self) -> DumpConfig {
        if self.pipes {
            DumpConfig::default()
                .with_separator_style(SeparatorStyle::Pipe)
                .with_restyle(true)
        } else {
            DumpConfig::default()
        }
    }
}

fn parse_format(text: &str) -> Result<FileFormat, OptionsError> {
    match text.to_ascii_lowercase().as_str() {
        "robot" | "txt" | "resource" => Ok(FileFormat::TxtOrRobot),
        "tsv" => Ok(FileFormat::Tsv),
        _ => Err(OptionsError::UnknownFormat(text.to_string())),
    }
}

#[cfg(test)]
mod tests;
