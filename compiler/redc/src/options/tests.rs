use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use red_ir::{FileFormat, RobotVersion};
use red_lexer::SeparatorStyle;

use super::{CliOptions, OptionsError};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn flags_and_paths_mix() {
    let options = CliOptions::parse(&args(&[
        "a.robot",
        "--rf-version",
        "3.0.4",
        "--pipes",
        "b.tsv",
        "-o",
        "out.robot",
    ]))
    .unwrap();
    assert_eq!(
        options,
        CliOptions {
            version: Some(RobotVersion::with_patch(3, 0, 4)),
            format: None,
            pipes: true,
            output: Some(PathBuf::from("out.robot")),
            paths: vec![PathBuf::from("a.robot"), PathBuf::from("b.tsv")],
        }
    );
}

#[test]
fn inline_values_are_accepted() {
    let options = CliOptions::parse(&args(&["--format=TSV", "--rf-version=2.9"])).unwrap();
    assert_eq!(options.format, Some(FileFormat::Tsv));
    assert_eq!(options.version, Some(RobotVersion::new(2, 9)));
}

#[test]
fn bad_options_are_reported() {
    assert_eq!(
        CliOptions::parse(&args(&["--format"])),
        Err(OptionsError::MissingValue("--format".to_string()))
    );
    assert_eq!(
        CliOptions::parse(&args(&["--format", "xml"])),
        Err(OptionsError::UnknownFormat("xml".to_string()))
    );
    assert!(matches!(
        CliOptions::parse(&args(&["--rf-version", "x"])),
        Err(OptionsError::InvalidVersion(_))
    ));
    assert_eq!(
        CliOptions::parse(&args(&["--verbose"])),
        Err(OptionsError::UnknownOption("--verbose".to_string()))
    );
}

#[test]
fn format_follows_the_path_unless_forced() {
    let options = CliOptions::default();
    assert_eq!(options.parser_config(Path::new("suite.tsv")).format(), FileFormat::Tsv);
    assert_eq!(options.parser_config(Path::new("suite.robot")).format(), FileFormat::TxtOrRobot);

    let forced = CliOptions {
        format: Some(FileFormat::TxtOrRobot),
        version: Some(RobotVersion::new(3, 0)),
        ..CliOptions::default()
    };
    let config = forced.parser_config(Path::new("suite.tsv"));
    assert_eq!(config.format(), FileFormat::TxtOrRobot);
    assert_eq!(config.version(), RobotVersion::new(3, 0));
}

#[test]
fn pipes_restyle_the_dump() {
    let config = CliOptions {
        pipes: true,
        ..CliOptions::default()
    }
    .dump_config();
    assert_eq!(config.separator_style(), Some(SeparatorStyle::Pipe));
    assert!(config.restyle());
    assert_eq!(CliOptions::default().dump_config().separator_style(), None);
}
