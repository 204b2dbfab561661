#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Commands driven the way the `red` binary drives them.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use redc::commands::{check_files, dump_file, lex_file, parse_file};
use redc::CliOptions;
use tempfile::tempdir;

const SUITE: &str = "\
*** Settings ***
Library    Collections

*** Test Cases ***
Example
    Log    hello
";

fn scratch(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn options(args: &[&str]) -> CliOptions {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    CliOptions::parse(&args).unwrap()
}

#[test]
fn dump_writes_the_source_back() {
    let dir = tempdir().unwrap();
    let source = scratch(dir.path(), "dump.robot", SUITE);
    let target = source.with_file_name("dump.out.robot");
    let options = options(&[source.to_str().unwrap(), "-o", target.to_str().unwrap()]);

    assert!(dump_file(&options.paths[0], &options));
    assert_eq!(fs::read_to_string(&target).unwrap(), SUITE);
}

#[test]
fn pipes_restyle_every_line() {
    let dir = tempdir().unwrap();
    let source = scratch(dir.path(), "pipes.robot", SUITE);
    let target = source.with_file_name("pipes.out.robot");
    let options = options(&["--pipes", source.to_str().unwrap(), "--output", target.to_str().unwrap()]);

    assert!(dump_file(&options.paths[0], &options));
    let dumped = fs::read_to_string(&target).unwrap();
    assert!(dumped.contains("| Library | Collections"));
    assert!(dumped.contains("| Example"));
}

#[test]
fn check_accepts_clean_files_and_rejects_broken_ones() {
    let dir = tempdir().unwrap();
    let clean = scratch(dir.path(), "clean.robot", SUITE);
    let broken = scratch(dir.path(), "broken.robot", "*** Settings ***\nFrobnicate    x\n");

    assert!(check_files(&[clean.clone()], &options(&[])));
    assert!(!check_files(&[clean, broken], &options(&[])));
}

#[test]
fn missing_files_fail() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.robot");
    let options = options(&[missing.to_str().unwrap()]);

    assert!(!lex_file(&missing, &options));
    assert!(!parse_file(&missing, &options));
    assert!(!dump_file(&missing, &options));
    assert!(!check_files(&options.paths, &options));
}
