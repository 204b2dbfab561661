#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Property-based tests for the dumper.
//!
//! Any text read into a model and dumped again comes back byte for byte,
//! whatever the grammar made of it.

use proptest::prelude::*;
use red_fmt::{DumpConfig, RobotDumper};
use red_ir::{FileFormat, RobotToken, RobotVersion};
use red_lexer::SeparatorStyle;
use red_model::{ImportKind, RobotFile};
use red_parse::{ParserConfig, RobotParser};

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Log".to_string()),
        Just("...".to_string()),
        Just("\\".to_string()),
        Just(":FOR".to_string()),
        Just("FOR".to_string()),
        Just("IN".to_string()),
        Just("END".to_string()),
        Just("WITH NAME".to_string()),
        Just("[Setup]".to_string()),
        Just("[Documentation]".to_string()),
        Just("# note".to_string()),
        Just("${var}".to_string()),
        Just("&{dict}".to_string()),
        Just("Library".to_string()),
        Just("Documentation".to_string()),
        Just("Suite Setup".to_string()),
        prop::string::string_regex("[a-z][a-z0-9]{0,8}").unwrap(),
    ]
}

fn line() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("    "), Just("  "), Just("\t"), Just("| ")],
        prop::collection::vec(cell(), 0..5),
        prop_oneof![Just(""), Just("  "), Just(" |")],
    )
        .prop_map(|(indent, cells, tail)| {
            let separator = if indent == "| " { " | " } else { "    " };
            let tail = if cells.is_empty() { "" } else { tail };
            format!("{indent}{}{tail}", cells.join(separator))
        })
}

fn suite() -> impl Strategy<Value = String> {
    let header = prop_oneof![
        Just("*** Settings ***"),
        Just("*** Variables ***"),
        Just("*** Test Cases ***"),
        Just("*** Tasks ***"),
        Just("*** Keywords ***"),
        Just("*** Comments ***"),
    ];
    let eol = prop_oneof![Just("\n"), Just("\r\n")];
    (
        prop::collection::vec((header, prop::collection::vec(line(), 0..8)), 1..4),
        eol,
    )
        .prop_map(|(tables, eol)| {
            let mut text = String::new();
            for (header, lines) in tables {
                text.push_str(header);
                text.push_str(eol);
                for line in lines {
                    text.push_str(&line);
                    text.push_str(eol);
                }
            }
            text
        })
}

fn version() -> impl Strategy<Value = RobotVersion> {
    prop_oneof![
        Just(RobotVersion::V2_9),
        Just(RobotVersion::V3_0),
        Just(RobotVersion::V3_1),
        Just(RobotVersion::V3_2),
    ]
}

fn parse(version: RobotVersion, text: &str) -> RobotFile {
    RobotParser::new(ParserConfig::new(version, FileFormat::TxtOrRobot))
        .parse_str(text)
        .unwrap()
        .into_file()
}

proptest! {
    #[test]
    fn dump_of_a_parsed_file_is_its_source(text in suite(), version in version()) {
        let file = parse(version, &text);
        prop_assert_eq!(red_fmt::dump(&file), text);
    }

    #[test]
    fn dump_of_an_edited_file_is_stable(
        text in suite(),
        version in version(),
        name in "[A-Z][a-z]{1,8}",
        pipes in any::<bool>(),
    ) {
        let mut file = parse(version, &text);
        file.setting_table_mut()
            .new_import(ImportKind::Library)
            .set_path_or_name(RobotToken::create(name.as_str()));
        let style = if pipes { SeparatorStyle::Pipe } else { SeparatorStyle::Whitespace };
        let dumper = RobotDumper::new(DumpConfig::default().with_separator_style(style));

        let once = dumper.dump(&file);
        prop_assert!(once.contains(name.as_str()));
        let twice = dumper.dump(&parse(version, &once));
        prop_assert_eq!(twice, once);
    }
}
