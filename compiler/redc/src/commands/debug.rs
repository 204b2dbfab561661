//! Debug commands: `lex` and `parse` for inspecting parser internals.

use std::fmt::Write as _;
use std::path::Path;

use red_ir::LineElement;
use red_lexer::{RecognizerChain, SeparatorBuilder};
use red_model::{ModelElement, RobotFileOutput, UnitKind};
use red_parse::ParserConfig;

use super::{load, read_text};
use crate::CliOptions;

/// Lex a file and display its cells with the types they could stand for.
pub fn lex_file(path: &Path, options: &CliOptions) -> bool {
    let Some(text) = read_text(path) else {
        return false;
    };
    print!("{}", lex_text(&text, options.parser_config(path)));
    true
}

/// Parse a file and display what the model holds.
pub fn parse_file(path: &Path, options: &CliOptions) -> bool {
    let Some(output) = load(path, options) else {
        return false;
    };
    println!("Parse result for '{}':", path.display());
    print!("{}", describe(&output));
    true
}

/// One line per cell: position, text and candidate types.
pub fn lex_text(text: &str, config: ParserConfig) -> String {
    let builder = SeparatorBuilder::new(config.format());
    let chain = RecognizerChain::for_version(config.version());
    let mut listing = String::new();
    let mut offset = 0u32;
    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let line = raw.trim_end_matches(['\r', '\n']);
        let separator = builder.create_separator(line_number, offset, line);
        for element in separator.split_line() {
            let LineElement::Token(token) = element else {
                continue;
            };
            let mut token = token.clone();
            chain.recognize(&mut token);
            let _ = writeln!(
                listing,
                "{line_number}:{} {:?} {:?}",
                token.start_column().unwrap_or_default(),
                token.text(),
                token.types()
            );
        }
        offset = offset.saturating_add(u32::try_from(raw.len()).unwrap_or(u32::MAX));
    }
    listing
}

/// Table by table summary of a parsed file.
pub fn describe(output: &RobotFileOutput) -> String {
    let file = output.file();
    let mut text = String::new();
    let _ = writeln!(text, "  Version: {}", file.version());
    let _ = writeln!(text, "  Lines: {}", file.lines().len());

    let settings = file.setting_table();
    if settings.is_present() {
        let _ = writeln!(text, "  Settings: {}", settings.elements().len());
        for element in settings.elements() {
            let tokens: Vec<&str> = ModelElement::element_tokens(element)
                .into_iter()
                .map(|token| token.text())
                .collect();
            let _ = writeln!(text, "    {:?}: {}", ModelElement::model_type(element), tokens.join(" | "));
        }
    }

    let variables = file.variable_table();
    if variables.is_present() {
        let _ = writeln!(text, "  Variables: {}", variables.variables().len());
        for variable in variables.variables() {
            let _ = writeln!(
                text,
                "    {:?} {} ({} values)",
                variable.kind(),
                variable.name(),
                variable.values().len()
            );
        }
    }

    for kind in [UnitKind::TestCase, UnitKind::Task, UnitKind::Keyword] {
        let table = file.unit_table(kind);
        if !table.is_present() {
            continue;
        }
        let _ = writeln!(text, "  {:?} units: {}", kind, table.units().len());
        for unit in table.units() {
            let _ = writeln!(
                text,
                "    {} ({} rows, {} settings)",
                unit.name().text(),
                unit.rows().count(),
                unit.settings().count()
            );
        }
    }

    let _ = writeln!(text, "  Messages: {}", output.build_messages().len());
    for message in output.build_messages() {
        let _ = writeln!(text, "    {message}");
    }
    text
}
