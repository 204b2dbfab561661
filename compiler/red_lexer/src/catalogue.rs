//! The recognizer catalogue.
//!
//! Most recognizers are derived from the spellings registered on
//! [`RobotTokenType`]: every spelling window becomes its own recognizer so
//! version gating follows the token vocabulary. Loop markers and variables
//! have hand-written patterns.
//!
//! Chain order: table headers, comments and continuation, settings table
//! declarations, local settings, loop markers, variables.

use std::sync::OnceLock;

use red_ir::{RobotToken, RobotTokenType, RobotVersion, TokenTable};
use regex::Regex;
use tracing::{trace, warn};

use crate::recognizer::{alternatives, Applicability, TokenRecognizer};

const HEADER_TYPES: [RobotTokenType; 6] = [
    RobotTokenType::SettingsTableHeader,
    RobotTokenType::VariablesTableHeader,
    RobotTokenType::TestCasesTableHeader,
    RobotTokenType::TasksTableHeader,
    RobotTokenType::KeywordsTableHeader,
    RobotTokenType::CommentsTableHeader,
];

/// Spellings of `ty` grouped by version window, in first-seen order.
fn spelling_windows(ty: RobotTokenType) -> Vec<(Applicability, Vec<&'static str>)> {
    let mut windows: Vec<(Applicability, Vec<&'static str>)> = Vec::new();
    for repr in ty.representations() {
        let window = Applicability::window(repr.available_since(), repr.removed_since());
        match windows.iter_mut().find(|(w, _)| *w == window) {
            Some((_, spellings)) => spellings.push(repr.text()),
            None => windows.push((window, vec![repr.text()])),
        }
    }
    windows
}

fn compile(name: &'static str, pattern: &str, ty: RobotTokenType) -> Option<TokenRecognizer> {
    match Regex::new(pattern) {
        Ok(regex) => Some(TokenRecognizer::new(name, regex, ty)),
        Err(err) => {
            warn!(recognizer = name, %err, "recognizer pattern rejected");
            None
        }
    }
}

fn header_recognizers(out: &mut Vec<TokenRecognizer>) {
    for ty in HEADER_TYPES {
        for (window, spellings) in spelling_windows(ty) {
            let pattern = format!(
                r"(?i)^[ ]?(?:[*]\s*)+\s*{}(?:\s*[*])*",
                alternatives(spellings.iter().copied())
            );
            if let Some(recognizer) = compile("table header", &pattern, ty) {
                let recognizer = recognizer.with_applicability(window);
                // Legacy header spellings must not be tagged twice.
                let recognizer = if matches!(window, Applicability::Before(_)) {
                    recognizer.exclusive()
                } else {
                    recognizer
                };
                out.push(recognizer);
            }
        }
    }
}

fn declaration_recognizers(out: &mut Vec<TokenRecognizer>, table: TokenTable) {
    let bracketed = table != TokenTable::Settings;
    for ty in RobotTokenType::types_for_table(table).filter(|ty| ty.is_setting_declaration()) {
        for (window, spellings) in spelling_windows(ty) {
            let pattern = if bracketed {
                let inner = spellings
                    .iter()
                    .map(|s| s.trim_start_matches('[').trim_end_matches(']'));
                format!(r"(?i)^[ ]?\[\s*{}\s*\]\s*$", alternatives(inner))
            } else {
                format!(r"(?i)^[ ]?{}\s*$", alternatives(spellings.iter().copied()))
            };
            if let Some(recognizer) = compile("setting declaration", &pattern, ty) {
                out.push(recognizer.with_applicability(window));
            }
        }
    }
}

fn fixed(
    out: &mut Vec<TokenRecognizer>,
    name: &'static str,
    pattern: &str,
    ty: RobotTokenType,
    window: Applicability,
) {
    if let Some(recognizer) = compile(name, pattern, ty) {
        out.push(recognizer.with_applicability(window));
    }
}

fn build_catalogue() -> Vec<TokenRecognizer> {
    let mut out = Vec::new();
    header_recognizers(&mut out);

    fixed(&mut out, "comment", r"^\s*#", RobotTokenType::Comment, Applicability::Always);
    fixed(
        &mut out,
        "previous line continue",
        r"^\s*\.\.\.\s*$",
        RobotTokenType::PreviousLineContinue,
        Applicability::Always,
    );

    declaration_recognizers(&mut out, TokenTable::Settings);
    fixed(
        &mut out,
        "library alias",
        r"(?i)^\s*WITH\s+NAME\s*$",
        RobotTokenType::SettingLibraryAlias,
        Applicability::Always,
    );
    declaration_recognizers(&mut out, TokenTable::TestCases);
    declaration_recognizers(&mut out, TokenTable::Tasks);
    declaration_recognizers(&mut out, TokenTable::Keywords);

    fixed(
        &mut out,
        "for",
        r"(?i)^\s*:\s*FOR\s*$",
        RobotTokenType::ForToken,
        Applicability::Always,
    );
    fixed(
        &mut out,
        "for",
        r"^\s*FOR\s*$",
        RobotTokenType::ForToken,
        Applicability::Since(RobotVersion::V3_1),
    );
    fixed(
        &mut out,
        "for in",
        r"^\s*IN(?:\s+RANGE)?\s*$",
        RobotTokenType::InToken,
        Applicability::Always,
    );
    fixed(
        &mut out,
        "for in",
        r"^\s*IN\s+(?:ENUMERATE|ZIP)\s*$",
        RobotTokenType::InToken,
        Applicability::Since(RobotVersion::V2_9),
    );
    fixed(
        &mut out,
        "for continue",
        r"^\s*\\\s*$",
        RobotTokenType::ForContinueToken,
        Applicability::Always,
    );
    fixed(
        &mut out,
        "for end",
        r"^\s*END\s*$",
        RobotTokenType::ForEndToken,
        Applicability::Since(RobotVersion::V3_1),
    );

    for (name, sigil, ty) in [
        ("scalar declaration", r"\$", RobotTokenType::VariablesScalarDeclaration),
        ("list declaration", "@", RobotTokenType::VariablesListDeclaration),
        ("dictionary declaration", "&", RobotTokenType::VariablesDictionaryDeclaration),
        ("environment declaration", "%", RobotTokenType::VariablesEnvironmentDeclaration),
    ] {
        let pattern = format!(r"^\s*{sigil}\{{.*\}}\s*=?\s*$");
        fixed(&mut out, name, &pattern, ty, Applicability::Always);
    }
    fixed(
        &mut out,
        "variable usage",
        r"^.*?[$@&%]\{",
        RobotTokenType::VariableUsage,
        Applicability::Always,
    );

    trace!(recognizers = out.len(), "built recognizer catalogue");
    out
}

/// Every recognizer, regardless of version.
pub fn catalogue() -> &'static [TokenRecognizer] {
    static CATALOGUE: OnceLock<Vec<TokenRecognizer>> = OnceLock::new();
    CATALOGUE.get_or_init(build_catalogue)
}

/// Fresh recognizers applicable to `version`, in chain order.
pub fn recognizers_for(version: RobotVersion) -> Vec<TokenRecognizer> {
    catalogue()
        .iter()
        .filter(|r| r.is_applicable_for(version))
        .map(TokenRecognizer::new_instance)
        .collect()
}

/// The version-filtered recognizer chain used while reading a file.
#[derive(Clone, Debug)]
pub struct RecognizerChain {
    version: RobotVersion,
    recognizers: Vec<TokenRecognizer>,
}

impl RecognizerChain {
    pub fn for_version(version: RobotVersion) -> Self {
        RecognizerChain {
            version,
            recognizers: recognizers_for(version),
        }
    }

    #[inline]
    pub fn version(&self) -> RobotVersion {
        self.version
    }

    pub fn recognizers(&self) -> &[TokenRecognizer] {
        &self.recognizers
    }

    /// Tags `token` with every type the chain recognizes in its text.
    ///
    /// The scanner's `Unknown` tag is dropped once anything matched. Returns
    /// whether any recognizer matched.
    pub fn recognize(&self, token: &mut RobotToken) -> bool {
        let mut matched = false;
        for recognizer in &self.recognizers {
            if recognizer.match_length(token.text()).is_none() {
                continue;
            }
            if !matched {
                token.remove_type(RobotTokenType::Unknown);
                matched = true;
            }
            token.add_type(recognizer.produced_type());
            trace!(text = token.text(), recognizer = recognizer.name(), "recognized");
            if !recognizer.should_continue_with_other_recognizers() {
                break;
            }
        }
        matched
    }

    /// Header type and matched length when `text` starts with a table header.
    pub fn header_prefix(&self, text: &str) -> Option<(RobotTokenType, usize)> {
        self.recognizers
            .iter()
            .filter(|r| r.produced_type().is_table_header())
            .find_map(|r| r.match_length(text).map(|len| (r.produced_type(), len)))
    }
}
