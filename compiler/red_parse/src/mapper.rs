//! The element mapper contract.
//!
//! A mapper owns one construct of the grammar. Given the state stack, the
//! model built so far and a recognized cell, it decides whether the cell is
//! its business ([`ElementMapper::can_map`]) and, if so, types the cell,
//! attaches it to the model and pushes the state describing what it read
//! ([`ElementMapper::map`]).
//!
//! The registry asks mappers in a fixed order and the first one that accepts
//! a cell wins. Predicates are written to be mutually exclusive, so the order
//! only matters for speed; the self-check verifies that on a sample corpus.

use red_diagnostic::{BuildMessage, SettingsProblem};
use red_ir::{RobotToken, RobotTokenType, RobotVersion, TokenTable};
use red_lexer::Applicability;
use red_model::{RobotFileOutput, UnitKind};

use crate::{ParsingContext, ParsingState};

/// One construct of the grammar.
pub trait ElementMapper: Send + Sync {
    /// Name used in traces and self-check reports.
    fn name(&self) -> &'static str;

    /// Robot Framework versions this mapper belongs to.
    fn applicability(&self) -> Applicability {
        Applicability::Always
    }

    fn is_applicable_for(&self, version: RobotVersion) -> bool {
        self.applicability().contains(version)
    }

    /// Whether `token`, read in `context`, belongs to this mapper.
    fn can_map(&self, output: &RobotFileOutput, context: &ParsingContext, token: &RobotToken)
        -> bool;

    /// Attaches `token` to the model and returns the typed copy kept on the
    /// physical line.
    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken;
}

/// A cell that is neither a comment nor part of one.
pub(crate) fn is_data_cell(context: &ParsingContext, token: &RobotToken) -> bool {
    !token.is_comment_text() && context.top() != ParsingState::Comment
}

pub(crate) fn is_continuation(token: &RobotToken) -> bool {
    token.text().trim() == "..."
}

/// A line starting with `*` in its first column is a table header, whether
/// or not the table is known.
pub(crate) fn is_header_candidate(context: &ParsingContext, token: &RobotToken) -> bool {
    context.is_first_cell() && !context.is_indented() && token.text().trim_start().starts_with('*')
}

/// First cell of a line that starts something new inside the current table.
pub(crate) fn opens_line(context: &ParsingContext, token: &RobotToken) -> bool {
    context.is_first_cell()
        && is_data_cell(context, token)
        && !is_continuation(token)
        && !is_header_candidate(context, token)
}

pub(crate) fn top_is(context: &ParsingContext, states: &[ParsingState]) -> bool {
    states.contains(&context.top())
}

pub(crate) fn unit_kind(table: Option<TokenTable>) -> Option<UnitKind> {
    match table? {
        TokenTable::TestCases => Some(UnitKind::TestCase),
        TokenTable::Tasks => Some(UnitKind::Task),
        TokenTable::Keywords => Some(UnitKind::Keyword),
        _ => None,
    }
}

/// Index of the last unit of `kind`, if any.
pub(crate) fn last_unit(output: &RobotFileOutput, kind: UnitKind) -> Option<usize> {
    output.file().unit_table(kind).units().len().checked_sub(1)
}

/// `token` as a comment cell.
pub(crate) fn commented(mut token: RobotToken) -> RobotToken {
    token.remove_type(RobotTokenType::Unknown);
    token.insert_type_first(RobotTokenType::Comment);
    token
}

/// Warning for a declaration spelled in a way `version` discourages.
pub(crate) fn deprecation_message(
    ty: RobotTokenType,
    token: &RobotToken,
    version: RobotVersion,
) -> Option<BuildMessage> {
    let used = token.text().trim();
    let representation = ty.find_representation(used)?;
    if !representation.is_deprecated_in(version) {
        return None;
    }
    Some(BuildMessage::at_token(
        SettingsProblem::DeprecatedDeclaration {
            used: used.to_string(),
            replacement: replacement(ty, version),
        },
        token,
    ))
}

/// Message for a declaration no setting of `version` accepts.
///
/// `ty` is the declaration the text spells in some version; a spelling that
/// was removed by `version` is reported as such, anything else as unknown.
pub(crate) fn unavailable_message(
    ty: RobotTokenType,
    token: &RobotToken,
    version: RobotVersion,
) -> BuildMessage {
    let used = token.text().trim();
    let removed = ty
        .find_representation(used)
        .and_then(|repr| repr.removed_since())
        .is_some_and(|removed| version >= removed);
    if removed {
        BuildMessage::at_token(
            SettingsProblem::RemovedDeclaration {
                used: used.to_string(),
                replacement: replacement(ty, version),
            },
            token,
        )
    } else {
        BuildMessage::at_token(
            SettingsProblem::UnknownSetting {
                name: used.to_string(),
            },
            token,
        )
    }
}

fn replacement(ty: RobotTokenType, version: RobotVersion) -> String {
    ty.most_correct_representation(version)
        .map_or_else(String::new, |repr| repr.text().to_string())
}
