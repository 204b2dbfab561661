//! Mappers that apply in every table: headers, comments, continuation and
//! the catch-alls that keep unexpected cells.

use red_diagnostic::{BuildMessage, SettingsProblem};
use red_ir::{RobotToken, RobotTokenType};
use red_model::{tagged, ElementPath, RobotExecutableRow, RobotFileOutput, TableHeader};
use tracing::debug;

use crate::mapper::{
    commented, is_continuation, is_data_cell, is_header_candidate, last_unit, unit_kind,
    ElementMapper,
};
use crate::{ParsingContext, ParsingState};

/// `*** Settings ***` and any other first-column cell starting with `*`.
pub(crate) struct TableHeaderMapper;

impl ElementMapper for TableHeaderMapper {
    fn name(&self) -> &'static str {
        "table header"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        is_header_candidate(context, token)
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let ty = token
            .types()
            .iter()
            .copied()
            .find(|ty| ty.is_table_header())
            .unwrap_or(RobotTokenType::UserOwnTableHeader);
        if let Some(message) = deprecated_header(ty, &token, context) {
            output.add_build_message(message);
        }

        let token = tagged(token, ty);
        let header = TableHeader::new(token.clone());
        let table = header.table();
        let headers = output.file_mut().headers_mut(table);
        headers.push(header);
        let index = headers.len() - 1;

        debug!(line = context.line_number(), ?ty, "table header");
        context.enter_table(ParsingState::header_of(table));
        context.attach(ElementPath::Header { table, index });
        token
    }
}

fn deprecated_header(
    ty: RobotTokenType,
    token: &RobotToken,
    context: &ParsingContext,
) -> Option<BuildMessage> {
    let name = token
        .text()
        .trim_matches(|c: char| c == '*' || c.is_whitespace());
    let representation = ty.find_representation(name)?;
    if !representation.is_deprecated_in(context.version()) {
        return None;
    }
    let replacement = ty
        .most_correct_representation(context.version())
        .map_or("", |repr| repr.text());
    Some(BuildMessage::at_token(
        SettingsProblem::DeprecatedTableHeader {
            used: name.to_string(),
            replacement: replacement.to_string(),
        },
        token,
    ))
}

/// Anything before the first table header.
pub(crate) struct GarbageBeforeFirstTableMapper;

impl ElementMapper for GarbageBeforeFirstTableMapper {
    fn name(&self) -> &'static str {
        "garbage before first table"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        context.table().is_none() && !is_header_candidate(context, token)
    }

    fn map(&self, _: &mut RobotFileOutput, _: &mut ParsingContext, mut token: RobotToken) -> RobotToken {
        if token.is_comment_text() {
            token.set_type(RobotTokenType::Comment);
        } else {
            token.set_type(RobotTokenType::Unknown);
        }
        token
    }
}

/// Extra cells on a header line.
pub(crate) struct TableHeaderColumnMapper;

impl ElementMapper for TableHeaderColumnMapper {
    fn name(&self) -> &'static str {
        "table header column"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        context.is_header_line() && !token.is_comment_text()
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let token = tagged(token, RobotTokenType::TableHeaderColumn);
        if let Some(ElementPath::Header { table, index }) = context.current() {
            if let Some(header) = output.file_mut().headers_mut(table).get_mut(index) {
                header.add_column(token.clone());
                context.mark_attached();
            }
        }
        context.push(ParsingState::TableHeaderColumn);
        token
    }
}

/// Body of `*** Comments ***` and of tables Robot Framework does not know.
pub(crate) struct CommentTableContentMapper;

impl ElementMapper for CommentTableContentMapper {
    fn name(&self) -> &'static str {
        "comment table content"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        context.top() == ParsingState::CommentTableInside && !is_header_candidate(context, token)
    }

    fn map(&self, _: &mut RobotFileOutput, _: &mut ParsingContext, mut token: RobotToken) -> RobotToken {
        token.remove_type(RobotTokenType::Unknown);
        token.insert_type_first(RobotTokenType::CommentsTableInnerToken);
        token
    }
}

/// `#` cells and everything after them on the line.
///
/// A comment opening an indented line of a test, task or keyword body is a
/// commented step; a trailing comment belongs to the element of its line; a
/// comment on a line of its own elsewhere belongs to nothing.
pub(crate) struct CommentMapper;

impl ElementMapper for CommentMapper {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        context.table().is_some()
            && context.top() != ParsingState::CommentTableInside
            && !is_data_cell(context, token)
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let mut token = commented(token);
        if context.is_first_cell() {
            if context.is_indented() {
                if let Some(row) = commented_row(output, context, &token) {
                    token = row;
                }
            }
        } else if let Some(path) = context.current() {
            if let Some(holder) = output.file_mut().comment_holder_mut(path) {
                holder.add_comment_part(token.clone());
                context.mark_attached();
            }
        }
        context.push(ParsingState::Comment);
        token
    }
}

fn commented_row(
    output: &mut RobotFileOutput,
    context: &mut ParsingContext,
    token: &RobotToken,
) -> Option<RobotToken> {
    let kind = unit_kind(context.table())?;
    let unit = last_unit(output, kind)?;
    let action = tagged(token.clone(), kind.action_type());
    let body = output.file_mut().unit_table_mut(kind).units_mut().get_mut(unit)?;
    body.add_row(RobotExecutableRow::with_action(kind, action.clone()));
    let element = body.elements().len() - 1;
    context.attach(ElementPath::UnitElement {
        kind,
        unit,
        element,
    });
    Some(action)
}

/// A `...` opening a line: the line continues the last line holding data.
pub(crate) struct PreviousLineContinueMapper;

impl ElementMapper for PreviousLineContinueMapper {
    fn name(&self) -> &'static str {
        "previous line continue"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        context.is_first_cell()
            && is_continuation(token)
            && context.table().is_some()
            && context.top() != ParsingState::CommentTableInside
    }

    fn map(&self, _: &mut RobotFileOutput, context: &mut ParsingContext, mut token: RobotToken) -> RobotToken {
        token.remove_type(RobotTokenType::Unknown);
        token.insert_type_first(RobotTokenType::PreviousLineContinue);
        let restored = context.continue_previous_line();
        if !restored || (context.stack().len() == 1 && !context.is_header_line()) {
            context.detach();
            context.push(ParsingState::Trash);
        }
        token
    }
}

/// Cells following something that cannot take them.
pub(crate) struct TrashMapper;

impl ElementMapper for TrashMapper {
    fn name(&self) -> &'static str {
        "trash"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        context.top() == ParsingState::Trash && !token.is_comment_text()
    }

    fn map(&self, _: &mut RobotFileOutput, context: &mut ParsingContext, token: RobotToken) -> RobotToken {
        context.detach();
        context.push(ParsingState::Trash);
        token
    }
}
