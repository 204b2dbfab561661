//! Loop fixes in test case, task and keyword bodies.

use red_diagnostic::{BuildMessage, KeywordsProblem};
use red_ir::RobotTokenType;
use red_model::{
    is_for_continue, is_for_declaration, is_for_end, CommentHolder, ExecutableUnit,
    RobotExecutableRow, RobotFileOutput, UnitElement, UnitKind,
};
use tracing::trace;

const KINDS: [UnitKind; 3] = [UnitKind::TestCase, UnitKind::Task, UnitKind::Keyword];

fn is_escape(row: &RobotExecutableRow) -> bool {
    row.action().text().trim() == "\\"
}

/// `\    ...    more` continues the loop step above it.
fn continues_loop_step(row: &RobotExecutableRow) -> bool {
    is_escape(row)
        && row
            .arguments()
            .first()
            .is_some_and(|first| first.text().trim() == "...")
}

/// Moves the cells of `\ ...` rows into the step they continue.
pub(crate) fn merge_continued_loop_steps(output: &mut RobotFileOutput) {
    for kind in KINDS {
        for unit in output.file_mut().unit_table_mut(kind).units_mut() {
            merge_in_unit(unit);
        }
    }
}

fn merge_in_unit(unit: &mut ExecutableUnit) {
    let elements = unit.elements_mut();
    let mut index = 0;
    let mut previous: Option<usize> = None;
    while index < elements.len() {
        let continued = elements[index]
            .as_row()
            .is_some_and(continues_loop_step);
        if let (true, Some(target)) = (continued, previous) {
            if let UnitElement::Row(row) = elements.remove(index) {
                append_continuation(&mut elements[target], row);
            }
            continue;
        }
        if elements[index]
            .as_row()
            .is_some_and(|row| !row.is_commented())
        {
            previous = Some(index);
        }
        index += 1;
    }
}

fn append_continuation(target: &mut UnitElement, row: RobotExecutableRow) {
    let Some(target) = target.as_row_mut() else {
        return;
    };
    trace!(line = ?row.line_number(), "merge loop step continuation");
    for argument in row.arguments().iter().skip(1) {
        target.add_argument(argument.clone());
    }
    for part in row.comment() {
        target.add_comment_part(part.clone());
    }
}

/// Marks `FOR ... END` loops and reports loop rows outside any loop.
pub(crate) fn mark_loops(output: &mut RobotFileOutput) {
    let mut messages = Vec::new();
    for kind in KINDS {
        for unit in output.file_mut().unit_table_mut(kind).units_mut() {
            mark_in_unit(unit, &mut messages);
        }
    }
    for message in messages {
        output.add_build_message(message);
    }
}

fn mark_in_unit(unit: &mut ExecutableUnit, messages: &mut Vec<BuildMessage>) {
    let elements = unit.elements_mut().as_mut_slice();
    // Loop header not closed by `END` yet.
    let mut open: Option<usize> = None;
    // Whether `\` rows may still continue a loop body.
    let mut in_body = false;

    for index in 0..elements.len() {
        let Some(row) = elements[index].as_row() else {
            in_body = false;
            continue;
        };
        if row.is_commented() {
            continue;
        }
        let action = row.action();
        if is_for_declaration(action) {
            open = Some(index);
            in_body = true;
        } else if is_for_end(action) {
            match open.take() {
                Some(header) => close_loop(&mut elements[header..=index]),
                None => messages.push(BuildMessage::at_token(
                    KeywordsProblem::ForEndWithoutFor,
                    action,
                )),
            }
            in_body = false;
        } else if is_for_continue(action) {
            if in_body {
                // Old-style body; its header takes no `END`.
                open = None;
            } else if open.is_none() {
                messages.push(BuildMessage::at_token(
                    KeywordsProblem::ForContinueWithoutFor,
                    action,
                ));
            }
        } else {
            in_body = false;
        }
    }
}

/// `rows` runs from a loop header to its `END`.
fn close_loop(rows: &mut [UnitElement]) {
    let last = rows.len() - 1;
    for (index, element) in rows.iter_mut().enumerate() {
        let Some(row) = element.as_row_mut() else {
            continue;
        };
        if index == 0 {
            row.mark_action(RobotTokenType::ForWithEnd);
        } else if index < last && !row.is_commented() {
            row.mark_action(RobotTokenType::ForWithEndContinuation);
        }
    }
}

#[cfg(test)]
mod tests;
