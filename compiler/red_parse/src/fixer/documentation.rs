//! Empty lines inside documentation.
//!
//! A line holding nothing but `...` inside a documentation is an empty line
//! of text. No cell of it reaches a documentation mapper, so the fixer adds
//! an empty text cell positioned right after the `...`.

use red_ir::{FilePosition, RobotToken, RobotTokenType};
use red_model::{ModelElement, RobotFile, RobotFileOutput, UnitKind};
use tracing::trace;

/// Position right after the `...` of `line_number` when that is all the
/// line holds.
fn empty_continuation(file: &RobotFile, line_number: u32) -> Option<FilePosition> {
    let line = file.line(line_number)?;
    let mut content = line.tokens().filter(|token| !token.text().trim().is_empty());
    let dots = content.next()?;
    if content.next().is_some() || dots.text().trim() != "..." {
        return None;
    }
    let position = dots.position()?;
    let length = u32::try_from(dots.text().len()).unwrap_or(u32::MAX);
    Some(FilePosition::new(
        line_number,
        position.column.saturating_add(length),
        position.offset.saturating_add(length),
    ))
}

/// Empty `...` lines between `declaration` and the last text line, with the
/// index the new cell takes among `text_lines`.
fn gaps(file: &RobotFile, declaration: u32, text_lines: &[u32]) -> Vec<(usize, FilePosition)> {
    let Some(&last) = text_lines.iter().max() else {
        return Vec::new();
    };
    (declaration + 1..last)
        .filter(|line| !text_lines.contains(line))
        .filter_map(|line| {
            let position = empty_continuation(file, line)?;
            let index = text_lines.iter().filter(|text| **text < line).count();
            Some((index, position))
        })
        .collect()
}

fn mark_line(output: &mut RobotFileOutput, line_number: u32) {
    if let Some(line) = output
        .file_mut()
        .lines_mut()
        .iter_mut()
        .find(|line| line.line_number() == line_number)
    {
        line.mark_attached();
    }
}

pub(crate) fn fill_empty_continuations(output: &mut RobotFileOutput) {
    fill_suite_documentation(output);
    for kind in [UnitKind::TestCase, UnitKind::Task, UnitKind::Keyword] {
        fill_unit_documentation(output, kind);
    }
}

fn fill_suite_documentation(output: &mut RobotFileOutput) {
    let file = output.file();
    let mut inserts = Vec::new();
    for (doc, documentation) in file
        .setting_table()
        .documentation_declarations()
        .iter()
        .enumerate()
    {
        let Some(declaration) = documentation.declaration().line_number() else {
            continue;
        };
        let text_lines: Vec<u32> = documentation
            .text()
            .iter()
            .filter_map(RobotToken::line_number)
            .collect();
        inserts.extend(
            gaps(file, declaration, &text_lines)
                .into_iter()
                .map(|(index, position)| (doc, index, position)),
        );
    }

    // Later gaps first, so indices computed on the unfixed list stay valid.
    for (doc, index, position) in inserts.into_iter().rev() {
        let token =
            RobotToken::create_positioned("", position, RobotTokenType::SettingDocumentationText);
        if let Some(documentation) = output
            .file_mut()
            .setting_table_mut()
            .documentation_declarations_mut()
            .get_mut(doc)
        {
            documentation.insert_text(index, token);
            trace!(line = position.line, "empty suite documentation line");
            mark_line(output, position.line);
        }
    }
}

fn fill_unit_documentation(output: &mut RobotFileOutput, kind: UnitKind) {
    let file = output.file();
    let mut inserts = Vec::new();
    for (unit, body) in file.unit_table(kind).units().iter().enumerate() {
        for (element, item) in body.elements().iter().enumerate() {
            let Some(setting) = item.as_setting().filter(|s| s.is_documentation()) else {
                continue;
            };
            let Some(declaration) = setting.declaration().line_number() else {
                continue;
            };
            let text_lines: Vec<u32> = setting
                .values()
                .iter()
                .filter_map(RobotToken::line_number)
                .collect();
            inserts.extend(
                gaps(file, declaration, &text_lines)
                    .into_iter()
                    .map(|(index, position)| (unit, element, index, position)),
            );
        }
    }

    for (unit, element, index, position) in inserts.into_iter().rev() {
        let Some(setting) = output
            .file_mut()
            .unit_table_mut(kind)
            .units_mut()
            .get_mut(unit)
            .and_then(|body| body.elements_mut().get_mut(element))
            .and_then(|item| item.as_setting_mut())
        else {
            continue;
        };
        // Token 0 is the declaration.
        let slot = index + 1;
        if setting.create_token(slot).is_ok() {
            if let Some(token) = setting.token_mut(slot) {
                token.set_position(position);
            }
            trace!(line = position.line, "empty unit documentation line");
            mark_line(output, position.line);
        }
    }
}
