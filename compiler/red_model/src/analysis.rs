//! Variable name analysis.
//!
//! Robot Framework compares variable names ignoring case, spaces and
//! underscores, and lets variables nest: `${outer_${inner}}` is one use whose
//! name depends on `${inner}`. Extraction here reports outermost uses only.

use std::ops::Range;

use red_ir::{FilePosition, RobotToken, RobotTokenType};

const SIGILS: &[u8] = b"$@&%";

/// `${Some Name}` → `${somename}`; text without brackets is normalized whole.
pub fn normalize_name(name: &str) -> String {
    let bytes = name.as_bytes();
    if bytes.len() >= 3 && SIGILS.contains(&bytes[0]) && bytes[1] == b'{' && name.ends_with('}') {
        let inner = &name[2..name.len() - 1];
        format!("{}{{{}}}", &name[..1], normalize_plain(inner))
    } else {
        normalize_plain(name)
    }
}

fn normalize_plain(text: &str) -> String {
    text.chars()
        .filter(|c| *c != ' ' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Name between the brackets of `${name}`, or `""` when `text` is not a
/// complete variable.
pub fn extract_from_brackets(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() > 3 && SIGILS.contains(&bytes[0]) && bytes[1] == b'{' && text.ends_with('}') {
        &text[2..text.len() - 1]
    } else {
        ""
    }
}

/// Whether two variables have the same name, ignoring their sigils.
pub fn has_equal_normalized_names(first: &str, second: &str) -> bool {
    normalize_plain(extract_from_brackets(first)) == normalize_plain(extract_from_brackets(second))
}

/// A variable used inside a cell, as its own positioned token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableUse {
    token: RobotToken,
}

impl VariableUse {
    pub fn text(&self) -> &str {
        self.token.text()
    }

    /// Name without sigil and brackets.
    pub fn name(&self) -> &str {
        extract_from_brackets(self.token.text())
    }

    pub fn normalized_name(&self) -> String {
        normalize_plain(self.name())
    }

    pub fn as_token(&self) -> &RobotToken {
        &self.token
    }

    pub fn into_token(self) -> RobotToken {
        self.token
    }
}

/// Outermost variable uses in `token`, skipping `\${escaped}` ones.
pub fn find_variable_uses(token: &RobotToken) -> Vec<VariableUse> {
    let text = token.text();
    variable_regions(text)
        .0
        .into_iter()
        .map(|range| {
            let start = u32::try_from(range.start).unwrap_or(u32::MAX);
            let mut used = RobotToken::create_with_type(&text[range], RobotTokenType::VariableUsage);
            if let Some(position) = token.position() {
                used.set_position(FilePosition::new(
                    position.line,
                    position.column + start,
                    position.offset + start,
                ));
            }
            VariableUse { token: used }
        })
        .collect()
}

/// Whether `text` opens a variable that is never closed.
pub fn has_unclosed_variable(text: &str) -> bool {
    variable_regions(text).1
}

/// Whether `text` is a single variable, optionally followed by `=`, as used
/// to assign keyword results (`${result}=`).
pub fn is_assignment(text: &str) -> bool {
    let (regions, unclosed) = variable_regions(text);
    if unclosed || regions.len() != 1 {
        return false;
    }
    let region = &regions[0];
    let bytes = text.as_bytes();
    region.start == 0
        && bytes[0] != b'%'
        && matches!(text[region.end..].trim(), "" | "=")
}

/// Splits a dictionary item `key=value` at its first unescaped `=`.
pub fn split_dictionary_item(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .find(|&i| bytes[i] == b'=' && !is_escaped(bytes, i))
        .map(|i| (&text[..i], &text[i + 1..]))
}

fn is_escaped(bytes: &[u8], index: usize) -> bool {
    let backslashes = bytes[..index].iter().rev().take_while(|b| **b == b'\\').count();
    backslashes % 2 == 1
}

fn variable_regions(text: &str) -> (Vec<Range<usize>>, bool) {
    let bytes = text.as_bytes();
    let mut regions = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if SIGILS.contains(&bytes[i]) && bytes[i + 1] == b'{' && !is_escaped(bytes, i) {
            match closing_bracket(bytes, i + 1) {
                Some(end) => {
                    regions.push(i..end + 1);
                    i = end + 1;
                    continue;
                }
                None => return (regions, true),
            }
        }
        i += 1;
    }
    (regions, false)
}

fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (j, b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' if !is_escaped(bytes, j) => depth += 1,
            b'}' if !is_escaped(bytes, j) => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
    }
    None
}
