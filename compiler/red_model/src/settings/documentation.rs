//! Merged views over several `Documentation` declarations.

use red_ir::{RobotToken, RobotTokenType};

use super::{declaration_token, SuiteDocumentation};

/// Read-only union of every documentation declaration, in file order.
#[derive(Copy, Clone, Debug)]
pub struct DocumentationView<'a> {
    declarations: &'a [SuiteDocumentation],
}

impl<'a> DocumentationView<'a> {
    pub(crate) fn new(declarations: &'a [SuiteDocumentation]) -> Self {
        DocumentationView { declarations }
    }

    pub fn is_present(&self) -> bool {
        !self.declarations.is_empty()
    }

    /// Text cells of all declarations.
    pub fn texts(&self) -> Vec<&'a RobotToken> {
        self.declarations.iter().flat_map(SuiteDocumentation::text).collect()
    }

    /// Documentation as a string: cells on one line joined by a space, source
    /// lines joined by a newline.
    pub fn text(&self) -> String {
        join_documentation(&self.texts())
    }
}

/// Editable union of every documentation declaration.
///
/// Edits of existing cells go to the declaration owning the cell. Adding text
/// first collapses all declarations into the first one, so the result has one
/// physical declaration holding everything.
#[derive(Debug)]
pub struct DocumentationViewMut<'a> {
    declarations: &'a mut Vec<SuiteDocumentation>,
}

impl<'a> DocumentationViewMut<'a> {
    pub(crate) fn new(declarations: &'a mut Vec<SuiteDocumentation>) -> Self {
        DocumentationViewMut { declarations }
    }

    pub fn texts(&self) -> Vec<&RobotToken> {
        self.declarations.iter().flat_map(SuiteDocumentation::text).collect()
    }

    /// `index`-th text cell across all declarations.
    pub fn text_mut(&mut self, index: usize) -> Option<&mut RobotToken> {
        self.declarations
            .iter_mut()
            .flat_map(SuiteDocumentation::text_mut)
            .nth(index)
    }

    /// Appends `token`, merging all declarations into the first one.
    pub fn add_text(&mut self, token: RobotToken) {
        if self.declarations.is_empty() {
            let declaration = declaration_token(RobotTokenType::SettingDocumentationDeclaration);
            self.declarations.push(SuiteDocumentation::new(declaration));
        }
        let rest: Vec<SuiteDocumentation> = self.declarations.drain(1..).collect();
        if let Some(first) = self.declarations.first_mut() {
            for other in rest {
                first.absorb(other);
            }
            first.add_text(token);
        }
    }
}

/// Joins documentation cells the way Robot Framework reads them back.
pub fn join_documentation(cells: &[&RobotToken]) -> String {
    let mut text = String::new();
    let mut previous_line = None;
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            let same_line = previous_line.is_some() && cell.line_number() == previous_line;
            text.push(if same_line || cell.line_number().is_none() { ' ' } else { '\n' });
        }
        text.push_str(cell.text());
        previous_line = cell.line_number();
    }
    text
}
