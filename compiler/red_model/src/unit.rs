//! Test cases, tasks and user keywords.

use red_ir::RobotToken;

use crate::element::{impl_comment_holder, tagged};
use crate::settings::join_documentation;
use crate::{
    CommentHolder, LocalSetting, ModelElement, ModelType, RobotExecutableRow, RoleToken,
    RowDescriptor, TableHeader, TokenRole, UnitKind,
};

/// A body line of a unit: a step or a bracketed setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitElement {
    Row(RobotExecutableRow),
    Setting(LocalSetting),
}

impl UnitElement {
    pub fn as_row(&self) -> Option<&RobotExecutableRow> {
        match self {
            UnitElement::Row(row) => Some(row),
            UnitElement::Setting(_) => None,
        }
    }

    pub fn as_row_mut(&mut self) -> Option<&mut RobotExecutableRow> {
        match self {
            UnitElement::Row(row) => Some(row),
            UnitElement::Setting(_) => None,
        }
    }

    pub fn as_setting(&self) -> Option<&LocalSetting> {
        match self {
            UnitElement::Setting(setting) => Some(setting),
            UnitElement::Row(_) => None,
        }
    }

    pub fn as_setting_mut(&mut self) -> Option<&mut LocalSetting> {
        match self {
            UnitElement::Setting(setting) => Some(setting),
            UnitElement::Row(_) => None,
        }
    }

    pub fn as_element(&self) -> &dyn ModelElement {
        match self {
            UnitElement::Row(row) => row,
            UnitElement::Setting(setting) => setting,
        }
    }

    pub fn as_comment_holder_mut(&mut self) -> &mut dyn CommentHolder {
        match self {
            UnitElement::Row(row) => row,
            UnitElement::Setting(setting) => setting,
        }
    }

    pub fn build_line_description(&self) -> RowDescriptor {
        match self {
            UnitElement::Row(row) => row.build_line_description(),
            UnitElement::Setting(setting) => setting.build_line_description(),
        }
    }
}

/// A test case, task or user keyword: a name and a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutableUnit {
    kind: UnitKind,
    name: RobotToken,
    comment: Vec<RobotToken>,
    elements: Vec<UnitElement>,
}

impl ExecutableUnit {
    pub fn new(kind: UnitKind, name: RobotToken) -> Self {
        ExecutableUnit {
            kind,
            name: tagged(name, kind.name_type()),
            comment: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn name(&self) -> &RobotToken {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut RobotToken {
        &mut self.name
    }

    pub fn elements(&self) -> &[UnitElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<UnitElement> {
        &mut self.elements
    }

    pub fn add_row(&mut self, row: RobotExecutableRow) {
        self.elements.push(UnitElement::Row(row));
    }

    pub fn add_setting(&mut self, setting: LocalSetting) {
        self.elements.push(UnitElement::Setting(setting));
    }

    /// Appends a step calling `action`.
    pub fn new_row(&mut self, action: &str) -> &mut RobotExecutableRow {
        self.add_row(RobotExecutableRow::with_action(self.kind, RobotToken::create(action)));
        match self.elements.last_mut() {
            Some(UnitElement::Row(row)) => row,
            _ => unreachable!("a row was just pushed"),
        }
    }

    /// Appends an empty local setting of `model_type`.
    pub fn new_setting(&mut self, model_type: ModelType) -> &mut LocalSetting {
        self.add_setting(LocalSetting::create(self.kind, model_type));
        match self.elements.last_mut() {
            Some(UnitElement::Setting(setting)) => setting,
            _ => unreachable!("a setting was just pushed"),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &RobotExecutableRow> {
        self.elements.iter().filter_map(UnitElement::as_row)
    }

    pub fn settings(&self) -> impl Iterator<Item = &LocalSetting> {
        self.elements.iter().filter_map(UnitElement::as_setting)
    }

    pub fn settings_of(&self, model_type: ModelType) -> impl Iterator<Item = &LocalSetting> {
        self.settings()
            .filter(move |setting| setting.model_type() == model_type)
    }

    /// Text cells of every `[Documentation]` of the unit.
    pub fn documentation(&self) -> Vec<&RobotToken> {
        self.settings_of(self.kind.documentation_model_type())
            .flat_map(LocalSetting::values)
            .collect()
    }

    pub fn documentation_text(&self) -> String {
        join_documentation(&self.documentation())
    }
}

impl ModelElement for ExecutableUnit {
    fn model_type(&self) -> ModelType {
        self.kind.unit_model_type()
    }

    fn declaration(&self) -> &RobotToken {
        &self.name
    }

    /// Name and its comment; body elements dump as their own elements.
    fn role_tokens(&self) -> Vec<RoleToken<'_>> {
        let mut tokens = vec![RoleToken::new(TokenRole::Declaration, &self.name)];
        tokens.extend(self.comment.iter().map(|t| RoleToken::new(TokenRole::Comment, t)));
        tokens
    }
}

impl_comment_holder!(ExecutableUnit);

/// Test cases, tasks or keywords table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitTable {
    kind: UnitKind,
    headers: Vec<TableHeader>,
    units: Vec<ExecutableUnit>,
}

impl UnitTable {
    pub fn new(kind: UnitKind) -> Self {
        UnitTable {
            kind,
            headers: Vec::new(),
            units: Vec::new(),
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_present(&self) -> bool {
        !self.headers.is_empty()
    }

    pub fn headers(&self) -> &[TableHeader] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Vec<TableHeader> {
        &mut self.headers
    }

    pub fn units(&self) -> &[ExecutableUnit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut Vec<ExecutableUnit> {
        &mut self.units
    }

    pub fn add_unit(&mut self, unit: ExecutableUnit) {
        self.units.push(unit);
    }

    /// Appends an empty unit called `name`.
    pub fn create_unit(&mut self, name: &str) -> &mut ExecutableUnit {
        self.units
            .push(ExecutableUnit::new(self.kind, RobotToken::create(name)));
        let last = self.units.len() - 1;
        &mut self.units[last]
    }

    pub fn find(&self, name: &str) -> Option<&ExecutableUnit> {
        self.units
            .iter()
            .find(|unit| unit.name().text().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests;
