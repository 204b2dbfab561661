//! Mappers of test case, task and keyword tables.
//!
//! The three tables share one grammar: a name in the first column opens a
//! unit; indented lines below it are steps or bracketed local settings. Each
//! [`UnitMapper`] handles one part of that grammar for one [`UnitKind`].

use red_diagnostic::{BuildMessage, SettingsProblem};
use red_ir::{RobotToken, RobotTokenType, RobotVersion};
use red_lexer::Applicability;
use red_model::{
    ElementPath, ExecutableUnit, LocalSetting, ModelElement, RobotExecutableRow, RobotFileOutput,
    UnitElement, UnitKind,
};
use tracing::debug;

use crate::mapper::{
    deprecation_message, is_data_cell, last_unit, opens_line, top_is, unavailable_message,
    ElementMapper,
};
use crate::{ParsingContext, ParsingState, UnitStates};

/// Part of a unit a [`UnitMapper`] reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum UnitPart {
    /// First-column cell naming a new unit.
    Name,
    /// `[Setup]`, `[Arguments]`, ...
    SettingDeclaration,
    SettingValue,
    /// Keyword call, assignment, loop header or `\` of a step.
    Action,
    ActionArgument,
    /// Indented lines before the first unit name.
    Trash,
}

pub(crate) struct UnitMapper {
    name: &'static str,
    kind: UnitKind,
    part: UnitPart,
}

impl UnitMapper {
    const fn new(name: &'static str, kind: UnitKind, part: UnitPart) -> Self {
        UnitMapper { name, kind, part }
    }

    fn states(&self) -> UnitStates {
        UnitStates::of(self.kind)
    }

    fn inside(&self) -> ParsingState {
        ParsingState::header_of(Some(self.kind.table())).inside()
    }

    /// A cell opening an indented body line of an existing unit, or the
    /// cell following the unit name on its own line.
    fn starts_step(
        &self,
        output: &RobotFileOutput,
        context: &ParsingContext,
        token: &RobotToken,
    ) -> bool {
        let body_line = opens_line(context, token)
            && context.is_indented()
            && context.top() == self.inside()
            && last_unit(output, self.kind).is_some();
        let after_name = is_data_cell(context, token)
            && !context.is_first_cell()
            && context.top() == self.states().declaration;
        body_line || after_name
    }
}

fn is_bracketed(token: &RobotToken) -> bool {
    let text = token.text().trim();
    text.starts_with('[') && text.ends_with(']')
}

fn current_element<'a>(
    output: &'a mut RobotFileOutput,
    context: &ParsingContext,
) -> Option<&'a mut UnitElement> {
    let ElementPath::UnitElement {
        kind,
        unit,
        element,
    } = context.current()?
    else {
        return None;
    };
    output
        .file_mut()
        .unit_table_mut(kind)
        .units_mut()
        .get_mut(unit)?
        .elements_mut()
        .get_mut(element)
}

/// Appends `element` to the last unit of `kind` and makes it current.
fn add_element(
    output: &mut RobotFileOutput,
    context: &mut ParsingContext,
    kind: UnitKind,
    element: UnitElement,
) {
    let Some(unit) = last_unit(output, kind) else {
        return;
    };
    if let Some(body) = output.file_mut().unit_table_mut(kind).units_mut().get_mut(unit) {
        body.elements_mut().push(element);
        let element = body.elements().len() - 1;
        context.attach(ElementPath::UnitElement {
            kind,
            unit,
            element,
        });
    }
}

/// Problem with a local setting declaration in `version`, if any.
fn local_setting_message(
    kind: UnitKind,
    token: &RobotToken,
    version: RobotVersion,
) -> Option<BuildMessage> {
    let ty = kind.find_setting_declaration(token.text());
    if ty == RobotTokenType::Unknown {
        return Some(BuildMessage::at_token(
            SettingsProblem::UnknownSetting {
                name: token.text().trim().to_string(),
            },
            token,
        ));
    }
    let available = ty
        .find_representation(token.text().trim())
        .is_some_and(|repr| repr.is_available_in(version));
    if available {
        deprecation_message(ty, token, version)
    } else {
        Some(unavailable_message(ty, token, version))
    }
}

impl ElementMapper for UnitMapper {
    fn name(&self) -> &'static str {
        self.name
    }

    fn applicability(&self) -> Applicability {
        match self.kind {
            UnitKind::Task => Applicability::Since(RobotVersion::V3_1),
            UnitKind::TestCase | UnitKind::Keyword => Applicability::Always,
        }
    }

    fn can_map(&self, output: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        let states = self.states();
        match self.part {
            UnitPart::Name => {
                opens_line(context, token) && !context.is_indented() && context.top() == self.inside()
            }
            UnitPart::SettingDeclaration => {
                is_bracketed(token) && self.starts_step(output, context, token)
            }
            UnitPart::SettingValue => {
                is_data_cell(context, token)
                    && top_is(context, &[states.setting, states.setting_value])
            }
            UnitPart::Action => !is_bracketed(token) && self.starts_step(output, context, token),
            UnitPart::ActionArgument => {
                is_data_cell(context, token) && top_is(context, &[states.action, states.argument])
            }
            UnitPart::Trash => {
                opens_line(context, token)
                    && context.is_indented()
                    && context.top() == self.inside()
                    && last_unit(output, self.kind).is_none()
            }
        }
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let kind = self.kind;
        let states = self.states();
        match self.part {
            UnitPart::Name => {
                let unit = ExecutableUnit::new(kind, token);
                let name = unit.name().clone();
                let table = output.file_mut().unit_table_mut(kind);
                table.add_unit(unit);
                let unit = table.units().len() - 1;
                debug!(line = context.line_number(), ?kind, name = name.text(), "unit");
                context.attach(ElementPath::Unit { kind, unit });
                context.push(states.declaration);
                name
            }
            UnitPart::SettingDeclaration => {
                if let Some(message) = local_setting_message(kind, &token, context.version()) {
                    output.add_build_message(message);
                }
                let setting = LocalSetting::new(kind, token);
                let declaration = setting.declaration().clone();
                add_element(output, context, kind, UnitElement::Setting(setting));
                context.push(states.setting);
                declaration
            }
            UnitPart::SettingValue => {
                let mut mapped = token.clone();
                if let Some(setting) =
                    current_element(output, context).and_then(UnitElement::as_setting_mut)
                {
                    setting.add_token(token);
                    if let Some(last) = setting.tokens().last() {
                        mapped = last.clone();
                    }
                    context.mark_attached();
                }
                context.push(states.setting_value);
                mapped
            }
            UnitPart::Action => {
                let row = RobotExecutableRow::with_action(kind, token);
                let action = row.action().clone();
                add_element(output, context, kind, UnitElement::Row(row));
                context.push(states.action);
                action
            }
            UnitPart::ActionArgument => {
                let mut mapped = token.clone();
                if let Some(row) = current_element(output, context).and_then(UnitElement::as_row_mut) {
                    row.add_argument(token);
                    if let Some(last) = row.arguments().last() {
                        mapped = last.clone();
                    }
                    context.mark_attached();
                }
                context.push(states.argument);
                mapped
            }
            UnitPart::Trash => {
                context.detach();
                context.push(ParsingState::Trash);
                token
            }
        }
    }
}

macro_rules! unit_mappers {
    ($kind:ident, $label:literal) => {
        [
            UnitMapper::new(concat!($label, " name"), UnitKind::$kind, UnitPart::Name),
            UnitMapper::new(
                concat!($label, " setting declaration"),
                UnitKind::$kind,
                UnitPart::SettingDeclaration,
            ),
            UnitMapper::new(concat!($label, " setting value"), UnitKind::$kind, UnitPart::SettingValue),
            UnitMapper::new(concat!($label, " action"), UnitKind::$kind, UnitPart::Action),
            UnitMapper::new(
                concat!($label, " action argument"),
                UnitKind::$kind,
                UnitPart::ActionArgument,
            ),
            UnitMapper::new(concat!($label, " trash"), UnitKind::$kind, UnitPart::Trash),
        ]
    };
}

static TEST_CASES: [UnitMapper; 6] = unit_mappers!(TestCase, "test case");
static TASKS: [UnitMapper; 6] = unit_mappers!(Task, "task");
static KEYWORDS: [UnitMapper; 6] = unit_mappers!(Keyword, "keyword");

pub(crate) fn mappers() -> impl Iterator<Item = &'static dyn ElementMapper> {
    TEST_CASES
        .iter()
        .chain(&TASKS)
        .chain(&KEYWORDS)
        .map(|mapper| mapper as &'static dyn ElementMapper)
}
