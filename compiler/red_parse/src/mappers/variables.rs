//! Mappers of the variables table.

use red_ir::{RobotToken, RobotTokenType};
use red_model::{
    tagged, ElementPath, ModelElement, RobotFileOutput, Variable, VariableType,
};

use crate::mapper::{is_data_cell, opens_line, top_is, ElementMapper};
use crate::{ParsingContext, ParsingState};

const VARIABLE_STATES: [ParsingState; 8] = [
    ParsingState::ScalarVariableDeclaration,
    ParsingState::ScalarVariableValue,
    ParsingState::ListVariableDeclaration,
    ParsingState::ListVariableValue,
    ParsingState::DictionaryVariableDeclaration,
    ParsingState::DictionaryVariableValue,
    ParsingState::VariableUnknown,
    ParsingState::VariableUnknownValue,
];

const fn declaration_state(kind: VariableType) -> ParsingState {
    match kind {
        VariableType::Scalar => ParsingState::ScalarVariableDeclaration,
        VariableType::List => ParsingState::ListVariableDeclaration,
        VariableType::Dictionary => ParsingState::DictionaryVariableDeclaration,
        VariableType::Invalid => ParsingState::VariableUnknown,
    }
}

const fn value_state(declaration: ParsingState) -> ParsingState {
    match declaration {
        ParsingState::ScalarVariableDeclaration | ParsingState::ScalarVariableValue => {
            ParsingState::ScalarVariableValue
        }
        ParsingState::ListVariableDeclaration | ParsingState::ListVariableValue => {
            ParsingState::ListVariableValue
        }
        ParsingState::DictionaryVariableDeclaration | ParsingState::DictionaryVariableValue => {
            ParsingState::DictionaryVariableValue
        }
        _ => ParsingState::VariableUnknownValue,
    }
}

/// `${name}`, `@{name}`, `&{name}` or anything else opening a line.
pub(crate) struct VariableDeclarationMapper;

impl ElementMapper for VariableDeclarationMapper {
    fn name(&self) -> &'static str {
        "variable declaration"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        opens_line(context, token) && context.top() == ParsingState::VariableTableInside
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let variable = Variable::new(token);
        let kind = variable.kind();
        let declaration = variable.declaration().clone();

        let table = output.file_mut().variable_table_mut();
        table.add_variable(variable);
        let index = table.variables().len() - 1;
        context.attach(ElementPath::Variable { index });
        context.push(declaration_state(kind));
        declaration
    }
}

/// Values after a variable declaration.
pub(crate) struct VariableValueMapper;

impl ElementMapper for VariableValueMapper {
    fn name(&self) -> &'static str {
        "variable value"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        is_data_cell(context, token) && top_is(context, &VARIABLE_STATES)
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let token = tagged(token, RobotTokenType::VariablesVariableValue);
        if let Some(ElementPath::Variable { index }) = context.current() {
            if let Some(variable) = output
                .file_mut()
                .variable_table_mut()
                .variables_mut()
                .get_mut(index)
            {
                variable.add_value(token.clone());
                context.mark_attached();
            }
        }
        context.push(value_state(context.top()));
        token
    }
}

pub(crate) fn mappers() -> impl Iterator<Item = &'static dyn ElementMapper> {
    let mappers: [&'static dyn ElementMapper; 2] = [&VariableDeclarationMapper, &VariableValueMapper];
    mappers.into_iter()
}

#[cfg(test)]
mod tests;
