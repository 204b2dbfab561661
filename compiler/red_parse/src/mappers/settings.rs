//! Mappers of the settings table.
//!
//! One mapper opens every known setting; value cells go through
//! [`SettingValueMapper`]s, one per setting and value position, described by
//! the static table at the bottom of this file.

use red_diagnostic::{BuildMessage, SettingsProblem};
use red_ir::{RobotToken, RobotTokenType, RobotVersion};
use red_lexer::Applicability;
use red_model::{
    setting_model_type, tagged, ElementPath, Import, ImportKind, KeywordCallSetting, LibraryAlias,
    Metadata, ModelType, RobotFileOutput, SettingTable, SuiteDocumentation, TagsSetting,
    TemplateSetting, TimeoutSetting, UnknownSetting,
};
use tracing::debug;

use crate::mapper::{
    deprecation_message, is_data_cell, opens_line, top_is, unavailable_message, ElementMapper,
};
use crate::{ParsingContext, ParsingState};

/// Declaration type and model kind of a settings-table declaration cell.
fn declaration_of(token: &RobotToken) -> Option<(RobotTokenType, ModelType)> {
    token
        .types()
        .iter()
        .find_map(|ty| setting_model_type(*ty).map(|model_type| (*ty, model_type)))
}

const fn declaration_state(model_type: ModelType) -> ParsingState {
    match model_type {
        ModelType::LibraryImport => ParsingState::SettingLibraryImport,
        ModelType::ResourceImport => ParsingState::SettingResourceImport,
        ModelType::VariablesImport => ParsingState::SettingVariableImport,
        ModelType::SuiteDocumentation => ParsingState::SettingDocumentation,
        ModelType::Metadata => ParsingState::SettingMetadata,
        ModelType::SuiteSetup => ParsingState::SettingSuiteSetup,
        ModelType::SuiteTeardown => ParsingState::SettingSuiteTeardown,
        ModelType::TestSetup => ParsingState::SettingTestSetup,
        ModelType::TestTeardown => ParsingState::SettingTestTeardown,
        ModelType::TaskSetup => ParsingState::SettingTaskSetup,
        ModelType::TaskTeardown => ParsingState::SettingTaskTeardown,
        ModelType::ForceTags => ParsingState::SettingForceTags,
        ModelType::DefaultTags => ParsingState::SettingDefaultTags,
        ModelType::TestTemplate => ParsingState::SettingTestTemplate,
        ModelType::TaskTemplate => ParsingState::SettingTaskTemplate,
        ModelType::TestTimeout => ParsingState::SettingTestTimeout,
        ModelType::TaskTimeout => ParsingState::SettingTaskTimeout,
        _ => ParsingState::SettingUnknown,
    }
}

fn push<T>(list: &mut Vec<T>, element: T) -> usize {
    list.push(element);
    list.len() - 1
}

/// Appends a setting of `model_type`; returns its index in its list.
fn add_setting(
    table: &mut SettingTable,
    model_type: ModelType,
    declaration: RobotToken,
) -> Option<usize> {
    let import_kind = match model_type {
        ModelType::LibraryImport => Some(ImportKind::Library),
        ModelType::ResourceImport => Some(ImportKind::Resource),
        ModelType::VariablesImport => Some(ImportKind::Variables),
        _ => None,
    };
    if let Some(kind) = import_kind {
        return Some(push(table.imports_mut(), Import::new(kind, declaration)));
    }
    match model_type {
        ModelType::SuiteDocumentation => Some(push(
            table.documentation_declarations_mut(),
            SuiteDocumentation::new(declaration),
        )),
        ModelType::Metadata => Some(push(table.metadata_mut(), Metadata::new(declaration))),
        ModelType::ForceTags | ModelType::DefaultTags => table
            .tags_mut(model_type)
            .map(|list| push(list, TagsSetting::new(model_type, declaration))),
        ModelType::TestTemplate | ModelType::TaskTemplate => table
            .templates_mut(model_type)
            .map(|list| push(list, TemplateSetting::new(model_type, declaration))),
        ModelType::TestTimeout | ModelType::TaskTimeout => table
            .timeouts_mut(model_type)
            .map(|list| push(list, TimeoutSetting::new(model_type, declaration))),
        ModelType::SettingsUnknown => {
            Some(push(table.unknown_mut(), UnknownSetting::new(declaration)))
        }
        _ => table
            .keyword_calls_mut(model_type)
            .map(|list| push(list, KeywordCallSetting::new(model_type, declaration))),
    }
}

/// First cell of a settings line naming a setting `version` knows.
pub(crate) struct SettingDeclarationMapper;

impl ElementMapper for SettingDeclarationMapper {
    fn name(&self) -> &'static str {
        "setting declaration"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        opens_line(context, token)
            && context.top() == ParsingState::SettingTableInside
            && declaration_of(token).is_some()
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let Some((ty, model_type)) = declaration_of(&token) else {
            return token;
        };
        if let Some(message) = deprecation_message(ty, &token, context.version()) {
            output.add_build_message(message);
        }

        let token = tagged(token, ty);
        let table = output.file_mut().setting_table_mut();
        if let Some(index) = add_setting(table, model_type, token.clone()) {
            context.attach(ElementPath::Setting { model_type, index });
        }
        debug!(line = context.line_number(), ?model_type, "setting");
        context.push(declaration_state(model_type));
        token
    }
}

/// First cell of a settings line naming nothing `version` accepts.
pub(crate) struct UnknownSettingMapper;

impl ElementMapper for UnknownSettingMapper {
    fn name(&self) -> &'static str {
        "unknown setting"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        opens_line(context, token)
            && context.top() == ParsingState::SettingTableInside
            && declaration_of(token).is_none()
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        output.add_build_message(unknown_message(&token, context.version()));

        let token = tagged(token, RobotTokenType::SettingUnknown);
        let table = output.file_mut().setting_table_mut();
        let index = push(table.unknown_mut(), UnknownSetting::new(token.clone()));
        context.attach(ElementPath::Setting {
            model_type: ModelType::SettingsUnknown,
            index,
        });
        context.push(ParsingState::SettingUnknown);
        token
    }
}

fn unknown_message(token: &RobotToken, version: RobotVersion) -> BuildMessage {
    match RobotTokenType::find_type_of_declaration_for_setting_table(token.text()) {
        RobotTokenType::Unknown => BuildMessage::at_token(
            SettingsProblem::UnknownSetting {
                name: token.text().trim().to_string(),
            },
            token,
        ),
        ty => unavailable_message(ty, token, version),
    }
}

fn current_index(context: &ParsingContext) -> Option<usize> {
    match context.current()? {
        ElementPath::Setting { index, .. } => Some(index),
        _ => None,
    }
}

fn current_import<'a>(output: &'a RobotFileOutput, context: &ParsingContext) -> Option<&'a Import> {
    output
        .file()
        .setting_table()
        .imports()
        .get(current_index(context)?)
}

/// Whether `token` is the `WITH NAME` of the library import being read.
fn is_pending_alias(output: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
    top_is(
        context,
        &[ParsingState::SettingLibraryNameOrPath, ParsingState::SettingLibraryArguments],
    ) && token.has_type(RobotTokenType::SettingLibraryAlias)
        && current_import(output, context).is_some_and(|import| import.alias().is_none())
}

/// `WITH NAME` after a library name or its arguments.
pub(crate) struct LibraryAliasMapper;

impl ElementMapper for LibraryAliasMapper {
    fn name(&self) -> &'static str {
        "library alias"
    }

    fn can_map(&self, output: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        is_data_cell(context, token) && is_pending_alias(output, context, token)
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let token = tagged(token, RobotTokenType::SettingLibraryAlias);
        if let Some(import) = current_index(context)
            .and_then(|index| output.file_mut().setting_table_mut().imports_mut().get_mut(index))
        {
            import.set_alias(LibraryAlias::new(token.clone()));
            context.mark_attached();
        }
        context.push(ParsingState::SettingLibraryImportAlias);
        token
    }
}

/// The name following `WITH NAME`.
pub(crate) struct LibraryAliasValueMapper;

impl ElementMapper for LibraryAliasValueMapper {
    fn name(&self) -> &'static str {
        "library alias value"
    }

    fn can_map(&self, _: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        is_data_cell(context, token) && context.top() == ParsingState::SettingLibraryImportAlias
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let token = tagged(token, RobotTokenType::SettingLibraryAliasValue);
        if let Some(alias) = current_index(context)
            .and_then(|index| output.file_mut().setting_table_mut().imports_mut().get_mut(index))
            .and_then(Import::alias_mut)
        {
            alias.set_name(token.clone());
            context.mark_attached();
        }
        context.push(ParsingState::SettingLibraryImportAliasValue);
        token
    }
}

/// Which value of a setting a [`SettingValueMapper`] takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ValuePart {
    /// Library name, resource path, keyword name, metadata key, timeout.
    First,
    /// Everything after the first value.
    Rest,
}

/// Value cells of one setting.
///
/// Settings with a distinguished first value (`Test Setup  Keyword  arg`)
/// have two mappers, one per [`ValuePart`]; settings whose values are all
/// alike (`Force Tags`, `Documentation`) have only a [`ValuePart::Rest`] one.
#[derive(Copy, Clone)]
pub(crate) struct SettingValueMapper {
    name: &'static str,
    model_type: ModelType,
    part: ValuePart,
    /// State pushed by the declaration.
    declaration: ParsingState,
    /// State and type of the first value, if the setting has one.
    first: Option<(ParsingState, RobotTokenType)>,
    /// State and type of every other value.
    rest: (ParsingState, RobotTokenType),
    applicability: Applicability,
}

impl SettingValueMapper {
    const fn first(
        name: &'static str,
        model_type: ModelType,
        declaration: ParsingState,
        first: (ParsingState, RobotTokenType),
        rest: (ParsingState, RobotTokenType),
    ) -> Self {
        SettingValueMapper {
            name,
            model_type,
            part: ValuePart::First,
            declaration,
            first: Some(first),
            rest,
            applicability: Applicability::Always,
        }
    }

    const fn rest(
        name: &'static str,
        model_type: ModelType,
        declaration: ParsingState,
        first: Option<(ParsingState, RobotTokenType)>,
        rest: (ParsingState, RobotTokenType),
    ) -> Self {
        SettingValueMapper {
            name,
            model_type,
            part: ValuePart::Rest,
            declaration,
            first,
            rest,
            applicability: Applicability::Always,
        }
    }

    const fn since(mut self, version: RobotVersion) -> Self {
        self.applicability = Applicability::Since(version);
        self
    }

    fn has_first(&self, output: &RobotFileOutput, context: &ParsingContext) -> bool {
        current_index(context)
            .is_some_and(|index| has_first(output.file().setting_table(), self.model_type, index))
    }
}

impl ElementMapper for SettingValueMapper {
    fn name(&self) -> &'static str {
        self.name
    }

    fn applicability(&self) -> Applicability {
        self.applicability
    }

    fn can_map(&self, output: &RobotFileOutput, context: &ParsingContext, token: &RobotToken) -> bool {
        if !is_data_cell(context, token) {
            return false;
        }
        let top = context.top();
        match (self.part, self.first) {
            (ValuePart::First, Some(_)) => {
                top == self.declaration && !self.has_first(output, context)
            }
            (ValuePart::First, None) => false,
            (ValuePart::Rest, None) => top == self.declaration || top == self.rest.0,
            (ValuePart::Rest, Some((first, _))) => {
                if self.model_type == ModelType::LibraryImport {
                    if top == ParsingState::SettingLibraryImportAliasValue {
                        return true;
                    }
                    if is_pending_alias(output, context, token) {
                        return false;
                    }
                }
                top == first
                    || top == self.rest.0
                    || (top == self.declaration && self.has_first(output, context))
            }
        }
    }

    fn map(
        &self,
        output: &mut RobotFileOutput,
        context: &mut ParsingContext,
        token: RobotToken,
    ) -> RobotToken {
        let (state, ty) = match (self.part, self.first) {
            (ValuePart::First, Some(first)) => first,
            _ => self.rest,
        };
        let token = tagged(token, ty);
        let table = output.file_mut().setting_table_mut();
        let stored = current_index(context).and_then(|index| {
            store_value(table, self.model_type, index, self.part, token.clone())
        });
        if stored.is_some() {
            context.mark_attached();
        }
        context.push(state);
        token
    }
}

fn has_first(table: &SettingTable, model_type: ModelType, index: usize) -> bool {
    match model_type {
        ModelType::LibraryImport | ModelType::ResourceImport | ModelType::VariablesImport => table
            .imports()
            .get(index)
            .is_some_and(|import| import.path_or_name().is_some()),
        ModelType::Metadata => table
            .metadata()
            .get(index)
            .is_some_and(|metadata| metadata.key().is_some()),
        ModelType::TestTemplate => table
            .test_templates()
            .get(index)
            .is_some_and(|template| template.keyword_name().is_some()),
        ModelType::TaskTemplate => table
            .task_templates()
            .get(index)
            .is_some_and(|template| template.keyword_name().is_some()),
        ModelType::TestTimeout => table
            .test_timeouts()
            .get(index)
            .is_some_and(|timeout| timeout.timeout().is_some()),
        ModelType::TaskTimeout => table
            .task_timeouts()
            .get(index)
            .is_some_and(|timeout| timeout.timeout().is_some()),
        _ => table
            .keyword_calls(model_type)
            .get(index)
            .is_some_and(|call| call.keyword_name().is_some()),
    }
}

fn store_value(
    table: &mut SettingTable,
    model_type: ModelType,
    index: usize,
    part: ValuePart,
    token: RobotToken,
) -> Option<()> {
    let first = part == ValuePart::First;
    match model_type {
        ModelType::LibraryImport | ModelType::ResourceImport | ModelType::VariablesImport => {
            let import = table.imports_mut().get_mut(index)?;
            if first {
                import.set_path_or_name(token);
            } else {
                import.add_argument(token);
            }
        }
        ModelType::SuiteDocumentation => {
            table
                .documentation_declarations_mut()
                .get_mut(index)?
                .add_text(token);
        }
        ModelType::Metadata => {
            let metadata = table.metadata_mut().get_mut(index)?;
            if first {
                metadata.set_key(token);
            } else {
                metadata.add_value(token);
            }
        }
        ModelType::ForceTags | ModelType::DefaultTags => {
            table.tags_mut(model_type)?.get_mut(index)?.add_tag(token);
        }
        ModelType::TestTemplate | ModelType::TaskTemplate => {
            let template = table.templates_mut(model_type)?.get_mut(index)?;
            if first {
                template.set_keyword_name(token);
            } else {
                template.add_unexpected_argument(token);
            }
        }
        ModelType::TestTimeout | ModelType::TaskTimeout => {
            let timeout = table.timeouts_mut(model_type)?.get_mut(index)?;
            if first {
                timeout.set_timeout(token);
            } else {
                timeout.add_message_part(token);
            }
        }
        ModelType::SettingsUnknown => {
            table.unknown_mut().get_mut(index)?.add_argument(token);
        }
        _ => {
            let call = table.keyword_calls_mut(model_type)?.get_mut(index)?;
            if first {
                call.set_keyword_name(token);
            } else {
                call.add_argument(token);
            }
        }
    }
    Some(())
}

use ParsingState as S;
use RobotTokenType as T;

macro_rules! first_and_rest {
    ($name:literal, $model:ident, $decl:ident, ($first:ident, $first_ty:ident), ($rest:ident, $rest_ty:ident)) => {
        [
            SettingValueMapper::first(
                concat!($name, " first value"),
                ModelType::$model,
                S::$decl,
                (S::$first, T::$first_ty),
                (S::$rest, T::$rest_ty),
            ),
            SettingValueMapper::rest(
                concat!($name, " values"),
                ModelType::$model,
                S::$decl,
                Some((S::$first, T::$first_ty)),
                (S::$rest, T::$rest_ty),
            ),
        ]
    };
}

macro_rules! all_alike {
    ($name:literal, $model:ident, $decl:ident, ($rest:ident, $rest_ty:ident)) => {
        SettingValueMapper::rest(
            concat!($name, " values"),
            ModelType::$model,
            S::$decl,
            None,
            (S::$rest, T::$rest_ty),
        )
    };
}

const LIBRARY: [SettingValueMapper; 2] = first_and_rest!(
    "library",
    LibraryImport,
    SettingLibraryImport,
    (SettingLibraryNameOrPath, SettingLibraryName),
    (SettingLibraryArguments, SettingLibraryArgument)
);
const RESOURCE: [SettingValueMapper; 2] = first_and_rest!(
    "resource",
    ResourceImport,
    SettingResourceImport,
    (SettingResourceImportPath, SettingResourceFileName),
    (SettingResourceUnwantedArguments, SettingResourceUnwantedArgument)
);
const VARIABLES: [SettingValueMapper; 2] = first_and_rest!(
    "variables import",
    VariablesImport,
    SettingVariableImport,
    (SettingVariableImportPath, SettingVariablesFileName),
    (SettingVariableArguments, SettingVariablesArgument)
);
const METADATA: [SettingValueMapper; 2] = first_and_rest!(
    "metadata",
    Metadata,
    SettingMetadata,
    (SettingMetadataKey, SettingMetadataKey),
    (SettingMetadataValue, SettingMetadataValue)
);
const SUITE_SETUP: [SettingValueMapper; 2] = first_and_rest!(
    "suite setup",
    SuiteSetup,
    SettingSuiteSetup,
    (SettingSuiteSetupKeyword, SettingSuiteSetupKeywordName),
    (SettingSuiteSetupKeywordArgument, SettingSuiteSetupKeywordArgument)
);
const SUITE_TEARDOWN: [SettingValueMapper; 2] = first_and_rest!(
    "suite teardown",
    SuiteTeardown,
    SettingSuiteTeardown,
    (SettingSuiteTeardownKeyword, SettingSuiteTeardownKeywordName),
    (SettingSuiteTeardownKeywordArgument, SettingSuiteTeardownKeywordArgument)
);
const TEST_SETUP: [SettingValueMapper; 2] = first_and_rest!(
    "test setup",
    TestSetup,
    SettingTestSetup,
    (SettingTestSetupKeyword, SettingTestSetupKeywordName),
    (SettingTestSetupKeywordArgument, SettingTestSetupKeywordArgument)
);
const TEST_TEARDOWN: [SettingValueMapper; 2] = first_and_rest!(
    "test teardown",
    TestTeardown,
    SettingTestTeardown,
    (SettingTestTeardownKeyword, SettingTestTeardownKeywordName),
    (SettingTestTeardownKeywordArgument, SettingTestTeardownKeywordArgument)
);
const TASK_SETUP: [SettingValueMapper; 2] = first_and_rest!(
    "task setup",
    TaskSetup,
    SettingTaskSetup,
    (SettingTaskSetupKeyword, SettingTaskSetupKeywordName),
    (SettingTaskSetupKeywordArgument, SettingTaskSetupKeywordArgument)
);
const TASK_TEARDOWN: [SettingValueMapper; 2] = first_and_rest!(
    "task teardown",
    TaskTeardown,
    SettingTaskTeardown,
    (SettingTaskTeardownKeyword, SettingTaskTeardownKeywordName),
    (SettingTaskTeardownKeywordArgument, SettingTaskTeardownKeywordArgument)
);
const TEST_TEMPLATE: [SettingValueMapper; 2] = first_and_rest!(
    "test template",
    TestTemplate,
    SettingTestTemplate,
    (SettingTestTemplateKeyword, SettingTestTemplateKeywordName),
    (SettingTestTemplateKeywordUnwantedArguments, SettingTestTemplateKeywordUnwantedArgument)
);
const TASK_TEMPLATE: [SettingValueMapper; 2] = first_and_rest!(
    "task template",
    TaskTemplate,
    SettingTaskTemplate,
    (SettingTaskTemplateKeyword, SettingTaskTemplateKeywordName),
    (SettingTaskTemplateKeywordUnwantedArguments, SettingTaskTemplateKeywordUnwantedArgument)
);
const TEST_TIMEOUT: [SettingValueMapper; 2] = first_and_rest!(
    "test timeout",
    TestTimeout,
    SettingTestTimeout,
    (SettingTestTimeoutValue, SettingTestTimeoutValue),
    (SettingTestTimeoutMessage, SettingTestTimeoutMessage)
);
const TASK_TIMEOUT: [SettingValueMapper; 2] = first_and_rest!(
    "task timeout",
    TaskTimeout,
    SettingTaskTimeout,
    (SettingTaskTimeoutValue, SettingTaskTimeoutValue),
    (SettingTaskTimeoutMessage, SettingTaskTimeoutMessage)
);

const fn task(mappers: [SettingValueMapper; 2]) -> [SettingValueMapper; 2] {
    let [first, rest] = mappers;
    [first.since(RobotVersion::V3_1), rest.since(RobotVersion::V3_1)]
}

static VALUES: [SettingValueMapper; 32] = {
    let [library_first, library_rest] = LIBRARY;
    let [resource_first, resource_rest] = RESOURCE;
    let [variables_first, variables_rest] = VARIABLES;
    let [metadata_first, metadata_rest] = METADATA;
    let [suite_setup_first, suite_setup_rest] = SUITE_SETUP;
    let [suite_teardown_first, suite_teardown_rest] = SUITE_TEARDOWN;
    let [test_setup_first, test_setup_rest] = TEST_SETUP;
    let [test_teardown_first, test_teardown_rest] = TEST_TEARDOWN;
    let [task_setup_first, task_setup_rest] = task(TASK_SETUP);
    let [task_teardown_first, task_teardown_rest] = task(TASK_TEARDOWN);
    let [test_template_first, test_template_rest] = TEST_TEMPLATE;
    let [task_template_first, task_template_rest] = task(TASK_TEMPLATE);
    let [test_timeout_first, test_timeout_rest] = TEST_TIMEOUT;
    let [task_timeout_first, task_timeout_rest] = task(TASK_TIMEOUT);
    [
        library_first,
        library_rest,
        resource_first,
        resource_rest,
        variables_first,
        variables_rest,
        all_alike!(
            "documentation",
            SuiteDocumentation,
            SettingDocumentation,
            (SettingDocumentation, SettingDocumentationText)
        ),
        metadata_first,
        metadata_rest,
        suite_setup_first,
        suite_setup_rest,
        suite_teardown_first,
        suite_teardown_rest,
        test_setup_first,
        test_setup_rest,
        test_teardown_first,
        test_teardown_rest,
        task_setup_first,
        task_setup_rest,
        task_teardown_first,
        task_teardown_rest,
        all_alike!(
            "force tags",
            ForceTags,
            SettingForceTags,
            (SettingForceTagsTagName, SettingForceTag)
        ),
        all_alike!(
            "default tags",
            DefaultTags,
            SettingDefaultTags,
            (SettingDefaultTagsTagName, SettingDefaultTag)
        ),
        test_template_first,
        test_template_rest,
        task_template_first,
        task_template_rest,
        test_timeout_first,
        test_timeout_rest,
        task_timeout_first,
        task_timeout_rest,
        all_alike!(
            "unknown setting",
            SettingsUnknown,
            SettingUnknown,
            (SettingUnknownTrashElement, SettingUnknownArgument)
        ),
    ]
};

/// Every settings-table mapper, declaration mappers first.
pub(crate) fn mappers() -> impl Iterator<Item = &'static dyn ElementMapper> {
    let fixed: [&'static dyn ElementMapper; 4] = [
        &SettingDeclarationMapper,
        &UnknownSettingMapper,
        &LibraryAliasMapper,
        &LibraryAliasValueMapper,
    ];
    fixed
        .into_iter()
        .chain(VALUES.iter().map(|mapper| mapper as &'static dyn ElementMapper))
}
