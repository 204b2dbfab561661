//! The settings table.
//!
//! Every kind of setting lives in its own list. Declaring a setting twice
//! produces two list entries; validation reports the duplicate, the model just
//! keeps both so they dump back where they were.

mod documentation;
mod elements;

pub use documentation::{join_documentation, DocumentationView, DocumentationViewMut};
pub(crate) use elements::declaration_token;
pub use elements::{
    Import, ImportKind, KeywordCallSetting, LibraryAlias, Metadata, SuiteDocumentation,
    TagsSetting, TemplateSetting, TimeoutSetting, UnknownSetting,
};

use red_ir::RobotTokenType;

use crate::{CommentHolder, ModelElement, ModelType, TableHeader};

/// Settings table of one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingTable {
    headers: Vec<TableHeader>,
    imports: Vec<Import>,
    documentation: Vec<SuiteDocumentation>,
    metadata: Vec<Metadata>,
    suite_setups: Vec<KeywordCallSetting>,
    suite_teardowns: Vec<KeywordCallSetting>,
    test_setups: Vec<KeywordCallSetting>,
    test_teardowns: Vec<KeywordCallSetting>,
    task_setups: Vec<KeywordCallSetting>,
    task_teardowns: Vec<KeywordCallSetting>,
    force_tags: Vec<TagsSetting>,
    default_tags: Vec<TagsSetting>,
    test_templates: Vec<TemplateSetting>,
    task_templates: Vec<TemplateSetting>,
    test_timeouts: Vec<TimeoutSetting>,
    task_timeouts: Vec<TimeoutSetting>,
    unknown: Vec<UnknownSetting>,
}

macro_rules! list_accessors {
    ($($field:ident, $field_mut:ident: $ty:ty;)*) => {
        $(
            pub fn $field(&self) -> &[$ty] {
                &self.$field
            }

            pub fn $field_mut(&mut self) -> &mut Vec<$ty> {
                &mut self.$field
            }
        )*
    };
}

impl SettingTable {
    list_accessors! {
        headers, headers_mut: TableHeader;
        imports, imports_mut: Import;
        metadata, metadata_mut: Metadata;
        suite_setups, suite_setups_mut: KeywordCallSetting;
        suite_teardowns, suite_teardowns_mut: KeywordCallSetting;
        test_setups, test_setups_mut: KeywordCallSetting;
        test_teardowns, test_teardowns_mut: KeywordCallSetting;
        task_setups, task_setups_mut: KeywordCallSetting;
        task_teardowns, task_teardowns_mut: KeywordCallSetting;
        force_tags, force_tags_mut: TagsSetting;
        default_tags, default_tags_mut: TagsSetting;
        test_templates, test_templates_mut: TemplateSetting;
        task_templates, task_templates_mut: TemplateSetting;
        test_timeouts, test_timeouts_mut: TimeoutSetting;
        task_timeouts, task_timeouts_mut: TimeoutSetting;
        unknown, unknown_mut: UnknownSetting;
    }

    /// Whether the file declares this table.
    pub fn is_present(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Physical `Documentation` declarations, one per source declaration.
    pub fn documentation_declarations(&self) -> &[SuiteDocumentation] {
        &self.documentation
    }

    pub fn documentation_declarations_mut(&mut self) -> &mut Vec<SuiteDocumentation> {
        &mut self.documentation
    }

    /// All documentation text as one logical documentation.
    pub fn documentation(&self) -> DocumentationView<'_> {
        DocumentationView::new(&self.documentation)
    }

    pub fn documentation_mut(&mut self) -> DocumentationViewMut<'_> {
        DocumentationViewMut::new(&mut self.documentation)
    }

    pub fn libraries(&self) -> impl Iterator<Item = &Import> {
        self.imports
            .iter()
            .filter(|import| import.kind() == ImportKind::Library)
    }

    /// Setups and teardowns of `model_type`.
    pub fn keyword_calls(&self, model_type: ModelType) -> &[KeywordCallSetting] {
        match model_type {
            ModelType::SuiteSetup => &self.suite_setups,
            ModelType::SuiteTeardown => &self.suite_teardowns,
            ModelType::TestSetup => &self.test_setups,
            ModelType::TestTeardown => &self.test_teardowns,
            ModelType::TaskSetup => &self.task_setups,
            ModelType::TaskTeardown => &self.task_teardowns,
            _ => &[],
        }
    }

    pub fn keyword_calls_mut(
        &mut self,
        model_type: ModelType,
    ) -> Option<&mut Vec<KeywordCallSetting>> {
        match model_type {
            ModelType::SuiteSetup => Some(&mut self.suite_setups),
            ModelType::SuiteTeardown => Some(&mut self.suite_teardowns),
            ModelType::TestSetup => Some(&mut self.test_setups),
            ModelType::TestTeardown => Some(&mut self.test_teardowns),
            ModelType::TaskSetup => Some(&mut self.task_setups),
            ModelType::TaskTeardown => Some(&mut self.task_teardowns),
            _ => None,
        }
    }

    pub fn tags_mut(&mut self, model_type: ModelType) -> Option<&mut Vec<TagsSetting>> {
        match model_type {
            ModelType::ForceTags => Some(&mut self.force_tags),
            ModelType::DefaultTags => Some(&mut self.default_tags),
            _ => None,
        }
    }

    pub fn templates_mut(&mut self, model_type: ModelType) -> Option<&mut Vec<TemplateSetting>> {
        match model_type {
            ModelType::TestTemplate => Some(&mut self.test_templates),
            ModelType::TaskTemplate => Some(&mut self.task_templates),
            _ => None,
        }
    }

    pub fn timeouts_mut(&mut self, model_type: ModelType) -> Option<&mut Vec<TimeoutSetting>> {
        match model_type {
            ModelType::TestTimeout => Some(&mut self.test_timeouts),
            ModelType::TaskTimeout => Some(&mut self.task_timeouts),
            _ => None,
        }
    }

    /// Appends a new import declared with its preferred spelling.
    pub fn new_import(&mut self, kind: ImportKind) -> &mut Import {
        let ty = match kind {
            ImportKind::Library => RobotTokenType::SettingLibraryDeclaration,
            ImportKind::Resource => RobotTokenType::SettingResourceDeclaration,
            ImportKind::Variables => RobotTokenType::SettingVariablesDeclaration,
        };
        push(&mut self.imports, Import::new(kind, declaration_token(ty)))
    }

    pub fn new_documentation(&mut self) -> &mut SuiteDocumentation {
        let declaration = declaration_token(RobotTokenType::SettingDocumentationDeclaration);
        push(&mut self.documentation, SuiteDocumentation::new(declaration))
    }

    pub fn new_metadata(&mut self) -> &mut Metadata {
        let declaration = declaration_token(RobotTokenType::SettingMetadataDeclaration);
        push(&mut self.metadata, Metadata::new(declaration))
    }

    pub fn new_suite_setup(&mut self) -> &mut KeywordCallSetting {
        self.new_keyword_call(ModelType::SuiteSetup, RobotTokenType::SettingSuiteSetupDeclaration)
    }

    pub fn new_suite_teardown(&mut self) -> &mut KeywordCallSetting {
        self.new_keyword_call(
            ModelType::SuiteTeardown,
            RobotTokenType::SettingSuiteTeardownDeclaration,
        )
    }

    pub fn new_test_setup(&mut self) -> &mut KeywordCallSetting {
        self.new_keyword_call(ModelType::TestSetup, RobotTokenType::SettingTestSetupDeclaration)
    }

    pub fn new_test_teardown(&mut self) -> &mut KeywordCallSetting {
        self.new_keyword_call(
            ModelType::TestTeardown,
            RobotTokenType::SettingTestTeardownDeclaration,
        )
    }

    pub fn new_force_tags(&mut self) -> &mut TagsSetting {
        let declaration = declaration_token(RobotTokenType::SettingForceTagsDeclaration);
        push(&mut self.force_tags, TagsSetting::new(ModelType::ForceTags, declaration))
    }

    pub fn new_default_tags(&mut self) -> &mut TagsSetting {
        let declaration = declaration_token(RobotTokenType::SettingDefaultTagsDeclaration);
        push(&mut self.default_tags, TagsSetting::new(ModelType::DefaultTags, declaration))
    }

    pub fn new_test_template(&mut self) -> &mut TemplateSetting {
        let declaration = declaration_token(RobotTokenType::SettingTestTemplateDeclaration);
        push(
            &mut self.test_templates,
            TemplateSetting::new(ModelType::TestTemplate, declaration),
        )
    }

    pub fn new_test_timeout(&mut self) -> &mut TimeoutSetting {
        let declaration = declaration_token(RobotTokenType::SettingTestTimeoutDeclaration);
        push(
            &mut self.test_timeouts,
            TimeoutSetting::new(ModelType::TestTimeout, declaration),
        )
    }

    fn new_keyword_call(
        &mut self,
        model_type: ModelType,
        ty: RobotTokenType,
    ) -> &mut KeywordCallSetting {
        let setting = KeywordCallSetting::new(model_type, declaration_token(ty));
        match model_type {
            ModelType::SuiteSetup => push(&mut self.suite_setups, setting),
            ModelType::SuiteTeardown => push(&mut self.suite_teardowns, setting),
            ModelType::TestSetup => push(&mut self.test_setups, setting),
            ModelType::TaskSetup => push(&mut self.task_setups, setting),
            ModelType::TaskTeardown => push(&mut self.task_teardowns, setting),
            _ => push(&mut self.test_teardowns, setting),
        }
    }

    /// Every element in a fixed kind order; within a kind, in list order.
    pub fn elements(&self) -> Vec<&dyn ModelElement> {
        let mut elements: Vec<&dyn ModelElement> = Vec::new();
        extend(&mut elements, &self.imports);
        extend(&mut elements, &self.documentation);
        extend(&mut elements, &self.metadata);
        extend(&mut elements, &self.suite_setups);
        extend(&mut elements, &self.suite_teardowns);
        extend(&mut elements, &self.test_setups);
        extend(&mut elements, &self.test_teardowns);
        extend(&mut elements, &self.task_setups);
        extend(&mut elements, &self.task_teardowns);
        extend(&mut elements, &self.force_tags);
        extend(&mut elements, &self.default_tags);
        extend(&mut elements, &self.test_templates);
        extend(&mut elements, &self.task_templates);
        extend(&mut elements, &self.test_timeouts);
        extend(&mut elements, &self.task_timeouts);
        extend(&mut elements, &self.unknown);
        elements
    }

    /// Element at `index` of the list holding `model_type` settings.
    pub fn comment_holder_mut(
        &mut self,
        model_type: ModelType,
        index: usize,
    ) -> Option<&mut dyn CommentHolder> {
        fn at<T: CommentHolder>(list: &mut [T], index: usize) -> Option<&mut dyn CommentHolder> {
            list.get_mut(index).map(|e| e as &mut dyn CommentHolder)
        }
        match model_type {
            ModelType::LibraryImport | ModelType::ResourceImport | ModelType::VariablesImport => {
                at(&mut self.imports, index)
            }
            ModelType::SuiteDocumentation => at(&mut self.documentation, index),
            ModelType::Metadata => at(&mut self.metadata, index),
            ModelType::ForceTags | ModelType::DefaultTags => {
                self.tags_mut(model_type).and_then(|list| at(list, index))
            }
            ModelType::TestTemplate | ModelType::TaskTemplate => {
                self.templates_mut(model_type).and_then(|list| at(list, index))
            }
            ModelType::TestTimeout | ModelType::TaskTimeout => {
                self.timeouts_mut(model_type).and_then(|list| at(list, index))
            }
            ModelType::SettingsUnknown => at(&mut self.unknown, index),
            _ => self
                .keyword_calls_mut(model_type)
                .and_then(|list| at(list, index)),
        }
    }
}

fn push<T>(list: &mut Vec<T>, element: T) -> &mut T {
    list.push(element);
    let last = list.len() - 1;
    &mut list[last]
}

fn extend<'a, T: ModelElement>(elements: &mut Vec<&'a dyn ModelElement>, list: &'a [T]) {
    elements.extend(list.iter().map(|e| e as &dyn ModelElement));
}

/// Model kind of a settings-table declaration token type.
pub fn setting_model_type(declaration: RobotTokenType) -> Option<ModelType> {
    use RobotTokenType as T;
    Some(match declaration {
        T::SettingLibraryDeclaration => ModelType::LibraryImport,
        T::SettingResourceDeclaration => ModelType::ResourceImport,
        T::SettingVariablesDeclaration => ModelType::VariablesImport,
        T::SettingDocumentationDeclaration => ModelType::SuiteDocumentation,
        T::SettingMetadataDeclaration => ModelType::Metadata,
        T::SettingSuiteSetupDeclaration => ModelType::SuiteSetup,
        T::SettingSuiteTeardownDeclaration => ModelType::SuiteTeardown,
        T::SettingTestSetupDeclaration => ModelType::TestSetup,
        T::SettingTestTeardownDeclaration => ModelType::TestTeardown,
        T::SettingTaskSetupDeclaration => ModelType::TaskSetup,
        T::SettingTaskTeardownDeclaration => ModelType::TaskTeardown,
        T::SettingForceTagsDeclaration => ModelType::ForceTags,
        T::SettingDefaultTagsDeclaration => ModelType::DefaultTags,
        T::SettingTestTemplateDeclaration => ModelType::TestTemplate,
        T::SettingTaskTemplateDeclaration => ModelType::TaskTemplate,
        T::SettingTestTimeoutDeclaration => ModelType::TestTimeout,
        T::SettingTaskTimeoutDeclaration => ModelType::TaskTimeout,
        _ => return None,
    })
}

#[cfg(test)]
mod tests;
