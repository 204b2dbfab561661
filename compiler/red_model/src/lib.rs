//! Document model of Robot Framework suite and resource files.
//!
//! A [`RobotFile`] owns one table per section kind:
//!
//! - [`SettingTable`]: imports, suite documentation, metadata, setups, tags
//! - [`VariableTable`]: scalar, list and dictionary variables
//! - [`UnitTable`]: test cases, tasks or user keywords, each an
//!   [`ExecutableUnit`] of [`LocalSetting`]s and [`RobotExecutableRow`]s
//!
//! Every element keeps the tokens it was built from, positions included, so
//! writers can put unchanged text back exactly where it was. Elements expose
//! their tokens by [`TokenRole`] for writers that have to place new cells.
//!
//! The parser fills the model top to bottom. Afterwards the model is plain
//! data: edit it through the element methods, or build one from scratch with
//! the table factories.

pub mod analysis;
mod descriptor;
mod element;
mod error;
mod file;
mod header;
mod local_setting;
mod model_type;
mod row;
mod settings;
mod unit;
mod unit_kind;
mod variables;

pub use descriptor::{
    is_for_continue, is_for_declaration, is_for_end, is_in_token, RowDescriptor, RowType,
};
pub use element::{tagged, CommentHolder, ModelElement};
pub use error::ModelError;
pub use file::{ElementPath, RobotFile, RobotFileOutput, Status};
pub use header::TableHeader;
pub use local_setting::LocalSetting;
pub use model_type::{ModelType, RoleToken, TokenRole};
pub use row::RobotExecutableRow;
pub use settings::{
    join_documentation, setting_model_type, DocumentationView, DocumentationViewMut, Import,
    ImportKind, KeywordCallSetting, LibraryAlias, Metadata, SettingTable, SuiteDocumentation,
    TagsSetting, TemplateSetting, TimeoutSetting, UnknownSetting,
};
pub use unit::{ExecutableUnit, UnitElement, UnitTable};
pub use unit_kind::UnitKind;
pub use variables::{DictionaryItem, Variable, VariableTable, VariableType};
