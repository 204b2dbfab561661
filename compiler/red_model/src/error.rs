//! Errors raised by model edit commands.

use thiserror::Error;

/// An edit request the model cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The declaration cell of a local setting is neither created nor removed
    /// by cell edits; rename it with `update_token(0, ..)` instead.
    #[error("the declaration cell of `{setting}` cannot be inserted or removed")]
    DeclarationCellLocked { setting: String },

    /// A local setting was renamed to text that is not `[Something]`.
    #[error("`{text}` is not a local setting declaration")]
    NotASettingDeclaration { text: String },
}
