//! Capabilities shared by every model element.

use red_ir::{FilePosition, RobotToken, RobotTokenType};

use crate::{ModelType, RoleToken};

/// A table element owning a declaration token plus role-tagged cells.
pub trait ModelElement {
    fn model_type(&self) -> ModelType;

    fn declaration(&self) -> &RobotToken;

    /// Every token of the element in storage order, each tagged with its role.
    fn role_tokens(&self) -> Vec<RoleToken<'_>>;

    fn element_tokens(&self) -> Vec<&RobotToken> {
        self.role_tokens().into_iter().map(|rt| rt.token).collect()
    }

    /// Whether the element was created from text or explicitly by a factory.
    fn is_present(&self) -> bool {
        !self.declaration().text().is_empty()
    }

    fn begin_position(&self) -> Option<FilePosition> {
        self.element_tokens()
            .into_iter()
            .filter_map(RobotToken::position)
            .min()
    }
}

/// Elements that accept trailing `#` comment cells.
pub trait CommentHolder {
    fn comment(&self) -> &[RobotToken];

    fn add_comment_part(&mut self, token: RobotToken);
}

/// Token types that keep their primary slot when a token gets a role type.
const MARKER_TYPES: [RobotTokenType; 7] = [
    RobotTokenType::Comment,
    RobotTokenType::ForToken,
    RobotTokenType::InToken,
    RobotTokenType::ForContinueToken,
    RobotTokenType::ForEndToken,
    RobotTokenType::PreviousLineContinue,
    RobotTokenType::SettingLibraryAlias,
];

/// Gives `token` the role type `ty`.
///
/// Plain cells get `ty` as their primary type. Cells that carry a syntax
/// marker (`#`, `FOR`, `\`, ...) keep the marker first and get `ty` after it.
pub fn tagged(mut token: RobotToken, ty: RobotTokenType) -> RobotToken {
    token.remove_type(RobotTokenType::Unknown);
    if MARKER_TYPES.contains(&token.primary_type()) {
        token.add_type(ty);
    } else {
        token.insert_type_first(ty);
    }
    token
}

/// Turns `token` into a comment cell.
pub(crate) fn commented(mut token: RobotToken) -> RobotToken {
    token.remove_type(RobotTokenType::Unknown);
    token.insert_type_first(RobotTokenType::Comment);
    token
}

/// Replaces the role type of `token`, keeping only variable tags besides it.
pub(crate) fn retyped(token: &mut RobotToken, ty: RobotTokenType) {
    let uses_variable = token.has_type(RobotTokenType::VariableUsage);
    token.set_type(ty);
    if uses_variable {
        token.add_type(RobotTokenType::VariableUsage);
    }
}

macro_rules! impl_comment_holder {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::CommentHolder for $ty {
                fn comment(&self) -> &[red_ir::RobotToken] {
                    &self.comment
                }

                fn add_comment_part(&mut self, token: red_ir::RobotToken) {
                    self.comment.push($crate::element::commented(token));
                }
            }
        )*
    };
}

pub(crate) use impl_comment_holder;
