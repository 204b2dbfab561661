//! Robot tokens.
//!
//! A token is one cell of a Robot Framework line: its raw text, where it was
//! read from (if it was read at all), and an ordered list of semantic types.
//! The first type is the primary one; later types record what else the
//! recognizers saw in the same text.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::{FilePosition, RobotTokenType};

bitflags! {
    /// Per-token state flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Text changed after the token was read from the file.
        const DIRTY = 1 << 0;
        /// A model element holds a copy of this cell.
        const OWNED = 1 << 1;
    }
}

/// Ordered type tags of a token. Two inline slots cover nearly every token.
pub type TokenTypes = SmallVec<[RobotTokenType; 2]>;

/// One cell of a Robot Framework line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotToken {
    text: String,
    position: Option<FilePosition>,
    types: TokenTypes,
    flags: TokenFlags,
}

impl Default for RobotToken {
    fn default() -> Self {
        RobotToken::new()
    }
}

impl RobotToken {
    /// Empty, unpositioned token of type `Unknown`.
    pub fn new() -> Self {
        let mut types = TokenTypes::new();
        types.push(RobotTokenType::Unknown);
        RobotToken {
            text: String::new(),
            position: None,
            types,
            flags: TokenFlags::empty(),
        }
    }

    /// Unpositioned token of type `Unknown`.
    pub fn create(text: impl Into<String>) -> Self {
        let mut token = RobotToken::new();
        token.text = text.into();
        token
    }

    /// Unpositioned token with a single type.
    pub fn create_with_type(text: impl Into<String>, ty: RobotTokenType) -> Self {
        let mut token = RobotToken::create(text);
        token.set_type(ty);
        token
    }

    /// Token read from `line`/`column` with a single type.
    pub fn create_positioned(
        text: impl Into<String>,
        position: FilePosition,
        ty: RobotTokenType,
    ) -> Self {
        let mut token = RobotToken::create_with_type(text, ty);
        token.position = Some(position);
        token
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text, marking the token dirty when it actually changes.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.flags.insert(TokenFlags::DIRTY);
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.flags.contains(TokenFlags::DIRTY)
    }

    /// Whether the parser gave this cell to a model element.
    #[inline]
    pub fn is_owned(&self) -> bool {
        self.flags.contains(TokenFlags::OWNED)
    }

    pub fn mark_owned(&mut self) {
        self.flags.insert(TokenFlags::OWNED);
    }

    #[inline]
    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    #[inline]
    pub fn position(&self) -> Option<FilePosition> {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: FilePosition) {
        self.position = Some(position);
    }

    /// Forgets where the token came from, making it a "new" token for writers.
    #[inline]
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    pub fn line_number(&self) -> Option<u32> {
        self.position.map(|p| p.line)
    }

    pub fn start_column(&self) -> Option<u32> {
        self.position.map(|p| p.column)
    }

    /// Exclusive end column, in bytes.
    pub fn end_column(&self) -> Option<u32> {
        self.position.map(|p| p.column + text_len(&self.text))
    }

    pub fn start_offset(&self) -> Option<u32> {
        self.position.map(|p| p.offset)
    }

    #[inline]
    pub fn types(&self) -> &[RobotTokenType] {
        &self.types
    }

    /// Primary (first) type.
    pub fn primary_type(&self) -> RobotTokenType {
        self.types.first().copied().unwrap_or(RobotTokenType::Unknown)
    }

    #[inline]
    pub fn has_type(&self, ty: RobotTokenType) -> bool {
        self.types.contains(&ty)
    }

    /// Replaces all types with `ty`.
    pub fn set_type(&mut self, ty: RobotTokenType) {
        self.types.clear();
        self.types.push(ty);
    }

    /// Appends `ty` unless already present.
    pub fn add_type(&mut self, ty: RobotTokenType) {
        if !self.has_type(ty) {
            self.types.push(ty);
        }
    }

    /// Makes `ty` the primary type, keeping the remaining tags in order.
    pub fn insert_type_first(&mut self, ty: RobotTokenType) {
        self.types.retain(|t| *t != ty);
        self.types.insert(0, ty);
    }

    pub fn remove_type(&mut self, ty: RobotTokenType) {
        self.types.retain(|t| *t != ty);
    }

    /// Whether the text starts a `#` comment.
    pub fn is_comment_text(&self) -> bool {
        self.text.trim_start().starts_with('#')
    }

    /// Compares text and types, ignoring position and flags.
    pub fn content_eq(&self, other: &RobotToken) -> bool {
        self.text == other.text && self.types == other.types
    }
}

fn text_len(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
