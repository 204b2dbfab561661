//! Core vocabulary for the RED Robot Framework parser.
//!
//! This crate holds the leaf types every other stage shares:
//!
//! - [`RobotVersion`]: the Robot Framework version grammar selection is gated on
//! - [`RobotTokenType`]: semantic token tags with their spellings and version windows
//! - [`RobotToken`]: one cell of text with position and type tags
//! - [`RobotLine`], [`Separator`], [`LineElement`]: the physical line layout
//! - [`FileFormat`], [`EndOfLine`]: file-level format choices
//!
//! # Positions
//!
//! Lines are 1-based, columns and offsets are 0-based byte indices. Tokens that
//! were created programmatically have no position; writers place them by role.

mod format;
mod line;
mod position;
mod token;
mod token_type;
mod version;

pub use format::FileFormat;
pub use line::{EndOfLine, LineElement, RobotLine, Separator, SeparatorType};
pub use position::FilePosition;
pub use token::{RobotToken, TokenFlags, TokenTypes};
pub use token_type::{Representation, RobotTokenType, TokenTable};
pub use version::{RobotVersion, VersionParseError};
