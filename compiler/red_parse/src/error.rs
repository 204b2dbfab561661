//! Parser errors.
//!
//! User text never produces one of these: anything the grammar does not
//! expect is kept as unknown or comment cells and reported through build
//! messages. Errors mean the file could not be read or the parser itself
//! lost track.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// A parser invariant broke, e.g. no mapper accepted a cell inside a table.
    #[error("internal parser state: {0}")]
    InternalState(String),

    #[error("cannot read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
