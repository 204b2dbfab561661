//! Output sinks of the dumper.
//!
//! The dumper writes text and line terminators to an [`Emitter`]. The string
//! emitter builds the dump in memory; the file emitter streams it to disk
//! and reports the first write failure when finished.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use red_ir::EndOfLine;

use crate::DumpError;

/// Receiver of dumped text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a line terminator.
    fn emit_end_of_line(&mut self, eol: EndOfLine) {
        self.emit(eol.as_str());
    }
}

/// In-memory emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the dumped text.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Buffered emitter writing to a file.
pub struct FileEmitter {
    path: PathBuf,
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl FileEmitter {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> Result<Self, DumpError> {
        let file = File::create(path).map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            error: None,
        })
    }

    /// Flush the output; fails with the first error seen while writing.
    pub fn finish(mut self) -> Result<(), DumpError> {
        let result = match self.error.take() {
            Some(error) => Err(error),
            None => self.writer.flush(),
        };
        result.map_err(|source| DumpError::Io {
            path: self.path,
            source,
        })
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        if self.error.is_none() {
            if let Err(error) = self.writer.write_all(text.as_bytes()) {
                self.error = Some(error);
            }
        }
    }
}
