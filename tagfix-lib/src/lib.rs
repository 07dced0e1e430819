//! `tagfix-lib` exposes the text-repair primitives that power the `tagfix`
//! CLI.
//!
//! The library loads a source file into an in-memory buffer, strips stray
//! whitespace around JSX-style tag delimiters (`< div` becomes `<div`,
//! `</div >` becomes `</div>`), and writes the result back out. You can use
//! it directly to repair strings or files without shelling out to the CLI.
//!
//! # Example
//!
//! ```rust
//! use tagfix_lib::{FixOptions, SourceBuffer};
//!
//! let mut buffer = SourceBuffer::new("< section>\n  hello\n</section >\n");
//! let outcome = buffer.fix(&FixOptions::default());
//!
//! assert_eq!(buffer.content(), "<section>\n  hello\n</section>\n");
//! assert_eq!(outcome.total(), 2);
//! ```

pub mod error;
pub mod normalizer;

pub use crate::error::FixError;
pub use crate::normalizer::{fix_tags, FixOptions, FixOutcome};

use std::fs;
use std::path::Path;

/// An in-memory copy of one source file's content.
///
/// The buffer is loaded in full, rewritten by [`fix`](SourceBuffer::fix),
/// and persisted back with [`write_to`](SourceBuffer::write_to). Decoding is
/// strict UTF-8, so every byte outside the rewritten matches survives the
/// round trip verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    content: String,
}

impl SourceBuffer {
    /// Wraps an already-loaded string.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Reads the file at `path` and decodes it as UTF-8.
    ///
    /// Returns [`FixError::Read`] when the file cannot be opened and
    /// [`FixError::Decode`] when its bytes are not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self, FixError> {
        let bytes = fs::read(path).map_err(|source| FixError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8(bytes).map_err(|err| FixError::Decode {
            path: path.to_path_buf(),
            offset: err.utf8_error().valid_up_to(),
        })?;

        Ok(Self { content })
    }

    /// Applies the whitespace-repair rules to the buffer in place and
    /// returns what was rewritten.
    pub fn fix(&mut self, options: &FixOptions) -> FixOutcome {
        let (fixed, outcome) = fix_tags(&self.content, options);
        self.content = fixed;
        outcome
    }

    /// The current buffer content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the buffer, returning its content.
    pub fn into_content(self) -> String {
        self.content
    }

    /// Writes the buffer to `path`, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> Result<(), FixError> {
        fs::write(path, &self.content).map_err(|source| FixError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
