//! Rendered output blocks.

use std::fmt;

use crate::error::ReadFailure;

/// Header prefix that introduces every block.
const HEADER_PREFIX: &str = "File: ";

/// Prefix of the line that replaces content when a file cannot be read.
const ERROR_PREFIX: &str = "Error reading file: ";

/// Body of a block: the decoded text, or why it could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    Content(String),
    Error(String),
}

/// The rendered unit of output for one included file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Path relative to the collection root.
    pub relative_path: String,
    pub body: BlockBody,
}

impl Block {
    /// Block carrying the file's text.
    pub fn content(relative_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            body: BlockBody::Content(text.into()),
        }
    }

    /// Block carrying a read failure in place of the text.
    pub fn failed(relative_path: impl Into<String>, failure: &ReadFailure) -> Self {
        Self {
            relative_path: relative_path.into(),
            body: BlockBody::Error(failure.to_string()),
        }
    }

    /// Check if the file could not be read.
    pub fn is_error(&self) -> bool {
        matches!(self.body, BlockBody::Error(_))
    }

    /// The header line, without a newline.
    pub fn header(&self) -> String {
        format!("{HEADER_PREFIX}{}", self.relative_path)
    }

    /// Extract the relative path from a header line.
    pub fn parse_header(line: &str) -> Option<&str> {
        line.strip_prefix(HEADER_PREFIX)
    }
}

/// Header line, body, then an empty line, joined by `\n`.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        match &self.body {
            BlockBody::Content(text) => writeln!(f, "{text}"),
            BlockBody::Error(message) => writeln!(f, "{ERROR_PREFIX}{message}"),
        }
    }
}
