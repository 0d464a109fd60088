//! Output sinks.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use promptfile_core::{Block, CollectError};

/// Destination that accepts rendered blocks in order.
pub trait Sink {
    /// Write one block, returning the number of bytes emitted.
    fn accept(&mut self, block: &Block) -> io::Result<usize>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn accept(&mut self, block: &Block) -> io::Result<usize> {
        (**self).accept(block)
    }
}

/// Appends each block, then a newline, to a file truncated at creation.
///
/// The file is flushed after every block so everything written so far is on
/// disk if the run dies part way.
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Create or truncate the destination file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, CollectError> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| CollectError::io(&path, e))?;
        Ok(Self { path, file })
    }

    /// Path the sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn accept(&mut self, block: &Block) -> io::Result<usize> {
        let text = format!("{block}\n");
        self.file.write_all(text.as_bytes())?;
        self.file.flush()?;
        Ok(text.len())
    }
}

/// Writes each block to a stream followed by a blank line.
pub struct StreamSink<W: Write> {
    writer: W,
}

impl StreamSink<Stdout> {
    /// Sink printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn accept(&mut self, block: &Block) -> io::Result<usize> {
        let text = format!("{block}\n");
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(text.len())
    }
}
