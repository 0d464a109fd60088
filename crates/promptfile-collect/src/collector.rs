//! Collection driver: walk, render, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use path_clean::PathClean;
use tracing::{debug, info};

use promptfile_core::{CollectConfig, CollectError, IgnoreMatcher, OutputTarget};

use crate::render::render;
use crate::sink::{FileSink, Sink, StreamSink};
use crate::summary::CollectSummary;
use crate::walker::DirectoryWalker;

/// Runs one collection over a directory tree.
pub struct Collector {
    config: CollectConfig,
    matcher: IgnoreMatcher,
}

impl Collector {
    /// Create a collector, compiling the configured ignore patterns.
    pub fn new(config: CollectConfig) -> Result<Self, CollectError> {
        let matcher = IgnoreMatcher::new(&config.ignore_patterns)?;
        Ok(Self { config, matcher })
    }

    /// Absolute, lexically normalized form of the configured root, checked
    /// to be a directory.
    pub fn resolve_root(&self) -> Result<PathBuf, CollectError> {
        let root = std::path::absolute(&self.config.root)
            .map_err(|e| CollectError::io(&self.config.root, e))?
            .clean();

        if !root.is_dir() {
            return Err(CollectError::NotADirectory { path: root });
        }

        Ok(root)
    }

    /// Collect into the configured output target.
    ///
    /// The root is validated before the output file is created, so an
    /// invalid root leaves any existing output untouched.
    pub fn run(&self) -> Result<CollectSummary, CollectError> {
        let root = self.resolve_root()?;

        match &self.config.output {
            OutputTarget::File(path) => {
                let mut sink = FileSink::create(path)?;
                let skip = sink
                    .path()
                    .canonicalize()
                    .map_err(|e| CollectError::io(sink.path(), e))?;
                let summary = self.collect_root(&root, &mut sink, Some(skip.as_path()))?;
                info!(path = %path.display(), "wrote output file");
                Ok(summary)
            }
            OutputTarget::Stdout => self.collect_root(&root, &mut StreamSink::stdout(), None),
        }
    }

    /// Collect into an arbitrary sink.
    ///
    /// `skip` names a file that must not be read, typically the one `sink`
    /// is writing to.
    pub fn collect_into<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        skip: Option<&Path>,
    ) -> Result<CollectSummary, CollectError> {
        let root = self.resolve_root()?;
        let skip = skip.map(|p| p.canonicalize().unwrap_or_else(|_| p.to_path_buf()));
        self.collect_root(&root, sink, skip.as_deref())
    }

    fn collect_root<S: Sink + ?Sized>(
        &self,
        root: &Path,
        sink: &mut S,
        skip: Option<&Path>,
    ) -> Result<CollectSummary, CollectError> {
        let start = Instant::now();
        let walk_root = root.canonicalize().map_err(|e| CollectError::io(root, e))?;
        debug!(root = %walk_root.display(), patterns = self.matcher.patterns().len(), "collecting");

        let mut walker = DirectoryWalker::new(self.matcher.clone());
        if let Some(skip) = skip {
            walker = walker.with_skip_path(skip);
        }

        let mut summary = CollectSummary::default();
        let report = walker.walk(&walk_root, |file| {
            let block = render(&file);
            let bytes = sink
                .accept(&block)
                .map_err(|source| CollectError::Output { source })?;
            summary.record_block(bytes, block.is_error());
            Ok(())
        })?;

        summary.absorb_walk(report);
        summary.elapsed = start.elapsed();

        info!(
            files = summary.files_collected,
            readable = summary.readable_files(),
            unreadable = summary.unreadable_files,
            ignored_files = summary.ignored_files,
            pruned_dirs = summary.pruned_dirs,
            warnings = summary.warnings.len(),
            size = %humansize::format_size(summary.bytes_written, humansize::BINARY),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "collection finished"
        );

        Ok(summary)
    }
}
