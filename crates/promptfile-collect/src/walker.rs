//! JWalk-based depth-first directory walker.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use promptfile_core::{CollectError, IgnoreMatcher, WalkWarning};

/// A file that survived the ignore rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path relative to the walk root.
    pub relative_path: String,
    /// Path used to open the file.
    pub absolute_path: PathBuf,
}

/// Counters and warnings from a finished walk.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    /// Files skipped because their name matched a pattern.
    pub ignored_files: u64,
    /// Directories skipped, with everything below them.
    pub pruned_dirs: u64,
    /// Directories that could not be listed.
    pub warnings: Vec<WalkWarning>,
}

/// Depth-first walker that prunes ignored names before descending.
pub struct DirectoryWalker {
    matcher: IgnoreMatcher,
    skip_path: Option<PathBuf>,
}

impl DirectoryWalker {
    /// Create a walker using the given ignore rules.
    pub fn new(matcher: IgnoreMatcher) -> Self {
        Self {
            matcher,
            skip_path: None,
        }
    }

    /// Never visit this exact path, e.g. the file being written to.
    pub fn with_skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_path = Some(path.into());
        self
    }

    /// Walk `root` and call `visit` for every surviving file, in order.
    ///
    /// Siblings are visited in name order and a directory's contents follow
    /// the directory itself. Directories that cannot be listed are recorded
    /// as warnings and the walk carries on. An error from `visit` stops the
    /// walk and is returned.
    pub fn walk<F>(&self, root: &Path, mut visit: F) -> Result<WalkReport, CollectError>
    where
        F: FnMut(WalkedFile) -> Result<(), CollectError>,
    {
        let pruned_dirs = Arc::new(AtomicU64::new(0));
        let ignored_files = Arc::new(AtomicU64::new(0));

        let walker = {
            let matcher = self.matcher.clone();
            let pruned_dirs = Arc::clone(&pruned_dirs);
            let ignored_files = Arc::clone(&ignored_files);

            WalkDir::new(root)
                .parallelism(Parallelism::Serial)
                .skip_hidden(false)
                .follow_links(false)
                .sort(true)
                .process_read_dir(move |depth, dir_path, _state, children| {
                    // The first call carries only the root entry itself, whose
                    // name is never matched.
                    if depth.is_none() {
                        return;
                    }
                    children.retain(|child| {
                        let Ok(entry) = child else {
                            return true;
                        };
                        let Some(pattern) = matcher.matching_pattern(&entry.file_name) else {
                            return true;
                        };

                        let path = dir_path.join(&entry.file_name);
                        if entry.file_type().is_dir() {
                            pruned_dirs.fetch_add(1, Ordering::Relaxed);
                            debug!(path = %path.display(), pattern, "pruned directory");
                        } else {
                            ignored_files.fetch_add(1, Ordering::Relaxed);
                            debug!(path = %path.display(), pattern, "ignored file");
                        }
                        false
                    });
                })
        };

        let mut report = WalkReport::default();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warn!(path = %path.display(), error = %err, "cannot list directory, skipping");
                    report.warnings.push(WalkWarning::new(path, err.to_string()));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                if let Some(err) = &entry.read_children_error {
                    let path = entry.path();
                    warn!(path = %path.display(), error = %err, "cannot list directory, skipping");
                    report.warnings.push(WalkWarning::new(path, err.to_string()));
                }
                continue;
            }

            let path = entry.path();

            // Symlinks are never descended. Any other link is handed on like a
            // file, so a dangling one renders as a read error.
            if file_type.is_symlink() && path.is_dir() {
                debug!(path = %path.display(), "skipping symlink to directory");
                continue;
            }

            if self.skip_path.as_deref() == Some(path.as_path()) {
                debug!(path = %path.display(), "skipping output file");
                continue;
            }

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path.as_path())
                .to_string_lossy()
                .into_owned();

            visit(WalkedFile {
                relative_path,
                absolute_path: path,
            })?;
        }

        report.pruned_dirs = pruned_dirs.load(Ordering::Relaxed);
        report.ignored_files = ignored_files.load(Ordering::Relaxed);

        Ok(report)
    }
}
