//! Directory collection engine for promptfile.
//!
//! This crate walks a directory tree depth-first, skips every file and
//! directory whose name matches an ignore pattern, and renders each remaining
//! file as a block of text that is handed to a sink straight away.
//!
//! # Overview
//!
//! - **Walking** via jwalk in serial mode, with ignored directories pruned
//!   before they are read
//! - **Rendering** each file as a `File: <path>` header followed by its text,
//!   or by an error line when the file cannot be decoded
//! - **Sinks** that append blocks to a file or print them to stdout
//!
//! # Example
//!
//! ```rust,no_run
//! use promptfile_collect::{CollectConfig, Collector, OutputTarget};
//!
//! let config = CollectConfig::new("/path/to/project").with_output(OutputTarget::Stdout);
//! let summary = Collector::new(config).unwrap().run().unwrap();
//!
//! eprintln!("Collected {} files", summary.files_collected);
//! ```
//!
//! # Custom sinks
//!
//! Anything implementing [`Sink`] can receive blocks:
//!
//! ```rust,no_run
//! use promptfile_collect::{Block, CollectConfig, Collector, Sink};
//!
//! struct Headers(Vec<String>);
//!
//! impl Sink for Headers {
//!     fn accept(&mut self, block: &Block) -> std::io::Result<usize> {
//!         self.0.push(block.relative_path.clone());
//!         Ok(0)
//!     }
//! }
//!
//! let mut headers = Headers(Vec::new());
//! let collector = Collector::new(CollectConfig::new(".")).unwrap();
//! collector.collect_into(&mut headers, None).unwrap();
//! ```

mod collector;
mod render;
mod sink;
mod summary;
mod walker;

pub use collector::Collector;
pub use render::{read_text, render};
pub use sink::{FileSink, Sink, StreamSink};
pub use summary::CollectSummary;
pub use walker::{DirectoryWalker, WalkReport, WalkedFile};

// Re-export core types for convenience
pub use promptfile_core::{
    Block, BlockBody, CollectConfig, CollectError, DEFAULT_IGNORE_PATTERNS, DEFAULT_OUTPUT_FILE,
    IgnoreMatcher, OutputTarget, ReadFailure, WalkWarning,
};
