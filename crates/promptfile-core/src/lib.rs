//! Core types for promptfile.
//!
//! This crate provides the data structures shared by the collector and the
//! command line front end: run configuration, the ignore matcher, rendered
//! blocks, and error types.

mod block;
mod config;
mod error;
mod ignore;

pub use block::{Block, BlockBody};
pub use config::{CollectConfig, CollectConfigBuilder, DEFAULT_OUTPUT_FILE, OutputTarget};
pub use error::{CollectError, ReadFailure, WalkWarning};
pub use ignore::{DEFAULT_IGNORE_PATTERNS, IgnoreMatcher};
