//! Collection configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ignore::DEFAULT_IGNORE_PATTERNS;

/// File name written in the working directory when collecting to a file.
pub const DEFAULT_OUTPUT_FILE: &str = "prompt.txt";

/// Where rendered blocks are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    /// Truncate the file at start, then append each block as it is rendered.
    File(PathBuf),
    /// Print each block to standard output.
    Stdout,
}

impl OutputTarget {
    /// Check if blocks go to standard output.
    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Path of the destination file, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdout => None,
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

/// Configuration for a collection run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CollectConfig {
    /// Root directory to collect.
    pub root: PathBuf,

    /// Glob patterns matched against bare file and directory names.
    #[builder(default = "default_ignore_patterns()")]
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    /// Destination for rendered blocks.
    #[builder(default)]
    #[serde(default)]
    pub output: OutputTarget,
}

fn default_ignore_patterns() -> Vec<String> {
    DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
}

impl CollectConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(OutputTarget::File(ref path)) = self.output {
            if path.as_os_str().is_empty() {
                return Err("Output file path cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl CollectConfig {
    /// Create a new collect config builder.
    pub fn builder() -> CollectConfigBuilder {
        CollectConfigBuilder::default()
    }

    /// Create a config for collecting a path with the compiled-in defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_patterns: default_ignore_patterns(),
            output: OutputTarget::default(),
        }
    }

    /// Replace the output target.
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
