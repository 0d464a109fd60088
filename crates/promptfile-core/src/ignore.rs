//! Name-based ignore rules.

use std::ffi::OsStr;
use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::CollectError;

/// Patterns skipped unless a config supplies its own list.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "*test*",
    ".*",
    "node_modules",
    "package-lock.json",
    "build",
    "dist",
    "target",
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.egg-info",
    "*.egg",
    "*.svg",
    "*.log",
    "*.sqlite3",
    "*.db",
    "env",
    ".env",
    ".venv",
    "venv",
    "LICENSE",
    "*bruno*",
    "poetry.lock",
];

/// Matches bare file and directory names against shell-style globs.
///
/// Only single names are ever tested, so `*` never has to cross a separator
/// and patterns carry no notion of a parent directory. Matching is
/// case-sensitive and a leading `.` is an ordinary character.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    patterns: Vec<String>,
    set: GlobSet,
}

impl IgnoreMatcher {
    /// Compile a matcher from a list of patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self, CollectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(false)
                .literal_separator(true)
                .build()
                .map_err(|source| CollectError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
            kept.push(pattern.to_string());
        }

        let set = builder.build().map_err(|source| CollectError::InvalidPattern {
            pattern: kept.join(", "),
            source,
        })?;

        Ok(Self {
            patterns: kept,
            set,
        })
    }

    /// Matcher for the compiled-in pattern list.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_IGNORE_PATTERNS)
            .unwrap_or_else(|e| unreachable!("default ignore patterns must compile: {e}"))
    }

    /// Check if a bare name matches any pattern.
    pub fn is_ignored(&self, name: impl AsRef<OsStr>) -> bool {
        self.set.is_match(Path::new(name.as_ref()))
    }

    /// First pattern that matches a bare name.
    pub fn matching_pattern(&self, name: impl AsRef<OsStr>) -> Option<&str> {
        self.set
            .matches(Path::new(name.as_ref()))
            .into_iter()
            .min()
            .map(|idx| self.patterns[idx].as_str())
    }

    /// Patterns in configuration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for IgnoreMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
