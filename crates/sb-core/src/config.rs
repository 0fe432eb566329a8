//! Configuration for a SpecBook invocation.

use crate::format::RecordFormat;

/// Settings resolved once at startup and passed to every operation.
#[derive(Debug, Clone)]
pub struct BookConfig {
    /// Format of spec files.
    pub format: RecordFormat,
    /// How many answers the operator gets during interactive selection (1-10).
    pub max_attempts: u32,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            format: RecordFormat::Yaml,
            max_attempts: 3,
        }
    }
}

impl BookConfig {
    /// Set the spec file format.
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the selection attempt budget (clamped to 1-10).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.clamp(1, 10);
        self
    }
}
